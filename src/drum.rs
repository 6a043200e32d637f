// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::KitError;
use crate::note::Note;

/// A drum voice the kit can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drum {
    Bass,
    Snare,
    Rimshot,
    HihatClosed,
    HihatOpen,
    HihatPedal,
    Crash,
    Ride,
    Splash,
    TomLo,
    TomLowMid,
    TomHighMid,
    TomHi,
    FloorTomLo,
    FloorTomHi,
}

impl Drum {
    /// Every voice, in header order.
    pub const ALL: [Drum; 15] = [
        Drum::Bass,
        Drum::Snare,
        Drum::Rimshot,
        Drum::HihatClosed,
        Drum::HihatOpen,
        Drum::HihatPedal,
        Drum::Crash,
        Drum::Ride,
        Drum::Splash,
        Drum::TomLo,
        Drum::TomLowMid,
        Drum::TomHighMid,
        Drum::TomHi,
        Drum::FloorTomLo,
        Drum::FloorTomHi,
    ];

    /// The identifier suffix used by the header constants, e.g. `HIHAT_C`.
    pub fn identifier(&self) -> &'static str {
        match self {
            Drum::Bass => "BASS",
            Drum::Snare => "SNARE",
            Drum::Rimshot => "RIMSHOT",
            Drum::HihatClosed => "HIHAT_C",
            Drum::HihatOpen => "HIHAT_O",
            Drum::HihatPedal => "HIHAT_P",
            Drum::Crash => "CRASH",
            Drum::Ride => "RIDE",
            Drum::Splash => "SPLASH",
            Drum::TomLo => "TOM_LO",
            Drum::TomLowMid => "TOM_LM",
            Drum::TomHighMid => "TOM_HM",
            Drum::TomHi => "TOM_HI",
            Drum::FloorTomLo => "TOM_F_LO",
            Drum::FloorTomHi => "TOM_F_HI",
        }
    }

    /// The snake_case name used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Drum::Bass => "bass",
            Drum::Snare => "snare",
            Drum::Rimshot => "rimshot",
            Drum::HihatClosed => "hihat_closed",
            Drum::HihatOpen => "hihat_open",
            Drum::HihatPedal => "hihat_pedal",
            Drum::Crash => "crash",
            Drum::Ride => "ride",
            Drum::Splash => "splash",
            Drum::TomLo => "tom_lo",
            Drum::TomLowMid => "tom_low_mid",
            Drum::TomHighMid => "tom_high_mid",
            Drum::TomHi => "tom_hi",
            Drum::FloorTomLo => "floor_tom_lo",
            Drum::FloorTomHi => "floor_tom_hi",
        }
    }

    /// The raw `PLAY_*` note number for this voice.
    pub fn play_raw(&self) -> u8 {
        match self {
            Drum::Bass => constants::PLAY_BASS,
            Drum::Snare => constants::PLAY_SNARE,
            Drum::Rimshot => constants::PLAY_RIMSHOT,
            Drum::HihatClosed => constants::PLAY_HIHAT_C,
            Drum::HihatOpen => constants::PLAY_HIHAT_O,
            Drum::HihatPedal => constants::PLAY_HIHAT_P,
            Drum::Crash => constants::PLAY_CRASH,
            Drum::Ride => constants::PLAY_RIDE,
            Drum::Splash => constants::PLAY_SPLASH,
            Drum::TomLo => constants::PLAY_TOM_LO,
            Drum::TomLowMid => constants::PLAY_TOM_LM,
            Drum::TomHighMid => constants::PLAY_TOM_HM,
            Drum::TomHi => constants::PLAY_TOM_HI,
            Drum::FloorTomLo => constants::PLAY_TOM_F_LO,
            Drum::FloorTomHi => constants::PLAY_TOM_F_HI,
        }
    }

    /// The default note played for this voice.
    pub fn play_note(&self) -> Note {
        Note::from_table(self.play_raw())
    }
}

impl FromStr for Drum {
    type Err = KitError;

    /// Accepts either the header identifier (`TOM_F_LO`) or the config name
    /// (`floor_tom_lo`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Drum::ALL
            .into_iter()
            .find(|drum| {
                drum.identifier().eq_ignore_ascii_case(trimmed)
                    || drum.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| KitError::UnknownDrum(s.to_string()))
    }
}

impl fmt::Display for Drum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
