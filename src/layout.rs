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
//! The two channel layouts the kit firmware has shipped with.
//!
//! [`Layout::Merged`] is the first revision: sixteen slots, one hi-hat
//! channel shared by the closed and open voices, and no masks.
//! [`Layout::Split`] is the second: fifteen contiguous channels with the
//! hi-hat split into three voices and a mask bit per channel.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::{merged, split};
use crate::drum::Drum;
use crate::error::KitError;

/// One channel slot of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// The header identifier of the slot, e.g. `HIHAT_P`.
    pub name: &'static str,
    /// The channel index.
    pub channel: u8,
    /// The voices this slot plays.
    pub drums: &'static [Drum],
    /// The default sensor pin, -1 when unwired.
    pub sensor: i8,
    /// The published mask, if the layout publishes masks.
    pub mask: Option<u16>,
}

const fn slot(name: &'static str, channel: u8, drums: &'static [Drum], sensor: i8) -> Slot {
    Slot {
        name,
        channel,
        drums,
        sensor,
        mask: None,
    }
}

const fn masked(
    name: &'static str,
    channel: u8,
    drums: &'static [Drum],
    sensor: i8,
    mask: u16,
) -> Slot {
    Slot {
        name,
        channel,
        drums,
        sensor,
        mask: Some(mask),
    }
}

static MERGED_SLOTS: [Slot; 14] = [
    slot("BASS", merged::BASS, &[Drum::Bass], merged::SENSOR_BASS),
    slot("SNARE", merged::SNARE, &[Drum::Snare], merged::SENSOR_SNARE),
    slot("RIMSHOT", merged::RIMSHOT, &[Drum::Rimshot], merged::SENSOR_RIMSHOT),
    slot(
        "HIHAT",
        merged::HIHAT,
        &[Drum::HihatClosed, Drum::HihatOpen],
        merged::SENSOR_HIHAT,
    ),
    slot("HIHAT_P", merged::HIHAT_P, &[Drum::HihatPedal], merged::SENSOR_HIHAT_P),
    slot("CRASH", merged::CRASH, &[Drum::Crash], merged::SENSOR_CRASH),
    slot("RIDE", merged::RIDE, &[Drum::Ride], merged::SENSOR_RIDE),
    slot("SPLASH", merged::SPLASH, &[Drum::Splash], merged::SENSOR_SPLASH),
    slot("TOM_LO", merged::TOM_LO, &[Drum::TomLo], merged::SENSOR_TOM_LO),
    slot("TOM_LM", merged::TOM_LM, &[Drum::TomLowMid], merged::SENSOR_TOM_LM),
    slot("TOM_HM", merged::TOM_HM, &[Drum::TomHighMid], merged::SENSOR_TOM_HM),
    slot("TOM_HI", merged::TOM_HI, &[Drum::TomHi], merged::SENSOR_TOM_HI),
    slot("TOM_F_LO", merged::TOM_F_LO, &[Drum::FloorTomLo], merged::SENSOR_TOM_F_LO),
    slot("TOM_F_HI", merged::TOM_F_HI, &[Drum::FloorTomHi], merged::SENSOR_TOM_F_HI),
];

static SPLIT_SLOTS: [Slot; 15] = [
    masked("BASS", split::BASS, &[Drum::Bass], split::SENSOR_BASS, split::MASK_BASS),
    masked("SNARE", split::SNARE, &[Drum::Snare], split::SENSOR_SNARE, split::MASK_SNARE),
    masked(
        "RIMSHOT",
        split::RIMSHOT,
        &[Drum::Rimshot],
        split::SENSOR_RIMSHOT,
        split::MASK_RIMSHOT,
    ),
    masked(
        "HIHAT_C",
        split::HIHAT_C,
        &[Drum::HihatClosed],
        split::SENSOR_HIHAT_C,
        split::MASK_HIHAT_C,
    ),
    masked(
        "HIHAT_O",
        split::HIHAT_O,
        &[Drum::HihatOpen],
        split::SENSOR_HIHAT_O,
        split::MASK_HIHAT_O,
    ),
    masked(
        "HIHAT_P",
        split::HIHAT_P,
        &[Drum::HihatPedal],
        split::SENSOR_HIHAT_P,
        split::MASK_HIHAT_P,
    ),
    masked("CRASH", split::CRASH, &[Drum::Crash], split::SENSOR_CRASH, split::MASK_CRASH),
    masked("RIDE", split::RIDE, &[Drum::Ride], split::SENSOR_RIDE, split::MASK_RIDE),
    masked("SPLASH", split::SPLASH, &[Drum::Splash], split::SENSOR_SPLASH, split::MASK_SPLASH),
    masked("TOM_LO", split::TOM_LO, &[Drum::TomLo], split::SENSOR_TOM_LO, split::MASK_TOM_LO),
    masked(
        "TOM_LM",
        split::TOM_LM,
        &[Drum::TomLowMid],
        split::SENSOR_TOM_LM,
        split::MASK_TOM_LM,
    ),
    masked(
        "TOM_HM",
        split::TOM_HM,
        &[Drum::TomHighMid],
        split::SENSOR_TOM_HM,
        split::MASK_TOM_HM,
    ),
    masked("TOM_HI", split::TOM_HI, &[Drum::TomHi], split::SENSOR_TOM_HI, split::MASK_TOM_HI),
    masked(
        "TOM_F_LO",
        split::TOM_F_LO,
        &[Drum::FloorTomLo],
        split::SENSOR_TOM_F_LO,
        split::MASK_TOM_F_LO,
    ),
    masked(
        "TOM_F_HI",
        split::TOM_F_HI,
        &[Drum::FloorTomHi],
        split::SENSOR_TOM_F_HI,
        split::MASK_TOM_F_HI,
    ),
];

/// A channel layout revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Sixteen slots with a single hi-hat channel.
    Merged,
    /// Fifteen channels, split hi-hat, one mask bit per channel.
    #[default]
    Split,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Merged, Layout::Split];

    /// The header revision number.
    pub fn revision(&self) -> u8 {
        match self {
            Layout::Merged => 1,
            Layout::Split => 2,
        }
    }

    /// The assigned slots, in channel order.
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            Layout::Merged => &MERGED_SLOTS,
            Layout::Split => &SPLIT_SLOTS,
        }
    }

    /// The `DRUM_CHANNELS` value, i.e. the size of the per-drum state array.
    pub fn channel_count(&self) -> u8 {
        match self {
            Layout::Merged => merged::DRUM_CHANNELS,
            Layout::Split => split::DRUM_CHANNELS,
        }
    }

    /// Whether the layout publishes `MASK_*` constants.
    pub fn publishes_masks(&self) -> bool {
        matches!(self, Layout::Split)
    }

    /// Finds a slot by its header identifier, ignoring case.
    pub fn slot(&self, name: &str) -> Option<&'static Slot> {
        let name = name.trim();
        self.slots()
            .iter()
            .find(|slot| slot.name.eq_ignore_ascii_case(name))
    }

    /// Finds the slot assigned to the given channel index.
    pub fn slot_for_channel(&self, channel: u8) -> Option<&'static Slot> {
        self.slots().iter().find(|slot| slot.channel == channel)
    }

    /// Finds the slot that plays the given voice.
    pub fn slot_for_drum(&self, drum: Drum) -> Option<&'static Slot> {
        self.slots().iter().find(|slot| slot.drums.contains(&drum))
    }

    /// Looks up a slot by name, returning a typed error when it's missing.
    pub fn require_slot(&self, name: &str) -> Result<&'static Slot, KitError> {
        self.slot(name).ok_or_else(|| KitError::UnknownSlot {
            slot: name.to_string(),
            layout: self.to_string(),
        })
    }
}

impl FromStr for Layout {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merged" | "1" => Ok(Layout::Merged),
            "split" | "2" => Ok(Layout::Split),
            _ => Err(KitError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Merged => write!(f, "merged"),
            Layout::Split => write!(f, "split"),
        }
    }
}
