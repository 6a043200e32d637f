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
//! The raw constant surface consumed by the drum kit firmware.
//!
//! Names and values match the `drums.h` headers one for one. The typed API in
//! [`crate::layout`] and [`crate::kit`] is built from these tables.

/// Sentinel sensor value for a voice with no physical sensor wired.
pub const UNWIRED: i8 = -1;

/// Lowest note of the General MIDI percussion map.
pub const GM_PERCUSSION_LOWEST: u8 = 27;

/// Highest note of the General MIDI percussion map.
pub const GM_PERCUSSION_HIGHEST: u8 = 87;

/// The General MIDI drum channel (1-indexed).
pub const PERCUSSION_MIDI_CHANNEL: u8 = 10;

/// Number of analog inputs on the controller (A0 through A15).
pub const ANALOG_PINS: u8 = 16;

// Drum name to MIDI note.
pub const PLAY_BASS: u8 = 35;
pub const PLAY_SNARE: u8 = 38;
pub const PLAY_RIMSHOT: u8 = 40;

pub const PLAY_HIHAT_C: u8 = 42;
pub const PLAY_HIHAT_O: u8 = 46;
pub const PLAY_HIHAT_P: u8 = 44;

pub const PLAY_CRASH: u8 = 49;
pub const PLAY_RIDE: u8 = 51;
pub const PLAY_SPLASH: u8 = 55;

pub const PLAY_TOM_LO: u8 = 45;
pub const PLAY_TOM_LM: u8 = 47;
pub const PLAY_TOM_HM: u8 = 48;
pub const PLAY_TOM_HI: u8 = 50;
pub const PLAY_TOM_F_LO: u8 = 41;
pub const PLAY_TOM_F_HI: u8 = 43;

/// Revision 1: sixteen slots with a single hi-hat channel. Slots 3 and 6 are
/// not assigned.
pub mod merged {
    use super::UNWIRED;

    pub const BASS: u8 = 0;
    pub const SNARE: u8 = 1;
    pub const RIMSHOT: u8 = 2;

    pub const HIHAT: u8 = 4;
    pub const HIHAT_P: u8 = 5;

    pub const CRASH: u8 = 7;
    pub const RIDE: u8 = 8;
    pub const SPLASH: u8 = 9;

    pub const TOM_LO: u8 = 10;
    pub const TOM_LM: u8 = 11;
    pub const TOM_HM: u8 = 12;
    pub const TOM_HI: u8 = 13;
    pub const TOM_F_LO: u8 = 14;
    pub const TOM_F_HI: u8 = 15;

    pub const DRUM_CHANNELS: u8 = 16;

    pub const SENSOR_BASS: i8 = 10;
    pub const SENSOR_SNARE: i8 = 3;
    pub const SENSOR_RIMSHOT: i8 = UNWIRED;

    pub const SENSOR_HIHAT: i8 = 2;
    pub const SENSOR_HIHAT_P: i8 = 11;

    pub const SENSOR_CRASH: i8 = UNWIRED;
    pub const SENSOR_RIDE: i8 = UNWIRED;
    pub const SENSOR_SPLASH: i8 = UNWIRED;

    pub const SENSOR_TOM_LO: i8 = 1;
    pub const SENSOR_TOM_LM: i8 = UNWIRED;
    pub const SENSOR_TOM_HM: i8 = 0;
    pub const SENSOR_TOM_HI: i8 = UNWIRED;
    pub const SENSOR_TOM_F_LO: i8 = UNWIRED;
    pub const SENSOR_TOM_F_HI: i8 = UNWIRED;
}

/// Revision 2: fifteen contiguous channels, hi-hat split into closed, open and
/// pedal voices, with one mask bit per channel.
pub mod split {
    use super::UNWIRED;

    pub const BASS: u8 = 0;
    pub const SNARE: u8 = 1;
    pub const RIMSHOT: u8 = 2;

    pub const HIHAT_C: u8 = 3;
    pub const HIHAT_O: u8 = 4;
    pub const HIHAT_P: u8 = 5;

    pub const CRASH: u8 = 6;
    pub const RIDE: u8 = 7;
    pub const SPLASH: u8 = 8;

    pub const TOM_LO: u8 = 9;
    pub const TOM_LM: u8 = 10;
    pub const TOM_HM: u8 = 11;
    pub const TOM_HI: u8 = 12;
    pub const TOM_F_LO: u8 = 13;
    pub const TOM_F_HI: u8 = 14;

    pub const DRUM_CHANNELS: u8 = 15;

    pub const MASK_BASS: u16 = 0x0001;
    pub const MASK_SNARE: u16 = 0x0002;
    pub const MASK_RIMSHOT: u16 = 0x0004;

    pub const MASK_HIHAT_C: u16 = 0x0008;
    pub const MASK_HIHAT_O: u16 = 0x0010;
    pub const MASK_HIHAT_P: u16 = 0x0020;

    pub const MASK_CRASH: u16 = 0x0040;
    pub const MASK_RIDE: u16 = 0x0080;
    pub const MASK_SPLASH: u16 = 0x0100;

    pub const MASK_TOM_LO: u16 = 0x0200;
    pub const MASK_TOM_LM: u16 = 0x0400;
    pub const MASK_TOM_HM: u16 = 0x0800;
    pub const MASK_TOM_HI: u16 = 0x1000;
    pub const MASK_TOM_F_LO: u16 = 0x2000;
    pub const MASK_TOM_F_HI: u16 = 0x4000;

    pub const SENSOR_BASS: i8 = 10;
    pub const SENSOR_SNARE: i8 = 3;
    pub const SENSOR_RIMSHOT: i8 = UNWIRED;

    pub const SENSOR_HIHAT_C: i8 = 2;
    pub const SENSOR_HIHAT_O: i8 = UNWIRED;
    pub const SENSOR_HIHAT_P: i8 = 11;

    pub const SENSOR_CRASH: i8 = UNWIRED;
    pub const SENSOR_RIDE: i8 = UNWIRED;
    pub const SENSOR_SPLASH: i8 = UNWIRED;

    pub const SENSOR_TOM_LO: i8 = 1;
    pub const SENSOR_TOM_LM: i8 = UNWIRED;
    pub const SENSOR_TOM_HM: i8 = 0;
    pub const SENSOR_TOM_HI: i8 = UNWIRED;
    pub const SENSOR_TOM_F_LO: i8 = UNWIRED;
    pub const SENSOR_TOM_F_HI: i8 = UNWIRED;
}
