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

/// Typed error for invalid drum, slot, note or sensor values so callers can
/// tell a bad config value apart from a load failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KitError {
    #[error("unknown drum '{0}'")]
    UnknownDrum(String),

    #[error("unknown slot '{slot}' in the {layout} layout")]
    UnknownSlot { slot: String, layout: String },

    #[error("unknown layout '{0}' (expected 'merged' or 'split')")]
    UnknownLayout(String),

    #[error("note {0} is outside the General MIDI percussion range (27-87)")]
    NoteOutOfRange(u8),

    #[error("sensor pin {0} is invalid (expected -1 or 0-15)")]
    InvalidSensorPin(i16),

    #[error("{drum} has no slot in the {layout} layout")]
    DrumNotInLayout { drum: String, layout: String },

    #[error("channel {0} does not fit in a 16-bit hit word")]
    ChannelOutOfRange(u8),
}
