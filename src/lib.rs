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
//! Channel, note, mask and sensor map for an Arduino electronic drum kit
//! driving a General MIDI sound chip.
pub mod config;
pub mod constants;
pub mod drum;
pub mod error;
pub mod header;
pub mod hits;
pub mod kit;
pub mod layout;
pub mod note;
pub mod sensor;
pub mod verify;

pub use drum::Drum;
pub use error::KitError;
pub use hits::HitSet;
pub use kit::Kit;
pub use layout::Layout;
pub use note::Note;
pub use sensor::SensorPin;
