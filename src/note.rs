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
use std::fmt;

use midly::num::u7;

use crate::constants::{GM_PERCUSSION_HIGHEST, GM_PERCUSSION_LOWEST};
use crate::error::KitError;

/// A MIDI note number from the General MIDI percussion map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note(u7);

impl Note {
    /// Creates a percussion note. Values outside 27-87 are rejected.
    pub fn percussion(raw: u8) -> Result<Note, KitError> {
        if !(GM_PERCUSSION_LOWEST..=GM_PERCUSSION_HIGHEST).contains(&raw) {
            return Err(KitError::NoteOutOfRange(raw));
        }
        u7::try_from(raw)
            .map(Note)
            .ok_or(KitError::NoteOutOfRange(raw))
    }

    /// Wraps a value from the built-in `PLAY_*` table, which is checked by
    /// the constants tests.
    pub(crate) fn from_table(raw: u8) -> Note {
        Note(u7::new(raw))
    }

    /// Gets the raw note number.
    pub fn as_int(&self) -> u8 {
        self.0.as_int()
    }

    /// Gets the note as a midly key.
    pub fn key(&self) -> u7 {
        self.0
    }
}

impl TryFrom<u8> for Note {
    type Error = KitError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Note::percussion(raw)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percussion_bounds() {
        assert_eq!(Note::percussion(27).unwrap().as_int(), 27);
        assert_eq!(Note::percussion(87).unwrap().as_int(), 87);
        assert_eq!(Note::percussion(26), Err(KitError::NoteOutOfRange(26)));
        assert_eq!(Note::percussion(88), Err(KitError::NoteOutOfRange(88)));
        assert_eq!(Note::percussion(200), Err(KitError::NoteOutOfRange(200)));
    }

    #[test]
    fn test_key_matches_raw() {
        let note = Note::try_from(38).unwrap();
        assert_eq!(note.key(), u7::from(38));
        assert_eq!(note.to_string(), "38");
    }
}
