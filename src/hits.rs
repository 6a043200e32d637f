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

use crate::error::KitError;

/// A hit-state word: bit `n` is set when channel `n` was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitSet(u16);

impl HitSet {
    /// The highest channel that fits in the word.
    pub const MAX_CHANNEL: u8 = 15;

    pub fn empty() -> HitSet {
        HitSet(0)
    }

    pub fn from_bits(bits: u16) -> HitSet {
        HitSet(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Gets the single-bit mask for a channel.
    pub fn mask(channel: u8) -> Result<u16, KitError> {
        if channel > Self::MAX_CHANNEL {
            return Err(KitError::ChannelOutOfRange(channel));
        }
        Ok(1u16 << channel)
    }

    /// Marks the channel as hit.
    pub fn insert(&mut self, channel: u8) -> Result<(), KitError> {
        self.0 |= Self::mask(channel)?;
        Ok(())
    }

    /// Clears the channel.
    pub fn remove(&mut self, channel: u8) {
        if let Ok(mask) = Self::mask(channel) {
            self.0 &= !mask;
        }
    }

    pub fn contains(&self, channel: u8) -> bool {
        Self::mask(channel).is_ok_and(|mask| self.0 & mask != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: HitSet) -> HitSet {
        HitSet(self.0 | other.0)
    }

    /// Channels hit now that were not hit in the previous word.
    pub fn struck_since(&self, prev: HitSet) -> HitSet {
        HitSet(self.0 & !prev.0)
    }

    /// Channels hit in the previous word that are no longer hit.
    pub fn released_since(&self, prev: HitSet) -> HitSet {
        HitSet(prev.0 & !self.0)
    }

    /// Iterates the set channels in ascending order.
    pub fn channels(&self) -> impl Iterator<Item = u8> {
        let hits = *self;
        (0..=Self::MAX_CHANNEL).filter(move |channel| hits.contains(*channel))
    }
}

impl fmt::Display for HitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut hits = HitSet::empty();
        hits.insert(1).unwrap();
        hits.insert(13).unwrap();
        assert_eq!(hits.bits(), 0x2002);
        assert!(hits.contains(1));
        assert!(hits.contains(13));
        assert!(!hits.contains(0));
        assert!(!hits.contains(16));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.channels().collect::<Vec<u8>>(), vec![1, 13]);

        hits.remove(1);
        assert_eq!(hits.bits(), 0x2000);
        hits.remove(40);
        assert_eq!(hits.bits(), 0x2000);
    }

    #[test]
    fn test_out_of_range() {
        let mut hits = HitSet::empty();
        assert_eq!(hits.insert(16), Err(KitError::ChannelOutOfRange(16)));
        assert!(hits.is_empty());
        assert_eq!(HitSet::mask(15), Ok(0x8000));
    }

    #[test]
    fn test_edges() {
        let prev = HitSet::from_bits(0b0110);
        let now = HitSet::from_bits(0b0011);
        assert_eq!(now.struck_since(prev).bits(), 0b0001);
        assert_eq!(now.released_since(prev).bits(), 0b0100);
        assert_eq!(now.union(prev).bits(), 0b0111);
        assert_eq!(now.to_string(), "0x0003");
    }
}
