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
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::drum::Drum;
use crate::error::KitError;
use crate::hits::HitSet;
use crate::layout::{Layout, Slot};
use crate::note::Note;
use crate::sensor::SensorPin;

/// A drum kit: a layout plus the notes and sensor wiring currently in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kit {
    layout: Layout,
    notes: BTreeMap<Drum, Note>,
    /// Sensor per slot, parallel to `layout.slots()`.
    sensors: Vec<SensorPin>,
}

/// A printable row of the kit table.
#[derive(Debug, Clone, Serialize)]
pub struct KitRow {
    pub name: &'static str,
    pub channel: u8,
    pub drums: Vec<Drum>,
    pub notes: Vec<u8>,
    pub sensor: SensorPin,
    pub mask: Option<u16>,
}

impl Kit {
    /// Creates a kit with the header defaults for the given layout.
    pub fn new(layout: Layout) -> Kit {
        Kit {
            layout,
            notes: Drum::ALL
                .iter()
                .map(|drum| (*drum, drum.play_note()))
                .collect(),
            sensors: layout
                .slots()
                .iter()
                .map(|slot| SensorPin::from_table(slot.sensor))
                .collect(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn slots(&self) -> &'static [Slot] {
        self.layout.slots()
    }

    /// Gets the slot that plays a voice.
    pub fn slot_for_drum(&self, drum: Drum) -> Result<&'static Slot, KitError> {
        self.layout
            .slot_for_drum(drum)
            .ok_or_else(|| KitError::DrumNotInLayout {
                drum: drum.identifier().to_string(),
                layout: self.layout.to_string(),
            })
    }

    /// Gets the channel index a voice is assigned to.
    pub fn channel(&self, drum: Drum) -> Result<u8, KitError> {
        Ok(self.slot_for_drum(drum)?.channel)
    }

    /// Gets the note a voice plays.
    pub fn note(&self, drum: Drum) -> Note {
        self.notes
            .get(&drum)
            .copied()
            .unwrap_or_else(|| drum.play_note())
    }

    /// Gets the notes played by a slot, in slot voice order.
    pub fn notes_for_slot(&self, slot: &Slot) -> Vec<Note> {
        slot.drums.iter().map(|drum| self.note(*drum)).collect()
    }

    /// Gets the sensor wired to the named slot.
    pub fn sensor(&self, slot_name: &str) -> Result<SensorPin, KitError> {
        let index = self.slot_index(slot_name)?;
        Ok(self.sensors[index])
    }

    /// Gets the sensor wired to the slot that plays the voice.
    pub fn sensor_for_drum(&self, drum: Drum) -> Result<SensorPin, KitError> {
        self.sensor(self.slot_for_drum(drum)?.name)
    }

    /// Gets the voice's mask, for layouts that publish masks.
    pub fn mask(&self, drum: Drum) -> Option<u16> {
        self.layout.slot_for_drum(drum).and_then(|slot| slot.mask)
    }

    /// Finds the voices that play the given note number.
    pub fn drums_for_note(&self, note: u8) -> Vec<Drum> {
        self.notes
            .iter()
            .filter(|(_, n)| n.as_int() == note)
            .map(|(drum, _)| *drum)
            .collect()
    }

    /// Finds the slot wired to the given analog pin.
    pub fn slot_for_sensor(&self, pin: u8) -> Option<&'static Slot> {
        self.slots()
            .iter()
            .zip(self.sensors.iter())
            .find(|(_, sensor)| sensor.pin() == Some(pin))
            .map(|(slot, _)| slot)
    }

    /// Resolves a hit-state word to the voices of the struck slots.
    pub fn drums_in(&self, hits: HitSet) -> Vec<Drum> {
        hits.channels()
            .filter_map(|channel| self.layout.slot_for_channel(channel))
            .flat_map(|slot| slot.drums.iter().copied())
            .collect()
    }

    /// Builds the hit-state word for a set of voices.
    pub fn hit_set(&self, drums: &[Drum]) -> Result<HitSet, KitError> {
        let mut hits = HitSet::empty();
        for drum in drums {
            hits.insert(self.channel(*drum)?)?;
        }
        Ok(hits)
    }

    /// Overrides the note a voice plays.
    pub fn set_note(&mut self, drum: Drum, note: Note) {
        debug!(drum = drum.identifier(), note = note.as_int(), "Overriding note");
        self.notes.insert(drum, note);
    }

    /// Rewires the named slot's sensor. Pins the controller doesn't have are
    /// rejected.
    pub fn set_sensor(&mut self, slot_name: &str, pin: SensorPin) -> Result<(), KitError> {
        let pin = pin.validate()?;
        let index = self.slot_index(slot_name)?;
        if let Some(other) = pin.pin().and_then(|p| self.slot_for_sensor(p)) {
            if other.name != self.slots()[index].name {
                warn!(
                    slot = self.slots()[index].name,
                    other = other.name,
                    pin = %pin,
                    "Sensor pin is already wired to another slot"
                );
            }
        }
        debug!(slot = self.slots()[index].name, pin = %pin, "Overriding sensor");
        self.sensors[index] = pin;
        Ok(())
    }

    /// Gets the kit as table rows in channel order.
    pub fn rows(&self) -> Vec<KitRow> {
        self.slots()
            .iter()
            .zip(self.sensors.iter())
            .map(|(slot, sensor)| KitRow {
                name: slot.name,
                channel: slot.channel,
                drums: slot.drums.to_vec(),
                notes: self
                    .notes_for_slot(slot)
                    .iter()
                    .map(|note| note.as_int())
                    .collect(),
                sensor: *sensor,
                mask: slot.mask,
            })
            .collect()
    }

    fn slot_index(&self, slot_name: &str) -> Result<usize, KitError> {
        let slot = self.layout.require_slot(slot_name)?;
        self.slots()
            .iter()
            .position(|s| s.name == slot.name)
            .ok_or_else(|| KitError::UnknownSlot {
                slot: slot_name.to_string(),
                layout: self.layout.to_string(),
            })
    }
}

impl Default for Kit {
    fn default() -> Self {
        Kit::new(Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_defaults() {
        let kit = Kit::default();
        assert_eq!(kit.layout(), Layout::Split);
        assert_eq!(kit.channel(Drum::Snare), Ok(1));
        assert_eq!(kit.mask(Drum::Snare), Some(0x0002));
        assert_eq!(kit.channel(Drum::FloorTomLo), Ok(13));
        assert_eq!(kit.mask(Drum::FloorTomLo), Some(0x2000));
        assert_eq!(kit.note(Drum::Snare).as_int(), 38);
        assert_eq!(kit.sensor("HIHAT_C"), Ok(SensorPin::Analog(2)));
        assert_eq!(kit.sensor("HIHAT_O"), Ok(SensorPin::Unwired));
        assert_eq!(kit.sensor_for_drum(Drum::Bass), Ok(SensorPin::Analog(10)));
    }

    #[test]
    fn test_merged_defaults() {
        let kit = Kit::new(Layout::Merged);
        assert_eq!(kit.channel(Drum::HihatClosed), Ok(4));
        assert_eq!(kit.channel(Drum::HihatOpen), Ok(4));
        assert_eq!(kit.channel(Drum::HihatPedal), Ok(5));
        assert_eq!(kit.mask(Drum::Snare), None);
        assert_eq!(kit.sensor("HIHAT"), Ok(SensorPin::Analog(2)));
        assert_eq!(kit.sensor_for_drum(Drum::HihatOpen), Ok(SensorPin::Analog(2)));
        assert_eq!(kit.sensor("TOM_HM"), Ok(SensorPin::Analog(0)));

        let hihat = kit.layout().slot("HIHAT").unwrap();
        let notes: Vec<u8> = kit.notes_for_slot(hihat).iter().map(|n| n.as_int()).collect();
        assert_eq!(notes, vec![42, 46]);
    }

    #[test]
    fn test_lookups() {
        let kit = Kit::default();
        assert_eq!(kit.drums_for_note(49), vec![Drum::Crash]);
        assert!(kit.drums_for_note(60).is_empty());
        assert_eq!(kit.slot_for_sensor(11).unwrap().name, "HIHAT_P");
        assert!(kit.slot_for_sensor(5).is_none());
    }

    #[test]
    fn test_hit_words() {
        let kit = Kit::default();
        let hits = kit.hit_set(&[Drum::Snare, Drum::FloorTomLo]).unwrap();
        assert_eq!(hits.bits(), 0x2002);
        assert_eq!(kit.drums_in(hits), vec![Drum::Snare, Drum::FloorTomLo]);

        let merged = Kit::new(Layout::Merged);
        let hits = HitSet::from_bits(1 << 4 | 1 << 3);
        // Channel 3 is unassigned in the merged layout.
        assert_eq!(merged.drums_in(hits), vec![Drum::HihatClosed, Drum::HihatOpen]);
    }

    #[test]
    fn test_overrides() {
        let mut kit = Kit::default();
        kit.set_note(Drum::Crash, Note::percussion(57).unwrap());
        assert_eq!(kit.note(Drum::Crash).as_int(), 57);
        assert_eq!(kit.drums_for_note(57), vec![Drum::Crash]);

        kit.set_sensor("hihat_o", SensorPin::Analog(4)).unwrap();
        assert_eq!(kit.sensor("HIHAT_O"), Ok(SensorPin::Analog(4)));
        assert_eq!(kit.slot_for_sensor(4).unwrap().name, "HIHAT_O");

        kit.set_sensor("BASS", SensorPin::Unwired).unwrap();
        assert_eq!(kit.sensor_for_drum(Drum::Bass), Ok(SensorPin::Unwired));

        assert!(matches!(
            kit.set_sensor("HIHAT", SensorPin::Unwired),
            Err(KitError::UnknownSlot { .. })
        ));
    }

    #[test]
    fn test_out_of_range_sensor_is_rejected() {
        let mut kit = Kit::default();
        assert_eq!(
            kit.set_sensor("SNARE", SensorPin::Analog(255)),
            Err(KitError::InvalidSensorPin(255))
        );
        assert_eq!(
            kit.set_sensor("CRASH", SensorPin::Analog(200)),
            Err(KitError::InvalidSensorPin(200))
        );
        assert_eq!(
            kit.set_sensor("CRASH", SensorPin::Analog(16)),
            Err(KitError::InvalidSensorPin(16))
        );
        assert_eq!(kit.sensor("SNARE"), Ok(SensorPin::Analog(3)));
        assert_eq!(kit.sensor("CRASH"), Ok(SensorPin::Unwired));
    }

    #[test]
    fn test_rows() {
        let rows = Kit::default().rows();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[3].name, "HIHAT_C");
        assert_eq!(rows[3].notes, vec![42]);
        assert_eq!(rows[3].mask, Some(0x0008));

        let rows = Kit::new(Layout::Merged).rows();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[3].name, "HIHAT");
        assert_eq!(rows[3].drums, vec![Drum::HihatClosed, Drum::HihatOpen]);
    }
}
