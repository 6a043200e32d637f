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
//! Structural checks over a kit's channel, mask, sensor and note tables.
use std::collections::{BTreeMap, HashMap};

use crate::constants::{ANALOG_PINS, GM_PERCUSSION_HIGHEST, GM_PERCUSSION_LOWEST};
use crate::drum::Drum;
use crate::kit::{Kit, KitRow};
use crate::layout::{Layout, Slot};

/// Severity level for a verification issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single verification issue found during checking.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    pub category: &'static str,
    /// The channel the issue belongs to, if it can be placed on one.
    pub channel: Option<u8>,
    /// The slot or voice the issue belongs to.
    pub subject: String,
    pub message: String,
}

/// Result of verifying a kit.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub issues: Vec<Issue>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: VerificationReport) {
        self.issues.extend(other.issues);
    }

    /// Counts errors and warnings, in that order.
    pub fn counts(&self) -> (usize, usize) {
        let errors = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        (errors, self.issues.len() - errors)
    }
}

/// Checks that channel indices are unique, below `channel_count`, and leave
/// no unassigned index.
pub fn check_channels(slots: &[Slot], channel_count: u8) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<u8, &str> = HashMap::new();

    for slot in slots {
        if let Some(other) = seen.insert(slot.channel, slot.name) {
            issues.push(Issue {
                severity: Severity::Error,
                category: "channel-duplicate",
                channel: Some(slot.channel),
                subject: slot.name.to_string(),
                message: format!("channel {} is also assigned to {}", slot.channel, other),
            });
        }
        if slot.channel >= channel_count {
            issues.push(Issue {
                severity: Severity::Error,
                category: "channel-range",
                channel: Some(slot.channel),
                subject: slot.name.to_string(),
                message: format!(
                    "channel {} is outside DRUM_CHANNELS ({})",
                    slot.channel, channel_count
                ),
            });
        }
    }

    for channel in (0..channel_count).filter(|channel| !seen.contains_key(channel)) {
        issues.push(Issue {
            severity: Severity::Warning,
            category: "channel-gap",
            channel: Some(channel),
            subject: "unassigned".to_string(),
            message: format!("channel {} is not assigned to any drum", channel),
        });
    }

    issues
}

/// Checks that each slot's mask is the single bit of its channel.
pub fn check_masks(slots: &[Slot], publishes_masks: bool) -> Vec<Issue> {
    if !publishes_masks {
        return Vec::new();
    }

    slots
        .iter()
        .filter_map(|slot| {
            let expected = 1u32 << slot.channel;
            let message = match slot.mask {
                None => format!("MASK_{} is missing", slot.name),
                Some(mask) if u32::from(mask) != expected => format!(
                    "MASK_{} is 0x{:04X}, expected 0x{:04X} (1 << {})",
                    slot.name, mask, expected, slot.channel
                ),
                Some(_) => return None,
            };
            Some(Issue {
                severity: Severity::Error,
                category: "mask",
                channel: Some(slot.channel),
                subject: slot.name.to_string(),
                message,
            })
        })
        .collect()
}

/// Checks that wired pins exist on the controller and that no two slots
/// share one.
pub fn check_sensors(rows: &[KitRow]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<u8, &str> = HashMap::new();

    for row in rows {
        let Some(pin) = row.sensor.pin() else {
            continue;
        };
        if pin >= ANALOG_PINS {
            issues.push(Issue {
                severity: Severity::Error,
                category: "sensor-range",
                channel: Some(row.channel),
                subject: row.name.to_string(),
                message: format!(
                    "sensor pin {} does not exist (expected 0-{})",
                    pin,
                    ANALOG_PINS - 1
                ),
            });
        }
        if let Some(other) = seen.insert(pin, row.name) {
            issues.push(Issue {
                severity: Severity::Error,
                category: "sensor-shared",
                channel: Some(row.channel),
                subject: row.name.to_string(),
                message: format!("sensor {} is also wired to {}", row.sensor, other),
            });
        }
    }

    issues
}

/// Checks that notes are percussion notes and that no two voices share one.
pub fn check_notes(notes: &[(Drum, u8)], layout: Layout) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<u8, Drum> = HashMap::new();

    for (drum, note) in notes.iter().copied() {
        let channel = layout.slot_for_drum(drum).map(|slot| slot.channel);
        if !(GM_PERCUSSION_LOWEST..=GM_PERCUSSION_HIGHEST).contains(&note) {
            issues.push(Issue {
                severity: Severity::Error,
                category: "note-range",
                channel,
                subject: drum.identifier().to_string(),
                message: format!("PLAY_{} is {}, outside 27-87", drum.identifier(), note),
            });
        }
        if let Some(other) = seen.insert(note, drum) {
            issues.push(Issue {
                severity: Severity::Error,
                category: "note-duplicate",
                channel,
                subject: drum.identifier().to_string(),
                message: format!("note {} is also played by {}", note, other),
            });
        }
    }

    issues
}

/// Runs every check against the kit.
pub fn verify_kit(kit: &Kit) -> VerificationReport {
    let layout = kit.layout();
    let notes: Vec<(Drum, u8)> = Drum::ALL
        .iter()
        .map(|drum| (*drum, kit.note(*drum).as_int()))
        .collect();

    let mut report = VerificationReport::default();
    report
        .issues
        .extend(check_channels(layout.slots(), layout.channel_count()));
    report
        .issues
        .extend(check_masks(layout.slots(), layout.publishes_masks()));
    report.issues.extend(check_sensors(&kit.rows()));
    report.issues.extend(check_notes(&notes, layout));

    for issue in &report.issues {
        tracing::debug!(
            category = issue.category,
            channel = ?issue.channel,
            subject = %issue.subject,
            "{}",
            issue.message
        );
    }
    report
}

/// Prints a verification report, one block per channel.
pub fn print_report(report: &VerificationReport, kit: &Kit) {
    let layout = kit.layout();
    if report.is_clean() {
        println!(
            "All {} channel(s) of the {} layout passed verification.",
            layout.channel_count(),
            layout
        );
        return;
    }

    let mut by_channel: BTreeMap<Option<u8>, Vec<&Issue>> = BTreeMap::new();
    for issue in &report.issues {
        by_channel.entry(issue.channel).or_default().push(issue);
    }

    for (channel, issues) in &by_channel {
        match channel.map(|c| (c, layout.slot_for_channel(c))) {
            Some((c, Some(slot))) => {
                let voices: Vec<&str> = slot.drums.iter().map(|d| d.identifier()).collect();
                println!("Channel {:>2} {} [{}]", c, slot.name, voices.join(", "));
            }
            Some((c, None)) => println!("Channel {:>2} (unassigned)", c),
            None => println!("Other"),
        }
        for issue in issues {
            let severity = match issue.severity {
                Severity::Warning => "warning",
                Severity::Error => "error",
            };
            println!(
                "   {:<7} [{}] {}: {}",
                severity, issue.category, issue.subject, issue.message
            );
        }
    }

    let (errors, warnings) = report.counts();
    println!(
        "\nSummary: {} error(s), {} warning(s) across {} channel(s) of the {} layout.",
        errors,
        warnings,
        by_channel.len(),
        layout
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;
    use crate::sensor::SensorPin;

    fn slot(name: &'static str, channel: u8, drums: &'static [Drum], mask: Option<u16>) -> Slot {
        Slot {
            name,
            channel,
            drums,
            sensor: -1,
            mask,
        }
    }

    fn row(name: &'static str, channel: u8, sensor: SensorPin) -> KitRow {
        KitRow {
            name,
            channel,
            drums: Vec::new(),
            notes: Vec::new(),
            sensor,
            mask: None,
        }
    }

    fn categories(issues: &[Issue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.category).collect()
    }

    #[test]
    fn test_split_is_clean() {
        let report = verify_kit(&Kit::new(Layout::Split));
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_merged_has_gap_warnings_only() {
        let report = verify_kit(&Kit::new(Layout::Merged));
        assert!(!report.has_errors());
        let gaps: Vec<Option<u8>> = report
            .issues
            .iter()
            .filter(|i| i.category == "channel-gap")
            .map(|i| i.channel)
            .collect();
        assert_eq!(gaps, vec![Some(3), Some(6)]);
        assert_eq!(report.counts(), (0, 2));
    }

    #[test]
    fn test_duplicate_channel() {
        let slots = [
            slot("BASS", 0, &[Drum::Bass], None),
            slot("SNARE", 1, &[Drum::Snare], None),
            slot("RIMSHOT", 1, &[Drum::Rimshot], None),
        ];
        let issues = check_channels(&slots, 3);
        assert_eq!(categories(&issues), vec!["channel-duplicate", "channel-gap"]);
        assert_eq!(issues[0].subject, "RIMSHOT");
        assert!(issues[0].message.contains("SNARE"));
        assert_eq!(issues[1].channel, Some(2));
    }

    #[test]
    fn test_channel_out_of_range() {
        let slots: Vec<Slot> = Layout::Split
            .slots()
            .iter()
            .cloned()
            .map(|mut s| {
                if s.name == "TOM_F_HI" {
                    s.channel = 15;
                }
                s
            })
            .collect();
        let issues = check_channels(&slots, 15);
        assert_eq!(categories(&issues), vec!["channel-range", "channel-gap"]);
        assert_eq!(issues[0].channel, Some(15));
        assert_eq!(issues[0].subject, "TOM_F_HI");
        assert_eq!(issues[1].channel, Some(14));
    }

    #[test]
    fn test_wrong_and_missing_masks() {
        let slots = [
            slot("BASS", 0, &[Drum::Bass], Some(0x0001)),
            slot("SNARE", 1, &[Drum::Snare], Some(0x0004)),
            slot("RIMSHOT", 2, &[Drum::Rimshot], None),
        ];
        let issues = check_masks(&slots, true);
        assert_eq!(categories(&issues), vec!["mask", "mask"]);
        assert_eq!(issues[0].subject, "SNARE");
        assert!(issues[0].message.contains("0x0004"));
        assert!(issues[0].message.contains("0x0002"));
        assert_eq!(issues[1].subject, "RIMSHOT");
        assert!(issues[1].message.contains("missing"));

        // Layouts that don't publish masks are never checked.
        assert!(check_masks(&slots, false).is_empty());
        assert!(check_masks(Layout::Merged.slots(), false).is_empty());
    }

    #[test]
    fn test_sensor_out_of_range() {
        let rows = [
            row("SNARE", 1, SensorPin::Analog(255)),
            row("CRASH", 6, SensorPin::Analog(200)),
            row("BASS", 0, SensorPin::Analog(10)),
        ];
        let issues = check_sensors(&rows);
        assert_eq!(categories(&issues), vec!["sensor-range", "sensor-range"]);
        assert_eq!(issues[0].subject, "SNARE");
        assert!(issues[0].message.contains("255"));
        assert_eq!(issues[1].channel, Some(6));
    }

    #[test]
    fn test_shared_sensor() {
        let mut kit = Kit::default();
        kit.set_sensor("CRASH", SensorPin::Analog(3)).unwrap();
        let issues = check_sensors(&kit.rows());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "sensor-shared");
        assert_eq!(issues[0].subject, "CRASH");
        assert!(issues[0].message.contains("SNARE"));
        assert!(verify_kit(&kit).has_errors());
    }

    #[test]
    fn test_note_out_of_range() {
        let notes = [(Drum::Bass, 35), (Drum::Ride, 90), (Drum::Crash, 20)];
        let issues = check_notes(&notes, Layout::Split);
        assert_eq!(categories(&issues), vec!["note-range", "note-range"]);
        assert_eq!(issues[0].subject, "RIDE");
        assert_eq!(issues[0].channel, Some(7));
        assert!(issues[1].message.contains("PLAY_CRASH is 20"));
    }

    #[test]
    fn test_duplicate_note() {
        let mut kit = Kit::default();
        kit.set_note(Drum::Splash, Note::percussion(49).unwrap());
        let report = verify_kit(&kit);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].category, "note-duplicate");
        assert_eq!(report.issues[0].subject, "SPLASH");
        assert_eq!(report.issues[0].channel, Some(8));
        assert!(report.issues[0].message.contains("CRASH"));
    }

    #[test]
    fn test_report_merge() {
        let mut report = VerificationReport::default();
        assert!(report.is_clean());
        report.merge(VerificationReport {
            issues: vec![Issue {
                severity: Severity::Warning,
                category: "channel-gap",
                channel: Some(3),
                subject: "unassigned".to_string(),
                message: "unassigned".to_string(),
            }],
        });
        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert_eq!(report.counts(), (0, 1));
    }
}
