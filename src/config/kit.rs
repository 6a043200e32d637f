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
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use super::error::ConfigError;
use crate::drum::Drum;
use crate::kit::Kit;
use crate::layout::Layout;
use crate::note::Note;
use crate::sensor::SensorPin;

/// Environment variables with this prefix override the kit file,
/// e.g. `DRUMKIT_LAYOUT=merged`.
pub const ENV_PREFIX: &str = "DRUMKIT";

/// A YAML representation of a kit.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct KitConfig {
    /// The channel layout, `merged` or `split`.
    layout: Option<String>,

    /// Sensor rewiring by slot name. -1 unwires the slot.
    #[serde(default)]
    sensors: HashMap<String, i16>,

    /// Note overrides by drum name.
    #[serde(default)]
    notes: HashMap<String, u8>,
}

impl KitConfig {
    /// Loads the kit config from the given file, if any, and the environment.
    pub fn load(path: Option<&Path>) -> Result<KitConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        Ok(builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<KitConfig>()?)
    }

    /// Gets the configured layout, if one was given.
    pub fn layout(&self) -> Result<Option<Layout>, ConfigError> {
        Ok(self
            .layout
            .as_deref()
            .map(str::parse::<Layout>)
            .transpose()?)
    }

    /// Resolves the config into a kit. An explicit layout takes precedence
    /// over the configured one.
    pub fn to_kit(&self, layout: Option<Layout>) -> Result<Kit, ConfigError> {
        let layout = match layout {
            Some(layout) => layout,
            None => self.layout()?.unwrap_or_default(),
        };
        let mut kit = Kit::new(layout);

        // Sorted so that override warnings come out in a stable order.
        let sensors: BTreeMap<&String, &i16> = self.sensors.iter().collect();
        for (slot, raw) in sensors {
            kit.set_sensor(slot, SensorPin::try_from(*raw)?)?;
        }

        let notes: BTreeMap<&String, &u8> = self.notes.iter().collect();
        for (drum, raw) in notes {
            kit.set_note(drum.parse::<Drum>()?, Note::percussion(*raw)?);
        }

        info!(
            layout = %layout,
            sensors = self.sensors.len(),
            notes = self.notes.len(),
            "Loaded kit configuration"
        );
        Ok(kit)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use config::{Config, File, FileFormat};
    use serial_test::serial;

    use super::*;
    use crate::error::KitError;

    fn parse(yaml: &str) -> KitConfig {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_config_is_default_kit() {
        let kit = parse("{}").to_kit(None).unwrap();
        assert_eq!(kit, Kit::new(Layout::Split));
    }

    #[test]
    fn test_overrides() {
        let config = parse(
            r#"
            layout: merged
            sensors:
              HIHAT: 4
              TOM_HM: -1
            notes:
              crash: 57
              TOM_F_HI: 39
        "#,
        );

        let kit = config.to_kit(None).unwrap();
        assert_eq!(kit.layout(), Layout::Merged);
        assert_eq!(kit.sensor("HIHAT"), Ok(SensorPin::Analog(4)));
        assert_eq!(kit.sensor("TOM_HM"), Ok(SensorPin::Unwired));
        assert_eq!(kit.note(Drum::Crash).as_int(), 57);
        assert_eq!(kit.note(Drum::FloorTomHi).as_int(), 39);
    }

    #[test]
    fn test_explicit_layout_wins() {
        let config = parse("layout: merged");
        assert_eq!(config.layout().unwrap(), Some(Layout::Merged));
        let kit = config.to_kit(Some(Layout::Split)).unwrap();
        assert_eq!(kit.layout(), Layout::Split);
    }

    #[test]
    fn test_invalid_values() {
        let result = parse("layout: triple").to_kit(None);
        assert!(matches!(
            result,
            Err(ConfigError::Kit(KitError::UnknownLayout(_)))
        ));

        let result = parse("notes:\n  crash: 100").to_kit(None);
        assert!(matches!(
            result,
            Err(ConfigError::Kit(KitError::NoteOutOfRange(100)))
        ));

        let result = parse("notes:\n  cowbell: 56").to_kit(None);
        assert!(matches!(
            result,
            Err(ConfigError::Kit(KitError::UnknownDrum(_)))
        ));

        let result = parse("sensors:\n  SNARE: 20").to_kit(None);
        assert!(matches!(
            result,
            Err(ConfigError::Kit(KitError::InvalidSensorPin(20)))
        ));

        // HIHAT only exists in the merged layout.
        let result = parse("sensors:\n  HIHAT: 4").to_kit(None);
        assert!(matches!(
            result,
            Err(ConfigError::Kit(KitError::UnknownSlot { .. }))
        ));
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "layout: split\nsensors:\n  HIHAT_O: 5").unwrap();

        let kit = KitConfig::load(Some(file.path()))
            .unwrap()
            .to_kit(None)
            .unwrap();
        assert_eq!(kit.sensor("HIHAT_O"), Ok(SensorPin::Analog(5)));
    }

    #[test]
    #[serial]
    fn test_missing_file() {
        let result = KitConfig::load(Some(Path::new("/nonexistent/kit.yaml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    #[serial]
    fn test_environment_layout() {
        let original = std::env::var("DRUMKIT_LAYOUT").ok();

        std::env::set_var("DRUMKIT_LAYOUT", "merged");
        let config = KitConfig::load(None).unwrap();
        assert_eq!(config.layout().unwrap(), Some(Layout::Merged));

        match original {
            Some(val) => std::env::set_var("DRUMKIT_LAYOUT", val),
            None => std::env::remove_var("DRUMKIT_LAYOUT"),
        }
    }
}
