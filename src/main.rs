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
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{crate_version, Parser, Subcommand};
use drumkit::config::KitConfig;
use drumkit::constants::PERCUSSION_MIDI_CHANNEL;
use drumkit::{header, verify, Drum, HitSet, Kit, Layout};
use tracing::info;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Drum kit channel, note and sensor map."
)]
struct Cli {
    /// The path to a kit config file.
    #[arg(short, long, global = true)]
    kit: Option<PathBuf>,

    /// The channel layout to use (merged or split). Overrides the kit config.
    #[arg(short, long, global = true)]
    layout: Option<Layout>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the kit table.
    Table {
        /// Print the table as YAML.
        #[arg(long)]
        yaml: bool,
    },
    /// Verifies the kit's channels, masks, sensors and notes.
    Verify {},
    /// Prints the kit as a C header.
    Header {
        /// Write the header to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shows the channel, note, sensor and mask of a drum.
    Drum {
        /// The drum identifier (e.g. TOM_F_LO) or name (e.g. floor_tom_lo).
        name: String,
    },
    /// Lists the drums that play a MIDI note.
    Note {
        /// The MIDI note number.
        number: u8,
    },
    /// Decodes a hit-state word into drums.
    Hits {
        /// The word, in decimal or 0x-prefixed hex.
        word: String,
    },
}

fn load_kit(cli: &Cli) -> Result<Kit, Box<dyn Error>> {
    let config = KitConfig::load(cli.kit.as_deref())?;
    Ok(config.to_kit(cli.layout)?)
}

fn parse_word(word: &str) -> Result<u16, Box<dyn Error>> {
    let word = word.trim();
    match word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
    {
        Some(hex) => Ok(u16::from_str_radix(hex, 16)?),
        None => Ok(word.parse::<u16>()?),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let kit = load_kit(&cli)?;

    match cli.command {
        Commands::Table { yaml } => {
            if yaml {
                print!("{}", serde_yml::to_string(&kit.rows())?);
                return Ok(());
            }

            println!(
                "Layout: {} (revision {}, {} channels, MIDI channel {})",
                kit.layout(),
                kit.layout().revision(),
                kit.layout().channel_count(),
                PERCUSSION_MIDI_CHANNEL
            );
            println!(
                "{:<10} {:>7} {:>8} {:>7} {:>7}",
                "Slot", "Channel", "Notes", "Sensor", "Mask"
            );
            for row in kit.rows() {
                let notes: Vec<String> = row.notes.iter().map(|n| n.to_string()).collect();
                let mask = row
                    .mask
                    .map(|mask| format!("0x{:04X}", mask))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<10} {:>7} {:>8} {:>7} {:>7}",
                    row.name,
                    row.channel,
                    notes.join("/"),
                    row.sensor.to_string(),
                    mask
                );
            }
        }
        Commands::Verify {} => {
            let report = verify::verify_kit(&kit);
            verify::print_report(&report, &kit);
            if report.has_errors() {
                return Err("kit verification failed".into());
            }
        }
        Commands::Header { output } => {
            let rendered = header::render(&kit)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    info!(path = %path.display(), "Wrote header");
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Drum { name } => {
            let drum = name.parse::<Drum>()?;
            let slot = kit.slot_for_drum(drum)?;
            println!("{} ({})", drum, drum.name());
            println!("- slot: {}", slot.name);
            println!("- channel: {}", slot.channel);
            println!("- note: {}", kit.note(drum));
            println!("- sensor: {}", kit.sensor(slot.name)?);
            match kit.mask(drum) {
                Some(mask) => println!("- mask: 0x{:04X}", mask),
                None => println!("- mask: none ({} layout)", kit.layout()),
            }
        }
        Commands::Note { number } => {
            let drums = kit.drums_for_note(number);
            if drums.is_empty() {
                println!("No drums play note {}.", number);
                return Ok(());
            }

            println!("Drums (count: {}):", drums.len());
            for drum in drums {
                println!("- {}", drum);
            }
        }
        Commands::Hits { word } => {
            let hits = HitSet::from_bits(parse_word(&word)?);
            let drums = kit.drums_in(hits);
            if drums.is_empty() {
                println!("No drums hit in {}.", hits);
                return Ok(());
            }

            println!("Hits in {} (count: {}):", hits, drums.len());
            for drum in drums {
                println!("- {} (channel {})", drum, kit.channel(drum)?);
            }
        }
    }

    Ok(())
}
