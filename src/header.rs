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
//! Renders a kit back into the `drums.h` form the firmware includes.
use std::fmt::Write;

use crate::drum::Drum;
use crate::kit::Kit;

const GUARD: &str = "drums_h";

/// Renders the kit as a C header.
pub fn render(kit: &Kit) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_header(&mut out, kit)?;
    Ok(out)
}

fn write_header(out: &mut String, kit: &Kit) -> std::fmt::Result {
    let layout = kit.layout();
    writeln!(out, "/* Drum kit map, {} layout (revision {}). */", layout, layout.revision())?;
    writeln!(out)?;
    writeln!(out, "#ifndef {}", GUARD)?;
    writeln!(out, "#define {}", GUARD)?;

    writeln!(out)?;
    writeln!(out, "// Drum name to MIDI note")?;
    for drum in Drum::ALL {
        define(out, &format!("PLAY_{}", drum.identifier()), kit.note(drum))?;
    }

    writeln!(out)?;
    writeln!(out, "// Drum indexing/channel assignment")?;
    for slot in kit.slots() {
        define(out, slot.name, slot.channel)?;
    }
    writeln!(out)?;
    define(out, "DRUM_CHANNELS", layout.channel_count())?;

    if layout.publishes_masks() {
        writeln!(out)?;
        writeln!(out, "// Drum channel masks")?;
        for slot in kit.slots() {
            if let Some(mask) = slot.mask {
                define(out, &format!("MASK_{}", slot.name), format!("0x{:04X}", mask))?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "// Drum sensors")?;
    for row in kit.rows() {
        define(out, &format!("SENSOR_{}", row.name), row.sensor.raw())?;
    }

    writeln!(out)?;
    writeln!(out, "#endif // {}", GUARD)
}

fn define(out: &mut String, name: &str, value: impl std::fmt::Display) -> std::fmt::Result {
    writeln!(out, "#define {:<16}{}", name, value)
}
