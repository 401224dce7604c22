//! List command implementation.
//!
//! Prints the sprite inventory and the shared palette.

use clap::Args;
use serde::Serialize;

use crate::error::{Result, SpriteError};
use crate::output::Printer;
use crate::sprites::SpriteRegistry;
use crate::types::Palette;

/// List the sprites this tool can draw
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the inventory as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// One sprite in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteEntry {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub randomized: bool,
    pub file: String,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let registry = SpriteRegistry::builtin();

    if args.json {
        println!("{}", to_json(&registry)?);
    } else {
        print_inventory(&registry, &Palette::tabby(), printer);
    }

    Ok(())
}

/// Describe every registered sprite.
pub fn entries(registry: &SpriteRegistry) -> Vec<SpriteEntry> {
    registry
        .iter()
        .map(|c| SpriteEntry {
            name: c.name().to_string(),
            width: c.size(),
            height: c.size(),
            randomized: c.randomized(),
            file: c.file_name(),
        })
        .collect()
}

/// Inventory as pretty-printed JSON.
pub fn to_json(registry: &SpriteRegistry) -> Result<String> {
    serde_json::to_string_pretty(&entries(registry)).map_err(|e| SpriteError::Build {
        message: format!("Failed to serialize sprite list: {}", e),
        help: None,
    })
}

fn print_inventory(registry: &SpriteRegistry, palette: &Palette, printer: &Printer) {
    for entry in entries(registry) {
        let mut detail = format!("{}x{} -> {}", entry.width, entry.height, entry.file);
        if entry.randomized {
            detail.push_str(" (randomized)");
        }
        printer.sprite(&entry.name, &detail);
    }

    let colours: Vec<String> = palette
        .colour_names()
        .into_iter()
        .filter_map(|name| palette.get(name).map(|c| format!("{}={}", name, c)))
        .collect();
    printer.palette(&palette.name, &colours);
}
