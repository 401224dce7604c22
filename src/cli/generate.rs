//! Generate command implementation.
//!
//! Draws each registered sprite and writes it as a PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::RngCore;

use crate::error::{Result, SpriteError};
use crate::output::{sprites, Printer};
use crate::render::write_png;
use crate::sprites::{Composer, SpriteRegistry};
use crate::types::Palette;

/// Draw every sprite and write them as PNG files
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(long, short, default_value = "assets/sprites")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling, 1 to 64)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Only draw the named sprite (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let registry = SpriteRegistry::builtin();
    let palette = Palette::tabby();
    let mut rng = rand::thread_rng();

    generate(&args, &registry, &palette, &mut rng, printer)?;
    Ok(())
}

/// Render the selected sprites into `args.output`.
///
/// A sprite that fails, either while drawing or while its PNG is written, is
/// reported and skipped; the rest are still written. If any failed, the whole
/// run returns an error naming them. Returns the written paths in registry
/// order.
pub fn generate(
    args: &GenerateArgs,
    registry: &SpriteRegistry,
    palette: &Palette,
    rng: &mut dyn RngCore,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    for name in &args.only {
        if registry.get(name).is_none() {
            return Err(SpriteError::Build {
                message: format!("Unknown sprite: {}", name),
                help: Some(format!("Known sprites: {}", registry.names().join(", "))),
            });
        }
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| SpriteError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let selected: Vec<_> = registry
        .iter()
        .filter(|c| args.only.is_empty() || args.only.iter().any(|n| n == c.name()))
        .collect();

    printer.generating(selected.len(), &args.output);

    let mut written = Vec::new();
    let mut failed = Vec::new();

    for composer in selected {
        let path = args.output.join(composer.file_name());
        match draw(composer, palette, rng, &path, args.scale) {
            Ok(size) => {
                printer.wrote(&path, size);
                written.push(path);
            }
            Err(e) => {
                printer.failed(composer.name(), &e);
                failed.push(composer.name());
            }
        }
    }

    if !failed.is_empty() {
        return Err(SpriteError::Build {
            message: format!("{} failed: {}", sprites(failed.len()), failed.join(", ")),
            help: None,
        });
    }

    printer.finished(written.len());
    Ok(written)
}

/// Render one sprite and write it to `path`. Returns the written pixel size.
fn draw(
    composer: &dyn Composer,
    palette: &Palette,
    rng: &mut dyn RngCore,
    path: &Path,
    scale: u32,
) -> Result<(u32, u32)> {
    let sprite = composer.render(palette, rng)?;
    write_png(&sprite, path, scale)
}
