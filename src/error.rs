use miette::Diagnostic;
use thiserror::Error;

use crate::render::RasterError;

/// Main error type for smudge operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(smudge::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(smudge::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to draw sprite '{sprite}': {source}")]
    #[diagnostic(
        code(smudge::raster),
        help("The sprite's layer geometry was rejected by the rasterizer")
    )]
    Raster {
        sprite: String,
        #[source]
        source: RasterError,
    },

    #[error("Unknown palette colour: {name}")]
    #[diagnostic(code(smudge::palette))]
    Palette { name: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(smudge::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
