//! Progress reporting for the smudge CLI.
//!
//! Each line is a right-aligned verb and a message, in the style of Cargo.
//! Lines go to stderr so that `list --json` owns stdout.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Colour of the verb column.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Progress,
    Listing,
    Fault,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => GREEN,
            Tone::Listing => CYAN,
            Tone::Fault => RED,
        }
    }
}

enum Sink {
    Stderr,
    Memory(RefCell<Vec<String>>),
}

/// Reports what the CLI draws and where it writes it.
pub struct Printer {
    color: bool,
    sink: Sink,
}

impl Printer {
    /// Print to stderr, with colour when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            sink: Sink::Stderr,
        }
    }

    /// Keep plain lines in memory instead of printing them. See [`Printer::lines`].
    pub fn capture() -> Self {
        Self {
            color: false,
            sink: Sink::Memory(RefCell::default()),
        }
    }

    /// Lines kept by a capturing printer. Empty for one that prints.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stderr => Vec::new(),
            Sink::Memory(lines) => lines.borrow().clone(),
        }
    }

    /// `  Generating 9 sprites into assets/sprites`
    pub fn generating(&self, count: usize, dir: &Path) {
        let message = format!("{} into {}", sprites(count), display_path(dir));
        self.emit(Tone::Progress, "Generating", &message);
    }

    /// `       Wrote assets/sprites/smudge_idle.png (64x64)`
    pub fn wrote(&self, path: &Path, (width, height): (u32, u32)) {
        let size = self.dim(&format!("({}x{})", width, height));
        self.emit(Tone::Progress, "Wrote", &format!("{} {}", display_path(path), size));
    }

    /// A sprite that could not be drawn or written.
    pub fn failed(&self, sprite: &str, error: &dyn Display) {
        self.emit(Tone::Fault, "Failed", &format!("{}: {}", sprite, error));
    }

    pub fn finished(&self, count: usize) {
        self.emit(Tone::Progress, "Finished", &sprites(count));
    }

    /// One inventory row: the sprite name and a dimmed summary.
    pub fn sprite(&self, name: &str, detail: &str) {
        self.emit(Tone::Listing, "Sprite", &format!("{} {}", name, self.dim(detail)));
    }

    pub fn palette(&self, name: &str, colours: &[String]) {
        let colours = self.dim(&colours.join(", "));
        self.emit(Tone::Listing, "Palette", &format!("{} {}", name, colours));
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        };

        match &self.sink {
            Sink::Stderr => {
                let _ = writeln!(io::stderr().lock(), "{line}");
            }
            Sink::Memory(lines) => lines.borrow_mut().push(line),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `sprites(1)` is "1 sprite", anything else takes the plural.
pub fn sprites(count: usize) -> String {
    match count {
        1 => "1 sprite".to_string(),
        n => format!("{} sprites", n),
    }
}

/// `path` relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
