//! Command-line options.

use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::playfield::Playfield;

#[derive(Parser, Debug, Clone)]
#[command(name = "ball-sim", about = "Soft balls bumping around a window")]
pub struct Config {
    /// Playfield width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Playfield height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Frames (and ticks) per second
    #[arg(long, default_value_t = 30)]
    pub fps: u64,

    /// Seed for random spawns; drawn at startup when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// TrueType font for the status line; the bundled font when absent
    #[arg(long)]
    pub font: Option<PathBuf>,
}

pub const BUNDLED_FONT: &str = "DejaVuSans-Bold.ttf";

// Common install locations of a bold sans, tried after the bundled font
const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Directory holding `assets/`, next to the manifest when run through cargo.
pub fn asset_dir() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.push("assets");
        path
    } else {
        PathBuf::from("./assets")
    }
}

impl Config {
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width as f64, self.height as f64)
    }

    /// The configured seed, or a fresh one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Fonts to try for the status line, in order.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        let mut fonts = Vec::with_capacity(SYSTEM_FONTS.len() + 2);
        if let Some(font) = &self.font {
            fonts.push(font.clone());
        }
        fonts.push(asset_dir().join(BUNDLED_FONT));
        fonts.extend(SYSTEM_FONTS.iter().map(|p| PathBuf::from(*p)));
        fonts
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::parse_from(["ball-sim"])
    }
}
