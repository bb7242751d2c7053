//! tetris-lite: simple falling-block puzzle in the terminal.

mod app;
mod input;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, ValueEnum};
use std::time::Duration;
use tetris_lite::game::DEFAULT_TICK_MS;

/// Options derived from the CLI that affect how the engine is driven.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Gravity interval between two ticks.
    pub tick_interval: Duration,
    /// Piece sequence seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        Self {
            tick_interval: Duration::from_millis(args.tick_ms.max(1)),
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let theme = theme::Theme::load(args.theme.as_deref(), args.palette)
        .unwrap_or_else(|_| theme::Theme::default_for_palette(args.palette));
    let config = GameConfig::from(&args);
    let mut app = App::new(config, theme);
    app.run()?;
    Ok(())
}

/// Simple falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tetris-lite",
    version,
    about = "Simple falling-block puzzle in the terminal. Complete a row to clear it; 10 points per row.",
    long_about = "tetris-lite is a small falling-block puzzle.\n\n\
        Five pieces (square, T, S, Z, I) fall one row per tick. Fill a row edge to edge to clear \
        it for 10 points. The game ends when a new piece has no room to spawn.\n\n\
        CONTROLS:\n  Left/Right or h/l  Move    Up or k  Rotate    Down or j  Soft drop\n  \
        R  Restart (after game over)    Q / Esc  Quit"
)]
pub struct Args {
    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_name = "MS")]
    pub tick_ms: u64,

    /// Seed for the piece sequence (random if not set).
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Path to theme file (btop-style theme[key]=\"value\"). Uses One Dark if not set.
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<std::path::PathBuf>,

    /// Colour palette: normal (theme), high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["tetris-lite"]).unwrap();
        assert_eq!(args.tick_ms, 500);
        assert_eq!(args.seed, None);
        assert_eq!(args.palette, Palette::Normal);
        let config = GameConfig::from(&args);
        assert_eq!(config.tick_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "tetris-lite",
            "--tick-ms",
            "0",
            "--seed",
            "9",
            "--palette",
            "contrast",
        ])
        .unwrap();
        assert_eq!(args.palette, Palette::HighContrast);
        let config = GameConfig::from(&args);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tick_interval, Duration::from_millis(1));
    }
}
