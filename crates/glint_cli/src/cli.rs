use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{RenderConfig, RenderMode};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Execution mode as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Sequential,
    Parallel,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => RenderMode::Sequential,
            Mode::Parallel => RenderMode::Parallel,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render a JSON scene with a Phong ray caster")]
pub struct Args {
    /// Scene file (JSON); renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Maximum trace depth (1 disables reflections)
    #[arg(long, short = 'd', default_value = "5")]
    pub max_depth: u32,

    /// Render on one thread with progress, or in parallel row bands
    #[arg(long, value_enum, default_value = "parallel")]
    pub mode: Mode,

    /// Worker threads for parallel mode (defaults to available cores)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings described by these arguments.
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::new(self.width, self.height)
            .with_max_depth(self.max_depth)
            .with_mode(self.mode.into());
        config.threads = self.threads;
        config
    }
}
