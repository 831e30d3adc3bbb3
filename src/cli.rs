use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Server-rendered HTML page snapshot to enhance.
    #[arg(long, required_unless_present = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in sample page instead of reading `--input`.
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// JSON file holding the persisted UI preferences.
    #[arg(long, default_value = "prefs.json")]
    pub prefs: PathBuf,

    /// Element id of the theme toggle control.
    #[arg(long, default_value = "theme-toggle")]
    pub toggle_id: String,

    /// Class marking transient flash banners.
    #[arg(long, default_value = "flash")]
    pub flash_class: String,

    /// Simulated toggle clicks applied after the initial theme load.
    #[arg(long, default_value_t = 0)]
    pub clicks: u32,

    /// Wait out the flash timers and strip the dismissed banners before writing.
    #[arg(long)]
    pub settle: bool,

    /// Milliseconds before banners start fading.
    #[arg(long, default_value_t = 4000)]
    pub fade_ms: u64,

    /// Milliseconds between the fade and the removal.
    #[arg(long, default_value_t = 500)]
    pub remove_ms: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
