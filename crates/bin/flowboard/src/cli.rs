//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render workflow dashboard widgets and play their counter animation.
#[derive(Debug, Parser)]
#[command(name = "flowboard", version, about)]
pub struct Cli {
    /// Configuration file.
    #[arg(long, global = true, default_value = "flowboard.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a status badge as HTML.
    Badge {
        /// Workflow status code, e.g. `IN_PROGRESS`.
        status: String,
        /// Omit the leading indicator dot.
        #[arg(long)]
        no_dot: bool,
    },
    /// Print a stats card as HTML.
    Card {
        /// Caption above the value.
        label: String,
        /// Target value of the counter.
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Smaller line under the value.
        #[arg(long)]
        subtitle: Option<String>,
        /// Color preset: default, primary, success, warning, danger, info.
        #[arg(long, default_value = "default")]
        variant: String,
        /// Show a progress bar filled to this percentage.
        #[arg(long)]
        progress: Option<f64>,
        /// SVG path data for the built-in icon.
        #[arg(long)]
        icon_path: Option<String>,
        /// Raw markup replacing the icon entirely.
        #[arg(long, conflicts_with = "icon_path")]
        icon_html: Option<String>,
        /// Render the value shown at mount time (`0`) instead of the target.
        #[arg(long)]
        initial: bool,
    },
    /// Play the counter animation, printing one displayed value per line.
    Animate {
        /// Target value of the counter.
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Change the target mid-flight.
        #[arg(long, allow_negative_numbers = true)]
        retarget_to: Option<i64>,
        /// Number of frames to show before retargeting.
        #[arg(long, default_value_t = 10, requires = "retarget_to")]
        after_frames: usize,
        /// Step a simulated clock instead of waiting for real frames.
        #[arg(long)]
        instant: bool,
    },
}
