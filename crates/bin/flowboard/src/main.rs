//! # flowboard — widget preview CLI
//!
//! Composition root that wires the domain, the animation driver and the HTML
//! renderer together behind a small command line.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file, then env vars)
//! - Initialize logging
//! - Render status badges and stats cards as HTML
//! - Play the stats card counter animation on tokio frames or a simulated clock
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod animate;
mod cli;
mod config;

use clap::Parser;
use flowboard_adapter_html::{render_stats_card, render_status_badge};
use flowboard_domain::animation::CounterFrame;
use flowboard_domain::format::group_thousands;
use flowboard_domain::status::WorkflowStatus;
use flowboard_domain::variant::Variant;
use flowboard_domain::widget::{StatsCardProps, StatusBadgeProps};
use tracing_subscriber::EnvFilter;

use crate::animate::{AnimationPlan, Retarget};
use crate::cli::{Cli, Command};
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Badge { status, no_dot } => {
            let resolved = WorkflowStatus::from_code(&status);
            if resolved.code() != status {
                tracing::warn!(%status, "unrecognized status, rendering as {resolved}");
            }
            let props = StatusBadgeProps::new(resolved).with_dot(!no_dot);
            println!("{}", render_status_badge(&props)?);
        }
        Command::Card {
            label,
            value,
            subtitle,
            variant,
            progress,
            icon_path,
            icon_html,
            initial,
        } => {
            let mut builder = StatsCardProps::builder()
                .label(label)
                .value(value)
                .variant(Variant::from_name(&variant));
            if let Some(subtitle) = subtitle {
                builder = builder.subtitle(subtitle);
            }
            if let Some(progress) = progress {
                builder = builder.progress(progress);
            }
            if let Some(icon_path) = icon_path {
                builder = builder.icon_path(icon_path);
            }
            let props = builder.build();
            let displayed = if initial { 0 } else { props.value };
            println!(
                "{}",
                render_stats_card(&props, displayed, icon_html.as_deref())?
            );
        }
        Command::Animate {
            value,
            retarget_to,
            after_frames,
            instant,
        } => {
            let settings = config.animation_settings()?;
            let plan = AnimationPlan {
                target: value,
                retarget: retarget_to.map(|to| Retarget { to, after_frames }),
            };
            let print = |frame: CounterFrame| println!("{}", group_thousands(frame.displayed));
            if instant {
                animate::play_instant(&plan, settings, config.frame_interval(), print);
            } else {
                animate::play_live(&plan, settings, config.frame_interval(), print).await;
            }
        }
    }

    Ok(())
}
