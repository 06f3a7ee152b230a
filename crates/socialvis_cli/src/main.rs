//! Command-line renderer for relation snapshots.
//!
//! # Responsibility
//! - Load an evaluated snapshot from disk and print the rendered panel.
//! - Keep output deterministic so renders can be diffed.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use socialvis_core::{
    default_log_level, init_logging, HtmlPanelSink, JsonPanelSink, PanelOptions, PanelService,
    RelationSnapshot,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "socialvis")]
#[command(about = "Render access-control panels from evaluated relation snapshots", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SOCIALVIS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "SOCIALVIS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a snapshot file to stdout
    Render {
        /// Snapshot JSON file (`{"relations": {...}}`)
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Panel heading for HTML output
        #[arg(long)]
        title: Option<String>,

        /// Hide blocked/muted rows on user cards
        #[arg(long)]
        hide_block_and_mute: bool,
    },
    /// Print the core version
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    match cli.command {
        Commands::Render {
            snapshot,
            format,
            title,
            hide_block_and_mute,
        } => {
            let relations = RelationSnapshot::from_json_path(&snapshot)
                .with_context(|| format!("loading snapshot {}", snapshot.display()))?;
            let service = PanelService::new(relations);

            let output = match format {
                OutputFormat::Html => {
                    let mut options = PanelOptions::default();
                    if let Some(title) = title {
                        options.title = title;
                    }
                    options.show_block_and_mute = !hide_block_and_mute;
                    service.render(&HtmlPanelSink::new(options))
                }
                OutputFormat::Json => service
                    .render(&JsonPanelSink)
                    .context("serializing view model")?,
            };
            println!("{output}");
            log::info!(
                "event=render module=cli status=ok format={}",
                match format {
                    OutputFormat::Html => "html",
                    OutputFormat::Json => "json",
                }
            );
        }
        Commands::Version => {
            println!("socialvis_core version={}", socialvis_core::core_version());
        }
    }

    Ok(())
}
