//! poseport CLI
//!
//! Command-line interface for exporting skeletal keyframe animation from a
//! scene snapshot to engine-ready JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use poseport_export::{AnimationExporter, ExportOptions};
use poseport_scene::{MemoryScene, ObjectKind, SceneSource};

/// poseport - skeletal keyframe animation exporter
#[derive(Parser)]
#[command(name = "poseport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format for structured data
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Export animation data from a scene snapshot
    Export(ExportArgs),

    /// Show information about a scene snapshot
    Info(InfoArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the scene snapshot (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path for the animation document
    #[arg(short, long)]
    output: PathBuf,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Path to the scene snapshot (JSON)
    #[arg(short, long)]
    input: PathBuf,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => cmd_export(args),
        Commands::Info(args) => cmd_info(args, cli.format),
    }
}

fn load_scene(path: &Path) -> Result<MemoryScene> {
    MemoryScene::load(path)
        .with_context(|| format!("Failed to load scene snapshot {}", path.display()))
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    info!(path = %args.input.display(), "Loading scene snapshot");
    let scene = load_scene(&args.input)?;

    let exporter = AnimationExporter::with_options(ExportOptions {
        pretty: !args.compact,
    });
    exporter
        .export(&scene, &args.output)
        .context("Failed to export animation data")?;

    println!("Animation data saved to {}", args.output.display());
    Ok(())
}

fn cmd_info(args: InfoArgs, format: OutputFormat) -> Result<()> {
    let scene = load_scene(&args.input)?;

    let objects: Vec<_> = scene
        .selected_objects()
        .into_iter()
        .map(|id| {
            let name = scene.object_name(id).unwrap_or("<unnamed>").to_string();
            let kind = scene.object_kind(id);
            let bones = scene.armature_bones(id).len();
            let clip = scene.active_clip(id).map(|c| c.name.clone());
            (name, kind, bones, clip)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = objects
                .iter()
                .map(|(name, kind, bones, clip)| {
                    serde_json::json!({
                        "name": name,
                        "kind": kind,
                        "bones": bones,
                        "clip": clip,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("Scene snapshot: {}", args.input.display());
            println!("Selected objects: {}", objects.len());
            for (name, kind, bones, clip) in &objects {
                let kind = (*kind)
                    .map(|k| format!("{k:?}").to_lowercase())
                    .unwrap_or_else(|| "unknown".to_string());
                let clip = clip.as_deref().unwrap_or("-");
                println!("  {name:<24} {kind:<10} bones: {bones:<4} clip: {clip}");
            }

            let exportable = objects
                .iter()
                .filter(|(_, kind, _, clip)| *kind == Some(ObjectKind::Armature) && clip.is_some())
                .count();
            println!("\nExportable armatures: {exportable}");
        }
    }

    Ok(())
}
