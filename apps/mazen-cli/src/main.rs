use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mazen_common::GridSpec;
use mazen_layout::generate_boundary_walls;
use mazen_render::{DebugTextRenderer, LabelBoard};
use mazen_session::MazeConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mazen-cli", about = "CLI tool for grid enclosures")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the boundary walls for a grid
    Layout {
        #[arg(short, long, default_value = "10")]
        length: u32,
        #[arg(short, long, default_value = "10")]
        width: u32,
        #[arg(short, long, default_value = "100")]
        cell_size: f32,
        /// Emit JSON instead of one line per wall
        #[arg(long)]
        json: bool,
    },
    /// Run a headless session and print each frame
    Run {
        /// YAML config; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Frames to run when the config has no script
        #[arg(short, long, default_value = "3")]
        frames: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("mazen-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("layout: {}", mazen_layout::crate_info());
            println!("input: {}", mazen_input::crate_info());
            println!("render: {}", mazen_render::crate_info());
            println!("session: {}", mazen_session::crate_info());
        }
        Commands::Layout {
            length,
            width,
            cell_size,
            json,
        } => {
            let grid = GridSpec::new(length, width, cell_size);
            let walls = generate_boundary_walls(&grid)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&walls)?);
            } else {
                println!("Grid {length}x{width} (cell {cell_size}): {} walls", walls.len());
                for wall in &walls {
                    println!(
                        "  ({}, {}) {} [{}]",
                        wall.cell.x, wall.cell.z, wall.orientation, wall.texture_id
                    );
                }
            }
        }
        Commands::Run { config, frames } => {
            let config = match config {
                Some(path) => MazeConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => MazeConfig::default(),
            };

            let mut hud = LabelBoard::new();
            let mut session = config.enclosure()?.start_session(&mut hud)?;
            let mut renderer = DebugTextRenderer::new();

            for (id, text) in hud.iter() {
                println!("HUD {id}: {text}");
            }

            if config.script.is_empty() {
                for _ in 0..frames {
                    if let Some(out) = session.tick(&mut renderer) {
                        print!("{out}");
                    }
                }
            } else {
                for step in &config.script {
                    tracing::debug!(?step, "script step");
                    for out in session.apply_step(step, &mut renderer) {
                        print!("{out}");
                    }
                }
            }

            session.stop();
            let state = session.viewer().state();
            println!(
                "Done: frames={}, cell=({}, {}), heading={:.3}",
                renderer.frames(),
                state.position_cell.x,
                state.position_cell.z,
                session.viewer().heading()
            );
        }
    }

    Ok(())
}
