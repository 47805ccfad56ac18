//! Board command - render a hex board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_config(), render_outputs()
//! - Level 3: (delegated to hexcards-core render module)
//! - Level 4: argument parsing utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexcards_core::card::parse_movement_list;
use hexcards_core::render::{board_document, print, BoardView};
use hexcards_core::{resolve_reachable, BoardConfig, ReachableSet};

use crate::output::{write_file, write_png};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BoardArgs {
    /// Board config JSON file; the flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of rings around the center hex
    #[arg(long)]
    pub radius: Option<u32>,

    /// Distance between opposite hex corners, in pixels
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Spacing multiplier between hex centers (1 = snug)
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Whole-board rotation in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,

    /// Hex outline width
    #[arg(long)]
    pub border: Option<f64>,

    /// Movement tokens to highlight, e.g. "1F, 2RB"
    #[arg(long, default_value = "")]
    pub moves: String,

    /// SVG output file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Also write a PNG rendering
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Also write a printable HTML page
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run board command
///
/// 1. Resolve the board config (file, then flags)
/// 2. Resolve highlighted moves
/// 3. Render and write every requested output
pub fn run(args: BoardArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let reachable = resolve_moves(&args.moves)?;

    tracing::info!(
        "Rendering board: radius={}, diameter={}, spacing={}, rotation={}",
        config.radius,
        config.diameter,
        config.spacing,
        config.rotation
    );

    render_outputs(&config, &reachable, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the config file if given and apply flag overrides
fn resolve_config(args: &BoardArgs) -> Result<BoardConfig> {
    let mut config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(diameter) = args.diameter {
        config.diameter = diameter;
    }
    if let Some(spacing) = args.spacing {
        config.spacing = spacing;
    }
    if let Some(rotation) = args.rotation {
        config.rotation = rotation;
    }
    if let Some(border) = args.border {
        config.border = border;
    }
    Ok(config)
}

fn resolve_moves(moves: &str) -> Result<ReachableSet> {
    let tokens = parse_movement_list(1, moves).context("Invalid --moves")?;
    Ok(resolve_reachable(&tokens))
}

fn render_outputs(config: &BoardConfig, reachable: &ReachableSet, args: &BoardArgs) -> Result<()> {
    let view = BoardView::new(config);
    let (width, height) = view.pixel_size();
    let document = board_document(&view, reachable);
    let svg = document.to_string();

    write_file(&args.output, svg.as_bytes())?;

    if let Some(path) = &args.png {
        write_png(&document, width, height, path)?;
    }
    if let Some(path) = &args.html {
        write_file(path, print::board_page(&svg, width, height).as_bytes())?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
