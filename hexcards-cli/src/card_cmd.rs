//! Card command - render a single move card
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_card(), render_outputs()
//! - Level 3: (delegated to hexcards-core render module)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexcards_core::card::parse_movement_list;
use hexcards_core::render::print;
use hexcards_core::{Card, CardLayout, Renderer, SvgRenderer};

use crate::output::{write_file, write_png};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct CardArgs {
    /// Card title
    #[arg(long, default_value = "Tactical Move")]
    pub title: String,

    /// Flavor text printed under the title
    #[arg(long, default_value = "A short flavorful description.")]
    pub flavor: String,

    /// Movement tokens, e.g. "1F, 2RB"
    #[arg(long, default_value = "1F")]
    pub moves: String,

    /// Print resolution
    #[arg(long, default_value = "300")]
    pub dpi: f64,

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

/// Run card command
pub fn run(args: CardArgs) -> Result<()> {
    let card = build_card(&args)?;
    let layout = CardLayout::default().with_dpi(args.dpi);

    tracing::info!(
        "Rendering card {:?} ({}) at {} dpi",
        card.title,
        card.movements_text(),
        layout.dpi
    );

    render_outputs(&card, &layout, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_card(args: &CardArgs) -> Result<Card> {
    let movements = parse_movement_list(1, &args.moves).context("Invalid --moves")?;
    Ok(Card::new(args.title.trim(), args.flavor.trim(), movements))
}

fn render_outputs(card: &Card, layout: &CardLayout, args: &CardArgs) -> Result<()> {
    let renderer = SvgRenderer;
    let document = renderer.card_document(card, layout);
    let svg = document.to_string();

    write_file(&args.output, svg.as_bytes())?;

    if let Some(path) = &args.png {
        write_png(&document, layout.pixel_width(), layout.pixel_height(), path)?;
    }
    if let Some(path) = &args.html {
        write_file(path, print::card_page(&card.title, &svg).as_bytes())?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
