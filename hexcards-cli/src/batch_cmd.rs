//! Batch command - parse card lines and render every card
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_cards(), export_json(), render_cards()
//! - Level 3: render_card()
//! - Level 4: file naming

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hexcards_core::card::{parse_batch, save_cards};
use hexcards_core::render::print;
use hexcards_core::{Card, CardLayout, Renderer, SvgRenderer};

use crate::output::{write_file, write_png};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BatchArgs {
    /// Text file with one card per line: title, flavor, moves...
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Write the parsed cards as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Directory for per-card SVGs and the print sheet
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Also write a PNG for every card
    #[arg(long)]
    pub png: bool,

    /// Print resolution
    #[arg(long, default_value = "300")]
    pub dpi: f64,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run batch command
///
/// 1. Parse every card (any bad line aborts the whole batch)
/// 2. Export JSON if requested
/// 3. Render cards and the print sheet if an output directory is given
pub fn run(args: BatchArgs) -> Result<()> {
    let cards = load_cards(&args.input)?;
    tracing::info!("Parsed {} cards from {}", cards.len(), args.input.display());

    if let Some(path) = &args.json {
        export_json(&cards, path)?;
    }

    match &args.out_dir {
        Some(dir) => {
            let layout = CardLayout::default().with_dpi(args.dpi);
            render_cards(&cards, &layout, dir, args.png)?;
        }
        None => print_summary(&cards),
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_cards(input: &Path) -> Result<Vec<Card>> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    parse_batch(&text).with_context(|| format!("Failed to parse {}", input.display()))
}

fn export_json(cards: &[Card], path: &Path) -> Result<()> {
    save_cards(cards, path)?;
    tracing::info!("Saved {} cards to {}", cards.len(), path.display());
    Ok(())
}

fn render_cards(cards: &[Card], layout: &CardLayout, dir: &Path, png: bool) -> Result<()> {
    let mut svgs = Vec::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        svgs.push(render_card(card, layout, &card_path(dir, i, card), png)?);
    }
    write_file(&dir.join("cards.html"), print::card_sheet(&svgs).as_bytes())
}

fn print_summary(cards: &[Card]) {
    for card in cards {
        println!("{}: {} [{}]", card.title, card.flavor, card.movements_text());
    }
}

// ============================================================================
// LEVEL 3 - SINGLE CARD
// ============================================================================

/// Render one card to `<stem>.svg` (and `<stem>.png`), returning the SVG text
fn render_card(card: &Card, layout: &CardLayout, stem: &Path, png: bool) -> Result<String> {
    let document = SvgRenderer.card_document(card, layout);
    let svg = document.to_string();
    write_file(&stem.with_extension("svg"), svg.as_bytes())?;
    if png {
        write_png(
            &document,
            layout.pixel_width(),
            layout.pixel_height(),
            &stem.with_extension("png"),
        )?;
    }
    Ok(svg)
}

// ============================================================================
// LEVEL 4 - NAMING
// ============================================================================

/// Output path stem for a card. Numbered so cards sharing a title don't
/// overwrite each other.
fn card_path(dir: &Path, index: usize, card: &Card) -> PathBuf {
    let stem = card.file_stem();
    if stem.is_empty() {
        dir.join(format!("{:02}", index + 1))
    } else {
        dir.join(format!("{:02}_{}", index + 1, stem))
    }
}

// ============================================================================
// TESTS
// ============================================================================
