//! Vector and raster output
//!
//! The [`Renderer`] trait is the seam between the geometry engine and a
//! concrete output format. [`SvgRenderer`] builds SVG documents with the
//! `svg` crate and, with the `raster` feature, turns them into PNG bytes.

mod board;
mod card;
pub mod print;
mod raster;

pub use board::{board_document, BoardView};
pub use card::{card_document, wrap_lines, CardView};
pub use raster::rasterize_svg;

use crate::card::Card;
use crate::config::{BoardConfig, CardLayout};
use crate::error::RenderError;
use crate::grid::HexCell;
use crate::movement::ReachableSet;
use svg::node::element::Polygon;

pub use svg::Document;

/// Fill for hexes that are neither the center nor reachable
pub const FILL_EMPTY: &str = "#ffffff";
/// Fill for reachable hexes
pub const FILL_REACHABLE: &str = "#b7f0b7";
/// Fill for the center hex
pub const FILL_CENTER: &str = "#000000";
/// Outline of ordinary hexes
pub const STROKE_HEX: &str = "#333";
/// Outline of the center hex
pub const STROKE_CENTER: &str = "#ffffff";

/// Produces documents for boards and cards, and pixels from documents
pub trait Renderer {
    type Document;

    /// Board view with reachable hexes highlighted
    fn board_document(&self, config: &BoardConfig, reachable: &ReachableSet) -> Self::Document;

    /// Printable move card
    fn card_document(&self, card: &Card, layout: &CardLayout) -> Self::Document;

    /// Rasterize a document to PNG bytes at the given pixel size
    fn rasterize(
        &self,
        document: &Self::Document,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError>;
}

/// SVG output via the `svg` crate
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    type Document = Document;

    fn board_document(&self, config: &BoardConfig, reachable: &ReachableSet) -> Document {
        board_document(&BoardView::new(config), reachable)
    }

    fn card_document(&self, card: &Card, layout: &CardLayout) -> Document {
        card_document(card, layout)
    }

    fn rasterize(&self, document: &Document, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        rasterize_svg(&document.to_string(), width, height)
    }
}

/// Polygon for one hex, styled by center identity and reachability.
/// `points` is the already-transformed `points` attribute.
fn hex_polygon(cell: &HexCell, points: String, reachable: &ReachableSet, stroke_width: f64) -> Polygon {
    let polygon = Polygon::new().set("points", points);
    if cell.is_origin() {
        polygon
            .set("fill", FILL_CENTER)
            .set("stroke", STROKE_CENTER)
            .set("stroke-width", stroke_width.max(2.0))
    } else {
        let fill = if reachable.contains(cell.axial()) {
            FILL_REACHABLE
        } else {
            FILL_EMPTY
        };
        polygon
            .set("fill", fill)
            .set("stroke", STROKE_HEX)
            .set("stroke-width", stroke_width)
    }
}
