//! Board view: every hex of a configured board, rotated as one group

use super::hex_polygon;
use crate::config::BoardConfig;
use crate::geometry::{points_attr, BoundingBox, ViewWindow};
use crate::grid::{HexCell, Point2};
use crate::movement::ReachableSet;
use svg::node::element::Group;
use svg::Document;

/// Board cells plus the window and pivot needed to draw them
#[derive(Clone, Debug)]
pub struct BoardView {
    pub cells: Vec<HexCell>,
    pub window: ViewWindow,
    /// Rotation pivot (center of the cells' bounding box)
    pub pivot: Point2,
    pub rotation: f64,
    pub border: f64,
}

impl BoardView {
    pub fn new(config: &BoardConfig) -> Self {
        let cells = config.cells();
        let (window, pivot) = match BoundingBox::of_cells(&cells) {
            Some(bounds) => (bounds.padded(config.padding()), bounds.center()),
            None => (ViewWindow::new(0.0, 0.0, 400.0, 400.0), Point2::new(200.0, 200.0)),
        };
        tracing::debug!(
            "board radius={} cells={} viewBox={}",
            config.radius,
            cells.len(),
            window
        );
        Self {
            cells,
            window,
            pivot,
            rotation: config.rotation,
            border: config.border,
        }
    }

    /// Whole-pixel document size
    pub fn pixel_size(&self) -> (u32, u32) {
        self.window.pixel_size()
    }

    /// SVG transform rotating the whole board around its center
    pub fn group_transform(&self) -> String {
        format!("rotate({} {} {})", self.rotation, self.pivot.x, self.pivot.y)
    }
}

/// Render a board as an SVG document. The center hex and reachable hexes
/// get their own fills; rotation applies to the board as a whole.
pub fn board_document(view: &BoardView, reachable: &ReachableSet) -> Document {
    let (width, height) = view.pixel_size();

    let mut group = Group::new().set("transform", view.group_transform());
    for cell in &view.cells {
        group = group.add(hex_polygon(
            cell,
            points_attr(&cell.points),
            reachable,
            view.border,
        ));
    }

    Document::new()
        .set("viewBox", view.window.to_string())
        .set("width", width)
        .set("height", height)
        .add(group)
}
