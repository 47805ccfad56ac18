//! Printable move card with a fitted mini board

use super::hex_polygon;
use crate::card::Card;
use crate::config::CardLayout;
use crate::geometry::{points_attr, BoundingBox, FitTransform, Rect};
use crate::grid::{GridParams, HexCell};
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

const TITLE_FONT: &str = "Arial,Helvetica,sans-serif";
const FLAVOR_FONT: &str = "Georgia,serif";

/// Pixel layout of one card. The top third holds the title banner and
/// flavor text, the rest holds the mini board.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub inner_padding: f64,
    pub banner_height: f64,
    pub flavor_area: Rect,
    pub board_area: Rect,
    pub board_padding: f64,
    pub stroke_width: f64,
}

impl CardView {
    pub fn new(layout: &CardLayout) -> Self {
        let width = layout.pixel_width() as f64;
        let height = layout.pixel_height() as f64;
        let inner_padding = layout.px(18.0);

        let top_area_height = (height / 3.0).floor();
        let banner_height = layout.px(36.0);
        let flavor_gap = layout.px(8.0);
        let flavor_y = inner_padding + banner_height + flavor_gap;
        let flavor_height = top_area_height - (banner_height + flavor_gap + inner_padding);

        Self {
            width,
            height,
            corner_radius: layout.px(24.0),
            inner_padding,
            banner_height,
            flavor_area: Rect::new(
                inner_padding,
                flavor_y,
                width - inner_padding * 2.0,
                flavor_height.max(0.0),
            ),
            board_area: Rect::new(
                inner_padding,
                top_area_height,
                width - inner_padding * 2.0,
                height - top_area_height - inner_padding,
            ),
            board_padding: layout.px(8.0),
            stroke_width: layout.px(2.0).max(1.0),
        }
    }

    /// Transform that fits `cells` into the board area
    pub fn board_transform(&self, cells: &[HexCell]) -> FitTransform {
        match BoundingBox::of_cells(cells) {
            Some(bounds) => FitTransform::fit(&bounds, self.board_area, self.board_padding),
            None => FitTransform::IDENTITY,
        }
    }
}

/// Greedy word wrap to at most `max` characters per line. A single word
/// longer than `max` gets a line of its own.
pub fn wrap_lines(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render a move card at the layout's resolution
pub fn card_document(card: &Card, layout: &CardLayout) -> Document {
    let view = CardView::new(layout);
    let reachable = card.reachable();
    tracing::debug!(
        "card {:?}: {}x{} px, {} reachable",
        card.title,
        view.width,
        view.height,
        reachable.len()
    );

    let cells = GridParams::new(layout.board_radius, layout.board_diameter, 1.0).generate();
    let fit = view.board_transform(&cells);
    let mut board = Group::new();
    for cell in &cells {
        let points = points_attr(&cell.points.map(|p| fit.apply(p)));
        board = board.add(hex_polygon(cell, points, &reachable, view.stroke_width));
    }

    let frame = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", view.width)
        .set("height", view.height)
        .set("rx", view.corner_radius)
        .set("fill", "#f7f7f7")
        .set("stroke", "#000")
        .set("stroke-width", layout.px(6.0));

    let banner = Rectangle::new()
        .set("x", view.inner_padding)
        .set("y", view.inner_padding)
        .set("width", view.width - view.inner_padding * 2.0)
        .set("height", view.banner_height)
        .set("rx", layout.px(6.0))
        .set("fill", "#000");

    let title = Text::new(card.title.as_str())
        .set("x", view.width / 2.0)
        .set(
            "y",
            view.inner_padding + (view.banner_height / 2.0).round() + layout.px(8.0),
        )
        .set("font-family", TITLE_FONT)
        .set("font-size", layout.px(26.0))
        .set("fill", "#fff")
        .set("text-anchor", "middle")
        .set("font-weight", "700");

    let flavor_box = Rectangle::new()
        .set("x", view.flavor_area.x)
        .set("y", view.flavor_area.y)
        .set("width", view.flavor_area.width)
        .set("height", view.flavor_area.height)
        .set("rx", layout.px(6.0))
        .set("fill", "#fff");

    let line_height = layout.px(18.0);
    let mut flavor = Group::new()
        .set("font-family", FLAVOR_FONT)
        .set("font-size", layout.px(14.0))
        .set("fill", "#222")
        .set("text-anchor", "middle")
        .set("font-style", "italic");
    let quoted = format!("\"{}\"", card.flavor);
    for (i, line) in wrap_lines(&quoted, layout.wrap_width).into_iter().enumerate() {
        flavor = flavor.add(
            Text::new(line)
                .set("x", view.width / 2.0)
                .set("y", view.flavor_area.y + line_height * (i as f64 + 1.0)),
        );
    }

    Document::new()
        .set("width", layout.pixel_width())
        .set("height", layout.pixel_height())
        .set(
            "viewBox",
            (0, 0, layout.pixel_width(), layout.pixel_height()),
        )
        .add(frame)
        .add(banner)
        .add(title)
        .add(flavor_box)
        .add(flavor)
        .add(board)
}
