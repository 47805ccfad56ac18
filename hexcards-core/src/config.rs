//! Configuration for board and card rendering

use crate::grid::{GridParams, HexCell};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolution that the layout constants are authored at
pub const BASE_DPI: f64 = 96.0;

/// Board view configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of rings around the center hex
    pub radius: u32,
    /// Distance between opposite corners of a hex, in pixels
    pub diameter: f64,
    /// Stroke width of hex outlines
    pub border: f64,
    /// Whole-board rotation in degrees
    pub rotation: f64,
    /// Extra spacing multiplier between hex centers (1 = snug)
    pub spacing: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            diameter: 80.0,
            border: 2.0,
            rotation: 0.0,
            spacing: 1.0,
        }
    }
}

impl BoardConfig {
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    pub fn grid_params(&self) -> GridParams {
        GridParams::new(self.radius, self.diameter, self.spacing)
    }

    /// Generate the board's cells with clamped inputs
    pub fn cells(&self) -> Vec<HexCell> {
        self.grid_params().generate()
    }

    /// Padding around the board so outlines are never clipped
    pub fn padding(&self) -> f64 {
        (self.border * 2.0 + 8.0).max(20.0)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid board config in {}", path.display()))
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Print layout for a move card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLayout {
    /// Output resolution
    pub dpi: f64,
    /// Card width in inches
    pub width_in: f64,
    /// Card height in inches
    pub height_in: f64,
    /// Rings on the mini board
    pub board_radius: u32,
    /// Hex diameter the mini board is generated at before scaling to fit
    pub board_diameter: f64,
    /// Characters per line of flavor text
    pub wrap_width: usize,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            width_in: 2.5,
            height_in: 3.5,
            board_radius: 2,
            board_diameter: 60.0,
            wrap_width: 36,
        }
    }
}

impl CardLayout {
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Card width in pixels
    pub fn pixel_width(&self) -> u32 {
        (self.width_in * self.dpi).round() as u32
    }

    /// Card height in pixels
    pub fn pixel_height(&self) -> u32 {
        (self.height_in * self.dpi).round() as u32
    }

    /// Convert a length authored at 96 DPI to this layout's resolution
    pub fn px(&self, base: f64) -> f64 {
        (base * self.dpi / BASE_DPI).round()
    }
}
