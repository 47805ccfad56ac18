//! HEXCARDS Core - Hex board geometry and move card rendering
//!
//! This crate provides the core logic for HEXCARDS:
//! - Board geometry (axial coordinates, direction table, rings)
//! - Pixel-space hex grid generation
//! - Movement tokens and reachable-hex resolution
//! - Card text parsing and JSON interchange
//! - SVG rendering, PNG rasterization and print pages

pub mod board;
pub mod grid;
pub mod movement;
pub mod geometry;
pub mod card;
pub mod config;
pub mod error;
pub mod render;

// Re-exports for convenient access
pub use board::{Axial, Direction, DIRECTIONS};
pub use grid::{generate_hex_grid, GridParams, HexCell, Point2};
pub use movement::{resolve_reachable, Distance, MoveToggles, MovementToken, ReachableSet};
pub use geometry::{points_attr, BoundingBox, FitTransform, Rect, ViewWindow};
pub use card::{parse_batch, parse_card_line, Card};
pub use config::{BoardConfig, CardLayout};
pub use error::{ParseError, RenderError};
pub use render::{Renderer, SvgRenderer};
