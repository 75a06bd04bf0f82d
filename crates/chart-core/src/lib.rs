// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{Chart, LegendPosition, RenderOptions};
pub use series::{Marker, Series};
pub use axis::{Axis, AxisSide};
pub use view::Extents;
pub use theme::Theme;
pub use text::TextShaper;
