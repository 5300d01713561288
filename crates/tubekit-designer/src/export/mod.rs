//! CAD export of a computed centerline.
//!
//! Renders the path generator's polyline as an SVG document or a DXF
//! ENTITIES section. Both emitters are pure string builders; the `save_*`
//! helpers add file writing on top.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use tubekit_bending::Point;

mod dxf;
mod svg;

pub use dxf::to_dxf;
pub use svg::to_svg;

/// Appearance and fitting options shared by the exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Drawing scale applied to the geometry.
    pub scale: f64,
    /// Margin around the drawing, in mm.
    pub margin_mm: f64,
    /// Stroke color for the centerline (SVG only).
    pub line_color: String,
    /// Stroke width for the centerline (SVG only).
    pub stroke_width: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            margin_mm: 10.0,
            line_color: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}

/// Renders the centerline as SVG and writes it to `path`.
pub fn save_svg(points: &[Point], config: &ExportConfig, path: &Path) -> Result<()> {
    let document = to_svg(points, config);
    std::fs::write(path, document)
        .with_context(|| format!("failed to write SVG to {}", path.display()))?;
    info!(path = %path.display(), points = points.len(), "exported SVG");
    Ok(())
}

/// Renders the centerline as DXF and writes it to `path`.
pub fn save_dxf(points: &[Point], config: &ExportConfig, path: &Path) -> Result<()> {
    let document = to_dxf(points, config);
    std::fs::write(path, document)
        .with_context(|| format!("failed to write DXF to {}", path.display()))?;
    info!(path = %path.display(), points = points.len(), "exported DXF");
    Ok(())
}

/// Axis-aligned bounds of a point run, as `(min_x, min_y, max_x, max_y)`.
pub(crate) fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    (min_x, min_y, max_x, max_y)
}
