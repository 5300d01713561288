//! SVG emitter.

use tubekit_bending::Point;

use super::{bounds, ExportConfig};

/// Renders the centerline polyline as a standalone SVG document.
///
/// The drawing is translated so its bounding box starts at the configured
/// margin, then scaled; the canvas is sized to fit the geometry plus the
/// margin on every side. Fewer than two points produce an empty document.
pub fn to_svg(points: &[Point], config: &ExportConfig) -> String {
    let mut document = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");

    if points.len() < 2 {
        document.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n");
        return document;
    }

    let (min_x, min_y, max_x, max_y) = bounds(points);
    let width = (max_x - min_x) * config.scale + 2.0 * config.margin_mm;
    let height = (max_y - min_y) * config.scale + 2.0 * config.margin_mm;

    document.push_str(&format!(
        "<svg width=\"{width:.3}\" height=\"{height:.3}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));

    let mut path_data = String::new();
    for (i, point) in points.iter().enumerate() {
        let x = (point.x - min_x) * config.scale + config.margin_mm;
        let y = (point.y - min_y) * config.scale + config.margin_mm;
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path_data.push(' ');
        }
        path_data.push_str(&format!("{command} {x:.3},{y:.3}"));
    }

    document.push_str(&format!(
        "  <path d=\"{path_data}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\" />\n",
        config.line_color, config.stroke_width
    ));
    document.push_str("</svg>");
    document
}
