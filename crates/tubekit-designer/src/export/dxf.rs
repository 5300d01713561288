//! DXF emitter.
//!
//! Writes a minimal R12-style drawing: one ENTITIES section containing a
//! LINE record per polyline segment on layer 0. That is the subset every
//! CAD import filter understands.

use tubekit_bending::Point;

use super::ExportConfig;

/// Renders the centerline polyline as a DXF document.
///
/// The geometry is scaled but not translated; DXF consumers handle
/// negative coordinates natively, so no margin fitting is applied.
pub fn to_dxf(points: &[Point], config: &ExportConfig) -> String {
    let mut document = String::from("0\nSECTION\n2\nENTITIES\n");

    for segment in points.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        document.push_str("0\nLINE\n");
        document.push_str("8\n0\n");
        document.push_str(&format!("10\n{:.6}\n", start.x * config.scale));
        document.push_str(&format!("20\n{:.6}\n", start.y * config.scale));
        document.push_str("30\n0\n");
        document.push_str(&format!("11\n{:.6}\n", end.x * config.scale));
        document.push_str(&format!("21\n{:.6}\n", end.y * config.scale));
        document.push_str("31\n0\n");
    }

    document.push_str("0\nENDSEC\n0\nEOF\n");
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
        ]
    }

    #[test]
    fn test_document_structure() {
        let dxf = to_dxf(&l_shape(), &ExportConfig::default());
        assert!(dxf.starts_with("0\nSECTION\n2\nENTITIES\n"));
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF\n"));
    }

    #[test]
    fn test_one_line_entity_per_segment() {
        let dxf = to_dxf(&l_shape(), &ExportConfig::default());
        assert_eq!(dxf.matches("0\nLINE\n").count(), 2);
    }

    #[test]
    fn test_segment_endpoints() {
        let dxf = to_dxf(&l_shape(), &ExportConfig::default());
        // Second segment runs from (100, 0) to (100, 50).
        assert!(dxf.contains("11\n100.000000\n21\n50.000000\n"));
    }

    #[test]
    fn test_scale_is_applied() {
        let config = ExportConfig {
            scale: 0.5,
            ..ExportConfig::default()
        };
        let dxf = to_dxf(&l_shape(), &config);
        assert!(dxf.contains("10\n50.000000\n"));
    }

    #[test]
    fn test_empty_input_yields_no_entities() {
        let dxf = to_dxf(&[], &ExportConfig::default());
        assert_eq!(dxf.matches("0\nLINE\n").count(), 0);
        assert!(dxf.ends_with("EOF\n"));
    }
}
