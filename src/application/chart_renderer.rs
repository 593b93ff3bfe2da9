// Chart renderer - Draws a normalized series as a standalone SVG document
use crate::application::markup::escape;
use crate::domain::chart::{Canvas, MARGIN_EDGE, MARGIN_LEFT, NormalizedSeries, PlotPoint};

const LABEL_FONT: &str = "Lexend";
const LABEL_FONT_SIZE: u32 = 10;
const MARKER_RADIUS: u32 = 2;

/// Render `series` as an SVG line chart with a shaded area, axes, point
/// markers and the min/max value labels.
///
/// Points and bounds are drawn exactly as given; the output only depends on
/// the arguments.
pub fn render(
    id: &str,
    title: &str,
    description: &str,
    series: &NormalizedSeries,
    canvas: Canvas,
) -> String {
    let width = canvas.width();
    let height = canvas.height();
    let right = canvas.right();
    let bottom = canvas.bottom();
    let points = format_points(&series.points);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="100%" height="100%" viewBox="0 0 {} {}">"#,
        escape(id),
        width,
        height
    );
    svg.push_str(&format!("<title>{}</title>", escape(title)));
    svg.push_str(&format!("<desc>{}</desc>", escape(description)));

    svg.push_str(&value_label(series.bounds.max_label, 10.0));
    svg.push_str(&value_label(series.bounds.min_label, height));

    // Area under the curve, closed along the time axis
    let area = if points.is_empty() {
        format!("{right},{bottom} {MARGIN_LEFT},{bottom}")
    } else {
        format!("{points} {right},{bottom} {MARGIN_LEFT},{bottom}")
    };
    svg.push_str(&format!(r##"<polygon points="{area}" fill="#0005"/>"##));

    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_EDGE}" x2="{MARGIN_LEFT}" y2="{bottom}" stroke="#666"/>"##
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#666"/>"##
    ));

    svg.push_str(&format!(
        r##"<polyline points="{points}" fill="none" stroke="#000"/>"##
    ));

    for point in &series.points {
        svg.push_str(&format!(
            r##"<circle cx="{}" cy="{}" r="{MARKER_RADIUS}" stroke="#000" fill="#fff"/>"##,
            point.x, point.y
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn format_points(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labels are pushed left by 5 units per character so they end before the axis.
fn value_label(value: i64, y: f64) -> String {
    let text = value.to_string();
    let x = 5 * (4 - text.len() as i64);
    format!(
        r#"<text x="{x}" y="{y}" font-family="{LABEL_FONT}" font-size="{LABEL_FONT_SIZE}">{text}</text>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::AxisBounds;

    fn three_points() -> NormalizedSeries {
        NormalizedSeries {
            points: vec![
                PlotPoint::new(25.0, 145.0),
                PlotPoint::new(210.0, 5.0),
                PlotPoint::new(395.0, 75.0),
            ],
            bounds: AxisBounds::new(10, 20),
        }
    }

    #[test]
    fn test_svg_root_carries_id_and_viewbox() {
        let svg = render("light-level", "Graph 3", "Lux", &three_points(), Canvas::default());

        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="light-level" width="100%" height="100%" viewBox="0 0 400 150">"#
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<title>Graph 3</title><desc>Lux</desc>"));
    }

    #[test]
    fn test_elements_in_drawing_order() {
        let svg = render("temperature", "t", "d", &three_points(), Canvas::default());

        let order = [
            r#"<text x="10" y="10" font-family="Lexend" font-size="10">20</text>"#,
            r#"<text x="10" y="150" font-family="Lexend" font-size="10">10</text>"#,
            r##"<polygon points="25,145 210,5 395,75 395,145 25,145" fill="#0005"/>"##,
            r##"<line x1="25" y1="5" x2="25" y2="145" stroke="#666"/>"##,
            r##"<line x1="25" y1="145" x2="395" y2="145" stroke="#666"/>"##,
            r##"<polyline points="25,145 210,5 395,75" fill="none" stroke="#000"/>"##,
            r##"<circle cx="25" cy="145" r="2" stroke="#000" fill="#fff"/>"##,
            r##"<circle cx="210" cy="5" r="2" stroke="#000" fill="#fff"/>"##,
            r##"<circle cx="395" cy="75" r="2" stroke="#000" fill="#fff"/>"##,
        ];

        let mut cursor = 0;
        for fragment in order {
            let found = svg[cursor..]
                .find(fragment)
                .unwrap_or_else(|| panic!("missing or out of order: {fragment}\n{svg}"));
            cursor += found + fragment.len();
        }
    }

    #[test]
    fn test_longer_labels_shift_left() {
        let series = NormalizedSeries {
            points: vec![PlotPoint::new(25.0, 145.0)],
            bounds: AxisBounds::new(-3, 101325),
        };

        let svg = render("pressure", "p", "d", &series, Canvas::default());

        assert!(svg.contains(r#"<text x="-10" y="10" font-family="Lexend" font-size="10">101325</text>"#));
        assert!(svg.contains(r#"<text x="10" y="150" font-family="Lexend" font-size="10">-3</text>"#));
    }

    #[test]
    fn test_single_point_chart_is_complete() {
        let series = NormalizedSeries {
            points: vec![PlotPoint::new(25.0, 82.0)],
            bounds: AxisBounds::new(18, 19),
        };

        let svg = render("temperature", "t", "d", &series, Canvas::default());

        assert!(svg.contains(r##"<polygon points="25,82 395,145 25,145" fill="#0005"/>"##));
        assert!(svg.contains(r##"<polyline points="25,82" fill="none" stroke="#000"/>"##));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = render(
            "temperature",
            "A < B",
            "\"quoted\" & more",
            &three_points(),
            Canvas::default(),
        );

        assert!(svg.contains("<title>A &lt; B</title>"));
        assert!(svg.contains("<desc>&quot;quoted&quot; &amp; more</desc>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let series = three_points();
        let canvas = Canvas::new(300.0, 120.0).unwrap();

        let first = render("pressure", "p", "d", &series, canvas);
        let second = render("pressure", "p", "d", &series, canvas);

        assert_eq!(first, second);
        assert!(first.contains(r#"viewBox="0 0 300 120""#));
        assert!(first.contains(r##"<line x1="25" y1="115" x2="295" y2="115" stroke="#666"/>"##));
    }
}
