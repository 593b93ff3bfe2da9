// HTML document for the report page
use crate::application::markup::escape;
use crate::domain::report::{ChartBody, ChartSection, ReportPage};

const HEAD_LINKS: &str = concat!(
    r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#,
    r#"<link rel="preconnect" href="https://fonts.gstatic.com">"#,
    r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Lexend&family=Roboto+Slab:wght@400;600&display=swap">"#,
    r#"<link rel="stylesheet" href="/style.css">"#,
);

pub fn render_page(page: &ReportPage) -> String {
    let title = escape(&page.title);
    let charts: String = page.charts.iter().map(render_section).collect();

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>{title}</title>{links}</head>",
            "<body><h1>{title}</h1>",
            r#"<div class="graph-container">{charts}</div>"#,
            "</body></html>"
        ),
        title = title,
        links = HEAD_LINKS,
        charts = charts
    )
}

fn render_section(section: &ChartSection) -> String {
    let body = match &section.body {
        // Renderer output is already escaped markup
        ChartBody::Svg(svg) => svg.clone(),
        ChartBody::Unavailable(reason) => {
            format!(r#"<p class="no-data">{}</p>"#, escape(reason))
        }
    };

    format!(
        r#"<div data-chart="{}"><h2>{}</h2><p>{}</p>{}</div>"#,
        escape(&section.id),
        escape(&section.title),
        escape(&section.description),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, body: ChartBody) -> ChartSection {
        ChartSection::new(
            id.to_string(),
            format!("Graph: {}", id),
            "Value in function of time.".to_string(),
            body,
        )
    }

    #[test]
    fn test_page_embeds_charts_in_order() {
        let page = ReportPage::new(
            "Weather Reports".to_string(),
            vec![
                section("temperature", ChartBody::Svg(r#"<svg id="temperature"></svg>"#.to_string())),
                section("pressure", ChartBody::Unavailable("No data yet.".to_string())),
            ],
        );

        let html = render_page(&page);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/style.css">"#));
        assert!(html.contains("<h1>Weather Reports</h1>"));
        assert!(html.contains(
            r#"<div data-chart="temperature"><h2>Graph: temperature</h2><p>Value in function of time.</p><svg id="temperature"></svg></div>"#
        ));
        assert!(html.contains(r#"<p class="no-data">No data yet.</p>"#));
        assert!(html.find("Graph: temperature") < html.find("Graph: pressure"));
    }

    #[test]
    fn test_unavailable_reason_is_escaped() {
        let page = ReportPage::new(
            "R".to_string(),
            vec![section("x", ChartBody::Unavailable("<oops>".to_string()))],
        );

        assert!(render_page(&page).contains("&lt;oops&gt;"));
    }
}
