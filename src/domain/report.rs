// Report page domain model

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    /// Standalone SVG markup, embedded raw into the page
    Svg(String),
    /// Reason shown in place of a chart that could not be drawn
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub body: ChartBody,
}

impl ChartSection {
    pub fn new(id: String, title: String, description: String, body: ChartBody) -> Self {
        Self {
            id,
            title,
            description,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub title: String,
    pub charts: Vec<ChartSection>,
}

impl ReportPage {
    pub fn new(title: String, charts: Vec<ChartSection>) -> Self {
        Self { title, charts }
    }
}
