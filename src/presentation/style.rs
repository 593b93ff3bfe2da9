// Stylesheet served at /style.css

const BASE: &str = "\
body { margin: 0; }
h1 { font-family: 'Roboto Slab'; text-align: center; color: #478; font-weight: 600; font-size: 3.5rem; }
h2 { font-family: 'Roboto Slab'; color: #478; font-weight: 600; font-size: 2rem; }
p { font-family: 'Lexend'; }
.graph-container { display: flex; align-items: center; justify-content: center; flex-wrap: wrap; gap: 5rem; }
.graph-container div { flex: 0 0 800px; height: 300px; margin-bottom: 50px; }
.no-data { color: #888; }
";

/// Per-chart colors keyed by chart element id
struct ChartTheme {
    id: &'static str,
    area: &'static str,
    line: &'static str,
    axis: &'static str,
}

const THEMES: [ChartTheme; 3] = [
    ChartTheme {
        id: "temperature",
        area: "#f88b",
        line: "#c55",
        axis: "#b33",
    },
    ChartTheme {
        id: "pressure",
        area: "#dafb",
        line: "#85a",
        axis: "#96a",
    },
    ChartTheme {
        id: "light-level",
        area: "#adfb",
        line: "#58a",
        axis: "#69a",
    },
];

pub fn stylesheet() -> String {
    let mut css = BASE.to_string();
    for theme in &THEMES {
        let id = theme.id;
        css.push_str(&format!("#{id} polygon {{ fill: {}; }}\n", theme.area));
        css.push_str(&format!(
            "#{id} polyline, #{id} circle {{ stroke: {}; }}\n",
            theme.line
        ));
        css.push_str(&format!("#{id} line {{ stroke: {}; }}\n", theme.axis));
        css.push_str(&format!("#{id} text {{ fill: {}; }}\n", theme.axis));
    }
    css
}
