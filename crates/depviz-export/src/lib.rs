//! Renderers consuming the finished dependency graph.
//!
//! Every exporter takes the graph by shared reference and feeds nothing
//! back into resolution. The pluggable-output seam is [`ExportFormat`]
//! plus the [`render`] dispatch.

pub mod assets;
pub mod dot;
pub mod html;
pub mod json;
pub mod pdf;
pub mod view;

use depviz_resolver::graph::DependencyGraph;

pub use html::HtmlOptions;
pub use view::LevelView;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Interactive vis-network page.
    Html,
    /// Static Graphviz document.
    Dot,
    /// Machine-readable node/edge dump.
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "dot" | "gv" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{s}'. Valid formats: html, dot, json"
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Render the graph in the requested format.
///
/// The level view and canvas options only affect the HTML renderer; DOT
/// and JSON always emit the full graph.
pub fn render(
    format: ExportFormat,
    graph: &DependencyGraph,
    view: Option<&LevelView>,
    opts: &HtmlOptions,
) -> miette::Result<String> {
    match format {
        ExportFormat::Html => html::render_html(graph, view, opts),
        ExportFormat::Dot => Ok(dot::render_dot(graph)),
        ExportFormat::Json => json::render_json(graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing() {
        assert_eq!("html".parse::<ExportFormat>(), Ok(ExportFormat::Html));
        assert_eq!("DOT".parse::<ExportFormat>(), Ok(ExportFormat::Dot));
        assert_eq!("gv".parse::<ExportFormat>(), Ok(ExportFormat::Dot));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));

        let err = "svg".parse::<ExportFormat>().unwrap_err();
        assert!(err.contains("Valid formats: html, dot, json"));
    }

    #[test]
    fn format_display_round_trips() {
        for format in [ExportFormat::Html, ExportFormat::Dot, ExportFormat::Json] {
            assert_eq!(format.to_string().parse::<ExportFormat>(), Ok(format));
        }
    }
}
