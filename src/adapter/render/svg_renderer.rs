//! SVG Chart Renderer
//!
//! ChartRendererのSVG実装

use crate::domain::repositories::chart_renderer::ChartRenderer;
use crate::domain::services::chart_layout::{ChartLayout, DrawElement, TextAnchor};

const GRID_COLOR: &str = "#eee";
const AXIS_COLOR: &str = "#ccc";
const LABEL_COLOR: &str = "#666";
pub const DEFAULT_LINE_COLOR: &str = "#4a90d9";

/// SVG文書を出力するレンダラー
pub struct SvgRenderer {
    line_color: String,
    title: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR.to_string(),
            title: "Weight chart".to_string(),
        }
    }

    /// Override the polyline and marker color
    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = color.into();
        self
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Escape text content for XML
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl SvgRenderer {
    fn element(&self, element: DrawElement<'_>) -> String {
        match element {
            DrawElement::Gridline(line) => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" />"#,
                line.from.x, line.from.y, line.to.x, line.to.y, GRID_COLOR
            ),
            DrawElement::Axis(line) => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" />"#,
                line.from.x, line.from.y, line.to.x, line.to.y, AXIS_COLOR
            ),
            DrawElement::Label(label) => {
                let baseline = if label.middle_baseline {
                    r#" alignment-baseline="middle""#
                } else {
                    ""
                };
                format!(
                    r#"<text x="{}" y="{}" text-anchor="{}"{} fill="{}">{}</text>"#,
                    label.position.x,
                    label.position.y,
                    anchor_attr(label.anchor),
                    baseline,
                    LABEL_COLOR,
                    escape(&label.text)
                )
            }
            DrawElement::Polyline(points) => {
                let points = points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2" />"#,
                    points,
                    escape(&self.line_color)
                )
            }
            DrawElement::Marker(marker) => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
                marker.center.x,
                marker.center.y,
                marker.radius,
                escape(&self.line_color)
            ),
        }
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, layout: &ChartLayout) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" aria-label="{}">"#,
            layout.canvas.width,
            layout.canvas.height,
            escape(&self.title)
        );

        for element in layout.elements() {
            svg.push_str(&self.element(element));
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::Record;
    use crate::domain::services::chart_layout::{ChartCanvas, ChartLayoutEngine, ChartOutcome};

    fn layout_for(records: &[Record]) -> ChartLayout {
        match ChartLayoutEngine::layout(records, &ChartCanvas::default()) {
            ChartOutcome::Chart(layout) => layout,
            ChartOutcome::InsufficientData => panic!("expected a chart"),
        }
    }

    #[test]
    fn test_render_contains_all_element_kinds() {
        let layout = layout_for(&[
            Record::new("2024-01-01", "70", None),
            Record::new("2024-01-15", "68", None),
        ]);

        let svg = SvgRenderer::new().render(&layout);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="600" height="300""#));
        assert_eq!(svg.matches("<polyline ").count(), 1);
        assert_eq!(svg.matches("<circle ").count(), 2);
        // 5 gridlines + 2 axes
        assert_eq!(svg.matches("<line ").count(), 7);
        // 5 tick labels + 2 date labels
        assert_eq!(svg.matches("<text ").count(), 7);
        assert!(svg.contains(">1/15</text>"));
        assert!(svg.contains(r#"text-anchor="end" alignment-baseline="middle""#));
    }

    #[test]
    fn test_polyline_points_in_date_order() {
        let layout = layout_for(&[
            Record::new("2024-01-15", "68", None),
            Record::new("2024-01-01", "70", None),
        ]);

        let svg = SvgRenderer::new().render(&layout);

        // y_min=67, y_max=71: 70 → y=80, 68 → y=200
        assert!(svg.contains(r#"points="40,80 580,200""#));
    }

    #[test]
    fn test_line_color_override() {
        let layout = layout_for(&[
            Record::new("2024-01-01", "70", None),
            Record::new("2024-01-02", "71", None),
        ]);

        let svg = SvgRenderer::new().with_line_color("#ff0000").render(&layout);

        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r##"fill="#ff0000""##));
    }

    #[test]
    fn test_line_color_is_escaped() {
        let layout = layout_for(&[
            Record::new("2024-01-01", "70", None),
            Record::new("2024-01-02", "71", None),
        ]);

        let svg = SvgRenderer::new()
            .with_line_color(r#"red" onload="x"#)
            .render(&layout);

        assert!(svg.contains(r#"stroke="red&quot; onload=&quot;x""#));
        assert!(!svg.contains(r#"onload="x""#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let layout = layout_for(&[
            Record::new("<b>", "70", None),
            Record::new("2024-01-02", "71", None),
        ]);

        let svg = SvgRenderer::new().render(&layout);

        assert!(svg.contains("&lt;b&gt;"));
        assert!(!svg.contains("<b>"));
    }
}
