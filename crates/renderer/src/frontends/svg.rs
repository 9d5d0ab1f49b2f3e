// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Renders the engine's output as one self-contained SVG document.  The
//! drawing keeps the engine's coordinate system in its `viewBox`, so it scales
//! to the width of whatever contains it while keeping its aspect ratio.
//!

use crate::{CircleOut, Engine, FilledBox, LineOut, TextOut};

/// The class given to every option marker (used to delegate pointer events)
pub const OPTION_MARKER_CLASS: &str = "option-marker";

/// The attribute holding a marker's option index
pub const OPTION_INDEX_ATTRIBUTE: &str = "data-option-index";

/// Render the engine's current state as an SVG document
pub fn render_svg(engine: &Engine) -> String {
    let width = engine.drawing_width();
    let height = engine.drawing_height();
    let params = engine.layout_params();

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" preserveAspectRatio="xMinYMin meet">"#
    );
    svg.push_str(&format!(
        "<style>text {{ font-family: Arial, sans-serif; font-size: {font_size}px; }} \
         .day-label {{ font-weight: bold; }} \
         .option-line {{ stroke-width: {thickness}; }}</style>",
        font_size = params.font_size_px,
        thickness = params.option_line_thickness,
    ));

    svg.push_str(&filled_box(&engine.background_for_drawing()));
    svg.push_str(&line(&engine.axis_for_drawing(), "axis"));

    for day in engine.days_for_drawing() {
        svg.push_str(&line(&day.grid_line, "grid-line"));
        svg.push_str(&text(&day.weekday_label, "day-label"));
        svg.push_str(&text(&day.date_label, "day-label"));
    }

    for option in engine.options_for_drawing() {
        // Arrival date colours are drawn by CSS name
        let paint = option.colour_name.name();
        svg.push_str(&painted_line(&option.line, "option-line", paint));
        svg.push_str(&marker(&option.marker, option.index, paint));
    }

    svg.push_str(&line(&engine.now_line_for_drawing(), "now-line"));
    svg.push_str("</svg>");
    svg
}

/// Escape text for use in SVG text content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `opacity` attribute (omitted when fully opaque)
fn opacity(opacity: f64) -> String {
    if opacity < 1.0 {
        format!(r#" opacity="{opacity}""#)
    } else {
        String::new()
    }
}

fn filled_box(filled_box: &FilledBox) -> String {
    let rect = filled_box.position_and_size;
    let stroke = filled_box
        .border_style
        .map(|style| {
            format!(
                r#" stroke="{}" stroke-width="{}""#,
                style.colour.to_hex(),
                style.thickness
            )
        })
        .unwrap_or_default();
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{stroke}/>"#,
        rect.position.x,
        rect.position.y,
        rect.width,
        rect.height,
        filled_box.fill_colour.to_hex(),
    )
}

fn line(line: &LineOut, class: &str) -> String {
    painted_line(line, class, &line.style.colour.to_hex())
}

fn painted_line(line: &LineOut, class: &str, stroke: &str) -> String {
    format!(
        r#"<line class="{class}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
        line.from.x,
        line.from.y,
        line.to.x,
        line.to.y,
        stroke,
        line.style.thickness,
        opacity(line.opacity),
    )
}

fn text(text: &TextOut, class: &str) -> String {
    let weight = if text.bold {
        r#" font-weight="bold""#
    } else {
        ""
    };
    format!(
        r#"<text class="{class}" x="{}" y="{}" fill="{}" font-size="{}"{weight}{}>{}</text>"#,
        text.position.x,
        text.position.y,
        text.colour.to_hex(),
        text.font_size,
        opacity(text.opacity),
        escape_xml(&text.text),
    )
}

fn marker(marker: &CircleOut, index: usize, fill: &str) -> String {
    format!(
        r#"<circle class="{OPTION_MARKER_CLASS}" {OPTION_INDEX_ATTRIBUTE}="{index}" cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
        marker.centre.x,
        marker.centre.y,
        marker.radius,
        fill,
        opacity(marker.opacity),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, Utc};
    use delivery_timeline_core::DeliveryOptions;

    fn two_option_engine() -> Engine {
        Engine::new(
            DeliveryOptions::from_strs([
                ("2024-09-29", "2024-09-26T18:30:00Z"),
                ("2024-09-30", "2024-09-28T16:45:00Z"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn document() {
        let svg = render_svg(&two_option_engine());
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 500 400""#));
        assert!(svg.contains(r#"width="100%""#));
        assert!(svg.contains(r##"fill="#f0f0f0""##));
        assert_eq!(svg.matches(r#"class="grid-line""#).count(), 5);
        assert_eq!(svg.matches(r#"class="day-label""#).count(), 10);
        assert!(svg.contains(">Thu</text>"));
        assert!(svg.contains(">Sep 26</text>"));
    }

    #[test]
    fn one_marker_per_option() {
        let engine = Engine::new(DeliveryOptions::sample());
        let svg = render_svg(&engine);
        assert_eq!(svg.matches("<circle ").count(), 23);
        assert!(svg.contains(r#"data-option-index="0""#));
        assert!(svg.contains(r#"data-option-index="22""#));
        assert_eq!(svg.matches(r#"class="option-line""#).count(), 23);
    }

    #[test]
    fn options_painted_by_colour_name() {
        let svg = render_svg(&two_option_engine());
        assert!(svg.contains(r#"data-option-index="0" cx="#));
        assert_eq!(svg.matches(r#"class="option-line""#).count(), 2);
        assert!(svg.contains(r#"stroke="blue""#));
        assert!(svg.contains(r#"fill="blue""#));
        assert!(svg.contains(r#"stroke="green""#));
        assert!(svg.contains(r#"fill="green""#));
        assert!(!svg.contains("#0000ff"));
    }

    #[test]
    fn now_line() {
        let mut engine = two_option_engine();
        engine.set_slider_value(100.0);
        let svg = render_svg(&engine);
        assert_eq!(svg.matches(r#"class="now-line""#).count(), 1);
        assert!(svg.contains(r##"class="now-line" x1="500" y1="0" x2="500" y2="400" stroke="#ff0000" stroke-width="2""##));
    }

    #[test]
    fn dimmed_options() {
        let mut engine = two_option_engine();
        let current: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-09-27T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        engine.set_current_time(current);
        let svg = render_svg(&engine);
        let marker_for = |index: usize| {
            let start = svg
                .find(&format!(r#"data-option-index="{index}""#))
                .unwrap();
            let end = start + svg[start..].find("/>").unwrap();
            svg[start..end].to_string()
        };
        assert!(marker_for(0).contains(r#"opacity="0.3""#));
        assert!(!marker_for(1).contains("opacity"));
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("Sep 26"), "Sep 26");
    }
}
