//! Drawing primitives shared by the on-screen charts and the exported snapshot.
//!
//! A chart layout lowers itself to a [`Scene`]; the scene is then either rendered
//! as Dioxus `svg` nodes ([`ChartCanvas`]) or serialized to standalone markup.

use std::fmt::Write as _;

use dioxus::prelude::*;

pub const CHART_FONT: &str = "Inter, 'Helvetica Neue', Arial, sans-serif";
const TEXT_COLOR: &str = "#1f2430";
const BACKGROUND: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &'static str,
    },
    Path {
        d: String,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        size: f64,
        bold: bool,
        /// Rotate -90° around the anchor point (vertical axis titles).
        vertical: bool,
    },
}

impl Mark {
    pub fn text(x: f64, y: f64, text: impl Into<String>, anchor: TextAnchor, size: f64) -> Self {
        Mark::Text {
            x,
            y,
            text: text.into(),
            anchor,
            size,
            bold: false,
            vertical: false,
        }
    }

    pub fn title(x: f64, y: f64, text: impl Into<String>) -> Self {
        Mark::Text {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Middle,
            size: 18.0,
            bold: true,
            vertical: false,
        }
    }
}

/// A sized list of marks in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<Mark>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Every text mark, in order. Mostly useful for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.marks
            .iter()
            .filter_map(|mark| match mark {
                Mark::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Standalone SVG document for this scene.
    pub fn to_svg(&self) -> String {
        let mut out = svg_open(self.width, self.height);
        out.push_str(&self.svg_body());
        out.push_str("</svg>");
        out
    }

    /// Marks as SVG elements, without the surrounding `<svg>` element.
    pub fn svg_body(&self) -> String {
        let mut out = String::new();
        for mark in &self.marks {
            write_mark(&mut out, mark);
        }
        out
    }
}

/// Stack scenes top to bottom into one SVG document.
pub fn stack_svg(scenes: &[Scene], gap: f64) -> String {
    let width = scenes.iter().map(|s| s.width).fold(0.0, f64::max);
    let height = scenes.iter().map(|s| s.height).sum::<f64>()
        + gap * scenes.len().saturating_sub(1) as f64;

    let mut out = svg_open(width, height);
    let mut offset = 0.0;
    for scene in scenes {
        let _ = write!(out, "<g transform='translate(0 {offset})'>");
        out.push_str(&scene.svg_body());
        out.push_str("</g>");
        offset += scene.height + gap;
    }
    out.push_str("</svg>");
    out
}

fn svg_open(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}' font-family=\"{CHART_FONT}\"><rect width='{width}' height='{height}' fill='{BACKGROUND}'/>"
    )
}

fn write_mark(out: &mut String, mark: &Mark) {
    let _ = match mark {
        Mark::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => write!(
            out,
            "<rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' fill='{fill}'/>"
        ),
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => write!(
            out,
            "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-width='1'/>"
        ),
        Mark::Path { d, fill } => write!(out, "<path d='{d}' fill='{fill}' stroke='#ffffff' stroke-width='1.5'/>"),
        Mark::Circle { cx, cy, r, fill } => {
            write!(out, "<circle cx='{cx:.2}' cy='{cy:.2}' r='{r:.2}' fill='{fill}'/>")
        }
        Mark::Text {
            x,
            y,
            text,
            anchor,
            size,
            bold,
            vertical,
        } => {
            let weight = if *bold { 700 } else { 400 };
            let transform = if *vertical {
                format!(" transform='rotate(-90 {x:.2} {y:.2})'")
            } else {
                String::new()
            };
            write!(
                out,
                "<text x='{x:.2}' y='{y:.2}' text-anchor='{}' font-size='{size}' font-weight='{weight}' fill='{TEXT_COLOR}'{transform}>{}</text>",
                anchor.as_str(),
                escape_xml(text)
            )
        }
    };
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[component]
pub fn ChartCanvas(scene: Scene, label: String) -> Element {
    let view_box = format!("0 0 {} {}", scene.width, scene.height);

    rsx! {
        svg {
            class: "chart__canvas",
            view_box: "{view_box}",
            role: "img",
            "aria-label": "{label}",
            font_family: CHART_FONT,
            for mark in scene.marks.iter() {
                {render_mark(mark)}
            }
        }
    }
}

fn render_mark(mark: &Mark) -> Element {
    match mark {
        Mark::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", fill: "{fill}" }
        },
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}", stroke: *stroke, stroke_width: "1" }
        },
        Mark::Path { d, fill } => rsx! {
            path { d: "{d}", fill: "{fill}", stroke: "#ffffff", stroke_width: "1.5" }
        },
        Mark::Circle { cx, cy, r, fill } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}", fill: "{fill}" }
        },
        Mark::Text {
            x,
            y,
            text,
            anchor,
            size,
            bold,
            vertical,
        } => {
            let transform = if *vertical {
                format!("rotate(-90 {x} {y})")
            } else {
                String::new()
            };
            let weight = if *bold { "700" } else { "400" };
            rsx! {
                text {
                    x: "{x}",
                    y: "{y}",
                    text_anchor: anchor.as_str(),
                    font_size: "{size}",
                    font_weight: weight,
                    fill: TEXT_COLOR,
                    transform: "{transform}",
                    "{text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_in_markup() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.push(Mark::text(10.0, 10.0, "Rain & <fog>", TextAnchor::Start, 12.0));
        let svg = scene.to_svg();
        assert!(svg.contains("Rain &amp; &lt;fog&gt;"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn stacked_scenes_are_offset() {
        let a = Scene::new(200.0, 100.0);
        let b = Scene::new(300.0, 80.0);
        let svg = stack_svg(&[a, b], 20.0);
        assert!(svg.contains("width='300' height='200'"));
        assert!(svg.contains("translate(0 120)"));
    }

    #[test]
    fn canvas_markup_is_labelled_for_screen_readers() {
        let mut scene = Scene::new(120.0, 60.0);
        scene.push(Mark::title(60.0, 20.0, "Rentals"));
        let html = dioxus::ssr::render_element(rsx! {
            ChartCanvas { scene, label: "Bike rentals by weather" }
        });
        assert!(html.contains(r#"aria-label="Bike rentals by weather""#));
        assert!(html.contains(r#"role="img""#));
        assert!(html.contains(">Rentals</text>"));
    }

    #[test]
    fn vertical_text_gets_rotation() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(Mark::Text {
            x: 12.0,
            y: 50.0,
            text: "Rentals".into(),
            anchor: TextAnchor::Middle,
            size: 12.0,
            bold: false,
            vertical: true,
        });
        assert!(scene.to_svg().contains("rotate(-90 12.00 50.00)"));
    }
}
