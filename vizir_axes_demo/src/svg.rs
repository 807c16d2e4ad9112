// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `vizir_axes_demo`.

use std::fmt::Write as _;

use kurbo::{Line, Point};
use peniko::Color;
use vizir_axes::{
    AxesSurface, HeuristicTextMeasurer, StrokeStyle, TextMeasurer, TextMetrics, TextStyle,
};

/// Collects stroked lines and text as SVG elements.
///
/// Text is measured heuristically, matching what the painters used for layout.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    measurer: HeuristicTextMeasurer,
}

impl SvgSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            measurer: HeuristicTextMeasurer,
        }
    }

    /// Appends a polyline in screen coordinates, e.g. a plotted curve.
    pub(crate) fn polyline(&mut self, points: &[Point], stroke: &StrokeStyle) {
        let mut coords = String::new();
        for p in points {
            let _ = write!(coords, "{:.2},{:.2} ", p.x, p.y);
        }
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none""#,
            coords.trim_end()
        );
        write_stroke_attrs(&mut self.body, stroke);
        self.body.push_str("/>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" style="background:white">"#,
            w = self.width,
            h = self.height,
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl TextMeasurer for SvgSurface {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}

impl AxesSurface for SvgSurface {
    fn stroke_line(&mut self, line: Line, stroke: &StrokeStyle) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
        write_stroke_attrs(&mut self.body, stroke);
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, fill: Color) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="alphabetic""#,
            origin.x,
            origin.y,
            style.font_size,
            style.font_family.as_css_family()
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", stroke.color);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
