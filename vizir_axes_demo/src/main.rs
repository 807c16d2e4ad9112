// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes demos for `vizir_axes`.
//!
//! Renders one pan/zoom sequence through [`AxesPainter`] and
//! [`ScreenFixedAxesPainter`] into an HTML page of SVG snapshots.

mod svg;

use std::fmt::Write as _;

use kurbo::{Affine, Point, Vec2};
use peniko::color::palette::css;
use vizir_axes::{
    AxesConfig, AxesPainter, AxesStyle, FontFamily, Insets, ScreenFixedAxesPainter, StrokeStyle,
    TextStyle,
};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;

struct Viewport {
    title: &'static str,
    transform: Affine,
}

/// World-to-screen transform with y pointing up, `center` (world) at the middle
/// of the drawing area.
fn view(scale_x: f64, scale_y: f64, center: Vec2) -> Affine {
    Affine::translate(Vec2::new(WIDTH * 0.5, HEIGHT * 0.5))
        * Affine::scale_non_uniform(scale_x, -scale_y)
        * Affine::translate(-center)
}

fn viewports() -> Vec<Viewport> {
    vec![
        Viewport {
            title: "50 px per unit",
            transform: view(50.0, 50.0, Vec2::ZERO),
        },
        Viewport {
            title: "zoomed in (0.01 ticks)",
            transform: view(4000.0, 4000.0, Vec2::new(0.52, 0.5)),
        },
        Viewport {
            title: "zoomed out",
            transform: view(0.05, 0.05, Vec2::ZERO),
        },
        Viewport {
            title: "anisotropic zoom",
            transform: view(200.0, 3.0, Vec2::new(0.0, 20.0)),
        },
        Viewport {
            title: "panned far from the origin",
            transform: view(50.0, 50.0, Vec2::new(123_456.0, -42.0)),
        },
    ]
}

fn paint_curve(surface: &mut svg::SvgSurface, transform: Affine) {
    let to_world = transform.inverse();
    let points: Vec<Point> = (0..=240)
        .map(|i| {
            let sx = WIDTH * f64::from(i) / 240.0;
            let x = (to_world * Point::new(sx, 0.0)).x;
            transform * Point::new(x, x.sin() * 2.0)
        })
        .collect();
    surface.polyline(&points, &StrokeStyle::solid(css::STEEL_BLUE, 1.5));
}

fn main() {
    let mut origin_axes = AxesPainter::new(AxesConfig::default()).expect("default config");
    let fixed_style = AxesStyle {
        font: TextStyle::default().with_family(FontFamily::Monospace),
        ..AxesStyle::default()
    };
    let mut fixed_axes = ScreenFixedAxesPainter::new(
        AxesConfig::default()
            .with_min_screen_tick_distance(40.0, 25.0)
            .with_style(fixed_style),
        Insets::new(-1.0, 50.0, 30.0, 10.0),
        Insets::new(10.0, 50.0, 30.0, 0.0),
    )
    .expect("valid config");

    let mut html = String::new();
    html.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str("<title>vizir_axes demo</title></head><body>\n");
    html.push_str("<h1>vizir_axes demo</h1>\n");

    for vp in viewports() {
        let mut origin_svg = svg::SvgSurface::new(WIDTH, HEIGHT);
        origin_axes.paint(&mut origin_svg, vp.transform, WIDTH, HEIGHT);
        paint_curve(&mut origin_svg, vp.transform);
        // A second frame with the same viewport reuses the cached ticks.
        origin_axes.paint(
            &mut svg::SvgSurface::new(WIDTH, HEIGHT),
            vp.transform,
            WIDTH,
            HEIGHT,
        );

        let mut fixed_svg = svg::SvgSurface::new(WIDTH, HEIGHT);
        fixed_axes.paint(&mut fixed_svg, vp.transform, WIDTH, HEIGHT);
        paint_curve(&mut fixed_svg, vp.transform);

        let ticks = origin_axes.ticks_x();
        let _ = writeln!(
            html,
            "<h2>{}</h2>\n<p>x interval {}, y interval {}</p>",
            svg::escape_xml(vp.title),
            ticks.interval,
            origin_axes.ticks_y().interval
        );
        html.push_str("<div style=\"display:flex;gap:16px\">\n");
        html.push_str(&origin_svg.to_svg_string());
        html.push_str(&fixed_svg.to_svg_string());
        html.push_str("</div>\n");
    }
    html.push_str("</body></html>\n");

    std::fs::write("vizir_axes_demo.html", html).expect("write vizir_axes_demo.html");
    println!(
        "wrote vizir_axes_demo.html ({} tick recomputations for {} viewports)",
        origin_axes.recompute_count(),
        viewports().len()
    );
}
