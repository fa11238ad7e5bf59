use std::f64::consts::PI;

use crate::surface::{Color, StrokeCap, Surface};

/// Geometry and colour shared by every ornament in the chain.
#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentStyle {
    /// Corners per row, alternating between mirrored and unmirrored.
    pub lines: usize,
    /// Rows that fold in one after the other.
    pub up_lines: usize,
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub rot_deg: f32,
    pub foreground: Color,
}

impl Default for OrnamentStyle {
    fn default() -> Self {
        OrnamentStyle {
            lines: 2,
            up_lines: 2,
            stroke_factor: 90.0,
            size_factor: 2.9,
            rot_deg: 90.0,
            foreground: Color::new(0x4c, 0xaf, 0x50),
        }
    }
}

/// Draws the ornament in vertical slot `index` of `count` at animation phase
/// `scale`.
pub fn draw_ornament<S: Surface>(
    surface: &mut S,
    style: &OrnamentStyle,
    index: usize,
    count: usize,
    scale: f64,
) {
    let w = surface.width();
    let h = surface.height();
    let gap = h / (count + 1) as f32;
    let size = gap / style.size_factor;

    surface.set_stroke_color(style.foreground);
    surface.set_stroke_cap(StrokeCap::Round);
    surface.set_stroke_width(w.min(h) / style.stroke_factor);

    surface.save();
    surface.translate(w / 2.0, gap * (index + 1) as f32);
    draw_rot_lines(surface, style, scale, size);
    surface.restore();
}

fn draw_rot_lines<S: Surface>(surface: &mut S, style: &OrnamentStyle, scale: f64, size: f32) {
    let sf = sinify(scale);
    for row in 0..style.up_lines {
        let sfr = divide_scale(sf, row, style.up_lines);
        for corner in 0..style.lines {
            let mirror = if corner % 2 == 1 { -1.0 } else { 1.0 };
            surface.save();
            surface.scale(mirror, 1.0);
            draw_rot_line(surface, style, row, sfr, size);
            surface.restore();
        }
    }
}

fn draw_rot_line<S: Surface>(
    surface: &mut S,
    style: &OrnamentStyle,
    row: usize,
    scale: f64,
    size: f32,
) {
    let sci = divide_scale(scale, row, style.lines);
    surface.save();
    surface.translate(size, size);
    surface.rotate(style.rot_deg * sci as f32);
    surface.draw_line(0.0, 0.0, -size, 0.0);
    surface.restore();
}

fn max_scale(scale: f64, i: usize, n: usize) -> f64 {
    (scale - i as f64 / n as f64).max(0.0)
}

/// Share of `scale` that falls into the `i`-th of `n` equal parts,
/// rescaled to 0..=1.
fn divide_scale(scale: f64, i: usize, n: usize) -> f64 {
    (1.0 / n as f64).min(max_scale(scale, i, n)) * n as f64
}

fn sinify(scale: f64) -> f64 {
    (scale * PI).sin()
}
