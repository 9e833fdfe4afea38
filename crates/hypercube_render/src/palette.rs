//! Colors for the rendered hypercube
//!
//! Converts the puzzle's tint and vertex colors into RGBA values for the
//! edge, vertex and face materials.

use hypercube_core::{Color, Puzzle, Tint, VERTEX_COUNT};

/// Vertex palette as 8-bit RGB: red, yellow, green, blue
pub const PALETTE_HEX: [&str; 4] = ["e54747", "e5e347", "47e547", "3ba0f1"];

/// Alpha of the translucent face material
pub const FACE_ALPHA: f32 = 0.1;

/// Parse a six-digit hex color into RGBA with full alpha
pub fn parse_hex(hex: &str) -> Option<[f32; 4]> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(|c| c as f32 / 255.0);
    Some([channel(0)?, channel(2)?, channel(4)?, 1.0])
}

/// RGBA for a vertex color
pub fn palette_color(color: Color) -> [f32; 4] {
    parse_hex(PALETTE_HEX[color.index()]).unwrap_or([1.0; 4])
}

/// HSV to RGB, all channels in `[0, 1]`; hue wraps
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if s == 0.0 {
        return [v, v, v];
    }

    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

fn rgba([r, g, b]: [f32; 3], a: f32) -> [f32; 4] {
    [r, g, b, a]
}

/// Material colors derived from one tint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialColors {
    pub edges: [f32; 4],
    /// Shared vertex material, used when vertices show no palette color
    pub vertices: [f32; 4],
    pub faces: [f32; 4],
}

impl MaterialColors {
    /// Edges take the tint as is; vertices are darker and less saturated;
    /// faces sit in between and are mostly transparent
    pub fn from_tint(tint: Tint) -> Self {
        let Tint { hue, saturation, value } = tint;
        Self {
            edges: rgba(hsv_to_rgb(hue, saturation, value), 1.0),
            vertices: rgba(hsv_to_rgb(hue, saturation * 0.8, value * 0.5), 1.0),
            faces: rgba(hsv_to_rgb(hue, saturation * 0.8, value * 0.75), FACE_ALPHA),
        }
    }
}

/// Display color of every vertex: the palette color while the puzzle awaits
/// input, the shared vertex material otherwise
pub fn vertex_display_colors(puzzle: &Puzzle, materials: &MaterialColors) -> [[f32; 4]; VERTEX_COUNT] {
    std::array::from_fn(|v| match puzzle.vertex_color(v) {
        Some(color) => palette_color(color),
        None => materials.vertices,
    })
}
