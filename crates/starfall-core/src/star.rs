//! Procedural star texture generation.
//!
//! The demo ships no image assets; the five-pointed star is rasterized into
//! an RGBA8 buffer at startup and uploaded as a single texture shared by the
//! target sprite and every shower sprite.

use starfall_types::color::Color;

/// Inner-to-outer radius ratio of a regular five-pointed star.
const INNER_RATIO: f32 = 0.382;

/// Rasterize a filled five-pointed star into an RGBA8 buffer.
///
/// The star is inscribed in a `size` x `size` square, one point up, filled
/// with `color`. Pixels outside the outline are fully transparent. The
/// returned buffer is `size * size * 4` bytes, row-major.
pub fn generate_pixels(size: u32, color: Color) -> Vec<u8> {
    let outline = star_outline(size);
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    for py in 0..size {
        for px in 0..size {
            // Sample at the pixel center.
            let x = px as f32 + 0.5;
            let y = py as f32 + 0.5;
            if point_in_polygon(x, y, &outline) {
                let i = ((py * size + px) * 4) as usize;
                pixels[i] = color.r;
                pixels[i + 1] = color.g;
                pixels[i + 2] = color.b;
                pixels[i + 3] = color.a;
            }
        }
    }
    pixels
}

/// The ten vertices of the star outline, alternating outer and inner points.
fn star_outline(size: u32) -> [(f32, f32); 10] {
    let cx = size as f32 / 2.0;
    let cy = size as f32 / 2.0;
    let outer = size as f32 / 2.0;
    let inner = outer * INNER_RATIO;

    let mut verts = [(0.0f32, 0.0f32); 10];
    for (i, vert) in verts.iter_mut().enumerate() {
        let r = if i % 2 == 0 { outer } else { inner };
        // Start at the top point, step by 36 degrees.
        let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        *vert = (cx + r * angle.cos(), cy + r * angle.sin());
    }
    verts
}

/// Even-odd rule point-in-polygon test.
fn point_in_polygon(x: f32, y: f32, poly: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
