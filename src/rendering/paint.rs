//! Shape primitive command set for the procedural renderer
//!
//! Geometry is expressed in canvas pixels; templates compute it as fixed
//! ratios of the canvas size. Pixels are covered when their center falls
//! inside the shape, and drawing replaces whatever was underneath.

use super::Canvas;

/// A single RGBA color, straight (non-premultiplied) channels
pub type Rgba = (u8, u8, u8, u8);

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Solid disc
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        rgba: Rgba,
    },
    /// Circle outline; the stroke straddles the radius
    StrokeCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        stroke: f32,
        rgba: Rgba,
    },
    /// Axis-aligned solid rectangle
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rgba: Rgba,
    },
    /// Solid polygon (non-self-intersecting, even-odd fill)
    FillPolygon { points: Vec<(f32, f32)>, rgba: Rgba },
    /// Disc whose alpha fades linearly from opaque at the center to
    /// transparent at the rim
    GradientDisc {
        cx: f32,
        cy: f32,
        radius: f32,
        rgba: Rgba,
    },
}

/// Rasterize one shape onto the canvas.
pub fn draw(canvas: &mut Canvas, shape: &Shape) {
    match *shape {
        Shape::FillCircle { cx, cy, radius, rgba } => fill_circle(canvas, cx, cy, radius, rgba),
        Shape::StrokeCircle { cx, cy, radius, stroke, rgba } => {
            stroke_circle(canvas, cx, cy, radius, stroke, rgba)
        }
        Shape::FillRect { x, y, width, height, rgba } => {
            fill_rect(canvas, x, y, width, height, rgba)
        }
        Shape::FillPolygon { ref points, rgba } => fill_polygon(canvas, points, rgba),
        Shape::GradientDisc { cx, cy, radius, rgba } => {
            gradient_disc(canvas, cx, cy, radius, rgba)
        }
    }
}

/// Iterate the pixel rows/columns whose centers can fall inside a bounding
/// box `[min, max]`, clipping is left to `Canvas::put`.
fn span(min: f32, max: f32) -> std::ops::RangeInclusive<i64> {
    (min.floor() as i64 - 1)..=(max.ceil() as i64 + 1)
}

fn fill_circle(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, rgba: Rgba) {
    if radius <= 0.0 {
        return;
    }
    for y in span(cy - radius, cy + radius) {
        for x in span(cx - radius, cx + radius) {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                canvas.put(x, y, rgba);
            }
        }
    }
}

fn stroke_circle(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, stroke: f32, rgba: Rgba) {
    if radius <= 0.0 || stroke <= 0.0 {
        return;
    }
    let outer = radius + stroke * 0.5;
    for y in span(cy - outer, cy + outer) {
        for x in span(cx - outer, cx + outer) {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() <= stroke * 0.5 {
                canvas.put(x, y, rgba);
            }
        }
    }
}

fn fill_rect(canvas: &mut Canvas, x: f32, y: f32, width: f32, height: f32, rgba: Rgba) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    for py in span(y, y + height) {
        for px in span(x, x + width) {
            let fx = px as f32 + 0.5;
            let fy = py as f32 + 0.5;
            if fx >= x && fx < x + width && fy >= y && fy < y + height {
                canvas.put(px, py, rgba);
            }
        }
    }
}

fn fill_polygon(canvas: &mut Canvas, points: &[(f32, f32)], rgba: Rgba) {
    if points.len() < 3 {
        return;
    }
    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    for y in span(min_y, max_y) {
        for x in span(min_x, max_x) {
            if point_in_polygon(x as f32 + 0.5, y as f32 + 0.5, points) {
                canvas.put(x, y, rgba);
            }
        }
    }
}

fn gradient_disc(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, rgba: Rgba) {
    if radius <= 0.0 {
        return;
    }
    for y in span(cy - radius, cy + radius) {
        for x in span(cx - radius, cx + radius) {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= radius {
                let t = dist / radius;
                let alpha = (f32::from(rgba.3) * (1.0 - t)).round() as u8;
                canvas.put(x, y, (rgba.0, rgba.1, rgba.2, alpha));
            }
        }
    }
}

/// Even-odd crossing test
fn point_in_polygon(px: f32, py: f32, points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) {
            let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
