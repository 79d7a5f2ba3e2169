//! 2D math used by movement, projectiles and waves
//!
//! Positions are `f32` in screen pixels (y grows downward). Collision bounds
//! are still `sdl2::rect::Rect`; this module only does the continuous math
//! that rects can't: direction vectors, segment clipping and curve sampling.

use sdl2::rect::Rect;
use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or zero for the zero vector
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Builds a rect of size `w`x`h` centered on `center`
pub fn rect_centered(center: Vec2, w: u32, h: u32) -> Rect {
    Rect::new(
        (center.x - w as f32 / 2.0).round() as i32,
        (center.y - h as f32 / 2.0).round() as i32,
        w,
        h,
    )
}

/// Checks whether the segment `a -> b` passes through `rect`.
///
/// Liang–Barsky clipping against the closed box `[x, x+w] x [y, y+h]`. A
/// segment that merely touches an edge counts as a hit.
pub fn segment_intersects_rect(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    let x_min = rect.x() as f32;
    let y_min = rect.y() as f32;
    let x_max = x_min + rect.width() as f32;
    let y_max = y_min + rect.height() as f32;

    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    // (p, q) pairs for left, right, top, bottom
    let edges = [
        (-dx, a.x - x_min),
        (dx, x_max - a.x),
        (-dy, a.y - y_min),
        (dy, y_max - a.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: reject if outside it
            if q < 0.0 {
                return false;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return false;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return false;
                }
                t1 = t1.min(t);
            }
        }
    }

    t0 <= t1
}

/// Samples a sine path between two x coordinates.
///
/// Produces `round(x_end - x_start)` points evenly spread from `x_start` to
/// `x_start + n`, each at `baseline + sin(x * frequency + phase) * amplitude`.
pub fn sine_points(
    x_start: f32,
    x_end: f32,
    amplitude: f32,
    frequency: f32,
    phase: f32,
    baseline: f32,
) -> Vec<Vec2> {
    let count = (x_end - x_start).round();
    if count < 1.0 {
        return Vec::new();
    }
    let n = count as usize;
    let step = if n > 1 { count / (n - 1) as f32 } else { 0.0 };

    (0..n)
        .map(|i| {
            let x = x_start + i as f32 * step;
            Vec2::new(x, sine_y(x, amplitude, frequency, phase, baseline))
        })
        .collect()
}

#[inline]
pub fn sine_y(x: f32, amplitude: f32, frequency: f32, phase: f32, baseline: f32) -> f32 {
    baseline + (x * frequency + phase).sin() * amplitude
}

/// Point on a cubic Bezier curve at parameter `t` in `[0, 1]`
pub fn cubic_bezier(t: f32, p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Samples `count` points along a cubic Bezier, `t` evenly spaced from 0 to 1
pub fn bezier_points(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, count: usize) -> Vec<Vec2> {
    match count {
        0 => Vec::new(),
        1 => vec![p0],
        _ => (0..count)
            .map(|i| {
                let t = i as f32 / (count - 1) as f32;
                cubic_bezier(t, p0, c1, c2, p3)
            })
            .collect(),
    }
}

/// Control point halfway between `a` and `b` on x, jittered off `a` on y
pub fn control_point(a: Vec2, b: Vec2, jitter: f32) -> Vec2 {
    Vec2::new((a.x + b.x) / 2.0, a.y + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalized_zero_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_normalized_diagonal() {
        let v = Vec2::new(1.0, -1.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_segment_crossing_rect() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(segment_intersects_rect(Vec2::new(0.0, 20.0), Vec2::new(50.0, 20.0), &rect));
        assert!(segment_intersects_rect(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0), &rect));
    }

    #[test]
    fn test_segment_inside_rect() {
        let rect = Rect::new(0, 0, 100, 100);
        assert!(segment_intersects_rect(Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0), &rect));
    }

    #[test]
    fn test_segment_missing_rect() {
        let rect = Rect::new(10, 10, 20, 20);
        // Passes above
        assert!(!segment_intersects_rect(Vec2::new(0.0, 5.0), Vec2::new(50.0, 5.0), &rect));
        // Stops short
        assert!(!segment_intersects_rect(Vec2::new(0.0, 20.0), Vec2::new(9.0, 20.0), &rect));
        // Diagonal that clears the corner
        assert!(!segment_intersects_rect(Vec2::new(0.0, 25.0), Vec2::new(5.0, 40.0), &rect));
    }

    #[test]
    fn test_sine_points_span() {
        let points = sine_points(100.0, 200.0, 20.0, 0.1, 0.0, 300.0);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0].x, 100.0);
        assert!((points[99].x - 200.0).abs() < 1e-3);
        for p in &points {
            assert!(p.y >= 280.0 - 1e-3 && p.y <= 320.0 + 1e-3);
        }
    }

    #[test]
    fn test_sine_points_reversed_range_is_empty() {
        assert!(sine_points(200.0, 100.0, 20.0, 0.1, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_bezier_endpoints() {
        let p0 = Vec2::new(500.0, 300.0);
        let p3 = Vec2::new(100.0, 120.0);
        let points = bezier_points(p0, Vec2::new(400.0, 250.0), Vec2::new(200.0, 90.0), p3, 101);

        assert_eq!(points.len(), 101);
        assert_eq!(points[0], p0);
        assert!((points[100].x - p3.x).abs() < 1e-3);
        assert!((points[100].y - p3.y).abs() < 1e-3);
    }

    #[test]
    fn test_control_point() {
        let c = control_point(Vec2::new(0.0, 10.0), Vec2::new(100.0, 90.0), -5.0);
        assert_eq!(c, Vec2::new(50.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_segment_with_endpoint_inside_hits(
            ax in 0.0f32..100.0, ay in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let rect = Rect::new(0, 0, 100, 100);
            prop_assert!(segment_intersects_rect(Vec2::new(ax, ay), Vec2::new(bx, by), &rect));
        }

        #[test]
        fn prop_segment_left_of_rect_misses(
            ax in -500.0f32..-1.0, ay in -500.0f32..500.0,
            bx in -500.0f32..-1.0, by in -500.0f32..500.0,
        ) {
            let rect = Rect::new(0, 0, 100, 100);
            prop_assert!(!segment_intersects_rect(Vec2::new(ax, ay), Vec2::new(bx, by), &rect));
        }

        #[test]
        fn prop_normalized_is_unit(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let len = Vec2::new(x, y).normalized().length();
            prop_assert!((len - 1.0).abs() < 1e-4);
        }
    }
}
