/// Drawing helpers shared by every mode
///
/// Entities draw themselves through the `Drawable` trait: try the texture,
/// fall back to primitives. The primitives here are built from SDL2 points,
/// lines and rects only.
///
/// # Usage Example
///
/// ```rust
/// draw_background(&mut canvas, &assets)?;
/// draw_all(&mut canvas, &assets, planets.iter())?;
/// draw_all(&mut canvas, &assets, ufos.iter())?;
/// ```
use crate::assets::Assets;
use crate::geometry::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Anything that can put itself on the canvas.
///
/// Implementations look up their texture in `assets` first and draw a
/// primitive shape when it is missing.
pub trait Drawable {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String>;
}

/// Draws items in iteration order (later items on top)
pub fn draw_all<'t, T, I>(canvas: &mut Canvas<Window>, assets: &Assets, items: I) -> Result<(), String>
where
    T: Drawable + 't,
    I: IntoIterator<Item = &'t T>,
{
    for item in items {
        item.draw(canvas, assets)?;
    }
    Ok(())
}

pub const SPACE_COLOR: Color = Color::RGB(5, 5, 20);

/// Background texture, or a dark sky with a fixed scatter of stars
pub fn draw_background(canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
    let (w, h) = canvas.logical_size();
    if assets.draw(canvas, "background", Rect::new(0, 0, w, h))? {
        return Ok(());
    }

    canvas.set_draw_color(SPACE_COLOR);
    canvas.clear();
    canvas.set_draw_color(Color::RGB(200, 200, 220));
    canvas.draw_points(star_points(w, h, 160).as_slice())?;
    Ok(())
}

/// Deterministic star positions so the sky doesn't flicker between frames
pub fn star_points(w: u32, h: u32, count: usize) -> Vec<Point> {
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let mut state: u32 = 0x2545_f491;
    let mut next = || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..count)
        .map(|_| Point::new((next() % w) as i32, (next() % h) as i32))
        .collect()
}

/// Filled disc made of horizontal spans
pub fn fill_circle(canvas: &mut Canvas<Window>, center: Vec2, radius: f32, color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    let r = radius.max(0.0);
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;
    let ri = r.ceil() as i32;

    for dy in -ri..=ri {
        let half = (r * r - (dy * dy) as f32).max(0.0).sqrt().round() as i32;
        if half > 0 {
            canvas.draw_line(Point::new(cx - half, cy + dy), Point::new(cx + half, cy + dy))?;
        }
    }
    Ok(())
}

/// Circle outline `thickness` pixels wide, growing inward from `radius`
pub fn draw_ring(
    canvas: &mut Canvas<Window>,
    center: Vec2,
    radius: f32,
    thickness: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let segments = 48;
    for t in 0..thickness {
        let r = (radius - t as f32).max(0.0);
        let points: Vec<Point> = (0..=segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * std::f32::consts::TAU;
                Point::new(
                    (center.x + a.cos() * r).round() as i32,
                    (center.y + a.sin() * r).round() as i32,
                )
            })
            .collect();
        canvas.draw_lines(points.as_slice())?;
    }
    Ok(())
}

/// Open polyline, thickened by redrawing it offset vertically
pub fn draw_polyline(
    canvas: &mut Canvas<Window>,
    points: &[Vec2],
    thickness: u32,
    color: Color,
) -> Result<(), String> {
    if points.len() < 2 {
        return Ok(());
    }
    canvas.set_draw_color(color);
    let half = thickness as i32 / 2;
    for offset in -half..=half.max(0) {
        let line: Vec<Point> = points
            .iter()
            .map(|p| Point::new(p.x.round() as i32, p.y.round() as i32 + offset))
            .collect();
        canvas.draw_lines(line.as_slice())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_stay_on_screen() {
        let stars = star_points(640, 480, 200);
        assert_eq!(stars.len(), 200);
        for star in &stars {
            assert!(star.x() >= 0 && star.x() < 640);
            assert!(star.y() >= 0 && star.y() < 480);
        }
    }

    #[test]
    fn test_star_points_are_stable() {
        assert_eq!(star_points(800, 600, 50), star_points(800, 600, 50));
    }

    #[test]
    fn test_star_points_empty_screen() {
        assert!(star_points(0, 600, 50).is_empty());
    }
}
