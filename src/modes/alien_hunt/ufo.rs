//! The alien fleet
//!
//! Red and blue UFOs hover in place (blue ones shoot). Green UFOs glide back
//! and forth along one axis and bounce off planets, other UFOs and the
//! screen edges.

use crate::assets::Assets;
use crate::collision::Collidable;
use crate::group::Entity;
use crate::planet::{random_rect, PlanetField, FIELD_MIN_Y};
use crate::render::Drawable;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SPAWN_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UfoKind {
    Red,
    Green,
    Blue,
}

impl UfoKind {
    pub fn size(self) -> (u32, u32) {
        match self {
            UfoKind::Red => (60, 40),
            UfoKind::Green => (60, 40),
            UfoKind::Blue => (70, 45),
        }
    }

    fn texture(self) -> &'static str {
        match self {
            UfoKind::Red => "ufo_red",
            UfoKind::Green => "ufo_green",
            UfoKind::Blue => "ufo_blue",
        }
    }

    fn color(self) -> Color {
        match self {
            UfoKind::Red => Color::RGB(220, 50, 50),
            UfoKind::Green => Color::RGB(60, 210, 80),
            UfoKind::Blue => Color::RGB(60, 120, 240),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone)]
pub struct Ufo {
    pub kind: UfoKind,
    pub x: f32,
    pub y: f32,
    width: u32,
    height: u32,
    pub axis: Axis,
    /// +1 or -1 along `axis`
    pub direction: f32,
    /// Sprite mirrored (hovering UFOs wobble once a second)
    pub flipped: bool,
}

impl Ufo {
    pub fn new(kind: UfoKind, x: f32, y: f32, axis: Axis) -> Self {
        let (width, height) = kind.size();
        Ufo {
            kind,
            x,
            y,
            width,
            height,
            axis,
            direction: 1.0,
            flipped: false,
        }
    }

    /// Glides along the axis. Only green UFOs move.
    pub fn update(&mut self, dt: f32, speed: f32) {
        if self.kind != UfoKind::Green {
            return;
        }
        let step = speed * dt * self.direction;
        match self.axis {
            Axis::Horizontal => self.x += step,
            Axis::Vertical => self.y += step,
        }
    }

    /// Backs off to one pixel short of `obstacle` and turns around
    pub fn bounce_off(&mut self, obstacle: &Rect) {
        let forward = self.direction > 0.0;
        match (self.axis, forward) {
            (Axis::Horizontal, true) => self.x = (obstacle.left() - self.width as i32 - 1) as f32,
            (Axis::Horizontal, false) => self.x = (obstacle.right() + 1) as f32,
            (Axis::Vertical, true) => self.y = (obstacle.top() - self.height as i32 - 1) as f32,
            (Axis::Vertical, false) => self.y = (obstacle.bottom() + 1) as f32,
        }
        self.direction = -self.direction;
    }

    /// Clamps to the screen, turning around at an edge
    pub fn keep_on_screen(&mut self, screen_width: u32, screen_height: u32) {
        let max_x = screen_width.saturating_sub(self.width) as f32;
        let max_y = screen_height.saturating_sub(self.height) as f32;

        if self.x < 0.0 {
            self.x = 0.0;
            self.direction = 1.0;
        } else if self.x > max_x {
            self.x = max_x;
            self.direction = -1.0;
        } else if self.y < 0.0 {
            self.y = 0.0;
            self.direction = 1.0;
        } else if self.y > max_y {
            self.y = max_y;
            self.direction = -1.0;
        }
    }
}

impl Collidable for Ufo {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x.round() as i32, self.y.round() as i32, self.width, self.height)
    }
}

impl Entity for Ufo {}

impl Drawable for Ufo {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        let bounds = self.get_bounds();
        let mirrored = match self.kind {
            UfoKind::Green => self.direction < 0.0,
            _ => self.flipped,
        };
        if assets.draw_flipped(canvas, self.kind.texture(), bounds, mirrored)? {
            return Ok(());
        }

        // Saucer: wide hull, narrow dome, one light that swaps sides
        let w = bounds.width() as i32;
        let h = bounds.height() as i32;
        canvas.set_draw_color(self.kind.color());
        canvas.fill_rect(Rect::new(bounds.x(), bounds.y() + h / 2, w as u32, (h / 3) as u32))?;
        canvas.fill_rect(Rect::new(bounds.x() + w / 4, bounds.y() + h / 6, (w / 2) as u32, (h / 3) as u32))?;

        canvas.set_draw_color(Color::RGB(255, 240, 150));
        let light_x = if mirrored { bounds.x() + w / 8 } else { bounds.right() - w / 8 - 4 };
        canvas.fill_rect(Rect::new(light_x, bounds.y() + h / 2 + 2, 4, 4))?;
        Ok(())
    }
}

/// Spawns up to `count` UFOs of one kind, none touching a planet.
///
/// UFOs may overlap each other. Each one gets `SPAWN_ATTEMPTS` tries.
pub fn spawn_fleet(
    rng: &mut impl Rng,
    kind: UfoKind,
    count: usize,
    axis: Axis,
    planets: &PlanetField,
    screen_width: u32,
    screen_height: u32,
) -> Vec<Ufo> {
    let (w, h) = kind.size();
    let mut fleet = Vec::with_capacity(count);

    'spawn: for _ in 0..count {
        for _ in 0..SPAWN_ATTEMPTS {
            let spot = random_rect(rng, w, h, screen_width, screen_height, FIELD_MIN_Y);
            if planets.is_free(&spot) {
                fleet.push(Ufo::new(kind, spot.x() as f32, spot.y() as f32, axis));
                continue 'spawn;
            }
        }
        log::warn!("No room for more {:?} UFOs ({} of {})", kind, fleet.len(), count);
        break;
    }

    fleet
}
