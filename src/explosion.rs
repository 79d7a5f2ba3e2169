use crate::assets::Assets;
use crate::collision::Collidable;
use crate::geometry::{rect_centered, Vec2};
use crate::group::Entity;
use crate::render::{draw_ring, Drawable};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const EXPLOSION_FRAMES: usize = 6;
pub const EXPLOSION_SIZE: u32 = 60;
/// Updates spent on each frame
pub const FRAME_HOLD: u32 = 5;

/// A short frame-counted blast left behind by every hit.
///
/// Explosions are purely visual; they never collide with anything. They are
/// advanced once per rendered frame, not by `dt`, so a blast always lasts
/// `EXPLOSION_FRAMES * FRAME_HOLD` updates.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub center: Vec2,
    frame: usize,
    counter: u32,
    alive: bool,
}

impl Explosion {
    pub fn new(center: Vec2) -> Self {
        Explosion {
            center,
            frame: 0,
            counter: 0,
            alive: true,
        }
    }

    /// Explosion centered on something's bounds
    pub fn at(bounds: Rect) -> Self {
        let c = bounds.center();
        Explosion::new(Vec2::new(c.x() as f32, c.y() as f32))
    }

    pub fn update(&mut self) {
        if !self.alive {
            return;
        }
        self.counter += 1;
        if self.counter >= FRAME_HOLD {
            if self.frame + 1 < EXPLOSION_FRAMES {
                self.frame += 1;
                self.counter = 0;
            } else {
                self.alive = false;
            }
        }
    }
}

impl Collidable for Explosion {
    fn get_bounds(&self) -> Rect {
        rect_centered(self.center, EXPLOSION_SIZE, EXPLOSION_SIZE)
    }
}

impl Entity for Explosion {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Drawable for Explosion {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        let name = format!("explosion_{}", self.frame + 1);
        if assets.draw(canvas, &name, self.get_bounds())? {
            return Ok(());
        }

        // Ring grows and cools from yellow to dark red
        let t = self.frame as f32 / (EXPLOSION_FRAMES - 1) as f32;
        let radius = 8.0 + t * (EXPLOSION_SIZE as f32 / 2.0 - 8.0);
        let color = Color::RGB(255, (220.0 * (1.0 - t)) as u8, (60.0 * (1.0 - t)) as u8);
        draw_ring(canvas, self.center, radius, 4, color)
    }
}
