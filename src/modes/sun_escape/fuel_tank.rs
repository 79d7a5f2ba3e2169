use crate::assets::Assets;
use crate::collision::Collidable;
use crate::group::Entity;
use crate::render::Drawable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const FUEL_TANK_WIDTH: u32 = 70;
pub const FUEL_TANK_HEIGHT: u32 = 50;

/// A spare tank floating in space. Flying into it refuels the rocket.
#[derive(Debug, Clone)]
pub struct FuelTank {
    rect: Rect,
    /// Sprite mirrored; tanks rock from side to side every second
    pub flipped: bool,
}

impl FuelTank {
    pub fn new(center_x: i32, y: i32) -> Self {
        FuelTank {
            rect: Rect::new(center_x - FUEL_TANK_WIDTH as i32 / 2, y, FUEL_TANK_WIDTH, FUEL_TANK_HEIGHT),
            flipped: false,
        }
    }
}

impl Collidable for FuelTank {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Entity for FuelTank {}

impl Drawable for FuelTank {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        if assets.draw_flipped(canvas, "fuel_tank", self.rect, self.flipped)? {
            return Ok(());
        }

        let r = self.rect;
        canvas.set_draw_color(Color::RGB(200, 40, 40));
        canvas.fill_rect(Rect::new(r.x() + 6, r.y() + 8, r.width() - 12, r.height() - 8))?;
        // Nozzle on whichever side the tank is leaning
        let nozzle_x = if self.flipped { r.x() + 6 } else { r.right() - 22 };
        canvas.set_draw_color(Color::RGB(180, 180, 190));
        canvas.fill_rect(Rect::new(nozzle_x, r.y(), 16, 8))?;
        canvas.set_draw_color(Color::RGB(255, 220, 0));
        canvas.fill_rect(Rect::new(r.x() + 12, r.y() + 22, r.width() - 24, 6))?;
        Ok(())
    }
}
