//! The star the rocket is escaping, one stage per level
//!
//! Only the black hole moves: it drifts up and down and bounces off the
//! top and bottom of the screen.

use crate::assets::Assets;
use crate::clock::Countdown;
use crate::collision::Collidable;
use crate::geometry::Vec2;
use crate::render::{draw_ring, fill_circle, Drawable};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunStage {
    YellowDwarf,
    RedGiant,
    BlueDwarf,
    BlackHole,
}

impl SunStage {
    pub fn for_level(level: u32) -> Option<SunStage> {
        match level {
            1 => Some(SunStage::YellowDwarf),
            2 => Some(SunStage::RedGiant),
            3 => Some(SunStage::BlueDwarf),
            4 => Some(SunStage::BlackHole),
            _ => None,
        }
    }

    pub fn size(self) -> u32 {
        match self {
            SunStage::YellowDwarf => 150,
            SunStage::RedGiant => 300,
            SunStage::BlueDwarf => 130,
            SunStage::BlackHole => 150,
        }
    }

    /// Gap between the star's right edge and the screen edge
    fn right_margin(self) -> i32 {
        match self {
            SunStage::RedGiant => 30,
            _ => 50,
        }
    }

    fn texture(self) -> &'static str {
        match self {
            SunStage::YellowDwarf => "sun_yellow_dwarf",
            SunStage::RedGiant => "sun_red_giant",
            SunStage::BlueDwarf => "sun_blue_dwarf",
            SunStage::BlackHole => "black_hole",
        }
    }

    fn color(self) -> Color {
        match self {
            SunStage::YellowDwarf => Color::RGB(255, 220, 60),
            SunStage::RedGiant => Color::RGB(230, 70, 40),
            SunStage::BlueDwarf => Color::RGB(120, 170, 255),
            SunStage::BlackHole => Color::RGB(10, 0, 15),
        }
    }
}

const FLASH_COLOR: Color = Color::RGBA(128, 0, 128, 192);

#[derive(Debug, Clone)]
pub struct Sun {
    stage: SunStage,
    rect: Rect,
    /// Sub-pixel vertical position of the drifting black hole
    y: f32,
    flash: Option<Countdown>,
}

impl Sun {
    pub fn new(stage: SunStage, screen_width: u32, screen_height: u32) -> Self {
        let mut sun = Sun {
            stage,
            rect: Rect::new(0, 0, 1, 1),
            y: 0.0,
            flash: None,
        };
        sun.set_stage(stage, screen_width, screen_height);
        sun
    }

    pub fn stage(&self) -> SunStage {
        self.stage
    }

    /// Switches stage, back against the right edge and centered vertically
    pub fn set_stage(&mut self, stage: SunStage, screen_width: u32, screen_height: u32) {
        let size = stage.size();
        let x = screen_width as i32 - stage.right_margin() - size as i32;
        let y = (screen_height as i32 - size as i32) / 2;
        self.stage = stage;
        self.rect = Rect::new(x, y, size, size);
        self.y = y as f32;
        self.flash = None;
    }

    pub fn center(&self) -> Vec2 {
        let c = self.rect.center();
        Vec2::new(c.x() as f32, c.y() as f32)
    }

    /// Drifts the black hole by `speed * direction`, flipping `direction`
    /// at the top and bottom edges. Also runs down the hit flash.
    pub fn update(&mut self, dt: f32, speed: f32, direction: &mut f32, screen_height: u32) {
        if let Some(flash) = self.flash.as_mut() {
            flash.tick(dt);
            if flash.is_finished() {
                self.flash = None;
            }
        }

        if self.stage != SunStage::BlackHole {
            return;
        }

        let max_y = screen_height.saturating_sub(self.rect.height()) as f32;
        self.y += speed * dt * *direction;
        if self.y <= 0.0 {
            self.y = 0.0;
            *direction = 1.0;
        } else if self.y >= max_y {
            self.y = max_y;
            *direction = -1.0;
        }
        self.rect.set_y(self.y.round() as i32);
    }

    /// Violet glow for `duration` seconds
    pub fn hit(&mut self, duration: f32) {
        self.flash = Some(Countdown::new(duration));
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }
}

impl Collidable for Sun {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Sun {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        if !assets.draw(canvas, self.stage.texture(), self.rect)? {
            let radius = self.rect.width() as f32 / 2.0;
            fill_circle(canvas, self.center(), radius, self.stage.color())?;
            if self.stage == SunStage::BlackHole {
                // Accretion disc
                draw_ring(canvas, self.center(), radius, 6, Color::RGB(200, 120, 255))?;
            }
        }

        if self.is_flashing() {
            canvas.set_blend_mode(BlendMode::Blend);
            canvas.set_draw_color(FLASH_COLOR);
            canvas.fill_rect(self.rect)?;
            canvas.set_blend_mode(BlendMode::None);
        }
        Ok(())
    }
}
