//! Projectiles and volleys
//!
//! Every shot in the game is a 15x15 square flying along one of eight
//! headings. A volley is what one trigger pull produces: one shot, or two
//! side by side when double fire is unlocked.

use crate::assets::Assets;
use crate::collision::Collidable;
use crate::craft::Heading;
use crate::geometry::{rect_centered, Vec2};
use crate::group::Entity;
use crate::render::Drawable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::f32::consts::FRAC_1_SQRT_2;

pub const PROJECTILE_SIZE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction8 {
    Right,
    Left,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction8 {
    pub fn vector(self) -> Vec2 {
        let d = FRAC_1_SQRT_2;
        match self {
            Direction8::Right => Vec2::new(1.0, 0.0),
            Direction8::Left => Vec2::new(-1.0, 0.0),
            Direction8::Up => Vec2::new(0.0, -1.0),
            Direction8::Down => Vec2::new(0.0, 1.0),
            Direction8::UpLeft => Vec2::new(-d, -d),
            Direction8::UpRight => Vec2::new(d, -d),
            Direction8::DownLeft => Vec2::new(-d, d),
            Direction8::DownRight => Vec2::new(d, d),
        }
    }

    /// Maps a 1..=8 die roll to a heading; anything else is `None`
    pub fn from_roll(roll: u8) -> Option<Direction8> {
        match roll {
            1 => Some(Direction8::Right),
            2 => Some(Direction8::Left),
            3 => Some(Direction8::Up),
            4 => Some(Direction8::Down),
            5 => Some(Direction8::UpLeft),
            6 => Some(Direction8::UpRight),
            7 => Some(Direction8::DownLeft),
            8 => Some(Direction8::DownRight),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction8::Right | Direction8::Left)
    }

    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction8::Right | Direction8::Left | Direction8::Up | Direction8::Down
        )
    }

    /// The two diagonals either side of a cardinal heading. Diagonals have no flank.
    pub fn flank(self) -> Option<[Direction8; 2]> {
        match self {
            Direction8::Right => Some([Direction8::UpRight, Direction8::DownRight]),
            Direction8::Left => Some([Direction8::UpLeft, Direction8::DownLeft]),
            Direction8::Up => Some([Direction8::UpLeft, Direction8::UpRight]),
            Direction8::Down => Some([Direction8::DownLeft, Direction8::DownRight]),
            _ => None,
        }
    }
}

impl From<Heading> for Direction8 {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Right => Direction8::Right,
            Heading::Left => Direction8::Left,
            Heading::Up => Direction8::Up,
            Heading::Down => Direction8::Down,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub center: Vec2,
    pub heading: Direction8,
    pub color: Color,
}

impl Projectile {
    pub fn new(center: Vec2, heading: Direction8) -> Self {
        Projectile {
            center,
            heading,
            color: Color::RGB(255, 230, 90),
        }
    }

    pub fn tinted(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn update(&mut self, dt: f32, speed: f32) {
        self.center += self.heading.vector() * (speed * dt);
    }

    /// True once no pixel of the projectile is on screen
    pub fn is_off_screen(&self, screen_width: u32, screen_height: u32) -> bool {
        let r = self.get_bounds();
        r.right() <= 0
            || r.bottom() <= 0
            || r.x() >= screen_width as i32
            || r.y() >= screen_height as i32
    }
}

impl Collidable for Projectile {
    fn get_bounds(&self) -> Rect {
        rect_centered(self.center, PROJECTILE_SIZE, PROJECTILE_SIZE)
    }
}

impl Entity for Projectile {}

impl Drawable for Projectile {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        let bounds = self.get_bounds();
        if assets.draw(canvas, "projectile", bounds)? {
            return Ok(());
        }
        canvas.set_draw_color(self.color);
        canvas.fill_rect(Rect::new(bounds.x() + 3, bounds.y() + 3, 9, 9))?;
        Ok(())
    }
}

/// Fires from the center of `origin`.
///
/// A double volley on a horizontal heading puts one shot on the top edge and
/// one on the bottom edge; any other heading splits them left and right.
pub fn volley(origin: Rect, heading: Direction8, double: bool) -> Vec<Projectile> {
    let center = Vec2::new(
        origin.x() as f32 + origin.width() as f32 / 2.0,
        origin.y() as f32 + origin.height() as f32 / 2.0,
    );

    if !double {
        return vec![Projectile::new(center, heading)];
    }

    if heading.is_horizontal() {
        vec![
            Projectile::new(Vec2::new(center.x, origin.top() as f32), heading),
            Projectile::new(Vec2::new(center.x, origin.bottom() as f32), heading),
        ]
    } else {
        vec![
            Projectile::new(Vec2::new(origin.left() as f32, center.y), heading),
            Projectile::new(Vec2::new(origin.right() as f32, center.y), heading),
        ]
    }
}
