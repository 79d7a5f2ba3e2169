//! Player-controlled craft
//!
//! One struct covers the Alien Hunt rocket, the Sun Escape double rocket and
//! the two duel ships. Movement is driven by four thruster flags that the
//! input layer sets on key down and clears on key up.

use crate::assets::Assets;
use crate::collision::Collidable;
use crate::geometry::Vec2;
use crate::render::Drawable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// One of the four thruster directions. Also used as the craft's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Left,
    Up,
    Down,
}

impl Heading {
    /// Fixed order used whenever held headings are listed
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Left, Heading::Up, Heading::Down];

    pub fn vector(self) -> Vec2 {
        match self {
            Heading::Right => Vec2::new(1.0, 0.0),
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::Up => Vec2::new(0.0, -1.0),
            Heading::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// Rotation in degrees for sprites drawn nose-up
    pub fn angle(self) -> f64 {
        match self {
            Heading::Up => 0.0,
            Heading::Right => 90.0,
            Heading::Down => 180.0,
            Heading::Left => 270.0,
        }
    }

    fn index(self) -> usize {
        match self {
            Heading::Right => 0,
            Heading::Left => 1,
            Heading::Up => 2,
            Heading::Down => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Craft {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: f32,
    pub facing: Heading,
    thrusters: [bool; 4],
    /// Texture looked up in `Assets`; drawn procedurally when missing
    pub texture: String,
    pub color: Color,
}

impl Craft {
    pub fn new(x: f32, y: f32, width: u32, height: u32, speed: f32) -> Self {
        Craft {
            x,
            y,
            width,
            height,
            speed,
            facing: Heading::Up,
            thrusters: [false; 4],
            texture: String::from("rocket"),
            color: Color::RGB(200, 200, 220),
        }
    }

    pub fn with_look(mut self, texture: &str, color: Color) -> Self {
        self.texture = texture.to_string();
        self.color = color;
        self
    }

    pub fn facing(mut self, heading: Heading) -> Self {
        self.facing = heading;
        self
    }

    pub fn set_thruster(&mut self, heading: Heading, engaged: bool) {
        self.thrusters[heading.index()] = engaged;
    }

    pub fn is_thrusting(&self, heading: Heading) -> bool {
        self.thrusters[heading.index()]
    }

    /// Clears every thruster
    pub fn stop(&mut self) {
        self.thrusters = [false; 4];
    }

    /// Moves the craft and clears its thrusters
    pub fn place(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.stop();
    }

    /// Held headings in Right, Left, Up, Down order
    pub fn held_headings(&self) -> Vec<Heading> {
        Heading::ALL
            .into_iter()
            .filter(|h| self.is_thrusting(*h))
            .collect()
    }

    /// Unit direction of the held thrusters (zero when idle or cancelled out)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        for heading in self.held_headings() {
            dir += heading.vector();
        }
        dir.normalized()
    }

    pub fn update(&mut self, dt: f32, screen_width: u32, screen_height: u32) {
        let velocity = self.direction() * (self.speed * dt);

        self.x += velocity.x;
        self.y += velocity.y;

        let max_x = screen_width.saturating_sub(self.width) as f32;
        let max_y = screen_height.saturating_sub(self.height) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);

        // Only turn while moving
        if velocity.x > 0.0 {
            self.facing = Heading::Right;
        } else if velocity.x < 0.0 {
            self.facing = Heading::Left;
        } else if velocity.y < 0.0 {
            self.facing = Heading::Up;
        } else if velocity.y > 0.0 {
            self.facing = Heading::Down;
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.width as f32 / 2.0,
            self.y + self.height as f32 / 2.0,
        )
    }
}

impl Collidable for Craft {
    fn get_bounds(&self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width,
            self.height,
        )
    }
}

impl Drawable for Craft {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        let bounds = self.get_bounds();
        if assets.draw_rotated(canvas, &self.texture, bounds, self.facing.angle())? {
            return Ok(());
        }

        // Hull plus a nose block on the facing side
        canvas.set_draw_color(self.color);
        let inset = (self.width.min(self.height) / 4).max(1);
        canvas.fill_rect(Rect::new(
            bounds.x() + inset as i32,
            bounds.y() + inset as i32,
            bounds.width().saturating_sub(inset * 2).max(1),
            bounds.height().saturating_sub(inset * 2).max(1),
        ))?;

        canvas.set_draw_color(Color::RGB(255, 140, 0));
        let nose = match self.facing {
            Heading::Right => Rect::new(bounds.right() - inset as i32, bounds.y() + (bounds.height() / 2) as i32 - inset as i32 / 2, inset, inset),
            Heading::Left => Rect::new(bounds.x(), bounds.y() + (bounds.height() / 2) as i32 - inset as i32 / 2, inset, inset),
            Heading::Up => Rect::new(bounds.x() + (bounds.width() / 2) as i32 - inset as i32 / 2, bounds.y(), inset, inset),
            Heading::Down => Rect::new(bounds.x() + (bounds.width() / 2) as i32 - inset as i32 / 2, bounds.bottom() - inset as i32, inset, inset),
        };
        canvas.fill_rect(nose)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_idle_craft_keeps_position_and_facing() {
        let mut craft = Craft::new(100.0, 100.0, 50, 50, 150.0).facing(Heading::Down);
        craft.update(0.5, 800, 600);
        assert_eq!((craft.x, craft.y), (100.0, 100.0));
        assert_eq!(craft.facing, Heading::Down);
    }

    #[test]
    fn test_diagonal_speed_matches_straight_speed() {
        let mut straight = Craft::new(300.0, 300.0, 10, 10, 100.0);
        straight.set_thruster(Heading::Right, true);
        straight.update(1.0, 1000, 1000);

        let mut diagonal = Craft::new(300.0, 300.0, 10, 10, 100.0);
        diagonal.set_thruster(Heading::Right, true);
        diagonal.set_thruster(Heading::Up, true);
        diagonal.update(1.0, 1000, 1000);

        let straight_dist = Vec2::new(straight.x - 300.0, straight.y - 300.0).length();
        let diagonal_dist = Vec2::new(diagonal.x - 300.0, diagonal.y - 300.0).length();
        assert!((straight_dist - diagonal_dist).abs() < 1e-3);
        // Horizontal wins the facing
        assert_eq!(diagonal.facing, Heading::Right);
    }

    #[test]
    fn test_opposite_thrusters_cancel() {
        let mut craft = Craft::new(50.0, 50.0, 10, 10, 100.0);
        craft.set_thruster(Heading::Left, true);
        craft.set_thruster(Heading::Right, true);
        craft.update(1.0, 500, 500);
        assert_eq!(craft.x, 50.0);
    }

    #[test]
    fn test_vertical_facing() {
        let mut craft = Craft::new(50.0, 50.0, 10, 10, 100.0);
        craft.set_thruster(Heading::Up, true);
        craft.update(0.1, 500, 500);
        assert_eq!(craft.facing, Heading::Up);
        assert!(craft.y < 50.0);
    }

    #[test]
    fn test_held_headings_order_and_place() {
        let mut craft = Craft::new(0.0, 0.0, 10, 10, 100.0);
        craft.set_thruster(Heading::Down, true);
        craft.set_thruster(Heading::Right, true);
        assert_eq!(craft.held_headings(), vec![Heading::Right, Heading::Down]);

        craft.place(20.0, 30.0);
        assert!(craft.held_headings().is_empty());
        assert_eq!(craft.get_bounds(), Rect::new(20, 30, 10, 10));
    }

    proptest! {
        #[test]
        fn prop_craft_stays_on_screen(
            x in 0.0f32..750.0, y in 0.0f32..550.0,
            dt in 0.0f32..0.1,
            right: bool, left: bool, up: bool, down: bool,
            frames in 1usize..200,
        ) {
            let mut craft = Craft::new(x, y, 50, 50, 300.0);
            craft.set_thruster(Heading::Right, right);
            craft.set_thruster(Heading::Left, left);
            craft.set_thruster(Heading::Up, up);
            craft.set_thruster(Heading::Down, down);
            for _ in 0..frames {
                craft.update(dt, 800, 600);
            }
            prop_assert!(craft.x >= 0.0 && craft.x <= 750.0);
            prop_assert!(craft.y >= 0.0 && craft.y <= 550.0);
        }
    }
}
