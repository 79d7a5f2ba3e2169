//! Planets
//!
//! Static square obstacles shared by Alien Hunt and Multiplayer. Crafts stop
//! when they bump one and projectiles are absorbed by them.

use crate::assets::Assets;
use crate::collision::{aabb_touching, Collidable};
use crate::geometry::Vec2;
use crate::group::{Entity, EntityGroup};
use crate::render::{fill_circle, Drawable};
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const PLANET_MIN_SIZE: u32 = 50;
pub const PLANET_MAX_SIZE: u32 = 200;
pub const PLANET_KINDS: u8 = 7;
/// Planets and UFOs stay below the scoreboard strip
pub const FIELD_MIN_Y: i32 = 250;
const MAX_ATTEMPTS: u32 = 1000;

const PLANET_COLORS: [Color; PLANET_KINDS as usize] = [
    Color::RGB(180, 120, 80),
    Color::RGB(90, 140, 210),
    Color::RGB(200, 180, 120),
    Color::RGB(120, 190, 110),
    Color::RGB(210, 90, 70),
    Color::RGB(160, 110, 200),
    Color::RGB(150, 150, 150),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    rect: Rect,
    kind: u8,
}

impl Planet {
    pub fn new(rect: Rect, kind: u8) -> Self {
        Planet {
            rect,
            kind: kind % PLANET_KINDS,
        }
    }
}

impl Collidable for Planet {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Entity for Planet {}

impl Drawable for Planet {
    fn draw(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        let name = format!("planet_{}", self.kind);
        if assets.draw(canvas, &name, self.rect)? {
            return Ok(());
        }
        let c = self.rect.center();
        fill_circle(
            canvas,
            Vec2::new(c.x() as f32, c.y() as f32),
            self.rect.width() as f32 / 2.0,
            PLANET_COLORS[self.kind as usize],
        )
    }
}

/// The planets of one level
#[derive(Debug, Clone, Default)]
pub struct PlanetField {
    planets: EntityGroup<Planet>,
}

impl PlanetField {
    pub fn new(planets: EntityGroup<Planet>) -> Self {
        PlanetField { planets }
    }

    /// Places up to `limit` planets that never touch each other.
    ///
    /// Each planet gets `MAX_ATTEMPTS` tries; if a crowded screen runs out,
    /// the field is returned with fewer planets.
    pub fn generate(
        rng: &mut impl Rng,
        limit: usize,
        screen_width: u32,
        screen_height: u32,
        min_y: i32,
    ) -> Self {
        let mut field = PlanetField::default();

        for placed in 0..limit {
            let mut spot = None;
            for _ in 0..MAX_ATTEMPTS {
                let size = rng.random_range(PLANET_MIN_SIZE..PLANET_MAX_SIZE);
                let candidate = random_rect(rng, size, size, screen_width, screen_height, min_y);
                if field.is_free(&candidate) {
                    spot = Some(candidate);
                    break;
                }
            }

            match spot {
                Some(rect) => {
                    let kind = rng.random_range(0..PLANET_KINDS);
                    field.planets.push(Planet::new(rect, kind));
                }
                None => {
                    log::warn!(
                        "Gave up placing planets after {} of {} ({} attempts)",
                        placed,
                        limit,
                        MAX_ATTEMPTS
                    );
                    break;
                }
            }
        }

        log::debug!("Generated {} planets", field.len());
        field
    }

    /// True when `rect` doesn't touch any planet, edges included
    pub fn is_free(&self, rect: &Rect) -> bool {
        !self
            .planets
            .iter()
            .any(|p| aabb_touching(&p.get_bounds(), rect))
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn as_slice(&self) -> &[Planet] {
        self.planets.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Planet> {
        self.planets.iter()
    }
}

/// Uniform random `w`x`h` rect inside the screen with `y >= min_y`.
///
/// When the screen is too short for `min_y`, the whole height is used.
pub fn random_rect(
    rng: &mut impl Rng,
    w: u32,
    h: u32,
    screen_width: u32,
    screen_height: u32,
    min_y: i32,
) -> Rect {
    let max_x = (screen_width.saturating_sub(w) as i32).max(1);
    let max_y = (screen_height.saturating_sub(h) as i32).max(1);
    let low_y = if min_y < max_y { min_y.max(0) } else { 0 };

    Rect::new(
        rng.random_range(0..max_x),
        rng.random_range(low_y..max_y),
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_planets_never_touch() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = PlanetField::generate(&mut rng, 5, 1280, 720, FIELD_MIN_Y);

        assert_eq!(field.len(), 5);
        let planets = field.as_slice();
        for (i, a) in planets.iter().enumerate() {
            for b in &planets[i + 1..] {
                assert!(!aabb_touching(&a.get_bounds(), &b.get_bounds()));
            }
        }
    }

    #[test]
    fn test_planets_inside_field() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = PlanetField::generate(&mut rng, 5, 1280, 720, FIELD_MIN_Y);

        for planet in field.iter() {
            let r = planet.get_bounds();
            assert!(r.x() >= 0 && r.right() <= 1280);
            assert!(r.y() >= FIELD_MIN_Y && r.bottom() <= 720);
            assert!(r.width() >= PLANET_MIN_SIZE && r.width() < PLANET_MAX_SIZE);
            assert_eq!(r.width(), r.height());
            assert!(planet.kind < PLANET_KINDS);
        }
    }

    #[test]
    fn test_crowded_screen_places_fewer() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = PlanetField::generate(&mut rng, 50, 640, 480, FIELD_MIN_Y);
        assert!(field.len() < 50);
    }

    #[test]
    fn test_short_screen_falls_back_to_top() {
        let mut rng = StdRng::seed_from_u64(3);
        let rect = random_rect(&mut rng, 100, 100, 640, 300, FIELD_MIN_Y);
        assert!(rect.y() >= 0 && rect.bottom() <= 300);
    }

    #[test]
    fn test_is_free() {
        let field = PlanetField::new(
            [Planet::new(Rect::new(100, 100, 50, 50), 0)].into_iter().collect(),
        );
        assert!(!field.is_free(&Rect::new(150, 100, 10, 10))); // shared edge
        assert!(field.is_free(&Rect::new(151, 100, 10, 10)));
    }
}
