//! Waves: sine and Bezier curves thrown off by the sun, plus the rocket's
//! own counter waves in the last level.
//!
//! A wave is an open polyline. Enemy waves scroll left; counter waves
//! scroll right. Sine-based waves are re-evaluated every frame with an
//! advancing phase so they ripple while they travel.

use crate::assets::Assets;
use crate::collision::{polyline_hits_rect, Collidable};
use crate::geometry::{bezier_points, control_point, sine_points, sine_y, Vec2};
use crate::group::Entity;
use crate::render::{draw_polyline, Drawable};
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BEZIER_POINTS: usize = 101;
const WAVE_FREQUENCY: f32 = 0.1;
const COUNTER_AMPLITUDE: f32 = 20.0;
const COUNTER_LENGTH: f32 = 100.0;
/// Up and down waves leave the sun this far off its center
const SPLIT_OFFSET: f32 = 40.0;
/// Margin kept from the top and bottom when picking curve points
const EDGE: i32 = 70;
const THICKNESS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveShape {
    Sine,
    Long,
    Up,
    Down,
    Counter,
}

impl WaveShape {
    fn is_bezier(self) -> bool {
        matches!(self, WaveShape::Long | WaveShape::Up | WaveShape::Down)
    }
}

#[derive(Debug, Clone)]
pub struct Wave {
    pub shape: WaveShape,
    pub color: Color,
    points: Vec<Vec2>,
    amplitude: f32,
    frequency: f32,
    phase: f32,
    baseline: f32,
}

/// Uniform pick from `low..high`, or `low` when the range is empty
fn pick(rng: &mut impl Rng, low: i32, high: i32) -> f32 {
    if high > low {
        rng.random_range(low..high) as f32
    } else {
        low as f32
    }
}

impl Wave {
    fn rippling(
        shape: WaveShape,
        color: Color,
        x_start: f32,
        x_end: f32,
        amplitude: f32,
        baseline: f32,
    ) -> Self {
        let phase = 0.0;
        Wave {
            shape,
            color,
            points: sine_points(x_start, x_end, amplitude, WAVE_FREQUENCY, phase, baseline),
            amplitude,
            frequency: WAVE_FREQUENCY,
            phase,
            baseline,
        }
    }

    /// Sine wave stretching from `w - 450` to the sun's center
    pub fn sine(
        rng: &mut impl Rng,
        color: Color,
        sun_center_x: f32,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        let h = screen_height as i32;
        let amplitude = pick(rng, 20, 140);
        let low = (h / 2 - 200).max(0);
        let high = (h / 2 + 200).min(h);
        let baseline = pick(rng, low, high);
        let x_start = screen_width as f32 - 450.0;
        Wave::rippling(WaveShape::Sine, color, x_start, sun_center_x, amplitude, baseline)
    }

    /// Bezier wave from the sun out toward the middle of the screen.
    ///
    /// `shape` must be `Long`, `Up` or `Down`; it picks the vertical band the
    /// curve wanders in.
    pub fn bezier(
        rng: &mut impl Rng,
        shape: WaveShape,
        color: Color,
        sun_center: Vec2,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        debug_assert!(shape.is_bezier());
        let w = screen_width as i32;
        let h = screen_height as i32;

        let (offset, low, high) = match shape {
            WaveShape::Up => (-SPLIT_OFFSET, EDGE, h / 2 - EDGE),
            WaveShape::Down => (SPLIT_OFFSET, h / 2 + EDGE, h),
            _ => (0.0, EDGE, h - EDGE),
        };

        let p0 = Vec2::new(sun_center.x, sun_center.y + offset);
        let p1 = Vec2::new(pick(rng, w - 250, w - 210), pick(rng, low, high));
        let p2 = Vec2::new(pick(rng, w - 350, w - 250), pick(rng, low, high));
        let p3 = Vec2::new(pick(rng, w - 450, w - 350), pick(rng, low, high));
        let c1 = control_point(p0, p1, pick(rng, -50, 50));
        let c2 = control_point(p2, p3, pick(rng, -50, 50));

        Wave {
            shape,
            color,
            points: bezier_points(p0, c1, c2, p3, BEZIER_POINTS),
            amplitude: 0.0,
            frequency: 0.0,
            phase: 0.0,
            baseline: 0.0,
        }
    }

    /// The rocket's short rightward ripple, fired from its center
    pub fn counter(color: Color, origin: Vec2) -> Self {
        Wave::rippling(
            WaveShape::Counter,
            color,
            origin.x,
            origin.x + COUNTER_LENGTH,
            COUNTER_AMPLITUDE,
            origin.y,
        )
    }

    pub fn is_counter(&self) -> bool {
        self.shape == WaveShape::Counter
    }

    /// Scrolls the wave by `speed * dt`: right for counter waves, left
    /// otherwise. Sine-based waves also advance their phase.
    pub fn update(&mut self, dt: f32, speed: f32) {
        let step = speed * dt;
        match self.shape {
            WaveShape::Long | WaveShape::Up | WaveShape::Down => {
                for p in &mut self.points {
                    p.x -= step;
                }
            }
            WaveShape::Sine | WaveShape::Counter => {
                let dx = if self.is_counter() { step } else { -step };
                self.phase += self.frequency;
                for p in &mut self.points {
                    p.x += dx;
                    p.y = sine_y(p.x, self.amplitude, self.frequency, self.phase, self.baseline);
                }
            }
        }
    }

    pub fn leftmost(&self) -> f32 {
        self.points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min)
    }

    pub fn rightmost(&self) -> f32 {
        self.points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max)
    }

    /// Gone once it has scrolled fully off its exit edge
    pub fn is_off_screen(&self, screen_width: u32) -> bool {
        if self.points.is_empty() {
            return true;
        }
        if self.is_counter() {
            self.leftmost() > screen_width as f32
        } else {
            self.rightmost() < 0.0
        }
    }

    /// True when any segment of the wave crosses `rect`
    pub fn hits(&self, rect: &Rect) -> bool {
        polyline_hits_rect(&self.points, rect)
    }
}

impl Collidable for Wave {
    /// Box around every point of the wave
    fn get_bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::new(0, 0, 0, 0);
        };
        let (mut min, mut max) = (*first, *first);
        for p in &self.points[1..] {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        let x = min.x.floor() as i32;
        let y = min.y.floor() as i32;
        let width = (max.x.ceil() as i32 - x).max(1) as u32;
        let height = (max.y.ceil() as i32 - y).max(1) as u32;
        Rect::new(x, y, width, height)
    }
}

impl Entity for Wave {}

impl Drawable for Wave {
    fn draw(&self, canvas: &mut Canvas<Window>, _assets: &Assets) -> Result<(), String> {
        draw_polyline(canvas, &self.points, THICKNESS, self.color)
    }
}
