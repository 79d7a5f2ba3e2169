//! Gauge bar component
//!
//! A stateless horizontal bar whose filled length is given in pixels. Sun
//! Escape uses it for the rocket's fuel and the black hole's life.
//!
//! # Example
//!
//! ```rust
//! let fuel_bar = Bar::with_style(BarStyle::fuel());
//!
//! // Under the rocket, one pixel per unit of fuel
//! fuel_bar.render(&mut canvas, rocket.x as i32, rocket_bounds.bottom() + 4, fuel, 50)?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for bar appearance
#[derive(Debug, Clone)]
pub struct BarStyle {
    /// Bar height in pixels
    pub height: u32,

    /// Color of the unfilled track (0 alpha hides it)
    pub background_color: Color,

    pub fill_color: Color,

    /// Fill color once the value drops below `low_threshold`
    pub low_color: Color,

    /// Fraction of the nominal width counted as low
    pub low_threshold: f32,

    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle {
            height: 6,
            background_color: Color::RGB(50, 50, 50),
            fill_color: Color::RGB(0, 200, 0),
            low_color: Color::RGB(200, 0, 0),
            low_threshold: 0.3,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
        }
    }
}

impl BarStyle {
    pub fn fuel() -> Self {
        BarStyle {
            fill_color: Color::RGB(255, 200, 0),
            low_color: Color::RGB(255, 80, 0),
            ..Default::default()
        }
    }

    /// Black hole life: always red, no track
    pub fn life() -> Self {
        BarStyle {
            height: 8,
            background_color: Color::RGBA(0, 0, 0, 0),
            fill_color: Color::RGB(220, 0, 0),
            low_color: Color::RGB(220, 0, 0),
            border_thickness: 0,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bar {
    style: BarStyle,
}

impl Bar {
    pub fn with_style(style: BarStyle) -> Self {
        Bar { style }
    }

    /// Fill color for `value` against the nominal width `full`
    pub fn fill_color_for(&self, value: i32, full: u32) -> Color {
        if full > 0 && (value as f32) < full as f32 * self.style.low_threshold {
            self.style.low_color
        } else {
            self.style.fill_color
        }
    }

    /// Draws a bar `value` pixels long at (`x`, `y`). The track spans `full`
    /// pixels, or `value` when that is longer.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        value: i32,
        full: u32,
    ) -> Result<(), String> {
        let filled = value.max(0) as u32;
        let track = full.max(filled);

        if track > 0 && self.style.background_color.a > 0 {
            canvas.set_draw_color(self.style.background_color);
            canvas.fill_rect(Rect::new(x, y, track, self.style.height))?;
        }

        if filled > 0 {
            canvas.set_draw_color(self.fill_color_for(value, full));
            canvas.fill_rect(Rect::new(x, y, filled, self.style.height))?;
        }

        if self.style.border_thickness > 0 && track > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(Rect::new(x, y, track, self.style.height))?;
        }

        Ok(())
    }
}
