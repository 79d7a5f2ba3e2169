//! End-of-Game Screen Component
//!
//! Shown when a session ends in defeat or victory. The screen darkens the
//! last frame, shows the outcome, and counts down before handing control back
//! to the main menu. Enter skips the wait.

use crate::clock::Countdown;
use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for end screen appearance
#[derive(Debug, Clone)]
pub struct EndScreenStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub defeat_color: Color,
    pub victory_color: Color,
    pub subtitle_color: Color,
    pub timer_color: Color,
    pub instruction_color: Color,
}

impl Default for EndScreenStyle {
    fn default() -> Self {
        EndScreenStyle {
            overlay_alpha: 200,
            defeat_color: Color::RGB(255, 50, 50),
            victory_color: Color::RGB(90, 255, 120),
            subtitle_color: Color::RGB(220, 220, 240),
            timer_color: Color::RGB(255, 255, 100),
            instruction_color: Color::RGB(150, 150, 160),
        }
    }
}

/// Timed overlay for a finished session
///
/// # Example
///
/// ```rust
/// let mut end = EndScreen::new("GAME OVER!", "SCORE: 340", false, 6.0);
///
/// // Each frame
/// end.update(dt);
/// end.render(&mut canvas)?;
/// if end.is_finished() {
///     // back to the main menu
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EndScreen {
    title: String,
    subtitle: String,
    victory: bool,
    countdown: Countdown,
    style: EndScreenStyle,
}

impl EndScreen {
    pub fn new(title: &str, subtitle: &str, victory: bool, duration_secs: f32) -> Self {
        EndScreen {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            victory,
            countdown: Countdown::new(duration_secs),
            style: EndScreenStyle::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }

    pub fn update(&mut self, dt: f32) {
        self.countdown.tick(dt);
    }

    /// Completion signal: ends the wait immediately
    pub fn skip(&mut self) {
        self.countdown.complete();
    }

    pub fn is_finished(&self) -> bool {
        self.countdown.is_finished()
    }

    pub fn remaining_time(&self) -> f32 {
        self.countdown.remaining_secs()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;

        let title_color = if self.victory {
            self.style.victory_color
        } else {
            self.style.defeat_color
        };
        draw_centered_text(canvas, &self.title, center_x, center_y - 90, title_color, 6)?;

        if !self.subtitle.is_empty() {
            draw_centered_text(
                canvas,
                &self.subtitle,
                center_x,
                center_y,
                self.style.subtitle_color,
                3,
            )?;
        }

        let remaining = self.remaining_time();
        if remaining > 0.0 {
            let timer_text = format!("Main menu in {:.0}...", remaining.ceil());
            draw_centered_text(
                canvas,
                &timer_text,
                center_x,
                center_y + 60,
                self.style.timer_color,
                2,
            )?;
        }

        draw_centered_text(
            canvas,
            "ENTER to skip",
            center_x,
            center_y + 110,
            self.style.instruction_color,
            2,
        )?;

        Ok(())
    }
}
