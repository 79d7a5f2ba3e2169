//! Heads-up scoreboard
//!
//! A column of text lines in a screen corner, plus the ship pips used by
//! the duel. Sessions build the lines each frame from their stats.

use crate::text::{draw_simple_text, text_width, CHAR_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SCALE: u32 = 2;
const MARGIN: i32 = 20;
const LINE_GAP: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
}

#[derive(Debug, Clone)]
pub struct Scoreboard {
    corner: Corner,
    color: Color,
}

impl Scoreboard {
    pub fn new(corner: Corner) -> Self {
        Scoreboard {
            corner,
            color: Color::RGB(255, 255, 255),
        }
    }

    pub fn line_height() -> u32 {
        CHAR_HEIGHT * SCALE + LINE_GAP
    }

    /// Left x of a line so that it sits against this board's corner
    pub fn line_x(&self, line: &str, screen_width: u32) -> i32 {
        match self.corner {
            Corner::TopLeft => MARGIN,
            Corner::TopRight => screen_width as i32 - MARGIN - text_width(line, SCALE) as i32,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, lines: &[String]) -> Result<(), String> {
        let (screen_width, _) = canvas.logical_size();
        for (i, line) in lines.iter().enumerate() {
            let y = MARGIN + (i as u32 * Self::line_height()) as i32;
            draw_simple_text(canvas, line, self.line_x(line, screen_width), y, self.color, SCALE)?;
        }
        Ok(())
    }
}

/// One filled square per remaining ship, laid out from `x` toward the
/// screen center (rightward when `rightward` is set)
pub fn pip_rects(count: u32, x: i32, y: i32, rightward: bool) -> Vec<Rect> {
    const PIP: u32 = 18;
    const GAP: i32 = 8;
    (0..count as i32)
        .map(|i| {
            let offset = i * (PIP as i32 + GAP);
            let px = if rightward { x + offset } else { x - offset - PIP as i32 };
            Rect::new(px, y, PIP, PIP)
        })
        .collect()
}

pub fn draw_pips(
    canvas: &mut Canvas<Window>,
    count: u32,
    x: i32,
    y: i32,
    rightward: bool,
    color: Color,
) -> Result<(), String> {
    let rects = pip_rects(count, x, y, rightward);
    if rects.is_empty() {
        return Ok(());
    }
    canvas.set_draw_color(color);
    canvas.fill_rects(&rects)?;
    Ok(())
}
