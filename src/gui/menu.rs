//! Keyboard List Menu
//!
//! One component backs every menu in the game: the main mode selector, each
//! mode's lobby and pause menus, and the ship pickers. Selection wraps in
//! both directions.

use crate::text::{draw_centered_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Minimum box width in pixels (grows to fit long entries)
    pub min_width: u32,

    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness (draws double border if > 1)
    pub border_thickness: u32,

    /// Overlay darkness (0 = no overlay)
    pub overlay_alpha: u8,

    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            min_width: 500,
            background_color: Color::RGB(20, 20, 40),
            border_color: Color::RGB(100, 100, 140),
            border_thickness: 2,
            overlay_alpha: 180,
            title_color: Color::RGB(255, 210, 60),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(70, 60, 140),
        }
    }
}

const TITLE_SCALE: u32 = 4;
const ITEM_SCALE: u32 = 3;
const ITEM_HEIGHT: u32 = 60;
const HEADER_HEIGHT: u32 = 110;

/// A stateful list menu.
///
/// # Example
///
/// ```rust
/// let mut menu = Menu::new("STAR DOOM", &["ALIEN HUNT", "SUN ESCAPE", "MULTIPLAYER"]);
/// menu.select_next();
/// assert_eq!(menu.selected_text(), Some("SUN ESCAPE"));
/// menu.render(&mut canvas)?;
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<String>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: &str, items: &[&str]) -> Self {
        Menu {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Replaces the entries and resets the selection to the top
    pub fn set_items(&mut self, items: &[&str]) {
        self.items = items.iter().map(|s| s.to_string()).collect();
        self.selected_index = 0;
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(String::as_str)
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    fn box_size(&self) -> (u32, u32) {
        let widest = self
            .items
            .iter()
            .map(|item| text_width(item, ITEM_SCALE))
            .chain(std::iter::once(text_width(&self.title, TITLE_SCALE)))
            .max()
            .unwrap_or(0);
        let width = self.style.min_width.max(widest + 80);
        let height = HEADER_HEIGHT + self.items.len() as u32 * ITEM_HEIGHT + 20;
        (width, height)
    }

    /// Render the menu at screen center
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if self.style.overlay_alpha > 0 {
            canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
            canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
            canvas.fill_rect(None)?;
            canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }

        // Logical size, not the physical window
        let (screen_width, screen_height) = canvas.logical_size();
        let (width, height) = self.box_size();
        let menu_x = (screen_width.saturating_sub(width) / 2) as i32;
        let menu_y = (screen_height.saturating_sub(height) / 2) as i32;
        let center_x = menu_x + width as i32 / 2;

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(menu_x, menu_y, width, height))?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(Rect::new(menu_x, menu_y, width, height))?;
        if self.style.border_thickness > 1 {
            canvas.draw_rect(Rect::new(menu_x + 2, menu_y + 2, width - 4, height - 4))?;
        }

        draw_centered_text(
            canvas,
            &self.title,
            center_x,
            menu_y + 30,
            self.style.title_color,
            TITLE_SCALE,
        )?;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = menu_y + (HEADER_HEIGHT + i as u32 * ITEM_HEIGHT) as i32;
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(menu_x + 15, item_y - 9, width - 30, 40))?;
            }

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            draw_centered_text(canvas, item, center_x, item_y, text_color, ITEM_SCALE)?;
        }

        Ok(())
    }
}
