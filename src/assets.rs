//! Optional textures
//!
//! Every entity can draw itself with primitives, so the texture table may be
//! empty. When an image named after an entity exists in the asset directory
//! it is used instead.

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extensions tried, in order, for each texture name
const EXTENSIONS: [&str; 2] = ["png", "bmp"];

/// Every texture name the game looks up
pub fn texture_names() -> Vec<String> {
    let mut names: Vec<String> = [
        "background",
        "rocket",
        "double_rocket",
        "projectile",
        "ufo_red",
        "ufo_green",
        "ufo_blue",
        "fuel_tank",
        "sun_yellow_dwarf",
        "sun_red_giant",
        "sun_blue_dwarf",
        "black_hole",
        "ship_falcon",
        "ship_viper",
        "ship_comet",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    names.extend((1..=6).map(|n| format!("explosion_{}", n)));
    names.extend((0..7).map(|n| format!("planet_{}", n)));
    names
}

/// Paths searched for `name` inside `dir`
pub fn candidate_paths(dir: &Path, name: &str) -> Vec<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", name, ext)))
        .collect()
}

pub struct Assets<'a> {
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> Assets<'a> {
    /// Loads whatever textures exist. Missing or broken files are skipped.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        dir: &Path,
        names: &[String],
    ) -> Self {
        let mut textures = HashMap::new();
        let mut missing = Vec::new();

        for name in names {
            let Some(path) = candidate_paths(dir, name).into_iter().find(|p| p.exists()) else {
                missing.push(name.as_str());
                continue;
            };

            match texture_creator.load_texture(&path) {
                Ok(texture) => {
                    textures.insert(name.clone(), texture);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", path.display(), e);
                }
            }
        }

        if !missing.is_empty() {
            log::warn!(
                "No image for {} texture(s) in {}, drawing them procedurally: {}",
                missing.len(),
                dir.display(),
                missing.join(", ")
            );
        }
        log::info!("Loaded {} of {} textures", textures.len(), names.len());

        Assets { textures }
    }

    /// Copies texture `name` into `rect`. Returns false when it isn't loaded.
    pub fn draw(&self, canvas: &mut Canvas<Window>, name: &str, rect: Rect) -> Result<bool, String> {
        match self.textures.get(name) {
            Some(texture) => {
                canvas.copy(texture, None, Some(rect))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Like [`Assets::draw`], rotated clockwise by `angle` degrees
    pub fn draw_rotated(
        &self,
        canvas: &mut Canvas<Window>,
        name: &str,
        rect: Rect,
        angle: f64,
    ) -> Result<bool, String> {
        self.draw_ex(canvas, name, rect, angle, false)
    }

    /// Like [`Assets::draw`], mirrored horizontally when `flip` is set
    pub fn draw_flipped(
        &self,
        canvas: &mut Canvas<Window>,
        name: &str,
        rect: Rect,
        flip: bool,
    ) -> Result<bool, String> {
        self.draw_ex(canvas, name, rect, 0.0, flip)
    }

    fn draw_ex(
        &self,
        canvas: &mut Canvas<Window>,
        name: &str,
        rect: Rect,
        angle: f64,
        flip_horizontal: bool,
    ) -> Result<bool, String> {
        match self.textures.get(name) {
            Some(texture) => {
                canvas.copy_ex(texture, None, Some(rect), angle, None, flip_horizontal, false)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for Assets<'_> {
    fn default() -> Self {
        Assets {
            textures: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_names_cover_animated_sets() {
        let names = texture_names();
        assert!(names.contains(&"explosion_1".to_string()));
        assert!(names.contains(&"explosion_6".to_string()));
        assert!(names.contains(&"planet_0".to_string()));
        assert!(names.contains(&"planet_6".to_string()));
        assert!(!names.contains(&"planet_7".to_string()));
    }

    #[test]
    fn test_candidate_paths() {
        let paths = candidate_paths(Path::new("resources/images"), "rocket");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("resources/images/rocket.png"),
                PathBuf::from("resources/images/rocket.bmp"),
            ]
        );
    }
}
