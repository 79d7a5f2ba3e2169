//! Top-level screen flow: the main menu and the three mode controllers.
//!
//! `App` owns every session for the whole run, so a mode's record and RNG
//! survive trips back to the main menu.

use crate::assets::Assets;
use crate::config::GameConfig;
use crate::gui::Menu;
use crate::input_system::{GameAction, InputContext};
use crate::modes::alien_hunt::AlienHunt;
use crate::modes::multiplayer::Multiplayer;
use crate::modes::sun_escape::SunEscape;
use crate::modes::{ModeController, ModeSignal};
use crate::render::draw_background;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const GAME_TITLE: &str = "STAR DOOM";
const MODE_NAMES: [&str; 3] = ["ALIEN HUNT", "SUN ESCAPE", "MULTIPLAYER"];

/// Which screen currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    AlienHunt,
    SunEscape,
    Multiplayer,
}

impl Screen {
    fn from_menu_index(index: usize) -> Option<Screen> {
        match index {
            0 => Some(Screen::AlienHunt),
            1 => Some(Screen::SunEscape),
            2 => Some(Screen::Multiplayer),
            _ => None,
        }
    }
}

pub struct App {
    screen: Screen,
    main_menu: Menu,
    alien_hunt: ModeController<AlienHunt>,
    sun_escape: ModeController<SunEscape>,
    multiplayer: ModeController<Multiplayer>,
    running: bool,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        let (w, h) = (config.screen_width, config.screen_height);
        let secs = config.end_screen_secs;
        // Distinct but reproducible streams when a seed is configured
        let seed = |offset: u64| config.seed.map(|s| s.wrapping_add(offset));

        App {
            screen: Screen::MainMenu,
            main_menu: Menu::new(GAME_TITLE, &MODE_NAMES),
            alien_hunt: ModeController::new(AlienHunt::new(w, h, config.record_store(), seed(0)), secs),
            sun_escape: ModeController::new(SunEscape::new(w, h, seed(1)), secs),
            multiplayer: ModeController::new(Multiplayer::new(w, h, seed(2)), secs),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn input_context(&self) -> InputContext {
        match self.screen {
            Screen::MainMenu => InputContext::Menu,
            Screen::AlienHunt => self.alien_hunt.input_context(),
            Screen::SunEscape => self.sun_escape.input_context(),
            Screen::Multiplayer => self.multiplayer.input_context(),
        }
    }

    pub fn handle_action(&mut self, action: &GameAction) {
        let signal = match self.screen {
            Screen::MainMenu => {
                self.main_menu_action(action);
                return;
            }
            Screen::AlienHunt => self.alien_hunt.handle_action(action),
            Screen::SunEscape => self.sun_escape.handle_action(action),
            Screen::Multiplayer => self.multiplayer.handle_action(action),
        };
        self.apply(signal);
    }

    pub fn update(&mut self, dt: f32) {
        let signal = match self.screen {
            Screen::MainMenu => ModeSignal::Stay,
            Screen::AlienHunt => self.alien_hunt.update(dt),
            Screen::SunEscape => self.sun_escape.update(dt),
            Screen::Multiplayer => self.multiplayer.update(dt),
        };
        self.apply(signal);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        match self.screen {
            Screen::MainMenu => {
                draw_background(canvas, assets)?;
                self.main_menu.render(canvas)
            }
            Screen::AlienHunt => self.alien_hunt.render(canvas, assets),
            Screen::SunEscape => self.sun_escape.render(canvas, assets),
            Screen::Multiplayer => self.multiplayer.render(canvas, assets),
        }
    }

    fn main_menu_action(&mut self, action: &GameAction) {
        match action {
            GameAction::MenuUp => self.main_menu.select_previous(),
            GameAction::MenuDown => self.main_menu.select_next(),
            GameAction::MenuConfirm => {
                if let Some(screen) = Screen::from_menu_index(self.main_menu.selected_index()) {
                    self.open(screen);
                }
            }
            GameAction::Back | GameAction::Quit => self.running = false,
            _ => {}
        }
    }

    fn open(&mut self, screen: Screen) {
        log::info!("Opening {:?}", screen);
        match screen {
            Screen::AlienHunt => self.alien_hunt.enter(),
            Screen::SunEscape => self.sun_escape.enter(),
            Screen::Multiplayer => self.multiplayer.enter(),
            Screen::MainMenu => self.main_menu.reset_selection(),
        }
        self.screen = screen;
    }

    fn apply(&mut self, signal: ModeSignal) {
        match signal {
            ModeSignal::Stay => {}
            ModeSignal::ToMainMenu => self.screen = Screen::MainMenu,
            ModeSignal::Quit => self.running = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> App {
        let config = GameConfig {
            record_path: Some(
                std::env::temp_dir()
                    .join(format!("star_doom_app_{}_{}", name, std::process::id()))
                    .join("record.json"),
            ),
            seed: Some(42),
            ..GameConfig::default()
        };
        App::new(&config)
    }

    #[test]
    fn test_escape_on_main_menu_quits() {
        let mut app = app("quit");
        assert_eq!(app.input_context(), InputContext::Menu);
        app.handle_action(&GameAction::Back);
        assert!(!app.is_running());
    }

    #[test]
    fn test_open_mode_and_come_back() {
        let mut app = app("open");
        app.handle_action(&GameAction::MenuDown);
        app.handle_action(&GameAction::MenuConfirm);
        assert_eq!(app.screen, Screen::SunEscape);
        assert_eq!(app.input_context(), InputContext::Menu);

        // ESC in the lobby returns to the main menu
        app.handle_action(&GameAction::Back);
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.is_running());
    }

    #[test]
    fn test_multiplayer_asks_for_ships() {
        let mut app = app("duel");
        app.handle_action(&GameAction::MenuUp);
        app.handle_action(&GameAction::MenuConfirm);
        assert_eq!(app.screen, Screen::Multiplayer);

        // Lobby, then one ship prompt per player
        app.handle_action(&GameAction::MenuConfirm);
        app.handle_action(&GameAction::MenuConfirm);
        assert_eq!(app.input_context(), InputContext::Menu);
        app.handle_action(&GameAction::MenuConfirm);
        assert_eq!(app.input_context(), InputContext::Playing);
    }

    #[test]
    fn test_quit_while_playing() {
        let mut app = app("quit_playing");
        app.handle_action(&GameAction::MenuConfirm);
        app.handle_action(&GameAction::MenuConfirm);
        assert_eq!(app.input_context(), InputContext::Playing);
        app.update(0.016);
        app.handle_action(&GameAction::Quit);
        assert!(!app.is_running());
    }
}
