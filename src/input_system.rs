use crate::craft::Heading;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Which player a control belongs to.
///
/// Player one flies with WASD and fires with SPACE; player two uses the
/// arrow keys and ENTER. Single-player modes accept steering from both sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pilot {
    One,
    Two,
}

/// Actions the player can perform
///
/// Decouples raw SDL2 key events from what the app, controllers and sessions
/// do with them.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuConfirm,

    // === Flight ===
    /// Thruster pressed (`engaged`) or released
    Steer {
        pilot: Pilot,
        heading: Heading,
        engaged: bool,
    },
    Fire(Pilot),

    // === System ===
    /// ESC: pause, leave a menu, or quit from the main menu
    Back,
    /// Ends a timed end screen early
    Skip,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Any list menu: main menu, lobby, pause, ship selection
    Menu,
    /// A session is running
    Playing,
    /// GAME OVER / victory screen
    EndScreen,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. The app sets the current InputContext from its screen state
/// 2. Poll SDL2 events
/// 3. Filter events based on context (key repeat is always dropped)
/// 4. Translate events to GameActions
/// 5. Return actions to the main loop for dispatch
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drains pending SDL2 events into actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            let action = match event {
                Event::Quit { .. } => Some(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => self.map_key_down(key, repeat),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => self.map_key_up(key),
                _ => None,
            };

            if let Some(action) = action {
                actions.push(action);
            }
        }

        actions
    }

    /// Translates a key press for the current context
    pub fn map_key_down(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        if repeat {
            return None;
        }
        match self.context {
            InputContext::Menu => menu_key(key),
            InputContext::Playing => playing_key(key, true),
            InputContext::EndScreen => match key {
                Keycode::Return | Keycode::KpEnter | Keycode::Space => Some(GameAction::Skip),
                _ => None,
            },
        }
    }

    /// Translates a key release. Only thrusters care about releases.
    pub fn map_key_up(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::Playing => match steer_binding(key) {
                Some((pilot, heading)) => Some(GameAction::Steer {
                    pilot,
                    heading,
                    engaged: false,
                }),
                None => None,
            },
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn menu_key(key: Keycode) -> Option<GameAction> {
    match key {
        Keycode::Escape => Some(GameAction::Back),
        Keycode::Up | Keycode::W => Some(GameAction::MenuUp),
        Keycode::Down | Keycode::S => Some(GameAction::MenuDown),
        Keycode::Return | Keycode::KpEnter | Keycode::Space => Some(GameAction::MenuConfirm),
        _ => None,
    }
}

fn playing_key(key: Keycode, engaged: bool) -> Option<GameAction> {
    if let Some((pilot, heading)) = steer_binding(key) {
        return Some(GameAction::Steer {
            pilot,
            heading,
            engaged,
        });
    }
    match key {
        Keycode::Escape => Some(GameAction::Back),
        Keycode::Space => Some(GameAction::Fire(Pilot::One)),
        Keycode::Return | Keycode::KpEnter => Some(GameAction::Fire(Pilot::Two)),
        _ => None,
    }
}

fn steer_binding(key: Keycode) -> Option<(Pilot, Heading)> {
    match key {
        Keycode::D => Some((Pilot::One, Heading::Right)),
        Keycode::A => Some((Pilot::One, Heading::Left)),
        Keycode::W => Some((Pilot::One, Heading::Up)),
        Keycode::S => Some((Pilot::One, Heading::Down)),
        Keycode::Right => Some((Pilot::Two, Heading::Right)),
        Keycode::Left => Some((Pilot::Two, Heading::Left)),
        Keycode::Up => Some((Pilot::Two, Heading::Up)),
        Keycode::Down => Some((Pilot::Two, Heading::Down)),
        _ => None,
    }
}
