//! Game modes
//!
//! Each mode is a [`Session`]: gameplay rules only. The shared
//! [`ModeController`] wraps a session with the lobby, ship-selection, pause
//! and end-screen flow, so the three modes behave the same around the edges.
//!
//! ```text
//!            PLAY                 last choice
//!   Lobby ---------> Setup -----------------> Playing <----+
//!     ^  \             |  ESC (first prompt)   |  ESC      | RESUME
//!     |   \____________|_______________________|____> Paused
//!     |          (no prompts: straight to Playing)       |
//!     +------------------------------ EXIT / ESC --------+
//!
//!   Playing --outcome--> Ended --timeout / ENTER--> main menu
//! ```

pub mod alien_hunt;
pub mod multiplayer;
pub mod sun_escape;

use crate::assets::Assets;
use crate::craft::Heading;
use crate::gui::{EndScreen, Menu};
use crate::input_system::{GameAction, InputContext, Pilot};
use crate::render::draw_background;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// How a session ended: title and subtitle for the end screen
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Defeat(String, String),
    Victory(String, String),
}

impl Outcome {
    pub fn game_over(subtitle: impl Into<String>) -> Self {
        Outcome::Defeat("GAME OVER!".to_string(), subtitle.into())
    }

    pub fn title(&self) -> &str {
        match self {
            Outcome::Defeat(title, _) | Outcome::Victory(title, _) => title,
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory(..))
    }
}

/// A choice the player must make before play starts
#[derive(Debug, Clone, PartialEq)]
pub struct SetupPrompt {
    pub title: String,
    pub options: Vec<String>,
}

/// What the controller asks of the app after handling input or a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSignal {
    Stay,
    ToMainMenu,
    Quit,
}

#[derive(Debug, Clone)]
pub enum Phase {
    Lobby,
    Setup,
    Playing,
    Paused,
    Ended(EndScreen),
}

/// Gameplay rules for one mode
pub trait Session {
    fn title(&self) -> &str;

    /// Fresh game: stats, settings and entities back to level one
    fn start(&mut self);

    fn setup_prompt(&self) -> Option<SetupPrompt> {
        None
    }

    fn choose(&mut self, _index: usize) {}

    /// Undo the last choice. False when already at the first prompt.
    fn step_back(&mut self) -> bool {
        false
    }

    fn steer(&mut self, pilot: Pilot, heading: Heading, engaged: bool);

    fn fire(&mut self, pilot: Pilot);

    /// Drop every held thruster (pausing, leaving)
    fn release_controls(&mut self);

    fn update(&mut self, dt: f32) -> Option<Outcome>;

    fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String>;
}

/// Seeded runs replay the same planets, fleets and waves
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

const PLAY: usize = 0;
const RESUME: usize = 0;

pub struct ModeController<S: Session> {
    session: S,
    phase: Phase,
    lobby: Menu,
    pause: Menu,
    setup: Menu,
    end_screen_secs: f32,
}

impl<S: Session> ModeController<S> {
    pub fn new(session: S, end_screen_secs: f32) -> Self {
        let lobby = Menu::new(session.title(), &["PLAY", "BACK"]);
        ModeController {
            session,
            phase: Phase::Lobby,
            lobby,
            pause: Menu::new("PAUSED", &["RESUME", "EXIT"]),
            setup: Menu::new("", &[]),
            end_screen_secs,
        }
    }

    /// Called when the main menu hands control to this mode
    pub fn enter(&mut self) {
        self.phase = Phase::Lobby;
        self.lobby.reset_selection();
    }

    pub fn input_context(&self) -> InputContext {
        match self.phase {
            Phase::Playing => InputContext::Playing,
            Phase::Ended(_) => InputContext::EndScreen,
            Phase::Lobby | Phase::Setup | Phase::Paused => InputContext::Menu,
        }
    }

    pub fn handle_action(&mut self, action: &GameAction) -> ModeSignal {
        if *action == GameAction::Quit {
            return ModeSignal::Quit;
        }

        match self.phase {
            Phase::Lobby => match action {
                GameAction::MenuUp => self.lobby.select_previous(),
                GameAction::MenuDown => self.lobby.select_next(),
                GameAction::MenuConfirm if self.lobby.selected_index() == PLAY => self.start(),
                GameAction::MenuConfirm | GameAction::Back => return ModeSignal::ToMainMenu,
                _ => {}
            },
            Phase::Setup => match action {
                GameAction::MenuUp => self.setup.select_previous(),
                GameAction::MenuDown => self.setup.select_next(),
                GameAction::MenuConfirm => {
                    log::debug!(
                        "{}: picked {}",
                        self.session.title(),
                        self.setup.selected_text().unwrap_or("nothing")
                    );
                    self.session.choose(self.setup.selected_index());
                    self.advance_setup();
                }
                GameAction::Back => {
                    if self.session.step_back() {
                        self.advance_setup();
                    } else {
                        log::debug!("{}: setup cancelled", self.session.title());
                        self.phase = Phase::Lobby;
                    }
                }
                _ => {}
            },
            Phase::Playing => match action {
                GameAction::Back => {
                    self.session.release_controls();
                    self.pause.reset_selection();
                    self.phase = Phase::Paused;
                }
                GameAction::Steer {
                    pilot,
                    heading,
                    engaged,
                } => self.session.steer(*pilot, *heading, *engaged),
                GameAction::Fire(pilot) => self.session.fire(*pilot),
                _ => {}
            },
            Phase::Paused => match action {
                GameAction::MenuUp => self.pause.select_previous(),
                GameAction::MenuDown => self.pause.select_next(),
                GameAction::MenuConfirm if self.pause.selected_index() == RESUME => {
                    self.phase = Phase::Playing;
                }
                GameAction::MenuConfirm | GameAction::Back => {
                    log::info!("{}: left game", self.session.title());
                    self.enter();
                }
                _ => {}
            },
            Phase::Ended(ref mut end) => {
                if *action == GameAction::Skip {
                    end.skip();
                    return self.leave();
                }
            }
        }

        ModeSignal::Stay
    }

    pub fn update(&mut self, dt: f32) -> ModeSignal {
        match self.phase {
            Phase::Playing => {
                if let Some(outcome) = self.session.update(dt) {
                    log::info!("{}: {}", self.session.title(), outcome.title());
                    self.session.release_controls();
                    let victory = outcome.is_victory();
                    let (title, subtitle) = match outcome {
                        Outcome::Defeat(t, s) | Outcome::Victory(t, s) => (t, s),
                    };
                    self.phase = Phase::Ended(EndScreen::new(
                        &title,
                        &subtitle,
                        victory,
                        self.end_screen_secs,
                    ));
                }
                ModeSignal::Stay
            }
            Phase::Ended(ref mut end) => {
                end.update(dt);
                if end.is_finished() {
                    self.leave()
                } else {
                    ModeSignal::Stay
                }
            }
            _ => ModeSignal::Stay,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        match &self.phase {
            Phase::Lobby => {
                draw_background(canvas, assets)?;
                self.lobby.render(canvas)
            }
            Phase::Setup => {
                draw_background(canvas, assets)?;
                self.setup.render(canvas)
            }
            Phase::Playing => self.session.render(canvas, assets),
            Phase::Paused => {
                self.session.render(canvas, assets)?;
                self.pause.render(canvas)
            }
            Phase::Ended(end) => {
                self.session.render(canvas, assets)?;
                end.render(canvas)
            }
        }
    }

    fn start(&mut self) {
        log::info!("{}: starting", self.session.title());
        self.session.start();
        self.advance_setup();
    }

    /// Shows the session's next prompt, or starts play when none is left
    fn advance_setup(&mut self) {
        match self.session.setup_prompt() {
            Some(prompt) => {
                let options: Vec<&str> = prompt.options.iter().map(String::as_str).collect();
                self.setup.set_title(&prompt.title);
                self.setup.set_items(&options);
                self.phase = Phase::Setup;
            }
            None => self.phase = Phase::Playing,
        }
    }

    fn leave(&mut self) -> ModeSignal {
        self.enter();
        ModeSignal::ToMainMenu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls; optionally asks for two choices before play
    #[derive(Default)]
    struct FakeSession {
        prompts: usize,
        chosen: Vec<usize>,
        starts: u32,
        fired: u32,
        released: u32,
        outcome: Option<Outcome>,
    }

    impl Session for FakeSession {
        fn title(&self) -> &str {
            "FAKE"
        }

        fn start(&mut self) {
            self.starts += 1;
            self.chosen.clear();
        }

        fn setup_prompt(&self) -> Option<SetupPrompt> {
            (self.chosen.len() < self.prompts).then(|| SetupPrompt {
                title: format!("PICK {}", self.chosen.len() + 1),
                options: vec!["A".to_string(), "B".to_string()],
            })
        }

        fn choose(&mut self, index: usize) {
            self.chosen.push(index);
        }

        fn step_back(&mut self) -> bool {
            self.chosen.pop().is_some()
        }

        fn steer(&mut self, _pilot: Pilot, _heading: Heading, _engaged: bool) {}

        fn fire(&mut self, _pilot: Pilot) {
            self.fired += 1;
        }

        fn release_controls(&mut self) {
            self.released += 1;
        }

        fn update(&mut self, _dt: f32) -> Option<Outcome> {
            self.outcome.take()
        }

        fn render(&self, _canvas: &mut Canvas<Window>, _assets: &Assets) -> Result<(), String> {
            Ok(())
        }
    }

    fn playing() -> ModeController<FakeSession> {
        let mut controller = ModeController::new(FakeSession::default(), 6.0);
        controller.handle_action(&GameAction::MenuConfirm);
        controller
    }

    #[test]
    fn test_play_without_prompts_starts_playing() {
        let controller = playing();
        assert!(matches!(&controller.phase, Phase::Playing));
        assert_eq!(controller.session.starts, 1);
        assert_eq!(controller.input_context(), InputContext::Playing);
    }

    #[test]
    fn test_escape_chain() {
        let mut controller = playing();

        assert_eq!(controller.handle_action(&GameAction::Back), ModeSignal::Stay);
        assert!(matches!(&controller.phase, Phase::Paused));
        assert_eq!(controller.session.released, 1);

        assert_eq!(controller.handle_action(&GameAction::Back), ModeSignal::Stay);
        assert!(matches!(&controller.phase, Phase::Lobby));

        assert_eq!(controller.handle_action(&GameAction::Back), ModeSignal::ToMainMenu);
    }

    #[test]
    fn test_resume_and_exit() {
        let mut controller = playing();
        controller.handle_action(&GameAction::Back);
        controller.handle_action(&GameAction::MenuConfirm);
        assert!(matches!(&controller.phase, Phase::Playing));

        controller.handle_action(&GameAction::Back);
        controller.handle_action(&GameAction::MenuDown);
        controller.handle_action(&GameAction::MenuConfirm);
        assert!(matches!(&controller.phase, Phase::Lobby));
    }

    #[test]
    fn test_lobby_back_entry() {
        let mut controller = ModeController::new(FakeSession::default(), 6.0);
        controller.handle_action(&GameAction::MenuDown);
        assert_eq!(controller.handle_action(&GameAction::MenuConfirm), ModeSignal::ToMainMenu);
        assert_eq!(controller.session.starts, 0);
    }

    #[test]
    fn test_fire_only_while_playing() {
        let mut controller = ModeController::new(FakeSession::default(), 6.0);
        controller.handle_action(&GameAction::Fire(Pilot::One));
        assert_eq!(controller.session.fired, 0);

        controller.handle_action(&GameAction::MenuConfirm);
        controller.handle_action(&GameAction::Fire(Pilot::One));
        assert_eq!(controller.session.fired, 1);
    }

    #[test]
    fn test_setup_prompts_and_step_back() {
        let session = FakeSession {
            prompts: 2,
            ..Default::default()
        };
        let mut controller = ModeController::new(session, 6.0);

        controller.handle_action(&GameAction::MenuConfirm);
        assert!(matches!(&controller.phase, Phase::Setup));

        controller.handle_action(&GameAction::MenuDown);
        controller.handle_action(&GameAction::MenuConfirm);
        assert!(matches!(&controller.phase, Phase::Setup));
        assert_eq!(controller.session.chosen, vec![1]);

        // ESC on the second prompt goes back to the first
        controller.handle_action(&GameAction::Back);
        assert!(matches!(&controller.phase, Phase::Setup));
        assert!(controller.session.chosen.is_empty());

        // ESC on the first prompt returns to the lobby
        controller.handle_action(&GameAction::Back);
        assert!(matches!(&controller.phase, Phase::Lobby));

        controller.handle_action(&GameAction::MenuConfirm);
        controller.handle_action(&GameAction::MenuConfirm);
        controller.handle_action(&GameAction::MenuConfirm);
        assert!(matches!(&controller.phase, Phase::Playing));
        assert_eq!(controller.session.chosen, vec![0, 0]);
    }

    #[test]
    fn test_outcome_shows_end_screen_then_leaves() {
        let mut controller = playing();
        controller.session.outcome = Some(Outcome::game_over(""));

        assert_eq!(controller.update(0.016), ModeSignal::Stay);
        match &controller.phase {
            Phase::Ended(end) => assert_eq!(end.title(), "GAME OVER!"),
            other => panic!("expected end screen, got {:?}", other),
        }
        assert_eq!(controller.input_context(), InputContext::EndScreen);

        // ESC is ignored on the end screen
        assert_eq!(controller.handle_action(&GameAction::Back), ModeSignal::Stay);

        assert_eq!(controller.update(3.0), ModeSignal::Stay);
        assert_eq!(controller.update(3.1), ModeSignal::ToMainMenu);
        assert!(matches!(&controller.phase, Phase::Lobby));
    }

    #[test]
    fn test_skip_ends_immediately() {
        let mut controller = playing();
        controller.session.outcome = Some(Outcome::Victory("YOU WIN!".into(), String::new()));
        controller.update(0.016);

        assert_eq!(controller.handle_action(&GameAction::Skip), ModeSignal::ToMainMenu);
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut controller = playing();
        assert_eq!(controller.handle_action(&GameAction::Quit), ModeSignal::Quit);
    }
}
