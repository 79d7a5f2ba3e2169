//! Multiplayer duel
//!
//! Two ships on one keyboard. Each hit freezes the field until the blast
//! has played out, then the next round starts faster on fresh planets. The
//! first player to lose every ship hands the win to the other.

pub mod settings;
pub mod ship;
pub mod stats;

use crate::assets::Assets;
use crate::collision::{aabb_touching, collides_with_any, Collidable};
use crate::craft::{Craft, Heading};
use crate::explosion::Explosion;
use crate::group::EntityGroup;
use crate::input_system::Pilot;
use crate::modes::{session_rng, Outcome, SetupPrompt, Session};
use crate::planet::{PlanetField, FIELD_MIN_Y};
use crate::projectile::{volley, Direction8, Projectile};
use crate::render::{draw_all, draw_background, Drawable};
use crate::ui::draw_pips;
use rand::rngs::StdRng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use settings::MultiplayerSettings;
use ship::ShipStyle;
use stats::MultiplayerStats;

const SHIP_SIZE: u32 = 50;
const PLAYER_1_SHOT: Color = Color::RGB(255, 90, 90);
const PLAYER_2_SHOT: Color = Color::RGB(90, 160, 255);
const PIP_MARGIN: i32 = 20;
const WIN_SUBTITLE: &str = "YOU OVERWHELMED YOUR ENEMY AND SAVED THE STARS FROM THEIR DOOM!";

fn opponent(pilot: Pilot) -> Pilot {
    match pilot {
        Pilot::One => Pilot::Two,
        Pilot::Two => Pilot::One,
    }
}

fn player_number(pilot: Pilot) -> u32 {
    match pilot {
        Pilot::One => 1,
        Pilot::Two => 2,
    }
}

pub struct Multiplayer {
    settings: MultiplayerSettings,
    stats: MultiplayerStats,
    rng: StdRng,
    screen_width: u32,
    screen_height: u32,
    /// Ship styles picked so far, player one first
    choices: Vec<ShipStyle>,
    ship_1: Craft,
    ship_2: Craft,
    planets: PlanetField,
    player_1_projectiles: EntityGroup<Projectile>,
    player_2_projectiles: EntityGroup<Projectile>,
    explosions: EntityGroup<Explosion>,
    /// Set from a hit until its explosions have finished
    hit_sequence: bool,
    round: u32,
}

impl Multiplayer {
    pub fn new(screen_width: u32, screen_height: u32, seed: Option<u64>) -> Self {
        let settings = MultiplayerSettings::default();
        let stats = MultiplayerStats::new(settings.ship_limit);
        let speed = settings.dynamic.ship_speed;

        Multiplayer {
            settings,
            stats,
            rng: session_rng(seed),
            screen_width,
            screen_height,
            choices: Vec::new(),
            ship_1: Craft::new(0.0, 0.0, SHIP_SIZE, SHIP_SIZE, speed),
            ship_2: Craft::new(0.0, 0.0, SHIP_SIZE, SHIP_SIZE, speed),
            planets: PlanetField::default(),
            player_1_projectiles: EntityGroup::new(),
            player_2_projectiles: EntityGroup::new(),
            explosions: EntityGroup::new(),
            hit_sequence: false,
            round: 1,
        }
    }

    fn ship(&self, pilot: Pilot) -> &Craft {
        match pilot {
            Pilot::One => &self.ship_1,
            Pilot::Two => &self.ship_2,
        }
    }

    /// Player one on the left edge, player two on the right, both nose up
    fn place_ships(&mut self) {
        let x_2 = self.screen_width.saturating_sub(SHIP_SIZE) as f32;
        let y = (self.screen_height / 2) as f32;
        let speed = self.settings.dynamic.ship_speed;
        for (ship, x) in [(&mut self.ship_1, 0.0), (&mut self.ship_2, x_2)] {
            ship.place(x, y);
            ship.facing = Heading::Up;
            ship.speed = speed;
        }
    }

    /// New planet field, keeping clear of both spawn points
    fn regenerate_planets(&mut self) {
        let (w, h) = (self.screen_width, self.screen_height);
        let field = PlanetField::generate(&mut self.rng, self.settings.planet_limit, w, h, FIELD_MIN_Y);
        let spawns = [self.ship_1.get_bounds(), self.ship_2.get_bounds()];
        self.planets = PlanetField::new(
            field
                .iter()
                .filter(|p| !spawns.iter().any(|s| aabb_touching(&p.get_bounds(), s)))
                .cloned()
                .collect(),
        );
    }

    fn begin_round(&mut self) {
        self.player_1_projectiles.clear();
        self.player_2_projectiles.clear();
        self.place_ships();
        self.regenerate_planets();
    }

    fn next_round(&mut self) {
        self.hit_sequence = false;
        self.round += 1;
        self.settings.increase_difficulty();
        self.begin_round();
        log::info!(
            "Duel round {}: {} vs {} ships",
            self.round,
            self.stats.player_1_ships_left,
            self.stats.player_2_ships_left
        );
    }

    fn victory(winner: Pilot) -> Outcome {
        Outcome::Victory(
            format!("PLAYER {} WINS!", player_number(winner)),
            WIN_SUBTITLE.to_string(),
        )
    }

    fn move_projectiles(&mut self, dt: f32) {
        let (w, h) = (self.screen_width, self.screen_height);
        let speed = self.settings.dynamic.projectile_speed;
        for shots in [&mut self.player_1_projectiles, &mut self.player_2_projectiles] {
            for shot in shots.iter_mut() {
                shot.update(dt, speed);
            }
            shots.retain(|p| !p.is_off_screen(w, h));
            shots.remove_hitting(self.planets.as_slice());
        }
    }

    /// Removes every enemy projectile touching `pilot`'s ship. True on a hit.
    fn take_hit(&mut self, pilot: Pilot) -> bool {
        let bounds = self.ship(pilot).get_bounds();
        let enemy_shots = match pilot {
            Pilot::One => &mut self.player_2_projectiles,
            Pilot::Two => &mut self.player_1_projectiles,
        };
        if enemy_shots.take_colliding(&bounds).is_empty() {
            return false;
        }
        self.explosions.push(Explosion::at(bounds));
        let left = self.stats.lose_ship(pilot);
        log::debug!("Player {} hit, {} ships left", player_number(pilot), left);
        true
    }
}

impl Session for Multiplayer {
    fn title(&self) -> &str {
        "MULTIPLAYER"
    }

    fn start(&mut self) {
        self.settings.reset_dynamic();
        self.stats = MultiplayerStats::new(self.settings.ship_limit);
        self.choices.clear();
        self.explosions.clear();
        self.player_1_projectiles.clear();
        self.player_2_projectiles.clear();
        self.hit_sequence = false;
        self.round = 1;
    }

    fn setup_prompt(&self) -> Option<SetupPrompt> {
        if self.choices.len() >= 2 {
            return None;
        }
        Some(SetupPrompt {
            title: format!("PLAYER {} SHIP", self.choices.len() + 1),
            options: ShipStyle::ALL.iter().map(|s| s.label().to_string()).collect(),
        })
    }

    fn choose(&mut self, index: usize) {
        let Some(style) = ShipStyle::from_index(index) else {
            log::warn!("No ship style at index {}", index);
            return;
        };
        let ship = match self.choices.len() {
            0 => &mut self.ship_1,
            1 => &mut self.ship_2,
            _ => return,
        };
        ship.texture = style.texture().to_string();
        ship.color = style.color();
        self.choices.push(style);

        if self.choices.len() == 2 {
            self.begin_round();
            log::info!(
                "Duel: {} vs {}, {} planets",
                self.choices[0].label(),
                self.choices[1].label(),
                self.planets.len()
            );
        }
    }

    fn step_back(&mut self) -> bool {
        self.choices.pop().is_some()
    }

    fn steer(&mut self, pilot: Pilot, heading: Heading, engaged: bool) {
        let ship = match pilot {
            Pilot::One => &mut self.ship_1,
            Pilot::Two => &mut self.ship_2,
        };
        ship.set_thruster(heading, engaged);
    }

    /// One volley per held heading, while the player's allowance lasts
    fn fire(&mut self, pilot: Pilot) {
        if self.hit_sequence {
            return;
        }

        let enemy_left = self.stats.ships_left(opponent(pilot));
        let double = enemy_left <= self.settings.double_fire_below;
        let flank = enemy_left <= self.settings.flank_fire_below;
        let allowed = self.settings.dynamic.projectile_allowed;

        let (ship, shots, color) = match pilot {
            Pilot::One => (&self.ship_1, &mut self.player_1_projectiles, PLAYER_1_SHOT),
            Pilot::Two => (&self.ship_2, &mut self.player_2_projectiles, PLAYER_2_SHOT),
        };
        let origin = ship.get_bounds();

        for heading in ship.held_headings() {
            if shots.len() >= allowed {
                break;
            }
            let heading = Direction8::from(heading);
            let mut headings = vec![(heading, double)];
            if flank {
                if let Some(diagonals) = heading.flank() {
                    headings.extend(diagonals.map(|d| (d, false)));
                }
            }
            for (direction, doubled) in headings {
                shots.extend(
                    volley(origin, direction, doubled)
                        .into_iter()
                        .map(|p| p.tinted(color)),
                );
            }
        }
    }

    fn release_controls(&mut self) {
        self.ship_1.stop();
        self.ship_2.stop();
    }

    fn update(&mut self, dt: f32) -> Option<Outcome> {
        for explosion in self.explosions.iter_mut() {
            explosion.update();
        }
        self.explosions.prune();

        if self.hit_sequence {
            if self.explosions.is_empty() {
                self.next_round();
            }
            return None;
        }

        let (w, h) = (self.screen_width, self.screen_height);
        for ship in [&mut self.ship_1, &mut self.ship_2] {
            ship.update(dt, w, h);
            if collides_with_any(&ship.get_bounds(), self.planets.as_slice()) {
                ship.stop();
            }
        }

        self.move_projectiles(dt);

        let hit_1 = self.take_hit(Pilot::One);
        let hit_2 = self.take_hit(Pilot::Two);
        if !(hit_1 || hit_2) {
            return None;
        }

        match (self.stats.player_1_ships_left, self.stats.player_2_ships_left) {
            (0, 0) => Some(Outcome::game_over("BOTH FLEETS WERE DESTROYED")),
            (_, 0) => Some(Self::victory(Pilot::One)),
            (0, _) => Some(Self::victory(Pilot::Two)),
            _ => {
                self.hit_sequence = true;
                None
            }
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        draw_background(canvas, assets)?;
        draw_all(canvas, assets, self.planets.iter())?;
        draw_all(canvas, assets, &self.player_1_projectiles)?;
        draw_all(canvas, assets, &self.player_2_projectiles)?;
        self.ship_1.draw(canvas, assets)?;
        self.ship_2.draw(canvas, assets)?;
        draw_all(canvas, assets, &self.explosions)?;

        draw_pips(
            canvas,
            self.stats.player_1_ships_left,
            PIP_MARGIN,
            PIP_MARGIN,
            true,
            self.ship_1.color,
        )?;
        draw_pips(
            canvas,
            self.stats.player_2_ships_left,
            self.screen_width as i32 - PIP_MARGIN,
            PIP_MARGIN,
            false,
            self.ship_2.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explosion::{EXPLOSION_FRAMES, FRAME_HOLD};

    const W: u32 = 1280;
    const H: u32 = 720;

    fn dueling() -> Multiplayer {
        let mut duel = Multiplayer::new(W, H, Some(11));
        duel.start();
        duel.choose(0);
        duel.choose(2);
        duel
    }

    /// Drops an enemy shot on `pilot`'s ship
    fn shoot_at(duel: &mut Multiplayer, pilot: Pilot) {
        let center = duel.ship(pilot).center();
        let shot = Projectile::new(center, Direction8::Up);
        match pilot {
            Pilot::One => duel.player_2_projectiles.push(shot),
            Pilot::Two => duel.player_1_projectiles.push(shot),
        }
    }

    #[test]
    fn test_two_prompts_then_play() {
        let mut duel = Multiplayer::new(W, H, Some(1));
        duel.start();
        let prompt = duel.setup_prompt().expect("first prompt");
        assert_eq!(prompt.title, "PLAYER 1 SHIP");
        assert_eq!(prompt.options, vec!["FALCON", "VIPER", "COMET"]);

        duel.choose(1);
        assert_eq!(duel.setup_prompt().map(|p| p.title), Some("PLAYER 2 SHIP".to_string()));

        // ESC on the second prompt undoes the first choice
        assert!(duel.step_back());
        assert!(!duel.step_back());

        duel.choose(1);
        duel.choose(0);
        assert_eq!(duel.setup_prompt(), None);
        assert_eq!(duel.ship_1.texture, "ship_viper");
        assert_eq!(duel.ship_2.texture, "ship_falcon");
    }

    #[test]
    fn test_ships_spawn_on_opposite_edges() {
        let duel = dueling();
        let one = duel.ship_1.get_bounds();
        let two = duel.ship_2.get_bounds();
        assert_eq!((one.x(), one.y()), (0, 360));
        assert_eq!((two.right(), two.y()), (1280, 360));
        assert_eq!(duel.ship_1.facing, Heading::Up);
        assert_eq!(duel.ship_2.facing, Heading::Up);
        assert!(duel.planets.is_free(&one));
        assert!(duel.planets.is_free(&two));
    }

    #[test]
    fn test_fire_one_volley_per_held_heading() {
        let mut duel = dueling();
        duel.steer(Pilot::One, Heading::Up, true);
        duel.steer(Pilot::One, Heading::Right, true);
        duel.fire(Pilot::One);

        let headings: Vec<Direction8> = duel.player_1_projectiles.iter().map(|p| p.heading).collect();
        assert_eq!(headings, vec![Direction8::Right, Direction8::Up]);
        assert!(duel.player_2_projectiles.is_empty());
    }

    #[test]
    fn test_fire_allowance_per_player() {
        let mut duel = dueling();
        duel.steer(Pilot::Two, Heading::Left, true);
        for _ in 0..10 {
            duel.fire(Pilot::Two);
        }
        assert_eq!(duel.player_2_projectiles.len(), 6);

        duel.steer(Pilot::One, Heading::Right, true);
        duel.fire(Pilot::One);
        assert_eq!(duel.player_1_projectiles.len(), 1);
    }

    #[test]
    fn test_fire_boosts_as_opponent_weakens() {
        let mut duel = dueling();
        duel.stats.player_2_ships_left = 3;
        duel.steer(Pilot::One, Heading::Right, true);
        duel.fire(Pilot::One);
        // Single shot plus two flank diagonals
        assert_eq!(duel.player_1_projectiles.len(), 3);

        duel.player_1_projectiles.clear();
        duel.stats.player_2_ships_left = 1;
        duel.fire(Pilot::One);
        // Doubled main volley plus flanks
        assert_eq!(duel.player_1_projectiles.len(), 4);
    }

    #[test]
    fn test_hit_freezes_then_next_round() {
        let mut duel = dueling();
        duel.steer(Pilot::Two, Heading::Left, true);
        duel.fire(Pilot::Two);
        shoot_at(&mut duel, Pilot::One);

        assert_eq!(duel.update(0.0), None);
        assert_eq!(duel.stats.player_1_ships_left, 4);
        assert!(duel.hit_sequence);
        assert_eq!(duel.explosions.len(), 1);

        // Nothing moves or fires while the blast plays
        let frozen = duel.ship_2.get_bounds();
        duel.fire(Pilot::Two);
        let blast = EXPLOSION_FRAMES as u32 * FRAME_HOLD;
        for _ in 0..blast - 1 {
            assert_eq!(duel.update(0.1), None);
        }
        assert!(duel.hit_sequence);
        assert_eq!(duel.ship_2.get_bounds(), frozen);

        assert_eq!(duel.update(0.1), None);
        assert!(!duel.hit_sequence);
        assert_eq!(duel.round, 2);
        assert!(duel.player_1_projectiles.is_empty());
        assert!(duel.player_2_projectiles.is_empty());
        assert_eq!(duel.ship_2.get_bounds().x(), 1230);
        assert!((duel.ship_1.speed - 216.0).abs() < 1e-3);
        assert_eq!(duel.settings.dynamic.projectile_allowed, 8);
    }

    #[test]
    fn test_last_ship_gives_victory() {
        let mut duel = dueling();
        duel.stats.player_2_ships_left = 1;
        shoot_at(&mut duel, Pilot::Two);

        let outcome = duel.update(0.0).expect("player one should win");
        assert!(outcome.is_victory());
        assert_eq!(outcome.title(), "PLAYER 1 WINS!");
    }

    #[test]
    fn test_own_shots_are_harmless() {
        let mut duel = dueling();
        let center = duel.ship_1.center();
        duel.player_1_projectiles.push(Projectile::new(center, Direction8::Up));
        assert_eq!(duel.update(0.0), None);
        assert_eq!(duel.stats.player_1_ships_left, 5);
        assert!(!duel.hit_sequence);
    }

    #[test]
    fn test_start_resets_the_duel() {
        let mut duel = dueling();
        duel.stats.player_1_ships_left = 2;
        duel.settings.increase_difficulty();
        duel.start();
        assert_eq!(duel.stats, MultiplayerStats::new(5));
        assert_eq!(duel.settings, MultiplayerSettings::default());
        assert!(duel.setup_prompt().is_some());
    }
}
