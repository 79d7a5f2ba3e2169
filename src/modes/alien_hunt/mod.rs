//! Alien Hunt
//!
//! Shoot down the whole fleet before the clock runs out. Every cleared fleet
//! starts a harder level with a new planet field.

pub mod settings;
pub mod stats;
pub mod ufo;

use crate::assets::Assets;
use crate::clock::IntervalTimer;
use crate::collision::{aabb_intersect, collides_with_any, Collidable};
use crate::craft::{Craft, Heading};
use crate::explosion::Explosion;
use crate::group::{collide_groups, EntityGroup};
use crate::input_system::Pilot;
use crate::modes::{session_rng, Outcome, Session};
use crate::planet::{PlanetField, FIELD_MIN_Y};
use crate::projectile::{volley, Direction8, Projectile};
use crate::record::RecordStore;
use crate::render::{draw_all, draw_background, Drawable};
use crate::text::draw_centered_text;
use crate::ui::{Corner, Scoreboard};
use rand::rngs::StdRng;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use settings::AlienHuntSettings;
use stats::AlienHuntStats;
use ufo::{spawn_fleet, Axis, Ufo, UfoKind};

const ROCKET_SIZE: u32 = 50;
/// Seconds given back after losing a rocket
const HIT_BONUS_SECS: i32 = 5;
/// Blue UFOs open fire on every fourth second
const BLUE_FIRE_EVERY: i32 = 4;
const UFO_SHOT_COLOR: Color = Color::RGB(255, 80, 80);

pub struct AlienHunt {
    settings: AlienHuntSettings,
    stats: AlienHuntStats,
    store: RecordStore,
    rng: StdRng,
    screen_width: u32,
    screen_height: u32,
    rocket: Craft,
    planets: PlanetField,
    red_ufos: EntityGroup<Ufo>,
    green_ufos: EntityGroup<Ufo>,
    blue_ufos: EntityGroup<Ufo>,
    rocket_projectiles: EntityGroup<Projectile>,
    ufo_projectiles: EntityGroup<Projectile>,
    explosions: EntityGroup<Explosion>,
    timer: IntervalTimer,
    left_board: Scoreboard,
    right_board: Scoreboard,
}

impl AlienHunt {
    pub fn new(screen_width: u32, screen_height: u32, store: RecordStore, seed: Option<u64>) -> Self {
        let settings = AlienHuntSettings::default();
        let stats = AlienHuntStats::new(settings.rocket_limit, 0);
        let rocket = Craft::new(0.0, 0.0, ROCKET_SIZE, ROCKET_SIZE, settings.dynamic.rocket_speed);

        AlienHunt {
            settings,
            stats,
            store,
            rng: session_rng(seed),
            screen_width,
            screen_height,
            rocket,
            planets: PlanetField::default(),
            red_ufos: EntityGroup::new(),
            green_ufos: EntityGroup::new(),
            blue_ufos: EntityGroup::new(),
            rocket_projectiles: EntityGroup::new(),
            ufo_projectiles: EntityGroup::new(),
            explosions: EntityGroup::new(),
            timer: IntervalTimer::every_second(),
            left_board: Scoreboard::new(Corner::TopLeft),
            right_board: Scoreboard::new(Corner::TopRight),
        }
    }

    pub fn fleet_size(&self) -> usize {
        self.red_ufos.len() + self.green_ufos.len() + self.blue_ufos.len()
    }

    /// Rocket back at the top, pointing down at the fleet
    fn place_rocket(&mut self) {
        let x = (self.screen_width / 2 + 70) as f32;
        self.rocket.place(x, 0.0);
        self.rocket.facing = Heading::Down;
        self.rocket.speed = self.settings.dynamic.rocket_speed;
    }

    /// New planets and a full fleet for the current level
    fn populate(&mut self) {
        let (w, h) = (self.screen_width, self.screen_height);
        let d = &self.settings.dynamic;
        let (red, green, blue) = (d.red_ufo_limit, d.green_ufo_limit, d.blue_ufo_limit);

        self.planets = PlanetField::generate(&mut self.rng, self.settings.planet_limit, w, h, FIELD_MIN_Y);

        let glide = if self.stats.level % 2 == 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        self.red_ufos = spawn_fleet(&mut self.rng, UfoKind::Red, red, glide, &self.planets, w, h)
            .into_iter()
            .collect();
        self.green_ufos = spawn_fleet(&mut self.rng, UfoKind::Green, green, glide, &self.planets, w, h)
            .into_iter()
            .collect();
        self.blue_ufos = spawn_fleet(&mut self.rng, UfoKind::Blue, blue, glide, &self.planets, w, h)
            .into_iter()
            .collect();
    }

    fn level_up(&mut self) {
        self.stats.level += 1;
        self.settings.increase_difficulty();
        self.rocket_projectiles.clear();
        self.ufo_projectiles.clear();
        self.place_rocket();
        self.timer.reset();
        self.populate();
        log::info!(
            "Alien Hunt: level {} ({} seconds)",
            self.stats.level,
            self.settings.dynamic.counter
        );
    }

    /// Loses a rocket. Returns the defeat once none are left.
    fn rocket_hit(&mut self) -> Option<Outcome> {
        self.stats.rocket_left = self.stats.rocket_left.saturating_sub(1);
        log::debug!("Rocket hit, {} left", self.stats.rocket_left);
        if self.stats.rocket_left == 0 {
            return Some(self.defeat());
        }
        self.settings.dynamic.counter += HIT_BONUS_SECS;
        None
    }

    fn defeat(&self) -> Outcome {
        Outcome::game_over(format!("SCORE: {}", self.stats.score.display_score()))
    }

    fn score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        if self.stats.score.add(points) {
            if let Err(e) = self.store.save(self.stats.score.record) {
                log::error!("Failed to save record to {:?}: {}", self.store.path(), e);
            }
        }
    }

    /// One tick of the level clock
    fn second_elapsed(&mut self) -> Option<Outcome> {
        self.settings.dynamic.counter -= 1;
        let counter = self.settings.dynamic.counter;
        if counter <= 0 {
            return Some(self.defeat());
        }

        let flipped = counter % 2 != 0;
        for ufo in self.red_ufos.iter_mut().chain(self.blue_ufos.iter_mut()) {
            ufo.flipped = flipped;
        }

        if counter % BLUE_FIRE_EVERY == 0 && self.ufo_projectiles.len() < self.blue_ufos.len() {
            self.blue_fire();
        }
        None
    }

    fn blue_fire(&mut self) {
        let boosted = self.stats.level >= self.settings.boost_level_2;
        for ufo in self.blue_ufos.iter() {
            let roll = self.rng.random_range(1..=8u8);
            let Some(heading) = Direction8::from_roll(roll) else {
                continue;
            };
            let double = boosted && heading.is_cardinal();
            self.ufo_projectiles.extend(
                volley(ufo.get_bounds(), heading, double)
                    .into_iter()
                    .map(|p| p.tinted(UFO_SHOT_COLOR)),
            );
        }
    }

    fn move_fleet(&mut self, dt: f32) {
        let speed = self.settings.green_ufo_speed;
        for green in self.green_ufos.iter_mut() {
            green.update(dt, speed);

            let bounds = green.get_bounds();
            let obstacle = self
                .planets
                .iter()
                .map(|p| p.get_bounds())
                .chain(self.red_ufos.iter().map(|u| u.get_bounds()))
                .chain(self.blue_ufos.iter().map(|u| u.get_bounds()))
                .find(|o| aabb_intersect(&bounds, o));
            if let Some(obstacle) = obstacle {
                green.bounce_off(&obstacle);
            }

            green.keep_on_screen(self.screen_width, self.screen_height);
        }
    }

    fn move_projectiles(&mut self, dt: f32) {
        let (w, h) = (self.screen_width, self.screen_height);
        let speed = self.settings.dynamic.projectile_speed;
        for shot in self
            .rocket_projectiles
            .iter_mut()
            .chain(self.ufo_projectiles.iter_mut())
        {
            shot.update(dt, speed);
        }
        self.rocket_projectiles.retain(|p| !p.is_off_screen(w, h));
        self.ufo_projectiles.retain(|p| !p.is_off_screen(w, h));
    }

    /// Rocket projectiles against one colour of the fleet. Shots fly on
    /// through whatever they hit.
    fn shoot_down(&mut self, kind: UfoKind) -> u32 {
        let d = &self.settings.dynamic;
        let (fleet, points) = match kind {
            UfoKind::Red => (&mut self.red_ufos, d.red_ufo_points),
            UfoKind::Green => (&mut self.green_ufos, d.green_ufo_points),
            UfoKind::Blue => (&mut self.blue_ufos, d.blue_ufo_points),
        };
        let (_, downed) = collide_groups(&mut self.rocket_projectiles, fleet, false, true);
        for ufo in &downed {
            self.explosions.push(Explosion::at(ufo.get_bounds()));
        }
        points * downed.len() as u32
    }

    fn scoreboard_lines(&self) -> (Vec<String>, Vec<String>) {
        let left = vec![
            format!("SCORE: {}", self.stats.score.display_score()),
            format!("RECORD: {}", self.stats.score.display_record()),
        ];
        let right = vec![
            format!("LEVEL: {}", self.stats.level),
            format!("ROCKETS: {}", self.stats.rocket_left),
        ];
        (left, right)
    }
}

impl Session for AlienHunt {
    fn title(&self) -> &str {
        "ALIEN HUNT"
    }

    fn start(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(self.settings.rocket_limit, &self.store);
        self.timer.reset();
        self.rocket_projectiles.clear();
        self.ufo_projectiles.clear();
        self.explosions.clear();
        self.place_rocket();
        self.populate();
        log::info!(
            "Alien Hunt: {} UFOs, {} planets, record {}",
            self.fleet_size(),
            self.planets.len(),
            self.stats.score.record
        );
    }

    fn steer(&mut self, _pilot: Pilot, heading: Heading, engaged: bool) {
        self.rocket.set_thruster(heading, engaged);
    }

    fn fire(&mut self, pilot: Pilot) {
        if pilot != Pilot::One {
            return;
        }
        // First held heading wins
        let Some(&heading) = self.rocket.held_headings().first() else {
            return;
        };
        if self.rocket_projectiles.len() >= self.settings.dynamic.projectile_allowed {
            return;
        }

        let origin = self.rocket.get_bounds();
        let heading = Direction8::from(heading);
        let double = self.stats.level >= self.settings.boost_level_2;
        self.rocket_projectiles.extend(volley(origin, heading, double));

        if self.stats.level >= self.settings.boost_level_1 {
            if let Some(flank) = heading.flank() {
                for diagonal in flank {
                    self.rocket_projectiles.extend(volley(origin, diagonal, false));
                }
            }
        }
    }

    fn release_controls(&mut self) {
        self.rocket.stop();
    }

    fn update(&mut self, dt: f32) -> Option<Outcome> {
        for _ in 0..self.timer.tick(dt) {
            if let Some(outcome) = self.second_elapsed() {
                return Some(outcome);
            }
        }

        let (w, h) = (self.screen_width, self.screen_height);
        let mut outcome = None;

        self.rocket.update(dt, w, h);
        let rocket_bounds = self.rocket.get_bounds();
        if collides_with_any(&rocket_bounds, self.planets.as_slice()) {
            self.rocket.stop();
        }

        self.move_fleet(dt);

        // Ramming costs a rocket but still takes the UFO down
        let rammed: Vec<Ufo> = [&mut self.red_ufos, &mut self.green_ufos, &mut self.blue_ufos]
            .into_iter()
            .flat_map(|fleet| fleet.take_colliding(&rocket_bounds))
            .collect();
        for ufo in rammed {
            self.explosions.push(Explosion::at(ufo.get_bounds()));
            outcome = outcome.or(self.rocket_hit());
        }

        self.move_projectiles(dt);

        let points = self.shoot_down(UfoKind::Red)
            + self.shoot_down(UfoKind::Green)
            + self.shoot_down(UfoKind::Blue);
        self.score(points);

        self.rocket_projectiles.remove_hitting(self.planets.as_slice());
        self.ufo_projectiles.remove_hitting(self.planets.as_slice());

        if !self.ufo_projectiles.take_colliding(&rocket_bounds).is_empty() {
            self.explosions.push(Explosion::at(rocket_bounds));
            outcome = outcome.or(self.rocket_hit());
        }

        self.ufo_projectiles.remove_hitting(self.red_ufos.as_slice());
        self.ufo_projectiles.remove_hitting(self.green_ufos.as_slice());

        if outcome.is_none() && self.fleet_size() == 0 {
            self.level_up();
        }

        for explosion in self.explosions.iter_mut() {
            explosion.update();
        }
        self.explosions.prune();

        outcome
    }

    fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        draw_background(canvas, assets)?;
        draw_all(canvas, assets, self.planets.iter())?;
        draw_all(canvas, assets, &self.red_ufos)?;
        draw_all(canvas, assets, &self.green_ufos)?;
        draw_all(canvas, assets, &self.blue_ufos)?;
        draw_all(canvas, assets, &self.rocket_projectiles)?;
        draw_all(canvas, assets, &self.ufo_projectiles)?;
        self.rocket.draw(canvas, assets)?;
        draw_all(canvas, assets, &self.explosions)?;

        let (left, right) = self.scoreboard_lines();
        self.left_board.render(canvas, &left)?;
        self.right_board.render(canvas, &right)?;

        let clock = self.settings.dynamic.counter.max(0).to_string();
        let color = if self.settings.dynamic.counter <= 10 {
            Color::RGB(255, 90, 90)
        } else {
            Color::RGB(255, 255, 255)
        };
        draw_centered_text(canvas, &clock, self.screen_width as i32 / 2, 20, color, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    const W: u32 = 1280;
    const H: u32 = 720;

    fn temp_store(name: &str) -> RecordStore {
        let path = std::env::temp_dir()
            .join(format!("star_doom_alien_hunt_{}_{}", name, std::process::id()))
            .join("record.json");
        let _ = std::fs::remove_file(&path);
        RecordStore::new(path)
    }

    fn started(name: &str) -> AlienHunt {
        let mut hunt = AlienHunt::new(W, H, temp_store(name), Some(7));
        hunt.start();
        hunt
    }

    /// Two red UFOs far apart, nothing else
    fn two_reds(hunt: &mut AlienHunt) {
        hunt.green_ufos.clear();
        hunt.blue_ufos.clear();
        hunt.red_ufos = EntityGroup::new();
        hunt.red_ufos.push(Ufo::new(UfoKind::Red, 100.0, 300.0, Axis::Vertical));
        hunt.red_ufos.push(Ufo::new(UfoKind::Red, 1000.0, 300.0, Axis::Vertical));
    }

    #[test]
    fn test_start_layout() {
        let hunt = started("start");
        assert_eq!(hunt.rocket.get_bounds().top_left(), sdl2::rect::Point::new(710, 0));
        assert_eq!(hunt.rocket.facing, Heading::Down);
        assert_eq!(hunt.red_ufos.len(), 5);
        assert_eq!(hunt.green_ufos.len(), 3);
        assert_eq!(hunt.blue_ufos.len(), 2);
        assert_eq!(hunt.planets.len(), 5);
        // Level one glides vertically
        assert!(hunt.green_ufos.iter().all(|u| u.axis == Axis::Vertical));
    }

    #[test]
    fn test_fire_needs_a_heading() {
        let mut hunt = started("no_heading");
        hunt.fire(Pilot::One);
        assert!(hunt.rocket_projectiles.is_empty());
    }

    #[test]
    fn test_fire_double_with_flanks() {
        let mut hunt = started("fire");
        hunt.steer(Pilot::One, Heading::Right, true);
        hunt.fire(Pilot::One);
        // Double main volley plus two flank diagonals
        assert_eq!(hunt.rocket_projectiles.len(), 4);
        let headings: Vec<Direction8> = hunt.rocket_projectiles.iter().map(|p| p.heading).collect();
        assert_eq!(
            headings,
            vec![
                Direction8::Right,
                Direction8::Right,
                Direction8::UpRight,
                Direction8::DownRight
            ]
        );

        // Player two's fire key does nothing here
        hunt.fire(Pilot::Two);
        assert_eq!(hunt.rocket_projectiles.len(), 4);
    }

    #[test]
    fn test_fire_uses_first_held_heading() {
        let mut hunt = started("first_heading");
        hunt.steer(Pilot::Two, Heading::Down, true);
        hunt.steer(Pilot::One, Heading::Left, true);
        hunt.fire(Pilot::One);
        assert_eq!(hunt.rocket_projectiles.as_slice()[0].heading, Direction8::Left);
    }

    #[test]
    fn test_fire_limited_by_allowance() {
        let mut hunt = started("allowance");
        hunt.steer(Pilot::One, Heading::Up, true);
        for _ in 0..10 {
            hunt.fire(Pilot::One);
        }
        // 0 -> 4 -> 8 -> 12, then the allowance of 10 is exceeded
        assert_eq!(hunt.rocket_projectiles.len(), 12);
    }

    #[test]
    fn test_clock_runs_out() {
        let mut hunt = started("clock");
        hunt.green_ufos.clear();
        hunt.blue_ufos.clear();

        for _ in 0..49 {
            assert_eq!(hunt.update(1.0), None);
        }
        assert_eq!(hunt.settings.dynamic.counter, 1);
        let outcome = hunt.update(1.0).expect("clock should run out");
        assert_eq!(outcome.title(), "GAME OVER!");
        assert!(!outcome.is_victory());
    }

    #[test]
    fn test_sprites_flip_with_the_clock() {
        let mut hunt = started("flip");
        hunt.green_ufos.clear();
        hunt.blue_ufos.clear();
        hunt.update(1.0);
        // 49 is odd
        assert!(hunt.red_ufos.iter().all(|u| u.flipped));
        hunt.update(1.0);
        assert!(hunt.red_ufos.iter().all(|u| !u.flipped));
    }

    #[test]
    fn test_rocket_hit_adds_time_then_ends() {
        let mut hunt = started("rocket_hit");
        assert_eq!(hunt.rocket_hit(), None);
        assert_eq!(hunt.stats.rocket_left, 2);
        assert_eq!(hunt.settings.dynamic.counter, 55);
        assert_eq!(hunt.rocket_hit(), None);
        assert!(hunt.rocket_hit().is_some());
        assert_eq!(hunt.stats.rocket_left, 0);
    }

    #[test]
    fn test_shooting_a_ufo_scores_and_saves_record() {
        let mut hunt = started("score");
        two_reds(&mut hunt);
        hunt.rocket_projectiles
            .push(Projectile::new(Vec2::new(130.0, 320.0), Direction8::Up));

        assert_eq!(hunt.update(0.0), None);
        assert_eq!(hunt.stats.score.score, 20);
        assert_eq!(hunt.stats.score.record, 20);
        assert_eq!(hunt.red_ufos.len(), 1);
        assert_eq!(hunt.rocket_projectiles.len(), 1);
        assert_eq!(hunt.explosions.len(), 1);
        assert_eq!(hunt.store.load(), 20);
    }

    #[test]
    fn test_one_shot_downs_every_ufo_in_line() {
        let mut hunt = started("pierce");
        hunt.planets = PlanetField::default();
        hunt.green_ufos.clear();
        hunt.blue_ufos.clear();
        hunt.red_ufos = EntityGroup::new();
        hunt.red_ufos.push(Ufo::new(UfoKind::Red, 100.0, 600.0, Axis::Vertical));
        hunt.red_ufos.push(Ufo::new(UfoKind::Red, 100.0, 400.0, Axis::Vertical));
        // Keeps the level going
        hunt.red_ufos.push(Ufo::new(UfoKind::Red, 1000.0, 300.0, Axis::Vertical));
        hunt.rocket_projectiles
            .push(Projectile::new(Vec2::new(130.0, 700.0), Direction8::Up));

        for _ in 0..18 {
            assert_eq!(hunt.update(0.05), None);
        }
        assert_eq!(hunt.red_ufos.len(), 1);
        assert_eq!(hunt.red_ufos.as_slice()[0].get_bounds().x(), 1000);
        assert_eq!(hunt.stats.score.score, 40);
        assert_eq!(hunt.rocket_projectiles.len(), 1);
    }

    #[test]
    fn test_blue_ufos_fire_every_fourth_second() {
        let mut hunt = started("blue_fire");
        hunt.red_ufos.clear();
        hunt.green_ufos.clear();
        assert_eq!(hunt.blue_ufos.len(), 2);

        hunt.settings.dynamic.counter = 5;
        assert_eq!(hunt.second_elapsed(), None);
        let shots = hunt.ufo_projectiles.len();
        assert!((2..=4).contains(&shots));
        assert!(hunt.ufo_projectiles.iter().all(|p| p.color == UFO_SHOT_COLOR));
        // Cardinal shots come in pairs at level one, diagonals alone
        let cardinal = hunt.ufo_projectiles.iter().filter(|p| p.heading.is_cardinal()).count();
        assert_eq!(cardinal % 2, 0);
        assert_eq!(cardinal / 2 + (shots - cardinal), 2);

        // 3 is not a multiple of four
        hunt.ufo_projectiles.clear();
        assert_eq!(hunt.second_elapsed(), None);
        assert!(hunt.ufo_projectiles.is_empty());
    }

    #[test]
    fn test_blue_ufos_hold_fire_while_shots_outnumber_them() {
        let mut hunt = started("blue_hold");
        hunt.red_ufos.clear();
        hunt.green_ufos.clear();
        for _ in 0..hunt.blue_ufos.len() {
            hunt.ufo_projectiles
                .push(Projectile::new(Vec2::new(640.0, 360.0), Direction8::Down));
        }

        hunt.settings.dynamic.counter = 9;
        assert_eq!(hunt.second_elapsed(), None);
        assert_eq!(hunt.ufo_projectiles.len(), 2);
    }

    #[test]
    fn test_level_up_restarts_the_second_timer() {
        let mut hunt = started("timer_reset");
        assert_eq!(hunt.timer.tick(0.6), 0);
        hunt.level_up();
        assert_eq!(hunt.timer.tick(0.5), 0);
        assert_eq!(hunt.timer.tick(0.5), 1);
    }

    #[test]
    fn test_ramming_costs_a_rocket() {
        let mut hunt = started("ram");
        two_reds(&mut hunt);
        hunt.rocket.place(110.0, 300.0);

        assert_eq!(hunt.update(0.0), None);
        assert_eq!(hunt.stats.rocket_left, 2);
        assert_eq!(hunt.red_ufos.len(), 1);
        assert_eq!(hunt.explosions.len(), 1);
        assert_eq!(hunt.stats.score.score, 0);
    }

    #[test]
    fn test_ufo_shot_hits_rocket_once() {
        let mut hunt = started("ufo_shot");
        let center = hunt.rocket.center();
        for _ in 0..3 {
            hunt.ufo_projectiles.push(Projectile::new(center, Direction8::Up));
        }

        assert_eq!(hunt.update(0.0), None);
        assert_eq!(hunt.stats.rocket_left, 2);
        assert!(hunt.ufo_projectiles.is_empty());
    }

    #[test]
    fn test_cleared_fleet_levels_up() {
        let mut hunt = started("level_up");
        hunt.red_ufos.clear();
        hunt.green_ufos.clear();
        hunt.blue_ufos.clear();
        hunt.steer(Pilot::One, Heading::Right, true);

        assert_eq!(hunt.update(0.0), None);
        assert_eq!(hunt.stats.level, 2);
        assert_eq!(hunt.settings.dynamic.counter, 45);
        assert_eq!(hunt.red_ufos.len(), 6);
        assert_eq!(hunt.green_ufos.len(), 5);
        assert_eq!(hunt.blue_ufos.len(), 5);
        assert!(hunt.green_ufos.iter().all(|u| u.axis == Axis::Horizontal));
        assert!(hunt.rocket.held_headings().is_empty());
        assert!((hunt.rocket.speed - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_start_reloads_record() {
        let store = temp_store("reload");
        store.save(340).expect("write record");
        let mut hunt = AlienHunt::new(W, H, store, Some(1));
        hunt.start();
        assert_eq!(hunt.stats.score.record, 340);
        assert_eq!(hunt.stats.score.score, 0);
    }
}
