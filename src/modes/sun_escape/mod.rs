//! Sun Escape
//!
//! Survive four stages of a dying star. Each level the sun throws a fixed
//! number of waves; the rocket burns fuel every second and lives off the
//! tanks that drift in. In the last level the sun has collapsed into a
//! black hole that can be beaten with counter waves.

pub mod fuel_tank;
pub mod settings;
pub mod stats;
pub mod sun;
pub mod wave;

use crate::assets::Assets;
use crate::clock::IntervalTimer;
use crate::collision::{aabb_intersect, Collidable};
use crate::craft::{Craft, Heading};
use crate::explosion::Explosion;
use crate::group::EntityGroup;
use crate::input_system::Pilot;
use crate::modes::{session_rng, Outcome, Session};
use crate::render::{draw_all, draw_background, Drawable};
use crate::ui::{Bar, BarStyle, Corner, Scoreboard};
use rand::rngs::StdRng;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use fuel_tank::FuelTank;
use settings::{SunEscapeSettings, COUNTER_WAVE_DAMAGE, FULL_FUEL, LAST_LEVEL, REFUEL};
use stats::SunEscapeStats;
use sun::{Sun, SunStage};
use wave::{Wave, WaveShape};

const ROCKET_WIDTH: u32 = 60;
const ROCKET_HEIGHT: u32 = 40;
/// Fuel tanks keep this far from the top and bottom
const TANK_MARGIN: i32 = 70;

const YELLOW: Color = Color::RGB(255, 255, 0);
const RED: Color = Color::RGB(255, 0, 0);
const BLUE: Color = Color::RGB(0, 0, 255);
const PURPLE: Color = Color::RGB(128, 0, 128);
/// Dark enough to read as black, light enough to see against space
const ASH: Color = Color::RGB(70, 70, 80);

/// Where the level stands after the wave count is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelState {
    /// Waves still to come
    Running,
    /// Quota met, waiting out the last wave pause
    Waiting,
    Advanced,
    /// Survived the black hole without destroying it
    Exhausted,
}

pub struct SunEscape {
    settings: SunEscapeSettings,
    stats: SunEscapeStats,
    rng: StdRng,
    screen_width: u32,
    screen_height: u32,
    rocket: Craft,
    sun: Sun,
    waves: EntityGroup<Wave>,
    counter_waves: EntityGroup<Wave>,
    fuel_tanks: EntityGroup<FuelTank>,
    explosions: EntityGroup<Explosion>,
    timer: IntervalTimer,
    board: Scoreboard,
    fuel_bar: Bar,
    life_bar: Bar,
}

impl SunEscape {
    pub fn new(screen_width: u32, screen_height: u32, seed: Option<u64>) -> Self {
        let settings = SunEscapeSettings::default();
        let stats = SunEscapeStats::new(settings.backup_fuel_tank_limit);
        let rocket = Craft::new(0.0, 0.0, ROCKET_WIDTH, ROCKET_HEIGHT, settings.dynamic.rocket_speed)
            .with_look("double_rocket", Color::RGB(230, 230, 240))
            .facing(Heading::Right);

        SunEscape {
            settings,
            stats,
            rng: session_rng(seed),
            screen_width,
            screen_height,
            rocket,
            sun: Sun::new(SunStage::YellowDwarf, screen_width, screen_height),
            waves: EntityGroup::new(),
            counter_waves: EntityGroup::new(),
            fuel_tanks: EntityGroup::new(),
            explosions: EntityGroup::new(),
            timer: IntervalTimer::every_second(),
            board: Scoreboard::new(Corner::TopLeft),
            fuel_bar: Bar::with_style(BarStyle::fuel()),
            life_bar: Bar::with_style(BarStyle::life()),
        }
    }

    fn place_rocket(&mut self) {
        self.rocket.place(0.0, (self.screen_height / 2) as f32);
        self.rocket.facing = Heading::Right;
        self.rocket.speed = self.settings.dynamic.rocket_speed;
    }

    fn defeat(&self, reason: &str) -> Outcome {
        Outcome::game_over(format!("{} ON LEVEL {}", reason, self.stats.level))
    }

    /// One tick of the fuel and wave clocks
    fn second_elapsed(&mut self) {
        let d = &mut self.settings.dynamic;
        d.fuel_counter -= 1;
        d.wave_counter -= 1;
        if d.collision_counter < d.collision_pause {
            d.collision_counter += 1;
        }

        d.fuel -= d.fuel_leak;
        if d.fuel <= 0 {
            d.fuel = FULL_FUEL;
            self.stats.lose_tank();
            log::debug!("Swapped in a backup tank, {} left", self.stats.backup_fuel_tank_left);
        }

        let flipped = self.settings.dynamic.fuel_counter % 2 != 0;
        for tank in self.fuel_tanks.iter_mut() {
            tank.flipped = flipped;
        }
    }

    /// Advances the level once its waves are out and the last pause is over
    fn check_level(&mut self) -> LevelState {
        let Some(quota) = self.settings.wave_quota(self.stats.level) else {
            return LevelState::Exhausted;
        };
        if self.settings.dynamic.num_waves < quota {
            return LevelState::Running;
        }
        if self.settings.dynamic.wave_counter > 0 {
            return LevelState::Waiting;
        }

        self.fuel_tanks.clear();
        self.waves.clear();
        self.stats.level += 1;
        self.settings.increase_difficulty();
        let d = &mut self.settings.dynamic;
        d.num_waves = 0;
        d.wave_counter = d.wave_pause;
        d.fuel_counter = d.wave_pause;
        self.rocket.speed = d.rocket_speed;

        match SunStage::for_level(self.stats.level) {
            Some(stage) => {
                self.sun.set_stage(stage, self.screen_width, self.screen_height);
                log::info!("Sun Escape: level {} ({:?})", self.stats.level, stage);
                LevelState::Advanced
            }
            None => LevelState::Exhausted,
        }
    }

    fn spawn_fuel_tank(&mut self) {
        if self.settings.dynamic.fuel_counter > 0 {
            return;
        }
        let h = self.screen_height as i32;
        let y = if h - TANK_MARGIN > TANK_MARGIN {
            self.rng.random_range(TANK_MARGIN..h - TANK_MARGIN)
        } else {
            0
        };
        let center = self.screen_width as i32 / 2;
        let x = if self.stats.level >= LAST_LEVEL && self.rng.random_bool(0.5) {
            TANK_MARGIN
        } else {
            center
        };
        self.fuel_tanks.push(FuelTank::new(x, y));
        self.settings.dynamic.fuel_counter = self.settings.dynamic.wave_pause;
    }

    fn spawn_waves(&mut self) {
        if self.settings.dynamic.wave_counter > 0 {
            return;
        }
        let (w, h) = (self.screen_width, self.screen_height);
        let origin = self.sun.center();

        match self.stats.level {
            1 => {
                let wave = Wave::sine(&mut self.rng, YELLOW, origin.x, w, h);
                self.waves.push(wave);
            }
            2 => {
                let wave = Wave::bezier(&mut self.rng, WaveShape::Long, RED, origin, w, h);
                self.waves.push(wave);
            }
            3 => {
                for shape in [WaveShape::Up, WaveShape::Down] {
                    let wave = Wave::bezier(&mut self.rng, shape, BLUE, origin, w, h);
                    self.waves.push(wave);
                }
            }
            _ => {
                for _ in 0..2 {
                    let (shape, color) = match self.rng.random_range(0..3) {
                        0 => (WaveShape::Up, PURPLE),
                        1 => (WaveShape::Down, PURPLE),
                        _ => (WaveShape::Long, ASH),
                    };
                    let wave = Wave::bezier(&mut self.rng, shape, color, origin, w, h);
                    self.waves.push(wave);
                }
            }
        }

        let d = &mut self.settings.dynamic;
        d.wave_counter = d.wave_pause;
        d.num_waves += 1;
    }

    fn move_waves(&mut self, dt: f32) {
        let w = self.screen_width;
        let wave_speed = self.settings.dynamic.wave_speed;
        let counter_speed = self.settings.counter_wave_speed;

        for wave in self.waves.iter_mut() {
            wave.update(dt, wave_speed);
        }
        for wave in self.counter_waves.iter_mut() {
            wave.update(dt, counter_speed);
        }
        self.waves.retain(|wave| !wave.is_off_screen(w));
        self.counter_waves.retain(|wave| !wave.is_off_screen(w));
    }

    /// Tanks crossed by any wave blow up
    fn destroy_tanks_in_waves(&mut self) {
        let waves = &self.waves;
        let counter_waves = &self.counter_waves;
        let mut destroyed = Vec::new();
        self.fuel_tanks.retain(|tank| {
            let bounds = tank.get_bounds();
            let hit = waves.iter().chain(counter_waves.iter()).any(|wave| wave.hits(&bounds));
            if hit {
                destroyed.push(bounds);
            }
            !hit
        });
        for bounds in destroyed {
            self.explosions.push(Explosion::at(bounds));
        }
    }

    /// Counter waves against the black hole. Returns true once it is destroyed.
    fn strike_black_hole(&mut self) -> bool {
        if self.sun.stage() != SunStage::BlackHole {
            return false;
        }
        let target = self.sun.get_bounds();
        let before = self.counter_waves.len();
        self.counter_waves.retain(|wave| !wave.hits(&target));
        let strikes = (before - self.counter_waves.len()) as i32;
        if strikes == 0 {
            return false;
        }

        self.sun.hit(self.settings.black_hole_hit_duration);
        self.settings.dynamic.black_hole_life -= COUNTER_WAVE_DAMAGE * strikes;
        log::debug!("Black hole hit, life {}", self.settings.dynamic.black_hole_life);
        self.settings.dynamic.black_hole_life <= 0
    }

    fn scoreboard_lines(&self) -> Vec<String> {
        let d = &self.settings.dynamic;
        vec![
            format!("LEVEL: {}", self.stats.level),
            format!("BACKUP TANKS: {}", self.stats.backup_fuel_tank_left),
            format!("FUEL: {}", d.fuel.max(0)),
            format!("NEXT WAVE: {}", d.wave_counter.max(0)),
        ]
    }
}

impl Session for SunEscape {
    fn title(&self) -> &str {
        "SUN ESCAPE"
    }

    fn start(&mut self) {
        self.settings.reset_dynamic();
        self.stats = SunEscapeStats::new(self.settings.backup_fuel_tank_limit);
        self.sun.set_stage(SunStage::YellowDwarf, self.screen_width, self.screen_height);
        self.waves.clear();
        self.counter_waves.clear();
        self.fuel_tanks.clear();
        self.explosions.clear();
        self.timer.reset();
        self.place_rocket();
    }

    fn steer(&mut self, _pilot: Pilot, heading: Heading, engaged: bool) {
        self.rocket.set_thruster(heading, engaged);
    }

    fn fire(&mut self, pilot: Pilot) {
        if pilot != Pilot::One || self.stats.level != LAST_LEVEL {
            return;
        }
        if !self.rocket.is_thrusting(Heading::Right) {
            return;
        }
        if self.counter_waves.len() < self.settings.counter_waves_allowed {
            self.counter_waves.push(Wave::counter(YELLOW, self.rocket.center()));
        }
    }

    fn release_controls(&mut self) {
        self.rocket.stop();
    }

    fn update(&mut self, dt: f32) -> Option<Outcome> {
        for _ in 0..self.timer.tick(dt) {
            self.second_elapsed();
        }

        let (w, h) = (self.screen_width, self.screen_height);

        self.rocket.update(dt, w, h);
        if aabb_intersect(&self.rocket.get_bounds(), &self.sun.get_bounds()) {
            return Some(self.defeat("BURNT UP"));
        }

        let speed = self.settings.black_hole_speed;
        self.sun
            .update(dt, speed, &mut self.settings.dynamic.black_hole_direction, h);

        match self.check_level() {
            LevelState::Running => {
                self.spawn_fuel_tank();
                self.spawn_waves();
            }
            LevelState::Exhausted => {
                return Some(Outcome::game_over("THE BLACK HOLE OUTLASTED YOU"));
            }
            LevelState::Waiting | LevelState::Advanced => {}
        }

        let rocket_bounds = self.rocket.get_bounds();
        let refuels = self.fuel_tanks.take_colliding(&rocket_bounds).len() as i32;
        self.settings.dynamic.fuel += REFUEL * refuels;

        self.move_waves(dt);

        let d = &self.settings.dynamic;
        if d.collision_counter == d.collision_pause
            && self.waves.iter().any(|wave| wave.hits(&rocket_bounds))
        {
            self.explosions.push(Explosion::at(rocket_bounds));
            self.stats.lose_tank();
            self.settings.dynamic.collision_counter = 0;
        }

        self.destroy_tanks_in_waves();

        if self.strike_black_hole() {
            return Some(Outcome::Victory(
                "YOU WIN!".to_string(),
                "YOUR NAME GOES AMONG THE BRAVEST".to_string(),
            ));
        }

        let enemy_bounds: Vec<_> = self.waves.iter().map(|wave| wave.get_bounds()).collect();
        self.counter_waves
            .retain(|wave| !enemy_bounds.iter().any(|bounds| wave.hits(bounds)));

        for explosion in self.explosions.iter_mut() {
            explosion.update();
        }
        self.explosions.prune();

        if self.stats.backup_fuel_tank_left == 0 {
            return Some(self.defeat("OUT OF FUEL"));
        }
        None
    }

    fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        draw_background(canvas, assets)?;
        self.sun.draw(canvas, assets)?;

        if self.sun.stage() == SunStage::BlackHole {
            let life = self.settings.dynamic.black_hole_life;
            let bounds = self.sun.get_bounds();
            let x = bounds.center().x() - life.max(0) / 2;
            self.life_bar.render(canvas, x, bounds.bottom(), life, 0)?;
        }

        draw_all(canvas, assets, &self.fuel_tanks)?;
        draw_all(canvas, assets, &self.waves)?;
        draw_all(canvas, assets, &self.counter_waves)?;
        self.rocket.draw(canvas, assets)?;

        let fuel = self.settings.dynamic.fuel;
        let bounds = self.rocket.get_bounds();
        let x = bounds.center().x() - fuel.max(0) / 2;
        self.fuel_bar
            .render(canvas, x, bounds.bottom() + 3, fuel, FULL_FUEL as u32)?;

        draw_all(canvas, assets, &self.explosions)?;
        self.board.render(canvas, &self.scoreboard_lines())
    }
}
