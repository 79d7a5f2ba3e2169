//! Alien Hunt tuning
//!
//! Static values never change during a game. Dynamic values start from
//! `Dynamic::starting` and ramp up each time the fleet is cleared.

#[derive(Debug, Clone, PartialEq)]
pub struct AlienHuntSettings {
    pub rocket_limit: u32,
    /// Seconds on the clock at level one
    pub playtime: i32,
    pub speedup_scale: f32,
    pub score_scale: f32,
    pub planet_limit: usize,
    pub green_ufo_speed: f32,
    /// Level from which the rocket adds flank diagonals
    pub boost_level_1: u32,
    /// Level from which main volleys are doubled
    pub boost_level_2: u32,
    pub red_ufo_increase: usize,
    pub green_ufo_increase: usize,
    pub blue_ufo_increase: usize,
    pub dynamic: Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic {
    pub rocket_speed: f32,
    pub projectile_allowed: usize,
    pub projectile_speed: f32,
    pub red_ufo_limit: usize,
    pub green_ufo_limit: usize,
    pub blue_ufo_limit: usize,
    /// Seconds left on the level clock
    pub counter: i32,
    pub red_ufo_points: u32,
    pub green_ufo_points: u32,
    pub blue_ufo_points: u32,
}

/// Shortest level clock after a level-up
const MIN_COUNTER: i32 = 10;

impl Default for AlienHuntSettings {
    fn default() -> Self {
        let playtime = 50;
        AlienHuntSettings {
            rocket_limit: 3,
            playtime,
            speedup_scale: 1.2,
            score_scale: 1.5,
            planet_limit: 5,
            green_ufo_speed: 150.0,
            boost_level_1: 1,
            boost_level_2: 1,
            red_ufo_increase: 1,
            green_ufo_increase: 2,
            blue_ufo_increase: 3,
            dynamic: Dynamic::starting(playtime),
        }
    }
}

impl Dynamic {
    fn starting(playtime: i32) -> Self {
        Dynamic {
            rocket_speed: 150.0,
            projectile_allowed: 10,
            projectile_speed: 300.0,
            red_ufo_limit: 5,
            green_ufo_limit: 3,
            blue_ufo_limit: 2,
            counter: playtime,
            red_ufo_points: 20,
            green_ufo_points: 30,
            blue_ufo_points: 50,
        }
    }
}

impl AlienHuntSettings {
    pub fn reset_dynamic(&mut self) {
        self.dynamic = Dynamic::starting(self.playtime);
    }

    pub fn increase_difficulty(&mut self) {
        let scale = self.speedup_scale;
        let d = &mut self.dynamic;

        d.rocket_speed *= scale;
        d.projectile_speed *= scale;
        d.projectile_allowed += 1;

        d.red_ufo_limit += self.red_ufo_increase;
        d.green_ufo_limit += self.green_ufo_increase;
        d.blue_ufo_limit += self.blue_ufo_increase;

        // More blue UFOs, less time
        d.counter = (self.playtime - d.blue_ufo_limit as i32).max(MIN_COUNTER);

        d.red_ufo_points = (d.red_ufo_points as f32 * self.score_scale) as u32;
        d.green_ufo_points = (d.green_ufo_points as f32 * self.score_scale) as u32;
        d.blue_ufo_points = (d.blue_ufo_points as f32 * self.score_scale) as u32;

        log::debug!(
            "Alien Hunt difficulty: rocket {:.0}, shots {} @ {:.0}, fleet {}/{}/{}, clock {}",
            d.rocket_speed,
            d.projectile_allowed,
            d.projectile_speed,
            d.red_ufo_limit,
            d.green_ufo_limit,
            d.blue_ufo_limit,
            d.counter
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_level_up() {
        let mut settings = AlienHuntSettings::default();
        settings.increase_difficulty();
        let d = &settings.dynamic;

        assert!((d.rocket_speed - 180.0).abs() < 1e-3);
        assert!((d.projectile_speed - 360.0).abs() < 1e-3);
        assert!((settings.green_ufo_speed - 150.0).abs() < 1e-3);
        assert_eq!(d.projectile_allowed, 11);
        assert_eq!((d.red_ufo_limit, d.green_ufo_limit, d.blue_ufo_limit), (6, 5, 5));
        assert_eq!(d.counter, 45);
        assert_eq!((d.red_ufo_points, d.green_ufo_points, d.blue_ufo_points), (30, 45, 75));
    }

    #[test]
    fn test_points_floor() {
        let mut settings = AlienHuntSettings::default();
        settings.increase_difficulty();
        settings.increase_difficulty();
        // 45 * 1.5 = 67.5
        assert_eq!(settings.dynamic.green_ufo_points, 67);
    }

    #[test]
    fn test_counter_never_below_minimum() {
        let mut settings = AlienHuntSettings::default();
        for _ in 0..20 {
            settings.increase_difficulty();
        }
        assert_eq!(settings.dynamic.counter, MIN_COUNTER);
    }

    #[test]
    fn test_reset_dynamic() {
        let mut settings = AlienHuntSettings::default();
        settings.increase_difficulty();
        settings.reset_dynamic();
        assert_eq!(settings, AlienHuntSettings::default());
    }
}
