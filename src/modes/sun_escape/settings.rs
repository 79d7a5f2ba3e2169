//! Sun Escape tuning

/// Fuel in a freshly swapped-in tank
pub const FULL_FUEL: i32 = 50;
/// Fuel gained by picking up a tank
pub const REFUEL: i32 = 25;
/// Life a black hole loses per counter wave
pub const COUNTER_WAVE_DAMAGE: i32 = 50;
pub const LAST_LEVEL: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct SunEscapeSettings {
    pub backup_fuel_tank_limit: u32,
    pub speedup_scale: f32,
    /// Waves launched per level, levels one to four
    pub level_waves: [u32; LAST_LEVEL as usize],
    pub black_hole_speed: f32,
    /// Seconds the black hole glows after a hit
    pub black_hole_hit_duration: f32,
    pub counter_wave_speed: f32,
    pub counter_waves_allowed: usize,
    pub dynamic: Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic {
    /// Waves launched so far this level
    pub num_waves: u32,
    pub rocket_speed: f32,
    pub rocket_max_speed: f32,
    pub wave_speed: f32,
    /// Seconds between waves (and between fuel tanks)
    pub wave_pause: i32,
    pub wave_counter: i32,
    pub fuel_counter: i32,
    pub fuel: i32,
    /// Fuel burnt per second
    pub fuel_leak: i32,
    /// Seconds of grace after a wave hits the rocket
    pub collision_pause: i32,
    pub collision_counter: i32,
    pub black_hole_life: i32,
    /// +1 drifting down, -1 drifting up
    pub black_hole_direction: f32,
}

impl Default for SunEscapeSettings {
    fn default() -> Self {
        SunEscapeSettings {
            backup_fuel_tank_limit: 5,
            speedup_scale: 1.5,
            level_waves: [2, 2, 4, 4],
            black_hole_speed: 150.0,
            black_hole_hit_duration: 0.2,
            counter_wave_speed: 300.0,
            counter_waves_allowed: 2,
            dynamic: Dynamic::default(),
        }
    }
}

impl Default for Dynamic {
    fn default() -> Self {
        let wave_pause = 8;
        let collision_pause = 1;
        Dynamic {
            num_waves: 0,
            rocket_speed: 150.0,
            rocket_max_speed: 300.0,
            wave_speed: 120.0,
            wave_pause,
            wave_counter: wave_pause,
            fuel_counter: wave_pause,
            fuel: FULL_FUEL,
            fuel_leak: 2,
            collision_pause,
            collision_counter: collision_pause,
            black_hole_life: 350,
            black_hole_direction: 1.0,
        }
    }
}

impl SunEscapeSettings {
    pub fn reset_dynamic(&mut self) {
        self.dynamic = Dynamic::default();
    }

    /// Waves to launch on `level`, or None past the last level
    pub fn wave_quota(&self, level: u32) -> Option<u32> {
        let index = level.checked_sub(1)? as usize;
        self.level_waves.get(index).copied()
    }

    /// Faster rocket and waves, hungrier engine, shorter breaks
    pub fn increase_difficulty(&mut self) {
        let scale = self.speedup_scale;
        let d = &mut self.dynamic;

        d.rocket_max_speed *= scale;
        d.rocket_speed = (d.rocket_speed * scale).min(d.rocket_max_speed);
        d.wave_speed *= scale;
        d.fuel_leak += 2;
        d.wave_pause = (d.wave_pause - 2).max(1);

        log::debug!(
            "Sun Escape difficulty: rocket {:.0}, waves {:.0}, leak {}, pause {}",
            d.rocket_speed,
            d.wave_speed,
            d.fuel_leak,
            d.wave_pause
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_quota() {
        let settings = SunEscapeSettings::default();
        assert_eq!(settings.wave_quota(1), Some(2));
        assert_eq!(settings.wave_quota(3), Some(4));
        assert_eq!(settings.wave_quota(5), None);
        assert_eq!(settings.wave_quota(0), None);
    }

    #[test]
    fn test_increase_difficulty() {
        let mut settings = SunEscapeSettings::default();
        settings.increase_difficulty();
        let d = &settings.dynamic;
        assert!((d.rocket_speed - 225.0).abs() < 1e-3);
        assert!((d.rocket_max_speed - 450.0).abs() < 1e-3);
        assert!((d.wave_speed - 180.0).abs() < 1e-3);
        assert_eq!(d.fuel_leak, 4);
        assert_eq!(d.wave_pause, 6);
    }

    #[test]
    fn test_wave_pause_floor() {
        let mut settings = SunEscapeSettings::default();
        for _ in 0..6 {
            settings.increase_difficulty();
        }
        assert_eq!(settings.dynamic.wave_pause, 1);
        assert!(settings.dynamic.rocket_speed <= settings.dynamic.rocket_max_speed);
    }
}
