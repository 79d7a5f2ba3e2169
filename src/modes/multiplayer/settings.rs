//! Duel tuning. Every lost ship makes the next round faster.

#[derive(Debug, Clone, PartialEq)]
pub struct MultiplayerSettings {
    pub ship_limit: u32,
    pub speedup_scale: f32,
    pub planet_limit: usize,
    /// Opponent ship count at or below which volleys are doubled
    pub double_fire_below: u32,
    /// Opponent ship count at or below which flank diagonals are added
    pub flank_fire_below: u32,
    pub dynamic: Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic {
    pub ship_speed: f32,
    /// Live projectiles allowed per player
    pub projectile_allowed: usize,
    pub projectile_speed: f32,
}

impl Default for Dynamic {
    fn default() -> Self {
        Dynamic {
            ship_speed: 180.0,
            projectile_allowed: 6,
            projectile_speed: 500.0,
        }
    }
}

impl Default for MultiplayerSettings {
    fn default() -> Self {
        MultiplayerSettings {
            ship_limit: 5,
            speedup_scale: 1.2,
            planet_limit: 5,
            double_fire_below: 1,
            flank_fire_below: 3,
            dynamic: Dynamic::default(),
        }
    }
}

impl MultiplayerSettings {
    pub fn reset_dynamic(&mut self) {
        self.dynamic = Dynamic::default();
    }

    pub fn increase_difficulty(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.projectile_speed *= self.speedup_scale;
        d.projectile_allowed += 2;
        log::debug!(
            "Duel difficulty: ships {:.0}, shots {} @ {:.0}",
            d.ship_speed,
            d.projectile_allowed,
            d.projectile_speed
        );
    }
}
