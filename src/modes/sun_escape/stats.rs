#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunEscapeStats {
    pub backup_fuel_tank_left: u32,
    pub level: u32,
}

impl SunEscapeStats {
    pub fn new(backup_fuel_tank_limit: u32) -> Self {
        SunEscapeStats {
            backup_fuel_tank_left: backup_fuel_tank_limit,
            level: 1,
        }
    }

    /// Burns one backup tank. True when that was the last one.
    pub fn lose_tank(&mut self) -> bool {
        self.backup_fuel_tank_left = self.backup_fuel_tank_left.saturating_sub(1);
        self.backup_fuel_tank_left == 0
    }
}
