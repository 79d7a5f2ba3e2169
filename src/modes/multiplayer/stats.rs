use crate::input_system::Pilot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplayerStats {
    pub player_1_ships_left: u32,
    pub player_2_ships_left: u32,
}

impl MultiplayerStats {
    pub fn new(ship_limit: u32) -> Self {
        MultiplayerStats {
            player_1_ships_left: ship_limit,
            player_2_ships_left: ship_limit,
        }
    }

    pub fn ships_left(&self, pilot: Pilot) -> u32 {
        match pilot {
            Pilot::One => self.player_1_ships_left,
            Pilot::Two => self.player_2_ships_left,
        }
    }

    /// Takes one ship from `pilot` and returns how many remain
    pub fn lose_ship(&mut self, pilot: Pilot) -> u32 {
        let left = match pilot {
            Pilot::One => &mut self.player_1_ships_left,
            Pilot::Two => &mut self.player_2_ships_left,
        };
        *left = left.saturating_sub(1);
        *left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_ship_per_player() {
        let mut stats = MultiplayerStats::new(2);
        assert_eq!(stats.lose_ship(Pilot::Two), 1);
        assert_eq!(stats.ships_left(Pilot::One), 2);
        assert_eq!(stats.lose_ship(Pilot::Two), 0);
        assert_eq!(stats.lose_ship(Pilot::Two), 0);
    }
}
