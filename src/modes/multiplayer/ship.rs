use sdl2::pixels::Color;

/// Hull picked on the setup prompts. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStyle {
    Falcon,
    Viper,
    Comet,
}

impl ShipStyle {
    /// Menu order
    pub const ALL: [ShipStyle; 3] = [ShipStyle::Falcon, ShipStyle::Viper, ShipStyle::Comet];

    pub fn from_index(index: usize) -> Option<ShipStyle> {
        ShipStyle::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipStyle::Falcon => "FALCON",
            ShipStyle::Viper => "VIPER",
            ShipStyle::Comet => "COMET",
        }
    }

    pub fn texture(self) -> &'static str {
        match self {
            ShipStyle::Falcon => "ship_falcon",
            ShipStyle::Viper => "ship_viper",
            ShipStyle::Comet => "ship_comet",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ShipStyle::Falcon => Color::RGB(210, 210, 225),
            ShipStyle::Viper => Color::RGB(90, 220, 110),
            ShipStyle::Comet => Color::RGB(250, 160, 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(ShipStyle::from_index(1), Some(ShipStyle::Viper));
        assert_eq!(ShipStyle::from_index(3), None);
        assert_eq!(ShipStyle::Comet.texture(), "ship_comet");
    }
}
