use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofDirectionCode {
    South,
    Southwest,
    Southeast,
    East,
    West,
    North,
}

impl RoofDirectionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::South => "S",
            Self::Southwest => "SW",
            Self::Southeast => "SE",
            Self::East => "E",
            Self::West => "W",
            Self::North => "N",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::South),
            "SW" => Some(Self::Southwest),
            "SE" => Some(Self::Southeast),
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            "N" => Some(Self::North),
            _ => None,
        }
    }
}

/// Roof orientation with its production multiplier relative to a
/// true-south installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoofDirectionProfile {
    pub id: i32,
    pub code: RoofDirectionCode,
    pub name: String,
    /// In (0, 1]; 1.0 is due south.
    pub efficiency_multiplier: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn as_str_and_parse_round_trip() {
        for code in [
            RoofDirectionCode::South,
            RoofDirectionCode::Southwest,
            RoofDirectionCode::Southeast,
            RoofDirectionCode::East,
            RoofDirectionCode::West,
            RoofDirectionCode::North,
        ] {
            assert_eq!(RoofDirectionCode::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(RoofDirectionCode::parse("NE"), None);
        assert_eq!(RoofDirectionCode::parse(""), None);
        assert_eq!(RoofDirectionCode::parse("south"), None);
    }
}
