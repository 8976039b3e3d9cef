pub mod limits;

pub use limits::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six modes offered in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Movement {
    /// Wrist tilted toward the thumb side, negative angles
    RadialDeviation,
    /// Wrist tilted toward the little-finger side, positive angles
    UlnarDeviation,
    Flexion,
    Extension,
    /// Circular sweep of the hand, drawn as a planar circle
    Circumduction,
    /// Free rotation from three Euler angles
    GeneralRotation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown movement: {0}")]
pub struct UnknownMovement(pub String);

impl Movement {
    /// Sidebar order
    pub const ALL: [Movement; 6] = [
        Movement::RadialDeviation,
        Movement::UlnarDeviation,
        Movement::Flexion,
        Movement::Extension,
        Movement::Circumduction,
        Movement::GeneralRotation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Movement::RadialDeviation => "Radial deviation",
            Movement::UlnarDeviation => "Ulnar deviation",
            Movement::Flexion => "Flexion",
            Movement::Extension => "Extension",
            Movement::Circumduction => "Circumduction",
            Movement::GeneralRotation => "General SO(3)",
        }
    }

    /// Machine name, also accepted by `FromStr`
    pub fn slug(&self) -> &'static str {
        match self {
            Movement::RadialDeviation => "radial-deviation",
            Movement::UlnarDeviation => "ulnar-deviation",
            Movement::Flexion => "flexion",
            Movement::Extension => "extension",
            Movement::Circumduction => "circumduction",
            Movement::GeneralRotation => "general-rotation",
        }
    }

    /// Single-angle movements shown as an SO(2) rotation
    pub fn is_planar(&self) -> bool {
        matches!(
            self,
            Movement::RadialDeviation
                | Movement::UlnarDeviation
                | Movement::Flexion
                | Movement::Extension
        )
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Movement {
    type Err = UnknownMovement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Movement::ALL
            .into_iter()
            .find(|m| m.slug() == normalized || (normalized == "so3" && *m == Movement::GeneralRotation))
            .ok_or_else(|| UnknownMovement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_modes() {
        let planar: Vec<_> = Movement::ALL.into_iter().filter(Movement::is_planar).collect();
        assert_eq!(
            planar,
            vec![
                Movement::RadialDeviation,
                Movement::UlnarDeviation,
                Movement::Flexion,
                Movement::Extension,
            ]
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("radial-deviation".parse(), Ok(Movement::RadialDeviation));
        assert_eq!("Ulnar Deviation".parse(), Ok(Movement::UlnarDeviation));
        assert_eq!("general_rotation".parse(), Ok(Movement::GeneralRotation));
        assert_eq!("SO3".parse(), Ok(Movement::GeneralRotation));
        assert_eq!(
            "pronation".parse::<Movement>(),
            Err(UnknownMovement("pronation".into()))
        );
    }

    #[test]
    fn test_slug_round_trip() {
        for movement in Movement::ALL {
            assert_eq!(movement.slug().parse(), Ok(movement));
        }
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Movement::Circumduction).unwrap();
        assert_eq!(json, "\"circumduction\"");
    }
}
