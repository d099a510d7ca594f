use constants::galaxy::*;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::GenerationError;

/// Tunable inputs of the galaxy generator.
///
/// `size` and `spin` are carried for configuration compatibility but are not
/// read by [`crate::generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_colour: Colour,
    pub outside_colour: Colour,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            branches: DEFAULT_BRANCHES,
            spin: DEFAULT_SPIN,
            randomness: DEFAULT_RANDOMNESS,
            randomness_power: DEFAULT_RANDOMNESS_POWER,
            // Constants are valid hex; fall back to black rather than panic.
            inside_colour: Colour::from_hex(DEFAULT_INSIDE_COLOUR).unwrap_or(Colour::BLACK),
            outside_colour: Colour::from_hex(DEFAULT_OUTSIDE_COLOUR).unwrap_or(Colour::BLACK),
        }
    }
}

impl GenerationParameters {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.count == 0 {
            return Err(GenerationError::EmptyCount);
        }
        if self.branches == 0 {
            return Err(GenerationError::NoBranches);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GenerationError::InvalidRadius(self.radius));
        }
        if !self.randomness.is_finite() || self.randomness < 0.0 {
            return Err(GenerationError::InvalidRandomness(self.randomness));
        }
        if !self.randomness_power.is_finite() || self.randomness_power < 0.0 {
            return Err(GenerationError::InvalidRandomnessPower(
                self.randomness_power,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = GenerationParameters::default();
        assert_eq!(params.count, 200_000);
        assert_eq!(params.branches, 3);
        assert_eq!(params.inside_colour.to_hex(), "#ff6030");
        assert_eq!(params.outside_colour.to_hex(), "#1b3984");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_inputs() {
        let base = GenerationParameters::default();

        let params = GenerationParameters { count: 0, ..base.clone() };
        assert_eq!(params.validate(), Err(GenerationError::EmptyCount));

        let params = GenerationParameters { branches: 0, ..base.clone() };
        assert_eq!(params.validate(), Err(GenerationError::NoBranches));

        let params = GenerationParameters { radius: 0.0, ..base.clone() };
        assert_eq!(params.validate(), Err(GenerationError::InvalidRadius(0.0)));

        let params = GenerationParameters { radius: f32::NAN, ..base.clone() };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::InvalidRadius(_))
        ));

        let params = GenerationParameters { randomness: -1.0, ..base.clone() };
        assert_eq!(
            params.validate(),
            Err(GenerationError::InvalidRandomness(-1.0))
        );

        let params = GenerationParameters { randomness_power: f32::INFINITY, ..base };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::InvalidRandomnessPower(_))
        ));
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let params: GenerationParameters =
            serde_json::from_str(r##"{ "count": 1000, "inside_colour": "#000000" }"##).unwrap();
        assert_eq!(params.count, 1000);
        assert_eq!(params.inside_colour, Colour::BLACK);
        assert_eq!(params.radius, GenerationParameters::default().radius);
    }
}
