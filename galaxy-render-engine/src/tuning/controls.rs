use bevy::prelude::*;
use constants::tuning::{COLOUR_CONTROLS, NUMERIC_CONTROLS, TuningBounds, find_numeric_bounds};
use galaxy_generator::{Colour, ColourParseError, GenerationParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::galaxy::systems::RegenerateGalaxy;

/// Value carried by a control: a number for sliders, a `#rrggbb` string for
/// colour pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TuningValue {
    Number(f64),
    Colour(String),
}

/// One entry on the debug panel. Colour controls carry no bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningControl {
    pub name: &'static str,
    pub label: &'static str,
    pub value: TuningValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("Unknown tuning control: {0}")]
    UnknownControl(String),

    #[error("Control {name} expects a {expected} value")]
    WrongKind { name: String, expected: &'static str },

    #[error("Invalid colour: {0}")]
    InvalidColour(#[from] ColourParseError),

    #[error("Value for {0} is not a finite number")]
    NotFinite(String),
}

/// Where a commit came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningSource {
    Rpc,
    Keyboard,
}

/// Controls in panel order with their current values.
pub fn controls_for(params: &GenerationParameters) -> Vec<TuningControl> {
    let numeric = NUMERIC_CONTROLS.iter().filter_map(|bounds| {
        numeric_value(params, bounds.name).map(|value| TuningControl {
            name: bounds.name,
            label: bounds.label,
            value: TuningValue::Number(value),
            min: Some(bounds.min),
            max: Some(bounds.max),
            step: Some(bounds.step),
        })
    });

    let colours = COLOUR_CONTROLS.iter().filter_map(|&(name, label)| {
        colour_value(params, name).map(|colour| TuningControl {
            name,
            label,
            value: TuningValue::Colour(colour.to_hex()),
            min: None,
            max: None,
            step: None,
        })
    });

    numeric.chain(colours).collect()
}

/// Current value of a numeric control, `None` for unknown names.
pub fn numeric_value(params: &GenerationParameters, name: &str) -> Option<f64> {
    match name {
        "count" => Some(f64::from(params.count)),
        "radius" => Some(f64::from(params.radius)),
        "branches" => Some(f64::from(params.branches)),
        "randomness" => Some(f64::from(params.randomness)),
        "randomness_power" => Some(f64::from(params.randomness_power)),
        _ => None,
    }
}

fn colour_value(params: &GenerationParameters, name: &str) -> Option<Colour> {
    match name {
        "inside_colour" => Some(params.inside_colour),
        "outside_colour" => Some(params.outside_colour),
        _ => None,
    }
}

/// Write `value` into the parameter called `name`.
///
/// Numbers are clamped into the control's bounds and the integer parameters
/// are rounded, so the stored parameters always validate. Returns the value
/// actually stored.
pub fn apply_tuning_value(
    params: &mut GenerationParameters,
    name: &str,
    value: &TuningValue,
) -> Result<TuningValue, TuningError> {
    if let Some(bounds) = find_numeric_bounds(name) {
        let TuningValue::Number(raw) = value else {
            return Err(TuningError::WrongKind {
                name: name.to_string(),
                expected: "number",
            });
        };
        if !raw.is_finite() {
            return Err(TuningError::NotFinite(name.to_string()));
        }
        let clamped = raw.clamp(bounds.min, bounds.max);
        store_numeric(params, bounds, clamped);
        // Read back so the caller sees rounding and f32 narrowing.
        let stored = numeric_value(params, name).unwrap_or(clamped);
        return Ok(TuningValue::Number(stored));
    }

    let target = match name {
        "inside_colour" => &mut params.inside_colour,
        "outside_colour" => &mut params.outside_colour,
        _ => return Err(TuningError::UnknownControl(name.to_string())),
    };
    let TuningValue::Colour(hex) = value else {
        return Err(TuningError::WrongKind {
            name: name.to_string(),
            expected: "colour",
        });
    };
    *target = Colour::from_hex(hex)?;
    Ok(TuningValue::Colour(target.to_hex()))
}

fn store_numeric(params: &mut GenerationParameters, bounds: &TuningBounds, value: f64) {
    match bounds.name {
        "count" => params.count = value.round() as u32,
        "radius" => params.radius = value as f32,
        "branches" => params.branches = value.round() as u32,
        "randomness" => params.randomness = value as f32,
        "randomness_power" => params.randomness_power = value as f32,
        _ => {}
    }
}

/// Apply a panel edit and request a rebuild from the new parameters.
pub fn commit_tuning_value(
    params: &mut GenerationParameters,
    name: &str,
    value: &TuningValue,
    source: TuningSource,
    regenerate: &mut EventWriter<RegenerateGalaxy>,
) -> Result<TuningValue, TuningError> {
    let applied = apply_tuning_value(params, name, value)?;
    info!("Tuning {} set to {:?} via {:?}", name, applied, source);
    regenerate.write(RegenerateGalaxy);
    Ok(applied)
}

/// Keyboard selection over the numeric controls.
#[derive(Resource, Debug, Default)]
pub struct TuningRegistry {
    selected: usize,
}

impl TuningRegistry {
    pub fn selected(&self) -> &'static TuningBounds {
        &NUMERIC_CONTROLS[self.selected % NUMERIC_CONTROLS.len()]
    }

    /// Move the selection to the next numeric control, wrapping around.
    pub fn cycle(&mut self) -> &'static TuningBounds {
        self.selected = (self.selected + 1) % NUMERIC_CONTROLS.len();
        self.selected()
    }
}
