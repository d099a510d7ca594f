/// Bounds for a numeric control on the debug panel
pub struct TuningBounds {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const COUNT_BOUNDS: TuningBounds = TuningBounds {
    name: "count",
    label: "particle count",
    min: 100.0,
    max: 1_000_000.0,
    step: 100.0,
};

pub const RADIUS_BOUNDS: TuningBounds = TuningBounds {
    name: "radius",
    label: "galaxy radius",
    min: 0.01,
    max: 20.0,
    step: 0.01,
};

pub const BRANCHES_BOUNDS: TuningBounds = TuningBounds {
    name: "branches",
    label: "galaxy branches",
    min: 2.0,
    max: 20.0,
    step: 1.0,
};

pub const RANDOMNESS_BOUNDS: TuningBounds = TuningBounds {
    name: "randomness",
    label: "galaxy randomness",
    min: 0.0,
    max: 2.0,
    step: 0.001,
};

pub const RANDOMNESS_POWER_BOUNDS: TuningBounds = TuningBounds {
    name: "randomness_power",
    label: "randomness power",
    min: 1.0,
    max: 10.0,
    step: 0.001,
};

/// Numeric controls in panel order
pub const NUMERIC_CONTROLS: &[TuningBounds] = &[
    COUNT_BOUNDS,
    RADIUS_BOUNDS,
    BRANCHES_BOUNDS,
    RANDOMNESS_BOUNDS,
    RANDOMNESS_POWER_BOUNDS,
];

/// Colour controls as (name, label) in panel order
pub const COLOUR_CONTROLS: &[(&str, &str)] = &[
    ("inside_colour", "inside color"),
    ("outside_colour", "outside color"),
];

pub fn find_numeric_bounds(name: &str) -> Option<&'static TuningBounds> {
    NUMERIC_CONTROLS.iter().find(|b| b.name == name)
}
