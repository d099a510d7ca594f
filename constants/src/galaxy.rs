/// Default number of points in the galaxy
pub const DEFAULT_COUNT: u32 = 200_000;

/// Unused rendering hint kept for parity with saved configurations
pub const DEFAULT_SIZE: f32 = 0.005;

/// Default disk radius in world units
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Default number of spiral arms
pub const DEFAULT_BRANCHES: u32 = 3;

/// Reserved, not applied by the generator
pub const DEFAULT_SPIN: f32 = 1.0;

/// Jitter magnitude as a fraction of each point's radius
pub const DEFAULT_RANDOMNESS: f32 = 0.2;

/// Jitter concentration exponent (higher pulls jitter toward zero)
pub const DEFAULT_RANDOMNESS_POWER: f32 = 3.0;

/// Colour at the galaxy centre (sRGB hex)
pub const DEFAULT_INSIDE_COLOUR: &str = "#ff6030";

/// Colour at the galaxy rim (sRGB hex)
pub const DEFAULT_OUTSIDE_COLOUR: &str = "#1b3984";
