/// Point size in pixels before the display scale factor is applied
pub const BASE_POINT_SIZE: f32 = 30.0;

/// Vertices emitted per point (two triangles forming a camera-facing quad)
pub const VERTICES_PER_POINT: usize = 6;

/// Initial camera placement, looking at the origin
pub const CAMERA_START: [f32; 3] = [3.0, 3.0, 3.0];

/// Orbit camera distance limits
pub const CAMERA_MIN_DISTANCE: f32 = 0.5;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;

/// Seconds between FPS notifications to the web frontend
pub const FPS_NOTIFY_INTERVAL: f32 = 0.5;

/// Relative path of the galaxy configuration asset
pub const GALAXY_CONFIG_PATH: &str = "galaxy.json";

/// Relative path of the galaxy shader
pub const GALAXY_SHADER_PATH: &str = "shaders/galaxy.wgsl";
