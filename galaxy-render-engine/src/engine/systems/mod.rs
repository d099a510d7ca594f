/// Frame rate reporting to the web frontend and the native overlay.
pub mod fps_tracking;
