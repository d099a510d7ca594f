//! Live tuning of the generation parameters.
//!
//! Every tunable parameter is described by a [`controls::TuningControl`].
//! Committing a value clamps it into the control's bounds, writes it into the
//! galaxy's parameters and requests a full regeneration. The web panel commits
//! through the RPC bridge, the keyboard frontend through [`keyboard`].

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::galaxy::lifecycle::Galaxy;

pub mod controls;
pub mod keyboard;

use controls::TuningRegistry;
use keyboard::handle_tuning_keyboard;

pub struct TuningPlugin;

impl Plugin for TuningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningRegistry>().add_systems(
            Update,
            handle_tuning_keyboard
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<Galaxy>),
        );
    }
}
