use bevy::prelude::*;

use super::controls::{
    TuningRegistry, TuningSource, TuningValue, commit_tuning_value, numeric_value,
};
use crate::engine::galaxy::lifecycle::Galaxy;
use crate::engine::galaxy::systems::RegenerateGalaxy;

/// Steps taken per press while Shift is held.
const COARSE_STEP_MULTIPLIER: f64 = 100.0;

/// Tab selects the next numeric control, Up/Down commit one step, R rebuilds
/// with unchanged parameters.
pub fn handle_tuning_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut registry: ResMut<TuningRegistry>,
    mut galaxy: ResMut<Galaxy>,
    mut regenerate: EventWriter<RegenerateGalaxy>,
) {
    if keyboard.just_pressed(KeyCode::Tab) {
        let bounds = registry.cycle();
        info!("Tuning control selected: {}", bounds.label);
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        regenerate.write(RegenerateGalaxy);
    }

    let direction = match (
        keyboard.just_pressed(KeyCode::ArrowUp),
        keyboard.just_pressed(KeyCode::ArrowDown),
    ) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => return,
    };

    let multiplier = if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        COARSE_STEP_MULTIPLIER
    } else {
        1.0
    };

    let bounds = registry.selected();
    let Some(current) = numeric_value(&galaxy.parameters, bounds.name) else {
        return;
    };
    let target = current + direction * bounds.step * multiplier;

    if let Err(err) = commit_tuning_value(
        &mut galaxy.parameters,
        bounds.name,
        &TuningValue::Number(target),
        TuningSource::Keyboard,
        &mut regenerate,
    ) {
        warn!("Keyboard tuning rejected: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use galaxy_generator::GenerationParameters;

    use crate::engine::galaxy::lifecycle::GalaxyLifecycle;

    fn keyboard_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<TuningRegistry>()
            .add_event::<RegenerateGalaxy>()
            .insert_resource(Galaxy(GalaxyLifecycle::new(
                GenerationParameters::default(),
                None,
            )))
            .add_systems(Update, handle_tuning_keyboard);
        app
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.reset_all();
        for key in keys {
            input.press(*key);
        }
        app.update();
    }

    #[test]
    fn arrow_keys_step_the_selected_control() {
        let mut app = keyboard_app();

        press(&mut app, &[KeyCode::Tab]);
        press(&mut app, &[KeyCode::Tab]);
        press(&mut app, &[KeyCode::ArrowUp]);

        let galaxy = app.world().resource::<Galaxy>();
        assert_eq!(galaxy.parameters.branches, 4);
        assert_eq!(app.world().resource::<Events<RegenerateGalaxy>>().len(), 1);
    }

    #[test]
    fn shift_takes_coarse_steps_within_bounds() {
        let mut app = keyboard_app();

        press(&mut app, &[KeyCode::ShiftLeft, KeyCode::ArrowDown]);
        assert_eq!(app.world().resource::<Galaxy>().parameters.count, 190_000);

        for _ in 0..30 {
            press(&mut app, &[KeyCode::ShiftLeft, KeyCode::ArrowDown]);
        }
        assert_eq!(app.world().resource::<Galaxy>().parameters.count, 100);
    }

    #[test]
    fn r_requests_rebuild_without_edits() {
        let mut app = keyboard_app();
        press(&mut app, &[KeyCode::KeyR]);

        assert_eq!(
            app.world().resource::<Galaxy>().parameters,
            GenerationParameters::default()
        );
        assert_eq!(app.world().resource::<Events<RegenerateGalaxy>>().len(), 1);
    }
}
