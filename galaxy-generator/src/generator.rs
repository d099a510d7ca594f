use rand::Rng;
use std::f32::consts::TAU;

use crate::buffers::PointCloudBuffers;
use crate::error::GenerationError;
use crate::parameters::GenerationParameters;

/// Arm angle for point `index`. Points are dealt round-robin across the
/// arms, so the angle cycles with period `branches`.
pub fn branch_angle(index: u32, branches: u32) -> f32 {
    (index % branches) as f32 / branches as f32 * TAU
}

/// Generate a galaxy using the thread-local RNG.
pub fn generate(params: &GenerationParameters) -> Result<PointCloudBuffers, GenerationError> {
    generate_with_rng(params, &mut rand::thread_rng())
}

/// Generate a galaxy drawing every random value from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    params: &GenerationParameters,
    rng: &mut R,
) -> Result<PointCloudBuffers, GenerationError> {
    params.validate()?;

    let mut buffers = PointCloudBuffers::with_capacity(params.count as usize);

    for i in 0..params.count {
        let radius = rng.r#gen::<f32>() * params.radius;
        let angle = branch_angle(i, params.branches);

        let jitter = [
            jitter_component(rng, params, radius),
            jitter_component(rng, params, radius),
            jitter_component(rng, params, radius),
        ];

        // Flat disk; jitter is applied by the vertex stage after the spin.
        let position = [angle.cos() * radius, 0.0, angle.sin() * radius];

        let colour = params
            .inside_colour
            .lerp(&params.outside_colour, radius / params.radius);

        let scale = rng.r#gen::<f32>();

        buffers.push(position, jitter, colour.to_array(), scale);
    }

    tracing::debug!(
        "Generated {} galaxy points across {} branches",
        buffers.point_count(),
        params.branches
    );

    Ok(buffers)
}

/// `u^power` biases magnitudes toward zero as the power grows; the sign draw
/// keeps the offset symmetric.
fn jitter_component<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParameters,
    radius: f32,
) -> f32 {
    let magnitude = rng.r#gen::<f32>().powf(params.randomness_power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * params.randomness * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-4;

    fn small_params() -> GenerationParameters {
        GenerationParameters {
            count: 1_000,
            radius: 5.0,
            branches: 3,
            randomness: 0.2,
            randomness_power: 3.0,
            ..GenerationParameters::default()
        }
    }

    #[test]
    fn buffer_lengths_follow_count() {
        let params = small_params();
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(buffers.positions.len(), 3 * 1_000);
        assert_eq!(buffers.randomness.len(), 3 * 1_000);
        assert_eq!(buffers.colours.len(), 3 * 1_000);
        assert_eq!(buffers.scales.len(), 1_000);
        assert!(buffers.is_consistent());
    }

    #[test]
    fn base_positions_stay_inside_the_disk() {
        let params = small_params();
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(2)).unwrap();

        for i in 0..buffers.point_count() {
            let [x, y, z] = buffers.position(i);
            let distance = (x * x + z * z).sqrt();
            assert_eq!(y, 0.0);
            assert!(distance >= 0.0 && distance <= params.radius + EPSILON);
        }
    }

    #[test]
    fn jitter_is_bounded_by_randomness_times_radius() {
        let params = small_params();
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(3)).unwrap();

        for i in 0..buffers.point_count() {
            let [x, _, z] = buffers.position(i);
            let limit = params.randomness * (x * x + z * z).sqrt() + EPSILON;
            for component in buffers.jitter(i) {
                assert!(component.abs() <= limit);
            }
        }
    }

    #[test]
    fn scales_are_unit_interval_draws() {
        let buffers = generate_with_rng(&small_params(), &mut StdRng::seed_from_u64(4)).unwrap();
        assert!(buffers.scales.iter().all(|s| (0.0..1.0).contains(s)));
    }

    #[test]
    fn branch_angle_cycles_with_period_branches() {
        let branches = 5;
        let angles: Vec<f32> = (0..50).map(|i| branch_angle(i, branches)).collect();

        let mut distinct = angles.clone();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap());
        distinct.dedup();
        assert_eq!(distinct.len(), branches as usize);

        for i in 0..(50 - branches as usize) {
            assert_eq!(angles[i], angles[i + branches as usize]);
        }
        assert_eq!(branch_angle(0, branches), 0.0);
    }

    #[test]
    fn colour_tracks_radius_between_endpoints() {
        let params = GenerationParameters {
            count: 500,
            radius: 10.0,
            inside_colour: Colour::BLACK,
            outside_colour: Colour::WHITE,
            ..GenerationParameters::default()
        };
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(5)).unwrap();

        let mut samples: Vec<(f32, f32)> = (0..buffers.point_count())
            .map(|i| {
                let [x, _, z] = buffers.position(i);
                ((x * x + z * z).sqrt(), buffers.colour(i)[0])
            })
            .collect();

        for (distance, red) in &samples {
            assert!((red - distance / params.radius).abs() < EPSILON);
        }

        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in samples.windows(2) {
            assert!(pair[1].1 + EPSILON >= pair[0].1);
        }
    }

    #[test]
    fn colour_endpoints_match_inside_and_outside() {
        let inside = Colour::from_hex("#ff6030").unwrap();
        let outside = Colour::from_hex("#1b3984").unwrap();
        assert_eq!(inside.lerp(&outside, 0.0), inside);
        let rim = inside.lerp(&outside, 1.0);
        assert!((rim.r - outside.r).abs() < EPSILON);
        assert!((rim.g - outside.g).abs() < EPSILON);
        assert!((rim.b - outside.b).abs() < EPSILON);
    }

    #[test]
    fn four_points_on_two_branches_without_randomness() {
        let params = GenerationParameters {
            count: 4,
            branches: 2,
            radius: 10.0,
            randomness: 0.0,
            inside_colour: Colour::BLACK,
            outside_colour: Colour::WHITE,
            ..GenerationParameters::default()
        };
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(6)).unwrap();

        assert_eq!(branch_angle(0, 2), 0.0);
        assert_eq!(branch_angle(2, 2), 0.0);
        assert!((branch_angle(1, 2) - PI).abs() < EPSILON);
        assert!((branch_angle(3, 2) - PI).abs() < EPSILON);

        // Branch 0 lies on +X, branch π on -X.
        for i in [0, 2] {
            let [x, _, z] = buffers.position(i);
            assert!(x >= 0.0);
            assert_eq!(z, 0.0);
        }
        for i in [1, 3] {
            let [x, _, z] = buffers.position(i);
            assert!(x <= 0.0);
            assert!(z.abs() < EPSILON);
        }

        assert!(buffers.randomness.iter().all(|v| *v == 0.0));

        for i in 0..4 {
            let [x, _, z] = buffers.position(i);
            let expected = (x * x + z * z).sqrt() / 10.0;
            for channel in buffers.colour(i) {
                assert!((channel - expected).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_galaxy() {
        let params = small_params();
        let a = generate_with_rng(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        let c = generate_with_rng(&params, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let params = GenerationParameters {
            count: 0,
            ..GenerationParameters::default()
        };
        assert_eq!(generate(&params), Err(GenerationError::EmptyCount));
    }
}
