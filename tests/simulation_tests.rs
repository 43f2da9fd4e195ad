// Host-side tests for the per-frame simulator.
mod common;

use common::core::config::BackgroundConfig;
use common::core::constants::*;
use common::core::controller::PointerInput;
use common::core::field::{drift_and_reflect, Motion, ParticleField};
use common::core::mask::TextMask;
use common::core::sim::*;
use common::seeded_rng;
use glam::{Vec2, Vec3};

fn hovered() -> PointerInput {
    PointerInput {
        x: 0.0,
        y: 0.0,
        hovered: true,
    }
}

fn idle() -> PointerInput {
    PointerInput::default()
}

fn text_sim() -> Simulation {
    let mask = TextMask {
        points: (0..40)
            .map(|i| Vec2::new((i % 10) as f32 * 7.0 - 35.0, (i / 10) as f32 * 7.0))
            .collect(),
    };
    let config = BackgroundConfig::text("HI");
    Simulation::from_config(&config, Some(mask), &mut seeded_rng())
}

fn assert_all_finite(sim: &Simulation) {
    for (i, p) in sim.field.positions.iter().enumerate() {
        assert!(p.is_finite(), "point {i} is not finite: {p:?}");
    }
    for f in sim.segments.as_floats() {
        assert!(f.is_finite());
    }
}

#[test]
fn uniform_positions_stay_finite_over_many_frames() {
    let config = BackgroundConfig::uniform();
    let mut sim = Simulation::from_config(&config, None, &mut seeded_rng());
    let input = PointerInput {
        x: 0.7,
        y: -0.4,
        hovered: false,
    };
    for _ in 0..1_000 {
        sim.step(&input);
    }
    assert_all_finite(&sim);
    assert_eq!(sim.field.len(), UNIFORM_PARTICLE_COUNT);
}

#[test]
fn text_positions_stay_finite_while_hover_toggles() {
    let mut sim = text_sim();
    for frame in 0..720 {
        let input = if (frame / 90) % 2 == 0 { hovered() } else { idle() };
        sim.step(&input);
        assert!((0.0..=1.0).contains(&sim.morph_progress));
    }
    assert_all_finite(&sim);
}

#[test]
fn uniform_points_stay_near_the_domain() {
    let config = BackgroundConfig {
        particle_count: 40,
        ..BackgroundConfig::uniform()
    };
    let mut sim = Simulation::from_config(&config, None, &mut seeded_rng());
    for _ in 0..10_000 {
        sim.step(&idle());
    }
    // Reflection can overshoot the boundary by at most one velocity step
    let limit = DOMAIN_HALF_EXTENT + 2.0 * VELOCITY_HALF_RANGE;
    for p in &sim.field.positions {
        assert!(p.abs().max_element() <= limit, "escaped: {p:?}");
    }
}

#[test]
fn reflection_turns_velocity_around_past_the_boundary() {
    let bound = 300.0;

    // Starting just inside: drifts out, then flips and stays inward
    let mut p = Vec3::new(299.0, -299.0, 0.0);
    let mut v = Vec3::new(0.5, -0.5, 0.1);
    let mut flipped_at = None;
    for step in 0..10 {
        drift_and_reflect(&mut p, &mut v, bound);
        if flipped_at.is_none() && p.x > bound {
            flipped_at = Some(step);
        }
        if flipped_at.is_some() {
            assert!(v.x < 0.0, "x velocity should point inward at step {step}");
            assert!(v.y > 0.0, "y velocity should point inward at step {step}");
        } else {
            assert!(v.x > 0.0, "no flip expected while inside (step {step})");
        }
    }
    assert_eq!(flipped_at, Some(2));
    assert!((v.z - 0.1).abs() < 1e-6, "untouched axis keeps its velocity");

    // Starting just outside: the very first update flips it
    let mut p = Vec3::new(301.0, 0.0, 0.0);
    let mut v = Vec3::new(0.5, 0.0, 0.0);
    drift_and_reflect(&mut p, &mut v, bound);
    assert_eq!(v.x, -0.5);
    for _ in 0..10 {
        drift_and_reflect(&mut p, &mut v, bound);
    }
    assert!(p.x < 300.0, "point heads back into the domain");
    assert_eq!(v.x, -0.5);
}

#[test]
fn morph_progress_reaches_one_after_34_hovered_ticks() {
    let mut progress = 0.0;
    for tick in 1..=34 {
        progress = advance_morph(progress, true);
        if tick < 34 {
            assert!(progress < 1.0, "full too early at tick {tick}");
        }
    }
    assert_eq!(progress, 1.0);
    for _ in 0..100 {
        progress = advance_morph(progress, true);
        assert_eq!(progress, 1.0);
    }
}

#[test]
fn morph_progress_reaches_zero_after_50_idle_ticks() {
    let mut progress = 1.0;
    for tick in 1..=50 {
        progress = advance_morph(progress, false);
        if tick < 50 {
            assert!(progress > 0.0, "empty too early at tick {tick}");
        }
    }
    assert_eq!(progress, 0.0);
    for _ in 0..100 {
        progress = advance_morph(progress, false);
        assert_eq!(progress, 0.0);
    }
}

#[test]
fn morph_progress_is_monotone_under_constant_input() {
    let mut progress = 0.5;
    let mut prev = progress;
    for _ in 0..40 {
        progress = advance_morph(progress, true);
        assert!(progress >= prev);
        prev = progress;
    }
    for _ in 0..60 {
        progress = advance_morph(progress, false);
        assert!(progress <= prev);
        prev = progress;
    }
}

#[test]
fn simulation_morph_follows_hover() {
    let mut sim = text_sim();
    for _ in 0..34 {
        sim.step(&hovered());
    }
    assert_eq!(sim.morph_progress, 1.0);
    for _ in 0..50 {
        sim.step(&idle());
    }
    assert_eq!(sim.morph_progress, 0.0);
}

#[test]
fn hovered_text_points_converge_on_assembled_targets() {
    let mut sim = text_sim();
    for _ in 0..600 {
        sim.step(&hovered());
    }
    let Motion::Morph { assembled, .. } = &sim.field.motion else {
        panic!("text strategy should produce a morph field");
    };
    for (p, a) in sim.field.positions.iter().zip(assembled.iter()) {
        assert!(p.distance(*a) < 0.5, "{p:?} did not settle on {a:?}");
    }
}

#[test]
fn scattered_targets_freeze_while_hovered_and_drift_when_idle() {
    let mut sim = text_sim();
    let snapshot = |sim: &Simulation| match &sim.field.motion {
        Motion::Morph { scattered, .. } => scattered.clone(),
        Motion::Drift { .. } => unreachable!(),
    };
    let before = snapshot(&sim);
    for _ in 0..10 {
        sim.step(&hovered());
    }
    assert_eq!(before, snapshot(&sim));
    for _ in 0..10 {
        sim.step(&idle());
    }
    assert_ne!(before, snapshot(&sim));
}

#[test]
fn text_field_pads_to_minimum_with_random_targets() {
    let mask = TextMask {
        points: vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.0)],
    };
    let field = ParticleField::from_text_mask(mask, TEXT_MIN_PARTICLES, &mut seeded_rng());
    assert_eq!(field.len(), TEXT_MIN_PARTICLES);
    let Motion::Morph {
        assembled,
        scattered,
        drift,
    } = &field.motion
    else {
        panic!("expected morph motion");
    };
    assert_eq!(assembled[0], Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(assembled[1], Vec3::new(-3.0, 4.0, 0.0));
    let at_origin = assembled[2..].iter().filter(|a| **a == Vec3::ZERO).count();
    assert_eq!(at_origin, 0, "padding points must not collapse to the origin");
    assert_eq!(scattered.len(), field.len());
    assert_eq!(drift.len(), field.len());
    assert_eq!(&field.positions, scattered, "display starts at the scattered cloud");
}

#[test]
fn oversized_masks_are_capped() {
    let mask = TextMask {
        points: (0..1000).map(|i| Vec2::new(i as f32, 0.0)).collect(),
    };
    let field = ParticleField::from_text_mask(mask, TEXT_MIN_PARTICLES, &mut seeded_rng());
    assert_eq!(field.len(), MAX_PARTICLES);
}

#[test]
fn point_count_is_fixed_for_the_scene() {
    let config = BackgroundConfig {
        particle_count: 17,
        ..BackgroundConfig::uniform()
    };
    let mut sim = Simulation::from_config(&config, None, &mut seeded_rng());
    for _ in 0..100 {
        sim.step(&idle());
        assert_eq!(sim.field.len(), 17);
    }
    assert_eq!(sim.frames(), 100);
}

#[test]
fn hovered_text_state_halves_the_pair_sampling() {
    let field = ParticleField {
        positions: vec![Vec3::ZERO; 10],
        motion: Motion::Morph {
            scattered: vec![Vec3::ZERO; 10],
            assembled: vec![Vec3::ZERO; 10],
            drift: vec![Vec3::ZERO; 10],
        },
    };
    let config = BackgroundConfig::text("X");
    let mut sim = Simulation::new(field.clone(), &config);
    sim.step(&idle());
    assert_eq!(sim.segments.segment_count(), 45);

    let mut sim = Simulation::new(field, &config);
    sim.step(&hovered());
    // Stride 2 visits the even indices only: C(5, 2)
    assert_eq!(sim.segments.segment_count(), 10);
}

#[test]
fn rotation_eases_toward_pointer_target() {
    let config = BackgroundConfig {
        particle_count: 8,
        ..BackgroundConfig::uniform()
    };
    let mut sim = Simulation::from_config(&config, None, &mut seeded_rng());
    let input = PointerInput {
        x: 1.0,
        y: -1.0,
        hovered: false,
    };
    sim.step(&input);
    let expected_x = -UNIFORM_POINTER_GAIN * ROTATION_EASE;
    let expected_y = UNIFORM_POINTER_GAIN * ROTATION_EASE + UNIFORM_AUTO_ROTATE;
    assert!((sim.rotation.x - expected_x).abs() < 1e-6);
    assert!((sim.rotation.y - expected_y).abs() < 1e-6);

    for _ in 0..2_000 {
        sim.step(&input);
    }
    // Auto-rotation settles at a constant offset from the target
    let offset = UNIFORM_AUTO_ROTATE / ROTATION_EASE;
    assert!((sim.rotation.x + UNIFORM_POINTER_GAIN).abs() < 1e-3);
    assert!((sim.rotation.y - (UNIFORM_POINTER_GAIN + offset)).abs() < 1e-3);
}

#[test]
fn hovered_text_scene_stops_auto_rotating() {
    let mut sim = text_sim();
    for _ in 0..10 {
        sim.step(&hovered());
    }
    assert_eq!(sim.rotation.x, 0.0);
    assert_eq!(sim.rotation.y, 0.0);
}

#[test]
fn coincident_still_points_connect_fully_through_a_frame() {
    let field = ParticleField {
        positions: vec![Vec3::new(12.0, -7.0, 3.0); 400],
        motion: Motion::Drift {
            velocities: vec![Vec3::ZERO; 400],
        },
    };
    let config = BackgroundConfig {
        particle_count: 400,
        ..BackgroundConfig::uniform()
    };
    let mut sim = Simulation::new(field, &config);
    let reserved = sim.segments.capacity_floats();
    for _ in 0..2 {
        sim.step(&idle());
        assert_eq!(sim.segments.as_floats().len(), 3 * 400 * 399);
        assert_eq!(sim.segments.capacity_floats(), reserved);
    }
    assert!(sim
        .field
        .positions
        .iter()
        .all(|p| *p == Vec3::new(12.0, -7.0, 3.0)));
}
