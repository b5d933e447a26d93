//! Property-based tests for physics simulation using proptest.
//!
//! These tests verify physical invariants across a wide range of body layouts.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::{LivePartners, PartnerSet, pairwise_force, step_all};
use crate::prediction::{PathEnd, project_trajectories};
use crate::test_utils::{assertions, fixtures};
use crate::viewport::CameraView;

fn coordinate() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

fn mass() -> impl Strategy<Value = f64> {
    0.1f64..1000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The force on A from B is exactly the negation of the force on B from A.
    #[test]
    fn prop_pairwise_force_is_antisymmetric(
        ax in coordinate(), ay in coordinate(),
        bx in coordinate(), by in coordinate(),
        ma in mass(), mb in mass(),
        g in 0.01f64..100.0,
    ) {
        let a = DVec2::new(ax, ay);
        let b = DVec2::new(bx, by);

        let on_a = pairwise_force(a, ma, b, mb, g);
        let on_b = pairwise_force(b, mb, a, ma, g);

        prop_assert!((on_a + on_b).abs().max_element() <= 1e-12 * on_a.length().max(1e-300));
    }

    /// Simultaneous updates keep total momentum constant.
    #[test]
    fn prop_momentum_conserved(
        positions in prop::collection::vec((coordinate(), coordinate()), 2..6),
        masses in prop::collection::vec(mass(), 6),
        steps in 1usize..50,
    ) {
        let mut bodies: Vec<_> = positions
            .iter()
            .zip(&masses)
            .enumerate()
            .map(|(i, (&(x, y), &m))| fixtures::body(i as u32, DVec2::new(x, y), DVec2::ZERO, m))
            .collect();

        // Keep bodies apart so forces stay bounded.
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                prop_assume!(a.pos.distance(b.pos) > 0.5);
            }
        }

        let initial = assertions::total_momentum(&bodies);

        for _ in 0..steps {
            let partners = LivePartners(&bodies).attractors();
            let failures = step_all(&mut bodies, &partners, 1.0);
            prop_assert!(failures.is_empty());
        }

        // Compare against the momentum actually in play; the total is ~0.
        let in_play: f64 = bodies.iter().map(|b| (b.vel * b.mass()).length()).sum();
        let drift = (assertions::total_momentum(&bodies) - initial).length();
        prop_assert!(drift <= 1e-9 * in_play.max(1e-300), "momentum drift {}", drift);
    }

    /// A symmetric pair keeps its center of mass at the origin.
    #[test]
    fn prop_symmetric_pair_keeps_center_of_mass(
        separation in 0.5f64..20.0,
        speed in -0.05f64..0.05,
        m in mass(),
        steps in 1usize..200,
    ) {
        let mut bodies = fixtures::symmetric_pair(separation, speed, m);

        for _ in 0..steps {
            let partners = LivePartners(&bodies).attractors();
            step_all(&mut bodies, &partners, 1.0);
        }

        assertions::assert_vec_near(assertions::center_of_mass(&bodies), DVec2::ZERO, 1e-12);
    }

    /// A preview never has more segments than its budget.
    #[test]
    fn prop_projection_respects_budget(
        x in coordinate(), y in coordinate(),
        vx in -0.1f64..0.1, vy in -0.1f64..0.1,
        budget in 0usize..300,
    ) {
        let bodies = vec![
            fixtures::body(0, DVec2::ZERO, DVec2::ZERO, 1000.0),
            fixtures::body(1, DVec2::new(x, y), DVec2::new(vx, vy), 1.0),
        ];
        let bounds = CameraView::default().world_bounds();

        let paths = project_trajectories(&bodies, 1.0, &bounds, budget);

        prop_assert_eq!(paths.len(), 2);
        for path in &paths {
            prop_assert!(path.segments.len() <= budget);
            if path.end == PathEnd::Exhausted {
                prop_assert_eq!(path.segments.len(), budget);
            }
        }
    }

    /// A lone body at rest stops its preview after one step.
    #[test]
    fn prop_lone_resting_body_is_stationary(
        x in coordinate(), y in coordinate(),
        m in mass(),
        budget in 1usize..900,
    ) {
        let bodies = vec![fixtures::body(0, DVec2::new(x, y), DVec2::ZERO, m)];
        let bounds = CameraView::default().world_bounds();

        let paths = project_trajectories(&bodies, 1.0, &bounds, budget);

        prop_assert_eq!(paths[0].end, PathEnd::Stationary { steps: 1 });
        prop_assert_eq!(paths[0].segments.len(), 1);
    }

    /// Points inside the visible rectangle map inside the screen.
    #[test]
    fn prop_visible_points_map_on_screen(
        px in -2000.0f64..2000.0, py in -2000.0f64..2000.0,
        zoom in 1.0f64..1000.0,
        fx in 0.0f64..1.0, fy in 0.0f64..1.0,
    ) {
        let view = CameraView {
            position: DVec2::new(px, py),
            zoom,
            screen: DVec2::new(1280.0, 720.0),
        };
        let bounds = view.world_bounds();
        let point = bounds.min + (bounds.max - bounds.min) * DVec2::new(fx, fy);

        let screen = view.world_to_screen(point);
        let half = view.screen / 2.0 + DVec2::splat(1e-6);
        prop_assert!(screen.x.abs() <= half.x && screen.y.abs() <= half.y);
    }
}
