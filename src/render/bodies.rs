//! Body rendering.
//!
//! Each live body gets a circle mesh entity. The entities are spawned,
//! moved and despawned to follow the simulation's body list.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::body::Body;
use crate::render::z_layers;
use crate::simulation::Simulation;
use crate::types::{BodyColor, BodyId};
use crate::viewport::CameraView;

/// Component marking the render entity of a body.
#[derive(Component, Debug)]
pub struct BodyVisual {
    pub id: BodyId,
    /// Color the current material was built with.
    pub color: BodyColor,
}

/// Transform of a body's unit circle mesh for the given view.
///
/// The body's radius is a diameter-like size: on screen the circle spans
/// `radius * zoom` pixels across.
pub fn body_transform(body: &Body, view: &CameraView) -> Transform {
    let screen = view.world_to_screen(body.pos);
    let scale = (body.radius * view.zoom * 0.5) as f32;

    Transform::from_xyz(screen.x as f32, screen.y as f32, z_layers::BODIES)
        .with_scale(Vec3::new(scale, scale, 1.0))
}

/// Spawn, update and despawn body entities to match the simulation.
pub fn sync_body_visuals(
    mut commands: Commands,
    simulation: Res<Simulation>,
    view: Res<CameraView>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(
        Entity,
        &mut BodyVisual,
        &mut Transform,
        &mut MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let mut seen = HashSet::new();

    for (entity, mut visual, mut transform, mut material) in query.iter_mut() {
        let Some(body) = simulation.body(visual.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        seen.insert(visual.id);

        *transform = body_transform(body, &view);
        if visual.color != body.color {
            visual.color = body.color;
            *material = MeshMaterial2d(materials.add(Color::from(body.color)));
        }
    }

    for body in simulation.bodies() {
        if seen.contains(&body.id()) {
            continue;
        }

        commands.spawn((
            Mesh2d(meshes.add(Circle::new(1.0))),
            MeshMaterial2d(materials.add(Color::from(body.color))),
            body_transform(body, &view),
            BodyVisual {
                id: body.id(),
                color: body.color,
            },
        ));
        debug!("Spawned visual for {}", body.id());
    }
}
