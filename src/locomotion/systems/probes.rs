//! Locomotion domain: ground and wall probes against the physics world.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::ViewCamera;
use crate::locomotion::controller::ViewBasis;
use crate::locomotion::{GameLayer, LocomotionTuning, Player, SurfaceContacts};

/// Sphere-overlap the ground and raycast both lateral directions, writing
/// the results into `SurfaceContacts`. A probe with no hit reports no
/// contact, so the controller falls open to airborne.
pub(crate) fn probe_contacts(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    camera: Query<&Transform, (With<ViewCamera>, Without<Player>)>,
    mut query: Query<(&Transform, &mut SurfaceContacts), With<Player>>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Terrain);
    let Ok(cam) = camera.single() else {
        return;
    };
    let view = ViewBasis::from_transform(cam);

    for (transform, mut contacts) in &mut query {
        let was_grounded = contacts.grounded;

        let anchor = transform.translation + tuning.ground_anchor();
        let overlaps = spatial_query.shape_intersections(
            &Collider::sphere(tuning.ground_check_distance),
            anchor,
            Quat::IDENTITY,
            &filter,
        );
        contacts.grounded = !overlaps.is_empty();

        if contacts.grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={} at y={:.2}",
                contacts.grounded, transform.translation.y
            );
        }

        let origin = transform.translation;
        contacts.wall_left = cast_wall(
            &spatial_query,
            origin,
            -view.right,
            tuning.wall_check_distance,
            &filter,
        );
        contacts.wall_right = cast_wall(
            &spatial_query,
            origin,
            view.right,
            tuning.wall_check_distance,
            &filter,
        );
    }
}

fn cast_wall(
    spatial_query: &SpatialQuery,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    filter: &SpatialQueryFilter,
) -> Option<Vec3> {
    let direction = Dir3::new(direction).ok()?;
    spatial_query
        .cast_ray(origin, direction, max_distance, true, filter)
        .map(|hit| hit.normal)
}
