// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted camera tour through a generated house

use crate::config::PlannerConfig;
use crate::types::{Dimensions, Room, RoomCategory, TourWaypoint, Vec3};
use nalgebra::{Point3, Vector3};

pub const EXTERIOR_VIEW: &str = "Exterior View";
pub const FINAL_VIEW: &str = "Final View";

/// Height of the opening shot above the roof line
const EXTERIOR_RISE: f64 = 8.0;
/// Height of the closing shot above the roof line
const FINAL_RISE: f64 = 12.0;

/// Build the tour using the default dwell times
pub fn generate_tour_waypoints(rooms: &[Room], dimensions: &Dimensions) -> Vec<TourWaypoint> {
    generate_tour_waypoints_with_config(rooms, dimensions, &PlannerConfig::default())
}

/// Build the tour: an exterior shot, one stop per non-hallway room in room
/// order, and a closing exterior shot
pub fn generate_tour_waypoints_with_config(
    rooms: &[Room],
    dimensions: &Dimensions,
    config: &PlannerConfig,
) -> Vec<TourWaypoint> {
    let center = house_center(dimensions);

    let mut waypoints = Vec::with_capacity(rooms.len() + 2);

    let opening = center
        + Vector3::new(0.0, dimensions.height / 2.0 + EXTERIOR_RISE, -1.5 * dimensions.length);
    waypoints.push(TourWaypoint {
        position: Vec3::from_point(&opening),
        look_at: Vec3::from_point(&center),
        duration: config.exterior_dwell,
        room_name: EXTERIOR_VIEW.to_string(),
    });

    // Interior stops look at their own position; the camera does not pan
    waypoints.extend(
        rooms
            .iter()
            .filter(|room| room.category != RoomCategory::Hallway)
            .map(|room| {
                let stop = room.center();
                TourWaypoint {
                    position: stop,
                    look_at: stop,
                    duration: config.interior_dwell,
                    room_name: room.name.clone(),
                }
            }),
    );

    let closing = center
        + Vector3::new(
            dimensions.width,
            dimensions.height / 2.0 + FINAL_RISE,
            dimensions.length,
        );
    waypoints.push(TourWaypoint {
        position: Vec3::from_point(&closing),
        look_at: Vec3::from_point(&center),
        duration: config.final_dwell,
        room_name: FINAL_VIEW.to_string(),
    });

    tracing::debug!(waypoints = waypoints.len(), "Planned tour");

    waypoints
}

/// Centre of the house envelope
fn house_center(dimensions: &Dimensions) -> Point3<f64> {
    Point3::new(
        dimensions.width / 2.0,
        dimensions.height / 2.0,
        dimensions.length / 2.0,
    )
}
