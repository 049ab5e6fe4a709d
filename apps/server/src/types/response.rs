// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use house_tour_core::{HouseLayout, MaterialDescriptor, TourWaypoint};
use serde::Serialize;

/// Full generation response.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Furnished layout.
    pub layout: HouseLayout,
    /// Camera tour, exterior shots first and last.
    pub waypoints: Vec<TourWaypoint>,
    /// Material for every room and furniture piece, in layout order.
    pub materials: Vec<MaterialAssignment>,
    /// Generation statistics.
    pub stats: GenerationStats,
}

/// Material bound to a room or furniture id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialAssignment {
    pub target_id: String,
    pub material: MaterialDescriptor,
}

/// Generation statistics.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub room_count: usize,
    pub furniture_count: usize,
    pub waypoint_count: usize,
    /// Sum of waypoint dwell times (seconds).
    pub tour_duration: f64,
    /// Sum of room floor areas (square meters).
    pub floor_area: f64,
    /// Vertices in the box-mesh scene.
    pub total_vertices: usize,
    /// Triangles in the box-mesh scene.
    pub total_triangles: usize,
    /// Total processing time (ms).
    pub total_time_ms: u64,
}
