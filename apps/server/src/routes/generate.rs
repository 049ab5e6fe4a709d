// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House generation endpoint.

use crate::error::ApiError;
use crate::types::{GenerateRequest, GenerateResponse, GenerationStats, MaterialAssignment};
use crate::AppState;
use axum::{extract::State, Json};
use house_tour_core::{
    furniture_material, generate_house_with_config, room_material, GeneratedHouse,
    HouseSpecification, PlannerConfig,
};
use house_tour_geometry::build_house_scene;
use std::time::Instant;

/// POST /api/v1/generate - Generate a furnished house and its tour.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let spec = request.into_specification()?;

    tracing::info!(
        plot_size = %spec.plot_size,
        house_type = ?spec.house_type,
        bedrooms = spec.bedrooms,
        bathrooms = spec.bathrooms,
        kitchens = spec.kitchens,
        location_type = ?spec.location_type,
        "Generate request"
    );

    // Process on blocking thread pool (CPU-bound)
    let planner = state.planner.clone();
    let response = tokio::task::spawn_blocking(move || build_response(&spec, &planner)).await??;

    tracing::info!(
        rooms = response.stats.room_count,
        furniture = response.stats.furniture_count,
        waypoints = response.stats.waypoint_count,
        total_time_ms = response.stats.total_time_ms,
        "Generation complete"
    );

    Ok(Json(response))
}

fn build_response(
    spec: &HouseSpecification,
    planner: &PlannerConfig,
) -> Result<GenerateResponse, ApiError> {
    let start = Instant::now();

    let house = generate_house_with_config(spec, planner)?;
    let scene = build_house_scene(&house.layout)?;
    let materials = material_assignments(&house);

    let stats = GenerationStats {
        room_count: house.layout.rooms.len(),
        furniture_count: house.layout.furniture_count(),
        waypoint_count: house.waypoints.len(),
        tour_duration: house.tour_duration(),
        floor_area: house.layout.rooms.iter().map(|r| r.area()).sum(),
        total_vertices: scene.vertex_count(),
        total_triangles: scene.triangle_count(),
        total_time_ms: start.elapsed().as_millis() as u64,
    };

    let GeneratedHouse { layout, waypoints } = house;
    Ok(GenerateResponse {
        layout,
        waypoints,
        materials,
        stats,
    })
}

fn material_assignments(house: &GeneratedHouse) -> Vec<MaterialAssignment> {
    let style = house.layout.style;
    let mut assignments = Vec::with_capacity(house.layout.rooms.len() + house.layout.furniture_count());

    for room in &house.layout.rooms {
        assignments.push(MaterialAssignment {
            target_id: room.id.clone(),
            material: room_material(room.category, style),
        });
        assignments.extend(room.furniture.iter().map(|piece| MaterialAssignment {
            target_id: piece.id.clone(),
            material: furniture_material(piece.category, style),
        }));
    }

    assignments
}
