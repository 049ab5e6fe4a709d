// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end generation: specification in, furnished layout and tour out

use crate::config::PlannerConfig;
use crate::dimensions::compute_house_dimensions_with_config;
use crate::error::{Error, Result};
use crate::furniture::add_furniture;
use crate::plot::parse_plot_size_or;
use crate::rooms::{generate_rooms_with_config, grid_divisor};
use crate::tour::generate_tour_waypoints_with_config;
use crate::types::{
    Dimensions, GeneratedHouse, HouseLayout, HouseSpecification, Room, TourWaypoint,
};

/// Generate a house with the default planner configuration
pub fn generate_house(spec: &HouseSpecification) -> Result<GeneratedHouse> {
    generate_house_with_config(spec, &PlannerConfig::default())
}

/// Run the full pipeline
///
/// Either a complete layout and tour is returned or a single
/// [`Error::Generation`]; there are no partial results.
pub fn generate_house_with_config(
    spec: &HouseSpecification,
    config: &PlannerConfig,
) -> Result<GeneratedHouse> {
    // Step 1: Plot and envelope
    let plot = parse_plot_size_or(&spec.plot_size, config.default_plot);
    let dimensions = compute_house_dimensions_with_config(plot, spec.house_type, config);

    check_envelope(&dimensions, spec.bedrooms)?;

    // Step 2: Rooms
    let rooms = generate_rooms_with_config(spec, &dimensions, config);

    // Step 3: Furniture
    let style = spec.location_type.style();
    let rooms = add_furniture(&rooms, style);

    // Step 4: Tour
    let waypoints = generate_tour_waypoints_with_config(&rooms, &dimensions, config);

    check_finite(&rooms, &waypoints)?;

    let layout = HouseLayout {
        width: dimensions.width,
        length: dimensions.length,
        height: dimensions.height,
        floors: spec.house_type.floors(),
        style,
        rooms,
    };

    tracing::info!(
        width = layout.width,
        length = layout.length,
        floors = layout.floors,
        style = %layout.style,
        rooms = layout.rooms.len(),
        furniture = layout.furniture_count(),
        waypoints = waypoints.len(),
        "Generated house"
    );

    Ok(GeneratedHouse { layout, waypoints })
}

/// The envelope and the per-room unit derived from it must both be usable
fn check_envelope(dimensions: &Dimensions, bedrooms: u32) -> Result<()> {
    if !dimensions.is_finite() || dimensions.width <= 0.0 || dimensions.length <= 0.0 {
        return Err(Error::Generation(format!(
            "degenerate house envelope {:.3} x {:.3} x {:.3}",
            dimensions.width, dimensions.length, dimensions.height
        )));
    }

    let divisor = grid_divisor(bedrooms) as f64;
    let (unit_width, unit_length) = (dimensions.width / divisor, dimensions.length / divisor);
    if unit_width <= 0.0 || unit_length <= 0.0 {
        return Err(Error::Generation(format!(
            "room unit underflows for a {:e} x {:e} envelope",
            dimensions.width, dimensions.length
        )));
    }

    Ok(())
}

fn check_finite(rooms: &[Room], waypoints: &[TourWaypoint]) -> Result<()> {
    for room in rooms {
        if !room.position.is_finite() || !room.dimensions.is_finite() {
            return Err(Error::Generation(format!(
                "room {} has non-finite geometry",
                room.id
            )));
        }
        if let Some(piece) = room
            .furniture
            .iter()
            .find(|f| !f.position.is_finite() || !f.rotation.is_finite())
        {
            return Err(Error::Generation(format!(
                "furniture {} has non-finite geometry",
                piece.id
            )));
        }
    }

    if let Some(waypoint) = waypoints
        .iter()
        .find(|w| !w.position.is_finite() || !w.look_at.is_finite())
    {
        return Err(Error::Generation(format!(
            "waypoint {} has non-finite camera pose",
            waypoint.room_name
        )));
    }

    Ok(())
}
