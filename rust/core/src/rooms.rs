// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greedy row packing of rooms inside the house footprint
//!
//! Rooms are requested in a fixed order (living, kitchens, dining, bedrooms,
//! bathrooms, hallway) and placed by folding the requests over a cursor that
//! walks the footprint left to right, row by row. Nothing checks for
//! overlaps: large room counts simply run past the footprint.

use crate::config::PlannerConfig;
use crate::types::{Dimensions, HouseSpecification, Room, RoomCategory, Vec3};

/// Tolerance for "does the next room still fit in this row"
const FIT_EPSILON: f64 = 1e-9;

/// How a requested room interacts with the packing cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Continue the current row, never wrap
    Row,
    /// Continue the current row only if the room fits in the remaining width
    RowIfFits,
    /// Continue the cursor, wrapping to a new row when the width is exceeded
    Wrap,
    /// Full-width corridor in front of the footprint; cursor untouched
    Entry,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Place(RoomRequest),
    /// Reset to the left edge and move down one row
    NewRow,
}

#[derive(Debug, Clone, Copy)]
struct RoomRequest {
    category: RoomCategory,
    /// 1-based index for repeated categories
    ordinal: Option<u32>,
    width: f64,
    length: f64,
    placement: Placement,
}

/// Packing cursor carried through the fold
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Cursor {
    x: f64,
    z: f64,
    /// Deepest room placed in the current row
    row_depth: f64,
}

impl Cursor {
    fn new_row(self) -> Self {
        Cursor {
            x: 0.0,
            z: self.z + self.row_depth,
            row_depth: 0.0,
        }
    }

    fn advance(self, width: f64, length: f64) -> Self {
        Cursor {
            x: self.x + width,
            z: self.z,
            row_depth: self.row_depth.max(length),
        }
    }

    fn fits(&self, width: f64, house_width: f64) -> bool {
        self.x + width <= house_width + FIT_EPSILON
    }
}

#[derive(Debug, Default)]
struct Packing {
    cursor: Cursor,
    rooms: Vec<Room>,
}

/// Number of grid cells per axis used to size a standard room
///
/// `max(2, ceil(sqrt(bedrooms + 2)))`: more bedrooms shrink every room.
pub fn grid_divisor(bedrooms: u32) -> u32 {
    let cells = ((bedrooms as f64 + 2.0).sqrt()).ceil() as u32;
    cells.max(2)
}

/// Generate rooms using the default planner configuration
pub fn generate_rooms(spec: &HouseSpecification, dimensions: &Dimensions) -> Vec<Room> {
    generate_rooms_with_config(spec, dimensions, &PlannerConfig::default())
}

/// Place every requested room inside (or next to) the footprint
pub fn generate_rooms_with_config(
    spec: &HouseSpecification,
    dimensions: &Dimensions,
    config: &PlannerConfig,
) -> Vec<Room> {
    let divisor = grid_divisor(spec.bedrooms) as f64;
    let unit_width = dimensions.width / divisor;
    let unit_length = dimensions.length / divisor;

    let steps = room_steps(spec, dimensions, config, unit_width, unit_length);

    let packing = steps.into_iter().fold(Packing::default(), |packing, step| {
        apply_step(packing, step, dimensions, config)
    });

    tracing::debug!(
        rooms = packing.rooms.len(),
        unit_width,
        unit_length,
        final_row_z = packing.cursor.z,
        "Packed rooms"
    );

    packing.rooms
}

/// Build the ordered list of packing steps for a specification
fn room_steps(
    spec: &HouseSpecification,
    dimensions: &Dimensions,
    config: &PlannerConfig,
    unit_width: f64,
    unit_length: f64,
) -> Vec<Step> {
    let standard = |category, ordinal, placement| RoomRequest {
        category,
        ordinal,
        width: unit_width,
        length: unit_length,
        placement,
    };

    let mut steps = Vec::with_capacity(step_count(spec));

    steps.push(Step::Place(RoomRequest {
        category: RoomCategory::Living,
        ordinal: None,
        width: unit_width * config.living_scale,
        length: unit_length * config.living_scale,
        placement: Placement::Row,
    }));

    steps.extend(
        (1..=spec.kitchens)
            .map(|n| Step::Place(standard(RoomCategory::Kitchen, Some(n), Placement::Row))),
    );

    steps.push(Step::Place(standard(
        RoomCategory::Dining,
        None,
        Placement::RowIfFits,
    )));

    steps.push(Step::NewRow);

    steps.extend(
        (1..=spec.bedrooms)
            .map(|n| Step::Place(standard(RoomCategory::Bedroom, Some(n), Placement::Wrap))),
    );

    // Bathrooms pick up wherever the bedroom cursor stopped
    steps.extend((1..=spec.bathrooms).map(|n| {
        Step::Place(RoomRequest {
            category: RoomCategory::Bathroom,
            ordinal: Some(n),
            width: unit_width * config.bathroom_scale,
            length: unit_length * config.bathroom_scale,
            placement: Placement::Wrap,
        })
    }));

    steps.push(Step::Place(RoomRequest {
        category: RoomCategory::Hallway,
        ordinal: None,
        width: dimensions.width,
        length: config.hallway_depth,
        placement: Placement::Entry,
    }));

    steps
}

/// Living, kitchens, dining, row break, bedrooms, bathrooms and hallway
fn step_count(spec: &HouseSpecification) -> usize {
    [spec.kitchens, spec.bedrooms, spec.bathrooms]
        .iter()
        .fold(4usize, |total, &count| total.saturating_add(count as usize))
}

fn apply_step(
    mut packing: Packing,
    step: Step,
    dimensions: &Dimensions,
    config: &PlannerConfig,
) -> Packing {
    let request = match step {
        Step::NewRow => {
            packing.cursor = packing.cursor.new_row();
            return packing;
        }
        Step::Place(request) => request,
    };

    let cursor = packing.cursor;
    let (position, next) = match request.placement {
        Placement::Row => (
            Vec3::new(cursor.x, 0.0, cursor.z),
            cursor.advance(request.width, request.length),
        ),
        Placement::RowIfFits => {
            if !cursor.fits(request.width, dimensions.width) {
                tracing::debug!(
                    category = request.category.as_str(),
                    cursor_x = cursor.x,
                    "No room left in row, skipping"
                );
                return packing;
            }
            (
                Vec3::new(cursor.x, 0.0, cursor.z),
                cursor.advance(request.width, request.length),
            )
        }
        Placement::Wrap => {
            let start = if cursor.x > 0.0 && !cursor.fits(request.width, dimensions.width) {
                cursor.new_row()
            } else {
                cursor
            };
            (
                Vec3::new(start.x, 0.0, start.z),
                start.advance(request.width, request.length),
            )
        }
        Placement::Entry => (Vec3::new(0.0, 0.0, -config.hallway_depth), cursor),
    };

    packing.rooms.push(Room {
        id: room_id(request.category, request.ordinal),
        name: room_name(request.category, request.ordinal),
        category: request.category,
        position,
        dimensions: Dimensions::new(request.width, request.length, config.floor_height),
        furniture: Vec::new(),
    });
    packing.cursor = next;
    packing
}

fn room_id(category: RoomCategory, ordinal: Option<u32>) -> String {
    match (category, ordinal) {
        (RoomCategory::Living, _) => "living-room".to_string(),
        (RoomCategory::Dining, _) => "dining-room".to_string(),
        (RoomCategory::Hallway, _) => "hallway".to_string(),
        (category, Some(n)) => format!("{}-{}", category.as_str(), n),
        (category, None) => category.as_str().to_string(),
    }
}

fn room_name(category: RoomCategory, ordinal: Option<u32>) -> String {
    let base = match category {
        RoomCategory::Living => "Living Room",
        RoomCategory::Bedroom => "Bedroom",
        RoomCategory::Kitchen => "Kitchen",
        RoomCategory::Bathroom => "Bathroom",
        RoomCategory::Dining => "Dining Room",
        RoomCategory::Hallway => "Hallway",
    };
    match ordinal {
        Some(n) => format!("{} {}", base, n),
        None => base.to_string(),
    }
}
