// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Style-dependent material lookup for rooms and furniture

use crate::types::{FurnitureCategory, RoomCategory, Style};
use serde::Serialize;

/// Surface description handed to renderers and exporters
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MaterialDescriptor {
    pub name: &'static str,
    /// Linear RGB in [0, 1]
    pub color: [f32; 3],
    pub roughness: f32,
}

const fn material(name: &'static str, color: [f32; 3], roughness: f32) -> MaterialDescriptor {
    MaterialDescriptor {
        name,
        color,
        roughness,
    }
}

/// Floor/wall finish for a room
pub fn room_material(category: RoomCategory, style: Style) -> MaterialDescriptor {
    use RoomCategory::*;
    match (style, category) {
        (Style::Modern, Living) => material("modern_living", [0.92, 0.92, 0.90], 0.4),
        (Style::Modern, Bedroom) => material("modern_bedroom", [0.85, 0.87, 0.90], 0.5),
        (Style::Modern, Kitchen) => material("modern_kitchen", [0.95, 0.95, 0.95], 0.2),
        (Style::Modern, Bathroom) => material("modern_bathroom", [0.80, 0.88, 0.92], 0.1),
        (Style::Modern, Dining) => material("modern_dining", [0.88, 0.86, 0.82], 0.4),
        (Style::Modern, Hallway) => material("modern_hallway", [0.70, 0.70, 0.72], 0.6),
        (Style::Traditional, Living) => material("traditional_living", [0.76, 0.60, 0.42], 0.7),
        (Style::Traditional, Bedroom) => material("traditional_bedroom", [0.82, 0.71, 0.55], 0.7),
        (Style::Traditional, Kitchen) => material("traditional_kitchen", [0.87, 0.80, 0.65], 0.6),
        (Style::Traditional, Bathroom) => material("traditional_bathroom", [0.90, 0.88, 0.80], 0.3),
        (Style::Traditional, Dining) => material("traditional_dining", [0.65, 0.45, 0.30], 0.7),
        (Style::Traditional, Hallway) => material("traditional_hallway", [0.55, 0.42, 0.30], 0.8),
    }
}

/// Finish for a furniture piece
pub fn furniture_material(category: FurnitureCategory, style: Style) -> MaterialDescriptor {
    use FurnitureCategory::*;
    match (style, category) {
        (Style::Modern, Bed) => material("modern_bed", [0.30, 0.32, 0.36], 0.8),
        (Style::Modern, Sofa) => material("modern_sofa", [0.25, 0.27, 0.30], 0.9),
        (Style::Modern, Table) => material("modern_table", [0.95, 0.95, 0.95], 0.1),
        (Style::Modern, Chair) => material("modern_chair", [0.10, 0.10, 0.10], 0.5),
        (Style::Modern, Cabinet) => material("modern_cabinet", [0.98, 0.98, 0.98], 0.3),
        (Style::Modern, Appliance) => material("modern_appliance", [0.75, 0.76, 0.78], 0.2),
        (Style::Traditional, Bed) => material("traditional_bed", [0.45, 0.28, 0.16], 0.7),
        (Style::Traditional, Sofa) => material("traditional_sofa", [0.50, 0.18, 0.14], 0.8),
        (Style::Traditional, Table) => material("traditional_table", [0.55, 0.35, 0.20], 0.6),
        (Style::Traditional, Chair) => material("traditional_chair", [0.48, 0.30, 0.18], 0.6),
        (Style::Traditional, Cabinet) => material("traditional_cabinet", [0.60, 0.42, 0.26], 0.6),
        (Style::Traditional, Appliance) => material("traditional_appliance", [0.93, 0.90, 0.80], 0.4),
    }
}
