// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Furniture catalogue and per-room furnishing
//!
//! Each room category has a hand-authored template. A piece sits at a fixed
//! fraction of its room's width and length and keeps its catalogue size, so
//! pieces can overflow very small rooms.

use crate::types::{Dimensions, Furniture, FurnitureCategory, Room, RoomCategory, Style, Vec3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// One entry of a room template
#[derive(Debug, Clone, Copy)]
pub struct PieceTemplate {
    pub slug: &'static str,
    pub category: FurnitureCategory,
    pub modern_name: &'static str,
    pub traditional_name: &'static str,
    /// Position as a fraction of the room width (x)
    pub width_fraction: f64,
    /// Position as a fraction of the room length (z)
    pub length_fraction: f64,
    pub rotation: f64,
    /// Footprint and height (width, length, height) in meters
    pub size: (f64, f64, f64),
}

impl PieceTemplate {
    pub fn name(&self, style: Style) -> &'static str {
        match style {
            Style::Modern => self.modern_name,
            Style::Traditional => self.traditional_name,
        }
    }
}

const fn piece(
    slug: &'static str,
    category: FurnitureCategory,
    modern_name: &'static str,
    traditional_name: &'static str,
    fractions: (f64, f64),
    rotation: f64,
    size: (f64, f64, f64),
) -> PieceTemplate {
    PieceTemplate {
        slug,
        category,
        modern_name,
        traditional_name,
        width_fraction: fractions.0,
        length_fraction: fractions.1,
        rotation,
        size,
    }
}

use FurnitureCategory::{Appliance, Bed, Cabinet, Chair, Sofa, Table};

const LIVING: &[PieceTemplate] = &[
    piece("sofa", Sofa, "Sectional Sofa", "Chesterfield Sofa", (0.2, 0.3), 0.0, (2.2, 0.9, 0.85)),
    piece("coffee-table", Table, "Glass Coffee Table", "Oak Coffee Table", (0.45, 0.5), 0.0, (1.2, 0.6, 0.45)),
    piece("armchair", Chair, "Lounge Chair", "Wingback Armchair", (0.75, 0.35), FRAC_PI_4, (0.85, 0.85, 0.95)),
    piece("media-unit", Cabinet, "Media Console", "Wooden Sideboard", (0.5, 0.9), 0.0, (1.8, 0.45, 0.6)),
];

const BEDROOM: &[PieceTemplate] = &[
    piece("bed", Bed, "Platform Bed", "Four-Poster Bed", (0.5, 0.4), 0.0, (1.6, 2.0, 0.5)),
    piece("nightstand", Cabinet, "Floating Nightstand", "Bedside Chest", (0.15, 0.2), 0.0, (0.5, 0.4, 0.55)),
    piece("wardrobe", Cabinet, "Sliding Wardrobe", "Armoire", (0.85, 0.8), FRAC_PI_2, (1.2, 0.6, 2.0)),
];

const KITCHEN: &[PieceTemplate] = &[
    piece("counter", Cabinet, "Handleless Counter", "Farmhouse Counter", (0.5, 0.1), 0.0, (2.4, 0.6, 0.9)),
    piece("refrigerator", Appliance, "Steel Refrigerator", "Cream Refrigerator", (0.1, 0.1), 0.0, (0.7, 0.7, 1.8)),
    piece("stove", Appliance, "Induction Hob", "Range Cooker", (0.8, 0.1), 0.0, (0.6, 0.6, 0.9)),
    piece("island", Table, "Kitchen Island", "Butcher Block", (0.5, 0.55), 0.0, (1.6, 0.9, 0.9)),
];

const BATHROOM: &[PieceTemplate] = &[
    piece("toilet", Appliance, "Wall-Hung Toilet", "Close-Coupled Toilet", (0.2, 0.2), 0.0, (0.4, 0.7, 0.8)),
    piece("sink", Appliance, "Vessel Sink", "Pedestal Sink", (0.7, 0.15), 0.0, (0.6, 0.45, 0.85)),
    piece("bathtub", Appliance, "Walk-In Shower", "Clawfoot Bathtub", (0.5, 0.75), FRAC_PI_2, (1.7, 0.75, 0.6)),
];

const DINING: &[PieceTemplate] = &[
    piece("dining-table", Table, "Extendable Table", "Farmhouse Table", (0.5, 0.5), 0.0, (1.8, 0.9, 0.75)),
    piece("chair", Chair, "Moulded Chair", "Ladder-Back Chair", (0.3, 0.4), FRAC_PI_2, (0.45, 0.5, 0.9)),
    piece("chair", Chair, "Moulded Chair", "Ladder-Back Chair", (0.3, 0.6), FRAC_PI_2, (0.45, 0.5, 0.9)),
    piece("chair", Chair, "Moulded Chair", "Ladder-Back Chair", (0.7, 0.4), FRAC_PI_2, (0.45, 0.5, 0.9)),
    piece("chair", Chair, "Moulded Chair", "Ladder-Back Chair", (0.7, 0.6), FRAC_PI_2, (0.45, 0.5, 0.9)),
];

/// Catalogue template for a room category (hallways stay empty)
pub fn furniture_template(category: RoomCategory) -> &'static [PieceTemplate] {
    match category {
        RoomCategory::Living => LIVING,
        RoomCategory::Bedroom => BEDROOM,
        RoomCategory::Kitchen => KITCHEN,
        RoomCategory::Bathroom => BATHROOM,
        RoomCategory::Dining => DINING,
        RoomCategory::Hallway => &[],
    }
}

/// Return furnished copies of `rooms`; the input is left untouched
pub fn add_furniture(rooms: &[Room], style: Style) -> Vec<Room> {
    let furnished: Vec<Room> = rooms
        .iter()
        .map(|room| Room {
            furniture: furnish_room(room, style),
            ..room.clone()
        })
        .collect();

    tracing::debug!(
        rooms = furnished.len(),
        pieces = furnished.iter().map(|r| r.furniture.len()).sum::<usize>(),
        style = %style,
        "Furnished rooms"
    );

    furnished
}

/// Fresh furniture for a single room
pub fn furnish_room(room: &Room, style: Style) -> Vec<Furniture> {
    furniture_template(room.category)
        .iter()
        .enumerate()
        .map(|(index, template)| Furniture {
            id: format!("{}-{}-{}", room.id, template.slug, index + 1),
            name: template.name(style).to_string(),
            category: template.category,
            position: Vec3::new(
                room.dimensions.width * template.width_fraction,
                0.0,
                room.dimensions.length * template.length_fraction,
            ),
            rotation: template.rotation,
            dimensions: Dimensions::new(template.size.0, template.size.1, template.size.2),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn room(id: &str, category: RoomCategory, width: f64, length: f64) -> Room {
        Room {
            id: id.to_string(),
            name: id.to_string(),
            category,
            position: Vec3::new(4.0, 0.0, 6.0),
            dimensions: Dimensions::new(width, length, 3.0),
            furniture: vec![],
        }
    }

    #[test]
    fn test_template_sizes() {
        for category in [
            RoomCategory::Living,
            RoomCategory::Bedroom,
            RoomCategory::Kitchen,
            RoomCategory::Bathroom,
            RoomCategory::Dining,
        ] {
            let len = furniture_template(category).len();
            assert!((2..=5).contains(&len), "{:?} has {} pieces", category, len);
        }
        assert!(furniture_template(RoomCategory::Hallway).is_empty());
    }

    #[test]
    fn test_positions_are_room_fractions() {
        let living = room("living-room", RoomCategory::Living, 10.0, 20.0);
        let pieces = furnish_room(&living, Style::Modern);

        let sofa = &pieces[0];
        assert_eq!(sofa.category, FurnitureCategory::Sofa);
        assert_relative_eq!(sofa.position.x, 2.0);
        assert_relative_eq!(sofa.position.z, 6.0);
        assert_relative_eq!(sofa.position.y, 0.0);
    }

    #[test]
    fn test_style_selects_names() {
        let bedroom = room("bedroom-1", RoomCategory::Bedroom, 4.0, 4.0);
        let modern = furnish_room(&bedroom, Style::Modern);
        let traditional = furnish_room(&bedroom, Style::Traditional);

        assert_eq!(modern[0].name, "Platform Bed");
        assert_eq!(traditional[0].name, "Four-Poster Bed");
        // Same placement regardless of style
        assert_eq!(modern[0].position, traditional[0].position);
    }

    #[test]
    fn test_rotations_are_fixed_constants() {
        let dining = room("dining-room", RoomCategory::Dining, 5.0, 5.0);
        for piece in furnish_room(&dining, Style::Modern) {
            assert!(piece.rotation == 0.0 || piece.rotation == FRAC_PI_2);
        }
    }

    #[test]
    fn test_small_rooms_overflow() {
        let closet = room("bathroom-1", RoomCategory::Bathroom, 1.0, 1.0);
        let pieces = furnish_room(&closet, Style::Modern);
        let tub = pieces.iter().find(|p| p.id.contains("bathtub")).unwrap();
        assert!(tub.position.x + tub.dimensions.width > closet.dimensions.width);
    }

    #[test]
    fn test_add_furniture_leaves_input_untouched() {
        let rooms = vec![
            room("living-room", RoomCategory::Living, 10.0, 10.0),
            room("hallway", RoomCategory::Hallway, 10.0, 2.0),
        ];
        let furnished = add_furniture(&rooms, Style::Traditional);

        assert!(rooms.iter().all(|r| r.furniture.is_empty()));
        assert_eq!(furnished[0].furniture.len(), LIVING.len());
        assert!(furnished[1].furniture.is_empty());
        assert_eq!(furnished[0].position, rooms[0].position);
    }

    #[test]
    fn test_furniture_ids_unique() {
        let dining = room("dining-room", RoomCategory::Dining, 5.0, 5.0);
        let pieces = furnish_room(&dining, Style::Modern);
        let ids: HashSet<_> = pieces.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pieces.len());
    }
}
