// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end checks of the generation pipeline

use house_tour_core::{
    compute_house_dimensions, generate_house, generate_rooms, generate_tour_waypoints,
    parse_plot_size, HouseSpecification, HouseType, LocationType, PlotSize, RoomCategory, Style,
    EXTERIOR_VIEW, FINAL_VIEW,
};
use std::collections::HashSet;

fn spec(plot: &str, bedrooms: u32, bathrooms: u32, kitchens: u32) -> HouseSpecification {
    HouseSpecification {
        plot_size: plot.to_string(),
        house_type: HouseType::Single,
        bedrooms,
        bathrooms,
        kitchens,
        location_type: LocationType::City,
        notes: String::new(),
    }
}

fn count(house: &house_tour_core::GeneratedHouse, category: RoomCategory) -> usize {
    house
        .layout
        .rooms
        .iter()
        .filter(|r| r.category == category)
        .count()
}

#[test]
fn test_reference_scenario() {
    let house = generate_house(&spec("20x30", 2, 1, 1)).unwrap();

    assert_eq!(house.layout.style, Style::Modern);
    assert_eq!(house.layout.floors, 1);
    assert_eq!(count(&house, RoomCategory::Living), 1);
    assert_eq!(count(&house, RoomCategory::Kitchen), 1);
    assert_eq!(count(&house, RoomCategory::Bedroom), 2);
    assert_eq!(count(&house, RoomCategory::Bathroom), 1);
    assert_eq!(count(&house, RoomCategory::Hallway), 1);
    assert_eq!(count(&house, RoomCategory::Dining), 0);
    assert_eq!(house.layout.rooms.len(), 6);
}

#[test]
fn test_room_count_formula() {
    for bedrooms in 0..=10 {
        for bathrooms in 0..=5 {
            for kitchens in 0..=3 {
                let house = generate_house(&spec("25x35", bedrooms, bathrooms, kitchens)).unwrap();
                let dining = count(&house, RoomCategory::Dining);
                assert!(dining <= 1);
                let expected = 1 + kitchens + bedrooms + bathrooms + 1 + dining as u32;
                assert_eq!(house.layout.rooms.len() as u32, expected);
            }
        }
    }
}

#[test]
fn test_room_ids_unique() {
    let house = generate_house(&spec("30x40", 10, 5, 3)).unwrap();
    let room_ids: HashSet<_> = house.layout.rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(room_ids.len(), house.layout.rooms.len());

    let furniture_ids: HashSet<_> = house
        .layout
        .rooms
        .iter()
        .flat_map(|r| r.furniture.iter().map(|f| f.id.as_str()))
        .collect();
    assert_eq!(furniture_ids.len(), house.layout.furniture_count());
}

#[test]
fn test_waypoint_count_and_bookends() {
    let house = generate_house(&spec("20x30", 4, 2, 2)).unwrap();
    let non_hallway = house
        .layout
        .rooms
        .iter()
        .filter(|r| r.category != RoomCategory::Hallway)
        .count();

    assert_eq!(house.waypoints.len(), 2 + non_hallway);
    assert_eq!(house.waypoints.first().unwrap().room_name, EXTERIOR_VIEW);
    assert_eq!(house.waypoints.last().unwrap().room_name, FINAL_VIEW);
}

#[test]
fn test_tour_follows_room_order() {
    let house = generate_house(&spec("20x30", 2, 1, 1)).unwrap();
    let interior: Vec<_> = house.waypoints[1..house.waypoints.len() - 1]
        .iter()
        .map(|w| w.room_name.as_str())
        .collect();

    assert_eq!(
        interior,
        vec!["Living Room", "Kitchen 1", "Bedroom 1", "Bedroom 2", "Bathroom 1"]
    );
}

#[test]
fn test_idempotent() {
    let input = spec("18x27", 5, 3, 2);
    let first = generate_house(&input).unwrap();
    let second = generate_house(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_bedrooms_degrades() {
    let house = generate_house(&spec("20x30", 0, 1, 1)).unwrap();
    assert_eq!(count(&house, RoomCategory::Bedroom), 0);
    assert_eq!(count(&house, RoomCategory::Living), 1);
    assert_eq!(count(&house, RoomCategory::Hallway), 1);
}

#[test]
fn test_extreme_counts_do_not_fail() {
    // Wrapped rows run past the footprint; that is accepted, not an error
    let house = generate_house(&spec("10", 60, 40, 12)).unwrap();
    let deepest = house
        .layout
        .rooms
        .iter()
        .map(|r| r.position.z + r.dimensions.length)
        .fold(f64::MIN, f64::max);
    assert!(deepest > house.layout.length);
}

#[test]
fn test_garbage_plot_uses_default() {
    let from_garbage = generate_house(&spec("not a plot", 2, 1, 1)).unwrap();
    let from_default = generate_house(&spec("20x30", 2, 1, 1)).unwrap();
    assert_eq!(from_garbage.layout, from_default.layout);
}

#[test]
fn test_stage_functions_compose() {
    let input = spec("20x30", 3, 2, 1);
    let plot = parse_plot_size(&input.plot_size);
    assert_eq!(plot, PlotSize::new(20.0, 30.0));

    let dims = compute_house_dimensions(plot, input.house_type);
    let rooms = generate_rooms(&input, &dims);
    let waypoints = generate_tour_waypoints(&rooms, &dims);

    let house = generate_house(&input).unwrap();
    assert_eq!(house.layout.rooms.len(), rooms.len());
    assert_eq!(house.waypoints, waypoints);
}

#[test]
fn test_json_round_shape() {
    let house = generate_house(&spec("20x30", 1, 1, 1)).unwrap();
    let json = house.to_json_pretty().unwrap();

    assert!(json.contains("\"lookAt\""));
    assert!(json.contains("\"roomName\": \"Exterior View\""));
    assert!(json.contains("\"style\": \"modern\""));
}
