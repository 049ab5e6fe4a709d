// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # House-Tour Core
//!
//! Deterministic house layout generation from a short house specification.
//!
//! ## Overview
//!
//! The pipeline has two stages:
//!
//! - **Dimension & Room Planner**: parses the plot size, derives the house
//!   envelope and packs rooms row by row ([`parse_plot_size`],
//!   [`compute_house_dimensions`], [`generate_rooms`])
//! - **Furnishing & Tour Planner**: attaches catalogue furniture per room and
//!   derives a scripted camera walkthrough ([`add_furniture`],
//!   [`generate_tour_waypoints`])
//!
//! There is no randomness anywhere: identical input gives identical output.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use house_tour_core::{generate_house, HouseSpecification};
//!
//! let spec = HouseSpecification {
//!     plot_size: "20x30".into(),
//!     bedrooms: 3,
//!     ..Default::default()
//! };
//!
//! let house = generate_house(&spec)?;
//! for waypoint in &house.waypoints {
//!     println!("{} for {:.0}s", waypoint.room_name, waypoint.duration);
//! }
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod furniture;
pub mod generator;
pub mod materials;
pub mod plot;
pub mod rooms;
pub mod tour;
pub mod types;

pub use config::PlannerConfig;
pub use dimensions::{compute_house_dimensions, compute_house_dimensions_with_config};
pub use error::{Error, Result};
pub use furniture::{add_furniture, furnish_room, furniture_template, PieceTemplate};
pub use generator::{generate_house, generate_house_with_config};
pub use materials::{furniture_material, room_material, MaterialDescriptor};
pub use plot::{parse_plot_size, parse_plot_size_or};
pub use rooms::{generate_rooms, generate_rooms_with_config, grid_divisor};
pub use tour::{
    generate_tour_waypoints, generate_tour_waypoints_with_config, EXTERIOR_VIEW, FINAL_VIEW,
};
pub use types::{
    Dimensions, Furniture, FurnitureCategory, GeneratedHouse, HouseLayout, HouseSpecification,
    HouseType, LocationType, PlotSize, Room, RoomCategory, Style, TourWaypoint, Vec3,
};
