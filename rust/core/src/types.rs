// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for house specifications, generated layouts and tours

use crate::error::Error;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 3D point or extent in meters (simplified for serialization)
///
/// Axes follow the viewer convention: `x` runs along the house width,
/// `y` is vertical and `z` runs along the house length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_point(p: &Point3<f64>) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Width / length / height triple in meters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self { width, length, height }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.length.is_finite() && self.height.is_finite()
    }
}

/// Number of storeys requested
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HouseType {
    #[default]
    Single,
    Double,
}

impl HouseType {
    pub fn floors(self) -> u32 {
        match self {
            HouseType::Single => 1,
            HouseType::Double => 2,
        }
    }
}

impl FromStr for HouseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(HouseType::Single),
            "double" => Ok(HouseType::Double),
            other => Err(Error::UnknownHouseType(other.to_string())),
        }
    }
}

/// Where the house is located; drives the style tag
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[default]
    City,
    Village,
}

impl LocationType {
    /// City houses are modern, village houses traditional
    pub fn style(self) -> Style {
        match self {
            LocationType::City => Style::Modern,
            LocationType::Village => Style::Traditional,
        }
    }
}

impl FromStr for LocationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(LocationType::City),
            "village" => Ok(LocationType::Village),
            other => Err(Error::UnknownLocation(other.to_string())),
        }
    }
}

/// Visual style tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Modern,
    Traditional,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Modern => "modern",
            Style::Traditional => "traditional",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User input as submitted from the design form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseSpecification {
    /// Raw plot size text, e.g. "20x30" or "25"
    pub plot_size: String,
    pub house_type: HouseType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchens: u32,
    pub location_type: LocationType,
    /// Free text, not used by the generator
    #[serde(default)]
    pub notes: String,
}

impl Default for HouseSpecification {
    fn default() -> Self {
        Self {
            plot_size: "20x30".to_string(),
            house_type: HouseType::Single,
            bedrooms: 2,
            bathrooms: 1,
            kitchens: 1,
            location_type: LocationType::City,
            notes: String::new(),
        }
    }
}

/// Plot extent in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlotSize {
    pub width: f64,
    pub length: f64,
}

impl PlotSize {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

/// Room classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Living,
    Bedroom,
    Kitchen,
    Bathroom,
    Dining,
    Hallway,
}

impl RoomCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomCategory::Living => "living",
            RoomCategory::Bedroom => "bedroom",
            RoomCategory::Kitchen => "kitchen",
            RoomCategory::Bathroom => "bathroom",
            RoomCategory::Dining => "dining",
            RoomCategory::Hallway => "hallway",
        }
    }
}

/// Furniture classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureCategory {
    Bed,
    Sofa,
    Table,
    Chair,
    Cabinet,
    Appliance,
}

impl FurnitureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FurnitureCategory::Bed => "bed",
            FurnitureCategory::Sofa => "sofa",
            FurnitureCategory::Table => "table",
            FurnitureCategory::Chair => "chair",
            FurnitureCategory::Cabinet => "cabinet",
            FurnitureCategory::Appliance => "appliance",
        }
    }
}

/// A single furniture piece, positioned relative to its room origin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Furniture {
    pub id: String,
    pub name: String,
    pub category: FurnitureCategory,
    pub position: Vec3,
    /// Rotation about the vertical axis (radians)
    pub rotation: f64,
    pub dimensions: Dimensions,
}

/// A placed room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub category: RoomCategory,
    /// Offset of the room's minimum corner from the house origin
    pub position: Vec3,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
}

impl Room {
    /// Horizontal and vertical centre of the room volume
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.position.x + self.dimensions.width / 2.0,
            self.position.y + self.dimensions.height / 2.0,
            self.position.z + self.dimensions.length / 2.0,
        )
    }

    /// Floor area in square meters
    pub fn area(&self) -> f64 {
        self.dimensions.width * self.dimensions.length
    }
}

/// Generated house layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HouseLayout {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub floors: u32,
    pub style: Style,
    pub rooms: Vec<Room>,
}

impl HouseLayout {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn furniture_count(&self) -> usize {
        self.rooms.iter().map(|r| r.furniture.len()).sum()
    }
}

/// A single camera pose in the scripted tour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourWaypoint {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Dwell time in seconds
    pub duration: f64,
    pub room_name: String,
}

/// Complete generator output: a layout plus its tour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedHouse {
    pub layout: HouseLayout,
    pub waypoints: Vec<TourWaypoint>,
}

impl GeneratedHouse {
    /// Total scripted tour length in seconds
    pub fn tour_duration(&self) -> f64 {
        self.waypoints.iter().map(|w| w.duration).sum()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
