// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House-Tour Geometry
//!
//! Turns a generated [`HouseLayout`](house_tour_core::HouseLayout) into box
//! meshes (floor slabs and furniture blocks) and writes them as Wavefront
//! OBJ/MTL for inspection in any 3D viewer.

pub mod error;
pub mod mesh;
pub mod obj;
pub mod scene;
pub mod solid;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use mesh::Mesh;
pub use obj::{export_house, write_mtl, write_obj, ExportStats};
pub use scene::{build_house_scene, HouseScene, PartKind, ScenePart, SLAB_THICKNESS};
pub use solid::box_mesh;
