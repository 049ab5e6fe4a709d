// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh scene for a generated house layout
//!
//! Every room becomes a thin floor slab and every furniture piece a solid
//! block. Furniture positions are the centre of the piece at floor level,
//! relative to the room's minimum corner.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::solid::box_mesh;
use house_tour_core::{
    furniture_material, room_material, Furniture, HouseLayout, MaterialDescriptor, Room,
};
use nalgebra::{Point3, Vector3};

/// Thickness of the floor slab under each room
pub const SLAB_THICKNESS: f64 = 0.1;

/// What a scene part was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Floor,
    Furniture,
}

/// A named, textured mesh
#[derive(Debug, Clone)]
pub struct ScenePart {
    /// Room or furniture id
    pub name: String,
    pub kind: PartKind,
    pub material: MaterialDescriptor,
    pub mesh: Mesh,
}

/// All meshes for one house
#[derive(Debug, Clone, Default)]
pub struct HouseScene {
    pub parts: Vec<ScenePart>,
}

impl HouseScene {
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertex_count()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }
}

/// Build floor slabs and furniture blocks for a layout
pub fn build_house_scene(layout: &HouseLayout) -> Result<HouseScene> {
    let mut parts = Vec::with_capacity(layout.rooms.len() + layout.furniture_count());

    for room in &layout.rooms {
        parts.push(ScenePart {
            name: room.id.clone(),
            kind: PartKind::Floor,
            material: room_material(room.category, layout.style),
            mesh: floor_slab(room)?,
        });

        for piece in &room.furniture {
            parts.push(ScenePart {
                name: piece.id.clone(),
                kind: PartKind::Furniture,
                material: furniture_material(piece.category, layout.style),
                mesh: furniture_block(room, piece)?,
            });
        }
    }

    let scene = HouseScene { parts };
    tracing::debug!(
        parts = scene.parts.len(),
        vertices = scene.vertex_count(),
        triangles = scene.triangle_count(),
        "Built house scene"
    );

    Ok(scene)
}

fn floor_slab(room: &Room) -> Result<Mesh> {
    box_mesh(
        Point3::new(
            room.position.x,
            room.position.y - SLAB_THICKNESS,
            room.position.z,
        ),
        Vector3::new(room.dimensions.width, SLAB_THICKNESS, room.dimensions.length),
        0.0,
    )
}

fn furniture_block(room: &Room, piece: &Furniture) -> Result<Mesh> {
    let center = room.position.to_point() + piece.position.to_vector();
    let size = Vector3::new(
        piece.dimensions.width,
        piece.dimensions.height,
        piece.dimensions.length,
    );
    let min_corner = Point3::new(
        center.x - size.x / 2.0,
        center.y,
        center.z - size.z / 2.0,
    );
    box_mesh(min_corner, size, piece.rotation)
}
