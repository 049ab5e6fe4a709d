// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ/MTL export (Y-up, meters)

use crate::error::{Error, Result};
use crate::scene::{build_house_scene, HouseScene};
use house_tour_core::HouseLayout;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Totals reported after writing an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub objects: usize,
    pub materials: usize,
    pub vertices: usize,
    pub triangles: usize,
}

/// Write the scene geometry; `mtl_file` is referenced via `mtllib` if given
pub fn write_obj<W: Write>(scene: &HouseScene, writer: &mut W, mtl_file: Option<&str>) -> Result<()> {
    if scene.parts.is_empty() {
        return Err(Error::EmptyMesh("scene has no parts".to_string()));
    }

    writeln!(writer, "# Generated by house-to-obj (house-tour)")?;
    writeln!(
        writer,
        "# {} objects, {} vertices, {} triangles",
        scene.parts.len(),
        scene.vertex_count(),
        scene.triangle_count()
    )?;
    writeln!(writer, "# Coordinate system: Y-up, meters")?;
    if let Some(mtl) = mtl_file {
        writeln!(writer, "mtllib {}", mtl)?;
    }
    writeln!(writer)?;

    // OBJ indices are 1-based and global across objects
    let mut vertex_offset: u32 = 1;

    for part in &scene.parts {
        writeln!(writer, "o {}", part.name)?;
        writeln!(writer, "usemtl {}", part.material.name)?;

        for p in part.mesh.positions.chunks_exact(3) {
            writeln!(writer, "v {:.6} {:.6} {:.6}", p[0], p[1], p[2])?;
        }
        for n in part.mesh.normals.chunks_exact(3) {
            writeln!(writer, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2])?;
        }
        for t in part.mesh.indices.chunks_exact(3) {
            let (i0, i1, i2) = (t[0] + vertex_offset, t[1] + vertex_offset, t[2] + vertex_offset);
            writeln!(writer, "f {}//{} {}//{} {}//{}", i0, i0, i1, i1, i2, i2)?;
        }

        vertex_offset += part.mesh.vertex_count() as u32;
        writeln!(writer)?;
    }

    Ok(())
}

/// Write one `newmtl` block per distinct material, in first-use order
pub fn write_mtl<W: Write>(scene: &HouseScene, writer: &mut W) -> Result<usize> {
    let mut seen = FxHashSet::default();
    writeln!(writer, "# Generated by house-to-obj (house-tour)")?;

    for part in &scene.parts {
        let material = &part.material;
        if !seen.insert(material.name) {
            continue;
        }
        let [r, g, b] = material.color;
        writeln!(writer)?;
        writeln!(writer, "newmtl {}", material.name)?;
        writeln!(writer, "Kd {:.3} {:.3} {:.3}", r, g, b)?;
        writeln!(writer, "Ka 0.000 0.000 0.000")?;
        // Rough surfaces get a low specular exponent
        writeln!(writer, "Ns {:.1}", (1.0 - material.roughness) * 100.0)?;
        writeln!(writer, "Pr {:.2}", material.roughness)?;
        writeln!(writer, "illum 2")?;
    }

    Ok(seen.len())
}

/// Build the scene for `layout` and write `<path>` plus a sibling `.mtl`
pub fn export_house(layout: &HouseLayout, obj_path: &Path) -> Result<ExportStats> {
    let scene = build_house_scene(layout)?;

    let mtl_path = obj_path.with_extension("mtl");
    let mtl_name = mtl_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let mut obj = BufWriter::new(File::create(obj_path)?);
    write_obj(&scene, &mut obj, mtl_name.as_deref())?;
    obj.flush()?;

    let mut mtl = BufWriter::new(File::create(&mtl_path)?);
    let materials = write_mtl(&scene, &mut mtl)?;
    mtl.flush()?;

    let stats = ExportStats {
        objects: scene.parts.len(),
        materials,
        vertices: scene.vertex_count(),
        triangles: scene.triangle_count(),
    };
    tracing::info!(
        path = %obj_path.display(),
        objects = stats.objects,
        materials = stats.materials,
        vertices = stats.vertices,
        triangles = stats.triangles,
        "Wrote OBJ export"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use house_tour_core::{generate_house, HouseSpecification};

    fn scene() -> HouseScene {
        let house = generate_house(&HouseSpecification::default()).unwrap();
        build_house_scene(&house.layout).unwrap()
    }

    #[test]
    fn test_obj_line_counts() {
        let scene = scene();
        let mut out = Vec::new();
        write_obj(&scene, &mut out, Some("house.mtl")).unwrap();
        let text = String::from_utf8(out).unwrap();

        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), scene.vertex_count());
        assert_eq!(count("vn "), scene.vertex_count());
        assert_eq!(count("f "), scene.triangle_count());
        assert_eq!(count("o "), scene.parts.len());
        assert!(text.contains("mtllib house.mtl"));
    }

    #[test]
    fn test_obj_indices_in_range() {
        let scene = scene();
        let mut out = Vec::new();
        write_obj(&scene, &mut out, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        let total = scene.vertex_count() as u32;

        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for corner in line[2..].split_whitespace() {
                let index: u32 = corner.split("//").next().unwrap().parse().unwrap();
                assert!(index >= 1 && index <= total);
            }
        }
    }

    #[test]
    fn test_mtl_dedupes_materials() {
        let scene = scene();
        let mut out = Vec::new();
        let written = write_mtl(&scene, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let distinct: FxHashSet<_> = scene.parts.iter().map(|p| p.material.name).collect();
        assert_eq!(written, distinct.len());
        assert_eq!(text.matches("newmtl ").count(), distinct.len());
    }

    #[test]
    fn test_empty_scene_rejected() {
        let mut out = Vec::new();
        let result = write_obj(&HouseScene::default(), &mut out, None);
        assert!(matches!(result, Err(Error::EmptyMesh(_))));
    }
}
