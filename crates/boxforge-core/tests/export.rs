//! Integration tests for build -> export -> read back

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use boxforge_core::export::PLACEHOLDER_UVS;
use boxforge_core::prelude::*;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boxforge_test_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn lines_with<'a>(text: &'a str, prefix: &str) -> Vec<&'a str> {
    text.lines().filter(|l| l.starts_with(prefix)).collect()
}

#[test]
fn default_color_box_has_eight_vertices_and_green_material() {
    let dir = temp_dir("scenario_a");
    let obj = dir.join("box.obj");

    let result = export_box(
        &Dimensions::new(2.0, 3.0, 4.0),
        Color::default(),
        ExportProfile::Extended,
        &obj,
    )
    .expect("Export should succeed");

    assert_eq!(result.vertex_count, 8);
    assert_eq!(result.triangle_count, 12);
    assert_eq!(result.mtl_path, dir.join("box.mtl"));

    let geometry = std::fs::read_to_string(&obj).unwrap();
    let material = std::fs::read_to_string(&result.mtl_path).unwrap();
    assert_eq!(lines_with(&geometry, "v ").len(), 8);
    assert_eq!(lines_with(&material, "Kd "), ["Kd 0.0 1.0 0.0"]);
    assert_eq!(lines_with(&geometry, "mtllib "), ["mtllib box.mtl"]);
    assert!(geometry.contains("# Dimensions: 2.0cm x 3.0cm x 4.0cm"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn red_extended_material_has_highlights() {
    let dir = temp_dir("scenario_b");
    let result = export_box(
        &Dimensions::default(),
        Color::new(1.0, 0.0, 0.0),
        ExportProfile::Extended,
        dir.join("red.obj"),
    )
    .unwrap();

    let material = std::fs::read_to_string(&result.mtl_path).unwrap();
    assert_eq!(lines_with(&material, "Kd "), ["Kd 1.0 0.0 0.0"]);
    assert_eq!(lines_with(&material, "illum "), ["illum 2"]);
    assert_eq!(lines_with(&material, "Ns "), ["Ns 96.078431"]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn whole_number_dimensions_are_written_as_reals() {
    let dir = temp_dir("scenario_c");
    let obj = dir.join("cube.obj");
    export_box(
        &Dimensions::new(2.0, 2.0, 2.0),
        Color::default(),
        ExportProfile::Minimal,
        &obj,
    )
    .unwrap();

    let geometry = std::fs::read_to_string(&obj).unwrap();
    let vertices = lines_with(&geometry, "v ");
    assert_eq!(vertices[0], "v 0.0 0.0 0.0");
    assert_eq!(vertices[6], "v 2.0 2.0 2.0");
    assert!(!geometry.contains("v 0 0 0"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn round_trip_recovers_dimensions_and_color() {
    let dir = temp_dir("round_trip");

    for (i, profile) in [ExportProfile::Minimal, ExportProfile::Extended]
        .into_iter()
        .enumerate()
    {
        let dims = Dimensions::new(12.5, 0.3, 7.0 / 3.0);
        let color = Color::new(0.25, 0.5, 0.75);
        let obj = dir.join(format!("rt_{}.obj", i));
        export_box(&dims, color, profile, &obj).unwrap();

        let loaded = load_box(&obj).expect("Export should read back");
        assert_relative_eq!(loaded.dimensions.width, dims.width);
        assert_relative_eq!(loaded.dimensions.height, dims.height);
        assert_relative_eq!(loaded.dimensions.depth, dims.depth);
        assert_eq!(loaded.color, color);
        assert_eq!(loaded.profile, profile);
        assert_eq!(loaded.mesh, Mesh::cuboid(&dims));
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn extended_sides_share_one_normal_per_triangle_pair() {
    let dir = temp_dir("normals");
    let obj = dir.join("n.obj");
    export_box(&Dimensions::new(1.0, 2.0, 3.0), Color::default(), ExportProfile::Extended, &obj)
        .unwrap();

    let loaded = load_box(&obj).unwrap();
    assert_eq!(loaded.face_normals.len(), 12);
    for (pair_index, pair) in loaded.face_normals.chunks(2).enumerate() {
        let side = Side::ALL[pair_index];
        assert_eq!(pair, [side.normal(); 2], "{} normals", side.name());
    }
    for uvs in &loaded.face_uvs {
        assert_eq!(uvs[..], PLACEHOLDER_UVS[..3]);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn identical_exports_are_byte_identical() {
    let dir = temp_dir("idempotent");
    let obj = dir.join("same.obj");
    let dims = Dimensions::new(3.0, 1.5, 9.0);

    export_box(&dims, Color::new(0.1, 0.2, 0.3), ExportProfile::Extended, &obj).unwrap();
    let first = (std::fs::read(&obj).unwrap(), std::fs::read(dir.join("same.mtl")).unwrap());

    export_box(&dims, Color::new(0.1, 0.2, 0.3), ExportProfile::Extended, &obj).unwrap();
    let second = (std::fs::read(&obj).unwrap(), std::fs::read(dir.join("same.mtl")).unwrap());

    assert_eq!(first, second);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn concurrent_exports_with_unique_names_do_not_collide() {
    let dir = temp_dir("concurrent");

    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let dir = dir.clone();
            std::thread::spawn(move || {
                let dims = Dimensions::new(f64::from(i), 1.0, 1.0);
                let name = ExportName::unique(&dims);
                export_box(&dims, Color::default(), ExportProfile::Extended, name.obj_path(&dir))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<ExportResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, result) in results.iter().enumerate() {
        let loaded = load_box(&result.obj_path).unwrap();
        assert_relative_eq!(loaded.dimensions.width, (i + 1) as f64);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn geometry_failure_leaves_material_behind() {
    let dir = temp_dir("orphan");
    // A directory where the geometry file should go makes only the second write fail
    let obj = dir.join("blocked.obj");
    std::fs::create_dir_all(&obj).unwrap();

    let result = export_box(&Dimensions::default(), Color::default(), ExportProfile::Extended, &obj);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(dir.join("blocked.mtl").is_file());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn export_then_bundle_archive() {
    let dir = temp_dir("bundle");
    let name = ExportName::unique(&Dimensions::new(2.0, 3.0, 4.0));
    let result = export_box(
        &Dimensions::new(2.0, 3.0, 4.0),
        Color::default(),
        ExportProfile::Extended,
        name.obj_path(&dir),
    )
    .unwrap();

    let zip_path = name.zip_path(&dir);
    bundle_archive(&result.artifacts(), &zip_path).expect("Archive should be written");

    let archive = zip::ZipArchive::new(std::fs::File::open(&zip_path).unwrap()).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(names, [name.mtl_file(), name.obj_file()]);
    // Sources stay on disk next to the archive
    assert!(result.obj_path.is_file());
    assert!(result.mtl_path.is_file());

    std::fs::remove_dir_all(&dir).ok();
}
