//! End-to-end check: project a batch, write the table, read it back.

use pixres::geometry::OpticalGeometry;
use pixres::projector::{heights_from_resolutions, resolution_from_heights};
use pixres::report::write_result_table;
use pixres::units::DistanceUnit;
use std::fs;
use tempfile::TempDir;

#[test]
fn forward_run_produces_readable_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("PixResolution.csv");

    let camera = OpticalGeometry::new(4000.0, 3000.0, 60.0, 45.0);
    // Unsorted on purpose; the table must come out ascending.
    let series = resolution_from_heights(&camera, &[200.0, 100.0, 150.0]).unwrap();
    let unit = DistanceUnit::new("meters");

    write_result_table(&path, "dji-p4", &unit, &series).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "dji-p4");
    assert_eq!(
        lines[1],
        "AGL (meters),100.000000,150.000000,200.000000"
    );

    // Resolution row must grow with AGL.
    let resolutions: Vec<f64> = lines[2]
        .split(',')
        .skip(1)
        .map(|field| field.parse().unwrap())
        .collect();
    assert!(resolutions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn inverse_run_recovers_forward_heights() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("AGL_Resolution.csv");

    // Square geometry keeps the two directions exact inverses.
    let camera = OpticalGeometry::new(3000.0, 3000.0, 50.0, 50.0);
    let forward = resolution_from_heights(&camera, &[120.0]).unwrap();
    let resolution = forward.rows()[0].pixel_resolution;

    let inverse = heights_from_resolutions(&camera, &[resolution]).unwrap();
    write_result_table(&path, "roundtrip", &DistanceUnit::new("feet"), &inverse).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let agl_row = contents.lines().nth(1).unwrap();
    let agl: f64 = agl_row.split(',').nth(1).unwrap().parse().unwrap();
    assert!((agl - 120.0).abs() < 1e-6);
}
