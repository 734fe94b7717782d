//! Cross-crate scenarios: CSV in, assembly tree out, invariants checked
//! through the harness assertions.

use carcass_engine::compose_scene;
use file_format::run_batch;
use joinery_types::FrontType;
use test_harness::assertions::{assert_box_size, assert_part_count, assert_position};
use test_harness::{basic_spec, BatchCsvBuilder};

#[test]
fn kitchen_row_from_csv() {
    let csv = BatchCsvBuilder::new()
        .row("Sink Unit", "MDF", "Oak", 500.0, 720.0, 560.0, 0, 0, false)
        .row("Corner Unit", "MDF", "Oak", 700.0, 720.0, 560.0, -1, 0, true)
        .row("Slim Unit", "MDF", "Walnut", 300.0, 720.0, 560.0, 0, 2, false)
        .build();

    let (scene, metadata) = run_batch(&csv, "kitchen").unwrap();
    assert_eq!(metadata.cabinet_count, 3);

    // Prefix-sum placement: [250, 850, 1350].
    let centers: Vec<f64> = scene
        .children()
        .iter()
        .map(|c| c.translation.unwrap()[0])
        .collect();
    assert_eq!(centers, vec![250.0, 850.0, 1350.0]);

    // 720 mm door gets 3 hinges.
    let corner = scene.child("Corner Unit").unwrap();
    assert_part_count(corner, "Hinge", 3).unwrap();
    assert_part_count(corner, "Foot", 6).unwrap();
}

#[test]
fn hinge_count_sweep_through_all_thresholds() {
    for (height, expected) in [
        (600.0, 2),
        (601.0, 3),
        (900.0, 3),
        (901.0, 4),
        (2000.0, 4),
        (2001.0, 5),
        (2400.0, 5),
        (2401.0, 6),
        (3000.0, 6),
    ] {
        let mut spec = basic_spec("A");
        spec.height = height;
        spec.front_type = FrontType::SingleDoor;
        spec.add_hardware = true;

        let scene = compose_scene("b", &[spec]).unwrap();
        let cabinet = scene.child("A").unwrap();
        assert_part_count(cabinet, "Hinge", expected)
            .unwrap_or_else(|e| panic!("height {height}: {e}"));
    }
}

#[test]
fn foot_count_sweep_through_all_thresholds() {
    for (width, expected) in [(500.0, 4), (600.0, 4), (601.0, 6), (1200.0, 6), (1201.0, 8)] {
        let mut spec = basic_spec("A");
        spec.width = width;
        let scene = compose_scene("b", &[spec]).unwrap();
        let cabinet = scene.child("A").unwrap();
        assert_part_count(cabinet, "Foot", expected)
            .unwrap_or_else(|e| panic!("width {width}: {e}"));
    }
}

#[test]
fn shelf_centers_are_evenly_spaced() {
    let mut spec = basic_spec("A");
    spec.height = 1000.0;
    spec.shelf_count = 3;

    let scene = compose_scene("b", &[spec]).unwrap();
    let cabinet = scene.child("A").unwrap();
    // Interior [18, 982], gaps of 241. Depth-wise the shelf sits behind
    // the front-thickness offset: z = -280 + 18 + 271.
    assert_position(cabinet, "Shelf 1", [0.0, 259.0, 9.0], 1e-9).unwrap();
    assert_position(cabinet, "Shelf 2", [0.0, 500.0, 9.0], 1e-9).unwrap();
    assert_position(cabinet, "Shelf 3", [0.0, 741.0, 9.0], 1e-9).unwrap();
}

#[test]
fn panel_sizes_for_a_sides_win_carcass() {
    let spec = basic_spec("A");
    let scene = compose_scene("b", &[spec]).unwrap();
    let cabinet = scene.child("A").unwrap();

    assert_box_size(cabinet, "Top Panel", [564.0, 18.0, 560.0], 1e-9).unwrap();
    assert_box_size(cabinet, "Left Side Panel", [18.0, 720.0, 560.0], 1e-9).unwrap();
    assert_box_size(cabinet, "Back Panel", [564.0, 684.0, 18.0], 1e-9).unwrap();
}

#[test]
fn carved_door_still_reports_its_box_extents() {
    let mut spec = basic_spec("A");
    spec.front_type = FrontType::SingleDoor;
    spec.add_hardware = true;

    let scene = compose_scene("b", &[spec]).unwrap();
    let cabinet = scene.child("A").unwrap();
    assert_box_size(cabinet, "Single Door", [600.0, 720.0, 18.0], 1e-9).unwrap();
}
