// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use super::*;
use crate::{
    grid::FreqGrid,
    io::OutputType,
    pipeline::PipelineError,
    synth::{synthesize, FaradayComponents},
    transform::rm_synthesis,
};

fn driver_params() -> SimulateParams {
    SimulateParams {
        grid: FreqGrid::askap12(),
        components: FaradayComponents::new(&[1.0, 1.0], &[7.0, 40.0], &[0.0, 0.0]).unwrap(),
        phi_low: -1000,
        phi_high: 1000,
        maxima_threshold: 0.5,
        fdf_outputs: vec![],
        spectrum_outputs: vec![],
    }
}

#[test]
fn test_simulate_run() {
    let fdf = driver_params().run().unwrap();
    assert_eq!(fdf.len(), 2000);

    let grid = FreqGrid::askap12();
    let spectrum = synthesize(&grid, &[1.0, 1.0], &[7.0, 40.0], &[0.0, 0.0]).unwrap();
    assert_eq!(fdf, rm_synthesis(&grid, &spectrum, -1000, 1000).unwrap());
}

#[test]
fn test_simulate_writes_outputs() {
    let tmp = TempDir::new().unwrap();
    let fdf_file = tmp.path().join("fdf.tsv");
    let spectrum_file = tmp.path().join("spectrum.json");
    let params = SimulateParams {
        phi_low: -50,
        phi_high: 50,
        fdf_outputs: vec![(fdf_file.clone(), OutputType::Tsv)],
        spectrum_outputs: vec![(spectrum_file.clone(), OutputType::Json)],
        ..driver_params()
    };
    params.run().unwrap();

    let fdf_contents = std::fs::read_to_string(&fdf_file).unwrap();
    // Header plus one line per trial depth.
    assert_eq!(fdf_contents.lines().count(), 101);

    let spectrum_contents = std::fs::read_to_string(&spectrum_file).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&spectrum_contents).unwrap();
    assert_eq!(rows.len(), 900);
}

#[test]
fn test_simulate_bad_range() {
    let tmp = TempDir::new().unwrap();
    let spectrum_file = tmp.path().join("spectrum.txt");
    let params = SimulateParams {
        phi_low: 10,
        phi_high: -10,
        spectrum_outputs: vec![(spectrum_file.clone(), OutputType::Txt)],
        ..driver_params()
    };
    let result = params.run();
    assert!(matches!(
        result,
        Err(SimulateError::Pipeline(PipelineError::Transform(_)))
    ));
    // The spectrum is written before the transform is attempted.
    assert!(spectrum_file.exists());
}

#[test]
fn test_grid_run() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("grid.json");
    let params = GridParams {
        grid: FreqGrid::wsrt(),
        outputs: vec![(file.clone(), OutputType::Json)],
    };
    params.run().unwrap();
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(rows.len(), 400);
    assert_eq!(rows[0]["band"], 0);
}
