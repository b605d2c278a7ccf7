// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::{get_cmd_output, rmsynth};

#[test]
fn test_grid_default() {
    let cmd = rmsynth().arg("grid").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("900 frequencies"), "{stdout}");
    assert!(stdout.contains("700 - 1300 MHz (600 channels)"), "{stdout}");
}

#[test]
fn test_grid_write() {
    let tmp = TempDir::new().unwrap();
    let tsv = tmp.path().join("grid.tsv");
    let json = tmp.path().join("nested").join("grid.json");
    let cmd = rmsynth()
        .args(["grid", "--profile", "askap12", "-o"])
        .arg(&tsv)
        .arg(&json)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let contents = std::fs::read_to_string(&tsv).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 901);
    assert_eq!(lines[0], "# band\tfreq_hz\tlambda_sq");
    assert!(lines[1].starts_with("0\t700000000\t"), "{}", lines[1]);
    assert!(lines[900].starts_with("1\t1800000000\t"), "{}", lines[900]);

    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(rows.len(), 900);
}

#[test]
fn test_grid_overlapping_bands_warn() {
    let cmd = rmsynth()
        .args(["grid", "--band", "1000,1200,10", "--band", "1100,1300,10"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("not ascending"), "{stdout}");
}

#[test]
fn test_grid_bad_output() {
    let tmp = TempDir::new().unwrap();
    let cmd = rmsynth()
        .args(["grid", "-o"])
        .arg(tmp.path().join("grid.fits"))
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("json, txt, tsv"), "{stderr}");
}

#[test]
fn test_grid_unknown_profile() {
    let cmd = rmsynth().args(["grid", "--profile", "VLA"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("rmsynth profiles"), "{stderr}");
}

#[test]
fn test_grid_too_many_channels() {
    let cmd = rmsynth()
        .args(["grid", "--band", "1,2,18446744073709551615"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("at most"), "{stderr}");
}
