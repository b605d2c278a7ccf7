// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indoc::indoc;
use tempfile::TempDir;

use crate::{get_cmd_output, rmsynth};

fn read_json_rows(path: &std::path::Path) -> Vec<serde_json::Value> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_simulate_defaults() {
    let tmp = TempDir::new().unwrap();
    let fdf = tmp.path().join("fdf.json");
    let cmd = rmsynth()
        .args(["simulate", "--no-progress-bars", "-o"])
        .arg(&fdf)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("900 frequencies"), "{stdout}");
    assert!(stdout.contains("Local maxima"), "{stdout}");

    let rows = read_json_rows(&fdf);
    assert_eq!(rows.len(), 2000);
    assert_eq!(rows[0]["phi"], -1000);
    assert_eq!(rows[1999]["phi"], 999);

    // The two strongest depths are near the injected components.
    let mut by_abs = rows
        .iter()
        .map(|r| (r["phi"].as_i64().unwrap(), r["abs"].as_f64().unwrap()))
        .collect::<Vec<_>>();
    by_abs.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut strongest = [by_abs[0].0, by_abs[1].0];
    strongest.sort_unstable();
    assert!((strongest[0] - 7).abs() <= 5, "{strongest:?}");
    assert!((strongest[1] - 40).abs() <= 5, "{strongest:?}");
}

#[test]
fn test_simulate_custom() {
    let tmp = TempDir::new().unwrap();
    let fdf = tmp.path().join("fdf.tsv");
    let spectrum = tmp.path().join("spectrum.json");
    let cmd = rmsynth()
        .args([
            "simulate",
            "--no-progress-bars",
            "--profile",
            "wsrt",
            "--component",
            "3,-17,0.5",
            "--phi-low",
            "-50",
            "--phi-high",
            "50",
            "--spectrum-outputs",
        ])
        .arg(&spectrum)
        .arg("-o")
        .arg(&fdf)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let contents = std::fs::read_to_string(&fdf).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "# phi\tre\tim\tabs");
    let peak = lines[1..]
        .iter()
        .map(|l| {
            let cols = l.split('\t').collect::<Vec<_>>();
            (
                cols[0].parse::<i64>().unwrap(),
                cols[3].parse::<f64>().unwrap(),
            )
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!(peak.0, -17);
    assert!((peak.1 - 3.0).abs() < 1e-6, "{peak:?}");

    assert_eq!(read_json_rows(&spectrum).len(), 400);
}

#[test]
fn test_simulate_bands() {
    let tmp = TempDir::new().unwrap();
    let fdf = tmp.path().join("fdf.txt");
    let cmd = rmsynth()
        .args([
            "simulate",
            "--no-progress-bars",
            "--band",
            "700,1300,600",
            "--band",
            "1500,1800,300",
            "--phi-low=-10",
            "--phi-high=10",
            "-o",
        ])
        .arg(&fdf)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("900 frequencies"), "{stdout}");
    assert_eq!(std::fs::read_to_string(&fdf).unwrap().lines().count(), 21);
}

#[test]
fn test_simulate_empty_range() {
    let cmd = rmsynth()
        .args([
            "simulate",
            "--no-progress-bars",
            "--phi-low",
            "5",
            "--phi-high",
            "5",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("[5, 5)"), "{stderr}");
}

#[test]
fn test_simulate_bad_band() {
    let cmd = rmsynth()
        .args(["simulate", "--no-progress-bars", "--band", "700,1300,1"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("at least 2"), "{stderr}");
}

#[test]
fn test_simulate_profile_and_band_conflict() {
    let cmd = rmsynth()
        .args([
            "simulate",
            "--profile",
            "WSRT",
            "--band",
            "700,1300,600",
        ])
        .ok();
    assert!(cmd.is_err());
}

#[test]
fn test_simulate_dry_run() {
    let tmp = TempDir::new().unwrap();
    let fdf = tmp.path().join("fdf.json");
    let cmd = rmsynth()
        .args(["simulate", "--no-progress-bars", "--dry-run", "-o"])
        .arg(&fdf)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!fdf.exists());
}

#[test]
fn test_simulate_args_file_and_save_toml() {
    let tmp = TempDir::new().unwrap();
    let args_file = tmp.path().join("args.toml");
    std::fs::write(
        &args_file,
        indoc! {r#"
            [grid]
            profile = "ASKAP36"

            [simulate]
            components = ["1,12,0"]
            phi_low = -30
            phi_high = 30
        "#},
    )
    .unwrap();
    let fdf = tmp.path().join("fdf.json");
    let saved = tmp.path().join("saved.toml");

    let cmd = rmsynth()
        .arg("simulate")
        .arg(&args_file)
        .arg("--no-progress-bars")
        .arg("--save-toml")
        .arg(&saved)
        .arg("-o")
        .arg(&fdf)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let rows = read_json_rows(&fdf);
    assert_eq!(rows.len(), 60);
    let saved = std::fs::read_to_string(&saved).unwrap();
    assert!(saved.contains("ASKAP36"), "{saved}");
    assert!(saved.contains("1,12,0"), "{saved}");
}
