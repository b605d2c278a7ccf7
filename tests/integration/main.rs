// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod grid;
mod simulate;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

fn rmsynth() -> Command {
    Command::cargo_bin("rmsynth").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

#[test]
fn test_help() {
    let (stdout, _) = get_cmd_output(rmsynth().arg("--help").ok());
    assert!(stdout.contains("simulate"), "{stdout}");
    assert!(stdout.contains("profiles"), "{stdout}");
}

#[test]
fn test_profiles() {
    let cmd = rmsynth().arg("profiles").arg("--no-progress-bars").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    for profile in ["WSRT", "ASKAP12", "ASKAP36"] {
        assert!(stdout.contains(profile), "{stdout}");
    }
    assert!(stdout.contains("310 - 380 MHz (400 channels)"), "{stdout}");
    assert!(stdout.contains("1500 - 1800 MHz (300 channels)"), "{stdout}");
}

#[test]
fn test_unknown_subcommand() {
    let cmd = rmsynth().arg("calibrate").ok();
    assert!(cmd.is_err());
}
