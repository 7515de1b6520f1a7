// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use seamresize::{grid_to_image, Color, PixelGrid};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let grid = PixelGrid::from_fn(6, 8, |r, c| Color::new((r * 40) as u8, (c * 30) as u8, 90));
    let path = dir.path().join("sample.png");
    grid_to_image(&grid).save(&path).unwrap();
    path
}

fn dimensions_of(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

#[test]
fn resizes_both_ways() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let output = dir.path().join("resized.png");

    Command::cargo_bin("seamresize")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "5", "--height", "9"])
        .assert()
        .success();

    assert_eq!(dimensions_of(&output), (5, 9));
}

#[test]
fn missing_dimensions_are_kept() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let output = dir.path().join("narrow.png");

    Command::cargo_bin("seamresize")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "4"])
        .assert()
        .success();

    assert_eq!(dimensions_of(&output), (4, 6));
}

#[test]
fn verbose_runs_report_timing() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let output = dir.path().join("timed.png");

    Command::cargo_bin("seamresize")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--height", "4", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resized in"));
}

#[test]
fn zero_is_not_a_dimension() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("seamresize")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("never.png"))
        .args(&["--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn unreadable_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seamresize")
        .unwrap()
        .arg(dir.path().join("absent.png"))
        .arg(dir.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("seamresize:"));
}
