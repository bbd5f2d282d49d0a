/*
    DayWheel

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

use std::{fs, path::PathBuf, process::Command};

const ACTIVITIES: &str = r##"[
    { "id": 1, "name": "Work", "start": 600, "end": 1200, "color": "#ff9800", "borderColor": "#e65100", "priority": 5 },
    { "id": 2, "name": "Sleep", "start": 900, "end": 60, "color": "#3f51b5", "borderColor": "#283593", "priority": 3 }
]"##;

fn daywheel() -> Command {
    Command::new(env!("CARGO_BIN_EXE_daywheel"))
}

fn write_activities(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("activities.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn version() {
    let output = daywheel().arg("version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("daywheel v"));
}

#[test]
fn render_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_activities(&dir, ACTIVITIES);
    let output_path = dir.path().join("out.svg");

    let output = daywheel()
        .args(["render", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<path").count(), 5);
    assert!(svg.contains("24h"));
}

#[test]
fn render_with_style_and_switches() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_activities(&dir, ACTIVITIES);
    let style = dir.path().join("style.toml");
    fs::write(&style, "[dial]\nhub_text = \"\"\n").unwrap();
    let output_path = dir.path().join("out.svg");

    let output = daywheel()
        .args(["--silent", "render", "--winner", "--arc", "--size", "800", "--style"])
        .arg(&style)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 800 800\""));
    assert!(svg.contains("<textPath"));
    assert!(!svg.contains("24h"));
    // One band per slice
    assert_eq!(svg.matches("id=\"band-").count(), 4);
}

#[test]
fn slices_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_activities(&dir, ACTIVITIES);

    let output = daywheel().args(["slices", "--json", "-i"]).arg(&input).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slices = report.as_array().unwrap();
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[2]["start"], 900);
    assert_eq!(slices[2]["end"], 1200);
    assert_eq!(slices[2]["active"][0]["originId"], 1);
    assert_eq!(slices[2]["active"][1]["originId"], 2);
    assert_eq!(slices[0]["active"][0]["wrapped"], true);
}

#[test]
fn invalid_activity_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_activities(&dir, r#"[{ "id": 7, "name": "bad", "start": 1500, "end": 10 }]"#);

    let output = daywheel().args(["slices", "-i"]).arg(&input).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Activity 7"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = daywheel()
        .args(["render", "-i"])
        .arg(dir.path().join("nope.json"))
        .arg("-o")
        .arg(dir.path().join("out.svg"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
