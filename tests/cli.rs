use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const SAMPLE_RATE: u32 = 8_000;

/// Write a WAV fixture: half a second of 200 Hz tone, half a second of
/// silence.
fn write_fixture(path: &Path) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create fixture wav");

    for i in 0..(SAMPLE_RATE / 2) {
        let t = i as f64 / SAMPLE_RATE as f64;
        let value = (2.0 * std::f64::consts::PI * 200.0 * t).sin() * 0.5;
        writer
            .write_sample((value * i16::MAX as f64) as i16)
            .expect("write sample");
    }
    for _ in 0..(SAMPLE_RATE / 2) {
        writer.write_sample(0_i16).expect("write sample");
    }
    writer.finalize().expect("finalize fixture wav");
}

#[test]
fn reports_features_and_segmentation_for_a_wav() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav = dir.path().join("fixture.wav");
    write_fixture(&wav);

    Command::cargo_bin("sonalyzer")
        .expect("binary builds")
        .arg(&wav)
        .arg("--frame-duration-ms")
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample rate: 8000 Hz"))
        .stdout(predicate::str::contains("F0:     200.00 Hz"))
        .stdout(predicate::str::contains("Silence ratio: 0.5000"));
}

#[test]
fn json_report_is_well_formed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav = dir.path().join("fixture.wav");
    write_fixture(&wav);

    let output = Command::cargo_bin("sonalyzer")
        .expect("binary builds")
        .arg(&wav)
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(report["sample_rate"], 8_000);
    assert_eq!(report["sample_count"], 8_000);
    assert!(report["features"]["fundamental_hz"].is_number());
    let ratio = report["segmentation"]["silence_ratio"]
        .as_f64()
        .expect("silence ratio present");
    assert!((ratio - 0.5).abs() < 1e-9);
    assert!(report["segmentation"]["voiced"].is_array());
}

#[test]
fn missing_input_file_fails_cleanly() {
    Command::cargo_bin("sonalyzer")
        .expect("binary builds")
        .arg("no-such-file.wav")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn rejects_non_positive_frame_duration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav = dir.path().join("fixture.wav");
    write_fixture(&wav);

    Command::cargo_bin("sonalyzer")
        .expect("binary builds")
        .arg(&wav)
        .arg("--frame-duration-ms")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Frame duration must be positive"));
}
