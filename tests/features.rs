use approx::assert_abs_diff_eq;
use sonalyzer::analysis::{amdf, autocorrelation, compute_features, extract_frame};
use sonalyzer::types::Signal;

const SAMPLE_RATE: u32 = 16_000;

fn sine_signal(freq: f64, seconds: f64, amplitude: f32) -> Signal {
    let count = (SAMPLE_RATE as f64 * seconds) as usize;
    let samples = (0..count)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            (2.0 * std::f64::consts::PI * freq * t).sin() as f32 * amplitude
        })
        .collect();
    Signal::from_mono(samples, SAMPLE_RATE).unwrap()
}

#[test]
fn acf_global_maximum_sits_at_zero_lag() {
    let signal = sine_signal(220.0, 0.05, 0.5);
    let acf = autocorrelation(signal.samples());

    let energy: f32 = signal.samples().iter().map(|s| s * s).sum();
    assert_abs_diff_eq!(acf[0], energy, epsilon = energy * 1e-5);
    for (lag, &value) in acf.iter().enumerate().skip(1) {
        assert!(acf[0] >= value, "acf[{}] exceeds acf[0]", lag);
    }
}

#[test]
fn amdf_is_zero_at_zero_lag_for_any_nonempty_range() {
    for seconds in [0.01, 0.05, 0.2] {
        let signal = sine_signal(180.0, seconds, 0.4);
        let out = amdf(signal.samples());
        assert_eq!(out[0], 0.0);
        assert_eq!(out.len(), signal.len());
    }
}

#[test]
fn correlation_functions_accept_frame_ranges() {
    let signal = sine_signal(220.0, 0.5, 0.5);
    let frame = extract_frame(&signal, 0.25, 40.0).unwrap();
    let range = frame.samples(&signal);

    let acf = autocorrelation(range);
    let diff = amdf(range);
    assert_eq!(acf.len(), frame.len());
    assert_eq!(diff.len(), frame.len());
    assert_eq!(diff[0], 0.0);
}

#[test]
fn whole_signal_frame_covers_every_sample() {
    let signal = sine_signal(220.0, 0.5, 0.5);
    let duration_ms = signal.duration_seconds() * 1000.0;
    let frame = extract_frame(&signal, 0.0, duration_ms).unwrap();
    assert_eq!(frame.start, 0);
    assert_eq!(frame.end, signal.len());
}

#[test]
fn trailing_frame_yields_no_data_not_a_crash() {
    let signal = sine_signal(220.0, 0.5, 0.5);
    let frame = extract_frame(&signal, 1.0, 30.0).unwrap();
    assert!(frame.is_empty());
    assert!(compute_features(&signal, frame).is_none());
}

#[test]
fn frame_features_match_hand_computation() {
    let signal = sine_signal(100.0, 0.5, 0.8);
    let frame = extract_frame(&signal, 0.0, 100.0).unwrap();
    let features = compute_features(&signal, frame).unwrap();

    // full periods of a sine: energy is amplitude^2 / 2
    assert_abs_diff_eq!(features.energy, 0.32, epsilon = 1e-3);
    assert_abs_diff_eq!(features.volume, 0.32_f32.sqrt(), epsilon = 1e-3);
    // 100 Hz crosses zero 200 times per second
    assert_abs_diff_eq!(
        features.zero_crossing_rate,
        200.0 / SAMPLE_RATE as f32,
        epsilon = 2.0 / SAMPLE_RATE as f32
    );
}
