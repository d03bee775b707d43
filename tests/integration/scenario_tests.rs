//! End-to-end scenarios: an analog reading in, a waveform out.

use antitartre::app::service::ControllerState;
use antitartre::error::Line;
use antitartre::mode::{IndicatorCode, OperatingMode};

use super::mock_hw::{started_rig, TraceEvent};

#[test]
fn reading_50_sweeps_all_bands_then_resamples() {
    let (mut app, trace, mut sink) = started_rig(&[50, 900]);

    assert_eq!(app.cycle(&mut sink).unwrap(), OperatingMode::Sweep);
    {
        let t = trace.borrow();
        // One sample, taken before the first edge, none during the sweep.
        assert_eq!(t.samples(), vec![50]);
        let sample_at = t.position(|e| matches!(e, TraceEvent::Sample(_))).unwrap();
        let first_edge = t
            .position(|e| matches!(e, TraceEvent::Write { line: Line::Osc1, .. }))
            .unwrap();
        assert!(sample_at < first_edge);

        let runs = t.hold_runs();
        let bursts: Vec<(u32, usize)> = runs
            .iter()
            .copied()
            .filter(|&(ns, _)| ns != 10_000 && ns != 5_000)
            .collect();
        assert_eq!(
            bursts,
            vec![(480_000, 1_000), (230_000, 2_000), (81_000, 5_000), (30_000, 10_000)]
        );
        // The sweep ends with its pause.
        assert_eq!(runs.last(), Some(&(10_000, 1)));
    }

    // Control returns to the sampler.
    assert_eq!(app.state(), ControllerState::Running);
    trace.borrow_mut().clear();
    assert_eq!(app.cycle(&mut sink).unwrap(), OperatingMode::Freq1k);
    assert_eq!(trace.borrow().samples(), vec![900]);
}

#[test]
fn reading_900_runs_one_1khz_burst() {
    let (mut app, trace, mut sink) = started_rig(&[900]);

    assert_eq!(app.cycle(&mut sink).unwrap(), OperatingMode::Freq1k);

    let t = trace.borrow();
    assert_eq!(t.writes_to(Line::Osc1), 1_000);
    assert_eq!(t.hold_runs(), vec![(5_000, 1), (480_000, 1_000)]);
    for (_, levels) in t.holds().into_iter().skip(1) {
        assert_eq!(levels.indicator(), IndicatorCode { a: true, b: false });
        assert!(levels.is_antiphase());
    }
}

#[test]
fn input_change_mid_burst_waits_for_next_cycle() {
    // The reading drops into the sweep tier while 2 kHz is running.
    let (mut app, trace, mut sink) = started_rig(&[700]);
    app.input_mut().push(50);

    assert_eq!(app.cycle(&mut sink).unwrap(), OperatingMode::Freq2k);
    assert_eq!(trace.borrow().samples(), vec![700]);

    assert_eq!(app.cycle(&mut sink).unwrap(), OperatingMode::Sweep);
}

#[test]
fn boundary_readings_select_upper_band() {
    let readings = [199, 200, 399, 400, 799, 800];
    let (mut app, _trace, mut sink) = started_rig(&readings);
    let modes: Vec<OperatingMode> = readings
        .iter()
        .map(|_| app.cycle(&mut sink).unwrap())
        .collect();
    assert_eq!(
        modes,
        vec![
            OperatingMode::Sweep,
            OperatingMode::Freq10k,
            OperatingMode::Freq10k,
            OperatingMode::Freq5k,
            OperatingMode::Freq2k,
            OperatingMode::Freq1k,
        ]
    );
}
