use std::sync::Arc;

use cameraman_common::clock::ManualClock;
use cameraman_common::config::TrackingSettings;
use cameraman_controller::RecordingCameraController;
use cameraman_model::frame::parse_frames;
use cameraman_model::geometry::{BoundingBox, FrameSize, Point};
use cameraman_model::modes::{RotationMode, StrategyKind, ZoomInMode};
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};
use cameraman_tracking::{
    CameramanMode, CameramanModeManager, ConfigurableTrackingStrategy, Destination,
    RotateSearchTargetStrategy, Strategy, TrackingStrategy,
};

fn settings(strategy: StrategyKind) -> TrackingSettings {
    TrackingSettings {
        frame_width: 640.0,
        frame_height: 480.0,
        variance: 50.0,
        strategy,
        ..Default::default()
    }
}

fn manager(
    strategy: StrategyKind,
    clock: &ManualClock,
) -> CameramanModeManager<RecordingCameraController> {
    CameramanModeManager::from_settings(
        RecordingCameraController::new(),
        &settings(strategy),
        Arc::new(clock.clone()),
    )
}

/// A box whose height lies within the acceptable size range (188..=288).
fn well_sized_target(x: f64, y: f64) -> BoundingBox {
    BoundingBox::from_center_and_size(Point::new(x, y), 80.0, 220.0)
}

#[test]
fn lost_target_searches_regardless_of_prior_mode() {
    let clock = ManualClock::new();
    for prior in [CameramanMode::Tracking, CameramanMode::Aligning, CameramanMode::Searching] {
        let mut m = manager(StrategyKind::Simple, &clock);
        match prior {
            CameramanMode::Aligning => {
                m.update(None, true);
                m.update(Some(&well_sized_target(500.0, 240.0)), false);
            }
            CameramanMode::Searching => m.update(None, true),
            _ => m.update(Some(&well_sized_target(320.0, 240.0)), false),
        }
        assert_eq!(m.mode(), prior);

        m.update(None, true);
        assert_eq!(m.mode(), CameramanMode::Searching);
        assert_eq!(
            m.camera_speeds().pan_speed,
            RotateSearchTargetStrategy::DEFAULT_SPEED
        );
    }
}

#[test]
fn centered_target_is_tracked_without_rotation() {
    let clock = ManualClock::new();
    for kind in [StrategyKind::Simple, StrategyKind::Configurable] {
        let mut m = manager(kind, &clock);
        m.update(None, true);
        m.update(Some(&well_sized_target(320.0, 240.0)), false);
        assert_eq!(m.mode(), CameramanMode::Tracking);
        assert_eq!(m.camera_speeds().pan_speed, 0.0);
        assert_eq!(m.camera_speeds().tilt_speed, 0.0);
        assert_eq!(m.camera_speeds().zoom_speed, ZoomSpeed::ZoomStopped);
    }
}

#[test]
fn unaligned_target_keeps_aligning_with_rightward_pan() {
    let clock = ManualClock::new();
    for kind in [StrategyKind::Simple, StrategyKind::Configurable] {
        let mut m = manager(kind, &clock);
        m.update(None, true);
        m.update(Some(&well_sized_target(420.0, 240.0)), false);
        assert_eq!(m.mode(), CameramanMode::Aligning);

        m.update(Some(&well_sized_target(420.0, 240.0)), false);
        assert_eq!(m.mode(), CameramanMode::Aligning);
        assert!(m.camera_speeds().pan_speed > 0.0, "{kind:?}");
    }
}

#[test]
fn repeated_identical_input_is_idempotent() {
    let clock = ManualClock::new();
    let mut strategy = ConfigurableTrackingStrategy::new(
        Destination::new(FrameSize::new(640.0, 480.0), 50.0),
        500.0,
    );
    strategy.set_zoom_in_mode(ZoomInMode::Gradually);
    let mut strategy = Strategy::Configurable(strategy).stop_if_lost(1.0, Arc::new(clock));

    let target = BoundingBox::from_center_and_size(Point::new(450.0, 180.0), 30.0, 90.0);
    let mut first = CameraSpeeds::default();
    strategy.update(&mut first, Some(&target), false);
    let mut second = first;
    strategy.update(&mut second, Some(&target), false);
    assert_eq!(first, second);
}

#[test]
fn loss_decays_tracking_speed_to_zero() {
    let clock = ManualClock::new();
    let mut m = manager(StrategyKind::Simple, &clock);

    // tracking at 160px right of center: 160 / 320 * 500
    m.update(Some(&well_sized_target(480.0, 240.0)), false);
    assert_eq!(m.mode(), CameramanMode::Tracking);
    assert!((m.camera_speeds().pan_speed - 250.0).abs() < 1e-9);

    // the detector still reports a stale box while flagging the loss
    let stale = well_sized_target(480.0, 240.0);
    m.update(Some(&stale), true);
    assert_eq!(m.mode(), CameramanMode::Tracking);
    assert!((m.camera_speeds().pan_speed - 250.0).abs() < 1e-9);

    clock.advance_secs(0.5);
    m.update(Some(&stale), true);
    assert!((m.camera_speeds().pan_speed - 125.0).abs() < 1e-9);

    clock.advance_secs(0.5);
    m.update(Some(&stale), true);
    assert_eq!(m.camera_speeds().pan_speed, 0.0);
    assert_eq!(m.camera_speeds().zoom_speed, ZoomSpeed::ZoomStopped);
}

#[test]
fn rotation_mode_change_applies_to_both_strategies() {
    let clock = ManualClock::new();
    let mut m = manager(StrategyKind::Configurable, &clock);
    m.set_rotation_mode(RotationMode::Stop);

    // within the variance: quadratic-to-linear would creep, stop does not
    m.update(Some(&well_sized_target(340.0, 240.0)), false);
    assert_eq!(m.camera_speeds().pan_speed, 0.0);

    m.set_rotation_mode(RotationMode::QuadraticToLinear);
    m.update(Some(&well_sized_target(340.0, 240.0)), false);
    assert!(m.camera_speeds().pan_speed > 0.0);
}

#[test]
fn replays_recorded_frames() {
    let jsonl = r#"
# searching, then the target shows up right of center and gets centered
{"target": null, "is_target_lost": true}
{"target": {"x": 460, "y": 130, "width": 80, "height": 220}, "is_target_lost": false}
{"target": {"x": 380, "y": 130, "width": 80, "height": 220}, "is_target_lost": false}
{"target": {"x": 280, "y": 130, "width": 80, "height": 220}, "is_target_lost": false}
"#;
    let frames = parse_frames(jsonl).unwrap();
    let clock = ManualClock::new();
    let mut m = manager(StrategyKind::Simple, &clock);

    let mut modes = vec![];
    for frame in &frames {
        m.update(frame.target.as_ref(), frame.is_target_lost);
        modes.push(m.mode());
        clock.advance_secs(1.0 / 15.0);
    }

    assert_eq!(
        modes,
        vec![
            CameramanMode::Searching,
            CameramanMode::Aligning,
            CameramanMode::Aligning,
            CameramanMode::Tracking,
        ]
    );
    assert_eq!(m.camera_controller().updates().len(), frames.len());

    m.stop();
    assert_eq!(m.camera_controller().stopped_with(), Some(&CameraSpeeds::default()));
}
