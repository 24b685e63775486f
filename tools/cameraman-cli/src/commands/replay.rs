//! Replay recorded detections through the mode manager.

use std::path::PathBuf;
use std::sync::Arc;

use cameraman_common::clock::{Clock, ManualClock, MonotonicClock, RateController};
use cameraman_common::config::AppConfig;
use cameraman_controller::RecordingCameraController;
use cameraman_model::frame::parse_frames;
use cameraman_model::speeds::ZoomSpeed;
use cameraman_tracking::{CameramanMode, CameramanModeManager};
use serde::Serialize;

/// One line of replay output.
#[derive(Debug, Serialize)]
struct ReplayLine {
    frame: usize,
    mode: CameramanMode,
    pan_speed: f64,
    tilt_speed: f64,
    zoom_speed: ZoomSpeed,
}

pub async fn run(path: PathBuf, fps: u32, realtime: bool, config: &AppConfig) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Frame file not found: {}", path.display()))?;
    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse frames: {e}"))?;
    tracing::info!("Loaded {} frames from {}", frames.len(), path.display());

    let rate = RateController::new(fps);
    let manual_clock = ManualClock::new();
    let clock: Arc<dyn Clock> = if realtime {
        Arc::new(MonotonicClock::start())
    } else {
        Arc::new(manual_clock.clone())
    };

    let mut manager = CameramanModeManager::from_settings(
        RecordingCameraController::new(),
        &config.tracking,
        clock,
    );
    manager.start();

    let mut pacer = realtime.then(|| tokio::time::interval(rate.interval()));
    for (index, frame) in frames.iter().enumerate() {
        if let Some(pacer) = pacer.as_mut() {
            pacer.tick().await;
        }
        manager.update(frame.target.as_ref(), frame.is_target_lost);

        let speeds = manager.camera_speeds();
        let line = ReplayLine {
            frame: index,
            mode: manager.mode(),
            pan_speed: speeds.pan_speed,
            tilt_speed: speeds.tilt_speed,
            zoom_speed: speeds.zoom_speed,
        };
        println!("{}", serde_json::to_string(&line)?);

        if !realtime {
            manual_clock.advance(rate.interval());
        }
    }

    manager.stop();
    tracing::info!(
        "Replay complete: {} speed commands sent",
        manager.camera_controller().updates().len()
    );
    Ok(())
}
