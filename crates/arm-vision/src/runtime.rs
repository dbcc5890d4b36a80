//! Serialized event loop for two asynchronous camera streams.
//!
//! Each camera gets a [`CameraHandle`]; all handles feed one bounded channel
//! consumed by a single worker thread that owns the [`ArmPipeline`]. The
//! worker is the only code touching the frame cache, so camera-A updates and
//! camera-B triggers never overlap.

use std::thread::{self, JoinHandle};

use arm_vision_core::{CameraId, DetectionSet, RgbImageView};
use arm_vision_detect::MarkerDetector;
use crossbeam_channel::{bounded, Receiver, Sender};

use crate::{ArmPipeline, ResultSink};

#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
    #[error("failed to spawn the pipeline worker: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("pipeline worker has stopped")]
    Disconnected,
    #[error("pipeline worker panicked")]
    WorkerPanicked,
}

/// Owned RGB frame as delivered by a camera driver.
#[derive(Clone, Debug)]
pub struct RawFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major RGB
}

/// Work item for the pipeline worker.
#[derive(Clone, Debug)]
pub enum CameraEvent {
    /// Detections already produced upstream.
    Detections(CameraId, DetectionSet),
    /// A raw frame to run through the worker's [`MarkerDetector`] first.
    Frame(CameraId, RawFrame),
}

/// Sending side for one camera stream.
#[derive(Clone, Debug)]
pub struct CameraHandle {
    camera: CameraId,
    tx: Sender<CameraEvent>,
}

impl CameraHandle {
    pub fn camera(&self) -> CameraId {
        self.camera
    }

    /// Blocks while the channel is full.
    pub fn send_detections(&self, detections: DetectionSet) -> Result<(), RuntimeError> {
        self.tx
            .send(CameraEvent::Detections(self.camera, detections))
            .map_err(|_| RuntimeError::Disconnected)
    }

    /// Blocks while the channel is full.
    pub fn send_frame(&self, frame: RawFrame) -> Result<(), RuntimeError> {
        self.tx
            .send(CameraEvent::Frame(self.camera, frame))
            .map_err(|_| RuntimeError::Disconnected)
    }
}

/// Worker thread running an [`ArmPipeline`] over events from both cameras.
pub struct StereoRuntime<S> {
    tx: Sender<CameraEvent>,
    worker: JoinHandle<ArmPipeline<S>>,
}

impl<S: ResultSink + Send + 'static> StereoRuntime<S> {
    /// Start the worker. `capacity` bounds the number of queued events.
    pub fn spawn(
        pipeline: ArmPipeline<S>,
        detector: MarkerDetector,
        capacity: usize,
    ) -> Result<Self, RuntimeError> {
        let (tx, rx) = bounded(capacity.max(1));
        let worker = thread::Builder::new()
            .name("arm-vision-pipeline".into())
            .spawn(move || run_worker(pipeline, detector, rx))?;
        Ok(Self { tx, worker })
    }

    pub fn handle(&self, camera: CameraId) -> CameraHandle {
        CameraHandle {
            camera,
            tx: self.tx.clone(),
        }
    }

    /// Wait for the worker to drain and return the pipeline.
    ///
    /// The worker stops once every [`CameraHandle`] has been dropped.
    pub fn join(self) -> Result<ArmPipeline<S>, RuntimeError> {
        drop(self.tx);
        self.worker.join().map_err(|_| RuntimeError::WorkerPanicked)
    }
}

fn run_worker<S: ResultSink>(
    mut pipeline: ArmPipeline<S>,
    detector: MarkerDetector,
    rx: Receiver<CameraEvent>,
) -> ArmPipeline<S> {
    log::debug!("pipeline worker started");
    for event in rx {
        match event {
            CameraEvent::Detections(camera, detections) => {
                pipeline.on_frame(camera, detections);
            }
            CameraEvent::Frame(camera, frame) => {
                match RgbImageView::new(frame.width, frame.height, &frame.data) {
                    Ok(view) => {
                        let detections = detector.detect(&view);
                        pipeline.on_frame(camera, detections);
                    }
                    Err(err) => log::warn!("skipping malformed frame from {camera}: {err}"),
                }
            }
        }
    }
    log::debug!(
        "pipeline worker stopped after {} triggers",
        pipeline.triggers()
    );
    pipeline
}
