use std::thread;

use arm_vision::detect::MarkerDetector;
use arm_vision::{
    ArmPipeline, CameraId, ChannelSink, DetectionSet, MarkerColor, PipelineConfig, RawFrame,
    StereoRuntime, VecSink,
};
use nalgebra::Point2;

fn origin_only(u: f64) -> DetectionSet {
    let mut set = DetectionSet::default();
    set[MarkerColor::Green] = Some(Point2::new(u, 5.0));
    set
}

#[test]
fn concurrent_streams_publish_once_per_camera_b_frame() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (tx, rx) = crossbeam_channel::unbounded();
    let pipeline = ArmPipeline::new(PipelineConfig::default(), ChannelSink::new(tx));
    let runtime =
        StereoRuntime::spawn(pipeline, MarkerDetector::default(), 8).expect("spawn worker");

    let a = runtime.handle(CameraId::A);
    let b = runtime.handle(CameraId::B);
    let producer_a = thread::spawn(move || {
        for i in 0..40 {
            a.send_detections(origin_only(i as f64)).expect("send A");
        }
    });
    let producer_b = thread::spawn(move || {
        for i in 0..25 {
            b.send_detections(origin_only(i as f64)).expect("send B");
        }
    });
    producer_a.join().expect("producer A");
    producer_b.join().expect("producer B");

    let pipeline = runtime.join().expect("join worker");
    assert_eq!(pipeline.triggers(), 25);
    assert_eq!(rx.try_iter().count(), 25);
    assert_eq!(pipeline.cache().get(CameraId::A).green, Some(Point2::new(39.0, 5.0)));
}

#[test]
fn malformed_raw_frame_is_skipped() {
    let pipeline = ArmPipeline::new(PipelineConfig::default(), VecSink::default());
    let runtime =
        StereoRuntime::spawn(pipeline, MarkerDetector::default(), 4).expect("spawn worker");
    let b = runtime.handle(CameraId::B);

    b.send_frame(RawFrame {
        width: 10,
        height: 10,
        data: vec![0; 7],
    })
    .expect("send bad frame");
    b.send_frame(RawFrame {
        width: 10,
        height: 10,
        data: vec![0; 10 * 10 * 3],
    })
    .expect("send good frame");
    drop(b);

    let pipeline = runtime.join().expect("join worker");
    assert_eq!(pipeline.triggers(), 1);
    assert_eq!(pipeline.sink().messages.len(), 1);
}

#[test]
fn raw_frames_run_through_the_detector() {
    let (w, h) = (30, 20);
    let mut data = vec![0u8; w * h * 3];
    for y in 8..13 {
        for x in 4..9 {
            let i = (y * w + x) * 3;
            data[i..i + 3].copy_from_slice(&[5, 220, 5]);
        }
    }

    let pipeline = ArmPipeline::new(PipelineConfig::default(), VecSink::default());
    let runtime =
        StereoRuntime::spawn(pipeline, MarkerDetector::default(), 4).expect("spawn worker");
    let a = runtime.handle(CameraId::A);
    let b = runtime.handle(CameraId::B);
    a.send_frame(RawFrame {
        width: w,
        height: h,
        data: data.clone(),
    })
    .expect("send A");
    b.send_frame(RawFrame {
        width: w,
        height: h,
        data,
    })
    .expect("send B");
    drop((a, b));

    let pipeline = runtime.join().expect("join worker");
    let msg = &pipeline.sink().messages[0];
    // Green centered at column 6, row 10 in both views.
    assert_eq!(msg.green_center, [6.0 / 500.0, 6.0 / 500.0, -10.0 / 500.0]);
}
