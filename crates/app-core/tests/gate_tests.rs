// Host-side tests for the render-dirty gate and the camera rig.

mod common;

use common::*;
use glam::Vec3;
use showcase_core::*;
use std::rc::Rc;

fn rig() -> (Rc<FakeEngine>, CameraRig) {
    let engine = Rc::new(FakeEngine::default());
    let rig = CameraRig::new(engine.clone(), desktop_start());
    // construction writes the initial pose; start each test from a clean frame
    rig.consume_if_dirty();
    engine.notified.borrow_mut().clear();
    engine.shadow_resets.set(0);
    (engine, rig)
}

#[test]
fn many_marks_between_frames_notify_once() {
    let (engine, rig) = rig();
    for i in 0..100 {
        rig.set_field(PoseField::Position, Vec3::new(i as f32, 0.0, 0.0));
    }
    let req = rig.consume_if_dirty();
    assert_eq!(
        req,
        Some(RenderRequest {
            camera: true,
            scene: false
        })
    );
    assert_eq!(engine.notify_count(), 1);
    assert_eq!(
        engine.notified.borrow()[0].position,
        Vec3::new(99.0, 0.0, 0.0)
    );

    // next frame with no marks stays quiet
    assert_eq!(rig.consume_if_dirty(), None);
    assert_eq!(engine.notify_count(), 1);
}

#[test]
fn every_frame_sequence_gets_exactly_one_notification() {
    let (engine, rig) = rig();
    for frame in 1..=10 {
        for _ in 0..frame {
            rig.mark_dirty();
        }
        rig.consume_if_dirty();
        assert_eq!(engine.notify_count(), frame);
    }
}

#[test]
fn each_mark_invalidates_shadows() {
    let (engine, rig) = rig();
    rig.set_field(PoseField::Target, Vec3::ONE);
    rig.set_pose(desktop_start());
    rig.mark_dirty();
    assert_eq!(engine.shadow_resets.get(), 3);
}

#[test]
fn scene_dirty_does_not_touch_camera() {
    let (engine, rig) = rig();
    rig.mark_scene_dirty();
    rig.mark_scene_dirty();
    let req = rig.consume_if_dirty();
    assert_eq!(
        req,
        Some(RenderRequest {
            camera: false,
            scene: true
        })
    );
    assert_eq!(engine.scene_dirty.get(), 1);
    assert_eq!(engine.notify_count(), 0);
    assert_eq!(engine.shadow_resets.get(), 0);
}

#[test]
fn flag_is_cleared_only_by_consumption() {
    let (_engine, rig) = rig();
    rig.mark_dirty();
    assert!(rig.gate().is_camera_dirty());
    assert!(rig.gate().is_camera_dirty());
    rig.consume_if_dirty();
    assert!(!rig.gate().is_camera_dirty());
}

#[test]
fn non_finite_writes_are_rejected() {
    let (engine, rig) = rig();
    let before = rig.pose();
    assert!(!rig.set_field(PoseField::Position, Vec3::new(f32::NAN, 0.0, 0.0)));
    assert!(!rig.set_pose(CameraPose::new(Vec3::INFINITY, Vec3::ZERO)));
    assert_eq!(rig.pose(), before);
    assert_eq!(rig.consume_if_dirty(), None);
    assert_eq!(engine.notify_count(), 0);
}

#[test]
fn engine_sees_full_pose_only_at_frame() {
    let (engine, rig) = rig();
    rig.set_field(PoseField::Position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(engine.notify_count(), 0);
    rig.set_field(PoseField::Target, Vec3::new(-1.0, 0.0, 0.5));
    rig.consume_if_dirty();
    assert_eq!(
        engine.notified.borrow()[0],
        CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.5))
    );
}
