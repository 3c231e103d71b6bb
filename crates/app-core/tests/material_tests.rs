// Host-side tests for the color switch and scene-dirty coalescing.

mod common;

use common::*;
use showcase_core::*;
use std::time::Duration;

fn with_engine(engine: FakeEngine) -> Harness {
    engine.camera.set(desktop_start());
    let mut h = Harness::build(engine, FakePage::new(), FakeScroll::three_sections());
    h.showcase.bind_scene(&FixedProbe(DeviceClass::Desktop));
    h.showcase.handle_load(LoadEvent::Complete);
    h.tick_for(Duration::from_secs(2));
    h.frame();
    h
}

#[test]
fn unresolved_material_turns_clicks_into_no_ops() {
    let mut h = with_engine(FakeEngine::with_material("Handle_02"));
    assert!(!h.showcase.apply_variant(1));
    h.showcase.handle(PageEvent::Variant(0));
    assert!(h.engine.colors.borrow().is_empty());
    assert!(!h.showcase.pending_render().scene);
    assert_eq!(h.frame(), None);
    assert_eq!(h.engine.scene_dirty.get(), 0);
}

#[test]
fn variant_click_recolors_and_marks_scene_only() {
    let mut h = Harness::desktop();
    let notified = h.engine.notify_count();
    let shadows = h.engine.shadow_resets.get();

    h.showcase.handle(PageEvent::Variant(1));
    assert_eq!(
        h.engine.colors.borrow().last().map(|(_, rgb)| *rgb),
        Some(0xfe2d2d)
    );
    assert_eq!(
        h.frame(),
        Some(RenderRequest {
            camera: false,
            scene: true
        })
    );
    assert_eq!(h.engine.scene_dirty.get(), 1);
    assert_eq!(h.engine.notify_count(), notified);
    assert_eq!(h.engine.shadow_resets.get(), shadows);
}

#[test]
fn rapid_clicks_coalesce_into_one_scene_redraw() {
    let mut h = Harness::desktop();
    for i in [0, 1, 2, 1, 0] {
        h.showcase.handle(PageEvent::Variant(i));
    }
    let colors: Vec<u32> = h.engine.colors.borrow().iter().map(|(_, rgb)| *rgb).collect();
    assert_eq!(colors, [0x383830, 0xfe2d2d, 0xffffff, 0xfe2d2d, 0x383830]);
    h.frame();
    h.frame();
    assert_eq!(h.engine.scene_dirty.get(), 1);
}

#[test]
fn out_of_range_variant_is_ignored() {
    let mut h = Harness::desktop();
    assert!(!h.showcase.apply_variant(COLOR_VARIANTS.len()));
    assert!(h.engine.colors.borrow().is_empty());
    assert_eq!(h.frame(), None);
}

#[test]
fn variants_apply_while_customizing() {
    let mut h = Harness::desktop();
    h.showcase.handle(PageEvent::Customize);
    h.tick_for(Duration::from_millis(2100));
    assert_eq!(h.showcase.mode(), InteractionMode::Customization);
    assert!(h.showcase.apply_variant(2));
    assert!(h.frame().is_some_and(|r| r.scene));
}
