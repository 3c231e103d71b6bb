use crate::ports::{PageUi, ScrollHost};
use crate::tween::{Easing, Tween};
use std::rc::Rc;
use std::time::Duration;

/// One streaming-load progress sample from the asset importer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadProgress {
    pub loaded: f64,
    pub total: f64,
}

impl LoadProgress {
    /// `loaded / total` in [0, 1]. Zero, negative or non-finite totals give 0
    /// so a NaN never reaches a CSS transform.
    pub fn ratio(&self) -> f32 {
        if self.total <= 0.0 || !self.total.is_finite() || !self.loaded.is_finite() {
            return 0.0;
        }
        (self.loaded / self.total).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeConfig {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

#[derive(Clone, Debug)]
pub enum LoadPhase {
    Loading,
    FadingOut(Tween),
    Ready,
}

/// Drives the loading overlay and keeps the page pinned until the first
/// asset load has finished fading out.
pub struct LoadReporter {
    phase: LoadPhase,
    fade: FadeConfig,
    page: Rc<dyn PageUi>,
}

impl LoadReporter {
    /// Locks scrolling and jumps to the top.
    pub fn new(fade: FadeConfig, page: Rc<dyn PageUi>, scroll: &dyn ScrollHost) -> Self {
        page.set_loader_visible(true);
        page.set_loader_opacity(1.0);
        page.set_progress(0.0);
        page.set_scroll_locked(true);
        scroll.scroll_to(0.0, false);
        Self {
            phase: LoadPhase::Loading,
            fade,
            page,
        }
    }

    pub fn on_progress(&mut self, progress: LoadProgress) -> Option<f32> {
        if !matches!(self.phase, LoadPhase::Loading) {
            return None;
        }
        let ratio = progress.ratio();
        log::debug!("[loader] progress {:.3}", ratio);
        self.page.set_progress(ratio);
        Some(ratio)
    }

    pub fn on_complete(&mut self) {
        if !matches!(self.phase, LoadPhase::Loading) {
            log::debug!("[loader] extra completion ignored");
            return;
        }
        self.page.set_progress(1.0);
        self.phase = LoadPhase::FadingOut(
            Tween::new(self.fade.duration, self.fade.easing).with_delay(self.fade.delay),
        );
        log::info!("[loader] load complete; fading overlay");
    }

    /// Advance the fade. Returns `true` on the tick that unlocked scrolling.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let LoadPhase::FadingOut(tween) = &mut self.phase else {
            return false;
        };
        let e = tween.advance(dt);
        if !tween.is_finished() {
            self.page.set_loader_opacity(1.0 - e);
            return false;
        }
        self.page.set_loader_opacity(0.0);
        self.page.set_loader_visible(false);
        // Only now, after the fade has completed.
        self.page.set_scroll_locked(false);
        self.phase = LoadPhase::Ready;
        log::info!("[loader] overlay gone; scroll unlocked");
        true
    }

    #[inline]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready)
    }
}
