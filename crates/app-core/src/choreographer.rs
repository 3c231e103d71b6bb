//! Scroll-synchronized camera choreography.
//!
//! Each keyframe becomes a track with its own scrub state. A track stays
//! inert until scrolling first carries it past its start line, at which point
//! camera tracks capture their start value from the live pose. From then on
//! the written value is a pure function of progress, so scrolling back
//! exactly reverses the motion.

use crate::pose::PoseField;
use crate::ports::{ElementStyle, PageUi, ScrollHost, Viewport};
use crate::rig::CameraRig;
use crate::timeline::{Phase, Scrub, TriggerWindow};
use crate::tween::Easing;
use glam::Vec3;
use smallvec::SmallVec;
use std::rc::Rc;
use std::time::Duration;

// Lagged progress snaps to its target once closer than this.
const LAG_SNAP_EPSILON: f32 = 1e-4;

enum Sink {
    Camera {
        field: PoseField,
        end: Vec3,
        from: Option<Vec3>,
    },
    Element {
        selector: String,
        from: ElementStyle,
        to: ElementStyle,
    },
}

struct Track {
    phase: usize,
    window: TriggerWindow,
    scrub: Scrub,
    easing: Easing,
    sink: Sink,
    enabled: bool,
    target: f32,
    shown: f32,
    applied: Option<f32>,
}

impl Track {
    fn write(&mut self, rig: &CameraRig, page: &dyn PageUi) {
        let p = self.shown;
        if self.applied.is_none() && p <= 0.0 {
            return;
        }
        if self.applied == Some(p) {
            return;
        }
        let e = self.easing.apply(p);
        match &mut self.sink {
            Sink::Camera { field, end, from } => {
                let start = *from.get_or_insert_with(|| rig.pose().get(*field));
                let value = if p >= 1.0 {
                    *end
                } else if p <= 0.0 {
                    start
                } else {
                    start.lerp(*end, e)
                };
                rig.set_field(*field, value);
            }
            Sink::Element { selector, from, to } => {
                let style = if p >= 1.0 {
                    *to
                } else if p <= 0.0 {
                    *from
                } else {
                    from.lerp(to, e)
                };
                page.set_element_style(selector, style);
            }
        }
        self.applied = Some(p);
    }

    fn chase(&mut self, dt: Duration) -> bool {
        let Scrub::Lagged(lag) = self.scrub else {
            return false;
        };
        if self.shown == self.target {
            return false;
        }
        let tau = lag.as_secs_f32();
        let alpha = if tau > 0.0 {
            1.0 - (-dt.as_secs_f32() / tau).exp()
        } else {
            1.0
        };
        self.shown += (self.target - self.shown) * alpha;
        if (self.target - self.shown).abs() < LAG_SNAP_EPSILON {
            self.shown = self.target;
        }
        true
    }
}

pub struct Choreographer {
    rig: Rc<CameraRig>,
    page: Rc<dyn PageUi>,
    scroll: Rc<dyn ScrollHost>,
    phase_names: Vec<String>,
    tracks: Vec<Track>,
    last: Option<Viewport>,
    // scroll position the tracks were last written for
    applied_y: Option<f64>,
    forward: bool,
    suspended: bool,
}

impl Choreographer {
    /// Bind resolved phases to the page. Phases whose anchor section is
    /// missing, and element tracks whose element is missing, are disabled
    /// with a warning; the rest keep working.
    pub fn new(
        phases: Vec<Phase>,
        rig: Rc<CameraRig>,
        page: Rc<dyn PageUi>,
        scroll: Rc<dyn ScrollHost>,
    ) -> Self {
        let mut tracks = Vec::new();
        let mut phase_names = Vec::with_capacity(phases.len());
        for (i, phase) in phases.into_iter().enumerate() {
            let anchored = phase
                .camera
                .first()
                .map(|k| &k.window)
                .or_else(|| phase.elements.first().map(|k| &k.window))
                .map_or(true, |w| scroll.section(&w.selector).is_some());
            if !anchored {
                log::warn!("[timeline] phase '{}' disabled: trigger section missing", phase.name);
            }
            for k in phase.camera {
                let enabled = anchored && scroll.section(&k.window.selector).is_some();
                tracks.push(Track {
                    phase: i,
                    window: k.window,
                    scrub: k.scrub,
                    easing: k.easing,
                    sink: Sink::Camera {
                        field: k.field,
                        end: k.end,
                        from: None,
                    },
                    enabled,
                    target: 0.0,
                    shown: 0.0,
                    applied: None,
                });
            }
            for k in phase.elements {
                let mut enabled = anchored && scroll.section(&k.window.selector).is_some();
                if enabled && !page.has_element(&k.selector) {
                    log::warn!("[timeline] element '{}' missing; track disabled", k.selector);
                    enabled = false;
                }
                tracks.push(Track {
                    phase: i,
                    window: k.window,
                    scrub: k.scrub,
                    easing: k.easing,
                    sink: Sink::Element {
                        selector: k.selector,
                        from: k.from,
                        to: k.to,
                    },
                    enabled,
                    target: 0.0,
                    shown: 0.0,
                    applied: None,
                });
            }
            phase_names.push(phase.name);
        }
        log::info!(
            "[timeline] {} phases, {} tracks ({} enabled)",
            phase_names.len(),
            tracks.len(),
            tracks.iter().filter(|t| t.enabled).count()
        );
        Self {
            rig,
            page,
            scroll,
            phase_names,
            tracks,
            last: None,
            applied_y: None,
            forward: true,
            suspended: false,
        }
    }

    /// Scroll moved. Locked tracks follow immediately; lagged ones on `tick`.
    pub fn update(&mut self, viewport: Viewport) {
        self.last = Some(viewport);
        if self.suspended {
            return;
        }
        self.sync(viewport);
    }

    /// Advance lagged scrub tracks by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.suspended {
            return;
        }
        let mut moved = false;
        for t in self.tracks.iter_mut().filter(|t| t.enabled) {
            moved |= t.chase(dt);
        }
        if moved {
            self.write_all();
        }
    }

    /// Stop writing; scroll positions are still recorded.
    pub fn suspend(&mut self) {
        if !self.suspended {
            log::debug!("[timeline] suspended");
        }
        self.suspended = true;
    }

    /// Resume writing and re-apply the last seen scroll position.
    pub fn resume(&mut self) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        log::debug!("[timeline] resumed");
        if let Some(v) = self.last {
            self.sync(v);
        }
    }

    pub fn is_phase_enabled(&self, name: &str) -> bool {
        let Some(idx) = self.phase_names.iter().position(|n| n == name) else {
            return false;
        };
        self.tracks.iter().any(|t| t.phase == idx && t.enabled)
    }

    /// Scroll progress of a phase's first track, if the phase is enabled.
    pub fn phase_progress(&self, name: &str) -> Option<f32> {
        let idx = self.phase_names.iter().position(|n| n == name)?;
        self.tracks
            .iter()
            .find(|t| t.phase == idx && t.enabled)
            .map(|t| t.target)
    }

    fn sync(&mut self, viewport: Viewport) {
        // Relative to the last written position, not the last seen one.
        self.forward = self
            .applied_y
            .map_or(true, |y| viewport.scroll_y >= y);
        self.applied_y = Some(viewport.scroll_y);
        for t in self.tracks.iter_mut().filter(|t| t.enabled) {
            let Some(section) = self.scroll.section(&t.window.selector) else {
                continue;
            };
            t.target = t.window.progress(&section, &viewport);
            if t.scrub == Scrub::Locked {
                t.shown = t.target;
            }
        }
        self.write_all();
    }

    // Forward scrolling writes in declaration order, backward in reverse, so
    // chained tracks on one field hand over exactly at their shared boundary.
    fn write_all(&mut self) {
        let n = self.tracks.len();
        let order: SmallVec<[usize; 8]> = if self.forward {
            (0..n).collect()
        } else {
            (0..n).rev().collect()
        };
        for i in order {
            let t = &mut self.tracks[i];
            if t.enabled {
                t.write(&self.rig, self.page.as_ref());
            }
        }
    }
}
