use crate::constants::*;
use crate::device::DeviceValue;
use crate::loader::FadeConfig;
use crate::material::MaterialVariant;
use crate::pose::{CameraPose, PoseField};
use crate::ports::ElementStyle;
use crate::session::TransitionConfig;
use crate::timeline::{CameraTrackSpec, ElementTrackSpec, NarrativeTable, Offset, PhaseSpec, Scrub};
use crate::tween::Easing;
use std::time::Duration;

/// Everything the orchestrator needs to know about the page, assembled from
/// `constants.rs` by `Default`. Override fields to test or reskin.
#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    pub scene_path: String,
    pub material_name: String,
    pub variants: Vec<MaterialVariant>,
    pub narrative: NarrativeTable,
    pub transition: TransitionConfig,
    pub loader_fade: FadeConfig,
    pub mobile_start: CameraPose,
    pub mobile_fov_deg: f32,
    /// Section the "know more" button scrolls to.
    pub next_section: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            scene_path: SCENE_PATH.to_string(),
            material_name: DRILL_MATERIAL.to_string(),
            variants: COLOR_VARIANTS.to_vec(),
            narrative: default_narrative(),
            transition: TransitionConfig {
                customize_pose: CameraPose::new(CUSTOMIZE_POSITION, CUSTOMIZE_TARGET),
                enter_duration: Duration::from_secs_f32(CUSTOMIZE_ENTER_SEC),
                exit_duration: Duration::from_secs_f32(CUSTOMIZE_EXIT_SEC),
                easing: Easing::Power3InOut,
            },
            loader_fade: FadeConfig {
                delay: Duration::from_secs_f32(LOADER_FADE_DELAY_SEC),
                duration: Duration::from_secs_f32(LOADER_FADE_SEC),
                easing: Easing::Power1Out,
            },
            mobile_start: CameraPose::new(MOBILE_START_POSITION, MOBILE_START_TARGET),
            mobile_fov_deg: MOBILE_FOV_DEG,
            next_section: SECTION_SECOND.to_string(),
        }
    }
}

/// The two scroll legs of the shipped page.
pub fn default_narrative() -> NarrativeTable {
    NarrativeTable {
        phases: vec![
            PhaseSpec {
                name: "second",
                trigger: SECTION_SECOND,
                start: Offset::TOP_BOTTOM,
                end: Offset::TOP_TOP,
                scrub: Scrub::Locked,
                easing: Easing::Power1Out,
                camera: vec![
                    CameraTrackSpec {
                        field: PoseField::Position,
                        end: DeviceValue {
                            mobile: SECOND_POSITION_MOBILE,
                            desktop: SECOND_POSITION_DESKTOP,
                        },
                    },
                    CameraTrackSpec {
                        field: PoseField::Target,
                        end: DeviceValue {
                            mobile: SECOND_TARGET_MOBILE,
                            desktop: SECOND_TARGET_DESKTOP,
                        },
                    },
                ],
                elements: vec![ElementTrackSpec {
                    selector: SECTION_ONE_COPY,
                    end: Offset::new(0.0, SECTION_ONE_COPY_END_VIEWPORT),
                    scrub: Scrub::Lagged(Duration::from_secs_f32(SECTION_ONE_COPY_LAG_SEC)),
                    to: ElementStyle {
                        x_percent: SECTION_ONE_COPY_X_PERCENT,
                        opacity: 0.0,
                    },
                }],
            },
            PhaseSpec {
                name: "third",
                trigger: SECTION_THIRD,
                start: Offset::TOP_BOTTOM,
                end: Offset::TOP_TOP,
                scrub: Scrub::Locked,
                easing: Easing::Power1Out,
                camera: vec![
                    CameraTrackSpec {
                        field: PoseField::Position,
                        end: DeviceValue::same(THIRD_POSITION),
                    },
                    CameraTrackSpec {
                        field: PoseField::Target,
                        end: DeviceValue::same(THIRD_TARGET),
                    },
                ],
                elements: vec![],
            },
        ],
    }
}
