use crate::material::MaterialVariant;
use glam::Vec3;

// Shared tuning for the showcase page. Durations are in seconds.

// Assets
pub const SCENE_PATH: &str = "./assets/drillfinal.glb";
pub const DRILL_MATERIAL: &str = "Drill_01";

// Narrative sections (scroll triggers)
pub const SECTION_SECOND: &str = ".second";
pub const SECTION_THIRD: &str = ".third";
pub const SECTION_ONE_COPY: &str = ".section--one--container";

// Phase "second": first scroll leg
pub const SECOND_POSITION_DESKTOP: Vec3 = Vec3::new(1.8, -3.0, -4.6);
pub const SECOND_POSITION_MOBILE: Vec3 = Vec3::new(-4.0, 6.06, -2.72);
pub const SECOND_TARGET_DESKTOP: Vec3 = Vec3::new(-0.5, 1.44, -0.31);
pub const SECOND_TARGET_MOBILE: Vec3 = Vec3::new(-0.75, 0.08, 0.04);
pub const SECTION_ONE_COPY_X_PERCENT: f32 = -150.0; // slides fully off to the left
pub const SECTION_ONE_COPY_END_VIEWPORT: f32 = 0.8; // "top 80%"
pub const SECTION_ONE_COPY_LAG_SEC: f32 = 1.0;

// Phase "third": last scroll leg, same on every device
pub const THIRD_POSITION: Vec3 = Vec3::new(-3.0, -0.6, 1.5);
pub const THIRD_TARGET: Vec3 = Vec3::new(-1.0, 1.0, -0.44);

// Mobile starting camera
pub const MOBILE_START_POSITION: Vec3 = Vec3::new(-3.10, -3.46, 7.45);
pub const MOBILE_START_TARGET: Vec3 = Vec3::new(-0.51, -0.01, -0.42);
pub const MOBILE_FOV_DEG: f32 = 30.0;

// Customizer fly-to
pub const CUSTOMIZE_POSITION: Vec3 = Vec3::new(-2.6, 0.2, -9.6);
pub const CUSTOMIZE_TARGET: Vec3 = Vec3::new(0.0, 0.0, 0.12);
pub const CUSTOMIZE_ENTER_SEC: f32 = 2.0;
pub const CUSTOMIZE_EXIT_SEC: f32 = 1.0;

// Loading overlay
pub const LOADER_FADE_DELAY_SEC: f32 = 1.0;
pub const LOADER_FADE_SEC: f32 = 0.5;

// Color choices; "yellow" is white on the shipped page.
pub const COLOR_VARIANTS: [MaterialVariant; 3] = [
    MaterialVariant {
        name: "black",
        color: 0x383830,
    },
    MaterialVariant {
        name: "red",
        color: 0xfe2d2d,
    },
    MaterialVariant {
        name: "yellow",
        color: 0xffffff,
    },
];
