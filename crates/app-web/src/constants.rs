// Page affordances and frame-loop tuning for the web front-end

// Loading overlay
pub const LOADER_SELECTOR: &str = ".loader";
pub const PROGRESS_SELECTOR: &str = ".progress";

// Narrative sections and the canvas behind them
pub const NARRATIVE_SELECTOR: &str = ".container";
pub const CANVAS_CONTAINER_ID: &str = "webgi-canvas-container";

// Customizer
pub const CUSTOMIZE_BUTTON: &str = ".button--customize";
pub const EXIT_BUTTON: &str = ".button--exit";
pub const CUSTOMIZER_PANEL: &str = ".customizer--container";

// Navigation
pub const HERO_BUTTON: &str = ".button--hero";
pub const FOOTER_BUTTONS: &str = ".button--footer";

// One button per color variant, in variant order
pub const COLOR_BUTTONS: [&str; 3] = [
    ".button--colors.black",
    ".button--colors.red",
    ".button--colors.yellow",
];

// Clamp for the animation clock after a hidden tab resumes (seconds)
pub const MAX_TICK_SEC: f32 = 0.25;
