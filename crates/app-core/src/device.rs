/// Coarse device bucket used to pick keyframe end values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

/// A value with one variant per [`DeviceClass`], resolved once at setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceValue<T> {
    pub mobile: T,
    pub desktop: T,
}

impl<T: Copy> DeviceValue<T> {
    pub const fn same(value: T) -> Self {
        Self {
            mobile: value,
            desktop: value,
        }
    }

    #[inline]
    pub fn resolve(&self, class: DeviceClass) -> T {
        match class {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Desktop => self.desktop,
        }
    }
}

// Substrings that mark phones and tablets in a user-agent string.
const MOBILE_UA_TOKENS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "bb10",
    "iemobile",
    "opera mini",
    "opera mobi",
    "webos",
    "silk/",
    "kindle",
    "windows phone",
    "mobile",
    "tablet",
];

/// Classify a user agent. `max_touch_points` catches iPadOS, which reports a
/// desktop Safari user agent but exposes a touch screen.
pub fn classify_user_agent(user_agent: &str, max_touch_points: i32) -> DeviceClass {
    let ua = user_agent.to_ascii_lowercase();
    if MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t)) {
        return DeviceClass::Mobile;
    }
    if ua.contains("macintosh") && max_touch_points > 1 {
        return DeviceClass::Mobile;
    }
    DeviceClass::Desktop
}
