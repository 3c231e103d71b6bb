use showcase_core::{classify_user_agent, CapabilityProbe, DeviceClass};
use web_sys as web;

/// Classifies the browser once from `navigator`.
pub struct UserAgentProbe {
    user_agent: String,
    max_touch_points: i32,
}

impl UserAgentProbe {
    pub fn new(window: &web::Window) -> Self {
        let navigator = window.navigator();
        Self {
            user_agent: navigator.user_agent().unwrap_or_default(),
            max_touch_points: navigator.max_touch_points(),
        }
    }
}

impl CapabilityProbe for UserAgentProbe {
    fn device_class(&self) -> DeviceClass {
        classify_user_agent(&self.user_agent, self.max_touch_points)
    }
}
