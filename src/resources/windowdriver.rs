//! Non-send resource wrapping the active [`WindowPlatform`].
//!
//! Native window handles are not `Send`, so the driver is inserted with
//! `insert_non_send_resource` and accessed through `NonSendMut`.

use crate::platform::{NoopPlatform, WindowPlatform};

pub struct WindowDriver(pub Box<dyn WindowPlatform>);

impl WindowDriver {
    pub fn new(platform: impl WindowPlatform + 'static) -> Self {
        Self(Box::new(platform))
    }

    pub fn noop() -> Self {
        Self::new(NoopPlatform)
    }

    pub fn platform(&self) -> &dyn WindowPlatform {
        self.0.as_ref()
    }

    pub fn platform_mut(&mut self) -> &mut dyn WindowPlatform {
        self.0.as_mut()
    }
}
