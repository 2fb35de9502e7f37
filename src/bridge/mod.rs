//! Calls into the plugin host. Implementations live outside this crate.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::model::{Font, TypographyConfig, Variable};

/// Result of `createTypographySystem` as the host reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub success: bool,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub trait HostBridge {
    fn available_fonts(&self) -> Result<Vec<Font>, BridgeError>;
    fn available_variables(&self) -> Result<Vec<Variable>, BridgeError>;
    fn create_typography_system(
        &self,
        config: &TypographyConfig,
    ) -> Result<ApplyResponse, BridgeError>;
    fn notify(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted host used by the crate's tests.
    pub(crate) struct FakeBridge {
        pub(crate) fonts: Result<Vec<Font>, BridgeError>,
        pub(crate) variables: Result<Vec<Variable>, BridgeError>,
        pub(crate) apply: Option<Result<ApplyResponse, BridgeError>>,
        pub(crate) font_calls: AtomicUsize,
        pub(crate) applied: RefCell<Vec<TypographyConfig>>,
        pub(crate) notifications: RefCell<Vec<String>>,
    }

    impl FakeBridge {
        pub(crate) fn with_fonts(fonts: Vec<Font>) -> Self {
            Self {
                fonts: Ok(fonts),
                variables: Ok(Vec::new()),
                apply: None,
                font_calls: AtomicUsize::new(0),
                applied: RefCell::new(Vec::new()),
                notifications: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn font_calls(&self) -> usize {
            self.font_calls.load(Ordering::SeqCst)
        }
    }

    impl HostBridge for FakeBridge {
        fn available_fonts(&self) -> Result<Vec<Font>, BridgeError> {
            self.font_calls.fetch_add(1, Ordering::SeqCst);
            self.fonts.clone()
        }

        fn available_variables(&self) -> Result<Vec<Variable>, BridgeError> {
            self.variables.clone()
        }

        fn create_typography_system(
            &self,
            config: &TypographyConfig,
        ) -> Result<ApplyResponse, BridgeError> {
            self.applied.borrow_mut().push(config.clone());
            self.apply.clone().unwrap_or_else(|| {
                Ok(ApplyResponse {
                    success: true,
                    styles: Vec::new(),
                    message: None,
                })
            })
        }

        fn notify(&self, message: &str) {
            self.notifications.borrow_mut().push(message.to_string());
        }
    }
}
