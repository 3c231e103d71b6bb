use crate::session::InteractionMode;
use thiserror::Error;

/// Why a mode transition request was not started.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransitionError {
    /// Illegal from the current mode; dropped, never queued.
    #[error("transition ignored while {mode:?}")]
    Ignored { mode: InteractionMode },
    /// Exit button or customizer panel was not found at setup.
    #[error("customizer controls missing; entry refused")]
    MissingControls,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("scroll is locked until the scene has loaded")]
    ScrollLocked,
    #[error("navigation is only available in presentation mode")]
    NotPresenting,
    #[error("section '{0}' not found")]
    MissingSection(String),
}
