//! # View Controller States
//!
//! The two screens a session can show and the record written each time the
//! session moves between them.

use serde::{Deserialize, Serialize};

use ria_core::Timestamp;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// The question list with answer buttons and the submit control.
    #[default]
    Questionnaire,
    /// The score summary with the review control.
    Results,
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Questionnaire => "QUESTIONNAIRE",
            Self::Results => "RESULTS",
        };
        f.write_str(s)
    }
}

/// Record of a view transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewTransitionRecord {
    /// View before the transition.
    pub from: ViewState,
    /// View after the transition.
    pub to: ViewState,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}
