//! Page router for interactive front ends
//!
//! Pages are visited in a fixed order. `ThankYou` is only reachable by
//! submitting feedback and is left through its two return actions.
//!
//! A [`Session`] lives as long as one interactive user session and is never
//! persisted. The stateless CLI only uses it to replay the feedback flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::EcorecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Main,
    Comparison,
    Charts,
    Dashboard,
    Recommend,
    AddProduct,
    Feedback,
    ThankYou,
}

impl Page {
    pub const ORDER: [Page; 8] = [
        Page::Main,
        Page::Comparison,
        Page::Charts,
        Page::Dashboard,
        Page::Recommend,
        Page::AddProduct,
        Page::Feedback,
        Page::ThankYou,
    ];

    pub fn index(self) -> usize {
        Page::ORDER
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    /// Pages offered in the top menu
    pub fn selectable() -> &'static [Page] {
        &Page::ORDER[..Page::ORDER.len() - 1]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Main => "main",
            Page::Comparison => "comparison",
            Page::Charts => "charts",
            Page::Dashboard => "dashboard",
            Page::Recommend => "recommend",
            Page::AddProduct => "add_product",
            Page::Feedback => "feedback",
            Page::ThankYou => "thank_you",
        }
    }

    /// Page reached from `self` by `action`; actions that do not apply leave
    /// the page unchanged
    pub fn transition(self, action: NavAction) -> Page {
        let index = self.index();
        match action {
            NavAction::Next => Page::ORDER.get(index + 1).copied().unwrap_or(self),
            NavAction::Back => index
                .checked_sub(1)
                .and_then(|i| Page::ORDER.get(i).copied())
                .unwrap_or(self),
            NavAction::Select(target) => {
                if self == Page::ThankYou || target == Page::ThankYou {
                    self
                } else {
                    target
                }
            }
            NavAction::SubmitFeedback if self == Page::Feedback => Page::ThankYou,
            NavAction::ReturnHome if self == Page::ThankYou => Page::Main,
            NavAction::ExploreAgain if self == Page::ThankYou => Page::Comparison,
            NavAction::SubmitFeedback | NavAction::ReturnHome | NavAction::ExploreAgain => self,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Page {
    type Err = EcorecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Page::ORDER
            .iter()
            .copied()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| EcorecError::invalid_value("page", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Back,
    Select(Page),
    SubmitFeedback,
    ReturnHome,
    ExploreAgain,
}

/// Navigation state owned by one user session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    page: Page,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn apply(&mut self, action: NavAction) -> Page {
        let next = self.page.transition(action);
        trace!(from = %self.page, to = %next, ?action, "navigate");
        self.page = next;
        next
    }
}
