//! Viewer position and the navigation state derived from it.

use serde::Serialize;

/// Where the viewer currently is in the step sequence.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// No step selected; precedes the first step
    #[default]
    Welcome,

    /// A valid index into the step sequence
    Step(usize),
}

impl Position {
    /// The selected index, or `None` on the welcome screen.
    pub fn index(self) -> Option<usize> {
        match self {
            Position::Welcome => None,
            Position::Step(index) => Some(index),
        }
    }
}

/// Which navigation actions are currently possible.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Derives the navigation state for `position` in a sequence of `count` steps.
///
/// Recompute this after every move instead of caching it.
///
/// # Examples
///
/// ```rust
/// use stepguide_core::models::{navigation_state, Position};
///
/// let first = navigation_state(Position::Step(0), 2);
/// assert!(first.can_go_back); // back to the welcome screen
/// assert!(first.can_go_forward);
///
/// let last = navigation_state(Position::Step(1), 2);
/// assert!(!last.can_go_forward);
/// ```
pub fn navigation_state(position: Position, count: usize) -> NavigationState {
    match position {
        Position::Welcome => NavigationState {
            can_go_back: false,
            can_go_forward: count > 0,
        },
        Position::Step(index) => NavigationState {
            can_go_back: true,
            can_go_forward: index + 1 < count,
        },
    }
}
