//! The page's two-state machine.
//!
//! `Initial` shows the question, `Success` the celebration. The only
//! transition is accepting; nothing leads back and nothing persists.

/// Where the greeting page currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// The question is on screen, both buttons live.
    #[default]
    Initial,
    /// The valentine was accepted; celebration is playing.
    Success,
}

impl PageState {
    /// Activate the accept control.
    ///
    /// Returns `true` only on the `Initial` -> `Success` transition;
    /// accepting again while in `Success` is a no-op.
    pub fn accept(&mut self) -> bool {
        match self {
            PageState::Initial => {
                *self = PageState::Success;
                true
            }
            PageState::Success => false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PageState::Success)
    }
}
