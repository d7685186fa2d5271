use crate::{MutationKind, ViewState};

use log::debug;

/// Holds the view in `Mutating` for the life of one bulk action.
///
/// Dropping it without [`InFlight::settle`] (the action's future was dropped
/// mid-call) puts the view back to `Ready`; roster and selection are only
/// touched after the remote call returns, so they are still as they were.
pub(crate) struct InFlight<'a> {
    state: &'a mut ViewState,
    settled: bool,
}

impl<'a> InFlight<'a> {
    pub fn begin(state: &'a mut ViewState, kind: MutationKind) -> Self {
        *state = ViewState::Mutating(kind);
        Self {
            state,
            settled: false,
        }
    }

    pub fn settle(mut self, next: ViewState) {
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Mutation cancelled while {}", self.state);
            *self.state = ViewState::Ready;
        }
    }
}
