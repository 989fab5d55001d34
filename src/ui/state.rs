use crate::{Error, Result};
use tracing::{debug, info, warn};

/// Lifecycle of the word currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiPhase {
    #[default]
    Idle,
    WordShown,
    Fetching,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SubmitWord,
    WordClicked,
    FetchSucceeded,
    FetchFailed,
    /// The request was dropped before it finished.
    FetchCancelled,
    Reset,
}

impl UiPhase {
    /// Computes the phase after `event`, rejecting anything the lifecycle
    /// doesn't allow.
    pub fn transition(self, event: UiEvent) -> Result<UiPhase> {
        let next = match (self, event) {
            // A new word abandons whatever was on screen.
            (_, UiEvent::SubmitWord) => UiPhase::WordShown,
            (UiPhase::WordShown | UiPhase::Errored, UiEvent::WordClicked) => UiPhase::Fetching,
            (UiPhase::Fetching, UiEvent::FetchSucceeded) => UiPhase::Rendered,
            (UiPhase::Fetching, UiEvent::FetchFailed) => UiPhase::Errored,
            (UiPhase::Fetching, UiEvent::FetchCancelled) => UiPhase::WordShown,
            (UiPhase::Rendered | UiPhase::Errored, UiEvent::Reset) => UiPhase::Idle,
            _ => {
                warn!("Invalid UI transition from {:?} with event {:?}", self, event);
                return Err(Error::InvalidTransition {
                    current: format!("{self:?}"),
                    requested: format!("{event:?}"),
                });
            }
        };

        if next != self {
            info!("UI state transition: {:?} -> {:?} (event: {:?})", self, next, event);
        } else {
            debug!("UI staying in state {:?} after event {:?}", self, event);
        }

        Ok(next)
    }
}
