use super::{
    fetcher::EtymologyFetcher,
    render::{EtymologyView, error_html, error_message, render_etymology},
    state::{UiEvent, UiPhase},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

pub const DIMMED_OPACITY: f32 = 0.5;
pub const FULL_OPACITY: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    Etymology(EtymologyView),
    Error(String),
}

impl Results {
    pub fn to_html(&self) -> String {
        match self {
            Results::Etymology(view) => view.to_html(),
            Results::Error(message) => error_html(message),
        }
    }
}

/// Everything a front end needs to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub phase: UiPhase,
    pub input: String,
    /// The word the next click will look up.
    pub current_word: Option<String>,
    /// The clickable token on screen, if any.
    pub word_token: Option<String>,
    pub is_fetching: bool,
    pub loading: bool,
    pub word_opacity: f32,
    pub results: Option<Results>,
    generation: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: UiPhase::Idle,
            input: String::new(),
            current_word: None,
            word_token: None,
            is_fetching: false,
            loading: false,
            word_opacity: FULL_OPACITY,
            results: None,
            generation: 0,
        }
    }
}

impl UiState {
    fn apply(&mut self, event: UiEvent) -> crate::Result<()> {
        self.phase = self.phase.transition(event)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No word on screen, or a request is already in flight.
    Ignored,
    Rendered,
    Errored,
    /// A new word was submitted while this request was in flight.
    Superseded,
}

/// Drives one word at a time through submit, click, fetch and render.
pub struct UiController {
    state: Mutex<UiState>,
    fetcher: Arc<dyn EtymologyFetcher>,
}

/// Restores the loading indicator and opacity however the fetch ends,
/// including when the click future is dropped mid-request. A dropped request
/// puts its word back on screen so it can be clicked again.
struct FetchCleanup<'a> {
    state: &'a Mutex<UiState>,
    generation: u64,
    completed: bool,
}

impl Drop for FetchCleanup<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.is_fetching = false;
        state.loading = false;
        state.word_opacity = FULL_OPACITY;

        if !self.completed && state.generation == self.generation {
            debug!("Fetch dropped before completing");
            if let Err(e) = state.apply(UiEvent::FetchCancelled) {
                warn!("Unexpected state after dropped fetch: {}", e);
            }
        }
    }
}

impl UiController {
    pub fn new(fetcher: Arc<dyn EtymologyFetcher>) -> Self {
        Self {
            state: Mutex::new(UiState::default()),
            fetcher,
        }
    }

    fn lock(&self) -> MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> UiState {
        self.lock().clone()
    }

    pub fn phase(&self) -> UiPhase {
        self.lock().phase
    }

    pub fn set_input(&self, text: &str) {
        self.lock().input = text.to_string();
    }

    /// Shows `text` as the clickable word. Blank input is ignored; nothing is
    /// fetched until the word is clicked.
    pub fn submit_word(&self, text: &str) -> bool {
        let word = text.trim();
        if word.is_empty() {
            return false;
        }
        let word = word.to_lowercase();

        let mut state = self.lock();
        if let Err(e) = state.apply(UiEvent::SubmitWord) {
            warn!("Cannot submit word: {}", e);
            return false;
        }

        state.generation += 1;
        state.input.clear();
        state.results = None;
        state.current_word = Some(word.clone());
        state.word_token = Some(word);
        true
    }

    /// Enter in the input box.
    pub fn on_enter(&self) -> bool {
        let input = self.lock().input.clone();
        self.submit_word(&input)
    }

    /// Leaving the input box submits it only when no word is on screen.
    pub fn on_input_blur(&self) -> bool {
        let input = {
            let state = self.lock();
            if state.current_word.is_some() {
                return false;
            }
            state.input.clone()
        };
        self.submit_word(&input)
    }

    pub async fn on_word_clicked(&self) -> ClickOutcome {
        let (word, generation) = {
            let mut state = self.lock();
            if state.is_fetching {
                debug!("Click ignored: request already in flight");
                return ClickOutcome::Ignored;
            }
            let Some(word) = state.current_word.clone() else {
                debug!("Click ignored: no word on screen");
                return ClickOutcome::Ignored;
            };
            if let Err(e) = state.apply(UiEvent::WordClicked) {
                warn!("Click ignored: {}", e);
                return ClickOutcome::Ignored;
            }

            state.is_fetching = true;
            state.loading = true;
            state.word_opacity = DIMMED_OPACITY;
            (word, state.generation)
        };

        let mut cleanup = FetchCleanup {
            state: &self.state,
            generation,
            completed: false,
        };
        let result = self.fetcher.fetch(&word).await;
        cleanup.completed = true;

        let mut state = self.lock();
        if state.generation != generation {
            debug!("Discarding result for superseded word {}", word);
            return ClickOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                if let Err(e) = state.apply(UiEvent::FetchSucceeded) {
                    warn!("Unexpected state after fetch: {}", e);
                }
                info!("Rendered etymology for {}", word);
                state.results = Some(Results::Etymology(render_etymology(&data, &word)));
                // The word is consumed; the page is ready for the next one.
                state.word_token = None;
                state.current_word = None;
                ClickOutcome::Rendered
            }
            Err(e) => {
                warn!("Error fetching etymology for {}: {}", word, e);
                if let Err(e) = state.apply(UiEvent::FetchFailed) {
                    warn!("Unexpected state after fetch: {}", e);
                }
                state.results = Some(Results::Error(e.to_string()));
                ClickOutcome::Errored
            }
        }
    }

    /// Clears the page after a render or an error.
    pub fn reset(&self) -> crate::Result<()> {
        let mut state = self.lock();
        state.apply(UiEvent::Reset)?;
        state.results = None;
        state.word_token = None;
        state.current_word = None;
        Ok(())
    }

    /// The visible error line, if the last fetch failed.
    pub fn error_text(&self) -> Option<String> {
        match self.lock().results {
            Some(Results::Error(ref message)) => Some(error_message(message)),
            _ => None,
        }
    }
}
