mod controller;
pub mod fetcher;
pub mod render;
pub mod state;

pub use controller::{ClickOutcome, DIMMED_OPACITY, FULL_OPACITY, Results, UiController, UiState};
pub use fetcher::{EtymologyFetcher, FetchError, HttpEtymologyFetcher};
pub use render::{EtymologyView, MorphemeView, render_etymology};
pub use state::{UiEvent, UiPhase};
