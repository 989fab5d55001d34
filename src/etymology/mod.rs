pub mod normalize;
pub mod prompt;
mod service;
mod types;

pub use normalize::strip_code_fences;
pub use prompt::build_prompt;
pub use service::{EtymologyService, parse_reply};
pub use types::{EtymologyResponse, MorphemeEntry};
