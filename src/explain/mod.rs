pub mod profile;
pub mod requester;

pub use profile::Audience;
pub use requester::{
    build_prompt, parse_score, Explanation, ExplanationRequester, OllamaBackend, TextBackend,
};
