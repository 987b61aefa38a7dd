//! Remote API clients for the outreach workflow: the GitHub and LinkedIn
//! profile collectors and the Gemini generation backend.

pub mod gemini;
pub mod github;
pub mod linkedin;

pub use gemini::GeminiBackend;
pub use github::GithubCollector;
pub use linkedin::LinkedInCollector;
