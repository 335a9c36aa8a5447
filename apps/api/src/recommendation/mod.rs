// Song recommendation: provider payload types, prompts, the recommender seam,
// the page status machine, and the HTTP handlers that drive them.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod recommender;
pub mod session;
