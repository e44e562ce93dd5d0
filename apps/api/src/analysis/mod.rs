// Job description analysis: one model call producing a summary and three
// resume skills. All model traffic goes through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
