//! AskGate server — single-endpoint gateway that grounds a question in
//! freshly fetched conference records and forwards it to an LLM backend.

pub mod context;
pub mod dataset;
pub mod routes;
pub mod state;

pub use state::AppState;
