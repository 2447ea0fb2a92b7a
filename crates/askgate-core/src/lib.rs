//! AskGate Core — gateway configuration.

pub mod config;

pub use config::GatewayConfig;
