//! saba-core
//!
//! Pure domain types shared across the Saba engine: patient context, the
//! record envelopes persisted by the surrounding application, and the core
//! error type. No I/O dependency — this is the shared vocabulary of the
//! Saba system.

pub mod error;
pub mod models;
