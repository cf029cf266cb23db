//! Wire models for the inbound chat endpoint.
//!
//! Messages are relayed to the primary provider as received, so content blocks
//! this crate does not understand are kept as opaque JSON rather than dropped.
pub mod message;
pub mod request;
