//! Network-facing API clients

pub mod client;
