//! Risk assessment engine for GACP farm certification applications.
//!
//! The engine combines five rule-based risk components (document, farmer,
//! farm, historical, fraud) into a single 0-100 score, a typed flag list,
//! and a routing recommendation for the reviewer workflow. All inputs are
//! caller-supplied snapshots; the engine performs no I/O and keeps no state
//! between calls.

pub mod config;
pub mod telemetry;
pub mod workflows;
