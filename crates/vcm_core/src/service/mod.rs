//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry, directory and aggregate calls into the manager
//!   facade consumed by the command router.
//! - Keep the router decoupled from store and locking details.

pub mod manager;
