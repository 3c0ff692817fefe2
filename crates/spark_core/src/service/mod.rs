//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into registry-level APIs.
//! - Keep CLI rendering decoupled from storage details.

pub mod queries;
pub mod registry_service;
