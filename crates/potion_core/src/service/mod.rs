//! Core use-case services.
//!
//! # Responsibility
//! - Own the mutable collections (tasks, potions) and session state (mood,
//!   language) behind explicit load/save lifecycles.
//! - Keep callers decoupled from storage details.

pub mod language_service;
pub mod mood_service;
pub mod potion_service;
pub mod task_service;
