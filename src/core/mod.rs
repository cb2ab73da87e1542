//! Core board logic
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Status, Notification)
//! - `services/` - Board store, partitioning, drag-and-drop, editing
//! - `ports/` - Trait definitions for storage, notifications and prompts

pub mod models;
pub mod ports;
pub mod services;
