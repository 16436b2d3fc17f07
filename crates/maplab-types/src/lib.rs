//! Shared domain types for Maplab.
//!
//! This crate contains the core domain types used across the Maplab
//! workspace: the `GameMap` entity, its `Theme` tag, and the session
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod map;
