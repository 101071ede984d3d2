//! Core domain types
//!
//! This module contains the entities shared between the API client and the
//! action binary: workflow jobs and the repository being addressed.

pub mod job;
pub mod repository;
