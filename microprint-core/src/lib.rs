//! Microprint Core
//!
//! Core types shared by the microprint workspace.
//!
//! This crate contains:
//! - Domain types: workflow jobs, repository identifiers, API credentials
//! - DTOs: response envelopes of the Actions API
//! - Log decoding and the ANSI escape sanitizer applied before rendering

pub mod ansi;
pub mod domain;
pub mod dto;
pub mod log;

pub use ansi::strip_ansi_escapes;
pub use log::decode_log;
