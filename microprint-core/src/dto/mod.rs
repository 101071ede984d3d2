//! Data Transfer Objects
//!
//! Wire shapes of the Actions API responses. DTOs wrap domain entities in
//! the envelopes the API returns them in.

pub mod job;
