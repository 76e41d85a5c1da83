//! Shared contracts between the catalog admin page and its backend.
//!
//! Wire payloads and validation rules live here so they can be tested
//! without a browser.

pub mod domain;
