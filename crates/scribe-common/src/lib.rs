//! Common utilities for the Scribe HTML builder.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal output
//! - **Resource Loading** - text snippets from files, `data:` URLs and HTTP

pub mod resource;
pub mod warning;
