//! Core types shared across shutter facilities
//!
//! This crate provides the schema constants used by the logging facility
//! and by tests that assert on captured events.

pub mod schema;
