//! Common utilities for the Wren document parser.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for tolerated oddities

pub mod warning;
