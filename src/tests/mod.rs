//! Internal test modules - whitebox tests with crate access
//!
//! Property suites for the pure state machines plus checks that the bundled
//! configuration reaches them intact.

mod carousel_properties;
mod config_resolution;
