//! Common test utilities for integration tests

#![allow(unused_imports)]

pub mod helpers;

pub use helpers::*;
