//! Common test utilities for azdo-mutation-reports integration tests

#[allow(dead_code)]
pub mod azure;
#[allow(dead_code)]
pub mod fixtures;

#[allow(unused_imports)]
pub use azure::*;
#[allow(unused_imports)]
pub use fixtures::*;
