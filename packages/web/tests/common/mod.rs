// Common test utilities

pub mod harness;
pub mod recorders;

#[allow(unused_imports)]
pub use harness::*;
#[allow(unused_imports)]
pub use recorders::*;
