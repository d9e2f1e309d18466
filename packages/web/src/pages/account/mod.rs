//! Signed-in visitor pages

mod appointments;
mod profile;

pub use appointments::*;
pub use profile::*;
