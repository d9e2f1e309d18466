//! Public-facing pages

mod doctor_detail;
mod doctors;
mod home;
mod info;

pub use doctor_detail::*;
pub use doctors::*;
pub use home::*;
pub use info::*;
