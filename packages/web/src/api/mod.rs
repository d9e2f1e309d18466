//! REST client for communicating with the clinic backend

mod client;
mod endpoints;
mod error;

pub use client::*;
pub use endpoints::*;
pub use error::*;
