//! Reusable UI components

mod appointments_table;
mod doctor_card;
mod footer;
mod loading;
mod navbar;
mod site_layout;
mod toast;

pub use appointments_table::*;
pub use doctor_card::*;
pub use footer::*;
pub use loading::*;
pub use navbar::*;
pub use site_layout::*;
pub use toast::*;
