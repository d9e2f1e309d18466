//! View state for the interactive parts of the site
//!
//! These types hold no signals so they can be driven directly from tests;
//! components wrap them in `Signal`s.

pub mod appointments;
pub mod directory;
pub mod navigation;
pub mod request;
pub mod subscription;
pub mod toast;

pub use appointments::{AppointmentRow, AppointmentsError, AppointmentsTable, LoadState};
pub use directory::{filter_roster, DirectoryView, FeaturedDoctors, SpecialtyFilter};
pub use navigation::{account_links, primary_links, AccountAction, MenuLink, NavAffordances, NavMenu, SignOut};
pub use request::{RequestTicket, RequestTracker};
pub use subscription::{validate_email, EmailError, Notice, SubmitError, SubscriptionForm};
pub use toast::{Toast, ToastKind, ToastQueue};
