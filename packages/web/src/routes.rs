//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::account::{Appointments, Profile, Register, SignIn};
use crate::pages::public::{About, Admin, AllDoctors, Contact, DoctorDetail, DoctorPortal, Home};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        // Public routes
        #[route("/")]
        Home {},

        #[route("/alldoctors")]
        AllDoctors {},

        #[route("/alldoctors/:id")]
        DoctorDetail { id: u32 },

        #[route("/about")]
        About {},

        #[route("/contact")]
        Contact {},

        #[route("/admin")]
        Admin {},

        #[route("/doctorpage")]
        DoctorPortal {},

        // Account routes
        #[route("/register")]
        Register {},

        #[route("/login")]
        SignIn {},

        #[route("/appointments")]
        Appointments {},

        #[route("/profile")]
        Profile {},
}

/// Anything that can take the visitor to a route
pub trait RouteSink {
    fn go_to(&self, route: Route);
}

impl RouteSink for Navigator {
    fn go_to(&self, route: Route) {
        self.push(route);
    }
}
