//! Appointments page

use dioxus::prelude::*;

use crate::components::AppointmentsTable;

#[component]
pub fn Appointments() -> Element {
    rsx! {
        div {
            class: "overflow-x-auto pb-12",
            AppointmentsTable {}
        }
    }
}
