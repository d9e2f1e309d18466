//! Appointments table component

use dioxus::prelude::*;
use tracing::debug;

use super::LoadingSpinner;
use crate::api::ApiClient;
use crate::state::appointments::NO_APPOINTMENTS;
use crate::state::{AppointmentsTable as TableState, RequestTracker};

/// Table of appointments, fetched once per mount
#[component]
pub fn AppointmentsTable() -> Element {
    let client = use_context::<ApiClient>();

    let tracker = use_hook(RequestTracker::new);
    let mut table = use_signal({
        let tracker = tracker.clone();
        move || TableState::new(tracker)
    });

    use_drop({
        let tracker = tracker.clone();
        move || tracker.invalidate()
    });

    // Runs once on mount; nothing reactive is read inside
    use_hook(move || {
        let ticket = table.write().begin_load();
        spawn(async move {
            let result = client.fetch_appointments().await;

            if !tracker.is_current(&ticket) {
                debug!("Appointments view gone before the fetch finished");
                return;
            }

            table.write().finish(&ticket, result);
        });
    });

    let table = table.read();

    if table.is_loading() {
        return rsx! {
            div {
                class: "flex justify-center items-center h-full",
                LoadingSpinner {}
            }
        };
    }

    if let Some(err) = table.error() {
        return rsx! {
            div { class: "text-red-500 text-center py-8", "{err}" }
        };
    }

    let rows = table.rows().unwrap_or_default();

    rsx! {
        div {
            h2 {
                class: "text-2xl my-14 font-semibold mb-4 text-center bg-gradient-to-r from-orange-500 via-indigo-500 to-purple-500 text-transparent bg-clip-text",
                "Appointments"
            }
            table {
                class: "min-w-full bg-white border border-gray-300",
                thead {
                    tr {
                        class: "bg-gray-100",
                        th { class: "py-2 px-2 border-b text-slate-600 font-extrabold text-center text-xs sm:text-base", "Patient" }
                        th { class: "py-2 px-2 border-b text-slate-600 font-extrabold text-center text-xs sm:text-base", "Appointment Date" }
                        th { class: "py-2 px-2 border-b text-slate-600 font-extrabold text-center text-xs sm:text-base", "Doctor Email" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: "3", class: "text-center py-4 text-gray-500", "{NO_APPOINTMENTS}" }
                        }
                    } else {
                        for row in rows {
                            tr {
                                key: "{row.key}",
                                td { class: "py-2 px-2 text-slate-600 font-extrabold", "{row.patient}" }
                                td { class: "py-2 text-blue-700 text-center text-xs sm:text-base", "{row.date}" }
                                td { class: "py-2 text-center text-slate-600 text-xs sm:text-base", "{row.doctor_email}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
