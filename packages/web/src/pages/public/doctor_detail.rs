//! Doctor detail page

use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::routes::Route;

/// Profile of a single doctor
#[component]
pub fn DoctorDetail(id: u32) -> Element {
    let catalog = use_context::<Catalog>();

    let Some(doctor) = catalog.get(id).cloned() else {
        return rsx! {
            div {
                class: "flex flex-col items-center gap-4 py-24 text-gray-600",
                h1 { class: "text-2xl font-semibold", "Doctor not found" }
                Link {
                    to: Route::AllDoctors {},
                    class: "text-blue-600 hover:underline",
                    "Back to all doctors"
                }
            }
        };
    };

    rsx! {
        div {
            class: "flex flex-col sm:flex-row gap-6 py-8",
            img {
                src: "{doctor.image}",
                alt: "{doctor.name}",
                class: "w-full sm:max-w-72 rounded-lg bg-blue-600"
            }
            div {
                class: "flex-1 border border-gray-300 rounded-lg p-8 bg-white",
                h1 { class: "text-2xl font-medium text-gray-900", "{doctor.name}" }
                p { class: "mt-1 text-gray-600", "{doctor.specialty}" }
                p {
                    class: if doctor.available {
                        "mt-4 inline-block px-3 py-1 rounded-full text-sm bg-green-100 text-green-700"
                    } else {
                        "mt-4 inline-block px-3 py-1 rounded-full text-sm bg-red-100 text-red-700"
                    },
                    "{doctor.availability_label()}"
                }
                div {
                    class: "mt-6 flex gap-4",
                    Link {
                        to: Route::Appointments {},
                        class: "bg-blue-600 text-white px-8 py-3 rounded-full text-sm hover:bg-blue-700",
                        "Book an appointment"
                    }
                    Link {
                        to: Route::AllDoctors {},
                        class: "px-8 py-3 rounded-full text-sm border text-gray-600 hover:bg-gray-50",
                        "All doctors"
                    }
                }
            }
        }
    }
}
