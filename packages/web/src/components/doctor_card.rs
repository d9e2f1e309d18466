//! Doctor card component

use dioxus::prelude::*;

use crate::types::Doctor;

#[derive(Props, Clone, PartialEq)]
pub struct DoctorCardProps {
    pub doctor: Doctor,
    pub on_select: EventHandler<u32>,
}

/// Card showing one doctor in a grid
#[component]
pub fn DoctorCard(props: DoctorCardProps) -> Element {
    let doctor = &props.doctor;
    let id = doctor.id;

    rsx! {
        div {
            class: "border rounded-lg overflow-hidden shadow-md transition duration-200 hover:shadow-lg bg-white",
            img {
                src: "{doctor.image}",
                alt: "{doctor.name}",
                width: "200",
                height: "150",
                class: "object-cover w-full h-40 bg-blue-50"
            }
            div {
                class: "p-4 text-center",
                h2 { class: "text-lg font-semibold text-green-700", "{doctor.name}" }
                p { class: "text-sm text-gray-600", "{doctor.specialty}" }
                p {
                    class: if doctor.available {
                        "mt-2 text-sm font-bold text-green-500"
                    } else {
                        "mt-2 text-sm font-bold text-red-500"
                    },
                    "{doctor.availability_label()}"
                }
                button {
                    class: "mt-3 text-blue-600 hover:underline font-medium",
                    onclick: move |_| props.on_select.call(id),
                    "View"
                }
            }
        }
    }
}
