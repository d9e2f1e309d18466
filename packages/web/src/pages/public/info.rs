//! Static information pages

use dioxus::prelude::*;

use crate::components::ContactDetails;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "py-10 text-gray-600",
            h1 { class: "text-2xl text-center text-gray-700 mb-10", "ABOUT US" }
            div {
                class: "flex flex-col md:flex-row gap-12",
                img { src: "/assets/about_image.png", alt: "About", class: "w-full md:max-w-[360px] rounded-lg" }
                div {
                    class: "flex flex-col justify-center gap-6 md:w-2/4 text-sm",
                    p {
                        "Welcome to Healthcare, your trusted partner in managing your healthcare needs conveniently and efficiently. We understand the challenges individuals face when it comes to scheduling doctor appointments and managing their health records."
                    }
                    p {
                        "We are committed to excellence in healthcare technology, continuously improving our platform with the latest advancements to improve user experience and deliver superior service."
                    }
                    h2 { class: "text-gray-800 font-semibold", "Our Vision" }
                    p {
                        "Our vision is to create a seamless healthcare experience for every user, bridging the gap between patients and healthcare providers."
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            class: "py-10 text-gray-600",
            h1 { class: "text-2xl text-center text-gray-700 mb-10", "CONTACT US" }
            div {
                class: "flex flex-col md:flex-row justify-center gap-10",
                img { src: "/assets/contact_image.png", alt: "Contact", class: "w-full md:max-w-[360px] rounded-lg" }
                ContactDetails {}
            }
        }
    }
}

/// Placeholder for the admin console
#[component]
pub fn Admin() -> Element {
    rsx! {
        ComingSoon { title: "Admin" }
    }
}

/// Placeholder for the doctor-facing portal
#[component]
pub fn DoctorPortal() -> Element {
    rsx! {
        ComingSoon { title: "Doctor Portal" }
    }
}

/// Shared body for pages that are not built out yet
#[component]
pub fn ComingSoon(title: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-2 py-24 text-gray-600",
            h1 { class: "text-2xl font-semibold text-gray-800", "{title}" }
            p { "This page is coming soon." }
        }
    }
}
