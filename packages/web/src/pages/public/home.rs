//! Home page component

use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::components::DoctorCard;
use crate::config::config;
use crate::routes::Route;
use crate::state::{FeaturedDoctors, SpecialtyFilter};
use crate::types::{Doctor, Specialty};

/// Home page - hero, specialty shortcuts, top doctors and a signup banner
#[component]
pub fn Home() -> Element {
    let catalog = use_context::<Catalog>();
    let navigator = use_navigator();

    let mut featured = use_signal(move || FeaturedDoctors::new(catalog, config().featured_doctors));

    let visible: Vec<Doctor> = featured.read().visible().cloned().collect();
    let selected = featured.read().directory().selected();
    let toggle_label = featured.read().toggle_label();

    rsx! {
        div {
            class: "flex flex-col gap-16 pb-16",

            // Hero
            header {
                class: "flex flex-col md:flex-row items-center bg-blue-600 rounded-lg px-6 md:px-10 lg:px-20 py-10 gap-8",
                div {
                    class: "md:w-1/2 flex flex-col gap-4 text-white",
                    h1 {
                        class: "text-3xl md:text-4xl lg:text-5xl font-semibold leading-tight",
                        "Book Appointment With Trusted Doctors"
                    }
                    p {
                        class: "text-sm font-light",
                        "Simply browse through our extensive list of trusted doctors, schedule your appointment hassle-free."
                    }
                    Link {
                        to: Route::AllDoctors {},
                        class: "self-start bg-white text-gray-700 px-8 py-3 rounded-full text-sm hover:scale-105 transition-all",
                        "Book appointment \u{2192}"
                    }
                }
                div {
                    class: "md:w-1/2",
                    img { src: "/assets/header_img.png", alt: "Doctors", class: "w-full rounded-lg" }
                }
            }

            // Specialty shortcuts
            section {
                id: "speciality",
                class: "flex flex-col items-center gap-4 text-gray-800",
                h2 { class: "text-3xl font-medium", "Find Your Specialty" }
                p {
                    class: "sm:w-1/3 text-center text-sm",
                    "Simply browse through our extensive list of trusted doctors, schedule your appointment hassle-free."
                }
                div {
                    class: "flex sm:justify-center gap-4 pt-5 w-full overflow-x-auto",
                    for specialty in Specialty::ALL {
                        {
                            let filter = SpecialtyFilter::Only(specialty);
                            let is_active = selected == filter;
                            rsx! {
                                button {
                                    key: "{specialty.label()}",
                                    class: if is_active {
                                        "flex flex-col items-center text-xs flex-shrink-0 text-blue-700 font-semibold -translate-y-2 transition-all"
                                    } else {
                                        "flex flex-col items-center text-xs flex-shrink-0 hover:-translate-y-2 transition-all"
                                    },
                                    onclick: move |_| {
                                        let mut featured = featured.write();
                                        // Clicking the active shortcut clears it
                                        if featured.directory().selected() == filter {
                                            featured.select_specialty(SpecialtyFilter::All);
                                        } else {
                                            featured.select_specialty(filter);
                                        }
                                    },
                                    img { src: "{specialty.icon()}", alt: "{specialty.label()}", class: "w-16 sm:w-24 mb-2" }
                                    "{specialty.label()}"
                                }
                            }
                        }
                    }
                }
            }

            // Top doctors
            section {
                class: "flex flex-col items-center gap-4 text-gray-900",
                h2 { class: "text-3xl font-medium", "Top Doctors to Book" }
                p {
                    class: "sm:w-1/3 text-center text-sm",
                    "Simply browse through our extensive list of trusted doctors."
                }

                if visible.is_empty() {
                    p { class: "text-gray-500 py-8", "No doctors available for this specialty." }
                } else {
                    div {
                        class: "w-full grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4 pt-5",
                        for doctor in visible {
                            DoctorCard {
                                key: "{doctor.id}",
                                doctor: doctor.clone(),
                                on_select: move |id| featured.read().directory().select_provider(id, &navigator)
                            }
                        }
                    }
                }

                button {
                    class: "bg-blue-50 text-gray-600 px-12 py-3 rounded-full mt-6 hover:bg-blue-100",
                    onclick: move |_| featured.write().toggle_show_all(),
                    "{toggle_label}"
                }
            }

            // Banner
            section {
                class: "flex bg-blue-600 rounded-lg px-6 sm:px-10 md:px-14 lg:px-12",
                div {
                    class: "flex-1 py-8 sm:py-10 md:py-16 lg:py-24 lg:pl-5",
                    div {
                        class: "text-xl sm:text-2xl md:text-3xl lg:text-5xl font-semibold text-white",
                        p { "Create Your Account Today" }
                        p { class: "mt-4 text-lg md:text-2xl font-normal", "Book appointments with 100+ trusted doctors" }
                    }
                    Link {
                        to: Route::Register {},
                        class: "inline-block bg-white text-sm sm:text-base text-gray-600 px-8 py-3 rounded-full mt-6 hover:scale-105 transition-all",
                        "Create account"
                    }
                }
                div {
                    class: "hidden md:block md:w-1/2 lg:w-[370px] relative",
                    img { src: "/assets/appointment_img.png", alt: "Appointment", class: "w-full absolute bottom-0 right-0 max-w-md" }
                }
            }
        }
    }
}
