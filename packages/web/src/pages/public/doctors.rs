//! Doctor directory page

use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::components::DoctorCard;
use crate::state::{DirectoryView, SpecialtyFilter};
use crate::types::Doctor;

/// All doctors with a specialty sidebar
#[component]
pub fn AllDoctors() -> Element {
    let catalog = use_context::<Catalog>();
    let navigator = use_navigator();

    let mut directory = use_signal(move || DirectoryView::new(catalog));
    let mut filters_open = use_signal(|| false);

    let roster: Vec<Doctor> = directory.read().filtered_roster().cloned().collect();
    let selected = directory.read().selected();

    rsx! {
        div {
            class: "flex flex-col md:flex-row gap-6 py-6",

            // Filter sidebar
            aside {
                class: "md:w-64 flex-shrink-0",
                button {
                    class: "md:hidden mb-3 px-4 py-2 border rounded text-sm",
                    onclick: move |_| filters_open.set(!filters_open()),
                    if filters_open() { "Hide Filters" } else { "Filters" }
                }
                div {
                    class: if filters_open() { "flex flex-col gap-2" } else { "hidden md:flex flex-col gap-2" },
                    h2 { class: "text-lg font-semibold text-gray-700 mb-2", "Specialities" }
                    for filter in SpecialtyFilter::variants() {
                        {
                            let is_active = selected == filter;
                            let count = directory.read().count(filter);
                            rsx! {
                                button {
                                    key: "{filter.label()}",
                                    class: if is_active {
                                        "flex items-center justify-between px-4 py-2 rounded border text-sm text-left bg-blue-100 text-blue-700 border-blue-300"
                                    } else {
                                        "flex items-center justify-between px-4 py-2 rounded border text-sm text-left text-gray-600 hover:bg-gray-50"
                                    },
                                    onclick: move |_| directory.write().select_specialty(filter),
                                    "{filter.label()}"
                                    span {
                                        class: "ml-2 px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                                        "{count}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Grid
            section {
                class: "flex-1",
                if roster.is_empty() {
                    div {
                        class: "text-center py-16 text-gray-500",
                        "No doctors found for {selected.label()}."
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
                        for doctor in roster {
                            DoctorCard {
                                key: "{doctor.id}",
                                doctor: doctor.clone(),
                                on_select: move |id| directory.read().select_provider(id, &navigator)
                            }
                        }
                    }
                }
            }
        }
    }
}
