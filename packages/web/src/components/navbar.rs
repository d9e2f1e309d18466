//! Site navigation bar

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{primary_links, AccountAction, MenuLink, NavAffordances, NavMenu, SignOut};
use crate::types::Session;

impl SignOut for EventHandler<()> {
    fn sign_out(&self) {
        self.call(());
    }
}

/// Top navigation bar.
///
/// The session and the sign-out action come from the caller; the bar only
/// owns its open/closed toggles.
#[component]
pub fn Navbar(session: Option<Session>, on_sign_out: EventHandler<()>) -> Element {
    let mut menu = use_signal(NavMenu::new);

    let links = primary_links();
    let affordances = menu.read().affordances(session.as_ref());
    let menu_open = menu.read().menu_open();

    let dropdown_session = session.clone();
    let mobile_session = session.clone();

    rsx! {
        div {
            class: "fixed top-0 left-0 w-full bg-white border-b border-blue-300 shadow-md py-4 z-40",
            div {
                class: "container mx-auto flex items-center justify-between px-4 md:px-8 max-w-screen-xl flex-wrap gap-x-6",

                // Logo
                Link {
                    to: Route::Home {},
                    class: "w-36 md:w-44 cursor-pointer",
                    img { src: "/assets/logo.svg", alt: "Logo", width: "176", height: "50" }
                }

                // Desktop nav links
                div {
                    class: "hidden md:flex items-center gap-x-6 flex-wrap",
                    ul {
                        class: "flex space-x-6 text-blue-600 font-medium",
                        for link in links.iter().cloned() {
                            NavLink { key: "{link.label}", link: link.clone(), mobile: false, menu }
                        }
                    }
                }

                // Desktop session controls
                div {
                    class: "hidden md:flex gap-x-4 flex-wrap",
                    match affordances.clone() {
                        NavAffordances::Anonymous { register, sign_in } => rsx! {
                            NavButton { link: register, class: DESKTOP_BUTTON, menu }
                            NavButton { link: sign_in, class: DESKTOP_BUTTON, menu }
                        },
                        NavAffordances::Authenticated { name, avatar, dropdown_open, actions } => rsx! {
                            div {
                                class: "relative",
                                button {
                                    class: "flex items-center bg-blue-600 text-white px-4 lg:px-5 py-2 rounded-full text-sm lg:text-base hover:bg-blue-800 transition duration-300",
                                    aria_expanded: "{dropdown_open}",
                                    onclick: move |_| menu.write().toggle_dropdown(dropdown_session.as_ref()),
                                    img { src: "{avatar}", alt: "User Avatar", width: "30", height: "30", class: "rounded-full mr-2" }
                                    "{name}"
                                }
                                if dropdown_open {
                                    div {
                                        class: "absolute right-0 mt-2 bg-white border rounded shadow-lg w-40",
                                        ul {
                                            class: "py-2",
                                            AccountMenuItems { actions, menu, on_sign_out }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }

                // Mobile menu button
                div {
                    class: "md:hidden",
                    button {
                        class: "text-blue-600 text-2xl",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu.write().toggle_menu(),
                        if menu_open { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            // Mobile menu
            if menu_open {
                nav {
                    class: "md:hidden bg-white border-t border-blue-300 py-4",
                    ul {
                        class: "flex flex-col items-center space-y-4",
                        for link in links.iter().cloned() {
                            NavLink { key: "mobile-{link.label}", link: link.clone(), mobile: true, menu }
                        }
                        li {
                            match affordances {
                                NavAffordances::Anonymous { register, sign_in } => rsx! {
                                    NavButton { link: register, class: MOBILE_BUTTON, menu }
                                    NavButton { link: sign_in, class: MOBILE_BUTTON, menu }
                                },
                                NavAffordances::Authenticated { dropdown_open, actions, .. } => rsx! {
                                    button {
                                        class: "bg-blue-600 text-white px-5 py-2 rounded-full text-base hover:bg-blue-800 transition duration-300",
                                        onclick: move |_| menu.write().toggle_dropdown(mobile_session.as_ref()),
                                        "User Menu"
                                    }
                                    if dropdown_open {
                                        ul {
                                            class: "mt-2 bg-white border rounded shadow-lg",
                                            AccountMenuItems { actions, menu, on_sign_out }
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

const DESKTOP_BUTTON: &str = "border border-blue-600 text-blue-600 px-4 lg:px-5 py-2 rounded-full text-sm lg:text-base hover:bg-blue-600 hover:text-white transition duration-300";
const MOBILE_BUTTON: &str = "border border-blue-600 text-blue-600 px-4 py-2 mx-1 rounded-md text-base hover:bg-blue-600 hover:text-white transition duration-300";

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    link: MenuLink,
    mobile: bool,
    menu: Signal<NavMenu>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let is_active = current == props.link.route;

    let mut menu = props.menu;
    let route = props.link.route.clone();

    rsx! {
        li {
            class: if is_active {
                "hover:text-blue-800 transition duration-200 border-b-2 border-blue-900"
            } else {
                "hover:text-blue-800 transition duration-200"
            },
            span {
                class: if props.mobile { "cursor-pointer text-base" } else { "cursor-pointer text-sm lg:text-base" },
                onclick: move |_| menu.write().navigate_to(route.clone(), &navigator),
                "{props.link.label}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavButtonProps {
    link: MenuLink,
    class: &'static str,
    menu: Signal<NavMenu>,
}

#[component]
fn NavButton(props: NavButtonProps) -> Element {
    let navigator = use_navigator();
    let mut menu = props.menu;
    let route = props.link.route.clone();

    rsx! {
        button {
            class: props.class,
            onclick: move |_| menu.write().navigate_to(route.clone(), &navigator),
            "{props.link.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AccountMenuItemsProps {
    actions: Vec<AccountAction>,
    menu: Signal<NavMenu>,
    on_sign_out: EventHandler<()>,
}

#[component]
fn AccountMenuItems(props: AccountMenuItemsProps) -> Element {
    let navigator = use_navigator();
    let mut menu = props.menu;
    let on_sign_out = props.on_sign_out;

    rsx! {
        for action in props.actions.iter().cloned() {
            {
                let label = action.label();
                let icon = account_icon(&action);
                rsx! {
                    li {
                        key: "{label}",
                        class: "px-4 py-2 hover:bg-gray-200 cursor-pointer flex items-center gap-2",
                        onclick: move |_| match &action {
                            AccountAction::Open(link) => menu.write().navigate_to(link.route.clone(), &navigator),
                            AccountAction::SignOut => menu.read().sign_out(&on_sign_out),
                        },
                        span { class: "text-gray-500", "{icon}" }
                        "{label}"
                    }
                }
            }
        }
    }
}

fn account_icon(action: &AccountAction) -> &'static str {
    match action {
        AccountAction::Open(MenuLink { route: Route::Appointments {}, .. }) => "\u{1F4C5}", // 📅
        AccountAction::Open(_) => "\u{1F464}",                                             // 👤
        AccountAction::SignOut => "\u{1F6AA}",                                              // 🚪
    }
}
