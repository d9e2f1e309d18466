//! Navigation bar state

use crate::routes::{Route, RouteSink};
use crate::types::Session;

/// Something that can end the current session
pub trait SignOut {
    fn sign_out(&self);
}

/// A labelled link in one of the navigation menus
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLink {
    pub label: &'static str,
    pub route: Route,
}

/// Links shown to everyone, on desktop and in the mobile menu
pub fn primary_links() -> Vec<MenuLink> {
    vec![
        MenuLink { label: "Home", route: Route::Home {} },
        MenuLink { label: "All Doctors", route: Route::AllDoctors {} },
        MenuLink { label: "About", route: Route::About {} },
        MenuLink { label: "Contact", route: Route::Contact {} },
        MenuLink { label: "Admin", route: Route::Admin {} },
        MenuLink { label: "Doctor", route: Route::DoctorPortal {} },
    ]
}

/// Pages in the signed-in account dropdown, above "Logout"
pub fn account_links() -> Vec<MenuLink> {
    vec![
        MenuLink { label: "Appointments", route: Route::Appointments {} },
        MenuLink { label: "Profile", route: Route::Profile {} },
    ]
}

/// Entry in the signed-in account dropdown
#[derive(Clone, Debug, PartialEq)]
pub enum AccountAction {
    Open(MenuLink),
    SignOut,
}

impl AccountAction {
    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::Open(link) => link.label,
            AccountAction::SignOut => "Logout",
        }
    }
}

/// What the session-dependent corner of the bar offers
#[derive(Clone, Debug, PartialEq)]
pub enum NavAffordances {
    Anonymous {
        register: MenuLink,
        sign_in: MenuLink,
    },
    Authenticated {
        name: String,
        avatar: String,
        dropdown_open: bool,
        /// Empty while the dropdown is closed
        actions: Vec<AccountAction>,
    },
}

/// Open/closed state of the mobile menu and the account dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    menu_open: bool,
    dropdown_open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Flip the account dropdown. Without a session there is no dropdown.
    pub fn toggle_dropdown(&mut self, session: Option<&Session>) {
        if session.is_some() {
            self.dropdown_open = !self.dropdown_open;
        }
    }

    /// Route somewhere and close the mobile menu
    pub fn navigate_to(&mut self, route: Route, router: &impl RouteSink) {
        router.go_to(route);
        self.menu_open = false;
    }

    /// Ask the auth service to end the session. The bar re-renders once the
    /// new session value arrives, so local toggles stay as they are.
    pub fn sign_out(&self, auth: &impl SignOut) {
        auth.sign_out();
    }

    pub fn affordances(&self, session: Option<&Session>) -> NavAffordances {
        match session {
            None => NavAffordances::Anonymous {
                register: MenuLink { label: "Sign Up", route: Route::Register {} },
                sign_in: MenuLink { label: "Sign In", route: Route::SignIn {} },
            },
            Some(session) => NavAffordances::Authenticated {
                name: session.name.clone(),
                avatar: session.avatar().to_string(),
                dropdown_open: self.dropdown_open,
                actions: if self.dropdown_open {
                    account_links()
                        .into_iter()
                        .map(AccountAction::Open)
                        .chain(std::iter::once(AccountAction::SignOut))
                        .collect()
                } else {
                    Vec::new()
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.menu_open());
        assert!(!menu.dropdown_open());
    }

    #[test]
    fn toggles_are_independent() {
        let session = Session {
            name: "Ada".to_string(),
            avatar_url: None,
        };
        let mut menu = NavMenu::new();
        menu.toggle_dropdown(Some(&session));
        assert!(menu.dropdown_open());
        assert!(!menu.menu_open());

        menu.toggle_menu();
        assert!(menu.menu_open());
        assert!(menu.dropdown_open());
    }

    #[test]
    fn primary_links_cover_the_site() {
        let labels: Vec<_> = primary_links().iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "All Doctors", "About", "Contact", "Admin", "Doctor"]
        );
    }

    #[test]
    fn account_links_point_at_account_pages() {
        let routes: Vec<_> = account_links().into_iter().map(|l| l.route).collect();
        assert_eq!(routes, vec![Route::Appointments {}, Route::Profile {}]);
    }
}
