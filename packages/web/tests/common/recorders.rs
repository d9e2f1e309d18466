//! Collaborator doubles that record what they were asked to do

use std::cell::{Cell, RefCell};

use clinic_web::routes::{Route, RouteSink};
use clinic_web::state::SignOut;

#[derive(Default)]
pub struct RecordingRouter {
    pub visited: RefCell<Vec<Route>>,
}

impl RouteSink for RecordingRouter {
    fn go_to(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingSignOut {
    pub calls: Cell<usize>,
}

impl SignOut for RecordingSignOut {
    fn sign_out(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
