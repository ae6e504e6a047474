//! Dispatch handle trait
//!
//! The reducer/store side of the action layer. Anything that accepts an
//! [`Action`] can act as the dispatch handle.

use std::cell::RefCell;

use crate::actions::Action;

/// Store collaborator that receives actions for its reducer
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

/// Collects dispatched actions in order
impl Dispatch for RefCell<Vec<Action>> {
    fn dispatch(&self, action: Action) {
        self.borrow_mut().push(action);
    }
}
