//! Modal open/close state machine.
//!
//! At most one modal is open at a time across both collections (the hash can
//! only name one). `Closing` keeps the item mounted while the fade-out
//! transition plays; a timer finalizes it afterwards.

use std::rc::Rc;
use yew::Reducible;

use crate::model::Kind;

/// How long the fade-out transition runs before the modal unmounts.
pub const MODAL_CLOSE_MS: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        kind: Kind,
        id: String,
    },
    Closing {
        kind: Kind,
        id: String,
    },
}

impl ModalState {
    /// The item currently bound to the shell, including during fade-out.
    pub fn active(&self) -> Option<(Kind, &str)> {
        match self {
            ModalState::Closed => None,
            ModalState::Open { kind, id } | ModalState::Closing { kind, id } => {
                Some((*kind, id.as_str()))
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

#[derive(Clone, Debug)]
pub enum ModalAction {
    /// Bind an item and show the shell. Opening the already-open id is a
    /// no-op; opening while another id is open replaces it directly.
    Open { kind: Kind, id: String },
    /// Start the fade-out. No-op unless currently open.
    Close,
    /// Unmount after the fade-out delay. No-op unless still closing (a
    /// reopen during the transition wins).
    Finalize,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open { kind, id } => {
                let already_open = matches!(
                    &*self,
                    ModalState::Open { kind: k, id: i } if *k == kind && *i == id
                );
                if already_open {
                    self
                } else {
                    Rc::new(ModalState::Open { kind, id })
                }
            }
            ModalAction::Close => {
                if let ModalState::Open { kind, id } = &*self {
                    Rc::new(ModalState::Closing {
                        kind: *kind,
                        id: id.clone(),
                    })
                } else {
                    self
                }
            }
            ModalAction::Finalize => {
                if matches!(&*self, ModalState::Closing { .. }) {
                    Rc::new(ModalState::Closed)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(kind: Kind, id: &str) -> ModalAction {
        ModalAction::Open {
            kind,
            id: id.to_string(),
        }
    }

    #[test]
    fn opening_the_open_id_returns_the_same_state() {
        let state = Rc::new(ModalState::Closed).reduce(open(Kind::Works, "abc"));
        let again = state.clone().reduce(open(Kind::Works, "abc"));
        // same Rc, not just an equal value: nothing re-renders
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn opening_another_id_replaces_without_closing() {
        let state = Rc::new(ModalState::Closed).reduce(open(Kind::Works, "abc"));
        let state = state.reduce(open(Kind::News, "xyz"));
        assert_eq!(state.active(), Some((Kind::News, "xyz")));
        assert!(state.is_open());
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let state = Rc::new(ModalState::Closed).reduce(ModalAction::Close);
        assert_eq!(*state, ModalState::Closed);
        let again = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn close_then_finalize_unmounts() {
        let state = Rc::new(ModalState::Closed).reduce(open(Kind::Works, "abc"));
        let state = state.reduce(ModalAction::Close);
        assert!(!state.is_open());
        assert_eq!(state.active(), Some((Kind::Works, "abc")));
        let state = state.reduce(ModalAction::Finalize);
        assert_eq!(*state, ModalState::Closed);
    }

    #[test]
    fn reopen_during_fade_out_wins_over_finalize() {
        let state = Rc::new(ModalState::Closed).reduce(open(Kind::Works, "abc"));
        let state = state.reduce(ModalAction::Close);
        let state = state.reduce(open(Kind::Works, "abc"));
        let state = state.reduce(ModalAction::Finalize);
        assert!(state.is_open());
        assert_eq!(state.active(), Some((Kind::Works, "abc")));
    }
}
