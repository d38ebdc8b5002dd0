//! Filter + pagination cursor for the works grid.

use std::rc::Rc;
use yew::Reducible;

use crate::model::{ALL_CATEGORIES, LOAD_MORE_COUNT};

/// What the works grid currently shows. `shown` is a cursor into the
/// filtered view; changing the filter resets it to the initial count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub filter: String,
    pub shown: usize,
    initial: usize,
}

impl DisplayState {
    pub fn new(initial: usize) -> Self {
        Self {
            filter: ALL_CATEGORIES.to_string(),
            shown: initial,
            initial,
        }
    }
}

#[derive(Clone, Debug)]
pub enum DisplayAction {
    SetFilter(String),
    LoadMore,
}

impl Reducible for DisplayState {
    type Action = DisplayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisplayAction::SetFilter(filter) => {
                if filter == self.filter {
                    return self;
                }
                Rc::new(Self {
                    filter,
                    shown: self.initial,
                    initial: self.initial,
                })
            }
            DisplayAction::LoadMore => Rc::new(Self {
                filter: self.filter.clone(),
                shown: self.shown + LOAD_MORE_COUNT,
                initial: self.initial,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: DisplayState, action: DisplayAction) -> DisplayState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn filter_change_resets_cursor() {
        let state = DisplayState::new(6);
        let state = reduce(state, DisplayAction::LoadMore);
        assert_eq!(state.shown, 6 + LOAD_MORE_COUNT);
        let state = reduce(state, DisplayAction::SetFilter("design".to_string()));
        assert_eq!(state.filter, "design");
        assert_eq!(state.shown, 6);
    }

    #[test]
    fn same_filter_is_a_no_op() {
        let state = DisplayState::new(6);
        let state = reduce(state, DisplayAction::LoadMore);
        let again = reduce(
            state.clone(),
            DisplayAction::SetFilter(ALL_CATEGORIES.to_string()),
        );
        assert_eq!(again, state);
    }
}
