use std::rc::Rc;

use yew::prelude::*;

const ITEM_PREFIX: &str = "item-";

/// Single-select, collapsible: at most one entry is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
    len: usize,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

pub enum AccordionAction {
    Toggle(usize),
    Open(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            AccordionAction::Toggle(index) => next.toggle(index),
            AccordionAction::Open(index) => next.open(index),
        }
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

pub fn item_id(index: usize) -> String {
    format!("{ITEM_PREFIX}{index}")
}

/// Parses a location hash like `#item-2`.
pub fn index_from_hash(hash: &str) -> Option<usize> {
    hash.strip_prefix('#')
        .unwrap_or(hash)
        .strip_prefix(ITEM_PREFIX)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut state = AccordionState::new(5);
        state.toggle(1);
        assert!(state.is_open(1));
        state.toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(1));
        assert_eq!(state.open_index(), Some(3));
    }

    #[test]
    fn toggling_open_entry_collapses_it() {
        let mut state = AccordionState::new(5);
        state.toggle(2);
        state.toggle(2);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn at_most_one_open_for_every_index() {
        let mut state = AccordionState::new(5);
        for i in 0..5 {
            state.toggle(i);
            let open: Vec<usize> = (0..5).filter(|&j| state.is_open(j)).collect();
            assert_eq!(open, vec![i]);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut state = AccordionState::new(2);
        state.toggle(0);
        state.toggle(7);
        state.open(9);
        assert_eq!(state.open_index(), Some(0));
    }

    #[test]
    fn open_does_not_collapse() {
        let state = Rc::new(AccordionState::new(3));
        let state = state.reduce(AccordionAction::Open(1));
        let state = state.reduce(AccordionAction::Open(1));
        assert_eq!(state.open_index(), Some(1));
        let state = state.reduce(AccordionAction::Toggle(1));
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn hash_parsing() {
        assert_eq!(item_id(4), "item-4");
        assert_eq!(index_from_hash("#item-3"), Some(3));
        assert_eq!(index_from_hash("item-0"), Some(0));
        assert_eq!(index_from_hash("#faq"), None);
        assert_eq!(index_from_hash("#item-x"), None);
        assert_eq!(index_from_hash(""), None);
    }
}
