//! Single-open, collapsible accordion state used by the FAQ sections

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn new(default_open: Option<usize>) -> Self {
        Self { open: default_open }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` and close whichever item was open. Toggling the open
    /// item collapses it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_item_open() {
        let state = AccordionState::new(Some(0));
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert_eq!(AccordionState::default().open_index(), None);
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let mut state = AccordionState::new(Some(0));
        state.toggle(3);
        assert_eq!(state.open_index(), Some(3));
        assert!(!state.is_open(0));
    }

    #[test]
    fn toggling_open_item_collapses_it() {
        let mut state = AccordionState::new(Some(2));
        state.toggle(2);
        assert_eq!(state.open_index(), None);
        state.toggle(2);
        assert_eq!(state.open_index(), Some(2));
    }
}
