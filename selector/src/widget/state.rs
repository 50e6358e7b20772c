//! Transient view state: open/closed and the highlighted row.

/// Ephemeral state owned by a selector.
///
/// `highlighted` is only meaningful while open and is kept inside
/// `[0, len)` for whatever option count the caller passes in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    open: bool,
    highlighted: usize,
}

impl ViewState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the list. Opening always starts at the first row.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the highlight by `delta`. Moves that would leave the list are
    /// dropped rather than clamped partially or wrapped.
    pub fn move_by(&mut self, delta: isize, len: usize) -> bool {
        let Some(next) = self.highlighted.checked_add_signed(delta) else {
            return false;
        };
        self.set(next, len)
    }

    /// Highlight row `index` if it exists.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index < len && index != self.highlighted {
            self.highlighted = index;
            true
        } else {
            false
        }
    }

    /// Pull the highlight back inside a list that shrank to `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
    }

    pub fn first(&mut self) -> bool {
        self.set(0, usize::MAX)
    }

    pub fn last(&mut self, len: usize) -> bool {
        match len.checked_sub(1) {
            Some(last) => self.set(last, len),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resets_highlight() {
        let mut state = ViewState::default();
        state.open();
        state.move_by(2, 3);
        assert_eq!(state.highlighted(), 2);
        state.close();
        state.open();
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_move_stays_in_bounds() {
        let mut state = ViewState::default();
        state.open();
        assert!(!state.move_by(-1, 3));
        assert_eq!(state.highlighted(), 0);
        for _ in 0..10 {
            state.move_by(1, 3);
        }
        assert_eq!(state.highlighted(), 2);
        assert!(!state.move_by(1, 0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ViewState::default();
        state.open();
        state.set(4, 5);
        state.clamp(2);
        assert_eq!(state.highlighted(), 1);
        state.clamp(0);
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_last_on_empty_is_noop() {
        let mut state = ViewState::default();
        state.open();
        assert!(!state.last(0));
        assert!(state.last(4));
        assert_eq!(state.highlighted(), 3);
        assert!(state.first());
        assert_eq!(state.highlighted(), 0);
    }
}
