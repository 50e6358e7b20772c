//! Selection values for single and multiple mode.
//!
//! A `Selection` is owned by the host. The widget never mutates one in place:
//! every rule here returns the *next* selection, or `None` when the effective
//! selection would not change.

use std::slice;

use crate::option::SelectOption;

/// The current value of a selector. The variant is the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// At most one option.
    Single(Option<SelectOption>),
    /// Any subset of options, in the order they were picked.
    Multiple(Vec<SelectOption>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl Selection {
    /// Empty single-mode selection.
    pub fn single() -> Self {
        Self::Single(None)
    }

    /// Empty multiple-mode selection.
    pub fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// True when no option is selected.
    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Selected options in display order.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Single(Some(option)) => slice::from_ref(option),
            Self::Single(None) => &[],
            Self::Multiple(options) => options,
        }
    }

    /// Whether `option` is part of this selection.
    pub fn contains(&self, option: &SelectOption) -> bool {
        self.options().contains(option)
    }

    /// Apply a pick of `option`.
    ///
    /// Multiple mode toggles membership (append at the end, or remove it
    /// leaving the rest in order). Single mode replaces the value; picking
    /// the current value is a no-op.
    pub fn select(&self, option: &SelectOption) -> Option<Selection> {
        match self {
            Self::Multiple(options) => {
                let next = if options.contains(option) {
                    options.iter().filter(|o| *o != option).cloned().collect()
                } else {
                    let mut next = options.clone();
                    next.push(option.clone());
                    next
                };
                Some(Self::Multiple(next))
            }
            Self::Single(current) => {
                if current.as_ref() == Some(option) {
                    None
                } else {
                    Some(Self::Single(Some(option.clone())))
                }
            }
        }
    }

    /// Remove `option` if selected.
    pub fn remove(&self, option: &SelectOption) -> Option<Selection> {
        if !self.contains(option) {
            return None;
        }
        match self {
            Self::Multiple(options) => Some(Self::Multiple(
                options.iter().filter(|o| *o != option).cloned().collect(),
            )),
            Self::Single(_) => Some(Self::Single(None)),
        }
    }

    /// Clear everything, keeping the mode.
    pub fn clear(&self) -> Option<Selection> {
        if self.is_empty() {
            return None;
        }
        Some(match self {
            Self::Multiple(_) => Self::Multiple(Vec::new()),
            Self::Single(_) => Self::Single(None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> [SelectOption; 3] {
        [
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
            SelectOption::new("C", 3),
        ]
    }

    #[test]
    fn test_multiple_append_preserves_order() {
        let [a, b, c] = abc();
        let sel = Selection::Multiple(vec![c.clone(), a.clone()]);
        let next = sel.select(&b).unwrap();
        assert_eq!(next, Selection::Multiple(vec![c, a, b]));
    }

    #[test]
    fn test_multiple_toggle_removes_only_that_option() {
        let [a, b, c] = abc();
        let sel = Selection::Multiple(vec![a.clone(), b.clone(), c.clone()]);
        let next = sel.select(&b).unwrap();
        assert_eq!(next, Selection::Multiple(vec![a, c]));
    }

    #[test]
    fn test_single_reselect_is_noop() {
        let [a, b, _] = abc();
        let sel = Selection::Single(Some(a.clone()));
        assert_eq!(sel.select(&a), None);
        assert_eq!(sel.select(&b), Some(Selection::Single(Some(b))));
    }

    #[test]
    fn test_clear_keeps_mode() {
        let [a, b, _] = abc();
        assert_eq!(
            Selection::Multiple(vec![a.clone(), b]).clear(),
            Some(Selection::Multiple(vec![]))
        );
        assert_eq!(
            Selection::Single(Some(a)).clear(),
            Some(Selection::Single(None))
        );
        assert_eq!(Selection::multiple().clear(), None);
        assert_eq!(Selection::single().clear(), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let [a, b, _] = abc();
        let sel = Selection::Multiple(vec![a.clone()]);
        assert_eq!(sel.remove(&b), None);
        assert_eq!(sel.remove(&a), Some(Selection::Multiple(vec![])));
    }

    #[test]
    fn test_contains_and_empty() {
        let [a, b, _] = abc();
        let sel = Selection::Single(Some(a.clone()));
        assert!(sel.contains(&a));
        assert!(!sel.contains(&b));
        assert!(!sel.is_empty());
        assert!(Selection::multiple().is_empty());
        assert!(Selection::multiple().is_multiple());
    }
}
