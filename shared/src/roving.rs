// Roving tab index navigation
// Only one item of a group is tabbable; arrow keys move that focus.
// Items are treated as a single flat list regardless of visual columns.

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavigationKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavigationKey::Next),
            "ArrowLeft" | "ArrowUp" => Some(NavigationKey::Previous),
            "Home" => Some(NavigationKey::First),
            "End" => Some(NavigationKey::Last),
            _ => None,
        }
    }
}

/// Index that should receive focus after `key`, limited to `rendered`.
///
/// Returns `None` when focus stays where it is (edge of the range, or an
/// empty range). A `current` outside `rendered` snaps to the nearest edge.
pub fn next_focus(current: usize, key: NavigationKey, rendered: Range<usize>) -> Option<usize> {
    if rendered.is_empty() {
        return None;
    }
    let last = rendered.end - 1;
    let current_clamped = current.clamp(rendered.start, last);

    let target = match key {
        NavigationKey::Next if current < rendered.start => rendered.start,
        NavigationKey::Next => (current_clamped + 1).min(last),
        NavigationKey::Previous if current > last => last,
        NavigationKey::Previous => current_clamped.saturating_sub(1).max(rendered.start),
        NavigationKey::First => rendered.start,
        NavigationKey::Last => last,
    };

    (target != current).then_some(target)
}

/// Item that owns the tab stop: the focused one, or the nearest rendered item
/// once it has been scrolled out of `rendered`.
pub fn effective_focus(focused: usize, rendered: Range<usize>) -> Option<usize> {
    if rendered.is_empty() {
        return None;
    }
    Some(focused.clamp(rendered.start, rendered.end - 1))
}

/// `tabindex` attribute value for item `index`.
pub fn tab_index(index: usize, focused: usize) -> &'static str {
    if index == focused { "0" } else { "-1" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavigationKey::from_key_name("ArrowDown"), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key_name("ArrowRight"), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key_name("ArrowUp"), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key_name("ArrowLeft"), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key_name("Home"), Some(NavigationKey::First));
        assert_eq!(NavigationKey::from_key_name("End"), Some(NavigationKey::Last));
        assert_eq!(NavigationKey::from_key_name("Enter"), None);
    }

    #[test]
    fn test_moves_through_flat_list_across_rows() {
        // Item 1 is the second slot of row 0; Next goes to row 1 slot 0.
        assert_eq!(next_focus(1, NavigationKey::Next, 0..6), Some(2));
        assert_eq!(next_focus(2, NavigationKey::Previous, 0..6), Some(1));
    }

    #[test]
    fn test_no_wrap_at_edges() {
        assert_eq!(next_focus(5, NavigationKey::Next, 0..6), None);
        assert_eq!(next_focus(0, NavigationKey::Previous, 0..6), None);
    }

    #[test]
    fn test_home_end_within_rendered_range() {
        assert_eq!(next_focus(12, NavigationKey::First, 10..20), Some(10));
        assert_eq!(next_focus(12, NavigationKey::Last, 10..20), Some(19));
        assert_eq!(next_focus(19, NavigationKey::Last, 10..20), None);
    }

    #[test]
    fn test_focus_outside_range_snaps_in() {
        assert_eq!(next_focus(0, NavigationKey::Next, 10..20), Some(10));
        assert_eq!(next_focus(40, NavigationKey::Previous, 10..20), Some(19));
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(next_focus(0, NavigationKey::Next, 0..0), None);
    }

    #[test]
    fn test_tab_stop_follows_rendered_range() {
        assert_eq!(effective_focus(4, 0..10), Some(4));
        assert_eq!(effective_focus(4, 10..20), Some(10));
        assert_eq!(effective_focus(25, 10..20), Some(19));
        assert_eq!(effective_focus(0, 0..0), None);
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(tab_index(3, 3), "0");
        assert_eq!(tab_index(2, 3), "-1");
    }
}
