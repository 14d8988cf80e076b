// Selection over a list that can be rebuilt underneath it.
// Wraps ratatui's ListState and clamps the index when the list changes length.

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub list_state: ListState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item, staying at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item, staying at the start.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Keep the selection valid after the list was rebuilt with `len` items.
    pub fn clamp(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut selection = Selection::new();
        selection.select_prev(3);
        assert_eq!(selection.selected(), Some(0));

        selection.select_next(3);
        selection.select_next(3);
        selection.select_next(3);
        assert_eq!(selection.selected(), Some(2));

        selection.select_next(0);
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn test_clamp_after_rebuild() {
        let mut selection = Selection::new();
        selection.clamp(4);
        assert_eq!(selection.selected(), Some(0));

        selection.list_state.select(Some(3));
        selection.clamp(2);
        assert_eq!(selection.selected(), Some(1));

        selection.clamp(0);
        assert_eq!(selection.selected(), None);
    }
}
