//! Popover visibility.

/// Whether the cascading panel is shown.
///
/// The active level is kept by [`PathState`](crate::PathState) and survives
/// closing, so reopening returns to the last focused tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverState {
    #[default]
    Closed,
    Open,
}

impl PopoverState {
    pub fn is_open(self) -> bool {
        self == PopoverState::Open
    }

    /// Open the popover. Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open();
        *self = PopoverState::Open;
        changed
    }

    /// Close the popover. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open();
        *self = PopoverState::Closed;
        changed
    }

    /// Toggle between open and closed (trigger click).
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}
