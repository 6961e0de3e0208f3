// Selection State Machine
// Tracks which tab is open and the slide direction of the latest transition.
// The machine owns its state exclusively; it never touches geometry or the
// terminal, which keeps it testable without a layout pass.

/// Stable identifier for a tab, assigned from registry order (index + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u8);

impl TabId {
    /// Id for the tab at `index` in registry order
    pub fn from_index(index: usize) -> Self {
        Self((index + 1) as u8)
    }

    /// Raw numeric id (1-based)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Registry index for this id
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// Horizontal orientation of the overlay's entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// New id is greater than the old id; content enters from the right
    Left,
    /// New id is less than the old id; content enters from the left
    Right,
}

/// Current selection and the direction of the most recent transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Open tab, or `None` when the overlay is closed
    pub selected: Option<TabId>,
    /// Set only when transitioning between two open tabs
    pub direction: Option<SlideDirection>,
}

/// State machine driving the tab overlay.
///
/// Transitions (all through the single mutator [`select`](Self::select)):
/// - `Closed -> Open(id)` clears the direction (fade-only entrance)
/// - `Open(a) -> Open(b)` derives the direction from id order
/// - `Open(a) -> Open(a)` is a no-op
/// - `select(None)` closes from any state
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    state: SelectionState,
    ids: Vec<TabId>,
}

impl SelectionMachine {
    /// Create a machine over the given universe of selectable ids
    pub fn new(ids: Vec<TabId>) -> Self {
        Self {
            state: SelectionState::default(),
            ids,
        }
    }

    /// Single entry point for hover and click alike.
    /// Returns whether the state changed.
    pub fn select(&mut self, target: Option<TabId>) -> bool {
        // An id outside the registry has nothing to open; treat it as a close
        let target = target.filter(|id| self.ids.contains(id));

        match (self.state.selected, target) {
            (_, Some(new)) if self.state.selected == Some(new) => false,
            (Some(old), Some(new)) => {
                self.state.direction = Some(if new < old {
                    SlideDirection::Right
                } else {
                    SlideDirection::Left
                });
                self.state.selected = Some(new);
                true
            }
            (None, Some(new)) => {
                self.state.direction = None;
                self.state.selected = Some(new);
                true
            }
            (Some(_), None) => {
                self.state = SelectionState::default();
                true
            }
            (None, None) => false,
        }
    }

    /// Snapshot of the current selection
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Currently open tab, if any
    pub fn selected(&self) -> Option<TabId> {
        self.state.selected
    }

    /// Direction of the latest open-to-open transition
    pub fn direction(&self) -> Option<SlideDirection> {
        self.state.direction
    }

    /// Whether the overlay is open
    pub fn is_open(&self) -> bool {
        self.state.selected.is_some()
    }

    /// The universe of selectable ids, in registry order
    pub fn ids(&self) -> &[TabId] {
        &self.ids
    }
}
