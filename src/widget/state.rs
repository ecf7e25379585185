use crate::widget::mvi::UiState;

/// Fetch state of the display widget.
///
/// Three explicit states instead of an implicit "maybe loaded" value:
/// the initial render may happen in a context where fetching was
/// suppressed, so the widget must be able to say "pending" until a mount
/// triggers the real fetch. `Failed` renders the same as a zero count;
/// the counter is not worth an error state in front of a reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountState {
    #[default]
    Pending,
    Ready {
        count: u64,
    },
    Failed,
}

impl CountState {
    pub fn count(&self) -> Option<u64> {
        match self {
            CountState::Ready { count } => Some(*count),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CountState::Pending)
    }
}

impl UiState for CountState {}
