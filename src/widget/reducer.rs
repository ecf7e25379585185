use crate::widget::mvi::{Intent, Reducer};
use crate::widget::state::CountState;

/// Events driving the widget's fetch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// The widget became visible. Always triggers a fresh fetch, even
    /// when a count is already on screen: a mount is the only retry
    /// mechanism the widget has.
    Mounted,
    /// The fetch resolved with a count.
    FetchCompleted { count: u64 },
    /// The fetch did not resolve. Renders as the zero/placeholder state.
    FetchFailed,
}

impl Intent for CounterIntent {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CountState;
    type Intent = CounterIntent;

    fn reduce(_state: CountState, intent: CounterIntent) -> CountState {
        match intent {
            CounterIntent::Mounted => CountState::Pending,
            CounterIntent::FetchCompleted { count } => CountState::Ready { count },
            CounterIntent::FetchFailed => CountState::Failed,
        }
    }
}
