use viewcount::widget::mvi::Reducer;
use viewcount::widget::{CountState, CounterIntent, CounterReducer};

#[test]
fn initial_state_is_pending() {
    assert!(CountState::default().is_pending());
    assert_eq!(CountState::default().count(), None);
}

#[test]
fn mount_resets_to_pending() {
    let state = CounterReducer::reduce(
        CountState::Ready { count: 42 },
        CounterIntent::Mounted,
    );
    assert!(state.is_pending());
}

#[test]
fn fetch_completion_yields_ready() {
    let state = CounterReducer::reduce(
        CountState::Pending,
        CounterIntent::FetchCompleted { count: 1234 },
    );
    assert_eq!(state, CountState::Ready { count: 1234 });
    assert_eq!(state.count(), Some(1234));
}

#[test]
fn fetch_failure_yields_failed() {
    let state = CounterReducer::reduce(CountState::Pending, CounterIntent::FetchFailed);
    assert_eq!(state, CountState::Failed);
    assert_eq!(state.count(), None);
}

#[test]
fn remount_after_failure_retries() {
    // A fresh mount is the widget's only retry trigger.
    let failed = CounterReducer::reduce(CountState::Pending, CounterIntent::FetchFailed);
    let remounted = CounterReducer::reduce(failed, CounterIntent::Mounted);
    assert!(remounted.is_pending());

    let recovered = CounterReducer::reduce(remounted, CounterIntent::FetchCompleted { count: 3 });
    assert_eq!(recovered, CountState::Ready { count: 3 });
}
