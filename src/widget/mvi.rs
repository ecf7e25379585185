//! Model-View-Intent primitives for the widget layer.
//!
//! Unidirectional data flow: intents (mount, fetch results) go through a
//! pure reducer that produces the next state; the view renders state and
//! nothing else. Keeping the transition function pure makes the widget's
//! state machine testable without a terminal or a network.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloned to create new states,
/// comparable to detect changes, self-contained for rendering.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events that drive
/// state transitions.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
