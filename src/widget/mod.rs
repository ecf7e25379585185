//! Display widget: renders a view count with an explicit three-state
//! fetch model, driven by a pure reducer.

pub mod mvi;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use reducer::{CounterIntent, CounterReducer};
pub use runtime::WatchOptions;
pub use state::CountState;
pub use view::{format_count, ViewCounter};
