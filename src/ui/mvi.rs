//! Unidirectional state primitives shared by every page.
//!
//! ```text
//! key / API result ──→ Intent ──→ Reducer ──→ State ──→ draw
//! ```
//!
//! Side effects (file validation, HTTP calls) stay in `App`; reducers only
//! see their outcome as intents.

/// Something that happened: a key press, a tick, a finished request.
pub trait Intent: Send + 'static {}

/// Everything a page needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
