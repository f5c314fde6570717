//! Remote list loading state machine
//!
//! One fetch lifecycle: Idle -> Loading -> Success/Error. The state is a
//! closed sum type so every consumer matches exhaustively. Transitions are
//! plain value-in/value-out reducers; [`Loader`] is a thin container that
//! owns one state and applies them.

/// Failure reported by a fetch operation.
///
/// Carries an optional human-readable description. Everything that can go
/// wrong during a fetch (transport, status, deserialization) collapses into
/// this one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    description: Option<String>,
}

impl FetchError {
    pub fn new(description: impl Into<String>) -> Self {
        FetchError {
            description: Some(description.into()),
        }
    }

    /// A failure with no description at all.
    #[allow(dead_code)] // Exercised by tests and library consumers
    pub fn unknown() -> Self {
        FetchError { description: None }
    }

    /// The description, or the fixed fallback text when there is none.
    pub fn message(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| String::from("Unknown error occurred"))
    }
}

/// Lifecycle state of one asynchronous list fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No fetch has been initiated yet.
    Idle,
    /// A fetch is in flight; no payload.
    Loading,
    /// Fetch completed; payload is exactly what the server returned.
    Success(T),
    /// Fetch failed; human-readable message.
    Error(String),
}

// Manual impl: `Idle` needs no payload, so `T: Default` must not be required.
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Reducer for "start fetch": every state transitions to `Loading`.
    pub fn begin(self) -> FetchState<T> {
        FetchState::Loading
    }

    /// Reducer for fetch completion.
    pub fn resolve(self, outcome: Result<T, FetchError>) -> FetchState<T> {
        match outcome {
            Ok(data) => FetchState::Success(data),
            Err(e) => FetchState::Error(e.message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Container driving one fetch lifecycle.
///
/// Overlapping `start()` calls are deliberately not guarded by default:
/// whichever completion lands last wins, matching the observable behavior
/// of the screens this backs. Callers that want de-duplication opt in with
/// [`Loader::with_in_flight_guard`].
#[derive(Debug, Clone)]
pub struct Loader<T> {
    state: FetchState<T>,
    guard_in_flight: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Loader::new()
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Loader {
            state: FetchState::Idle,
            guard_in_flight: false,
        }
    }

    /// Suppress dispatch while a fetch is already in flight.
    #[allow(dead_code)] // Opt-in for hosts that want de-duplication
    pub fn with_in_flight_guard(mut self) -> Self {
        self.guard_in_flight = true;
        self
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Begin a fetch. Sets `Loading` synchronously and returns whether the
    /// caller should dispatch the fetch operation.
    ///
    /// With the guard off (default) this always returns true, re-entering
    /// `Loading` from any state. With the guard on, a call while already
    /// `Loading` is a no-op returning false.
    pub fn start(&mut self) -> bool {
        if self.guard_in_flight && self.state.is_loading() {
            return false;
        }
        self.state = std::mem::take(&mut self.state).begin();
        true
    }

    /// Apply a fetch completion. Applied unconditionally, in arrival order:
    /// the last completion to land is the one observed.
    pub fn finish(&mut self, outcome: Result<T, FetchError>) {
        self.state = std::mem::take(&mut self.state).resolve(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        user_id: i64,
        title: String,
        body: String,
    }

    #[test]
    fn test_fresh_loader_is_idle() {
        let loader: Loader<Vec<i64>> = Loader::new();
        assert_eq!(*loader.state(), FetchState::Idle);
    }

    #[test]
    fn test_start_sets_loading_synchronously() {
        let mut loader: Loader<Vec<i64>> = Loader::new();
        assert!(loader.start());
        assert_eq!(*loader.state(), FetchState::Loading);
    }

    #[test]
    fn test_success_preserves_order_and_content() {
        let mut loader: Loader<Vec<i64>> = Loader::new();
        loader.start();
        loader.finish(Ok(vec![3, 1, 2]));
        assert_eq!(*loader.state(), FetchState::Success(vec![3, 1, 2]));
    }

    #[test]
    fn test_success_with_record_payload() {
        let mut loader: Loader<Vec<Item>> = Loader::new();
        let item = Item {
            id: 1,
            user_id: 1,
            title: String::from("a"),
            body: String::from("b"),
        };
        loader.start();
        loader.finish(Ok(vec![item.clone()]));
        assert_eq!(*loader.state(), FetchState::Success(vec![item]));
        match loader.state() {
            FetchState::Success(items) => {
                assert_eq!(items[0].id, 1);
                assert_eq!(items[0].user_id, 1);
                assert_eq!(items[0].title, "a");
                assert_eq!(items[0].body, "b");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_error_carries_description() {
        let mut loader: Loader<Vec<i64>> = Loader::new();
        loader.start();
        loader.finish(Err(FetchError::new("timeout")));
        assert_eq!(*loader.state(), FetchState::Error(String::from("timeout")));
    }

    #[test]
    fn test_error_without_description_uses_fallback() {
        let mut loader: Loader<Vec<i64>> = Loader::new();
        loader.start();
        loader.finish(Err(FetchError::unknown()));
        assert_eq!(
            *loader.state(),
            FetchState::Error(String::from("Unknown error occurred"))
        );
    }

    #[test]
    fn test_restart_from_terminal_states() {
        let mut loader: Loader<Vec<i64>> = Loader::new();
        loader.start();
        loader.finish(Ok(vec![1]));
        assert!(loader.start());
        assert_eq!(*loader.state(), FetchState::Loading);

        loader.finish(Err(FetchError::new("down")));
        assert!(loader.start());
        assert_eq!(*loader.state(), FetchState::Loading);
    }

    #[test]
    fn test_overlapping_starts_last_completion_wins() {
        // Two starts, completions arriving out of call order: the second
        // completion to land is the one observed.
        let mut loader: Loader<Vec<i64>> = Loader::new();
        assert!(loader.start());
        assert!(loader.start());
        loader.finish(Ok(vec![1, 2, 3]));
        loader.finish(Err(FetchError::new("second landed last")));
        assert_eq!(
            *loader.state(),
            FetchState::Error(String::from("second landed last"))
        );
    }

    #[test]
    fn test_in_flight_guard_suppresses_dispatch() {
        let mut loader: Loader<Vec<i64>> = Loader::new().with_in_flight_guard();
        assert!(loader.start());
        assert!(!loader.start());
        loader.finish(Ok(vec![1]));
        // Terminal again, so the next start dispatches.
        assert!(loader.start());
    }

    #[test]
    fn test_fetch_error_message() {
        assert_eq!(FetchError::new("boom").message(), "boom");
        assert_eq!(FetchError::unknown().message(), "Unknown error occurred");
    }
}
