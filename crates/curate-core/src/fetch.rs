/// Lifecycle of one screen-owned remote fetch.
///
/// Every screen that talks to the service holds exactly one of these per
/// fetch; the `Loading` state doubles as the single-flight guard — a
/// second identical submission is refused until the first resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Enter `Loading` unless a request is already in flight.
    /// Returns false (and changes nothing) when one is.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::Loading;
        true
    }

    pub fn resolve(&mut self, value: T) {
        *self = Self::Loaded(value);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_from_idle_enters_loading() {
        let mut state: FetchState<Vec<u32>> = FetchState::Idle;
        assert!(state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn begin_while_loading_is_refused() {
        let mut state: FetchState<Vec<u32>> = FetchState::Loading;
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn begin_after_error_allows_resubmission() {
        let mut state: FetchState<Vec<u32>> = FetchState::Error("boom".into());
        assert!(state.begin());
    }

    #[test]
    fn resolve_and_fail_transitions() {
        let mut state: FetchState<u32> = FetchState::Loading;
        state.resolve(7);
        assert_eq!(state.loaded(), Some(&7));

        let mut state: FetchState<u32> = FetchState::Loading;
        state.fail("no route to host");
        assert_eq!(state.error(), Some("no route to host"));
        assert!(state.loaded().is_none());
    }
}
