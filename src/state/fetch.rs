//! Remote Data Lifecycle
//!
//! Tri-state wrapper for data loaded from the backend. Each page section
//! holds its own `Fetch` signal, so one failed endpoint never blanks out a
//! neighboring section that loaded fine.

/// Lifecycle of one remote fetch
#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    /// Request in flight (also the initial state)
    Loading,
    /// Response arrived and parsed
    Ready(T),
    /// Request or parse failed, with the message to show
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Fetch<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        assert!(Fetch::<Vec<String>>::default().is_loading());
    }

    #[test]
    fn test_ok_result_becomes_ready() {
        let fetch = Fetch::from_result(Ok(3u32));
        assert_eq!(fetch, Fetch::Ready(3));
    }

    #[test]
    fn test_err_result_becomes_failed() {
        let fetch: Fetch<u32> = Fetch::from_result(Err("Network error: timeout".to_string()));
        assert_eq!(fetch, Fetch::Failed("Network error: timeout".to_string()));
    }

    #[test]
    fn test_failures_stay_local_to_their_source() {
        // Two sections of the same page, loaded independently
        let analytics: Fetch<u32> = Fetch::from_result(Err("Request failed (HTTP 500)".to_string()));
        let alerts = Fetch::from_result(Ok(vec!["Sanitation".to_string()]));

        assert!(matches!(analytics, Fetch::Failed(_)));
        assert_eq!(alerts, Fetch::Ready(vec!["Sanitation".to_string()]));
    }
}
