/// Load state for data fetched from the listing server
///
/// One enum instead of separate loading/error flags, so a view can only be
/// in one state at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Nothing requested yet
    Pending,

    /// Request in flight
    Loading,

    /// Request finished with data
    Loaded(T),

    /// Request failed with a message for the user
    Error(String),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Pending | DataState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Pending
    }
}

impl<T> From<Result<T, String>> for DataState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(e) => DataState::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_counts_as_loading() {
        let state: DataState<i32> = DataState::default();
        assert!(state.is_loading());
        assert!(DataState::<i32>::Loading.is_loading());
        assert!(!DataState::Loaded(1).is_loading());
    }

    #[test]
    fn test_from_result() {
        let state: DataState<i32> = Ok(42).into();
        assert_eq!(state.data(), Some(&42));
        assert_eq!(state.error(), None);

        let state: DataState<i32> = Err("HTTP error: 404".to_string()).into();
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("HTTP error: 404"));
    }
}
