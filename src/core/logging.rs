//! Logging utilities with request-scoped context.
//!
//! Provides a task-local request ID so that all logs emitted while handling a
//! single request can be correlated without threading the ID through every
//! function call.

tokio::task_local! {
    /// Task-local storage for the current request ID.
    pub static REQUEST_ID: String;
}

/// Get the current request ID from context, if set.
///
/// Returns an empty string if no request ID is set.
pub fn get_request_id() -> String {
    REQUEST_ID.try_with(|id| id.clone()).unwrap_or_default()
}

/// Generate a new unique request ID using UUID v4.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[test]
    fn test_request_id_outside_scope_is_empty() {
        assert_eq!(get_request_id(), "");
    }

    #[tokio::test]
    async fn test_request_id_inside_scope() {
        let id = generate_request_id();
        REQUEST_ID
            .scope(id.clone(), async {
                assert_eq!(get_request_id(), id);
            })
            .await;
    }
}
