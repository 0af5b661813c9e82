//! Search command - one-shot title search

use crate::{CinemateError, api::MovieApi, output, search::SearchOptions};

type Result<T> = std::result::Result<T, CinemateError>;

/// Execute the search command
///
/// Applies the same minimum query length as the interactive search.
///
/// # Errors
/// Returns an error if the query is too short or the request fails.
pub async fn execute<A: MovieApi + ?Sized>(
    api: &A,
    query: &str,
    options: &SearchOptions,
    quiet: bool,
) -> Result<()> {
    let query = query.trim();
    if query.chars().count() < options.min_query_len {
        return Err(CinemateError::InvalidInput(format!(
            "Query must be at least {} characters",
            options.min_query_len
        )));
    }

    let results = api.search(query).await?;
    tracing::debug!(query, count = results.len(), "Search completed");

    if !quiet {
        println!("Found {} movie(s) for '{query}':", results.len());
    }
    for hit in &results {
        println!("{}", output::search_hit(hit, quiet));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, MockCall, hit};

    #[tokio::test]
    async fn test_short_query_is_rejected_without_request() {
        let api = MockApi::new();
        let result = execute(api.as_ref(), " in ", &SearchOptions::default(), true).await;

        assert!(matches!(result, Err(CinemateError::InvalidInput(_))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed() {
        let api = MockApi::new();
        api.reply_search("heat", Ok(vec![hit("tt0113277", "Heat")]));

        execute(api.as_ref(), "  heat ", &SearchOptions::default(), true)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![MockCall::Search("heat".into())]);
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let api = MockApi::new();
        let result = execute(api.as_ref(), "zzzzzz", &SearchOptions::default(), true).await;

        match result {
            Err(CinemateError::FetchError(e)) => assert!(e.is_not_found()),
            other => panic!("Expected not found, got {other:?}"),
        }
    }
}
