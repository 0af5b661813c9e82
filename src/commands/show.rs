//! Show command - full record for one identifier

use crate::{CinemateError, api::MovieApi, output, store::RatedStore};

type Result<T> = std::result::Result<T, CinemateError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the request fails or the identifier is unknown.
pub async fn execute<A: MovieApi + ?Sized>(
    api: &A,
    store: &RatedStore,
    id: &str,
    quiet: bool,
) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CinemateError::InvalidInput("Identifier must not be empty".into()));
    }

    let record = api.details(id).await?;
    if quiet {
        println!("{}\t{}\t{}\t{}", record.id, record.title, record.year, record.imdb_rating);
    } else {
        println!("{}", output::detail_record(&record, store.user_rating(id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, MockCall, TestStore, record};

    #[tokio::test]
    async fn test_show_fetches_by_id() {
        let api = MockApi::new();
        api.reply_details("tt1375666", Ok(record("tt1375666", "Inception")));
        let test_store = TestStore::new();

        execute(api.as_ref(), test_store.store(), "tt1375666", true)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![MockCall::Details("tt1375666".into())]);
    }

    #[tokio::test]
    async fn test_show_unknown_id() {
        let api = MockApi::new();
        let test_store = TestStore::new();

        let result = execute(api.as_ref(), test_store.store(), "tt0000000", true).await;
        assert_eq!(result.unwrap_err().to_string(), "Movie not found");
    }

    #[tokio::test]
    async fn test_show_rejects_blank_id() {
        let api = MockApi::new();
        let test_store = TestStore::new();

        let result = execute(api.as_ref(), test_store.store(), "  ", true).await;
        assert!(matches!(result, Err(CinemateError::InvalidInput(_))));
        assert!(api.calls().is_empty());
    }
}
