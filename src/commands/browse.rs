//! Browse command - interactive search-and-rate TUI

use std::sync::Arc;

use crate::{
    CinemateError,
    api::MovieApi,
    config::CinemateConfig,
    detail::{TerminalTitle, TitleScope},
    session::Session,
    store::RatedStore,
    ui,
};

type Result<T> = std::result::Result<T, CinemateError>;

/// Execute the browse command
///
/// # Errors
/// Returns an error if the terminal cannot be driven.
pub async fn execute<A: MovieApi + ?Sized + 'static>(
    api: Arc<A>,
    config: &CinemateConfig,
    store: RatedStore,
    query: Option<String>,
    quiet: bool,
) -> Result<()> {
    let title = TitleScope::new(TerminalTitle, config.default_title.clone());
    let mut session = Session::new(api, config.search_options(), store, title);

    ui::run(&mut session, query).await?;

    if !quiet {
        let summary = session.summary();
        println!(
            "{} movie(s) watched, mean rating {:.2}",
            summary.count, summary.mean_user_rating
        );
    }
    Ok(())
}
