use tracing::debug;

use crate::api::UserRecord;
use crate::app::AppState;
use crate::view;

/// Records whose name, email or city contains `query`, ignoring case.
///
/// The query is lower-cased but not trimmed. An empty query returns every
/// record. Order is preserved.
pub fn filter_users(records: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&q)
                || u.email.to_lowercase().contains(&q)
                || u.city().to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// Filter the current user set by the raw input text and re-render the results.
///
/// Does not touch the visible state.
pub fn apply_filter(app: &mut AppState) {
    let matches = filter_users(app.store.records(), &app.filter_input);
    debug!(
        query = %app.filter_input,
        matched = matches.len(),
        total = app.store.len(),
        "filter applied"
    );
    app.show_results(view::render(&matches));
}
