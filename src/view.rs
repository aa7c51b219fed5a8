//! Pure description of the results area.
//!
//! [`render`] turns a sequence of records into a [`ResultsView`]; the
//! ratatui adapter in `ui::cards` draws it. Nothing here touches the terminal.
use crate::api::UserRecord;

/// Shown instead of cards when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No users match the filter.";

const LINK_SCHEME: &str = "https://";

/// Everything a single user card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCard {
    pub id: u64,
    pub monogram: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub website_url: String,
}

impl UserCard {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            monogram: monogram(&user.name),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            city: user.city().to_string(),
            website_url: website_url(&user.website),
        }
    }
}

/// Content of the results area after a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView {
    NoResults,
    Cards(Vec<UserCard>),
}

impl ResultsView {
    pub fn cards(&self) -> &[UserCard] {
        match self {
            Self::NoResults => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoResults => Some(NO_RESULTS_MESSAGE),
            Self::Cards(_) => None,
        }
    }
}

/// Build the results view for `records`, one card per record in input order.
pub fn render(records: &[UserRecord]) -> ResultsView {
    if records.is_empty() {
        return ResultsView::NoResults;
    }
    ResultsView::Cards(records.iter().map(UserCard::from_record).collect())
}

/// First character of every whitespace-separated token, case untouched.
pub fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Link target for a stored website value.
///
/// Values that already carry a scheme are kept; bare hosts get `https://`.
pub fn website_url(website: &str) -> String {
    let site = website.trim();
    if site.is_empty() {
        return String::new();
    }
    if has_scheme(site) {
        site.to_string()
    } else {
        format!("{LINK_SCHEME}{site}")
    }
}

fn has_scheme(s: &str) -> bool {
    match s.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
