//! TMDB request parameter types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Default page number for paginated endpoints.
pub const DEFAULT_PAGE: u32 = 1;

/// TMDB resource identifier.
///
/// Movies, people and accounts are addressed by numeric IDs, but callers
/// sometimes only hold the textual form (route parameters, config values).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbId {
    /// Numeric identifier.
    Numeric(u64),
    /// Textual identifier, used verbatim.
    Text(String),
}

impl TmdbId {
    /// Returns `true` for identifiers that carry no value (`0` or `""`).
    ///
    /// Blank identifiers are treated exactly like absent ones.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for TmdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TmdbId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for TmdbId {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for TmdbId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parses canonical decimal strings as [`TmdbId::Numeric`], anything else
/// (including zero-padded numbers) as [`TmdbId::Text`].
impl FromStr for TmdbId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => Ok(Self::Numeric(n)),
            _ => Ok(Self::Text(String::from(s))),
        }
    }
}

/// Returns the identifier when it is present and not blank.
pub(crate) fn present(id: Option<&TmdbId>) -> Option<&TmdbId> {
    id.filter(|id| !id.is_blank())
}

/// Movie list selector for [`MovieListRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Named category list (`popular`, `top_rated`, `upcoming`, ...).
    ByName(String),
    /// Discovery filtered by genre ID.
    ByGenreId(u64),
    /// No filter; falls back to the popular list.
    #[default]
    None,
}

/// Request parameters for the movie list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListRequest {
    /// Category or genre selector.
    pub filter: CategoryFilter,
    /// Page number (default: 1).
    pub page: u32,
    /// Free-text search. Takes priority over `filter` when non-empty.
    pub search_query: Option<String>,
}

impl Default for MovieListRequest {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::None,
            page: DEFAULT_PAGE,
            search_query: None,
        }
    }
}

impl MovieListRequest {
    /// Creates a request for the first page of popular movies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a named category list.
    #[must_use]
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.filter = CategoryFilter::ByName(name.into());
        self
    }

    /// Selects discovery by genre ID.
    #[must_use]
    pub fn genre(mut self, genre_id: u64) -> Self {
        self.filter = CategoryFilter::ByGenreId(genre_id);
        self
    }

    /// Sets the search query.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Request parameters for movie recommendations / similar movies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    /// Source movie ID (required).
    pub movie_id: Option<TmdbId>,
    /// Sub-resource path segment, e.g. `recommendations` or `similar`.
    pub list: String,
}

impl RecommendationRequest {
    /// Creates a request for the given movie and sub-resource.
    #[must_use]
    pub fn new(movie_id: impl Into<TmdbId>, list: impl Into<String>) -> Self {
        Self {
            movie_id: Some(movie_id.into()),
            list: list.into(),
        }
    }
}

/// Request parameters for an actor's filmography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorMoviesRequest {
    /// Person ID (required).
    pub id: Option<TmdbId>,
    /// Page number (default: 1).
    pub page: u32,
}

impl ActorMoviesRequest {
    /// Creates a request for the first page of the actor's movies.
    #[must_use]
    pub fn new(id: impl Into<TmdbId>) -> Self {
        Self {
            id: Some(id.into()),
            page: DEFAULT_PAGE,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Request parameters for an account movie list (watchlist, favorites, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountListRequest {
    /// List path, e.g. `watchlist/movies` or `favorite/movies`.
    pub list_name: String,
    /// Account ID (required).
    pub account_id: Option<TmdbId>,
    /// Session ID (required).
    pub session_id: Option<String>,
    /// Page number (default: 1).
    pub page: u32,
}

impl AccountListRequest {
    /// Creates a request for the first page of an account list.
    #[must_use]
    pub fn new(
        list_name: impl Into<String>,
        account_id: impl Into<TmdbId>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            list_name: list_name.into(),
            account_id: Some(account_id.into()),
            session_id: Some(session_id.into()),
            page: DEFAULT_PAGE,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
