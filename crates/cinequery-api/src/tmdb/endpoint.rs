//! `EndpointResolver` - maps TMDB operations to relative request URLs.
//!
//! Every resolved URL starts with `/` and is relative to the API root
//! (`https://api.themoviedb.org/3/`). Caller-supplied text is
//! percent-encoded, so identical requests always yield byte-identical URLs.

use std::borrow::Cow;

use super::error::ValidationError;
use super::params::{
    AccountListRequest, ActorMoviesRequest, CategoryFilter, MovieListRequest,
    RecommendationRequest, TmdbId, present,
};

/// Sub-resources embedded into the movie detail response.
const MOVIE_APPEND_TO_RESPONSE: &str = "videos,credits";

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ResolverConfig {
    /// TMDB v3 API key. Opaque; passed through unvalidated.
    pub api_key: String,
}

impl ResolverConfig {
    /// Creates a configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

/// Resolves TMDB operations into relative URLs.
///
/// Pure and stateless: the only input besides the request is the
/// configuration fixed at construction.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct EndpointResolver {
    config: ResolverConfig,
}

impl EndpointResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the resolver configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a movie list.
    ///
    /// Checked in order, first match wins:
    /// 1. non-empty search query: `/search/movie`
    /// 2. [`CategoryFilter::ByName`]: `/movie/{name}`
    /// 3. [`CategoryFilter::ByGenreId`]: `/discover/movie?with_genres=`
    /// 4. otherwise: `/movie/popular`
    ///
    /// An empty category name, a category name with a `.` or `..` segment,
    /// or genre ID `0` counts as no filter.
    #[must_use]
    pub fn movies(&self, request: &MovieListRequest) -> String {
        let page = request.page.to_string();

        if let Some(query) = request.search_query.as_deref().filter(|q| !q.is_empty()) {
            return self.render(
                "/search/movie",
                &[("query", encode(query)), ("page", Cow::Owned(page))],
                &[],
            );
        }

        match &request.filter {
            CategoryFilter::ByName(name) if !name.is_empty() => {
                if let Ok(name) = encode_path(name) {
                    return self.render(
                        &format!("/movie/{name}"),
                        &[("page", Cow::Owned(page))],
                        &[],
                    );
                }
            }
            CategoryFilter::ByGenreId(genre_id) if *genre_id != 0 => {
                return self.render(
                    "/discover/movie",
                    &[
                        ("with_genres", Cow::Owned(genre_id.to_string())),
                        ("page", Cow::Owned(page)),
                    ],
                    &[],
                );
            }
            _ => {}
        }

        self.render("/movie/popular", &[("page", Cow::Owned(page))], &[])
    }

    /// Resolves the movie genre list.
    #[must_use]
    pub fn genres(&self) -> String {
        self.render("/genre/movie/list", &[], &[])
    }

    /// Resolves movie details with embedded videos and credits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMovieId`] if `id` is absent or blank,
    /// or a `.`/`..` segment.
    pub fn movie(&self, id: Option<&TmdbId>) -> Result<String, ValidationError> {
        let id = require(id, ValidationError::MissingMovieId)?;
        Ok(self.render(
            &format!("/movie/{}", encode_id(id)),
            &[],
            &[(
                "append_to_response",
                Cow::Borrowed(MOVIE_APPEND_TO_RESPONSE),
            )],
        ))
    }

    /// Resolves a movie sub-list such as `recommendations` or `similar`.
    ///
    /// The list segment is passed through as given.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingMovieId`] if the movie ID is absent, blank
    ///   or a dot segment.
    /// - [`ValidationError::DotPathSegment`] if the list contains a `.` or `..` segment.
    pub fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<String, ValidationError> {
        let movie_id = require(request.movie_id.as_ref(), ValidationError::MissingMovieId)?;
        let list = encode_path(&request.list)?;
        Ok(self.render(
            &format!("/movie/{}/{list}", encode_id(movie_id)),
            &[],
            &[],
        ))
    }

    /// Resolves person details.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingActorId`] if `id` is absent or blank,
    /// or a `.`/`..` segment.
    pub fn actor_detail(&self, id: Option<&TmdbId>) -> Result<String, ValidationError> {
        let id = require(id, ValidationError::MissingActorId)?;
        Ok(self.render(&format!("/person/{}", encode_id(id)), &[], &[]))
    }

    /// Resolves movies featuring the given person.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCastId`] if the person ID is absent or blank,
    /// or a `.`/`..` segment.
    pub fn movies_by_actor(&self, request: &ActorMoviesRequest) -> Result<String, ValidationError> {
        let id = require(request.id.as_ref(), ValidationError::MissingCastId)?;
        Ok(self.render(
            "/discover/movie",
            &[
                ("with_cast", encode_id(id)),
                ("page", Cow::Owned(request.page.to_string())),
            ],
            &[],
        ))
    }

    /// Resolves an account movie list.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingAccountOrSession`] if either the account ID
    ///   or the session ID is absent or blank, or the account ID is a dot segment.
    /// - [`ValidationError::DotPathSegment`] if the list name contains a `.`
    ///   or `..` segment.
    pub fn list(&self, request: &AccountListRequest) -> Result<String, ValidationError> {
        let account_id = usable(request.account_id.as_ref());
        let session_id = request.session_id.as_deref().filter(|s| !s.is_empty());
        let (Some(account_id), Some(session_id)) = (account_id, session_id) else {
            tracing::debug!("account list request without account or session");
            return Err(ValidationError::MissingAccountOrSession);
        };

        let list_name = encode_path(&request.list_name)?;
        Ok(self.render(
            &format!("/account/{}/{list_name}", encode_id(account_id)),
            &[],
            &[
                ("session_id", encode(session_id)),
                ("page", Cow::Owned(request.page.to_string())),
            ],
        ))
    }

    /// Joins `path` and query parameters, with `api_key` placed between
    /// `before` and `after`.
    fn render(
        &self,
        path: &str,
        before: &[(&str, Cow<'_, str>)],
        after: &[(&str, Cow<'_, str>)],
    ) -> String {
        let api_key = encode(&self.config.api_key);
        let mut params: Vec<(&str, &str)> = before.iter().map(|(k, v)| (*k, &**v)).collect();
        params.push(("api_key", &*api_key));
        params.extend(after.iter().map(|(k, v)| (*k, &**v)));

        let mut url = String::from(path);
        for (i, (key, value)) in params.into_iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Returns the identifier when it is non-blank and not a dot segment.
fn usable(id: Option<&TmdbId>) -> Option<&TmdbId> {
    present(id).filter(|id| match id {
        TmdbId::Numeric(_) => true,
        TmdbId::Text(text) => !is_dot_segment(text),
    })
}

/// Returns the usable identifier or `err`.
fn require(id: Option<&TmdbId>, err: ValidationError) -> Result<&TmdbId, ValidationError> {
    usable(id).ok_or_else(|| {
        tracing::debug!(error = %err, "endpoint validation failed");
        err
    })
}

/// Percent-encodes a single URL component.
fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Percent-encodes an identifier as a single path segment.
fn encode_id(id: &TmdbId) -> Cow<'_, str> {
    match id {
        TmdbId::Numeric(n) => Cow::Owned(n.to_string()),
        TmdbId::Text(s) => encode(s),
    }
}

/// Returns `true` for `.` and `..`, including their percent-encoded forms.
///
/// URL joining resolves these against the base path, so they must never
/// reach a resolved URL.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));
    matches!(&*decoded, "." | "..")
}

/// Percent-encodes each `/`-separated segment, keeping the separators.
///
/// # Errors
///
/// Returns [`ValidationError::DotPathSegment`] if any segment is `.` or `..`.
fn encode_path(path: &str) -> Result<String, ValidationError> {
    if path.split('/').any(is_dot_segment) {
        tracing::debug!("endpoint path contains a dot segment");
        return Err(ValidationError::DotPathSegment);
    }
    Ok(path.split('/').map(encode).collect::<Vec<_>>().join("/"))
}

/// Strips the query string, leaving only the path of a resolved URL.
pub(crate) fn path_of(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
