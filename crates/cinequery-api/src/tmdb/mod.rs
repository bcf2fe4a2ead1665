//! TMDB API module.
//!
//! Resolves logical TMDB operations into request URLs and issues them
//! against the TMDB API v3.

mod api;
mod client;
mod endpoint;
mod error;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
pub use endpoint::{EndpointResolver, ResolverConfig};
pub use error::ValidationError;
pub use params::{
    AccountListRequest, ActorMoviesRequest, CategoryFilter, DEFAULT_PAGE, MovieListRequest,
    RecommendationRequest, TmdbId,
};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    TmdbCastMember, TmdbCredits, TmdbCrewMember, TmdbErrorResponse, TmdbGenre, TmdbGenreList,
    TmdbMovieDetails, TmdbMovieList, TmdbMovieSummary, TmdbPerson, TmdbSpokenLanguage, TmdbVideo,
    TmdbVideoList,
};
