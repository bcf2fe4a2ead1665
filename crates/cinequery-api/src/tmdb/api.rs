//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::params::{
    AccountListRequest, ActorMoviesRequest, MovieListRequest, RecommendationRequest, TmdbId,
};
use super::types::{TmdbGenreList, TmdbMovieDetails, TmdbMovieList, TmdbPerson};

/// TMDB API trait.
///
/// One method per resolver operation. Validation failures are returned
/// before any request is sent and downcast to
/// [`ValidationError`](super::ValidationError).
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches a movie list (search, category, genre discovery or popular).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_movies(&self, request: &MovieListRequest) -> Result<TmdbMovieList>;

    /// Fetches the movie genre list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_genres(&self) -> Result<TmdbGenreList>;

    /// Fetches movie details with embedded videos and credits.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is missing, or the HTTP request or JSON parsing fails.
    async fn get_movie(&self, id: Option<&TmdbId>) -> Result<TmdbMovieDetails>;

    /// Fetches recommended or similar movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the movie ID is missing, or the HTTP request or JSON parsing fails.
    async fn get_recommendations(&self, request: &RecommendationRequest)
    -> Result<TmdbMovieList>;

    /// Fetches person details.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is missing, or the HTTP request or JSON parsing fails.
    async fn get_actor_detail(&self, id: Option<&TmdbId>) -> Result<TmdbPerson>;

    /// Fetches movies featuring a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the person ID is missing, or the HTTP request or JSON parsing fails.
    async fn get_movies_by_actor_id(&self, request: &ActorMoviesRequest) -> Result<TmdbMovieList>;

    /// Fetches an account movie list.
    ///
    /// # Errors
    ///
    /// Returns an error if the account or session ID is missing, or the HTTP
    /// request or JSON parsing fails.
    async fn get_list(&self, request: &AccountListRequest) -> Result<TmdbMovieList>;
}
