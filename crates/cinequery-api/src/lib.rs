//! API client library for cinequery.
//!
//! Provides the TMDB endpoint resolver and a thin HTTP client that issues
//! the resolved requests.

/// TMDB API endpoint resolver and client.
pub mod tmdb;
