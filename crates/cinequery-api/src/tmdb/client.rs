//! `TmdbClient` - issues resolved TMDB endpoints over HTTP.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbApi;
use super::endpoint::{EndpointResolver, ResolverConfig, path_of};
use super::params::{
    AccountListRequest, ActorMoviesRequest, MovieListRequest, RecommendationRequest, TmdbId,
};
use super::types::{TmdbErrorResponse, TmdbGenreList, TmdbMovieDetails, TmdbMovieList, TmdbPerson};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// TMDB API client.
///
/// Thin collaborator around [`EndpointResolver`]: every request URL comes
/// from the resolver, this type only executes and decodes it.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL that resolved endpoints are joined onto.
    base_url: Url,
    /// Endpoint resolver holding the API key.
    resolver: EndpointResolver,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the v3 API key (required, may be empty).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            resolver: EndpointResolver::new(ResolverConfig::new(api_key)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Returns the resolver used to build request URLs.
    #[must_use]
    pub const fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Sends a GET request for a resolved endpoint and decodes the JSON body.
    ///
    /// Only the endpoint path is logged; the query string carries the API key.
    #[instrument(skip_all, fields(endpoint = path_of(endpoint)))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let path = path_of(endpoint);
        let url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .with_context(|| format!("failed to join URL path: {path}"))?;

        tracing::debug!("TMDB API request");

        let result = self.http_client.get(url).send().await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            tracing::warn!(status = %status, "TMDB API returned an error status");
            if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                bail!(
                    "TMDB API error (HTTP {}): code={}, message={}",
                    status,
                    error_response.status_code,
                    error_response.status_message,
                );
            }
            bail!("TMDB API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let parsed = raw_result.with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(parsed)
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn get_movies(&self, request: &MovieListRequest) -> Result<TmdbMovieList> {
        let endpoint = self.resolver.movies(request);
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_genres(&self) -> Result<TmdbGenreList> {
        let endpoint = self.resolver.genres();
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_movie(&self, id: Option<&TmdbId>) -> Result<TmdbMovieDetails> {
        let endpoint = self.resolver.movie(id)?;
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<TmdbMovieList> {
        let endpoint = self.resolver.recommendations(request)?;
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_actor_detail(&self, id: Option<&TmdbId>) -> Result<TmdbPerson> {
        let endpoint = self.resolver.actor_detail(id)?;
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_movies_by_actor_id(&self, request: &ActorMoviesRequest) -> Result<TmdbMovieList> {
        let endpoint = self.resolver.movies_by_actor(request)?;
        self.get_json(&endpoint).await
    }

    #[instrument(skip_all)]
    async fn get_list(&self, request: &AccountListRequest) -> Result<TmdbMovieList> {
        let endpoint = self.resolver.list(request)?;
        self.get_json(&endpoint).await
    }
}
