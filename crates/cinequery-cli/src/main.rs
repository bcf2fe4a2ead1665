//! cinequery - browse TMDB movie metadata from the command line.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{API_KEY_ENV, AppConfig, resolve_config_path};
use cinequery_api::tmdb::{
    AccountListRequest, ActorMoviesRequest, CategoryFilter, DEFAULT_PAGE, EndpointResolver,
    LocalTmdbApi, MovieListRequest, RecommendationRequest, TmdbClient, TmdbId, TmdbMovieList,
    ValidationError,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print the resolved request URL instead of sending it.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List movies (search, category, genre or popular).
    Movies(MoviesArgs),
    /// List movie genres.
    Genres,
    /// Show movie details with videos and credits.
    Movie(MovieArgs),
    /// List recommended or similar movies.
    Recommendations(RecommendationsArgs),
    /// Show actor details.
    Actor(ActorArgs),
    /// List movies featuring an actor.
    ActorMovies(ActorMoviesArgs),
    /// List an account movie list (watchlist, favorites).
    List(ListArgs),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesArgs {
    /// Search query. Takes priority over --category and --genre-id.
    #[arg(long)]
    search: Option<String>,
    /// Category list name (e.g. "top_rated", "upcoming").
    #[arg(long, conflicts_with = "genre_id")]
    category: Option<String>,
    /// Genre ID for discovery (see `genres`).
    #[arg(long)]
    genre_id: Option<u64>,
    /// Result page.
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,
}

impl MoviesArgs {
    /// Builds the movie list request.
    fn to_request(&self) -> MovieListRequest {
        let filter = match (&self.category, self.genre_id) {
            (Some(name), _) => CategoryFilter::ByName(name.clone()),
            (None, Some(genre_id)) => CategoryFilter::ByGenreId(genre_id),
            (None, None) => CategoryFilter::None,
        };
        MovieListRequest {
            filter,
            page: self.page,
            search_query: self.search.clone(),
        }
    }
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID.
    #[arg(long)]
    id: Option<TmdbId>,
}

/// Arguments for the `recommendations` subcommand.
#[derive(clap::Args)]
struct RecommendationsArgs {
    /// TMDB movie ID.
    #[arg(long)]
    movie_id: Option<TmdbId>,
    /// Sub-list: "recommendations" or "similar".
    #[arg(long, default_value = "recommendations")]
    list: String,
}

/// Arguments for the `actor` subcommand.
#[derive(clap::Args)]
struct ActorArgs {
    /// TMDB person ID.
    #[arg(long)]
    id: Option<TmdbId>,
}

/// Arguments for the `actor-movies` subcommand.
#[derive(clap::Args)]
struct ActorMoviesArgs {
    /// TMDB person ID.
    #[arg(long)]
    id: Option<TmdbId>,
    /// Result page.
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// List path under the account (e.g. "watchlist/movies", "favorite/movies").
    #[arg(long, default_value = "watchlist/movies")]
    name: String,
    /// TMDB account ID.
    #[arg(long)]
    account_id: Option<TmdbId>,
    /// TMDB session ID.
    #[arg(long)]
    session_id: Option<String>,
    /// Result page.
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the config file location and settings.
    Show,
    /// Store the TMDB API key in the config file.
    SetApiKey(SetApiKeyArgs),
}

/// Arguments for the `config set-api-key` subcommand.
#[derive(clap::Args)]
struct SetApiKeyArgs {
    /// TMDB v3 API key.
    #[arg(long, required = true)]
    key: String,
}

/// Shared state for TMDB subcommands.
struct Session {
    /// API client (also provides the resolver for `--dry-run`).
    client: TmdbClient,
    /// Log resolved URLs instead of sending requests.
    dry_run: bool,
    /// Mask the `api_key` value in dry-run output (set while spans are exported).
    mask_api_key: bool,
}

impl Session {
    /// In dry-run mode, resolves the request URL and logs it.
    ///
    /// Returns `true` if the caller should stop before sending the request.
    /// Outside dry-run mode `resolve` is not called; the client resolves the
    /// URL itself.
    ///
    /// # Errors
    ///
    /// Returns the resolver's validation error in dry-run mode.
    fn stop_for_dry_run<F>(&self, resolve: F) -> Result<bool, ValidationError>
    where
        F: FnOnce(&EndpointResolver) -> Result<String, ValidationError>,
    {
        if !self.dry_run {
            return Ok(false);
        }

        let url = resolve(self.client.resolver())?;
        if self.mask_api_key {
            tracing::info!("{}", mask_api_key(&url));
        } else {
            tracing::info!("{url}");
        }
        Ok(true)
    }
}

/// Replaces the `api_key` query value of a resolved URL with `***`.
fn mask_api_key(url: &str) -> String {
    let Some((path, query)) = url.split_once('?') else {
        return String::from(url);
    };
    let query: Vec<&str> = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("api_key=") {
                "api_key=***"
            } else {
                pair
            }
        })
        .collect();
    format!("{path}?{}", query.join("&"))
}

/// Builds a `TmdbClient` from `TMDB_API_KEY` or the config file.
///
/// A missing key is not fatal: TMDB reports it at request time.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the configured base URL
/// is invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(dir: Option<&PathBuf>) -> Result<TmdbClient> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let api_key = config
        .resolve_api_key(std::env::var(API_KEY_ENV).ok())
        .unwrap_or_else(|| {
            tracing::warn!(
                "No TMDB API key configured. Set {API_KEY_ENV} or run `cinequery config set-api-key`."
            );
            String::new()
        });

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(ref base_url) = config.tmdb.base_url {
        let url = Url::parse(base_url)
            .with_context(|| format!("invalid [tmdb].base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }

    builder.build().context("failed to build TMDB client")
}

/// Logs a movie list as a table.
fn print_movie_list(list: &TmdbMovieList) {
    tracing::info!("ID\tRelease\t\tRating\tTitle");
    for movie in &list.results {
        tracing::info!(
            "{}\t{}\t{:.1}\t{}",
            movie.id,
            movie
                .release_date
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or("-"),
            movie.vote_average,
            movie.title,
        );
    }
    tracing::info!(
        "Page {}/{} ({} results)",
        list.page,
        list.total_pages,
        list.total_results
    );
}

/// Runs the `movies` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_movies(args: &MoviesArgs, session: &Session) -> Result<()> {
    let request = args.to_request();
    if session.stop_for_dry_run(|resolver| Ok(resolver.movies(&request)))? {
        return Ok(());
    }

    let list = session
        .client
        .get_movies(&request)
        .await
        .context("TMDB movie list request failed")?;
    print_movie_list(&list);

    Ok(())
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_genres(session: &Session) -> Result<()> {
    if session.stop_for_dry_run(|resolver| Ok(resolver.genres()))? {
        return Ok(());
    }

    let list = session
        .client
        .get_genres()
        .await
        .context("TMDB genre list request failed")?;

    tracing::info!("ID\tName");
    for genre in &list.genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }
    tracing::info!("Total: {} genres", list.genres.len());

    Ok(())
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the movie ID is missing or the API request fails.
#[instrument(skip_all)]
async fn run_movie(args: &MovieArgs, session: &Session) -> Result<()> {
    if session.stop_for_dry_run(|resolver| resolver.movie(args.id.as_ref()))? {
        return Ok(());
    }

    let details = session
        .client
        .get_movie(args.id.as_ref())
        .await
        .context("TMDB movie details request failed")?;

    tracing::info!("ID: {}", details.id);
    tracing::info!("Title: {}", details.title);
    tracing::info!("Original Title: {}", details.original_title);
    tracing::info!(
        "Release Date: {}",
        details.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        details
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r}min"))
    );
    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres: {}", genres.join(", "));
    tracing::info!(
        "Rating: {:.1} ({} votes)",
        details.vote_average,
        details.vote_count
    );
    if let Some(trailer) = details.trailer() {
        tracing::info!("Trailer: https://www.youtube.com/watch?v={}", trailer.key);
    }
    if let Some(ref credits) = details.credits {
        tracing::info!("---");
        for member in credits.cast.iter().take(10) {
            tracing::info!(
                "  {} as {}",
                member.name,
                member.character.as_deref().unwrap_or("-")
            );
        }
        for member in credits
            .crew
            .iter()
            .filter(|m| m.job.as_deref() == Some("Director"))
        {
            tracing::info!("  Directed by {}", member.name);
        }
    }

    Ok(())
}

/// Runs the `recommendations` subcommand.
///
/// # Errors
///
/// Returns an error if the movie ID is missing or the API request fails.
#[instrument(skip_all)]
async fn run_recommendations(args: &RecommendationsArgs, session: &Session) -> Result<()> {
    let request = RecommendationRequest {
        movie_id: args.movie_id.clone(),
        list: args.list.clone(),
    };
    if session.stop_for_dry_run(|resolver| resolver.recommendations(&request))? {
        return Ok(());
    }

    let list = session
        .client
        .get_recommendations(&request)
        .await
        .context("TMDB recommendations request failed")?;
    print_movie_list(&list);

    Ok(())
}

/// Runs the `actor` subcommand.
///
/// # Errors
///
/// Returns an error if the actor ID is missing or the API request fails.
#[instrument(skip_all)]
async fn run_actor(args: &ActorArgs, session: &Session) -> Result<()> {
    if session.stop_for_dry_run(|resolver| resolver.actor_detail(args.id.as_ref()))? {
        return Ok(());
    }

    let person = session
        .client
        .get_actor_detail(args.id.as_ref())
        .await
        .context("TMDB person request failed")?;

    tracing::info!("ID: {}", person.id);
    tracing::info!("Name: {}", person.name);
    tracing::info!(
        "Known For: {}",
        person.known_for_department.as_deref().unwrap_or("-")
    );
    tracing::info!("Birthday: {}", person.birthday.as_deref().unwrap_or("-"));
    tracing::info!(
        "Place of Birth: {}",
        person.place_of_birth.as_deref().unwrap_or("-")
    );
    if let Some(ref deathday) = person.deathday {
        tracing::info!("Died: {deathday}");
    }
    if let Some(ref imdb_id) = person.imdb_id {
        tracing::info!("IMDb: https://www.imdb.com/name/{imdb_id}");
    }
    tracing::info!("---");
    tracing::info!(
        "{}",
        person
            .biography
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("(no biography)")
    );

    Ok(())
}

/// Runs the `actor-movies` subcommand.
///
/// # Errors
///
/// Returns an error if the actor ID is missing or the API request fails.
#[instrument(skip_all)]
async fn run_actor_movies(args: &ActorMoviesArgs, session: &Session) -> Result<()> {
    let request = ActorMoviesRequest {
        id: args.id.clone(),
        page: args.page,
    };
    if session.stop_for_dry_run(|resolver| resolver.movies_by_actor(&request))? {
        return Ok(());
    }

    let list = session
        .client
        .get_movies_by_actor_id(&request)
        .await
        .context("TMDB actor movies request failed")?;
    print_movie_list(&list);

    Ok(())
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns an error if the account or session ID is missing or the API request fails.
#[instrument(skip_all)]
async fn run_list(args: &ListArgs, session: &Session) -> Result<()> {
    let request = AccountListRequest {
        list_name: args.name.clone(),
        account_id: args.account_id.clone(),
        session_id: args.session_id.clone(),
        page: args.page,
    };
    if session.stop_for_dry_run(|resolver| resolver.list(&request))? {
        return Ok(());
    }

    let list = session
        .client
        .get_list(&request)
        .await
        .context("TMDB account list request failed")?;
    print_movie_list(&list);

    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded.
#[instrument(skip_all)]
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    tracing::info!("Config file: {}", config_path.display());
    tracing::info!(
        "API key: {}",
        if config.tmdb.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            "(set)"
        } else {
            "(not set)"
        }
    );
    tracing::info!(
        "Base URL: {}",
        config
            .tmdb
            .base_url
            .as_deref()
            .unwrap_or(cinequery_api::tmdb::DEFAULT_BASE_URL)
    );
    if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.is_empty()) {
        tracing::info!("{API_KEY_ENV} is set and overrides the config file");
    }

    Ok(())
}

/// Runs the `config set-api-key` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or saved.
#[instrument(skip_all)]
fn run_config_set_api_key(args: &SetApiKeyArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;

    config.tmdb.api_key = Some(args.key.clone());
    config.save(&config_path).context("failed to save config")?;
    tracing::info!("Saved API key to {}", config_path.display());

    Ok(())
}

/// Initializes the fmt subscriber.
///
/// Returns `true` when spans are exported over OTLP, which never happens
/// without the `otel` feature.
#[cfg(not(feature = "otel"))]
fn init_tracing() -> bool {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
    false
}

/// Initializes the fmt subscriber, plus an OTLP span exporter when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
///
/// Returns `true` when spans are exported over OTLP.
#[cfg(feature = "otel")]
fn init_tracing() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .and_then(|_| {
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_http()
                .build()
                .ok()?;

            let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                .with_simple_exporter(exporter)
                .build();

            let tracer = opentelemetry::trace::TracerProvider::tracer(
                &tracer_provider,
                env!("CARGO_PKG_NAME"),
            );
            opentelemetry::global::set_tracer_provider(tracer_provider);

            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        });
    let exporting = otel_layer.is_some();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();
    exporting
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let exporting_spans = init_tracing();

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();

    if let Commands::Config(cmd) = &cli.command {
        return match &cmd.command {
            ConfigSubcommands::Show => run_config_show(dir),
            ConfigSubcommands::SetApiKey(args) => run_config_set_api_key(args, dir),
        };
    }

    let session = Session {
        client: build_tmdb_client(dir)?,
        dry_run: cli.dry_run,
        mask_api_key: exporting_spans,
    };

    match &cli.command {
        Commands::Movies(args) => run_movies(args, &session).await,
        Commands::Genres => run_genres(&session).await,
        Commands::Movie(args) => run_movie(args, &session).await,
        Commands::Recommendations(args) => run_recommendations(args, &session).await,
        Commands::Actor(args) => run_actor(args, &session).await,
        Commands::ActorMovies(args) => run_actor_movies(args, &session).await,
        Commands::List(args) => run_list(args, &session).await,
        // Handled before the client is built.
        Commands::Config(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_movies_args_category_filter() {
        // Arrange
        let cli = Cli::parse_from(["cinequery", "movies", "--category", "top_rated"]);

        // Act
        let Commands::Movies(args) = cli.command else {
            panic!("expected movies subcommand");
        };
        let request = args.to_request();

        // Assert
        assert_eq!(
            request.filter,
            CategoryFilter::ByName(String::from("top_rated"))
        );
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_movies_args_genre_and_search() {
        // Arrange
        let cli = Cli::parse_from([
            "cinequery",
            "movies",
            "--genre-id",
            "28",
            "--search",
            "heat",
            "--page",
            "2",
        ]);

        // Act
        let Commands::Movies(args) = cli.command else {
            panic!("expected movies subcommand");
        };
        let request = args.to_request();

        // Assert
        assert_eq!(request.filter, CategoryFilter::ByGenreId(28));
        assert_eq!(request.search_query.as_deref(), Some("heat"));
        assert_eq!(request.page, 2);
    }

    #[test]
    fn test_movies_args_category_conflicts_with_genre() {
        // Arrange & Act
        let result = Cli::try_parse_from([
            "cinequery",
            "movies",
            "--category",
            "popular",
            "--genre-id",
            "28",
        ]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_movie_id_parses_numeric() {
        // Arrange & Act
        let cli = Cli::parse_from(["cinequery", "movie", "--id", "550"]);

        // Assert
        let Commands::Movie(args) = cli.command else {
            panic!("expected movie subcommand");
        };
        assert_eq!(args.id, Some(TmdbId::Numeric(550)));
    }

    /// Builds a session without touching the network.
    fn session(dry_run: bool, mask_api_key: bool) -> Session {
        let Ok(client) = TmdbClient::builder()
            .api_key("secret")
            .user_agent("test/0.0.0")
            .build()
        else {
            panic!("client should build");
        };
        Session {
            client,
            dry_run,
            mask_api_key,
        }
    }

    #[test]
    fn test_dry_run_resolves_and_stops() {
        // Arrange
        let session = session(true, false);

        // Act
        let stop = session.stop_for_dry_run(|resolver| Ok(resolver.genres()));

        // Assert
        assert_eq!(stop, Ok(true));
    }

    #[test]
    fn test_dry_run_surfaces_validation_error() {
        // Arrange
        let session = session(true, false);

        // Act
        let stop = session.stop_for_dry_run(|resolver| resolver.movie(None));

        // Assert
        assert_eq!(stop, Err(ValidationError::MissingMovieId));
    }

    #[test]
    fn test_without_dry_run_nothing_is_resolved() {
        // Arrange
        let session = session(false, false);
        let mut resolved = false;

        // Act
        let stop = session.stop_for_dry_run(|resolver| {
            resolved = true;
            resolver.movie(None)
        });

        // Assert
        assert_eq!(stop, Ok(false));
        assert!(!resolved);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(
            mask_api_key("/movie/42?api_key=secret&append_to_response=videos,credits"),
            "/movie/42?api_key=***&append_to_response=videos,credits"
        );
        assert_eq!(
            mask_api_key("/movie/popular?page=2&api_key=secret"),
            "/movie/popular?page=2&api_key=***"
        );
        assert_eq!(mask_api_key("/genre/movie/list"), "/genre/movie/list");
    }

    #[test]
    fn test_global_dry_run_after_subcommand() {
        // Arrange & Act
        let cli = Cli::parse_from(["cinequery", "genres", "--dry-run"]);

        // Assert
        assert!(cli.dry_run);
    }
}
