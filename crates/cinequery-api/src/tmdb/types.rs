//! TMDB API response types.

use serde::Deserialize;

// --- Movie lists ---

/// Paginated movie list.
///
/// Shared by `movie/{category}`, `search/movie`, `discover/movie`,
/// `movie/{id}/recommendations`, `movie/{id}/similar` and account lists.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieList {
    /// Current page number.
    pub page: u32,
    /// Movies on this page.
    pub results: Vec<TmdbMovieSummary>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// A single movie within a list.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD, may be empty).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

// --- Genres ---

/// Response from `genre/movie/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreList {
    /// All movie genres.
    pub genres: Vec<TmdbGenre>,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- Movie details ---

/// Response from `movie/{id}?append_to_response=videos,credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Release status (e.g., "Released").
    #[serde(default)]
    pub status: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<TmdbSpokenLanguage>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Embedded `videos` sub-resource.
    #[serde(default)]
    pub videos: Option<TmdbVideoList>,
    /// Embedded `credits` sub-resource.
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
}

impl TmdbMovieDetails {
    /// Returns the first YouTube trailer, if any.
    #[must_use]
    pub fn trailer(&self) -> Option<&TmdbVideo> {
        self.videos.as_ref().and_then(|videos| {
            videos
                .results
                .iter()
                .find(|v| v.site == "YouTube" && v.video_type == "Trailer")
        })
    }
}

/// Spoken language entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSpokenLanguage {
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// English name.
    #[serde(default)]
    pub english_name: Option<String>,
    /// Native name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Embedded video list.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideoList {
    /// Videos.
    pub results: Vec<TmdbVideo>,
}

/// A trailer, teaser or clip.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    /// Video ID.
    pub id: String,
    /// Key on the hosting site (e.g. YouTube video ID).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Hosting site (e.g. "YouTube").
    pub site: String,
    /// Video type (e.g. "Trailer", "Teaser").
    #[serde(rename = "type")]
    pub video_type: String,
    /// Official flag.
    #[serde(default)]
    pub official: bool,
}

/// Embedded credits.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    /// Cast members, in billing order.
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    /// Crew members.
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

/// Cast entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Crew entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Department (e.g. "Directing").
    #[serde(default)]
    pub department: Option<String>,
    /// Job (e.g. "Director").
    #[serde(default)]
    pub job: Option<String>,
}

// --- People ---

/// Response from `person/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPerson {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Biography.
    #[serde(default)]
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    #[serde(default)]
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD).
    #[serde(default)]
    pub deathday: Option<String>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Primary department (e.g. "Acting").
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
