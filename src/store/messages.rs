//! User-facing error texts. Raw error detail is logged, never shown.

pub const NO_MOVIES_FOUND: &str = "No movies found";
pub const SEARCH_FAILED: &str =
    "Failed to fetch movies. Please check your connection and try again.";

pub const NOTHING_TO_LOAD: &str = "No more results to load";
pub const NO_MORE_MOVIES: &str = "No more movies found";
pub const LOAD_MORE_FAILED: &str = "Failed to load more movies. Please try again.";

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const DETAILS_FAILED: &str = "Failed to fetch movie details.";
