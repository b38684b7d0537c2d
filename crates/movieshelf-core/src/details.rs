//! Display model for the movie details view.
//!
//! Maps a [`MovieRecord`] onto the values the view shows, so that the desktop
//! renderer and the CLI print the same derived fields.

use crate::config::DEFAULT_IMAGE_BASE;
use crate::pricing::{displayed_price, Availability};
use crate::types::{Genre, MovieId, MovieRecord};

/// Everything the details view renders for one record
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub release_date: String,
    pub vote_average: String,
    pub vote_count: u64,
    pub genres: Vec<Genre>,
    pub price: u64,
    pub availability: Availability,
}

impl MovieDetails {
    pub fn from_record(record: &MovieRecord, image_base: &str) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            overview: record.overview.clone(),
            poster_url: poster_url(image_base, record.poster_path.as_deref()),
            release_date: record.release_date.clone(),
            vote_average: record.vote_average.to_string(),
            vote_count: record.vote_count,
            genres: record.genres.clone(),
            price: displayed_price(record.budget),
            availability: Availability::from_budget(record.budget),
        }
    }

    /// Same as [`from_record`](Self::from_record) with the default image CDN
    pub fn with_default_images(record: &MovieRecord) -> Self {
        Self::from_record(record, DEFAULT_IMAGE_BASE)
    }

    /// Label of the purchase button
    pub fn purchase_label(&self) -> String {
        format!("Purchase for ${}", self.price)
    }
}

/// Image URL for a poster path.
///
/// Plain concatenation: nothing checks that the path exists or is well formed,
/// and a missing path yields the bare base.
pub fn poster_url(image_base: &str, poster_path: Option<&str>) -> String {
    format!("{}{}", image_base, poster_path.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovieRecord {
        let mut record = MovieRecord::new(MovieId::new(603), "The Matrix")
            .with_budget(63_000_000)
            .with_genres(vec![Genre::new(28, "Action"), Genre::new(878, "Science Fiction")]);
        record.overview = "Set in the 22nd century...".to_string();
        record.poster_path = Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string());
        record.release_date = "1999-03-30".to_string();
        record.vote_average = 8.2;
        record.vote_count = 24000;
        record
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let details = MovieDetails::from_record(&record(), "https://img.test/");
        assert_eq!(details.title, "The Matrix");
        assert_eq!(details.overview, "Set in the 22nd century...");
        assert_eq!(details.release_date, "1999-03-30");
        assert_eq!(details.vote_average, "8.2");
        assert_eq!(details.vote_count, 24000);
    }

    #[test]
    fn test_derived_fields() {
        let details = MovieDetails::with_default_images(&record());
        assert_eq!(details.price, 63);
        assert_eq!(details.availability, Availability::Available);
        assert_eq!(details.purchase_label(), "Purchase for $63");
        assert_eq!(
            details.poster_url,
            "https://image.tmdb.org/t/p/w500//f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
        );
    }

    #[test]
    fn test_genre_order_preserved() {
        let details = MovieDetails::with_default_images(&record());
        let names: Vec<_> = details.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Action", "Science Fiction"]);
    }

    #[test]
    fn test_whole_vote_average_has_no_fraction() {
        let mut record = record();
        record.vote_average = 8.0;
        assert_eq!(MovieDetails::with_default_images(&record).vote_average, "8");
    }

    #[test]
    fn test_missing_poster_path() {
        assert_eq!(poster_url("https://img.test/", None), "https://img.test/");
    }
}
