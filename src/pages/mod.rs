//! Page components for Movieshelf.

mod home;
mod movie_cast;
mod movie_details;
mod movie_reviews;
mod movies;
mod not_found;

pub use home::Home;
pub use movie_cast::MovieCast;
pub use movie_details::{MovieDetailsHome, MovieDetailsPage};
pub use movie_reviews::MovieReviews;
pub use movies::Movies;
pub use not_found::NotFound;
