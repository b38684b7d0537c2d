//! UI Components for Movieshelf.

mod details_nav;
mod loader;
mod movie_info;
mod movie_list;
mod toaster;

pub use details_nav::DetailsNav;
pub use loader::Loader;
pub use movie_info::MovieInfo;
pub use movie_list::MovieList;
pub use toaster::Toaster;
