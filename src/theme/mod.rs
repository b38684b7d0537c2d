//! Theme for Movieshelf.

mod styles;

pub use styles::GLOBAL_STYLES;
