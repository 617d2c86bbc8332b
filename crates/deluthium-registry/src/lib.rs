//! Venue pair metadata cache.

pub mod pair_cache;

pub use pair_cache::PairCache;
