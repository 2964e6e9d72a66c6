pub mod dict;
pub mod error;
pub mod hash;
pub mod iter;
pub mod stats;

/// Growth factor applied by an explicit resize.
pub(crate) const DICT_RESIZE_RATIO: usize = 2;
/// Chain lengths at or beyond this fall into the last histogram slot.
pub(crate) const DICT_STATS_VECTLEN: usize = 50;
