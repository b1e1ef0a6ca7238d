//! Verse and word statistics over a directory of `Canto_<n>.txt` files.

pub mod cache;
pub mod canto;
pub mod error;
pub mod logging;
pub mod repository;

pub use cache::WordCounts;
pub use canto::{CantoNumber, canto_number_from_filename};
pub use error::{CantoError, Result};
pub use repository::{CantoRepository, LongestCanto, ReadOptions};
