pub mod analysis;
pub mod error;

// Re-export commonly used types
pub use analysis::{
    bbox::CanonicalBox,
    normalize::{RawBox, normalize},
    overlap::{Axis, overlaps},
};
pub use error::{BoxError, Result};
