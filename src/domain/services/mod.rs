//! Pure text processing applied around each completion call.

mod reply_extractor;
mod sanitizer;
mod validation;

pub use reply_extractor::*;
pub use sanitizer::*;
pub use validation::*;
