//! On-disk chart storage.
//!
//! - `codec` - positional JSON layout plus zlib compression
//! - `save_charts` / `load_charts` - file gateway built on the codec

pub mod codec;
mod persistence;

pub use persistence::*;
