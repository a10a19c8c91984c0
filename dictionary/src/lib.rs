//! Network/cache boundary for the solver's word lists: fetch a
//! frequency-ordered word file over HTTP, cache it on local disk, and
//! partition it into dictionary tiers. The only disk and network I/O in
//! the workspace outside of `pentacross-clues`, and it always completes
//! before `pentacross_core::solve` is invoked.

mod error;
mod source;
mod tiers;

pub use error::DictionaryError;
pub use source::{DictionarySource, RawWordFile};
pub use tiers::{DictionaryConfig, Tiers};
