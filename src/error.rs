use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a collection from text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("element {position} is empty")]
    EmptyElement { position: usize },

    #[error("element {position} is not a valid integer: `{text}`")]
    InvalidNumber {
        position: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}
