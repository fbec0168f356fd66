//! Error management.

use crate::types::VId;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, Err>;

#[derive(Debug, Display)]
pub enum Err {
    #[display(fmt = "unexpected end of input")]
    UnexpectedEof,
    #[display(fmt = "invalid token '{}'", _0)]
    BadToken(String),
    #[display(fmt = "edge endpoint {} outside 1..={}", vertex, order)]
    EdgeOutOfRange { vertex: VId, order: usize },
    Io(std::io::Error),
}

impl std::error::Error for Err {}

impl From<std::io::Error> for Err {
    fn from(err: std::io::Error) -> Self {
        Err::Io(err)
    }
}
