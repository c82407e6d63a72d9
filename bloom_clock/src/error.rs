use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("filter: {0}")]
  Filter(#[from] pair_bloom::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
