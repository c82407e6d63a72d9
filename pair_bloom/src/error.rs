use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("filter needs at least one bit / 过滤器至少需要一位")]
  ZeroBits,
}

pub type Result<T> = std::result::Result<T, Error>;
