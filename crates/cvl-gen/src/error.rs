use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("empty element count range: min {min} > max {max}")]
    EmptyCountRange { min: usize, max: usize },

    #[error("bound `{0}` must be nonzero")]
    ZeroBound(&'static str),
}

pub type Result<T> = std::result::Result<T, GenError>;
