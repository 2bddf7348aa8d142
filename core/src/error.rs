use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = std::result::Result<T, GridError>;
