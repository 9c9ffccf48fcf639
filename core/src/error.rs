use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board has an empty or misplaced cell")]
    InvalidBoard,
    #[error("Cascade belongs to a game that was reset or advanced")]
    StaleCascade,
}

pub type Result<T> = core::result::Result<T, GameError>;
