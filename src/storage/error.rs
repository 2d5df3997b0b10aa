use std::fmt::Display;

use thiserror::Error;

/// Album field rejected by [`CollectionError::InvalidInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Artist,
}

/// Mutation that referenced a missing album
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Remove,
    Play,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Artist => write!(f, "artist"),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Remove => write!(f, "remove"),
            Action::Play => write!(f, "play"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Invalid {0}")]
    InvalidInput(Field),

    #[error("Could not add album; \"{title}\" already exists in this collection.")]
    DuplicateAlbum { title: String },

    #[error("Could not {action} album; \"{title}\" does not exist in this collection.")]
    NotFound { action: Action, title: String },
}
