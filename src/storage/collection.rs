use log::{info, warn};

use crate::{
    domain::album::Album,
    storage::error::{Action, CollectionError, Field},
};

/// Listing keyword that disables the artist filter of [`Collection::list_all`]
pub const ALL_ARTISTS: &str = "all";

/// Main structure that holds the albums of one session
///
/// Albums are kept in insertion order and are unique by case-insensitive title.
#[derive(Debug, Default)]
pub struct Collection {
    albums: Vec<Album>,
}

/// Album as stored, returned by [`Collection::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub title: String,
    pub artist: String,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Appends a new unplayed album
    pub fn add(&mut self, title: &str, artist: &str) -> Result<Added, CollectionError> {
        if title.is_empty() {
            warn!("Rejected album without title");
            return Err(CollectionError::InvalidInput(Field::Title));
        }
        if artist.is_empty() {
            warn!("Rejected album \"{title}\" without artist");
            return Err(CollectionError::InvalidInput(Field::Artist));
        }
        if self.find_by_title(title).is_some() {
            warn!("Rejected duplicate album \"{title}\"");
            return Err(CollectionError::DuplicateAlbum {
                title: title.to_string(),
            });
        }

        self.albums.push(Album::new(title, artist));
        info!("Added \"{title}\" by {artist}, {} albums in collection", self.len());

        Ok(Added {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }

    pub fn remove(&mut self, title: &str) -> Result<bool, CollectionError> {
        let index = self.position(title).ok_or_else(|| CollectionError::NotFound {
            action: Action::Remove,
            title: title.to_string(),
        })?;

        let removed = self.albums.remove(index);
        info!("Removed \"{}\" by {}", removed.title(), removed.artist());
        Ok(true)
    }

    /// Marks the album as played; playing it again changes nothing
    pub fn play(&mut self, title: &str) -> Result<(), CollectionError> {
        let index = self.position(title).ok_or_else(|| CollectionError::NotFound {
            action: Action::Play,
            title: title.to_string(),
        })?;

        let album = &mut self.albums[index];
        album.set_played();
        info!("Played \"{}\"", album.title());
        Ok(())
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.has_title(title))
    }

    /// Lists albums, optionally restricted to one artist
    ///
    /// A filter equal to [`ALL_ARTISTS`] (any case) lists every album.
    pub fn list_all(&self, artist: Option<&str>) -> Vec<&Album> {
        match artist {
            Some(artist) if !artist.eq_ignore_ascii_case(ALL_ARTISTS) => self
                .albums
                .iter()
                .filter(|album| album.is_by(artist))
                .collect(),
            _ => self.albums.iter().collect(),
        }
    }

    pub fn list_unplayed(&self, artist: Option<&str>) -> Vec<&Album> {
        self.albums
            .iter()
            .filter(|album| !album.is_played())
            .filter(|album| artist.is_none_or(|artist| album.is_by(artist)))
            .collect()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.albums.iter().position(|album| album.has_title(title))
    }
}
