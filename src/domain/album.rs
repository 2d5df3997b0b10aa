/// Represent an album in the collection
///
/// Title and artist keep the casing they were added with.
/// The record can only be changed through [`crate::storage::collection::Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    title: String,
    artist: String,
    played: bool,
}

impl Album {
    pub(crate) fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            played: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    pub(crate) fn set_played(&mut self) {
        self.played = true;
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn is_by(&self, artist: &str) -> bool {
        self.artist.to_lowercase() == artist.to_lowercase()
    }
}
