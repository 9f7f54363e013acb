use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use super::album::Album;
use super::validation::{EntityError, is_valid_name};

/// An artist that has been featured on at least one record of the label.
///
/// Identity is the name alone: two `Musician` values with the same name are the
/// same musician, whatever else they carry. The album set is a back-reference;
/// an album may be referenced by many musicians and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Musician {
    name: String,
    albums: HashSet<Album>,
    musician_url: Option<Url>,
    wiki_url: Option<Url>,
    fan_site_url: Option<Url>,
    biography: Option<String>,
}

impl Musician {
    /// Creates a musician, deriving a Wikipedia URL from the name.
    pub fn new(name: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(EntityError::InvalidMusicianName);
        }
        let wiki_url = Url::parse(&format!(
            "https://en.wikipedia.org/wiki/{}",
            name.replace(' ', "_")
        ))
        .ok();
        Ok(Self {
            name,
            albums: HashSet::new(),
            musician_url: None,
            wiki_url,
            fan_site_url: None,
            biography: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EntityError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(EntityError::InvalidMusicianName);
        }
        self.name = name;
        Ok(())
    }

    /// Read-only view of the albums this musician appears on.
    pub fn albums(&self) -> &HashSet<Album> {
        &self.albums
    }

    pub fn set_albums(&mut self, albums: HashSet<Album>) {
        self.albums = albums;
    }

    pub fn musician_url(&self) -> Option<&Url> {
        self.musician_url.as_ref()
    }

    pub fn set_musician_url(&mut self, url: Url) {
        self.musician_url = Some(url);
    }

    pub fn wiki_url(&self) -> Option<&Url> {
        self.wiki_url.as_ref()
    }

    pub fn set_wiki_url(&mut self, url: Url) {
        self.wiki_url = Some(url);
    }

    pub fn fan_site_url(&self) -> Option<&Url> {
        self.fan_site_url.as_ref()
    }

    pub fn set_fan_site_url(&mut self, url: Url) {
        self.fan_site_url = Some(url);
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.as_deref()
    }

    pub fn set_biography(&mut self, biography: impl Into<String>) {
        self.biography = Some(biography.into());
    }
}

impl PartialEq for Musician {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Musician {}

impl Hash for Musician {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
