use color_eyre::eyre::Result;

use crate::entities::{Album, MusicalInstrument, Musician, MusicianInstrument};

/// Port trait wrapping the catalogue store capabilities used by the analytics
/// engine.
///
/// Production implementations adapt an actual storage backend and live outside
/// this crate; tests substitute a mock. Each method is a bulk read of every
/// stored instance of one entity kind, with no ordering guarantee and no
/// partial-failure mode: an error here aborts the query that issued it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load_all_musicians(&self) -> Result<Vec<Musician>>;
    async fn load_all_albums(&self) -> Result<Vec<Album>>;
    async fn load_all_instruments(&self) -> Result<Vec<MusicalInstrument>>;
    async fn load_all_musician_instruments(&self) -> Result<Vec<MusicianInstrument>>;
}
