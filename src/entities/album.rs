use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use super::musician::Musician;
use super::musician_instrument::MusicianInstrument;
use super::validation::{
    EntityError, is_valid_name, is_valid_record_number, is_valid_release_year,
};

/// An album released by the label.
///
/// Identity is the `(release_year, record_number, album_name)` triple; two
/// albums are equal iff all three match. The featured-musician list is ordered
/// because billing order matters; the track list and instrument credits are
/// owned exclusively by the album, while musicians are shared references into
/// the wider catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    release_year: i32,
    record_number: String,
    album_name: String,
    featured_musicians: Vec<Musician>,
    instruments: HashSet<MusicianInstrument>,
    album_url: Option<Url>,
    tracks: Vec<String>,
    rating: Option<f64>,
    price: Option<f64>,
    sales: u32,
    time_length: u32,
    genre: Option<String>,
    style: Option<String>,
    release_format: Option<String>,
    reviews: Option<String>,
}

impl Album {
    /// Creates an album from its identity triple, validating each part.
    pub fn new(
        release_year: i32,
        record_number: impl Into<String>,
        album_name: impl Into<String>,
    ) -> Result<Self, EntityError> {
        let record_number = record_number.into();
        let album_name = album_name.into();
        if !is_valid_record_number(&record_number) {
            return Err(EntityError::IllegalRecordNumber);
        }
        if !is_valid_release_year(release_year) {
            return Err(EntityError::InvalidReleaseYear);
        }
        if !is_valid_name(&album_name) {
            return Err(EntityError::InvalidAlbumName);
        }
        Ok(Self {
            release_year,
            record_number,
            album_name,
            featured_musicians: Vec::new(),
            instruments: HashSet::new(),
            album_url: None,
            tracks: Vec::new(),
            rating: None,
            price: None,
            sales: 0,
            time_length: 0,
            genre: None,
            style: None,
            release_format: None,
            reviews: None,
        })
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn set_release_year(&mut self, release_year: i32) -> Result<(), EntityError> {
        if !is_valid_release_year(release_year) {
            return Err(EntityError::InvalidReleaseYear);
        }
        self.release_year = release_year;
        Ok(())
    }

    pub fn record_number(&self) -> &str {
        &self.record_number
    }

    pub fn set_record_number(
        &mut self,
        record_number: impl Into<String>,
    ) -> Result<(), EntityError> {
        let record_number = record_number.into();
        if !is_valid_record_number(&record_number) {
            return Err(EntityError::IllegalRecordNumber);
        }
        self.record_number = record_number;
        Ok(())
    }

    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    pub fn set_album_name(&mut self, album_name: impl Into<String>) -> Result<(), EntityError> {
        let album_name = album_name.into();
        if !is_valid_name(&album_name) {
            return Err(EntityError::InvalidAlbumName);
        }
        self.album_name = album_name;
        Ok(())
    }

    /// The credited musicians in billing order.
    pub fn featured_musicians(&self) -> &[Musician] {
        &self.featured_musicians
    }

    pub fn set_featured_musicians(&mut self, musicians: Vec<Musician>) {
        self.featured_musicians = musicians;
    }

    pub fn instruments(&self) -> &HashSet<MusicianInstrument> {
        &self.instruments
    }

    pub fn set_instruments(&mut self, instruments: HashSet<MusicianInstrument>) {
        self.instruments = instruments;
    }

    pub fn album_url(&self) -> Option<&Url> {
        self.album_url.as_ref()
    }

    pub fn set_album_url(&mut self, url: Url) {
        self.album_url = Some(url);
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// Replaces the track list; every track name must pass the name pattern.
    pub fn set_tracks(&mut self, tracks: Vec<String>) -> Result<(), EntityError> {
        if tracks.iter().any(|track| !is_valid_name(track)) {
            return Err(EntityError::InvalidTrackName);
        }
        self.tracks = tracks;
        Ok(())
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn set_rating(&mut self, rating: f64) -> Result<(), EntityError> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(EntityError::RatingOutOfRange);
        }
        self.rating = Some(rating);
        Ok(())
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), EntityError> {
        if price < 0.0 {
            return Err(EntityError::NegativePrice);
        }
        self.price = Some(price);
        Ok(())
    }

    pub fn sales(&self) -> u32 {
        self.sales
    }

    pub fn set_sales(&mut self, sales: u32) {
        self.sales = sales;
    }

    pub fn time_length(&self) -> u32 {
        self.time_length
    }

    pub fn set_time_length(&mut self, seconds: u32) {
        self.time_length = seconds;
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = Some(genre.into());
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Some(style.into());
    }

    pub fn release_format(&self) -> Option<&str> {
        self.release_format.as_deref()
    }

    pub fn set_release_format(&mut self, release_format: impl Into<String>) {
        self.release_format = Some(release_format.into());
    }

    pub fn reviews(&self) -> Option<&str> {
        self.reviews.as_deref()
    }

    pub fn set_reviews(&mut self, reviews: impl Into<String>) {
        self.reviews = Some(reviews.into());
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.release_year == other.release_year
            && self.record_number == other.record_number
            && self.album_name == other.album_name
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.release_year.hash(state);
        self.record_number.hash(state);
        self.album_name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::super::validation::current_year;
    use super::*;

    fn koln_concert() -> Album {
        Album::new(1975, "ECM 1064/65", "The Koln Concert").unwrap()
    }

    #[test]
    fn constructs_with_valid_identity_triple() {
        let album = koln_concert();
        assert_eq!(album.release_year(), 1975);
        assert_eq!(album.record_number(), "ECM 1064/65");
        assert_eq!(album.album_name(), "The Koln Concert");
        assert!(album.featured_musicians().is_empty());
        assert!(album.tracks().is_empty());
        assert_eq!(album.price(), None);
        assert_eq!(album.rating(), None);
        assert_eq!(album.sales(), 0);
    }

    #[test]
    fn rejects_record_numbers_without_a_label_prefix() {
        for record_number in ["XYZ 1064", "1064/65", "ECM-1064", "ECM 10#64"] {
            assert_eq!(
                Album::new(1975, record_number, "The Koln Concert").unwrap_err(),
                EntityError::IllegalRecordNumber,
                "{record_number:?}"
            );
        }
    }

    #[test]
    fn accepts_every_label_prefix() {
        for record_number in [
            "ECM 1064",
            "Carmo 12",
            "RJAL 397030",
            "YAN 5001",
            "Watt 30",
            "XtraWatt 12",
        ] {
            assert!(Album::new(1975, record_number, "The Koln Concert").is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_release_years() {
        for year in [1970, 1950, current_year() + 1] {
            assert_eq!(
                Album::new(year, "ECM 1064/65", "The Koln Concert").unwrap_err(),
                EntityError::InvalidReleaseYear,
                "{year}"
            );
        }
    }

    #[test]
    fn rejects_malformed_album_names() {
        for name in ["", "  ", " Leading Space", "Name2020", "Name!"] {
            assert_eq!(
                Album::new(1975, "ECM 1064/65", name).unwrap_err(),
                EntityError::InvalidAlbumName,
                "{name:?}"
            );
        }
    }

    #[test]
    fn equality_is_the_identity_triple() {
        let mut first = koln_concert();
        let second = koln_concert();
        first.set_price(25.0).unwrap();
        first.set_sales(10_000);
        assert_eq!(first, second);

        let other_year = Album::new(1976, "ECM 1064/65", "The Koln Concert").unwrap();
        let other_number = Album::new(1975, "ECM 1065", "The Koln Concert").unwrap();
        let other_name = Album::new(1975, "ECM 1064/65", "Belonging").unwrap();
        assert_ne!(first, other_year);
        assert_ne!(first, other_number);
        assert_ne!(first, other_name);
    }

    #[test]
    fn price_must_be_non_negative() {
        let mut album = koln_concert();
        assert_eq!(
            album.set_price(-0.5).unwrap_err(),
            EntityError::NegativePrice
        );
        album.set_price(0.0).unwrap();
        assert_eq!(album.price(), Some(0.0));
    }

    #[test]
    fn rating_must_stay_within_zero_to_five() {
        let mut album = koln_concert();
        assert_eq!(
            album.set_rating(5.5).unwrap_err(),
            EntityError::RatingOutOfRange
        );
        assert_eq!(
            album.set_rating(-1.0).unwrap_err(),
            EntityError::RatingOutOfRange
        );
        album.set_rating(4.5).unwrap();
        assert_eq!(album.rating(), Some(4.5));
    }

    #[test]
    fn track_names_are_validated() {
        let mut album = koln_concert();
        assert_eq!(
            album
                .set_tracks(vec!["Part One".into(), "Part 2!!".into()])
                .unwrap_err(),
            EntityError::InvalidTrackName
        );
        album
            .set_tracks(vec!["Part One".into(), "Part Two".into()])
            .unwrap();
        assert_eq!(album.tracks().len(), 2);
    }

    #[test]
    fn featured_musicians_keep_billing_order() {
        let mut album = koln_concert();
        let jarrett = Musician::new("Keith Jarrett").unwrap();
        let garbarek = Musician::new("Jan Garbarek").unwrap();
        album.set_featured_musicians(vec![jarrett.clone(), garbarek.clone()]);

        assert_eq!(album.featured_musicians(), &[jarrett, garbarek]);
    }
}
