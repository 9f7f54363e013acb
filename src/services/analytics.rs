use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use color_eyre::Result;
use tracing::{debug, instrument};

use super::ranking::top_k;
use crate::entities::{Album, MusicalInstrument, Musician};
use crate::ports::repository::CatalogRepository;

/// Caller errors raised by the analytics queries, always before any repository
/// access. The message text is part of the query contract; callers and tests
/// match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("number of most prolific musician to return should be more than 0")]
    ProlificCountNotPositive,

    #[error("Years should be greater than 1970, not future, and valid year")]
    YearOutOfRange,

    #[error("Start year should smaller than end year")]
    InvertedYearWindow,

    #[error("number of most talented musician to return should be more than 0")]
    TalentedCountNotPositive,

    #[error("number of most social musician to return should be more than 0")]
    SocialCountNotPositive,

    #[error("Busiest Years You Want should bigger than 0")]
    BusiestYearsCountNotPositive,

    #[error("Similar Albums Number You Want should bigger than 0")]
    SimilarAlbumsCountNotPositive,

    #[error("Expensive Price You Want should bigger than 0")]
    ExpensiveAlbumsCountNotPositive,

    #[error("Number of Highest rated albums you need should be more than zero")]
    HighestRatedCountNotPositive,
}

/// Analytical queries over the catalogue: top-k rankings of musicians, albums
/// and release years.
///
/// Every query performs one bulk load per entity kind it needs, scores each
/// subject, and hands the scored set to the shared ranking primitive. The
/// loaded entities are read-only snapshots; nothing here mutates them.
pub struct CatalogAnalytics {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogAnalytics {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// The musicians who appear on the most distinct albums, optionally
    /// restricted to release years within `[start_year, end_year]`.
    ///
    /// A non-positive bound leaves that side of the window open. When both
    /// bounds are supplied they must be valid years (after 1970, not in the
    /// future) and must not be inverted. Musicians with no qualifying album
    /// are not ranked at all.
    #[instrument(skip(self))]
    pub async fn most_prolific_musicians(
        &self,
        k: usize,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Musician>> {
        if k == 0 {
            return Err(QueryError::ProlificCountNotPositive.into());
        }
        if start_year > 0 && end_year > 0 {
            let current = crate::entities::current_year();
            let in_range = |year: i32| year > 1970 && year <= current;
            if !in_range(start_year) || !in_range(end_year) {
                return Err(QueryError::YearOutOfRange.into());
            }
            if start_year > end_year {
                return Err(QueryError::InvertedYearWindow.into());
            }
        }

        let musicians = self.repository.load_all_musicians().await?;
        let scored: Vec<(Musician, usize)> = musicians
            .into_iter()
            .filter_map(|musician| {
                let count = musician
                    .albums()
                    .iter()
                    .filter(|album| {
                        let year = album.release_year();
                        (start_year <= 0 || year >= start_year)
                            && (end_year <= 0 || year <= end_year)
                    })
                    .count();
                (count > 0).then_some((musician, count))
            })
            .collect();
        debug!(candidates = scored.len(), "ranking musicians by album count");
        Ok(top_k(scored, k))
    }

    /// The musicians who play the most distinct instruments, unioned across
    /// all of their instrument credits so overlapping sets are not
    /// double-counted.
    #[instrument(skip(self))]
    pub async fn most_talented_musicians(&self, k: usize) -> Result<Vec<Musician>> {
        if k == 0 {
            return Err(QueryError::TalentedCountNotPositive.into());
        }

        let credits = self.repository.load_all_musician_instruments().await?;
        let mut played: HashMap<String, (Musician, HashSet<MusicalInstrument>)> = HashMap::new();
        for credit in credits {
            let entry = played
                .entry(credit.musician().name().to_string())
                .or_insert_with(|| (credit.musician().clone(), HashSet::new()));
            entry.1.extend(credit.instruments().iter().cloned());
        }
        let scored: Vec<(Musician, usize)> = played
            .into_values()
            .map(|(musician, instruments)| (musician, instruments.len()))
            .collect();
        debug!(
            candidates = scored.len(),
            "ranking musicians by distinct instruments"
        );
        Ok(top_k(scored, k))
    }

    /// The musicians who have shared an album credit with the most distinct
    /// other musicians.
    ///
    /// Every musician named in some album's featured list is a candidate, so a
    /// musician who only records alone still ranks with a score of zero;
    /// musicians absent from every featured list are not considered.
    #[instrument(skip(self))]
    pub async fn most_social_musicians(&self, k: usize) -> Result<Vec<Musician>> {
        if k == 0 {
            return Err(QueryError::SocialCountNotPositive.into());
        }

        let albums = self.repository.load_all_albums().await?;
        let mut collaborators: HashMap<String, (Musician, HashSet<String>)> = HashMap::new();
        for album in &albums {
            for musician in album.featured_musicians() {
                let entry = collaborators
                    .entry(musician.name().to_string())
                    .or_insert_with(|| (musician.clone(), HashSet::new()));
                for other in album.featured_musicians() {
                    if other.name() != musician.name() {
                        entry.1.insert(other.name().to_string());
                    }
                }
            }
        }
        let scored: Vec<(Musician, usize)> = collaborators
            .into_values()
            .map(|(musician, others)| (musician, others.len()))
            .collect();
        debug!(candidates = scored.len(), "ranking musicians by collaborators");
        Ok(top_k(scored, k))
    }

    /// The years with the most album releases, over the whole catalogue.
    #[instrument(skip(self))]
    pub async fn busiest_years(&self, k: usize) -> Result<Vec<i32>> {
        if k == 0 {
            return Err(QueryError::BusiestYearsCountNotPositive.into());
        }

        let albums = self.repository.load_all_albums().await?;
        let mut releases_per_year: HashMap<i32, usize> = HashMap::new();
        for album in &albums {
            *releases_per_year.entry(album.release_year()).or_default() += 1;
        }
        Ok(top_k(releases_per_year.into_iter().collect(), k))
    }

    /// The albums most similar to `reference`, scored by how many featured
    /// musicians they share with it (compared by musician name).
    ///
    /// The reference itself and albums with no overlap are excluded from the
    /// candidate pool, so an album with no collaborators in common never
    /// appears, even when fewer than `k` albums qualify.
    #[instrument(skip(self, reference), fields(album = reference.album_name()))]
    pub async fn most_similar_albums(&self, k: usize, reference: &Album) -> Result<Vec<Album>> {
        if k == 0 {
            return Err(QueryError::SimilarAlbumsCountNotPositive.into());
        }

        let reference_names: HashSet<&str> = reference
            .featured_musicians()
            .iter()
            .map(Musician::name)
            .collect();
        let albums = self.repository.load_all_albums().await?;
        let scored: Vec<(Album, usize)> = albums
            .into_iter()
            .filter(|candidate| candidate != reference)
            .filter_map(|candidate| {
                let overlap = candidate
                    .featured_musicians()
                    .iter()
                    .filter(|musician| reference_names.contains(musician.name()))
                    .map(Musician::name)
                    .collect::<HashSet<&str>>()
                    .len();
                (overlap > 0).then_some((candidate, overlap))
            })
            .collect();
        debug!(candidates = scored.len(), "ranking albums by shared musicians");
        Ok(top_k(scored, k))
    }

    /// The highest-priced albums; albums without a price are excluded.
    #[instrument(skip(self))]
    pub async fn most_expensive_albums(&self, k: usize) -> Result<Vec<Album>> {
        if k == 0 {
            return Err(QueryError::ExpensiveAlbumsCountNotPositive.into());
        }

        let albums = self.repository.load_all_albums().await?;
        let scored: Vec<(Album, f64)> = albums
            .into_iter()
            .filter_map(|album| album.price().map(|price| (album, price)))
            .collect();
        Ok(top_k(scored, k))
    }

    /// The highest-rated albums; albums without a rating are excluded.
    #[instrument(skip(self))]
    pub async fn highest_rated_albums(&self, k: usize) -> Result<Vec<Album>> {
        if k == 0 {
            return Err(QueryError::HighestRatedCountNotPositive.into());
        }

        let albums = self.repository.load_all_albums().await?;
        let scored: Vec<(Album, f64)> = albums
            .into_iter()
            .filter_map(|album| album.rating().map(|rating| (album, rating)))
            .collect();
        Ok(top_k(scored, k))
    }

    /// The best-selling albums. Sales default to zero, so every album
    /// participates. Unlike the sibling queries, a `k` of zero returns an
    /// empty list instead of an error.
    #[instrument(skip(self))]
    pub async fn best_seller_albums(&self, k: usize) -> Result<Vec<Album>> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let albums = self.repository.load_all_albums().await?;
        let scored: Vec<(Album, u32)> = albums
            .into_iter()
            .map(|album| {
                let sales = album.sales();
                (album, sales)
            })
            .collect();
        Ok(top_k(scored, k))
    }
}
