//! In-memory option sources

use super::{
    AlbumArtist, AlbumArtistListQuery, AlbumArtistListSort, Genre, GenreListQuery, OptionSource,
    SelectOption, SourceError,
};
use crate::filters::SortOrder;
use async_trait::async_trait;
use std::cmp::Ordering;

/// Fixed genre list
#[derive(Clone, Debug, Default)]
pub struct StaticGenres {
    genres: Vec<Genre>,
}

impl StaticGenres {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl OptionSource<GenreListQuery> for StaticGenres {
    async fn fetch(&self, query: &GenreListQuery) -> Result<Vec<SelectOption>, SourceError> {
        let mut genres: Vec<&Genre> = self.genres.iter().collect();
        genres.sort_by(|a, b| directed(compare_names(&a.name, &b.name), query.sort_order));
        Ok(genres.into_iter().map(SelectOption::from).collect())
    }
}

/// Artist list answering name searches.
///
/// Matching is a case-insensitive substring match on the name.
#[derive(Clone, Debug, Default)]
pub struct ArtistDirectory {
    artists: Vec<AlbumArtist>,
    album_counts: Vec<usize>,
}

impl ArtistDirectory {
    pub fn new(artists: Vec<AlbumArtist>) -> Self {
        let album_counts = vec![0; artists.len()];
        Self {
            artists,
            album_counts,
        }
    }

    /// Artists paired with how many albums each has, for album-count sorting
    pub fn with_album_counts(entries: Vec<(AlbumArtist, usize)>) -> Self {
        let (artists, album_counts) = entries.into_iter().unzip();
        Self {
            artists,
            album_counts,
        }
    }

    pub fn search(&self, query: &AlbumArtistListQuery) -> Vec<SelectOption> {
        let needle = query.search_term.to_lowercase();
        let mut matches: Vec<(&AlbumArtist, usize)> = self
            .artists
            .iter()
            .zip(self.album_counts.iter().copied())
            .filter(|(artist, _)| artist.name.to_lowercase().contains(&needle))
            .collect();

        matches.sort_by(|(a, a_count), (b, b_count)| {
            let ordering = match query.sort_by {
                AlbumArtistListSort::Name => compare_names(&a.name, &b.name),
                AlbumArtistListSort::AlbumCount => a_count
                    .cmp(b_count)
                    .then_with(|| compare_names(&a.name, &b.name)),
            };
            directed(ordering, query.sort_order)
        });

        matches
            .into_iter()
            .skip(query.start_index)
            .take(query.limit)
            .map(|(artist, _)| SelectOption::from(artist))
            .collect()
    }
}

#[async_trait]
impl OptionSource<AlbumArtistListQuery> for ArtistDirectory {
    async fn fetch(&self, query: &AlbumArtistListQuery) -> Result<Vec<SelectOption>, SourceError> {
        Ok(self.search(query))
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
