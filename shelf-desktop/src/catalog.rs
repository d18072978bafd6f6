//! Demo album catalog
//!
//! A fixed set of albums standing in for a Navidrome server. It answers the
//! genre and artist option queries and the album list query for a filter.

use async_trait::async_trait;
use shelf_core::{
    AlbumArtist, AlbumArtistListQuery, AlbumListFilter, AlbumListSort, ArtistDirectory, Genre,
    GenreListQuery, OptionSource, SelectOption, SortOrder, SourceError, StaticGenres,
};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_artist_id: String,
    pub album_artist: String,
    pub genre_id: String,
    pub year: u16,
    /// 0 means unrated
    pub rating: u8,
    pub starred: bool,
    pub compilation: bool,
    pub play_count: u32,
    /// Days since the album was last played, if ever
    pub last_played_days_ago: Option<u32>,
    /// Order the album was added in, higher is newer
    pub added: u32,
}

/// Albums played within this many days count as recently played
const RECENTLY_PLAYED_DAYS: u32 = 30;

impl Album {
    pub fn matches(&self, filter: &AlbumListFilter) -> bool {
        let params = &filter.nd_params;
        let flag = |constraint: Option<bool>, value: bool| constraint.is_none_or(|c| c == value);

        flag(params.has_rating, self.rating > 0)
            && flag(params.starred, self.starred)
            && flag(params.compilation, self.compilation)
            && flag(
                params.recently_played,
                self.last_played_days_ago
                    .is_some_and(|days| days <= RECENTLY_PLAYED_DAYS),
            )
            && params.year.is_none_or(|year| year.get() == self.year)
            && params
                .genre_id
                .as_ref()
                .is_none_or(|genre_id| *genre_id == self.genre_id)
            && filter
                .artist_id
                .as_ref()
                .is_none_or(|artist_id| *artist_id == self.album_artist_id)
    }

    fn compare(&self, other: &Album, sort_by: AlbumListSort) -> Ordering {
        let by_name = || self.name.to_lowercase().cmp(&other.name.to_lowercase());
        match sort_by {
            AlbumListSort::AlbumArtist => self
                .album_artist
                .to_lowercase()
                .cmp(&other.album_artist.to_lowercase())
                .then_with(by_name),
            AlbumListSort::Name | AlbumListSort::Random => by_name(),
            AlbumListSort::Year => self.year.cmp(&other.year).then_with(by_name),
            AlbumListSort::RecentlyAdded => self.added.cmp(&other.added),
            AlbumListSort::PlayCount => self.play_count.cmp(&other.play_count).then_with(by_name),
            AlbumListSort::Rating => self.rating.cmp(&other.rating).then_with(by_name),
        }
    }
}

pub struct DemoCatalog {
    albums: Vec<Album>,
    genres: StaticGenres,
    artists: ArtistDirectory,
    artist_latency: Duration,
}

impl DemoCatalog {
    pub fn new(albums: Vec<Album>, genres: Vec<Genre>, artist_latency: Duration) -> Self {
        let mut artists: Vec<(AlbumArtist, usize)> = Vec::new();
        for album in &albums {
            match artists
                .iter_mut()
                .find(|(artist, _)| artist.id == album.album_artist_id)
            {
                Some((_, count)) => *count += 1,
                None => artists.push((
                    AlbumArtist {
                        id: album.album_artist_id.clone(),
                        name: album.album_artist.clone(),
                    },
                    1,
                )),
            }
        }

        Self {
            albums,
            genres: StaticGenres::new(genres),
            artists: ArtistDirectory::with_album_counts(artists),
            artist_latency,
        }
    }

    /// The built-in fixture library
    pub fn fixture(artist_latency: Duration) -> Self {
        Self::new(fixture_albums(), fixture_genres(), artist_latency)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Albums passing `filter`, in the filter's sort order
    pub fn albums(&self, filter: &AlbumListFilter) -> Vec<Album> {
        let mut albums: Vec<Album> = self
            .albums
            .iter()
            .filter(|album| album.matches(filter))
            .cloned()
            .collect();
        albums.sort_by(|a, b| {
            let ordering = a.compare(b, filter.sort_by);
            match filter.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        debug!(
            "{} of {} albums match {:?}",
            albums.len(),
            self.albums.len(),
            filter
        );
        albums
    }
}

#[async_trait]
impl OptionSource<GenreListQuery> for DemoCatalog {
    async fn fetch(&self, query: &GenreListQuery) -> Result<Vec<SelectOption>, SourceError> {
        self.genres.fetch(query).await
    }
}

#[async_trait]
impl OptionSource<AlbumArtistListQuery> for DemoCatalog {
    async fn fetch(&self, query: &AlbumArtistListQuery) -> Result<Vec<SelectOption>, SourceError> {
        if !self.artist_latency.is_zero() {
            tokio::time::sleep(self.artist_latency).await;
        }
        self.artists.fetch(query).await
    }
}

fn genre(id: &str, name: &str) -> Genre {
    Genre {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn fixture_genres() -> Vec<Genre> {
    vec![
        genre("g-rock", "Rock"),
        genre("g-jazz", "Jazz"),
        genre("g-electronic", "Electronic"),
        genre("g-folk", "Folk"),
        genre("g-hiphop", "Hip-Hop"),
        genre("g-soundtrack", "Soundtrack"),
    ]
}

#[allow(clippy::type_complexity)]
fn fixture_albums() -> Vec<Album> {
    // (name, artist id, artist, genre, year, rating, starred, compilation, plays, last played)
    let rows: [(&str, &str, &str, &str, u16, u8, bool, bool, u32, Option<u32>); 14] = [
        ("Led Zeppelin IV", "ar-led", "Led Zeppelin", "g-rock", 1971, 5, true, false, 42, Some(3)),
        ("Physical Graffiti", "ar-led", "Led Zeppelin", "g-rock", 1975, 4, false, false, 17, Some(90)),
        ("Houses of the Holy", "ar-led", "Led Zeppelin", "g-rock", 1973, 0, false, false, 0, None),
        ("Kind of Blue", "ar-davis", "Miles Davis", "g-jazz", 1959, 5, true, false, 60, Some(1)),
        ("Bitches Brew", "ar-davis", "Miles Davis", "g-jazz", 1970, 3, false, false, 8, Some(200)),
        ("Selected Ambient Works 85-92", "ar-aphex", "Aphex Twin", "g-electronic", 1992, 4, true, false, 25, Some(12)),
        ("Syro", "ar-aphex", "Aphex Twin", "g-electronic", 2014, 0, false, false, 3, Some(45)),
        ("Pink Moon", "ar-drake", "Nick Drake", "g-folk", 1972, 5, false, false, 11, Some(20)),
        ("Illmatic", "ar-nas", "Nas", "g-hiphop", 1994, 5, true, false, 33, Some(6)),
        ("Ledisi Live", "ar-ledisi", "Ledisi", "g-jazz", 2007, 0, false, false, 0, None),
        ("Pulp Fiction", "ar-various", "Various Artists", "g-soundtrack", 1994, 4, true, true, 19, Some(2)),
        ("Late Night Tales", "ar-various", "Various Artists", "g-electronic", 2004, 0, false, true, 5, Some(300)),
        ("Jazz Café Sessions", "ar-various", "Various Artists", "g-jazz", 1999, 3, false, true, 2, None),
        ("Zeppet Band Demos", "ar-zeppet", "Zeppet Band", "g-rock", 1999, 0, false, false, 1, Some(28)),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, artist_id, artist, genre_id, year, rating, starred, compilation, plays, last))| {
                Album {
                    id: format!("al-{i}"),
                    name: name.to_string(),
                    album_artist_id: artist_id.to_string(),
                    album_artist: artist.to_string(),
                    genre_id: genre_id.to_string(),
                    year,
                    rating,
                    starred,
                    compilation,
                    play_count: plays,
                    last_played_days_ago: last,
                    added: i as u32,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{FilterToggle, FilterUpdate, NavidromeAlbumParams, Year};

    fn catalog() -> DemoCatalog {
        DemoCatalog::fixture(Duration::ZERO)
    }

    fn names(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_lists_everything_by_name() {
        let catalog = catalog();
        let albums = catalog.albums(&AlbumListFilter::default());
        assert_eq!(albums.len(), catalog.len());
        assert_eq!(albums[0].name, "Bitches Brew");
    }

    #[test]
    fn toggles_narrow_the_list() {
        let catalog = catalog();
        let filter = AlbumListFilter {
            nd_params: NavidromeAlbumParams::default()
                .with_toggle(FilterToggle::Compilation, true)
                .with_toggle(FilterToggle::Starred, true),
            ..Default::default()
        };
        assert_eq!(names(&catalog.albums(&filter)), vec!["Pulp Fiction"]);
    }

    #[test]
    fn recently_played_uses_window() {
        let filter = AlbumListFilter {
            nd_params: NavidromeAlbumParams::default()
                .with_toggle(FilterToggle::RecentlyPlayed, true),
            ..Default::default()
        };
        let albums = catalog().albums(&filter);
        assert!(albums
            .iter()
            .all(|a| a.last_played_days_ago.is_some_and(|d| d <= 30)));
        assert!(names(&albums).contains(&"Zeppet Band Demos"));
    }

    #[test]
    fn year_genre_and_artist_combine() {
        let filter = AlbumListFilter::default()
            .merged(FilterUpdate::nd_params(NavidromeAlbumParams {
                year: Some(Year::new(1999).unwrap()),
                genre_id: Some("g-jazz".to_string()),
                ..Default::default()
            }))
            .merged(FilterUpdate::artist(Some("ar-various".to_string())));
        assert_eq!(names(&catalog().albums(&filter)), vec!["Jazz Café Sessions"]);
    }

    #[test]
    fn sorts_by_year_descending() {
        let filter = AlbumListFilter::default()
            .merged(FilterUpdate::sort(AlbumListSort::Year, SortOrder::Desc));
        let albums = catalog().albums(&filter);
        assert_eq!(albums[0].name, "Syro");
        assert!(albums.windows(2).all(|w| w[0].year >= w[1].year));
    }

    #[tokio::test]
    async fn artist_source_counts_albums() {
        let catalog = catalog();
        let query = AlbumArtistListQuery::search("led", 300).unwrap();
        let options = OptionSource::<AlbumArtistListQuery>::fetch(&catalog, &query)
            .await
            .unwrap();
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Led Zeppelin", "Ledisi"]);
    }

    #[tokio::test(start_paused = true)]
    async fn artist_source_waits_out_latency() {
        let catalog = DemoCatalog::fixture(Duration::from_millis(400));
        let query = AlbumArtistListQuery::search("Nas", 300).unwrap();
        let start = tokio::time::Instant::now();

        let options = OptionSource::<AlbumArtistListQuery>::fetch(&catalog, &query)
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(400));
        assert_eq!(options, vec![SelectOption::new("Nas", "ar-nas")]);
    }

    #[tokio::test]
    async fn genre_source_sorted_by_name() {
        let options = OptionSource::<GenreListQuery>::fetch(&catalog(), &GenreListQuery::default())
            .await
            .unwrap();
        assert_eq!(options.first().map(|o| o.label.as_str()), Some("Electronic"));
        assert_eq!(options.len(), 6);
    }
}
