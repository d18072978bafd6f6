//! Album list filter types
//!
//! `NavidromeAlbumParams` is the predicate set understood by the server's album
//! endpoint. `AlbumListFilter` is the full snapshot owned by the filter store:
//! the predicates plus the artist filter and sort, which travel separately.
//!
//! Every predicate is optional. `None` means "no constraint", which is why the
//! boolean predicates are never stored as `Some(false)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Filter validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Year {0} is outside 0..=5000")]
    YearOutOfRange(i64),
    #[error("Invalid year: {0}")]
    InvalidYear(String),
    #[error("Failed to encode query: {0}")]
    Query(String),
}

/// Release year constrained to the inclusive range the year input accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Year(u16);

impl Year {
    pub const MIN: Year = Year(0);
    pub const MAX: Year = Year(5000);

    pub fn new(value: i64) -> Result<Self, FilterError> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Ok(Year(value as u16))
        } else {
            Err(FilterError::YearOutOfRange(value))
        }
    }

    /// Clamp an arbitrary integer into range (used when the year input loses focus)
    pub fn clamped(value: i64) -> Self {
        Year(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Year {
    type Error = FilterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Year::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl FromStr for Year {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| FilterError::InvalidYear(s.to_string()))?;
        Year::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boolean predicates rendered as switch rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterToggle {
    HasRating,
    Starred,
    Compilation,
    RecentlyPlayed,
}

impl FilterToggle {
    /// Display order of the switch rows
    pub const ALL: [FilterToggle; 4] = [
        FilterToggle::HasRating,
        FilterToggle::Starred,
        FilterToggle::Compilation,
        FilterToggle::RecentlyPlayed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterToggle::HasRating => "Is rated",
            FilterToggle::Starred => "Is favorited",
            FilterToggle::Compilation => "Is compilation",
            FilterToggle::RecentlyPlayed => "Is recently played",
        }
    }

    /// Query parameter name
    pub fn key(self) -> &'static str {
        match self {
            FilterToggle::HasRating => "has_rating",
            FilterToggle::Starred => "starred",
            FilterToggle::Compilation => "compilation",
            FilterToggle::RecentlyPlayed => "recently_played",
        }
    }
}

/// Server-side album predicates
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavidromeAlbumParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_rating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recently_played: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
}

impl NavidromeAlbumParams {
    pub fn toggle(&self, toggle: FilterToggle) -> Option<bool> {
        match toggle {
            FilterToggle::HasRating => self.has_rating,
            FilterToggle::Starred => self.starred,
            FilterToggle::Compilation => self.compilation,
            FilterToggle::RecentlyPlayed => self.recently_played,
        }
    }

    /// A switch is on only for an explicit `true`
    pub fn is_checked(&self, toggle: FilterToggle) -> bool {
        self.toggle(toggle) == Some(true)
    }

    /// Set or remove a boolean predicate. Unchecking removes the key.
    pub fn with_toggle(mut self, toggle: FilterToggle, checked: bool) -> Self {
        *self.toggle_mut(toggle) = checked.then_some(true);
        self
    }

    fn toggle_mut(&mut self, toggle: FilterToggle) -> &mut Option<bool> {
        match toggle {
            FilterToggle::HasRating => &mut self.has_rating,
            FilterToggle::Starred => &mut self.starred,
            FilterToggle::Compilation => &mut self.compilation,
            FilterToggle::RecentlyPlayed => &mut self.recently_played,
        }
    }

    /// Drop values that mean the same as "no constraint"
    pub fn normalized(mut self) -> Self {
        for toggle in FilterToggle::ALL {
            let slot = self.toggle_mut(toggle);
            if *slot == Some(false) {
                *slot = None;
            }
        }
        self.genre_id = non_empty(self.genre_id);
        self
    }

    pub fn active_count(&self) -> usize {
        let toggles = FilterToggle::ALL
            .iter()
            .filter(|toggle| self.is_checked(**toggle))
            .count();
        toggles + usize::from(self.year.is_some()) + usize::from(self.genre_id.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Album list sort keys, serialized as the server expects them
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlbumListSort {
    #[serde(rename = "albumArtist")]
    AlbumArtist,
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "max_year")]
    Year,
    #[serde(rename = "recently_added")]
    RecentlyAdded,
    #[serde(rename = "play_count")]
    PlayCount,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "random")]
    Random,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

/// Complete filter snapshot for the album list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumListFilter {
    #[serde(default)]
    pub nd_params: NavidromeAlbumParams,
    /// Artist filter, applied outside the predicate set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub sort_by: AlbumListSort,
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Partial update submitted to a filter store.
///
/// `nd_params` replaces the whole predicate set; callers build it by overlaying
/// a single key onto the current set. `artist_id` uses the outer `Option` to say
/// whether the artist filter is part of the update at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub nd_params: Option<NavidromeAlbumParams>,
    pub artist_id: Option<Option<String>>,
    pub sort: Option<(AlbumListSort, SortOrder)>,
}

impl FilterUpdate {
    pub fn nd_params(params: NavidromeAlbumParams) -> Self {
        Self {
            nd_params: Some(params),
            ..Default::default()
        }
    }

    pub fn artist(artist_id: Option<String>) -> Self {
        Self {
            artist_id: Some(artist_id),
            ..Default::default()
        }
    }

    pub fn sort(sort_by: AlbumListSort, sort_order: SortOrder) -> Self {
        Self {
            sort: Some((sort_by, sort_order)),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nd_params.is_none() && self.artist_id.is_none() && self.sort.is_none()
    }
}

#[derive(Serialize)]
struct AlbumListRequest<'a> {
    #[serde(rename = "_start")]
    start: usize,
    #[serde(rename = "_end")]
    end: usize,
    #[serde(rename = "_sort")]
    sort: AlbumListSort,
    #[serde(rename = "_order")]
    order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist_id: Option<&'a str>,
    #[serde(flatten)]
    params: &'a NavidromeAlbumParams,
}

impl AlbumListFilter {
    /// Apply an update and normalize the result. Applying the same update twice
    /// yields the same snapshot as applying it once.
    pub fn merged(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        if let Some(params) = update.nd_params {
            next.nd_params = params;
        }
        if let Some(artist_id) = update.artist_id {
            next.artist_id = artist_id;
        }
        if let Some((sort_by, sort_order)) = update.sort {
            next.sort_by = sort_by;
            next.sort_order = sort_order;
        }
        next.nd_params = next.nd_params.normalized();
        next.artist_id = non_empty(next.artist_id);
        next
    }

    /// Remove every constraint, keeping the sort
    pub fn cleared(&self) -> Self {
        Self {
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            ..Default::default()
        }
    }

    pub fn active_count(&self) -> usize {
        self.nd_params.active_count() + usize::from(self.artist_id.is_some())
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    /// Query string for one page of the album list, `start..end`
    pub fn to_query_string(&self, start: usize, end: usize) -> Result<String, FilterError> {
        let request = AlbumListRequest {
            start,
            end,
            sort: self.sort_by,
            order: self.sort_order,
            artist_id: self.artist_id.as_deref(),
            params: &self.nd_params,
        };
        serde_urlencoded::to_string(&request).map_err(|e| FilterError::Query(e.to_string()))
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_year(year: i64) -> NavidromeAlbumParams {
        NavidromeAlbumParams {
            year: Some(Year::new(year).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn year_accepts_inclusive_bounds() {
        assert_eq!(Year::new(0).unwrap().get(), 0);
        assert_eq!(Year::new(5000).unwrap().get(), 5000);
        assert_eq!(Year::new(5001), Err(FilterError::YearOutOfRange(5001)));
        assert_eq!(Year::new(-1), Err(FilterError::YearOutOfRange(-1)));
    }

    #[test]
    fn year_clamps_and_parses() {
        assert_eq!(Year::clamped(9999), Year::MAX);
        assert_eq!(Year::clamped(-20), Year::MIN);
        assert_eq!(" 1999 ".parse::<Year>().unwrap().get(), 1999);
        assert!(matches!(
            "nineteen".parse::<Year>(),
            Err(FilterError::InvalidYear(_))
        ));
        assert!(matches!(
            "6000".parse::<Year>(),
            Err(FilterError::YearOutOfRange(6000))
        ));
    }

    #[test]
    fn year_deserialization_validates_range() {
        let ok: NavidromeAlbumParams = serde_json::from_str(r#"{"year": 1999}"#).unwrap();
        assert_eq!(ok.year, Some(Year::new(1999).unwrap()));
        assert!(serde_json::from_str::<NavidromeAlbumParams>(r#"{"year": 7000}"#).is_err());
    }

    #[test]
    fn unchecking_removes_the_key() {
        let params = NavidromeAlbumParams::default().with_toggle(FilterToggle::Starred, true);
        assert_eq!(params.starred, Some(true));
        assert!(params.is_checked(FilterToggle::Starred));

        let params = params.with_toggle(FilterToggle::Starred, false);
        assert_eq!(params.starred, None);
        assert!(!params.is_checked(FilterToggle::Starred));
    }

    #[test]
    fn normalize_drops_false_and_empty_values() {
        let params = NavidromeAlbumParams {
            compilation: Some(false),
            has_rating: Some(true),
            genre_id: Some(String::new()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.compilation, None);
        assert_eq!(params.has_rating, Some(true));
        assert_eq!(params.genre_id, None);
    }

    #[test]
    fn absent_keys_are_not_serialized() {
        let json = serde_json::to_string(&params_with_year(1984)).unwrap();
        assert_eq!(json, r#"{"year":1984}"#);
    }

    #[test]
    fn merge_replaces_only_the_updated_sections() {
        let current = AlbumListFilter {
            nd_params: params_with_year(1971),
            artist_id: Some("ar-1".to_string()),
            sort_by: AlbumListSort::Year,
            sort_order: SortOrder::Desc,
        };

        let merged = current.merged(FilterUpdate::artist(None));
        assert_eq!(merged.artist_id, None);
        assert_eq!(merged.nd_params, current.nd_params);
        assert_eq!(merged.sort_by, AlbumListSort::Year);

        let merged = current.merged(FilterUpdate::sort(AlbumListSort::Name, SortOrder::Asc));
        assert_eq!(merged.sort_by, AlbumListSort::Name);
        assert_eq!(merged.artist_id.as_deref(), Some("ar-1"));
    }

    #[test]
    fn merge_is_idempotent() {
        let update = FilterUpdate::nd_params(NavidromeAlbumParams {
            starred: Some(true),
            genre_id: Some("g1".to_string()),
            ..Default::default()
        });
        let once = AlbumListFilter::default().merged(update.clone());
        let twice = once.merged(update);
        assert_eq!(once, twice);
    }

    #[test]
    fn cleared_keeps_sort() {
        let filter = AlbumListFilter {
            nd_params: params_with_year(2001),
            artist_id: Some("ar-9".to_string()),
            sort_by: AlbumListSort::Rating,
            sort_order: SortOrder::Desc,
        };
        let cleared = filter.cleared();
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.sort_by, AlbumListSort::Rating);
        assert_eq!(cleared.sort_order, SortOrder::Desc);
    }

    #[test]
    fn active_count_covers_predicates_and_artist() {
        let filter = AlbumListFilter {
            nd_params: NavidromeAlbumParams {
                starred: Some(true),
                has_rating: Some(false),
                year: Some(Year::new(1999).unwrap()),
                ..Default::default()
            },
            artist_id: Some("ar-1".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 3);
    }

    #[test]
    fn query_string_includes_only_present_predicates() {
        let filter = AlbumListFilter {
            nd_params: NavidromeAlbumParams {
                starred: Some(true),
                genre_id: Some("g1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = filter.to_query_string(0, 100).unwrap();
        assert_eq!(
            query,
            "_start=0&_end=100&_sort=name&_order=ASC&starred=true&genre_id=g1"
        );
    }

    #[test]
    fn query_string_carries_artist_and_sort() {
        let filter = AlbumListFilter {
            artist_id: Some("ar-7".to_string()),
            sort_by: AlbumListSort::RecentlyAdded,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let query = filter.to_query_string(50, 100).unwrap();
        assert_eq!(
            query,
            "_start=50&_end=100&_sort=recently_added&_order=DESC&artist_id=ar-7"
        );
    }
}
