mod support;

use shelf_core::{
    AlbumArtistListSort, AlbumListFilter, FilterControl, FilterEdit, FilterStore, FilterToggle,
    FilterUpdate, NavidromeAlbumParams, SharedFilterStore, SortOrder, Year,
};
use std::time::Duration;
use support::{setup, setup_with, spawn_search, spawn_settle, RecordingArtists};
use tokio::time::{sleep, Instant};

#[tokio::test]
async fn test_checking_each_toggle_stores_true() {
    for toggle in FilterToggle::ALL {
        let (model, _) = setup();
        let snapshot = model.commit(&FilterEdit::Toggle(toggle, true));
        assert_eq!(snapshot.nd_params.toggle(toggle), Some(true), "{toggle:?}");
    }
}

#[tokio::test]
async fn test_unchecking_each_toggle_removes_key() {
    for toggle in FilterToggle::ALL {
        let (model, _) = setup();
        model.commit(&FilterEdit::Toggle(toggle, true));
        let snapshot = model.commit(&FilterEdit::Toggle(toggle, false));
        assert_eq!(snapshot.nd_params.toggle(toggle), None, "{toggle:?}");

        let json = serde_json::to_value(&snapshot.nd_params).unwrap();
        assert!(json.get(toggle.key()).is_none(), "{toggle:?} serialized as {json}");
    }
}

#[tokio::test]
async fn test_clearing_a_control_preserves_other_keys() {
    let store = SharedFilterStore::new(AlbumListFilter {
        nd_params: NavidromeAlbumParams {
            starred: Some(true),
            recently_played: Some(true),
            year: Some(Year::new(1994).unwrap()),
            genre_id: Some("g-jazz".to_string()),
            ..Default::default()
        },
        artist_id: Some("ar-3".to_string()),
        ..Default::default()
    });
    let before = store.filter();
    let (model, _) = setup_with(store);

    let snapshot = model.commit(&FilterEdit::Genre(None));
    assert_eq!(snapshot.nd_params.genre_id, None);
    assert_eq!(snapshot.nd_params.year, before.nd_params.year);
    assert_eq!(snapshot.nd_params.starred, Some(true));
    assert_eq!(snapshot.nd_params.recently_played, Some(true));
    assert_eq!(snapshot.artist_id, before.artist_id);

    let snapshot = model.commit(&FilterEdit::Year(None));
    assert_eq!(snapshot.nd_params.year, None);
    assert_eq!(snapshot.nd_params.starred, Some(true));
    assert_eq!(snapshot.artist_id, before.artist_id);
}

#[tokio::test(start_paused = true)]
async fn test_year_commits_after_500ms() {
    let (model, changes) = setup();
    let start = Instant::now();

    let pending = model.prepare(FilterEdit::Year(Some(Year::new(1999).unwrap())));
    let handle = spawn_settle(model.clone(), pending);

    sleep(Duration::from_millis(499)).await;
    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(model.filter().nd_params.year, None);

    let snapshot = handle.await.unwrap().expect("year edit should commit");
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(snapshot.nd_params.year.map(Year::get), Some(1999));
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_year_above_range_is_never_forwarded() {
    let (model, changes) = setup();

    // "500" is still waiting when the box reads "5001"
    let pending = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(500).unwrap()))),
    );
    sleep(Duration::from_millis(100)).await;
    assert!(Year::new(5001).is_err());
    model.cancel(FilterControl::Year);

    assert_eq!(pending.await.unwrap(), None);
    sleep(Duration::from_millis(1000)).await;
    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(model.filter().nd_params.year, None);
}

#[tokio::test(start_paused = true)]
async fn test_year_cancel_keeps_committed_value() {
    let (model, changes) = setup();
    model.commit(&FilterEdit::Year(Some(Year::new(1999).unwrap())));

    let pending = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(2000).unwrap()))),
    );
    model.cancel(FilterControl::Year);

    assert_eq!(pending.await.unwrap(), None);
    assert_eq!(model.filter().nd_params.year.map(Year::get), Some(1999));
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_year_edits_commit_only_the_last() {
    let (model, changes) = setup();

    let first = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(19).unwrap()))),
    );
    sleep(Duration::from_millis(120)).await;
    let second = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(199).unwrap()))),
    );
    sleep(Duration::from_millis(120)).await;
    let third = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(1999).unwrap()))),
    );

    assert_eq!(first.await.unwrap(), None);
    assert_eq!(second.await.unwrap(), None);
    assert!(third.await.unwrap().is_some());

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].nd_params.year.map(Year::get), Some(1999));
}

#[tokio::test(start_paused = true)]
async fn test_genre_selection_commits_after_250ms_then_clears() {
    let (model, changes) = setup();
    let start = Instant::now();

    let handle = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Genre(Some("g1".to_string()))),
    );
    sleep(Duration::from_millis(249)).await;
    assert!(changes.lock().unwrap().is_empty());

    let snapshot = handle.await.unwrap().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(snapshot.nd_params.genre_id.as_deref(), Some("g1"));

    let snapshot = spawn_settle(model.clone(), model.prepare(FilterEdit::Genre(None)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.nd_params.genre_id, None);
    assert_eq!(changes.lock().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_genre_and_year_timers_are_independent() {
    let (model, _) = setup();

    let genre = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Genre(Some("g2".to_string()))),
    );
    let year = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Year(Some(Year::new(2004).unwrap()))),
    );

    assert!(genre.await.unwrap().is_some());
    let snapshot = year.await.unwrap().unwrap();
    assert_eq!(snapshot.nd_params.genre_id.as_deref(), Some("g2"));
    assert_eq!(snapshot.nd_params.year.map(Year::get), Some(2004));
}

#[tokio::test(start_paused = true)]
async fn test_toggle_commits_without_waiting() {
    let (model, changes) = setup();
    let start = Instant::now();

    let pending = model.prepare(FilterEdit::Toggle(FilterToggle::Starred, true));
    assert!(pending.is_immediate());
    let snapshot = spawn_settle(model.clone(), pending).await.unwrap().unwrap();

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(snapshot.nd_params.starred, Some(true));
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_artist_selection_commits_immediately() {
    let (model, changes) = setup();
    let pending = model.prepare(FilterEdit::Artist(Some("ar-0".to_string())));
    assert!(pending.is_immediate());

    let snapshot = model.commit(&pending.into_edit());
    assert_eq!(snapshot.artist_id.as_deref(), Some("ar-0"));
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_artist_search_issues_one_query_after_200ms() {
    let (model, _) = setup();
    let artists = RecordingArtists::new(&["Led Zeppelin", "Ledisi", "Can"]);
    let start = Instant::now();

    let handle = spawn_search(model.prepare_artist_search("Led"), artists.clone());
    sleep(Duration::from_millis(199)).await;
    assert!(artists.recorded().is_empty());

    let options = handle.await.unwrap().expect("query should be issued");
    assert!(start.elapsed() >= Duration::from_millis(200));

    let queries = artists.recorded();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search_term, "Led");
    assert_eq!(queries[0].limit, 300);
    assert_eq!(queries[0].sort_by, AlbumArtistListSort::Name);
    assert_eq!(queries[0].sort_order, SortOrder::Asc);
    assert_eq!(queries[0].start_index, 0);

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Led Zeppelin", "Ledisi"]);
}

#[tokio::test(start_paused = true)]
async fn test_artist_search_superseded_within_window() {
    let (model, _) = setup();
    let artists = RecordingArtists::new(&["Led Zeppelin", "Zeppet Band"]);

    let first = spawn_search(model.prepare_artist_search("Led"), artists.clone());
    sleep(Duration::from_millis(50)).await;
    let second = spawn_search(model.prepare_artist_search("Zep"), artists.clone());

    assert_eq!(first.await.unwrap(), None);
    assert!(second.await.unwrap().is_some());

    let queries = artists.recorded();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search_term, "Zep");
}

#[tokio::test(start_paused = true)]
async fn test_empty_artist_search_suppresses_fetch() {
    let (model, _) = setup();
    let artists = RecordingArtists::new(&["Led Zeppelin"]);

    let typed = spawn_search(model.prepare_artist_search("Led"), artists.clone());
    sleep(Duration::from_millis(10)).await;
    let cleared = spawn_search(model.prepare_artist_search(""), artists.clone());

    assert_eq!(typed.await.unwrap(), None);
    assert_eq!(cleared.await.unwrap(), None);
    assert!(artists.recorded().is_empty());
}

#[tokio::test]
async fn test_submitting_same_delta_twice_is_idempotent() {
    let (model, changes) = setup();

    let once = model.commit(&FilterEdit::Genre(Some("g1".to_string())));
    let twice = model.commit(&FilterEdit::Genre(Some("g1".to_string())));
    assert_eq!(once, twice);

    let once = model.commit(&FilterEdit::Toggle(FilterToggle::HasRating, true));
    let twice = model.commit(&FilterEdit::Toggle(FilterToggle::HasRating, true));
    assert_eq!(once, twice);

    assert_eq!(changes.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn test_panel_reads_store_changes_made_elsewhere() {
    let store = SharedFilterStore::default();
    let (model, _) = setup_with(store.clone());

    store.set_filters(FilterUpdate::artist(Some("ar-9".to_string())));
    let snapshot = model.commit(&FilterEdit::Toggle(FilterToggle::Compilation, true));

    assert_eq!(snapshot.artist_id.as_deref(), Some("ar-9"));
    assert_eq!(snapshot.nd_params.compilation, Some(true));
}

#[tokio::test(start_paused = true)]
async fn test_reset_drops_pending_edits() {
    let (model, _) = setup();
    let pending = spawn_settle(
        model.clone(),
        model.prepare(FilterEdit::Genre(Some("g1".to_string()))),
    );
    sleep(Duration::from_millis(100)).await;
    model.reset();

    assert_eq!(pending.await.unwrap(), None);
    assert_eq!(model.filter().nd_params.genre_id, None);
}
