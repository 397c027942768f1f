mod common;

use common::{FakeFetcher, JULY_1_START, date, make_story, story_entries, test_app, today};
use hckr_tui::app::InputMode;
use hckr_tui::stories::{FilterMode, PageEntry, SortMode, StoryRecord, Tier};

/// 30 of today's stories then 4 of yesterday's.
fn front_page() -> Vec<PageEntry> {
    let mut entries = story_entries(
        (0..30)
            .map(|i| {
                make_story(
                    &format!("t{}", i),
                    300 - i * 10,
                    (i * 13) % 29,
                    JULY_1_START + 60 * (i + 1),
                )
            })
            .collect(),
    );
    entries.push(PageEntry::DayBoundary);
    entries.extend(story_entries(
        (0..4)
            .map(|i| make_story(&format!("y{}", i), 40 - i, 0, JULY_1_START - 60 * (i + 1)))
            .collect(),
    ));
    entries
}

fn loaded_fetcher() -> FakeFetcher {
    FakeFetcher::new().with_page(None, front_page())
}

async fn loaded_app() -> hckr_tui::app::App<FakeFetcher> {
    let mut app = test_app(loaded_fetcher());
    app.initial_load().await;
    app
}

fn shown_ids(app: &hckr_tui::app::App<FakeFetcher>) -> Vec<String> {
    app.display_rows().iter().map(|r| r.story.id.clone()).collect()
}

// --- loading ---

#[tokio::test]
async fn initial_load_shows_today() {
    let app = loaded_app().await;
    assert_eq!(app.current_date, today());
    assert_eq!(app.stories.len(), 30);
    assert!(app.loading.is_none());
    assert!(app.status_message.is_none());
    assert!(app.cache().contains(date(2024, 6, 30)));
}

#[tokio::test]
async fn initial_load_sorts_by_time_newest_first() {
    let app = loaded_app().await;
    assert_eq!(app.sort_mode, SortMode::Time);
    assert_eq!(app.stories[0].id, "t29");
    assert_eq!(app.stories[29].id, "t0");
}

#[tokio::test]
async fn empty_day_sets_status() {
    let fetcher = FakeFetcher::new().with_page(Some(date(2024, 6, 1)), Vec::new());
    let mut app = test_app(fetcher);
    app.go_to_date(date(2024, 6, 1)).await;
    assert!(app.stories.is_empty());
    assert_eq!(app.status_message.as_deref(), Some("No stories found"));
}

#[tokio::test]
async fn failed_fetch_shows_no_stories() {
    let mut app = test_app(FakeFetcher::new());
    app.initial_load().await;
    assert!(app.stories.is_empty());
    assert!(app.display_rows().is_empty());
    assert!(app.selected_story().is_none());
}

// --- move_up / move_down ---

#[tokio::test]
async fn move_down_increments() {
    let mut app = loaded_app().await;
    assert_eq!(app.selected_index, 0);
    app.move_down();
    assert_eq!(app.selected_index, 1);
}

#[tokio::test]
async fn move_up_at_top_stays() {
    let mut app = loaded_app().await;
    app.move_up();
    assert_eq!(app.selected_index, 0);
}

#[tokio::test]
async fn move_down_clamps_to_filtered_rows() {
    let mut app = loaded_app().await;
    app.set_filter(FilterMode::Top10);
    for _ in 0..20 {
        app.move_down();
    }
    assert_eq!(app.selected_index, 9);
}

#[test]
fn move_down_on_empty_stays() {
    let mut app = test_app(FakeFetcher::new());
    app.move_down();
    assert_eq!(app.selected_index, 0);
}

// --- filter / sort ---

#[tokio::test]
async fn set_filter_resets_selection() {
    let mut app = loaded_app().await;
    app.move_down();
    app.move_down();
    app.set_filter(FilterMode::Top20);
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.display_rows().len(), 20);
}

#[tokio::test]
async fn top_half_of_thirty() {
    let mut app = loaded_app().await;
    app.set_filter(FilterMode::TopHalf);
    assert_eq!(app.display_rows().len(), 15);
}

#[tokio::test]
async fn set_sort_points() {
    let mut app = loaded_app().await;
    app.move_down();
    app.set_sort(SortMode::Points);
    assert_eq!(app.selected_index, 0);
    let points: Vec<i64> = app.stories.iter().map(|s| s.points).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn sort_change_keeps_tiers() {
    let mut app = loaded_app().await;
    let tiers_before: Vec<(String, Tier)> = app
        .display_rows()
        .iter()
        .map(|r| (r.story.id.clone(), r.tier))
        .collect();

    app.set_sort(SortMode::Comments);

    for (id, tier) in tiers_before {
        let row = app
            .display_rows()
            .into_iter()
            .find(|r| r.story.id == id)
            .unwrap();
        assert_eq!(row.tier, tier, "tier changed for {}", id);
    }
}

#[tokio::test]
async fn tiers_follow_points_rank() {
    let app = loaded_app().await;
    let tier_of = |id: &str| {
        app.display_rows()
            .into_iter()
            .find(|r| r.story.id == id)
            .map(|r| r.tier)
    };
    assert_eq!(tier_of("t0"), Some(Tier::Top));
    assert_eq!(tier_of("t9"), Some(Tier::Top));
    assert_eq!(tier_of("t10"), Some(Tier::High));
    assert_eq!(tier_of("t19"), Some(Tier::High));
    assert_eq!(tier_of("t29"), Some(Tier::Low));
}

#[tokio::test]
async fn filter_view_keeps_sort_order() {
    let mut app = loaded_app().await;
    app.set_sort(SortMode::Comments);
    app.set_filter(FilterMode::Top10);
    let rows = app.display_rows();
    assert!(rows.iter().all(|r| r.story.points > 200));
    assert!(rows.windows(2).all(|w| w[0].story.comments >= w[1].story.comments));
}

#[tokio::test]
async fn cutoff_tie_keeps_same_top_10_under_comment_sort() {
    let mut day: Vec<StoryRecord> = (0..9)
        .map(|i| make_story(&format!("s{}", i), 100, 0, JULY_1_START + 60))
        .collect();
    day.push(make_story("x", 50, 1, JULY_1_START + 60));
    day.push(make_story("y", 50, 9, JULY_1_START + 60));
    let fetcher = FakeFetcher::new().with_page(None, story_entries(day));
    let mut app = test_app(fetcher);
    app.initial_load().await;
    app.set_filter(FilterMode::Top10);

    for sort in [SortMode::Points, SortMode::Comments, SortMode::Time] {
        app.set_sort(sort);
        let ids = shown_ids(&app);
        assert!(ids.contains(&"x".to_string()), "{:?}", sort);
        assert!(!ids.contains(&"y".to_string()), "{:?}", sort);
        assert!(app.display_rows().iter().all(|r| r.tier == Tier::Top));
    }
}

// --- title ---

#[tokio::test]
async fn title_shows_date_filter_and_sort() {
    let mut app = loaded_app().await;
    app.set_filter(FilterMode::TopHalf);
    app.set_sort(SortMode::Points);
    assert_eq!(app.title(), "hckrnews: 2024-07-01 | Top 50% | Sort: Points");
}

#[test]
fn title_while_loading() {
    let mut app = test_app(FakeFetcher::new());
    app.begin_loading("Updating stories cache...");
    assert_eq!(app.title(), "hckrnews: 2024-07-01 | Updating stories cache...");
}

// --- day navigation ---

#[tokio::test]
async fn prev_day_uses_cached_yesterday() {
    let mut app = loaded_app().await;
    app.prev_day().await;
    assert_eq!(app.current_date, date(2024, 6, 30));
    assert_eq!(app.stories.len(), 4);
    assert_eq!(app.fetcher().calls(), vec![None]);
}

#[tokio::test]
async fn prev_day_fetches_dated_page() {
    let fetcher = loaded_fetcher().with_page(
        Some(date(2024, 6, 29)),
        story_entries(vec![make_story("old", 5, 1, 0)]),
    );
    let mut app = test_app(fetcher);
    app.initial_load().await;
    app.prev_day().await;
    app.prev_day().await;
    assert_eq!(app.current_date, date(2024, 6, 29));
    assert_eq!(shown_ids(&app), vec!["old"]);
    assert_eq!(app.fetcher().calls(), vec![None, Some(date(2024, 6, 29))]);
}

#[tokio::test]
async fn next_day_on_today_is_noop() {
    let mut app = loaded_app().await;
    assert!(!app.can_go_later());
    app.next_day().await;
    assert_eq!(app.current_date, today());
}

#[tokio::test]
async fn next_day_returns_to_today() {
    let mut app = loaded_app().await;
    app.prev_day().await;
    assert!(app.can_go_later());
    app.next_day().await;
    assert_eq!(app.current_date, today());
    assert_eq!(app.stories.len(), 30);
}

#[tokio::test]
async fn go_to_future_date_clamps_to_today() {
    let mut app = loaded_app().await;
    app.go_to_date(date(2024, 8, 1)).await;
    assert_eq!(app.current_date, today());
}

#[tokio::test]
async fn date_change_resets_selection() {
    let mut app = loaded_app().await;
    app.move_down();
    app.prev_day().await;
    assert_eq!(app.selected_index, 0);
}

// --- refresh ---

#[tokio::test]
async fn refresh_picks_up_new_stories() {
    let mut app = loaded_app().await;
    app.fetcher().set_page(
        None,
        story_entries(vec![make_story("fresh", 999, 0, JULY_1_START + 5)]),
    );
    app.refresh().await;
    assert_eq!(shown_ids(&app), vec!["fresh"]);
    assert!(app.status_message.is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_stories() {
    let mut app = loaded_app().await;
    app.fetcher().fail(None);
    app.begin_loading("Refreshing...");
    app.refresh().await;
    assert_eq!(app.stories.len(), 30);
    assert_eq!(app.cache().get(today()).map(|s| s.len()), Some(30));
    assert_eq!(app.status_message.as_deref(), Some("Refresh failed"));
    assert!(app.loading.is_none());
}

// --- selection / urls ---

#[tokio::test]
async fn selected_urls() {
    let mut app = loaded_app().await;
    app.set_sort(SortMode::Points);
    assert_eq!(app.selected_story().map(|s| s.id.as_str()), Some("t0"));
    assert_eq!(
        app.selected_story_url().as_deref(),
        Some("https://example.com/t0")
    );
    assert_eq!(
        app.selected_comments_url().as_deref(),
        Some("https://news.ycombinator.com/item?id=t0")
    );
}

#[tokio::test]
async fn blank_link_has_no_story_url() {
    let story = StoryRecord {
        link: "   ".to_string(),
        ..make_story("nolink", 10, 0, JULY_1_START + 1)
    };
    let fetcher = FakeFetcher::new().with_page(None, story_entries(vec![story]));
    let mut app = test_app(fetcher);
    app.initial_load().await;
    assert!(app.selected_story_url().is_none());
    assert!(app.selected_comments_url().is_some());
}

// --- help ---

#[test]
fn help_mode_toggles() {
    let mut app = test_app(FakeFetcher::new());
    app.show_help();
    assert_eq!(app.input_mode, InputMode::Help);
    app.close_help();
    assert_eq!(app.input_mode, InputMode::Normal);
}
