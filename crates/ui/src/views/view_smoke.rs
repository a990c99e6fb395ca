use std::sync::Arc;

use dioxus::prelude::*;
use leetbat_core::model::Note;
use source::{InMemoryNotesSource, NotesSource, SourceError};

use super::test_harness::setup_dashboard_harness;
use crate::views::{NotesTable, StatsBar};
use crate::vm::{map_note_rows, map_stat_counters};

fn sample_notes() -> Vec<Note> {
    vec![
        Note::new("a", "Two Sum")
            .with_note("complement lookup")
            .with_topics(["Arrays"])
            .with_question_number(1_i64)
            .with_difficulty("Easy")
            .with_timestamp("2024-03-01T09:00:00Z")
            .with_url("https://leetcode.com/problems/two-sum/"),
        Note::new("b", "Edit Distance")
            .with_topics(["Arrays", "DP"])
            .with_question_number("72")
            .with_difficulty("Hard")
            .with_timestamp("2024-01-01T09:00:00Z")
            .with_url("https://leetcode.com/problems/edit-distance/"),
        Note::new("c", "Climbing Stairs")
            .with_topics(["DP"])
            .with_difficulty("Easy")
            .with_timestamp("2024-02-01T09:00:00Z"),
    ]
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_loaded_notes() {
    let source = InMemoryNotesSource::new(sample_notes());
    let mut harness = setup_dashboard_harness(Arc::new(source.clone()));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Easy: 2"), "missing easy count in {html}");
    assert!(html.contains("Medium: 0"), "missing medium count in {html}");
    assert!(html.contains("Hard: 1"), "missing hard count in {html}");
    assert!(html.contains("All Topics"), "missing topic select in {html}");
    assert!(html.contains("All Difficulties"), "missing difficulty select in {html}");
    assert!(html.contains("Newest First"), "missing sort select in {html}");
    assert!(html.contains("View Question"), "missing link in {html}");
    assert!(html.contains("noopener noreferrer"), "missing rel in {html}");

    // Default sort lists the oldest note first.
    let edit = position(&html, "Edit Distance");
    let stairs = position(&html, "Climbing Stairs");
    let two_sum = position(&html, "Two Sum");
    assert!(edit < stairs && stairs < two_sum, "unexpected order in {html}");

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_lists_topics_in_first_seen_order() {
    let mut harness = setup_dashboard_harness(Arc::new(InMemoryNotesSource::new(sample_notes())));
    harness.settle().await;
    let html = harness.render();

    let arrays = position(&html, "value=\"Arrays\"");
    let dp = position(&html, "value=\"DP\"");
    assert!(arrays < dp, "unexpected topic order in {html}");
}

struct DownSource;

#[async_trait::async_trait]
impl NotesSource for DownSource {
    async fn fetch_notes(&self) -> Result<Vec<Note>, SourceError> {
        Err(SourceError::NotAnArray)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_failure_renders_empty_table() {
    let mut harness = setup_dashboard_harness(Arc::new(DownSource));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Could not load notes."), "missing notice in {html}");
    assert!(html.contains("Easy: 0"), "missing zero count in {html}");
    assert!(html.contains("Question Name"), "missing table header in {html}");
    assert!(!html.contains("View Question"), "unexpected rows in {html}");
}

#[test]
fn table_renders_badges_and_chips() {
    let notes = vec![
        Note::new("x", "Mystery").with_difficulty("N/A-ish-unrecognized"),
        Note::new("z", "Graph Walk")
            .with_topics(["Graph", "BFS"])
            .with_difficulty("Medium"),
    ];
    let rows = map_note_rows(&notes);
    let html = dioxus_ssr::render_element(rsx! { NotesTable { rows } });

    assert!(html.contains("N/A-ish-unrecognized"), "missing literal badge in {html}");
    assert!(html.contains("badge--neutral"), "missing neutral tone in {html}");
    assert!(html.contains("badge--medium"), "missing medium tone in {html}");
    assert!(html.contains(">Graph<") && html.contains(">BFS<"), "missing chips in {html}");
    assert!(html.contains("Invalid Date"), "missing invalid date in {html}");
    assert!(html.contains(">2<"), "missing row number in {html}");
}

#[test]
fn missing_difficulty_renders_na_badge() {
    let rows = map_note_rows(&[Note::new("y", "Blank")]);
    let html = dioxus_ssr::render_element(rsx! { NotesTable { rows } });
    assert!(html.contains("N/A"), "missing N/A badge in {html}");
    assert!(html.contains("badge--neutral"), "missing neutral tone in {html}");
}

#[test]
fn stats_bar_renders_zero_counts() {
    let counters = map_stat_counters(&Default::default());
    let html = dioxus_ssr::render_element(rsx! { StatsBar { counters } });
    assert!(html.contains("Easy: 0"), "missing easy in {html}");
    assert!(html.contains("Medium: 0"), "missing medium in {html}");
    assert!(html.contains("Hard: 0"), "missing hard in {html}");
}
