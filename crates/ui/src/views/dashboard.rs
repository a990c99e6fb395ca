use dioxus::prelude::*;
use leetbat_core::{Selection, SortOrder};
use services::DashboardState;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_status};
use crate::vm::{
    DifficultyBadgeVm, NoteRowVm, SelectOptionVm, StatCounterVm, difficulty_options,
    difficulty_value, map_note_rows, map_stat_counters, sort_options, topic_options, topic_value,
};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();
    let mut state = use_signal(DashboardState::default);

    // Reads no signals, so it runs once per mount.
    let _load = use_resource(move || {
        let notes = notes.clone();
        async move {
            let outcome = notes.refresh().await;
            let next = outcome.apply(&state.peek());
            state.set(next);
        }
    });

    let rows = use_memo(move || map_note_rows(&state.read().display_list()));

    let snapshot = state.read().clone();
    let view_state = view_state_from_status(snapshot.status());
    let counters = map_stat_counters(&snapshot.stats().difficulty_counts);
    let topics = topic_options(&snapshot.stats().topics);
    let selection = snapshot.selection();

    rsx! {
        div { class: "dashboard",
            StatsBar { counters }

            FilterBar {
                topic_options: topics,
                topic_value: topic_value(selection),
                difficulty_value: difficulty_value(selection),
                sort_value: selection.sort.as_str().to_owned(),
                on_topic_change: move |value: String| {
                    let next = state.peek().with_topic(Selection::topic_from_value(&value));
                    state.set(next);
                },
                on_difficulty_change: move |value: String| {
                    let difficulty = Selection::difficulty_from_value(&value).unwrap_or_else(|err| {
                        warn!(error = %err, "ignoring difficulty selection");
                        None
                    });
                    let next = state.peek().with_difficulty(difficulty);
                    state.set(next);
                },
                on_sort_change: move |value: String| {
                    let sort = value.parse::<SortOrder>().unwrap_or_else(|err| {
                        warn!(error = %err, "ignoring sort selection");
                        SortOrder::default()
                    });
                    let next = state.peek().with_sort(sort);
                    state.set(next);
                },
            }

            match view_state {
                ViewState::Loading => rsx! {
                    p { class: "status", "Loading notes..." }
                },
                ViewState::Ready => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { class: "status status--error", "{err.message()}" }
                },
            }

            NotesTable { rows: rows() }
        }
    }
}

#[component]
pub fn StatsBar(counters: Vec<StatCounterVm>) -> Element {
    rsx! {
        div { class: "stats",
            for counter in counters {
                span { class: "stat", "{counter.label}: {counter.count}" }
            }
        }
    }
}

#[component]
pub fn FilterBar(
    topic_options: Vec<SelectOptionVm>,
    topic_value: String,
    difficulty_value: String,
    sort_value: String,
    on_topic_change: EventHandler<String>,
    on_difficulty_change: EventHandler<String>,
    on_sort_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "filters",
            select {
                id: "topic",
                class: "filter-select",
                value: "{topic_value}",
                onchange: move |evt| on_topic_change.call(evt.value()),
                SelectOptions { options: topic_options, selected: topic_value.clone() }
            }
            select {
                id: "difficulty",
                class: "filter-select",
                value: "{difficulty_value}",
                onchange: move |evt| on_difficulty_change.call(evt.value()),
                SelectOptions { options: difficulty_options(), selected: difficulty_value.clone() }
            }
            select {
                id: "sort",
                class: "filter-select",
                value: "{sort_value}",
                onchange: move |evt| on_sort_change.call(evt.value()),
                SelectOptions { options: sort_options(), selected: sort_value.clone() }
            }
        }
    }
}

#[component]
fn SelectOptions(options: Vec<SelectOptionVm>, selected: String) -> Element {
    rsx! {
        for opt in options {
            option {
                value: "{opt.value}",
                selected: opt.value == selected,
                "{opt.label}"
            }
        }
    }
}

#[component]
pub fn NotesTable(rows: Vec<NoteRowVm>) -> Element {
    rsx! {
        div { class: "table-wrap",
            table { class: "notes-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Question Name" }
                        th { "Note" }
                        th { "Topics" }
                        th { "Question Number" }
                        th { "Difficulty" }
                        th { "Timestamp" }
                        th { "URL" }
                    }
                }
                tbody {
                    for row in rows {
                        NoteRow { key: "{row.key}", row }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteRow(row: NoteRowVm) -> Element {
    rsx! {
        tr { class: "note-row",
            td { "{row.number}" }
            td { "{row.question_name}" }
            td { "{row.note}" }
            td {
                div { class: "topic-chips",
                    for topic in row.topics.iter() {
                        span { class: "topic-chip", "{topic}" }
                    }
                }
            }
            td { "{row.question_number}" }
            td {
                DifficultyBadge { badge: row.difficulty.clone() }
            }
            td { "{row.timestamp_str}" }
            td {
                a {
                    class: "question-link",
                    href: "{row.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Question"
                }
            }
        }
    }
}

#[component]
fn DifficultyBadge(badge: DifficultyBadgeVm) -> Element {
    rsx! {
        span { class: "{badge.tone.class()}", "{badge.text}" }
    }
}
