use leetbat_core::model::Difficulty;
use leetbat_core::{Selection, SortOrder, TopicSet};

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub value: String,
    pub label: String,
}

impl SelectOptionVm {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// "All Topics" followed by every topic in derivation order.
#[must_use]
pub fn topic_options(topics: &TopicSet) -> Vec<SelectOptionVm> {
    std::iter::once(SelectOptionVm::new("", "All Topics"))
        .chain(topics.iter().map(|topic| SelectOptionVm::new(topic, topic)))
        .collect()
}

#[must_use]
pub fn difficulty_options() -> Vec<SelectOptionVm> {
    std::iter::once(SelectOptionVm::new("", "All Difficulties"))
        .chain(
            Difficulty::ALL
                .into_iter()
                .map(|d| SelectOptionVm::new(d.as_str(), d.as_str())),
        )
        .collect()
}

#[must_use]
pub fn sort_options() -> Vec<SelectOptionVm> {
    SortOrder::ALL
        .into_iter()
        .map(|order| SelectOptionVm::new(order.as_str(), order.label()))
        .collect()
}

/// Current topic control value; `""` means all topics.
#[must_use]
pub fn topic_value(selection: &Selection) -> String {
    selection.topic.clone().unwrap_or_default()
}

/// Current difficulty control value; `""` means all difficulties.
#[must_use]
pub fn difficulty_value(selection: &Selection) -> String {
    selection
        .difficulty
        .map(|d| d.as_str().to_owned())
        .unwrap_or_default()
}
