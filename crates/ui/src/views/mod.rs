mod dashboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::{DashboardView, FilterBar, NotesTable, StatsBar};
pub use state::{ViewError, ViewState, view_state_from_status};
