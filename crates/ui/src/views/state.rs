use services::LoadStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoadFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LoadFailed => "Could not load notes.",
        }
    }
}

/// Render state of the one-shot notes load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_status(status: LoadStatus) -> ViewState {
    match status {
        LoadStatus::Pending => ViewState::Loading,
        LoadStatus::Loaded => ViewState::Ready,
        LoadStatus::Failed => ViewState::Error(ViewError::LoadFailed),
    }
}
