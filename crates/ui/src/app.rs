use dioxus::prelude::*;
use dioxus_router::Router;
use tracing::error;

use crate::routes::Route;

const STYLESHEET: Asset = asset!("/assets/style.css");

/// Window title and page heading.
pub(crate) const APP_TITLE: &str = "LeetBat";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLESHEET }
        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    error!(?errors, "dashboard failed to render");
                    rsx! {
                        section { class: "fatal",
                            h2 { "The dashboard could not be displayed." }
                            pre { "{errors:?}" }
                        }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
