use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::app::APP_TITLE;
use crate::views::DashboardView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "{APP_TITLE}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
