use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, NotesService};
use source::NotesSource;

use crate::context::{UiApp, build_app_context};
use crate::views::DashboardView;

#[derive(Clone)]
struct TestApp {
    notes: Arc<NotesService>,
}

impl UiApp for TestApp {
    fn notes_service(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DashboardHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { DashboardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then let the one-shot load resolve and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_dashboard_harness(source: Arc<dyn NotesSource>) -> ViewHarness {
    let services = AppServices::with_source(source);
    let app = Arc::new(TestApp {
        notes: services.notes(),
    });
    let dom = VirtualDom::new_with_props(DashboardHarness, ViewHarnessProps { app });
    ViewHarness { dom }
}
