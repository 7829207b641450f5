use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use memory_core::model::{DeckOutline, PresenterSettings, PresenterSettingsDraft};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::deck::DeckTestHandles;
use crate::views::ebbinghaus::EbbinghausTestHandles;

#[derive(Clone)]
struct TestApp {
    outline: DeckOutline,
    settings: PresenterSettings,
}

impl UiApp for TestApp {
    fn outline(&self) -> DeckOutline {
        self.outline.clone()
    }

    fn settings(&self) -> PresenterSettings {
        self.settings.clone()
    }
}

#[derive(Props, Clone)]
struct DeckHarnessProps {
    app: Arc<TestApp>,
    deck_handles: DeckTestHandles,
    ebbinghaus_handles: EbbinghausTestHandles,
}

impl PartialEq for DeckHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DeckHarnessProps {}

#[component]
fn DeckRouterHarness(props: DeckHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.deck_handles.clone());
    use_context_provider(|| props.ebbinghaus_handles.clone());
    rsx! { Router::<Route> {} }
}

pub struct DeckHarness {
    pub dom: VirtualDom,
    pub deck: DeckTestHandles,
    pub ebbinghaus: EbbinghausTestHandles,
}

impl DeckHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
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

/// Harness over the full lecture; `start_slide` is 1-based like the CLI flag.
pub fn setup_deck_harness(start_slide: Option<usize>) -> DeckHarness {
    let outline = DeckOutline::memory_lecture();
    let settings = PresenterSettingsDraft {
        start_slide,
        ..PresenterSettingsDraft::new()
    }
    .validate(outline.len())
    .expect("valid settings");
    let deck = DeckTestHandles::default();
    let ebbinghaus = EbbinghausTestHandles::default();

    let dom = VirtualDom::new_with_props(
        DeckRouterHarness,
        DeckHarnessProps {
            app: Arc::new(TestApp { outline, settings }),
            deck_handles: deck.clone(),
            ebbinghaus_handles: ebbinghaus.clone(),
        },
    );

    DeckHarness {
        dom,
        deck,
        ebbinghaus,
    }
}
