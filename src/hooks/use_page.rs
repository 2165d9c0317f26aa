use std::rc::Rc;

use dioxus::prelude::*;
use futures::lock::Mutex;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::dom::{Document, DomEvent, NodeId};
use crate::page::PageController;

type SharedPage = Rc<Mutex<PageController<ApiClient>>>;

/// The page controller plus the snapshot of its document the view renders.
///
/// Events queue on the controller's async lock, so a click arriving while a
/// selection is still loading runs once that refresh has finished.
#[derive(Clone)]
pub struct PageHandle {
    pub snapshot: Signal<Document>,
    pub root: NodeId,
    controller: SharedPage,
}

pub fn use_page() -> PageHandle {
    let (controller, root, initial) = use_hook(|| {
        let config = AppConfig::load();
        let client = ApiClient::from_config(&config);
        tracing::info!("Using posts API at {}", client.base_url());
        let page = PageController::new(client, config);
        let root = page.root();
        let initial = Rc::new(page.document().clone());
        (Rc::new(Mutex::new(page)), root, initial)
    });
    let mut snapshot = use_signal(move || Document::clone(&initial));

    // Page load: publish every change, then fill the dropdown.
    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                let mut page = controller.lock().await;
                page.on_update(move |doc| snapshot.set(doc.clone()));
                page.init_app().await;
            });
        }
    });

    PageHandle {
        snapshot,
        root,
        controller,
    }
}

impl PageHandle {
    pub fn select_user(&self, value: String) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.lock().await.select_user(&value).await;
        });
    }

    pub fn click(&self, target: NodeId) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.lock().await.handle_click(&DomEvent::click(target));
        });
    }
}
