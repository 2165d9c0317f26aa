use dioxus::prelude::*;

use crate::components::DomNode;
use crate::dom::NodeId;
use crate::hooks::use_page;

#[component]
pub fn Home() -> Element {
    let page = use_page();

    let on_click = {
        let page = page.clone();
        move |target: NodeId| page.click(target)
    };
    let on_change = {
        let page = page.clone();
        move |value: String| page.select_user(value)
    };

    rsx! {
        header { class: "page-header",
            h1 { "Employee Posts" }
        }
        DomNode {
            doc: page.snapshot,
            id: page.root,
            on_click,
            on_change,
        }
    }
}
