//! Employee Posts - browse an employee's posts and their comments
//!
//! The page is built into an owned element tree ([`dom::Document`]) by a
//! [`page::PageController`], which talks to the REST API through
//! [`client::PostsApi`]. The Dioxus view in [`pages`] mirrors that tree into
//! the browser and forwards user events back to the controller.
//!
//! ## Example
//! ```no_run
//! use employee_posts::prelude::*;
//!
//! # async fn run() {
//! let config = AppConfig::default();
//! let mut page = PageController::new(ApiClient::from_config(&config), config);
//!
//! page.init_app().await;
//! page.select_user("2").await;
//!
//! let main = page.main();
//! println!("{}", page.document().outer_html(main));
//! # }
//! ```

pub mod builders;
pub mod client;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod page;
pub mod pages;
pub mod render;
pub mod toggle;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(test)]
mod testing;

// Re-export common types
pub mod prelude {
    pub use crate::client::{ApiClient, PostsApi};
    pub use crate::config::AppConfig;
    pub use crate::dom::{Document, DomEvent, EventKind, Fragment, NodeId};
    pub use crate::error::{ClientError, ClientResult};
    pub use crate::page::{PageController, RefreshOutcome, SelectionOutcome};
    pub use crate::render::{PostRenderer, Rendered};
    pub use crate::toggle::{CommentsState, Toggled};
    pub use crate::types::{Comment, Company, Post, User};
}
