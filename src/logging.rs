//! Native log setup. Web builds use the logger Dioxus installs at launch.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a `RUST_LOG`-filtered fmt subscriber if none is set yet.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_posts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
