//! Lifewheel is an interactive terminal wizard for the life-wheel
//! self-assessment method: score nine life dimensions across two years,
//! reflect, pick keywords, commit actions, and export the resulting plan.

pub mod build_info;
pub mod cli;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("lifewheel=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Lifewheel tracing initialized.");
    });
}
