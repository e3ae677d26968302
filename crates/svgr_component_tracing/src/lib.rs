use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static IS_INIT: AtomicBool = AtomicBool::new(false);

const TARGETS: &[&str] = &[
  "svgr_component",
  "svgr_component_compiler",
  "svgr_component_core",
  "svgr_component_jsx",
];

/// `svgr_component=trace,svgr_component_compiler=trace,...`
fn default_directives() -> String {
  TARGETS
    .iter()
    .map(|target| format!("{target}=trace"))
    .collect::<Vec<_>>()
    .join(",")
}

/// `RUST_LOG` when it is set, otherwise every crate of this workspace at `TRACE`.
fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()))
}

/// Installs the fmt subscriber once per process.
///
/// Returns `false` when a subscriber was already set, either by an earlier call
/// or by the embedding application.
pub fn init() -> bool {
  if IS_INIT.swap(true, Ordering::SeqCst) {
    return false;
  }
  tracing_subscriber::registry()
    .with(fmt::layer().with_target(true))
    .with(env_filter())
    .try_init()
    .is_ok()
}

/// Only pay for a subscriber when `LOG` is set. `LOG=1 cargo test` shows the
/// workspace crates at `TRACE`; `RUST_LOG` narrows or widens that.
pub fn enable_tracing_on_demand() {
  if std::env::var_os("LOG").is_some() {
    init();
  }
}
