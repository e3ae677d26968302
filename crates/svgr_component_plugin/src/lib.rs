mod args;
pub use args::*;
mod output;
pub use output::*;
mod plugin;
pub use plugin::*;

pub use async_trait;
