mod plugin_driver;
pub use plugin_driver::*;

pub type BuildResult<T> = svgr_component_error::Result<T>;
pub type BuildError = svgr_component_error::Error;
