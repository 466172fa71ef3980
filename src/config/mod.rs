mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAME, default_toml, load_default, load_from_path};
pub use model::{Config, ScanConfig};
