mod loader;
mod model;

pub use loader::{
    ConfigLoader, ConfigSource, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult,
    RealFileSystem, USER_CONFIG_NAME,
};
pub use model::{ChartSettings, Config, DEFAULT_STYLESHEET};
