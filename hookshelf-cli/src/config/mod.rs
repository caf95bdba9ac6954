mod loader;
mod types;

pub use loader::ConfigLoader;
#[cfg(test)]
pub use loader::PROJECT_CONFIG_ENV;
pub use types::ShelfConfig;
