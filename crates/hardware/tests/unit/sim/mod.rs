/// Text image parsing and file loading.
pub mod loader;
