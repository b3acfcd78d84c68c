//! Frontend-facing layer of the media shelf.
//!
//! Holds the pieces every frontend needs on top of the pure pipeline in
//! `shelf-core` and the store in `shelf-db`: settings, the per-screen list
//! view-model, writing exports to disk, cover image handling and bulk
//! import.

pub mod covers;
pub mod export_file;
pub mod import;
pub mod settings;
pub mod view;

pub use covers::{CoverError, CoverOptions, compress_cover, store_cover};
pub use export_file::write_export;
pub use import::{ImportError, ImportFormat, import_items, load_items, parse_items};
pub use settings::{Settings, SettingsError, load_settings, save_setting, settings_path};
pub use view::{FetchTicket, ListView, ViewState};
