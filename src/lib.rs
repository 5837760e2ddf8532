//! Valuation and portfolio engine for a Taipei Metro station collection.
//!
//! The host UI owns rendering, the clipboard and the storage backend; this
//! crate owns the cart, the scoring formula, catalog search and the export
//! summary. Drive it through [`domain::AppState`].

pub mod config;
pub mod domain;
pub mod infra;
pub mod util;

pub use config::{CopyConfig, ReportConfig, StoreConfig};
pub use domain::*;
pub use infra::clipboard::{copy_text, ClipboardTransport, TransportError};
pub use util::{
    format::format_number,
    notice::{Notice, NoticeKind, Notices},
    persistence::{CartStore, JsonFileStore, MemoryStore, PersistSaveError},
};
