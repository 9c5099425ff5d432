//! SmartBoard Application
//!
//! Shell around the core board: replays recorded pointer scripts, writes the
//! resulting SVG and keeps a thumbnail up to date.

mod app;
mod error;
mod script;
mod thumbnail;

pub use app::{App, AppConfig, Cli, RunSummary};
pub use error::{AppError, AppResult};
pub use script::{PointerScript, ScriptEvent};
pub use thumbnail::ThumbnailWriter;
