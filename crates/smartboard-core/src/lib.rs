//! SmartBoard Core Library
//!
//! Platform-agnostic drawing and dragging logic for the SmartBoard freehand
//! surface. Hosts feed pointer events into a [`SmartBoard`] and display the
//! path descriptions it produces.

pub mod broadcast;
pub mod config;
pub mod drag;
pub mod entity;
pub mod error;
pub mod input;
pub mod path;
pub mod registry;
pub mod surface;
pub mod svg;

pub use broadcast::{BoardObserver, Channel, PointerBroadcaster, PositionChanged};
pub use config::{PathStyle, SerializableColor, SurfaceConfig, ThumbnailConfig, css_color};
pub use drag::{DragController, DragState};
pub use entity::{EntityId, PathEntity};
pub use error::{BoardError, BoardResult};
pub use input::{PointerEvent, PointerState};
pub use path::PathBuilder;
pub use registry::EntityRegistry;
pub use surface::{PointerDown, SmartBoard};
