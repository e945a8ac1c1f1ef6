//! Horizon Reveal - a swipe-to-reveal options menu engine for list rows.
//!
//! Attaches a slide-out menu of action buttons to a reusable list or grid
//! cell: swiping or panning the row reveals the menu from a configurable
//! edge, a toggle icon opens and closes it, and tapping an item fires its
//! callback. The engine is headless; the host supplies cell frames, gesture
//! callbacks, and a frame clock, and renders the rectangles this crate
//! computes.
//!
//! # Example
//!
//! ```no_run
//! use horizon_reveal::{ActionItem, GestureKind, HostCellAdapter};
//! use horizon_reveal_core::Rect;
//!
//! fn main() -> horizon_reveal::Result<()> {
//!     let mut adapter = HostCellAdapter::new();
//!     let items = vec![
//!         ActionItem::new("Delete", "trash").on_activate(|item| {
//!             println!("activated {}", item.title());
//!         }),
//!         ActionItem::new("Save", "disk"),
//!     ];
//!     let key = adapter.bind(0, Rect::new(0.0, 0.0, 320.0, 88.0), items, None)?;
//!     adapter.toggle_pressed(key)?;
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod controller;
pub mod delegate;
pub mod error;
pub mod gesture;
pub mod host;
pub mod item;
pub mod layout;
pub mod style;

pub use controller::{Edge, MenuState, RevealController};
pub use delegate::{DefaultRevealDelegate, RevealDelegate};
pub use error::{Error, Result};
pub use gesture::{GestureKind, MenuAction, PanTracker, SwipeDirection};
pub use host::{CellKey, HostCellAdapter};
pub use item::{ActionItem, ItemStyle};
pub use layout::{ArrangedMenu, ContentAlignment, ContentMargins, MenuLayout, arrange};
pub use style::MenuStyle;
