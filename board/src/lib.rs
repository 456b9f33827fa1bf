//! Drag-and-drop reorder engine for the task board.
//!
//! The engine moves a card between category zones, keeps the rendered order,
//! the header styling and the persisted `(status, position)` batch in step,
//! and plans the FLIP animation for the cards the move displaced. It knows
//! nothing about browsers: the host implements [`surface::Surface`] over the
//! DOM and forwards drag events; tests use [`memory::MemorySurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Drag lifecycle and the drop algorithm |
//! | [`surface`] | Trait the rendered board implements |
//! | [`placement`] | Reference resolution and the midpoint rule |
//! | [`flip`] | First/last rectangle diffing and CSS values |
//! | [`style`] | Status to header class mapping |
//! | [`session`] | Single-flight drag session state |
//! | [`queue`] | In-order, coalescing submission queue |
//! | [`memory`] | In-memory surface with a fixed layout |
//! | [`geometry`] | Points, rectangles, offsets |

pub mod engine;
pub mod flip;
pub mod geometry;
pub mod memory;
pub mod placement;
pub mod queue;
pub mod session;
pub mod style;
pub mod surface;

pub use engine::{DropError, DropOutcome, ReorderEngine};
pub use geometry::{Point, Rect};
pub use queue::PersistQueue;
pub use surface::Surface;
