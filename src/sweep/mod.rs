//! Sweep-line machinery for the simple polygon test.
//!
//! Events are the endpoints of every ring edge sorted left to right. The
//! sweep line keeps the edges it currently crosses in vertical order, so
//! only neighbours ever need an intersection test.

mod event;
mod segment;
mod shamos_hoey;
mod sweep_line;

pub use event::{Event, EventQueue, EventType};
pub use segment::{Segment, SegmentId};
pub use shamos_hoey::ShamosHoey;
pub use sweep_line::SweepLine;
