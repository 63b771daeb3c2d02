//! Ray casting against a [`Scene`](crate::scene::Scene)
//!
//! - [`nearest_shapes`]: full scan over all SIMD batches.
//! - [`Tracer`]: cached sphere tracing, shadow probes and the entry point
//!   for shading.

mod march;
mod resolve;

pub use march::{Hit, Tracer};
pub use resolve::{nearest_shapes, NearestShapes};
