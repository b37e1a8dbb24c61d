//! Grid materialization and fill metrics.
//!
//! Read-only helpers for the host: `GridView` turns the catalog, a date
//! range and a table snapshot into a row/column matrix; `GridSummary`
//! computes fill indicators over it. The engine never depends on either.

mod grid;
mod summary;

pub use grid::{GridCell, GridFilter, GridRow, GridView};
pub use summary::GridSummary;
