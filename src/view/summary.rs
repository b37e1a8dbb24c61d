//! Grid fill metrics.
//!
//! Computes staffing indicators from a materialized [`GridView`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Available | Cells that accept placement |
//! | Occupied | Available cells with an occupant |
//! | Fill Rate | occupied / available |
//! | Locked | Cells with the lock flag set |
//! | Annotated | Cells with a status tag |
//! | Open by Date | available − occupied, per date |

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::GridView;
use crate::models::{RoleCategory, StatusTag};

/// Fill metrics for one view.
#[derive(Debug, Clone, Default)]
pub struct GridSummary {
    /// Cells accepting placement.
    pub available_cells: usize,
    /// Available cells with an occupant.
    pub occupied_cells: usize,
    /// Locked cells.
    pub locked_cells: usize,
    /// Cells carrying a status tag.
    pub annotated_cells: usize,
    /// occupied / available (1.0 when nothing is available).
    pub fill_rate: f64,
    /// Unfilled available cells per date.
    pub open_by_date: BTreeMap<NaiveDate, usize>,
    /// Occupied cells per slot role.
    pub occupied_by_role: BTreeMap<RoleCategory, usize>,
}

impl GridSummary {
    /// Computes metrics from a view.
    pub fn calculate(view: &GridView) -> Self {
        let mut summary = GridSummary::default();
        for d in &view.dates {
            summary.open_by_date.insert(d.date, 0);
        }

        for row in &view.rows {
            for cell in &row.cells {
                if cell.state.locked {
                    summary.locked_cells += 1;
                }
                if cell.state.status != StatusTag::None {
                    summary.annotated_cells += 1;
                }
                if !cell.available {
                    continue;
                }
                summary.available_cells += 1;
                if cell.state.is_occupied() {
                    summary.occupied_cells += 1;
                    *summary.occupied_by_role.entry(row.role_category).or_insert(0) += 1;
                } else {
                    *summary.open_by_date.entry(cell.key.date).or_insert(0) += 1;
                }
            }
        }

        summary.fill_rate = if summary.available_cells == 0 {
            1.0
        } else {
            summary.occupied_cells as f64 / summary.available_cells as f64
        };
        summary
    }

    /// Whether every available cell is filled.
    pub fn is_fully_staffed(&self) -> bool {
        self.occupied_cells == self.available_cells
    }
}
