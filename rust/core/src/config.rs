// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunable constants for the layout and tour planners

use crate::types::PlotSize;
use serde::{Deserialize, Serialize};

/// Configuration for house generation
///
/// All lengths are in meters, all durations in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Plot used when the plot size text cannot be parsed
    pub default_plot: PlotSize,
    /// Share of the plot covered by the house footprint
    pub footprint_ratio: f64,
    /// Upper bound for the footprint width
    pub max_width: f64,
    /// Upper bound for the footprint length
    pub max_length: f64,
    /// Height of a single storey
    pub floor_height: f64,
    /// Depth of the entry hallway placed in front of the footprint
    pub hallway_depth: f64,
    /// Living room size as a multiple of the per-room unit
    pub living_scale: f64,
    /// Bathroom size as a multiple of the per-room unit
    pub bathroom_scale: f64,
    /// Dwell time on the opening exterior shot
    pub exterior_dwell: f64,
    /// Dwell time on each room
    pub interior_dwell: f64,
    /// Dwell time on the closing exterior shot
    pub final_dwell: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_plot: PlotSize::new(20.0, 30.0),
            footprint_ratio: 0.8,
            max_width: 25.0,
            max_length: 35.0,
            floor_height: 3.0, // Default 3m floor height
            hallway_depth: 2.0,
            living_scale: 1.5,
            bathroom_scale: 0.8,
            exterior_dwell: 3.0,
            interior_dwell: 2.0,
            final_dwell: 2.0,
        }
    }
}
