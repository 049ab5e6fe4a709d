// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House footprint and height derived from the plot

use crate::config::PlannerConfig;
use crate::types::{Dimensions, HouseType, PlotSize};

/// Compute the house envelope using the default planner configuration
pub fn compute_house_dimensions(plot: PlotSize, house_type: HouseType) -> Dimensions {
    compute_house_dimensions_with_config(plot, house_type, &PlannerConfig::default())
}

/// Compute the house envelope
///
/// The footprint covers `footprint_ratio` of the plot on each axis, capped
/// independently at `max_width` / `max_length`. Height is one storey unit per
/// floor and does not depend on the rooms.
pub fn compute_house_dimensions_with_config(
    plot: PlotSize,
    house_type: HouseType,
    config: &PlannerConfig,
) -> Dimensions {
    let width = (plot.width * config.footprint_ratio).min(config.max_width);
    let length = (plot.length * config.footprint_ratio).min(config.max_length);
    let height = config.floor_height * house_type.floors() as f64;

    Dimensions::new(width, length, height)
}
