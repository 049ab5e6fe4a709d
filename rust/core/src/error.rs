// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for house generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a house
#[derive(Error, Debug)]
pub enum Error {
    /// Any failure inside the generation pipeline. Carries no partial result.
    #[error("House generation failed: {0}")]
    Generation(String),

    #[error("Unknown house type: {0:?} (expected \"single\" or \"double\")")]
    UnknownHouseType(String),

    #[error("Unknown location type: {0:?} (expected \"city\" or \"village\")")]
    UnknownLocation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
