// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh generation and export
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    #[error("Empty mesh: {0}")]
    EmptyMesh(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generation error: {0}")]
    Generation(#[from] house_tour_core::Error),
}
