use coordinate_systems::errors::CoordinateSystemErrors;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoErrors {
    #[error("console error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    CoordinateSystem(#[from] CoordinateSystemErrors),
}
