pub mod cartesian;
pub mod cylindrical;
pub mod errors;
pub mod polar;

use std::io::{self, Write};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use cartesian::Cartesian;
use cylindrical::Cylindrical;
use errors::CoordinateSystemErrors;
use polar::Polar;

pub mod prelude {
    pub use crate::cartesian::*;
    pub use crate::cylindrical::*;
    pub use crate::errors::*;
    pub use crate::polar::*;
    pub use crate::{CoordinateConverter, CoordinateOperations, CoordinateSystem, Projection};
}

/// Wraps an angle in degrees with a sign-preserving modulo, so the result
/// lies in (-360, 360). `370` becomes `10`, `-30` stays `-30`.
pub fn wrap_degrees(angle: f64) -> f64 {
    angle % 360.0
}

/// The Cartesian x-y projection shared by every coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
}

impl Projection {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Projects a radial distance and an angle in degrees onto the x-y plane.
    ///
    /// # Arguments
    ///
    /// * `radius` - The distance from the origin.
    /// * `angle` - The angle from +x, in degrees.
    ///
    /// # Returns
    ///
    /// A `Projection` with `x = radius * cos(angle)` and `y = radius * sin(angle)`.
    pub fn from_radial(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    pub fn vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Projection {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Conversion of a coordinate system's native parameters to Cartesian x-y.
pub trait CoordinateConverter {
    fn get_x(&self) -> f64;
    fn get_y(&self) -> f64;

    /// Assigns the native parameters positionally. Input shorter than the
    /// number of native parameters is ignored and leaves the system unchanged.
    /// Values past the required count are ignored.
    fn set_coordinates(&mut self, values: &[f64]) -> Result<(), CoordinateSystemErrors>;

    /// Human readable summary of the native parameters, 2 decimals each.
    fn describe(&self) -> String;

    fn display_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe())
    }
}

/// Operations on the Cartesian projection.
///
/// `translate` moves only the projection. Native parameters (radius/angle,
/// rho/phi/z) keep their previous values, so `describe` still reports the
/// untranslated point afterwards.
pub trait CoordinateOperations {
    fn projection(&self) -> &Projection;
    fn projection_mut(&mut self) -> &mut Projection;

    fn distance(&self) -> f64 {
        self.projection().vec().norm()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let projection = self.projection_mut();
        projection.x += dx;
        projection.y += dy;
    }
}

/// Represents a point in one of the supported coordinate systems.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    Polar(Polar),
    Cartesian(Cartesian),
    Cylindrical(Cylindrical),
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::Cartesian(Cartesian::default())
    }
}

impl From<Polar> for CoordinateSystem {
    fn from(polar: Polar) -> Self {
        Self::Polar(polar)
    }
}

impl From<Cartesian> for CoordinateSystem {
    fn from(cartesian: Cartesian) -> Self {
        Self::Cartesian(cartesian)
    }
}

impl From<Cylindrical> for CoordinateSystem {
    fn from(cylindrical: Cylindrical) -> Self {
        Self::Cylindrical(cylindrical)
    }
}

impl CoordinateConverter for CoordinateSystem {
    fn get_x(&self) -> f64 {
        match self {
            CoordinateSystem::Polar(cs) => cs.get_x(),
            CoordinateSystem::Cartesian(cs) => cs.get_x(),
            CoordinateSystem::Cylindrical(cs) => cs.get_x(),
        }
    }

    fn get_y(&self) -> f64 {
        match self {
            CoordinateSystem::Polar(cs) => cs.get_y(),
            CoordinateSystem::Cartesian(cs) => cs.get_y(),
            CoordinateSystem::Cylindrical(cs) => cs.get_y(),
        }
    }

    fn set_coordinates(&mut self, values: &[f64]) -> Result<(), CoordinateSystemErrors> {
        match self {
            CoordinateSystem::Polar(cs) => cs.set_coordinates(values),
            CoordinateSystem::Cartesian(cs) => cs.set_coordinates(values),
            CoordinateSystem::Cylindrical(cs) => cs.set_coordinates(values),
        }
    }

    fn describe(&self) -> String {
        match self {
            CoordinateSystem::Polar(cs) => cs.describe(),
            CoordinateSystem::Cartesian(cs) => cs.describe(),
            CoordinateSystem::Cylindrical(cs) => cs.describe(),
        }
    }

    fn display_info(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            CoordinateSystem::Polar(cs) => cs.display_info(out),
            CoordinateSystem::Cartesian(cs) => cs.display_info(out),
            CoordinateSystem::Cylindrical(cs) => cs.display_info(out),
        }
    }
}

impl CoordinateOperations for CoordinateSystem {
    fn projection(&self) -> &Projection {
        match self {
            CoordinateSystem::Polar(cs) => cs.projection(),
            CoordinateSystem::Cartesian(cs) => cs.projection(),
            CoordinateSystem::Cylindrical(cs) => cs.projection(),
        }
    }

    fn projection_mut(&mut self) -> &mut Projection {
        match self {
            CoordinateSystem::Polar(cs) => cs.projection_mut(),
            CoordinateSystem::Cartesian(cs) => cs.projection_mut(),
            CoordinateSystem::Cylindrical(cs) => cs.projection_mut(),
        }
    }
}
