use super::{
    CoordinateConverter, CoordinateOperations, CoordinateSystem, Projection,
    cylindrical::Cylindrical, errors::CoordinateSystemErrors, polar::Polar,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Represents a point in Cartesian coordinates. The x-y projection is the
/// native representation, so there is nothing to derive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cartesian {
    projection: Projection,
}

impl Cartesian {
    /// Creates a new `Cartesian` instance with the given x and y components.
    pub fn new(x: f64, y: f64) -> Self {
        let cartesian = Self {
            projection: Projection::new(x, y),
        };
        tracing::debug!("created {:?}", cartesian);
        cartesian
    }

    /// Sets x directly. There is no derived state to update.
    pub fn set_x(&mut self, x: f64) {
        self.projection.x = x;
    }

    /// Sets y directly.
    pub fn set_y(&mut self, y: f64) {
        self.projection.y = y;
    }

    pub fn vec(&self) -> Vector2<f64> {
        self.projection.vec()
    }
}

impl From<Vector2<f64>> for Cartesian {
    fn from(v: Vector2<f64>) -> Cartesian {
        Self {
            projection: v.into(),
        }
    }
}

impl From<Polar> for Cartesian {
    /// Takes the current projection of the polar point, including any translation.
    fn from(polar: Polar) -> Self {
        Self {
            projection: *polar.projection(),
        }
    }
}

impl From<Cylindrical> for Cartesian {
    /// Takes the current x-y projection. Height is dropped.
    fn from(cyl: Cylindrical) -> Self {
        Self {
            projection: *cyl.projection(),
        }
    }
}

impl From<CoordinateSystem> for Cartesian {
    fn from(cs: CoordinateSystem) -> Self {
        match cs {
            CoordinateSystem::Cartesian(cs) => cs,
            CoordinateSystem::Polar(cs) => cs.into(),
            CoordinateSystem::Cylindrical(cs) => cs.into(),
        }
    }
}

impl CoordinateConverter for Cartesian {
    fn get_x(&self) -> f64 {
        self.projection.x
    }

    fn get_y(&self) -> f64 {
        self.projection.y
    }

    fn set_coordinates(&mut self, values: &[f64]) -> Result<(), CoordinateSystemErrors> {
        if let [x, y, ..] = values {
            self.projection = Projection::new(*x, *y);
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Cartesian: x={:.2}, y={:.2}", self.projection.x, self.projection.y)
    }
}

impl CoordinateOperations for Cartesian {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }
}
