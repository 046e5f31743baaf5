use super::{
    CoordinateConverter, CoordinateOperations, Projection,
    errors::{CoordinateSystemErrors, non_negative},
    wrap_degrees,
};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Represents a point in cylindrical coordinates: a polar point (rho, phi) in
/// the x-y plane plus a height z. Phi is in degrees and wrapped to (-360, 360).
/// The height never affects the x-y projection.
///
/// Like `Polar`, only the native parameters are serialized and the projection
/// is recomputed on load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CylindricalState")]
pub struct Cylindrical {
    rho: f64,
    phi: f64,
    z: f64,
    #[serde(skip_serializing)]
    projection: Projection,
}

impl Cylindrical {
    /// Creates a new `Cylindrical` instance with the given rho, phi, and z.
    ///
    /// # Arguments
    ///
    /// * `rho` - The distance from the z axis. Must not be negative.
    /// * `phi` - The azimuth angle in degrees.
    /// * `z` - The height above the x-y plane.
    ///
    /// # Returns
    ///
    /// A `Cylindrical` instance, or `InvalidArgument` if rho is negative.
    pub fn new(rho: f64, phi: f64, z: f64) -> Result<Self, CoordinateSystemErrors> {
        let mut cyl = Self::default();
        cyl.set_rho(rho)?;
        cyl.set_phi(phi);
        cyl.set_z(z);
        tracing::debug!("created {:?}", cyl);
        Ok(cyl)
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Sets rho and recomputes the projection. Fails with `InvalidArgument`
    /// if rho is negative or NaN, leaving the point unchanged.
    pub fn set_rho(&mut self, rho: f64) -> Result<(), CoordinateSystemErrors> {
        self.rho = non_negative("rho", rho)?;
        self.update_projection();
        Ok(())
    }

    /// Sets phi in degrees, wrapped to (-360, 360), and recomputes the projection.
    pub fn set_phi(&mut self, phi: f64) {
        self.phi = wrap_degrees(phi);
        self.update_projection();
    }

    /// Sets the height. The projection is not affected.
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    fn update_projection(&mut self) {
        self.projection = Projection::from_radial(self.rho, self.phi);
    }
}

impl CoordinateConverter for Cylindrical {
    fn get_x(&self) -> f64 {
        self.projection.x
    }

    fn get_y(&self) -> f64 {
        self.projection.y
    }

    fn set_coordinates(&mut self, values: &[f64]) -> Result<(), CoordinateSystemErrors> {
        if let [rho, phi, z, ..] = values {
            self.set_rho(*rho)?;
            self.set_phi(*phi);
            self.set_z(*z);
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "Cylindrical: ρ={:.2}, φ={:.2}°, z={:.2}",
            self.rho, self.phi, self.z
        )
    }

    fn display_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe())?;
        writeln!(out, "  Z={:.2}", self.z)
    }
}

impl CoordinateOperations for Cylindrical {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }
}

#[derive(Deserialize)]
struct CylindricalState {
    rho: f64,
    phi: f64,
    z: f64,
}

impl TryFrom<CylindricalState> for Cylindrical {
    type Error = CoordinateSystemErrors;

    fn try_from(state: CylindricalState) -> Result<Self, Self::Error> {
        Self::new(state.rho, state.phi, state.z)
    }
}
