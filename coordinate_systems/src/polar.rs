use super::{
    CoordinateConverter, CoordinateOperations, Projection,
    errors::{CoordinateSystemErrors, non_negative},
    wrap_degrees,
};
use serde::{Deserialize, Serialize};

/// Represents a point in polar coordinates. The angle is in degrees, measured
/// from +x, and is kept wrapped to (-360, 360). The radius is never negative.
///
/// Only the radius and angle are serialized. Deserializing recomputes the
/// projection, so a translation applied before saving is not restored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolarState")]
pub struct Polar {
    radius: f64,
    angle: f64,
    #[serde(skip_serializing)]
    projection: Projection,
}

impl Polar {
    /// Creates a new `Polar` instance with the given radius and angle.
    ///
    /// # Arguments
    ///
    /// * `radius` - The distance from the origin. Must not be negative.
    /// * `angle` - The angle in degrees.
    ///
    /// # Returns
    ///
    /// A `Polar` instance, or `InvalidArgument` if the radius is negative.
    pub fn new(radius: f64, angle: f64) -> Result<Self, CoordinateSystemErrors> {
        let mut polar = Self::default();
        polar.set_radius(radius)?;
        polar.set_angle(angle);
        tracing::debug!("created {:?}", polar);
        Ok(polar)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sets the radius and recomputes the projection.
    ///
    /// # Arguments
    ///
    /// * `radius` - The distance from the origin. Must not be negative.
    ///
    /// # Returns
    ///
    /// `InvalidArgument` if the radius is negative or NaN, leaving the point unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), CoordinateSystemErrors> {
        self.radius = non_negative("radius", radius)?;
        self.update_projection();
        Ok(())
    }

    /// Sets the angle in degrees, wrapped to (-360, 360), and recomputes the projection.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = wrap_degrees(angle);
        self.update_projection();
    }

    fn update_projection(&mut self) {
        self.projection = Projection::from_radial(self.radius, self.angle);
    }
}

impl CoordinateConverter for Polar {
    fn get_x(&self) -> f64 {
        self.projection.x
    }

    fn get_y(&self) -> f64 {
        self.projection.y
    }

    fn set_coordinates(&mut self, values: &[f64]) -> Result<(), CoordinateSystemErrors> {
        if let [radius, angle, ..] = values {
            self.set_radius(*radius)?;
            self.set_angle(*angle);
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Polar: r={:.2}, φ={:.2}°", self.radius, self.angle)
    }
}

impl CoordinateOperations for Polar {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }
}

// deserialized values go through the setters, projection included
#[derive(Deserialize)]
struct PolarState {
    radius: f64,
    angle: f64,
}

impl TryFrom<PolarState> for Polar {
    type Error = CoordinateSystemErrors;

    fn try_from(state: PolarState) -> Result<Self, Self::Error> {
        let mut polar = Self::default();
        polar.set_radius(state.radius)?;
        polar.set_angle(state.angle);
        Ok(polar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_polar_new() {
        let polar = Polar::new(5.0, 45.0).unwrap();
        assert_abs_diff_eq!(polar.radius(), 5.0);
        assert_abs_diff_eq!(polar.angle(), 45.0);
        assert_abs_diff_eq!(polar.get_x(), 3.5355339059327378, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), 3.5355339059327378, epsilon = TOL);
    }

    #[test]
    fn test_polar_projection_matches_trig() {
        let cases = [(0.0, 10.0), (1.0, 0.0), (2.5, 120.0), (7.0, -200.0), (3.0, 359.0)];
        for (radius, angle) in cases {
            let polar = Polar::new(radius, angle).unwrap();
            let radians = angle * PI / 180.0;
            assert_abs_diff_eq!(polar.get_x(), radius * radians.cos(), epsilon = TOL);
            assert_abs_diff_eq!(polar.get_y(), radius * radians.sin(), epsilon = TOL);
        }
    }

    #[test]
    fn test_polar_default_is_origin() {
        let polar = Polar::default();
        assert_eq!(polar.radius(), 0.0);
        assert_eq!(polar.angle(), 0.0);
        assert_eq!(*polar.projection(), Projection::ZERO);
    }

    #[test]
    fn test_polar_negative_radius() {
        assert_eq!(
            Polar::new(-1.0, 45.0),
            Err(CoordinateSystemErrors::InvalidArgument {
                parameter: "radius",
                value: -1.0
            })
        );

        let mut polar = Polar::new(2.0, 30.0).unwrap();
        let before = polar;
        assert!(polar.set_radius(-0.5).is_err());
        assert_eq!(polar, before);
        assert!(polar.set_radius(f64::NAN).is_err());
    }

    #[test]
    fn test_polar_angle_wraps() {
        let mut polar = Polar::new(1.0, 370.0).unwrap();
        assert_abs_diff_eq!(polar.angle(), 10.0, epsilon = TOL);

        polar.set_angle(-30.0);
        assert_abs_diff_eq!(polar.angle(), -30.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_x(), (-PI / 6.0).cos(), epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), -0.5, epsilon = TOL);
    }

    #[test]
    fn test_polar_setters_update_projection() {
        let mut polar = Polar::new(1.0, 90.0).unwrap();
        polar.set_radius(4.0).unwrap();
        assert_abs_diff_eq!(polar.get_x(), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), 4.0, epsilon = TOL);
        polar.set_angle(180.0);
        assert_abs_diff_eq!(polar.get_x(), -4.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_polar_set_coordinates() {
        let mut polar = Polar::default();
        polar.set_coordinates(&[3.0, 400.0]).unwrap();
        assert_abs_diff_eq!(polar.radius(), 3.0);
        assert_abs_diff_eq!(polar.angle(), 40.0, epsilon = TOL);

        // too few values leaves everything as it was
        let before = polar;
        polar.set_coordinates(&[1.0]).unwrap();
        polar.set_coordinates(&[]).unwrap();
        assert_eq!(polar, before);

        // a bad radius stops before the angle is applied
        assert!(polar.set_coordinates(&[-3.0, 10.0]).is_err());
        assert_eq!(polar, before);
    }

    #[test]
    fn test_polar_translate_leaves_native_parameters() {
        let mut polar = Polar::new(5.0, 45.0).unwrap();
        let description = polar.describe();
        polar.translate(1.0, 2.0);
        assert_abs_diff_eq!(polar.get_x(), 4.5355339059327378, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), 5.5355339059327378, epsilon = TOL);
        assert_abs_diff_eq!(polar.radius(), 5.0);
        assert_abs_diff_eq!(polar.angle(), 45.0);
        assert_eq!(polar.describe(), description);
    }

    #[test]
    fn test_polar_copy_is_independent() {
        let original = Polar::new(5.0, 45.0).unwrap();
        let mut copy = original;
        assert_eq!(copy, original);
        copy.set_radius(1.0).unwrap();
        copy.set_angle(10.0);
        assert_abs_diff_eq!(original.radius(), 5.0);
        assert_abs_diff_eq!(original.angle(), 45.0);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_polar_describe() {
        let polar = Polar::new(1.234, -30.0).unwrap();
        assert_eq!(polar.describe(), "Polar: r=1.23, φ=-30.00°");
    }

    #[test]
    fn test_polar_deserialize_rejects_negative_radius() {
        assert!(ron::from_str::<Polar>("(radius: -1.0, angle: 0.0)").is_err());

        let polar: Polar = ron::from_str("(radius: 2.0, angle: 370.0)").unwrap();
        assert_abs_diff_eq!(polar.angle(), 10.0, epsilon = TOL);
    }

    /// The projection always follows the radius and angle after loading.
    #[test]
    fn test_polar_deserialize_recomputes_projection() {
        let polar: Polar = ron::from_str("(radius: 2.0, angle: 90.0)").unwrap();
        assert_abs_diff_eq!(polar.get_x(), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.get_y(), 2.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.distance(), 2.0, epsilon = TOL);

        // a stale projection in the input is ignored
        let s = "(radius: 2.0, angle: 90.0, projection: (x: 7.0, y: -3.0))";
        let polar: Polar = ron::from_str(s).unwrap();
        assert_abs_diff_eq!(polar.get_x(), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(polar.distance(), 2.0, epsilon = TOL);
    }

    #[test]
    fn test_polar_serialize_drops_translation() {
        let mut polar = Polar::new(1.0, 0.0).unwrap();
        polar.translate(3.0, 4.0);
        let s = ron::to_string(&polar).unwrap();
        assert!(!s.contains("projection"));
        let back: Polar = ron::from_str(&s).unwrap();
        assert_eq!(back, Polar::new(1.0, 0.0).unwrap());
    }
}
