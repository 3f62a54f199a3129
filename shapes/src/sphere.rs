//! Spheres

use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;

/// A sphere given by its center and radius.
#[derive(Clone, Debug)]
pub struct Sphere {
    /// Center.
    pub center: Point3f,

    /// Radius.
    pub radius: Float,
}

impl Sphere {
    /// Returns a new `Sphere`.
    ///
    /// * `center` - Center.
    /// * `radius` - Radius.
    pub fn new(center: Point3f, radius: Float) -> Self {
        let radius = abs(radius);
        if radius == 0.0 {
            warn!("Sphere at {center} has zero radius");
        }
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn get_type(&self) -> &'static str {
        "sphere"
    }

    fn intersect(&self, r: &Ray) -> Option<ShapeHit> {
        // Compute quadratic sphere coefficients.
        let oc = r.o - self.center;
        let a = r.d.length_squared();
        let b = 2.0 * oc.dot(&r.d);
        let c = oc.length_squared() - self.radius * self.radius;

        // Solve quadratic equation for t values.
        let (t0, t1) = quadratic(a, b, c)?;

        // Check t0 and t1 for nearest intersection.
        let t = if t0 > SHADOW_EPSILON {
            t0
        } else if t1 > SHADOW_EPSILON {
            t1
        } else {
            return None;
        };
        if t >= r.t_max {
            return None;
        }

        let n = Normal3f::from(r.at(t) - self.center).normalize();
        Some(ShapeHit::new(t, n))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0)
    }

    #[test]
    fn hit_from_outside() {
        let r = Ray::new(Point3f::zero(), Vector3::new(0.0, 0.0, 1.0), INFINITY);
        let hit = unit_sphere().intersect(&r).unwrap();
        assert!(approx_eq!(f32, hit.t, 4.0, epsilon = 0.0001));
        assert_eq!(hit.n, Normal3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn hit_from_inside_uses_far_root() {
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 1.0, 0.0), INFINITY);
        let hit = unit_sphere().intersect(&r).unwrap();
        assert!(approx_eq!(f32, hit.t, 1.0, epsilon = 0.0001));
        assert!(approx_eq!(f32, hit.n.y, 1.0, epsilon = 0.0001));
    }

    #[test]
    fn miss_and_t_max() {
        let sphere = unit_sphere();
        let miss = Ray::new(Point3f::zero(), Vector3::new(0.0, 1.0, 0.0), INFINITY);
        assert!(sphere.intersect(&miss).is_none());
        assert!(!sphere.intersect_p(&miss));

        let short = Ray::new(Point3f::zero(), Vector3::new(0.0, 0.0, 1.0), 3.5);
        assert!(sphere.intersect(&short).is_none());

        let behind = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 1.0), INFINITY);
        assert!(sphere.intersect(&behind).is_none());
    }

    proptest! {
        #[test]
        fn hit_point_lies_on_sphere(x in -0.9..0.9f32, y in -0.9..0.9f32) {
            let sphere = unit_sphere();
            let r = Ray::new(Point3::new(x, y, 0.0), Vector3::new(0.0, 0.0, 1.0), INFINITY);
            let hit = sphere.intersect(&r).unwrap();
            let p = r.at(hit.t);
            prop_assert!((p.distance(&sphere.center) - 1.0).abs() < 1e-3);
            prop_assert!((hit.n.length() - 1.0).abs() < 1e-4);
            prop_assert!(hit.n.dot(&r.d) < 0.0);
        }
    }
}
