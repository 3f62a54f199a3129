//! Planes

use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;

/// An infinite plane through `point` with normal `normal`. The plane is
/// two-sided: hits report the normal facing the incoming ray.
#[derive(Clone, Debug)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3f,

    /// Unit normal.
    pub normal: Normal3f,
}

impl Plane {
    /// Returns a new `Plane`.
    ///
    /// * `point`  - A point on the plane.
    /// * `normal` - The plane normal; it is normalized.
    pub fn new(point: Point3f, normal: Normal3f) -> Self {
        let normal = if normal.length_squared() > 0.0 {
            normal.normalize()
        } else {
            warn!("Plane through {point} has zero normal");
            normal
        };
        Self { point, normal }
    }
}

impl Shape for Plane {
    fn get_type(&self) -> &'static str {
        "plane"
    }

    fn intersect(&self, r: &Ray) -> Option<ShapeHit> {
        let denom = self.normal.dot(&r.d);
        if denom == 0.0 {
            return None;
        }

        let t = self.normal.dot(&(self.point - r.o)) / denom;
        if t <= SHADOW_EPSILON || t >= r.t_max {
            return None;
        }

        Some(ShapeHit::new(t, self.normal.face_forward(&(-r.d))))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ground() -> Plane {
        Plane::new(Point3f::zero(), Normal3::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn normal_is_normalized() {
        assert_eq!(ground().normal, Normal3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn hit_from_above() {
        let r = Ray::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(0.0, -1.0, 0.0), INFINITY);
        let hit = ground().intersect(&r).unwrap();
        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.n, Normal3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn hit_from_below_faces_ray() {
        let r = Ray::new(Point3::new(0.0, -3.0, 0.0), Vector3::new(0.0, 1.0, 0.0), INFINITY);
        let hit = ground().intersect(&r).unwrap();
        assert_eq!(hit.t, 3.0);
        assert_eq!(hit.n, Normal3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn parallel_and_receding_rays_miss() {
        let plane = ground();
        let parallel = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0), INFINITY);
        assert!(plane.intersect(&parallel).is_none());

        let receding = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0), INFINITY);
        assert!(!plane.intersect_p(&receding));
    }

    #[test]
    fn surface_origin_is_ignored() {
        let r = Ray::new(Point3f::zero(), Vector3::new(0.0, -1.0, 0.0), INFINITY);
        assert!(ground().intersect(&r).is_none());
    }

    proptest! {
        #[test]
        fn hit_point_lies_on_plane(
            x in -10.0..10.0f32,
            y in 0.5..10.0f32,
            dx in -1.0..1.0f32,
            dz in -1.0..1.0f32
        ) {
            let r = Ray::new(Point3::new(x, y, 0.0), Vector3::new(dx, -1.0, dz), INFINITY);
            let hit = ground().intersect(&r).unwrap();
            prop_assert!(r.at(hit.t).y.abs() < 1e-4);
            prop_assert!(hit.n.dot(&r.d) < 0.0);
        }
    }
}
