//! Quadrilateral Area Light Source

use pbrt_core::geometry::*;
use pbrt_core::light::*;
use pbrt_core::pbrt::*;
use pbrt_core::rng::ONE_MINUS_EPSILON;
use pbrt_core::sampling::*;
use pbrt_core::spectrum::*;

/// Strategy used to turn a 2-D sample into a point on the quad.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum QuadSampling {
    /// Returns `p0 + u * e1 + v * e2`. Exact for parallelograms; for other
    /// quads samples may fall in the parallelogram completion outside the
    /// nominal quad.
    #[default]
    Parallelogram,

    /// Picks one of the two triangles `(p0, p1, p3)` and `(p2, p3, p1)` in
    /// proportion to its area and samples it uniformly. Samples always lie
    /// on the quad.
    TrianglePair,
}

/// Implements an area light whose emitting surface is a quadrilateral given by
/// four points in winding order. Emission falls off with the inverse square of
/// the distance to the sampled point.
#[derive(Clone, Debug)]
pub struct QuadAreaLight {
    /// Radiance at unit distance.
    pub intensity: Spectrum,

    /// Corners in winding order.
    pub points: [Point3f; 4],

    /// Edge `p1 - p0`.
    pub e1: Vector3f,

    /// Edge `p3 - p0`.
    pub e2: Vector3f,

    /// Unit normal `e1 x e2`, or zero for a degenerate quad.
    pub n: Normal3f,

    /// Areas of the triangles `(p0, p1, p3)` and `(p2, p3, p1)`.
    pub triangle_areas: [Float; 2],

    /// Total surface area.
    pub area: Float,

    /// Sampling strategy.
    pub sampling: QuadSampling,
}

impl QuadAreaLight {
    /// Returns a new `QuadAreaLight`.
    ///
    /// * `intensity` - Radiance at unit distance.
    /// * `points`    - Corners `p0..p3` in winding order.
    /// * `sampling`  - Sampling strategy.
    pub fn new(intensity: Spectrum, points: [Point3f; 4], sampling: QuadSampling) -> Self {
        let [p0, p1, p2, p3] = points;
        let e1 = p1 - p0;
        let e2 = p3 - p0;

        let c = e1.cross(&e2);
        let n = c.try_normalize().map_or(Normal3f::ZERO, Normal3f::from);
        if n == Normal3f::ZERO {
            warn!("Degenerate area light {p0} {p1} {p2} {p3}");
        }

        let triangle_areas = [0.5 * c.length(), 0.5 * (p1 - p2).cross(&(p3 - p2)).length()];
        let area = triangle_areas[0] + triangle_areas[1];

        Self {
            intensity,
            points,
            e1,
            e2,
            n,
            triangle_areas,
            area,
            sampling,
        }
    }

    /// Returns a point on the light for the given sample.
    ///
    /// * `u` - Sample value in `[0, 1)^2`.
    pub fn sample_point(&self, u: &Point2f) -> Point3f {
        match self.sampling {
            QuadSampling::Parallelogram => self.points[0] + self.e1 * u[0] + self.e2 * u[1],
            QuadSampling::TrianglePair => self.sample_triangle_pair(u),
        }
    }

    /// Samples one of the two triangles, choosing by area with `u[0]` and then
    /// reusing the remapped `u[0]` inside the chosen triangle.
    ///
    /// * `u` - Sample value in `[0, 1)^2`.
    fn sample_triangle_pair(&self, u: &Point2f) -> Point3f {
        let [p0, p1, p2, p3] = self.points;
        if self.area <= 0.0 {
            return p0 + self.e1 * u[0] + self.e2 * u[1];
        }

        let f = self.triangle_areas[0] / self.area;
        let (a, b, c, u0) = if u[0] < f {
            (p0, p1, p3, u[0] / f)
        } else {
            (p2, p3, p1, (u[0] - f) / (1.0 - f))
        };

        let bary = uniform_sample_triangle(&Point2f::new(min(u0, ONE_MINUS_EPSILON), u[1]));
        a + (b - a) * bary[1] + (c - a) * (1.0 - bary[0] - bary[1])
    }
}

impl Light for QuadAreaLight {
    /// Samples a point on the quad and returns the direction toward it and the
    /// radiance arriving at `p`, or `None` if `p` coincides with the sample.
    ///
    /// * `p` - The shading point.
    /// * `u` - Sample value for Monte Carlo integration.
    fn illuminate(&self, p: &Point3f, u: &Point2f) -> Option<Li> {
        let w = self.sample_point(u) - *p;
        let d2 = w.length_squared();
        if d2 == 0.0 || !d2.is_finite() {
            return None;
        }

        let distance = d2.sqrt();
        Some(Li::new(w / distance, distance, self.intensity / d2))
    }

    /// Return the total emitted power, one-sided.
    fn power(&self) -> Spectrum {
        self.intensity * (self.area * PI)
    }
}

impl AreaLight for QuadAreaLight {
    fn normal(&self, _p: &Point3f) -> Normal3f {
        self.n
    }

    fn area(&self) -> Float {
        self.area
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::rng::RNG;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    fn rect(sampling: QuadSampling) -> QuadAreaLight {
        QuadAreaLight::new(
            Spectrum::new(10.0),
            [
                Point3::new(0.0, 4.0, 0.0),
                Point3::new(2.0, 4.0, 0.0),
                Point3::new(2.0, 4.0, 3.0),
                Point3::new(0.0, 4.0, 3.0),
            ],
            sampling,
        )
    }

    fn skewed(points: [Point3f; 4]) -> QuadAreaLight {
        QuadAreaLight::new(Spectrum::new(1.0), points, QuadSampling::TrianglePair)
    }

    fn bent() -> [Point3f; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn parallelogram_area() {
        let light = rect(QuadSampling::Parallelogram);
        assert!(approx_eq!(f32, light.area(), 6.0, epsilon = 0.0001));
        assert!(approx_eq!(
            f32,
            light.area(),
            light.e1.cross(&light.e2).length(),
            epsilon = 0.0001
        ));

        let sheared = QuadAreaLight::new(
            Spectrum::new(1.0),
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            QuadSampling::Parallelogram,
        );
        assert!(approx_eq!(f32, sheared.area(), 2.0, epsilon = 0.0001));
    }

    #[test]
    fn non_planar_area_is_sum_of_triangles() {
        let light = skewed(bent());
        let expected = 0.5 + 0.5 * (3.0 as Float).sqrt();
        assert!(approx_eq!(f32, light.area(), expected, epsilon = 0.0001));
    }

    #[test]
    fn area_invariant_under_relabeling() {
        let [p0, p1, p2, p3] = bent();
        let area = skewed(bent()).area();
        assert!(approx_eq!(f32, skewed([p2, p3, p0, p1]).area(), area, epsilon = 0.0001));
        assert!(approx_eq!(f32, skewed([p0, p3, p2, p1]).area(), area, epsilon = 0.0001));
    }

    #[test]
    fn sample_corners() {
        let light = rect(QuadSampling::Parallelogram);
        let p0 = light.points[0];
        assert_eq!(light.sample_point(&Point2f::new(0.0, 0.0)), p0);
        assert_eq!(
            light.sample_point(&Point2f::new(1.0, 1.0)),
            p0 + light.e1 + light.e2
        );
    }

    #[test]
    fn sample_mean_converges_to_centroid() {
        let light = rect(QuadSampling::Parallelogram);
        let mut rng = RNG::new(42);
        let n = 20_000;
        let mut sum = Vector3f::ZERO;
        for _ in 0..n {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            sum += Vector3f::from(light.sample_point(&u));
        }
        let mean = sum / n as Float;
        let centroid = Vector3f::from(light.points[0] + light.e1 * 0.5 + light.e2 * 0.5);
        assert!((mean - centroid).length() < 0.03, "mean = {mean}");
    }

    /// Kite whose two triangles `(p0, p1, p3)` and `(p2, p3, p1)` have areas 2
    /// and 1, and whose parallelogram completion `(2, 0, 2)` overhangs it.
    fn kite() -> QuadAreaLight {
        QuadAreaLight::new(
            Spectrum::new(1.0),
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(1.5, 0.0, 1.5),
                Point3::new(0.0, 0.0, 2.0),
            ],
            QuadSampling::TrianglePair,
        )
    }

    #[test]
    fn triangle_pair_picks_triangles_by_area() {
        let light = kite();
        assert!(approx_eq!(f32, light.triangle_areas[0], 2.0, epsilon = 0.0001));
        assert!(approx_eq!(f32, light.triangle_areas[1], 1.0, epsilon = 0.0001));

        let mut rng = RNG::new(7);
        let n = 30_000;
        let mut sum = Vector3f::ZERO;
        let mut in_first = 0;
        for _ in 0..n {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let s = light.sample_point(&u);
            sum += Vector3f::from(s);
            // `x + z = 2` is the shared diagonal p1-p3.
            if s.x + s.z < 2.0 {
                in_first += 1;
            }
        }

        let fraction = in_first as Float / n as Float;
        assert!((fraction - 2.0 / 3.0).abs() < 0.02, "fraction = {fraction}");

        // Centroids (2/3, 0, 2/3) and (7/6, 0, 7/6) weighted 2:1. An even
        // pick would give 11/12 and swapped weights 1.
        let mean = sum / n as Float;
        let expected = Vector3::new(5.0 / 6.0, 0.0, 5.0 / 6.0);
        assert!((mean - expected).length() < 0.02, "mean = {mean}");
    }

    #[test]
    fn illuminate_direction_and_distance() {
        let light = rect(QuadSampling::Parallelogram);
        let p = Point3::new(0.0, 0.0, 0.0);
        let li = light.illuminate(&p, &Point2f::new(0.0, 0.0)).unwrap();
        assert_eq!(li.wi, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(li.distance, 4.0);
        assert!(approx_eq!(f32, li.value[0], 10.0 / 16.0, epsilon = 0.0001));
    }

    #[test]
    fn inverse_square_falloff() {
        let light = rect(QuadSampling::Parallelogram);
        let u = Point2f::new(0.5, 0.5);
        let target = light.sample_point(&u);
        let near = target - Vector3::new(0.0, 1.0, 0.0);
        let far = target - Vector3::new(0.0, 2.0, 0.0);

        let li_near = light.illuminate(&near, &u).unwrap();
        let li_far = light.illuminate(&far, &u).unwrap();
        assert!(approx_eq!(
            f32,
            li_far.value[1],
            li_near.value[1] / 4.0,
            epsilon = 0.0001
        ));
    }

    #[test]
    fn shading_point_on_sample_returns_none() {
        let light = rect(QuadSampling::Parallelogram);
        let u = Point2f::new(0.25, 0.75);
        assert!(light.illuminate(&light.sample_point(&u), &u).is_none());
    }

    #[test]
    fn normal_is_constant() {
        let light = rect(QuadSampling::Parallelogram);
        let n = light.normal(&Point3::new(1.0, 4.0, 1.0));
        assert_eq!(n, light.normal(&Point3::new(-50.0, 0.0, 7.0)));
        assert!(approx_eq!(f32, n.length(), 1.0, epsilon = 0.0001));
        assert_eq!(n, Normal3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn degenerate_light_has_zero_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let light = QuadAreaLight::new(Spectrum::new(1.0), [p, p, p, p], QuadSampling::Parallelogram);
        assert_eq!(light.normal(&p), Normal3f::ZERO);
        assert_eq!(light.area(), 0.0);
        assert!(light.power().is_black());
    }

    #[test]
    fn power_scales_with_area() {
        let light = rect(QuadSampling::Parallelogram);
        assert!(approx_eq!(f32, light.power()[2], 10.0 * 6.0 * PI, epsilon = 0.001));
    }

    proptest! {
        #[test]
        fn illuminate_is_unit_direction(
            x in -10.0..10.0f32,
            z in -10.0..10.0f32,
            u0 in 0.0..1.0f32,
            u1 in 0.0..1.0f32
        ) {
            let light = rect(QuadSampling::TrianglePair);
            let li = light.illuminate(&Point3::new(x, 0.0, z), &Point2f::new(u0, u1)).unwrap();
            prop_assert!((li.wi.length() - 1.0).abs() < 1e-4);
            prop_assert!(li.wi.y > 0.0);
        }

        #[test]
        fn triangle_pair_samples_lie_on_quad(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) {
            let light = kite();
            prop_assert!((light.area() - 3.0).abs() < 1e-4);

            let s = light.sample_point(&Point2f::new(u0, u1));
            prop_assert!(s.y.abs() < 1e-5);
            prop_assert!(s.x >= -1e-5 && s.z >= -1e-5);
            prop_assert!(1.5 * s.x + 0.5 * s.z <= 3.0 + 1e-4);
            prop_assert!(0.5 * s.x + 1.5 * s.z <= 3.0 + 1e-4);
        }
    }
}
