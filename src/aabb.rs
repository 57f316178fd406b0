//! Axis-aligned bounding box with the Kay–Kajiya slab test (spec.md §3, §4.1).

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::Point3;

#[derive(Debug, Clone, Copy, EnumIter, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    x: Interval,
    y: Interval,
    z: Interval,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const fn new(x: Interval, y: Interval, z: Interval) -> Aabb {
        Aabb { x, y, z }
    }

    /// Builds a box from two arbitrary corners, swapping per axis if needed
    /// so the invariant `corner_min <= corner_max` holds (spec.md §3).
    pub fn from_corners(a: Point3, b: Point3) -> Aabb {
        let axis_interval = |lo: f64, hi: f64| {
            if lo <= hi {
                Interval::new(lo, hi)
            } else {
                Interval::new(hi, lo)
            }
        };

        Aabb::new(
            axis_interval(a.x(), b.x()),
            axis_interval(a.y(), b.y()),
            axis_interval(a.z(), b.z()),
        )
    }

    /// The smallest box enclosing both inputs (spec.md §4.1, `merge`).
    pub fn merge(a: &Aabb, b: &Aabb) -> Aabb {
        Aabb::new(
            Interval::enclose(a.x, b.x),
            Interval::enclose(a.y, b.y),
            Interval::enclose(a.z, b.z),
        )
    }

    pub fn axis_interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Closed-interval containment test on all three axes.
    pub fn contains(&self, p: &Point3) -> bool {
        self.x.contains(p.x()) && self.y.contains(p.y()) && self.z.contains(p.z())
    }

    /// Pads degenerate (zero-thickness) axes by `delta`, so a flat
    /// axis-aligned triangle still yields a non-flat slab (spec.md §4.3).
    pub fn pad(&self, delta: f64) -> Aabb {
        let pad_axis = |i: Interval| {
            if i.size() < delta {
                Interval::new(i.min() - delta / 2.0, i.max() + delta / 2.0)
            } else {
                i
            }
        };
        Aabb::new(pad_axis(self.x), pad_axis(self.y), pad_axis(self.z))
    }

    /// The Kay–Kajiya slab test. `1/d` is allowed to be infinite for an
    /// axis-parallel ray; IEEE-754 division signs the infinity correctly so
    /// the comparisons below still reject rays outside the slab (spec.md
    /// §4.1).
    pub fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        let mut t_min = t_min;
        let mut t_max = t_max;

        for axis in Axis::iter() {
            let interval = self.axis_interval(axis);
            let (origin, dir) = match axis {
                Axis::X => (ray.origin().x(), ray.direction().x()),
                Axis::Y => (ray.origin().y(), ray.direction().y()),
                Axis::Z => (ray.origin().z(), ray.direction().z()),
            };

            let adinv = 1.0 / dir;
            let mut t0 = (interval.min() - origin) * adinv;
            let mut t1 = (interval.max() - origin) * adinv;

            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);

            if t_max <= t_min {
                return false;
            }
        }

        true
    }
}
