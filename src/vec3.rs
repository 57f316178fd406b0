//! 3-component `f64` vector arithmetic, shared by points, directions, and
//! linear-light colors (spec.md §3, "Vector3 (v)").
//!
//! Colors are plain `Vec3` values with non-negative components; they are
//! *not* clamped on construction or by arithmetic (emissive materials
//! legitimately exceed 1.0, and per-pixel sums exceed 1.0 long before the
//! sample average is taken). Clamping to `[0, 1]` happens only at PPM write
//! time (`crate::ppm`), matching spec.md §4.9's numerical invariant.

use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub};

use crate::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    values: (f64, f64, f64),
}

/// Points, directions, and linear colors are all the same value type; the
/// alias documents intent at call sites.
pub type Point3 = Vec3;
pub type Color = Vec3;

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { values: (x, y, z) }
    }

    pub const fn origin() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    pub const fn black() -> Color {
        Vec3::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Color {
        Vec3::new(1.0, 1.0, 1.0)
    }

    pub fn x(&self) -> f64 {
        self.values.0
    }
    pub fn y(&self) -> f64 {
        self.values.1
    }
    pub fn z(&self) -> f64 {
        self.values.2
    }
    pub fn r(&self) -> f64 {
        self.values.0
    }
    pub fn g(&self) -> f64 {
        self.values.1
    }
    pub fn b(&self) -> f64 {
        self.values.2
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.values.0 * other.values.0
            + self.values.1 * other.values.1
            + self.values.2 * other.values.2
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        let v = self.values;
        let o = other.values;
        Vec3::new(
            v.1 * o.2 - v.2 * o.1,
            v.2 * o.0 - v.0 * o.2,
            v.0 * o.1 - v.1 * o.0,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// True when the vector's squared magnitude is below 1e-16, per
    /// spec.md §3. Callers must check this before calling `unit()`, which
    /// is undefined for the zero vector.
    pub fn near_zero(&self) -> bool {
        self.length_squared() < 1e-16
    }

    /// Normalizes the vector. Undefined (produces NaN/inf) if `self` is the
    /// zero vector — check `near_zero()` first.
    pub fn unit(&self) -> Vec3 {
        *self / self.length()
    }

    /// Reflects a unit vector `self` about the unit normal `n`:
    /// `v - 2(v . n)n` (spec.md §3).
    pub fn reflect(&self, n: &Vec3) -> Vec3 {
        *self - 2.0 * self.dot(n) * *n
    }

    /// Refracts a unit vector `self` across the unit normal `n` given the
    /// relative index of refraction `eta`. Assumes `-self.dot(n) <= 1`
    /// (spec.md §3).
    pub fn refract(&self, n: &Vec3, eta: f64) -> Vec3 {
        let cos_theta = (-*self).dot(n).min(1.0);
        let r_out_perp = eta * (*self + cos_theta * *n);
        let r_out_parallel = -((1.0 - r_out_perp.length_squared()).abs().sqrt()) * *n;
        r_out_perp + r_out_parallel
    }

    /// Uniform sample in `[0, 1)^3`.
    pub fn random(rng: &mut Rng) -> Vec3 {
        Vec3::new(rng.uniform(), rng.uniform(), rng.uniform())
    }

    /// Uniform sample in `[min, max)^3`.
    pub fn random_range(rng: &mut Rng, min: f64, max: f64) -> Vec3 {
        Vec3::new(
            rng.range(min, max),
            rng.range(min, max),
            rng.range(min, max),
        )
    }

    /// Uniform sample inside the unit ball (rejection sampling).
    pub fn random_in_unit_sphere(rng: &mut Rng) -> Vec3 {
        loop {
            let p = Vec3::random_range(rng, -1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Uniform sample on the unit sphere's surface.
    pub fn random_unit_vector(rng: &mut Rng) -> Vec3 {
        loop {
            let p = Vec3::random_range(rng, -1.0, 1.0);
            let lensq = p.length_squared();
            if 1e-160 < lensq && lensq <= 1.0 {
                return p / lensq.sqrt();
            }
        }
    }

    /// Uniform sample inside the unit disk (z == 0), used for lens sampling.
    pub fn random_in_unit_disk(rng: &mut Rng) -> Vec3 {
        loop {
            let p = Vec3::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.values.0,
            1 => &self.values.1,
            2 => &self.values.2,
            _ => panic!("Vec3 index {i} out of range [0, 3)"),
        }
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.z())
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x(), -self.y(), -self.z())
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        self + (-rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

/// Component-wise (Hadamard) product — used to apply material attenuation
/// to incoming radiance (spec.md §4.9).
impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        self * (1.0 / rhs)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let u = Vec3::new(2.0, 2.0, 1.0);
        assert_eq!(v.dot(&u), 9.0);
    }

    #[test]
    fn cross_product() {
        let v = Vec3::new(3.0, -3.0, 1.0);
        let u = Vec3::new(4.0, 9.0, 2.0);
        assert_eq!(v.cross(&u), Vec3::new(-15.0, -2.0, 39.0));
    }

    #[test]
    fn length_of_3_4_0_is_5() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn near_zero_detects_tiny_vectors() {
        assert!(Vec3::new(1e-9, 1e-9, 1e-9).near_zero());
        assert!(!Vec3::new(0.1, 0.0, 0.0).near_zero());
    }

    #[test]
    fn reflect_about_surface_normal() {
        let v = Vec3::new(1.0, -1.0, 0.0).unit();
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = v.reflect(&n);
        assert!((r.x() - v.x()).abs() < 1e-12);
        assert!((r.y() + v.y()).abs() < 1e-12);
    }

    #[test]
    fn refract_preserves_unit_length() {
        let v = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        let refracted = v.refract(&n, 1.0 / 1.5);
        assert!((refracted.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn random_unit_vector_has_unit_length() {
        let mut rng = Rng::new(3);
        for _ in 0..100 {
            let v = Vec3::random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn random_in_unit_disk_has_zero_z() {
        let mut rng = Rng::new(4);
        for _ in 0..100 {
            let p = Vec3::random_in_unit_disk(&mut rng);
            assert_eq!(p.z(), 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn hadamard_product() {
        let a = Vec3::new(0.5, 1.0, 2.0);
        let b = Vec3::new(2.0, 0.5, 0.25);
        assert_eq!(a * b, Vec3::new(1.0, 0.5, 0.5));
    }
}
