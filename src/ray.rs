//! A parametric line `origin + t * direction` (spec.md §3, "Ray").

use crate::vec3::{Point3, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
    /// Carried for future motion-blur support (spec.md §1); no primitive in
    /// this crate is time-varying, so every ray currently constructed uses
    /// `time = 0.0`.
    time: f64,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Ray {
        Ray::new_at_time(origin, direction, 0.0)
    }

    pub fn new_at_time(origin: Point3, direction: Vec3, time: f64) -> Ray {
        Ray {
            origin,
            direction,
            time,
        }
    }

    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Not required to be unit length; callers normalize explicitly where
    /// needed (spec.md §3).
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
