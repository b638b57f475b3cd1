//! Plane model `a·x + b·y + c·z + d = 0` and an in-plane 2D frame.
//!
//! Distances use the normalized form, so the coefficients do not need a
//! unit normal. Two projections are offered:
//! - orthogonal: the foot of the perpendicular from the point,
//! - perspective: where the camera ray through the point meets the plane.
use crate::error::HoleError;
use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

const EPS: f32 = 1e-6;
/// Normals closer than this to the optical axis keep the default in-plane axis.
const AXIS_ALIGNED_TOL_DEG: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct PlaneModel {
    normal: Vector3<f32>,
    d: f32,
}

impl From<[f32; 4]> for PlaneModel {
    fn from(c: [f32; 4]) -> Self {
        Self {
            normal: Vector3::new(c[0], c[1], c[2]),
            d: c[3],
        }
    }
}

impl From<PlaneModel> for [f32; 4] {
    fn from(p: PlaneModel) -> Self {
        p.coefficients()
    }
}

impl PlaneModel {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::from([a, b, c, d])
    }

    pub fn coefficients(&self) -> [f32; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// Un-normalized normal `(a, b, c)`.
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// A plane is usable when its normal is finite and non-zero.
    pub fn validate(&self) -> Result<(), HoleError> {
        let n = self.normal.norm();
        if !n.is_finite() || !self.d.is_finite() || n < EPS {
            return Err(HoleError::MissingInput {
                what: "plane model has a zero or non-finite normal",
            });
        }
        Ok(())
    }

    pub fn signed_distance(&self, p: &Point3<f32>) -> f32 {
        (self.normal.dot(&p.coords) + self.d) / self.normal.norm()
    }

    pub fn distance(&self, p: &Point3<f32>) -> f32 {
        self.signed_distance(p).abs()
    }

    pub fn project_orthogonal(&self, p: &Point3<f32>) -> Point3<f32> {
        let n2 = self.normal.norm_squared();
        let t = (self.normal.dot(&p.coords) + self.d) / n2;
        p - self.normal * t
    }

    /// Intersect the ray from the sensor origin through `p` with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or meets it
    /// behind the sensor.
    pub fn project_perspective(&self, p: &Point3<f32>) -> Option<Point3<f32>> {
        let denom = self.normal.dot(&p.coords);
        if denom.abs() < EPS {
            return None;
        }
        let t = -self.d / denom;
        if !t.is_finite() || t <= 0.0 {
            return None;
        }
        Some(Point3::from(p.coords * t))
    }

    /// Point of the plane closest to the sensor origin.
    pub fn origin(&self) -> Point3<f32> {
        let n2 = self.normal.norm_squared();
        Point3::from(self.normal * (-self.d / n2))
    }
}

/// Orthonormal basis `(u, v, n)` anchored on the plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneFrame {
    origin: Point3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
}

impl PlaneFrame {
    /// Build the frame for `plane` anchored at its closest point to the sensor.
    ///
    /// The in-plane `v` axis is the sensor Y axis when the normal is nearly
    /// parallel to the optical axis, otherwise a vector orthogonal to the
    /// normal chosen from its dominant non-zero component.
    pub fn new(plane: &PlaneModel) -> Self {
        let normal = plane.normal().normalize();
        let z = Vector3::z();
        let mut angle = normal.angle(&z);
        if (angle - std::f32::consts::PI).abs() < angle {
            angle = (angle - std::f32::consts::PI).abs();
        }
        let v = if angle < AXIS_ALIGNED_TOL_DEG.to_radians() {
            Vector3::y()
        } else {
            let n = plane.normal();
            let raw = if n.z.abs() > f32::EPSILON {
                Vector3::new(1.0, 1.0, -(n.x + n.y) / n.z)
            } else if n.y.abs() > f32::EPSILON {
                Vector3::new(1.0, -n.x / n.y, 1.0)
            } else {
                Vector3::new(0.0, 1.0, 1.0)
            };
            raw.normalize()
        };
        // Remove any residual normal component so (u, v, n) stays orthonormal.
        let v = (v - normal * v.dot(&normal)).normalize();
        let u = v.cross(&normal);
        Self {
            origin: plane.origin(),
            u,
            v,
        }
    }

    /// In-plane coordinates of `p` (its normal component is discarded).
    pub fn to_plane_2d(&self, p: &Point3<f32>) -> Point2<f32> {
        let d = p - self.origin;
        Point2::new(d.dot(&self.u), d.dot(&self.v))
    }
}
