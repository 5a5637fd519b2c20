// SPDX-License-Identifier: MPL-2.0
//! Minimal 2D affine transform used to place the interface rectangle.

use iced::{Point, Vector};

/// A 2×3 affine transform over screen coordinates (y pointing down).
///
/// Composition is in local coordinates: each `translated`/`rotated` call
/// applies inside the frame established by the calls before it, so
/// `identity().translated(center).rotated(angle).translated(-half_size)`
/// pivots a rectangle about `center` rather than its own corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    m11: f32,
    m12: f32,
    m21: f32,
    m22: f32,
    tx: f32,
    ty: f32,
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Appends a translation in local coordinates.
    #[must_use]
    pub fn translated(self, offset: Vector) -> Self {
        Self {
            tx: self.m11 * offset.x + self.m12 * offset.y + self.tx,
            ty: self.m21 * offset.x + self.m22 * offset.y + self.ty,
            ..self
        }
    }

    /// Appends a rotation (radians, positive turning the positive x axis
    /// toward positive y) in local coordinates.
    #[must_use]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m11: self.m11 * cos + self.m12 * sin,
            m12: -self.m11 * sin + self.m12 * cos,
            m21: self.m21 * cos + self.m22 * sin,
            m22: -self.m21 * sin + self.m22 * cos,
            ..self
        }
    }

    /// Maps a point through the transform.
    #[must_use]
    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(
            self.m11 * point.x + self.m12 * point.y + self.tx,
            self.m21 * point.x + self.m22 * point.y + self.ty,
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
