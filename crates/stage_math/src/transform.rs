//! 2D stage transform.
//!
//! [`Transform2D`] represents position, rotation, and uniform scale on the
//! stage plane. Every sprite carries one as its spatial state.

use glam::{IVec2, Mat3, Vec2};
use serde::{Deserialize, Serialize};

/// A 2D transform representing stage position, rotation, and uniform scale.
///
/// This is the spatial state of a sprite. Bricks mutate the position; the
/// render side turns the whole transform into a matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform2D {
    /// Stage-space position.
    pub position: Vec2,
    /// Rotation in radians, counter-clockwise.
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Transform2D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Create a new transform with the given position and default rotation/scale.
    #[must_use]
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a new transform at an integer stage coordinate.
    #[must_use]
    pub fn at(coordinate: IVec2) -> Self {
        Self::from_position(coordinate.as_vec2())
    }

    /// Compute the 3×3 model matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::from_scale_angle_translation(Vec2::splat(self.scale), self.rotation, self.position)
    }

    /// Translate the transform by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.position += offset;
        self
    }

    /// Rotate the transform by the given angle in radians.
    #[must_use]
    pub fn rotated(mut self, angle: f32) -> Self {
        self.rotation += angle;
        self
    }

    /// Apply a uniform scale factor.
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
