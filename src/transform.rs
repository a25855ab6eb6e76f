use crate::types::DomainExtent;

/// Axis-aligned affine transform: one scale/translate pair per axis, no
/// rotation and no shared scale between axes.
///
/// forward: `x' = x * scale_x + translate_x`, `y' = y * scale_y + translate_y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformationParams {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TransformationParams {
    pub fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// The unique affine map sending the extent's `(min_x, min_y)` to
    /// `(mercator_min_x, mercator_min_y)` and `(max_x, max_y)` to
    /// `(mercator_max_x, mercator_max_y)`.
    pub fn derive(
        extent: &DomainExtent,
        mercator_min_x: f64,
        mercator_min_y: f64,
        mercator_max_x: f64,
        mercator_max_y: f64,
    ) -> Self {
        let scale_x = (mercator_max_x - mercator_min_x) / (extent.max_x - extent.min_x);
        let scale_y = (mercator_max_y - mercator_min_y) / (extent.max_y - extent.min_y);

        let translate_x = mercator_min_x - scale_x * extent.min_x;
        let translate_y = mercator_min_y - scale_y * extent.min_y;

        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Apply the forward transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale_x + self.translate_x,
            y * self.scale_y + self.translate_y,
        )
    }

    /// Apply the inverse transform, the exact algebraic inverse of
    /// [`apply`](Self::apply).
    pub fn invert(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.translate_x) / self.scale_x,
            (y - self.translate_y) / self.scale_y,
        )
    }
}
