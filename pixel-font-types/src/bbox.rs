use std::ops::{Mul, Sub};

/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction-- the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction-- the right side of a region.
    pub x_max: T,
    /// Maximum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the top of the region.
    pub y_max: T,
}

impl<T> BoundingBox<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Return a `BoundingBox` scaled by a scale factor of the same type
    /// as the stored bounds.
    ///
    /// Integer bounds scale exactly; a box computed in pixel units and
    /// scaled by a design-units-per-pixel factor equals the box computed
    /// directly in design units.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            x_min: self.x_min * factor,
            y_min: self.y_min * factor,
            x_max: self.x_max * factor,
            y_max: self.y_max * factor,
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Ord + Copy,
{
    /// Compute the smallest box covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Sub<Output = T> + Copy,
{
    /// Horizontal extent of the region.
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }

    /// Vertical extent of the region.
    pub fn height(&self) -> T {
        self.y_max - self.y_min
    }
}
