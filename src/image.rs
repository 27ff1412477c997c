//! A reference pixel container backed by `ndarray`.
//!
//! Pixels are stored row-major as `[row, col] = [y, x]`, matching the
//! matrix-indexing convention of `Array2`; the (x, y) order of indexing
//! requests is swapped by the storage materializer before reaching the
//! buffer here.

use std::ops::Range;

use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

use crate::container::{AssignOutcome, Container, Factory, RegionValue};
use crate::geom::{Box2I, Extent2I, Point2I};
use crate::slicing::Origin;

/// A 2-D image with an anchor offset into its Parent frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    pixels: Array2<T>,
    xy0: Point2I,
}

impl<T: Copy> Image<T> {
    /// Allocates an image covering `bbox`, filled with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `bbox` has a negative extent.
    pub fn new(bbox: Box2I, fill: T) -> Self {
        assert!(
            bbox.width() >= 0 && bbox.height() >= 0,
            "image bounding box {bbox:?} has a negative extent"
        );
        let shape = (bbox.height() as usize, bbox.width() as usize);
        Self {
            pixels: Array2::from_elem(shape, fill),
            xy0: bbox.min,
        }
    }

    /// Wraps an existing `[row, col]` pixel array, anchored at `xy0`.
    pub fn from_pixels(pixels: Array2<T>, xy0: Point2I) -> Self {
        Self { pixels, xy0 }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.pixels.ncols() as i32
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.pixels.nrows() as i32
    }

    /// Returns the anchor: the Parent-frame position of the minimum
    /// corner.
    #[inline]
    pub fn xy0(&self) -> Point2I {
        self.xy0
    }

    /// Relocates the anchor without touching pixel data.
    pub fn set_xy0(&mut self, xy0: Point2I) {
        self.xy0 = xy0;
    }

    /// Returns the raw backing array.
    pub fn pixels(&self) -> &Array2<T> {
        &self.pixels
    }

    /// Converts a Parent-frame region to storage row/column ranges,
    /// checking it against the footprint.
    fn storage_ranges(&self, region: &Box2I) -> (Range<usize>, Range<usize>) {
        let local = region.shifted_by(Extent2I::new(-self.xy0.x, -self.xy0.y));
        assert!(
            local.begin_x() >= 0
                && local.begin_y() >= 0
                && local.end_x() <= self.width()
                && local.end_y() <= self.height(),
            "region {region:?} is outside the image footprint {:?}",
            self.bbox(Origin::Parent)
        );
        (
            local.begin_y() as usize..local.end_y() as usize,
            local.begin_x() as usize..local.end_x() as usize,
        )
    }

    fn check_element(&self, row: i32, col: i32) {
        assert!(
            row >= 0 && col >= 0 && row < self.height() && col < self.width(),
            "pixel [{row}, {col}] is outside the image footprint"
        );
    }
}

impl<T: Copy> Container for Image<T> {
    type Value = T;
    type Source = Array2<T>;
    type View<'a>
        = ArrayView2<'a, T>
    where
        Self: 'a;
    type ViewMut<'a>
        = ArrayViewMut2<'a, T>
    where
        Self: 'a;

    fn bbox(&self, origin: Origin) -> Box2I {
        let extent = Extent2I::new(self.width(), self.height());
        match origin {
            Origin::Parent => Box2I::new(self.xy0, extent),
            Origin::Local => Box2I::new(Point2I::new(0, 0), extent),
        }
    }

    fn element(&self, row: i32, col: i32) -> T {
        self.check_element(row, col);
        self.pixels[[row as usize, col as usize]]
    }

    fn set_element(&mut self, row: i32, col: i32, value: T) {
        self.check_element(row, col);
        self.pixels[[row as usize, col as usize]] = value;
    }

    fn subset(&self, region: &Box2I) -> ArrayView2<'_, T> {
        let (rows, cols) = self.storage_ranges(region);
        self.pixels.slice(s![rows, cols])
    }

    fn subset_mut(&mut self, region: &Box2I) -> ArrayViewMut2<'_, T> {
        let (rows, cols) = self.storage_ranges(region);
        self.pixels.slice_mut(s![rows, cols])
    }

    fn assign(&mut self, value: RegionValue<'_, Self>, region: &Box2I) -> AssignOutcome {
        match value {
            RegionValue::Fill(fill) => {
                self.subset_mut(region).fill(fill);
                AssignOutcome::Handled
            }
            // Bulk sources go through the materialize-then-assign
            // fallback.
            RegionValue::Pixels(_) => AssignOutcome::Unhandled,
        }
    }

    fn copy_from(&mut self, value: RegionValue<'_, Self>, region: &Box2I) {
        let mut view = self.subset_mut(region);
        match value {
            RegionValue::Fill(fill) => view.fill(fill),
            // Shape mismatches panic inside ndarray, like any shape-checked
            // array assignment.
            RegionValue::Pixels(source) => view.assign(source),
        }
    }
}

impl<T: Copy> Factory for Image<T> {
    fn construct(bbox: Box2I, fill: T) -> Self {
        Image::new(bbox, fill)
    }

    fn deep_copy(&self) -> Self {
        // Array2 clones into a fresh buffer, so this is a deep copy.
        self.clone()
    }
}
