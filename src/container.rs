//! Container capability trait and the indexed accessor binding.
//!
//! A container type implements [`Container`] once; the read/write entry
//! points of [`Indexed`] are then available as default methods through a
//! blanket impl, with all request translation funneled through the
//! [`slicing`](crate::slicing) pipeline.

use std::fmt;

use crate::error::PixframeError;
use crate::geom::Box2I;
use crate::slicing::{
    to_storage, translate, Origin, Request, RequestSelector, StorageIndex,
};

/// Outcome of a direct region assignment attempt.
///
/// `Unhandled` is a sentinel, not a failure: it tells the accessor binding
/// to materialize a mutable view and bulk-assign instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    Handled,
    Unhandled,
}

/// A value written into a rectangular region.
pub enum RegionValue<'a, C: Container + ?Sized> {
    /// Fill every pixel of the region with one value.
    Fill(C::Value),
    /// Copy pixels from a bulk source of the container's block type.
    Pixels(&'a C::Source),
}

impl<C: Container + ?Sized> Clone for RegionValue<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Container + ?Sized> Copy for RegionValue<'_, C> {}

/// The result of an indexed read: a single element for point selectors, a
/// borrowed sub-view for region selectors.
pub enum Fetched<'a, C: Container + ?Sized + 'a> {
    Element(C::Value),
    View(C::View<'a>),
}

// Manual impl to avoid Debug bounds on C::Value and C::View.
impl<C: Container + ?Sized> fmt::Debug for Fetched<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fetched::Element(_) => f.write_str("Fetched::Element"),
            Fetched::View(_) => f.write_str("Fetched::View"),
        }
    }
}

impl<'a, C: Container + ?Sized> Fetched<'a, C> {
    /// Returns the element value, or `None` for a view.
    pub fn into_element(self) -> Option<C::Value> {
        match self {
            Fetched::Element(value) => Some(value),
            Fetched::View(_) => None,
        }
    }

    /// Returns the sub-view, or `None` for an element.
    pub fn into_view(self) -> Option<C::View<'a>> {
        match self {
            Fetched::Element(_) => None,
            Fetched::View(view) => Some(view),
        }
    }
}

/// Capability interface for 2-D pixel containers addressable in two
/// frames.
///
/// `subset`, `subset_mut`, `assign`, and `copy_from` take Parent-frame
/// regions; `element` and `set_element` take storage `[row, col]`
/// coordinates. The container owns bounds enforcement for both.
pub trait Container {
    /// One pixel value.
    type Value: Copy;
    /// Bulk pixel source accepted by region writes.
    type Source;
    /// Borrowed read view over a sub-region.
    type View<'a>
    where
        Self: 'a;
    /// Borrowed write view over a sub-region.
    type ViewMut<'a>
    where
        Self: 'a;

    /// Returns the bounding box in the requested frame.
    fn bbox(&self, origin: Origin) -> Box2I;

    /// Reads one element at storage coordinates.
    fn element(&self, row: i32, col: i32) -> Self::Value;

    /// Writes one element at storage coordinates.
    fn set_element(&mut self, row: i32, col: i32, value: Self::Value);

    /// Borrows a read view of `region`, given in the Parent frame.
    fn subset(&self, region: &Box2I) -> Self::View<'_>;

    /// Borrows a write view of `region`, given in the Parent frame.
    fn subset_mut(&mut self, region: &Box2I) -> Self::ViewMut<'_>;

    /// Attempts a direct region assignment, declining value shapes it does
    /// not handle natively.
    fn assign(&mut self, value: RegionValue<'_, Self>, region: &Box2I) -> AssignOutcome;

    /// Unconditional region write, the fallback when [`assign`] declines.
    ///
    /// [`assign`]: Container::assign
    fn copy_from(&mut self, value: RegionValue<'_, Self>, region: &Box2I);
}

/// Factory and clone contract for generic code that must build "another
/// container like this one".
pub trait Factory: Container + Sized {
    /// Builds a new container with the given footprint, filled with
    /// `fill`.
    fn construct(bbox: Box2I, fill: Self::Value) -> Self;

    /// Returns an independent deep copy: a new backing buffer with the
    /// same bounding box and contents.
    fn deep_copy(&self) -> Self;
}

/// Read/write access through the request-translation pipeline.
///
/// Implemented for every [`Container`]. `get`/`set`/`set_from` default to
/// the Parent frame; the `_in` variants take an explicit [`Origin`].
pub trait Indexed: Container {
    /// Reads an element or sub-view in the Parent frame.
    fn get(&self, selector: impl Into<RequestSelector>) -> Result<Fetched<'_, Self>, PixframeError> {
        self.get_in(selector, Origin::Parent)
    }

    /// Reads an element or sub-view in an explicit frame.
    fn get_in(
        &self,
        selector: impl Into<RequestSelector>,
        origin: Origin,
    ) -> Result<Fetched<'_, Self>, PixframeError> {
        let request = Request::new(selector, origin);
        let canonical = translate(&request, |o| self.bbox(o))?;
        match to_storage(&canonical, &self.bbox(Origin::Parent)) {
            StorageIndex::Region { parent_box, .. } => Ok(Fetched::View(self.subset(&parent_box))),
            StorageIndex::Element { row, col } => Ok(Fetched::Element(self.element(row, col))),
        }
    }

    /// Writes a scalar in the Parent frame: an element write for point
    /// selectors, a region fill for region selectors.
    fn set(
        &mut self,
        selector: impl Into<RequestSelector>,
        value: Self::Value,
    ) -> Result<(), PixframeError> {
        self.set_in(selector, Origin::Parent, value)
    }

    /// Writes a scalar in an explicit frame.
    fn set_in(
        &mut self,
        selector: impl Into<RequestSelector>,
        origin: Origin,
        value: Self::Value,
    ) -> Result<(), PixframeError> {
        write(self, selector.into(), origin, RegionValue::Fill(value))
    }

    /// Writes a bulk pixel source into a region selector in the Parent
    /// frame.
    fn set_from(
        &mut self,
        selector: impl Into<RequestSelector>,
        source: &Self::Source,
    ) -> Result<(), PixframeError> {
        self.set_from_in(selector, Origin::Parent, source)
    }

    /// Writes a bulk pixel source into a region selector in an explicit
    /// frame. Point selectors are rejected with
    /// [`PixframeError::ScalarRequired`].
    fn set_from_in(
        &mut self,
        selector: impl Into<RequestSelector>,
        origin: Origin,
        source: &Self::Source,
    ) -> Result<(), PixframeError> {
        write(self, selector.into(), origin, RegionValue::Pixels(source))
    }
}

impl<C: Container + ?Sized> Indexed for C {}

fn write<C: Container + ?Sized>(
    container: &mut C,
    selector: RequestSelector,
    origin: Origin,
    value: RegionValue<'_, C>,
) -> Result<(), PixframeError> {
    let request = Request::new(selector, origin);
    let canonical = translate(&request, |o| container.bbox(o))?;
    match to_storage(&canonical, &container.bbox(Origin::Parent)) {
        StorageIndex::Region { parent_box, .. } => {
            if let AssignOutcome::Unhandled = container.assign(value, &parent_box) {
                container.copy_from(value, &parent_box);
            }
            Ok(())
        }
        StorageIndex::Element { row, col } => match value {
            RegionValue::Fill(scalar) => {
                container.set_element(row, col, scalar);
                Ok(())
            }
            RegionValue::Pixels(_) => Err(PixframeError::ScalarRequired),
        },
    }
}
