// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated positioning requests against a [`Document`].

use core::fmt;

use adaptive_menu_dom::{Document, LookupError};

use crate::placement::{Placed, Placement, compute};

/// Which element a validation failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// The reference element.
    Base,
    /// The element being positioned.
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "Base element",
            Self::Target => "Element to position",
        })
    }
}

/// Which numeric argument a validation failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// Gap along the placement axis.
    Distance,
    /// Alignment offset.
    Offset,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Distance => "distance",
            Self::Offset => "offset",
        })
    }
}

/// Why a positioning request failed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PositionError {
    /// An element was not supplied.
    #[error("{0} is required")]
    MissingElement(Role),
    /// A handle does not refer to a live element.
    #[error("{0} must be a live element")]
    NotAnElement(Role),
    /// A numeric argument is NaN or infinite.
    #[error("invalid {what}: {value}, must be a finite number")]
    NonFinite {
        /// The argument.
        what: Quantity,
        /// The rejected value.
        value: f64,
    },
    /// A layout read or style write failed after validation.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl PositionError {
    /// True for failures caught by argument validation, before the document is touched.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Lookup(_))
    }
}

macro_rules! placement_constructors {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            #[doc = concat!("Shorthand for [`Placement::", stringify!($variant), "`] with zero distance and offset.")]
            pub fn $name(base: E, target: E) -> Self {
                Self::new(base, target, Placement::$variant)
            }
        )*
    };
}

/// A request to place `target` next to `base`.
///
/// Build with [`PositionRequest::new`], then choose how failures are handled:
/// [`apply`](Self::apply) returns them, [`apply_or_log`](Self::apply_or_log)
/// logs them and reports success as a `bool`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionRequest<E> {
    base: Option<E>,
    target: Option<E>,
    placement: Placement,
    distance: f64,
    offset: f64,
}

impl<E: Copy> PositionRequest<E> {
    /// A request with zero distance and offset.
    pub fn new(base: E, target: E, placement: Placement) -> Self {
        Self::from_optional(Some(base), Some(target), placement)
    }

    /// A request whose elements may be missing, e.g. straight from a failed lookup.
    ///
    /// A `None` element fails validation with [`PositionError::MissingElement`].
    pub fn from_optional(base: Option<E>, target: Option<E>, placement: Placement) -> Self {
        Self {
            base,
            target,
            placement,
            distance: 0.0,
            offset: 0.0,
        }
    }

    placement_constructors! {
        top => Top,
        bottom => Bottom,
        left => Left,
        right => Right,
        top_left => TopLeft,
        top_right => TopRight,
        bottom_left => BottomLeft,
        bottom_right => BottomRight,
        top_center => TopCenter,
        bottom_center => BottomCenter,
        left_center => LeftCenter,
        right_center => RightCenter,
    }

    /// Gap between the base and the target along the placement axis.
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Alignment offset for corner placements.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Requested placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Validate, measure the base, and write the target's inline style.
    ///
    /// Validation runs in order base, target, distance, offset. The target's
    /// style is only written once every check has passed.
    pub fn apply<D>(&self, doc: &mut D) -> Result<Placed, PositionError>
    where
        D: Document<Element = E>,
    {
        let base = check_element(doc, self.base, Role::Base)?;
        let target = check_element(doc, self.target, Role::Target)?;
        check_finite(self.distance, Quantity::Distance)?;
        check_finite(self.offset, Quantity::Offset)?;

        let anchor = doc.bounding_client_rect(base)? + doc.scroll_offset();
        let size = doc.offset_size(target)?;
        let placed = compute(self.placement, anchor, size, self.distance, self.offset);

        let style = doc.style_mut(target)?;
        style.clear_edges(placed.cleared);
        if let Some(top) = placed.top {
            style.top = Some(top);
        }
        if let Some(left) = placed.left {
            style.left = Some(left);
        }
        if let Some(transform) = placed.transform {
            style.transform = Some(transform);
        }
        Ok(placed)
    }

    /// Like [`apply`](Self::apply), but failures are logged and reported as `false`.
    pub fn apply_or_log<D>(&self, doc: &mut D) -> bool
    where
        D: Document<Element = E>,
    {
        match self.apply(doc) {
            Ok(_) => true,
            Err(err) if err.is_validation() => {
                tracing::warn!(placement = %self.placement, "position check error: {err}");
                false
            }
            Err(err) => {
                tracing::error!(placement = %self.placement, "positioning failed: {err}");
                false
            }
        }
    }
}

fn check_element<D: Document>(
    doc: &D,
    element: Option<D::Element>,
    role: Role,
) -> Result<D::Element, PositionError> {
    let element = element.ok_or(PositionError::MissingElement(role))?;
    if !doc.is_element(element) {
        return Err(PositionError::NotAnElement(role));
    }
    Ok(element)
}

fn check_finite(value: f64, what: Quantity) -> Result<(), PositionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PositionError::NonFinite { what, value })
    }
}
