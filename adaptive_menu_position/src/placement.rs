// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement modes and the pure placement math.

use core::fmt;
use core::str::FromStr;

use adaptive_menu_dom::{Edges, Transform};
use kurbo::{Rect, Size};

/// Where the target goes relative to the base element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above the base.
    Top,
    /// Below the base.
    Bottom,
    /// Left of the base.
    Left,
    /// Right of the base.
    Right,
    /// Above the base, past its left edge by `offset`.
    TopLeft,
    /// Above the base, past its right edge by `offset`.
    TopRight,
    /// Below the base, past its left edge by `offset`.
    BottomLeft,
    /// Below the base, past its right edge by `offset`.
    BottomRight,
    /// Above the base, centred on its top edge.
    TopCenter,
    /// Below the base, centred on its bottom edge.
    BottomCenter,
    /// Left of the base, centred on its left edge.
    LeftCenter,
    /// Right of the base, centred on its right edge.
    RightCenter,
}

impl Placement {
    /// Every placement.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopCenter,
        Self::BottomCenter,
        Self::LeftCenter,
        Self::RightCenter,
    ];

    /// Kebab-case name, e.g. `bottom-center`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::TopCenter => "top-center",
            Self::BottomCenter => "bottom-center",
            Self::LeftCenter => "left-center",
            Self::RightCenter => "right-center",
        }
    }

    /// Offsets cleared before the new ones are written.
    pub const fn cleared_edges(self) -> Edges {
        match self {
            Self::Top | Self::Bottom | Self::TopCenter | Self::BottomCenter => Edges::VERTICAL,
            Self::Left | Self::Right | Self::LeftCenter | Self::RightCenter => Edges::HORIZONTAL,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight => Edges::all(),
        }
    }

    /// Whether the alignment offset takes part in the placement.
    pub const fn uses_offset(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown placement name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement `{0}`")]
pub struct ParsePlacementError(pub String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParsePlacementError(s.into()))
    }
}

/// Inline style values computed for a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placed {
    /// Offsets cleared before writing.
    pub cleared: Edges,
    /// New `top`, if the placement sets one.
    pub top: Option<f64>,
    /// New `left`, if the placement sets one.
    pub left: Option<f64>,
    /// New `transform`, set by the centred placements only.
    pub transform: Option<Transform>,
}

/// Compute where a target of `target` size goes next to `anchor`.
///
/// `anchor` is the base element's box in document coordinates. `distance` is
/// the gap along the placement axis; `offset` shifts corner placements along
/// the other axis. Negative values overlap.
pub fn compute(
    placement: Placement,
    anchor: Rect,
    target: Size,
    distance: f64,
    offset: f64,
) -> Placed {
    let above = anchor.y0 - target.height - distance;
    let below = anchor.y1 + distance;
    let before = anchor.x0 - target.width - distance;
    let after = anchor.x1 + distance;
    let mid_x = anchor.x0 + anchor.width() / 2.0;
    let mid_y = anchor.y0 + anchor.height() / 2.0;

    let (top, left, transform) = match placement {
        Placement::Top => (Some(above), None, None),
        Placement::Bottom => (Some(below), None, None),
        Placement::Left => (None, Some(before), None),
        Placement::Right => (None, Some(after), None),
        Placement::BottomLeft => (Some(below), Some(anchor.x0 - target.width - offset), None),
        Placement::TopLeft => (Some(above), Some(anchor.x0 - target.width - offset), None),
        Placement::BottomRight => (Some(below), Some(anchor.x1 + offset), None),
        Placement::TopRight => (Some(above), Some(anchor.x1 + offset), None),
        Placement::BottomCenter => (Some(below), Some(mid_x), Some(Transform::CENTER_X)),
        Placement::TopCenter => (Some(above), Some(mid_x), Some(Transform::CENTER_X)),
        Placement::RightCenter => (Some(mid_y), Some(after), Some(Transform::CENTER_Y)),
        Placement::LeftCenter => (Some(mid_y), Some(before), Some(Transform::CENTER_Y)),
    };
    Placed {
        cleared: placement.cleared_edges(),
        top,
        left,
        transform,
    }
}
