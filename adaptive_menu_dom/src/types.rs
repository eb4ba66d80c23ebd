// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: element identifiers, edges, and inline style values.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Identifier for an element in a [`Page`](crate::Page).
///
/// A small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// Use [`ElementLocator::is_element`](crate::ElementLocator::is_element) to check whether a
/// handle still refers to a live element. Stale handles never alias a different live element
/// because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Box edges addressed by the `top`/`right`/`bottom`/`left` inline properties.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// The `top` property.
        const TOP    = 0b0000_0001;
        /// The `right` property.
        const RIGHT  = 0b0000_0010;
        /// The `bottom` property.
        const BOTTOM = 0b0000_0100;
        /// The `left` property.
        const LEFT   = 0b0000_1000;
        /// Both vertical offsets.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Both horizontal offsets.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// A CSS length used for `width` and `height`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing block's matching dimension.
    Percent(f64),
}

impl Length {
    /// Resolve against the containing block's dimension.
    pub fn resolve(self, container: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => container * pct / 100.0,
        }
    }
}

/// A transform applied to an element.
///
/// `translate_percent` is relative to the element's own size, as with
/// `translate(-50%, 0)`. `affine` is a purely visual transform applied about
/// the element's centre; it affects the bounding client rect but not the
/// offset size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Translation as a percentage of the element's own width/height.
    pub translate_percent: Vec2,
    /// Visual transform about the element's centre.
    pub affine: Affine,
}

impl Transform {
    /// The neutral transform (`transform: none`).
    pub const NONE: Self = Self {
        translate_percent: Vec2::ZERO,
        affine: Affine::IDENTITY,
    };

    /// `translate(-50%, 0)`: centre horizontally on the current `left`.
    pub const CENTER_X: Self = Self {
        translate_percent: Vec2::new(-50.0, 0.0),
        affine: Affine::IDENTITY,
    };

    /// `translate(0, -50%)`: centre vertically on the current `top`.
    pub const CENTER_Y: Self = Self {
        translate_percent: Vec2::new(0.0, -50.0),
        affine: Affine::IDENTITY,
    };

    /// A visual-only transform.
    pub const fn from_affine(affine: Affine) -> Self {
        Self {
            translate_percent: Vec2::ZERO,
            affine,
        }
    }

    /// Returns `true` for the neutral transform.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Affine applied about `center`.
    pub(crate) fn affine_about(&self, center: Point) -> Affine {
        Affine::translate(center.to_vec2()) * self.affine * Affine::translate(-center.to_vec2())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::NONE
    }
}

/// Easing of a [`Transition`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// `linear`.
    #[default]
    Linear,
    /// `ease`.
    Ease,
}

/// A style transition declaration, e.g. `width 0.4s linear`.
///
/// The page records transitions but applies property changes immediately;
/// animation is the host's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Animated property name.
    pub property: String,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
        })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property, self.duration_ms, self.easing)
    }
}

/// Inline style of an element.
///
/// `None` means the property is unset (`""`), which lets layout fall back to
/// the element's static position and intrinsic size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    /// `top` in document pixels.
    pub top: Option<f64>,
    /// `right` in document pixels.
    pub right: Option<f64>,
    /// `bottom` in document pixels.
    pub bottom: Option<f64>,
    /// `left` in document pixels.
    pub left: Option<f64>,
    /// `width`.
    pub width: Option<Length>,
    /// `height`.
    pub height: Option<Length>,
    /// `transform`.
    pub transform: Option<Transform>,
    /// `opacity` in `[0, 1]`.
    pub opacity: Option<f64>,
    /// `transition`.
    pub transition: Option<Transition>,
}

impl InlineStyle {
    /// Clear the offsets named by `edges`.
    pub fn clear_edges(&mut self, edges: Edges) {
        if edges.contains(Edges::TOP) {
            self.top = None;
        }
        if edges.contains(Edges::RIGHT) {
            self.right = None;
        }
        if edges.contains(Edges::BOTTOM) {
            self.bottom = None;
        }
        if edges.contains(Edges::LEFT) {
            self.left = None;
        }
    }

    /// Returns the edges that currently carry an offset.
    pub fn set_edges(&self) -> Edges {
        let mut edges = Edges::empty();
        edges.set(Edges::TOP, self.top.is_some());
        edges.set(Edges::RIGHT, self.right.is_some());
        edges.set(Edges::BOTTOM, self.bottom.is_some());
        edges.set(Edges::LEFT, self.left.is_some());
        edges
    }

    /// True when any offset is set, which takes the element out of static flow.
    pub fn is_positioned(&self) -> bool {
        !self.set_edges().is_empty()
    }
}

/// Description of an element to insert into a [`Page`](crate::Page).
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    /// Identifier used by [`ElementLocator::find_element`](crate::ElementLocator::find_element).
    pub name: Option<String>,
    /// Initial class list.
    pub classes: Vec<String>,
    /// Initial inline style.
    pub style: InlineStyle,
    /// Static position relative to the parent's box.
    pub origin: Point,
    /// Value of a form input.
    pub value: Option<String>,
}

impl ElementSpec {
    /// An element with the given identifier.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Add a class.
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the static position relative to the parent's box.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Set the inline width.
    pub fn width(mut self, width: Length) -> Self {
        self.style.width = Some(width);
        self
    }

    /// Set the inline height.
    pub fn height(mut self, height: Length) -> Self {
        self.style.height = Some(height);
        self
    }

    /// Set an input value.
    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn transition_prints_as_css() {
        let mut transition = Transition {
            property: "width".into(),
            duration_ms: 40,
            easing: Easing::default(),
        };
        assert_eq!(transition.to_string(), "width 40ms linear");
        transition.easing = Easing::Ease;
        assert_eq!(transition.to_string(), "width 40ms ease");
    }
}
