// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document surface traits.
//!
//! Controllers are written against these traits, not against [`Page`](crate::Page):
//!
//! - [`ElementLocator`]: resolve an identifier to an element handle.
//! - [`ClassToggler`]: add and remove class markers.
//! - [`Document`]: content, layout reads, scroll offset and inline style.
//!
//! Layout reads take `&mut self` because a read after a mutation runs a
//! synchronous layout pass, as in a browser.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Rect, Size, Vec2};

use crate::markup::Markup;
use crate::types::InlineStyle;

/// Failure to resolve an element.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No element carries the identifier.
    #[error("element with id = '{name}' not found")]
    NotFound {
        /// The identifier that was looked up.
        name: String,
    },
    /// The handle refers to a removed element.
    #[error("element handle is stale")]
    Stale,
}

/// Resolves identifiers to element handles.
pub trait ElementLocator {
    /// Handle type.
    type Element: Copy + Eq + Debug;

    /// Find the element carrying `name`.
    fn find_element(&self, name: &str) -> Result<Self::Element, LookupError>;

    /// Whether `element` still refers to a live element.
    fn is_element(&self, element: Self::Element) -> bool;
}

/// Adds and removes class markers.
pub trait ClassToggler: ElementLocator {
    /// Add `add` and then remove `remove`. Both are idempotent.
    fn set_classes(
        &mut self,
        element: Self::Element,
        add: Option<&str>,
        remove: Option<&str>,
    ) -> Result<(), LookupError>;

    /// Whether `element` carries `class`. Stale handles carry nothing.
    fn has_class(&self, element: Self::Element, class: &str) -> bool;
}

/// Everything else a controller reads from or writes to a page.
pub trait Document: ClassToggler {
    /// Current value of a form input, if the element has one.
    fn input_value(&self, element: Self::Element) -> Result<Option<String>, LookupError>;

    /// Replace the element's content.
    fn set_content(&mut self, element: Self::Element, content: Vec<Markup>)
    -> Result<(), LookupError>;

    /// Layout size ignoring visual transforms (`offsetWidth`/`offsetHeight`).
    ///
    /// Elements that are not displayed measure as zero.
    fn offset_size(&mut self, element: Self::Element) -> Result<Size, LookupError>;

    /// Visual bounds relative to the viewport (`getBoundingClientRect`).
    fn bounding_client_rect(&mut self, element: Self::Element) -> Result<Rect, LookupError>;

    /// How far the document is scrolled.
    fn scroll_offset(&self) -> Vec2;

    /// Mutable inline style. Any write may invalidate layout.
    fn style_mut(&mut self, element: Self::Element) -> Result<&mut InlineStyle, LookupError>;

    /// Element children in document order.
    fn children(&self, element: Self::Element) -> Result<Vec<Self::Element>, LookupError>;
}
