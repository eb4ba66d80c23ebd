// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive Menu Position: anchor one element next to another element's bounding box.
//!
//! ## Overview
//!
//! A [`PositionRequest`] names a base element, a target element, one of twelve [`Placement`]s,
//! a gap (`distance`) and an alignment `offset`. Applying it measures the base element's
//! bounding client rect, adds the document scroll offset to get document coordinates, and writes
//! the target's `top`/`left` (and, for centred placements, a `translate(-50%)` transform).
//! Offsets that would conflict on the placement axis are cleared first.
//!
//! ## Failure handling
//!
//! Arguments are validated before the document is touched: base element, target element,
//! distance, offset. The caller decides what a failure means:
//!
//! - [`PositionRequest::apply`] returns a [`PositionError`] to escalate.
//! - [`PositionRequest::apply_or_log`] logs through `tracing` and returns `false`.
//!
//! ## Example
//!
//! ```
//! use adaptive_menu_dom::{ElementSpec, Length, Page, Transform};
//! use adaptive_menu_position::{Placement, PositionRequest};
//! use kurbo::Size;
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let base = page.insert(
//!     None,
//!     ElementSpec::named("button").at(100.0, 40.0).width(Length::Px(80.0)).height(Length::Px(20.0)),
//! );
//! let popup = page.insert(None, ElementSpec::named("popup").width(Length::Px(120.0)));
//!
//! let placed = PositionRequest::new(base, popup, Placement::BottomCenter)
//!     .distance(10.0)
//!     .apply(&mut page)
//!     .unwrap();
//! assert_eq!(placed.top, Some(70.0));
//! assert_eq!(placed.left, Some(140.0));
//! assert_eq!(page.style(popup).unwrap().transform, Some(Transform::CENTER_X));
//!
//! // Silent mode: a bad distance is logged, nothing is written.
//! assert!(!PositionRequest::new(base, popup, Placement::Top).distance(f64::NAN).apply_or_log(&mut page));
//! ```

mod placement;
mod request;

pub use placement::{ParsePlacementError, Placed, Placement, compute};
pub use request::{PositionError, PositionRequest, Quantity, Role};
