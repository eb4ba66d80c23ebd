// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive Menu DOM: a Kurbo-native element tree with classes, inline styles and a deterministic layout pass.
//!
//! This crate is the document surface that menu controllers are written against.
//!
//! - [`ElementLocator`], [`ClassToggler`] and [`Document`] describe what a controller needs from a page.
//! - [`Page`] is an in-memory implementation: a generational element tree with class lists, inline
//!   style, typed [`Markup`](markup::Markup) content and a synchronous layout pass.
//! - [`TextMetrics`] sizes content deterministically, so layout-driven behavior can be tested
//!   without a browser.
//!
//! ## Not a browser
//!
//! Layout is intentionally small: block boxes, percentage and pixel sizes, content-sized elements,
//! document-positioned elements, and `display: none` through hidden classes.
//! There is no cascade, no line breaking and no flex or grid.
//!
//! ## Minimal usage
//!
//! ```
//! use adaptive_menu_dom::{ClassToggler, Document, ElementLocator, ElementSpec, Length, Page};
//! use adaptive_menu_dom::markup::Markup;
//! use kurbo::Size;
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let screen = page.insert(None, ElementSpec::named("screen").width(Length::Percent(100.0)));
//! let _menu = page.insert(Some(screen), ElementSpec::named("menu").class("hidden"));
//!
//! let menu = page.find_element("menu").unwrap();
//! assert_eq!(page.offset_size(menu).unwrap(), Size::ZERO);
//!
//! page.set_classes(menu, Some("active"), Some("hidden")).unwrap();
//! page.set_content(menu, vec![Markup::heading("Menu")]).unwrap();
//! assert!(page.offset_size(menu).unwrap().width > 0.0);
//!
//! page.style_mut(screen).unwrap().width = Some(Length::Percent(50.0));
//! assert_eq!(page.offset_size(screen).unwrap().width, 400.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
pub mod markup;
mod metrics;
mod page;
mod types;

pub use host::{ClassToggler, Document, ElementLocator, LookupError};
pub use metrics::TextMetrics;
pub use page::{HIDDEN_CLASS, Page};
pub use types::{ElementId, ElementSpec, Easing, Edges, InlineStyle, Length, Transform, Transition};
