// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive Menu: a navigation menu that densifies as its container narrows and then collapses into a burger.
//!
//! ## Overview
//!
//! An [`AdaptiveMenu`] renders a heading and a row of `N` links (3 to 8, read from
//! a count input) into a menu element. A [`ShrinkAnimation`] narrows a tracked
//! surface by a small step every tick. When the surface comes within a margin
//! of the menu's measured width, the menu moves to the next, denser
//! [`StyleLevel`] and the step shrinks. After the densest style the menu is
//! hidden and the same labels are shown in a burger panel, toggled through
//! [`AdaptiveMenu::toggle_burger_panel`].
//!
//! The controller is written against the document traits of
//! [`adaptive_menu_dom`]; positioning goes through [`adaptive_menu_position`].
//!
//! ## Time and ownership
//!
//! Nothing here sleeps or spawns. A [`MenuSession`] owns the document and at
//! most one active menu; the host calls [`MenuSession::advance_to`] with its
//! monotonic clock and every due tick runs synchronously. Generating a new menu
//! cancels the previous animation through its [`CancellationSource`].
//!
//! ## Failures
//!
//! Controller operations log failures with `tracing` and mark the menu failed.
//! A failed menu stops animating and ignores further operations, except
//! burger toggling. Partial effects of a failed operation are not rolled back.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use adaptive_menu::{MenuConfig, MenuSession, ShrinkPhase, standard_page};
//!
//! let config = MenuConfig::default();
//! let page = standard_page(&config, Some("4"));
//! let mut session = MenuSession::new(page, config);
//!
//! session.generate(Duration::ZERO);
//! session.advance_to(Duration::from_secs(60));
//! assert_eq!(session.phase(), Some(ShrinkPhase::Collapsed));
//!
//! let menu = session.menu().unwrap();
//! assert_eq!(menu.labels(), ["Menu 1", "Menu 2", "Menu 3", "Menu 4"]);
//! assert!(session.toggle_burger());
//! ```

mod cancel;
mod config;
mod controller;
mod count;
mod error;
mod icon;
mod scene;
mod session;
mod shrink;
mod timer;

pub use cancel::{CancellationSource, CancellationToken};
pub use config::{ClassNames, ElementIds, MenuConfig};
pub use controller::AdaptiveMenu;
pub use count::{ElementCount, MAX_STYLES, StyleLevel};
pub use error::MenuError;
pub use icon::BurgerIcon;
pub use scene::{STANDARD_VIEWPORT, standard_page};
pub use session::MenuSession;
pub use shrink::{ShrinkAnimation, ShrinkPhase};
pub use timer::IntervalTimer;
