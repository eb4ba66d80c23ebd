// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: element identifiers, class names, timing and geometry.

use core::time::Duration;

use adaptive_menu_dom::{Easing, Transition};

/// Identifiers of the elements a controller drives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementIds {
    /// Form holding the element-count input; hidden on initialization.
    pub count_form: String,
    /// Element-count input.
    pub count_input: String,
    /// Secondary form shown under the menu.
    pub secondary_form: String,
    /// Menu container.
    pub menu: String,
    /// Tracked surface whose width shrinks.
    pub surface: String,
    /// Burger wrapper revealed on collapse.
    pub burger_wrap: String,
    /// Expandable panel listing the collapsed items.
    pub burger_panel: String,
    /// Burger icon; must have exactly three children.
    pub burger_icon: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            count_form: "inputFormMain".into(),
            count_input: "menuCount".into(),
            secondary_form: "inputFormBurger".into(),
            menu: "mainMenu".into(),
            surface: "mainScreen".into(),
            burger_wrap: "burgerMenuWrap".into(),
            burger_panel: "burgerExpandMenu".into(),
            burger_icon: "burgerMenu".into(),
        }
    }
}

/// Class names toggled by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Removes an element from layout.
    pub hidden: String,
    /// Shows an element as a block.
    pub block: String,
    /// Shows an element as an inline block.
    pub inline_block: String,
    /// Expanded burger panel.
    pub panel_open: String,
    /// Collapsed burger panel.
    pub panel_closed: String,
    /// Prefix of the per-style menu item class; the style number is appended.
    pub item_prefix: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "hidden".into(),
            block: "active-block".into(),
            inline_block: "active-inline-block".into(),
            panel_open: "visible-yes".into(),
            panel_closed: "visible-no".into(),
            item_prefix: "menu-style-".into(),
        }
    }
}

/// Configuration of an [`AdaptiveMenu`](crate::AdaptiveMenu) and its shrink animation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Element identifiers.
    pub ids: ElementIds,
    /// Class names.
    pub classes: ClassNames,
    /// Time between shrink ticks.
    pub tick_interval: Duration,
    /// Width decrement per tick at style 0, in percentage points.
    pub start_step: f64,
    /// The step is divided by this after every style advance.
    pub step_divisor: f64,
    /// The surface never shrinks past this width, in percent.
    pub min_width_percent: f64,
    /// Pixels subtracted from the surface width before comparing it with the menu.
    pub width_margin: f64,
    /// Gap between the menu and the secondary form.
    pub form_gap: f64,
    /// Gap between the burger wrapper and its panel.
    pub panel_gap: f64,
    /// Duration of the surface's width transition, in milliseconds.
    pub surface_transition_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            tick_interval: Duration::from_millis(40),
            start_step: 0.1,
            step_divisor: 1.5,
            min_width_percent: 10.0,
            width_margin: 2.0,
            form_gap: 30.0,
            panel_gap: 5.0,
            surface_transition_ms: 400,
        }
    }
}

impl MenuConfig {
    /// Transition declared on the surface when the animation starts (`width 0.4s linear`).
    pub fn surface_transition(&self) -> Transition {
        Transition {
            property: "width".into(),
            duration_ms: self.surface_transition_ms,
            easing: Easing::Linear,
        }
    }

    /// Step size after `advances` style advances.
    pub fn step_after(&self, advances: u32) -> f64 {
        (0..advances).fold(self.start_step, |step, _| step / self.step_divisor)
    }
}
