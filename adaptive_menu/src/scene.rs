// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made page holding every element a menu needs.

use adaptive_menu_dom::{ElementSpec, Length, Page, TextMetrics};
use kurbo::Size;

use crate::config::MenuConfig;

/// Viewport of [`standard_page`].
pub const STANDARD_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Build the standard page for `config`.
///
/// - The count form (visible) holds the count input, prefilled with `count_input`.
/// - The tracked surface spans the viewport and contains the hidden menu.
/// - The secondary form, burger wrapper and burger panel start hidden or closed.
/// - The burger icon inside the wrapper has three bars.
///
/// Item classes are padded 24, 12 and 4 pixels per side for styles 0, 1 and 2,
/// so each style is visibly narrower than the last.
pub fn standard_page(config: &MenuConfig, count_input: Option<&str>) -> Page {
    let ids = &config.ids;
    let classes = &config.classes;
    let prefix = &classes.item_prefix;

    let metrics = TextMetrics::default()
        .with_item_spacing(8.0)
        .with_class_padding(&format!("{prefix}0"), 24.0)
        .with_class_padding(&format!("{prefix}1"), 12.0)
        .with_class_padding(&format!("{prefix}2"), 4.0);
    let mut page = Page::new(STANDARD_VIEWPORT).with_metrics(metrics);
    if classes.hidden != adaptive_menu_dom::HIDDEN_CLASS {
        page.add_hidden_class(&classes.hidden);
    }

    let form = page.insert(None, ElementSpec::named(&ids.count_form).at(20.0, 20.0));
    let mut input = ElementSpec::named(&ids.count_input)
        .width(Length::Px(120.0))
        .height(Length::Px(24.0));
    if let Some(value) = count_input {
        input = input.value(value);
    }
    page.insert(Some(form), input);

    let surface = page.insert(
        None,
        ElementSpec::named(&ids.surface)
            .at(0.0, 80.0)
            .width(Length::Percent(100.0)),
    );
    page.insert(
        Some(surface),
        ElementSpec::named(&ids.menu).class(&classes.hidden),
    );

    page.insert(
        None,
        ElementSpec::named(&ids.secondary_form)
            .class(&classes.hidden)
            .width(Length::Px(320.0))
            .height(Length::Px(160.0)),
    );

    let wrap = page.insert(
        None,
        ElementSpec::named(&ids.burger_wrap)
            .class(&classes.hidden)
            .at(20.0, 20.0)
            .width(Length::Px(40.0)),
    );
    let icon = page.insert(Some(wrap), ElementSpec::named(&ids.burger_icon).at(5.0, 5.0));
    for y in [0.0, 10.0, 20.0] {
        page.insert(
            Some(icon),
            ElementSpec::default()
                .at(0.0, y)
                .width(Length::Px(30.0))
                .height(Length::Px(4.0)),
        );
    }

    // Positioned under the wrapper on collapse, so it lives outside it.
    page.insert(
        None,
        ElementSpec::named(&ids.burger_panel)
            .class(&classes.panel_closed)
            .width(Length::Px(160.0)),
    );
    page
}
