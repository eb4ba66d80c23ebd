// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic content measurement.

use alloc::collections::BTreeMap;
use alloc::string::String;

use kurbo::Size;

use crate::markup::{Markup, Tag};

/// Monospace text metrics used to size element content.
///
/// Top-level fragment nodes stack vertically. Children of an element run in
/// a row; list items are separated by `item_spacing`. An element whose class
/// has a registered padding grows by that padding on both sides.
#[derive(Clone, Debug)]
pub struct TextMetrics {
    /// Advance of one character in body text.
    pub char_width: f64,
    /// Advance of one character inside a heading.
    pub heading_char_width: f64,
    /// Height of one line.
    pub line_height: f64,
    /// Horizontal gap between list items.
    pub item_spacing: f64,
    class_padding: BTreeMap<String, f64>,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            heading_char_width: 12.0,
            line_height: 20.0,
            item_spacing: 0.0,
            class_padding: BTreeMap::new(),
        }
    }
}

impl TextMetrics {
    /// Set the gap between list items.
    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Register horizontal padding for elements carrying `class`.
    pub fn with_class_padding(mut self, class: &str, padding: f64) -> Self {
        self.class_padding.insert(class.into(), padding);
        self
    }

    /// Horizontal padding registered for `class`.
    pub fn class_padding(&self, class: &str) -> f64 {
        self.class_padding.get(class).copied().unwrap_or(0.0)
    }

    /// Measure a fragment.
    pub fn measure(&self, fragment: &[Markup]) -> Size {
        fragment.iter().fold(Size::ZERO, |acc, node| {
            let s = self.measure_node(node, false);
            Size::new(acc.width.max(s.width), acc.height + s.height)
        })
    }

    fn measure_node(&self, node: &Markup, in_heading: bool) -> Size {
        match node {
            Markup::Text(text) => {
                let advance = if in_heading {
                    self.heading_char_width
                } else {
                    self.char_width
                };
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Character counts are far below 2^52."
                )]
                let width = text.chars().count() as f64 * advance;
                Size::new(width, self.line_height)
            }
            Markup::Element {
                tag,
                class,
                children,
            } => {
                let in_heading = in_heading || *tag == Tag::Heading;
                let mut width = 0.0;
                let mut height: f64 = 0.0;
                for (i, child) in children.iter().enumerate() {
                    let s = self.measure_node(child, in_heading);
                    if *tag == Tag::List && i > 0 {
                        width += self.item_spacing;
                    }
                    width += s.width;
                    height = height.max(s.height);
                }
                let padding = class.as_deref().map_or(0.0, |c| self.class_padding(c));
                Size::new(width + 2.0 * padding, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_of_items_sums_widths_and_spacing() {
        let metrics = TextMetrics::default()
            .with_item_spacing(4.0)
            .with_class_padding("wide", 10.0);
        let list = Markup::list([
            Markup::item(Markup::link("ab", Some("wide"))),
            Markup::item(Markup::link("cd", None)),
        ]);
        // (16 + 20) + 4 + 16
        assert_eq!(metrics.measure(&[list]), Size::new(56.0, 20.0));
    }

    #[test]
    fn fragment_stacks_blocks() {
        let metrics = TextMetrics::default();
        let fragment = [
            Markup::heading("Title"),
            Markup::list([Markup::item(Markup::link("x", None))]),
        ];
        let size = metrics.measure(&fragment);
        assert_eq!(size.width, 60.0, "heading glyphs are wider");
        assert_eq!(size.height, 40.0);
    }
}
