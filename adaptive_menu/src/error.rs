// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use adaptive_menu_dom::LookupError;
use adaptive_menu_position::PositionError;

/// Failure inside a controller operation.
///
/// Controller operations do not return these; they log them and poison the
/// instance. The type is public so hosts can drive the fallible steps
/// themselves, e.g. [`BurgerIcon::from_children`](crate::BurgerIcon::from_children).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MenuError {
    /// A required element is missing or stale.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Positioning failed after its arguments were accepted.
    #[error(transparent)]
    Position(#[from] PositionError),
    /// The burger icon does not have exactly three bars.
    #[error("burger icon must have exactly 3 bars, found {found}")]
    IconShape {
        /// Number of children the icon element has.
        found: usize,
    },
    /// The menu is already at its densest style.
    #[error("menu style cannot go past the densest level")]
    StyleCeiling,
    /// The menu was used before `initialize` resolved it.
    #[error("menu is not initialized")]
    NotInitialized,
}
