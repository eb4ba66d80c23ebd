// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-bar burger icon and its cross state.

use core::f64::consts::FRAC_PI_4;

use adaptive_menu_dom::{Document, LookupError, Transform};
use kurbo::Affine;

use crate::error::MenuError;

/// Burger icon bars, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BurgerIcon<E> {
    bars: [E; 3],
}

impl<E: Copy> BurgerIcon<E> {
    /// Resolve the bars from the icon element's children.
    ///
    /// Fails with [`MenuError::IconShape`] unless there are exactly three.
    pub fn from_children<D>(doc: &D, icon: E) -> Result<Self, MenuError>
    where
        D: Document<Element = E>,
    {
        let children = doc.children(icon)?;
        let bars: [E; 3] = children
            .try_into()
            .map_err(|children: Vec<E>| MenuError::IconShape {
                found: children.len(),
            })?;
        Ok(Self { bars })
    }

    /// Bar handles, top to bottom.
    pub fn bars(&self) -> [E; 3] {
        self.bars
    }

    /// Cross the outer bars and fade the middle one.
    pub fn show_cross<D>(&self, doc: &mut D) -> Result<(), LookupError>
    where
        D: Document<Element = E>,
    {
        let [top, middle, bottom] = self.bars;
        doc.style_mut(top)?.transform = Some(Transform::from_affine(cross_top()));
        doc.style_mut(middle)?.opacity = Some(0.0);
        doc.style_mut(bottom)?.transform = Some(Transform::from_affine(cross_bottom()));
        Ok(())
    }

    /// Back to three parallel bars.
    pub fn show_bars<D>(&self, doc: &mut D) -> Result<(), LookupError>
    where
        D: Document<Element = E>,
    {
        let [top, middle, bottom] = self.bars;
        doc.style_mut(top)?.transform = Some(Transform::NONE);
        doc.style_mut(middle)?.opacity = Some(1.0);
        doc.style_mut(bottom)?.transform = Some(Transform::NONE);
        Ok(())
    }
}

/// `rotate(45deg) translate(10px, 10px)`
pub(crate) fn cross_top() -> Affine {
    Affine::rotate(FRAC_PI_4) * Affine::translate((10.0, 10.0))
}

/// `rotate(-45deg) translate(10px, -10px)`
pub(crate) fn cross_bottom() -> Affine {
    Affine::rotate(-FRAC_PI_4) * Affine::translate((10.0, -10.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_menu_dom::{ElementId, ElementSpec, Length, Page};
    use kurbo::{Point, Size};

    fn icon_page(bars: usize) -> (Page, ElementId) {
        let mut page = Page::new(Size::new(400.0, 300.0));
        let icon = page.insert(None, ElementSpec::named("icon").at(20.0, 20.0));
        for i in 0..bars {
            #[allow(clippy::cast_precision_loss, reason = "Tiny test counts.")]
            let y = i as f64 * 10.0;
            page.insert(
                Some(icon),
                ElementSpec::default()
                    .at(0.0, y)
                    .width(Length::Px(30.0))
                    .height(Length::Px(4.0)),
            );
        }
        (page, icon)
    }

    #[test]
    fn wrong_bar_count_is_rejected() {
        let (page, icon) = icon_page(2);
        assert_eq!(
            BurgerIcon::from_children(&page, icon),
            Err(MenuError::IconShape { found: 2 })
        );
        let (page, icon) = icon_page(4);
        assert_eq!(
            BurgerIcon::from_children(&page, icon),
            Err(MenuError::IconShape { found: 4 })
        );
    }

    #[test]
    fn cross_then_bars_is_neutral() {
        let (mut page, icon) = icon_page(3);
        let burger = BurgerIcon::from_children(&page, icon).unwrap();
        let [top, middle, bottom] = burger.bars();

        burger.show_cross(&mut page).unwrap();
        assert_eq!(page.style(middle).unwrap().opacity, Some(0.0));
        assert!(!page.style(top).unwrap().transform.unwrap().is_none());

        burger.show_bars(&mut page).unwrap();
        for bar in [top, bottom] {
            assert_eq!(page.style(bar).unwrap().transform, Some(Transform::NONE));
        }
        assert_eq!(page.style(middle).unwrap().opacity, Some(1.0));
    }

    #[test]
    fn cross_rotates_after_translating() {
        // Translate first, then rotate: (0,0) lands on the rotated (10,10).
        let p = cross_top() * Point::ZERO;
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 200.0_f64.sqrt()).abs() < 1e-9);
        let q = cross_bottom() * Point::ZERO;
        assert!(q.x.abs() < 1e-9);
        assert!((q.y + 200.0_f64.sqrt()).abs() < 1e-9);
    }
}
