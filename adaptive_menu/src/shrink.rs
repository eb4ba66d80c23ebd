// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The width-reduction loop that drives style changes and the final collapse.

use core::fmt::Debug;

use adaptive_menu_dom::{Document, Length};

use crate::cancel::CancellationToken;
use crate::config::MenuConfig;
use crate::controller::AdaptiveMenu;
use crate::error::MenuError;

/// Where a [`ShrinkAnimation`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShrinkPhase {
    /// Still narrowing the surface.
    Shrinking,
    /// The menu was replaced by the burger.
    Collapsed,
    /// The controller failed; nothing more happens.
    Halted,
    /// The cancellation token fired.
    Cancelled,
}

impl ShrinkPhase {
    /// Returns `true` for phases that ignore further ticks.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Shrinking)
    }
}

/// Narrows the tracked surface by a shrinking step each tick.
///
/// Every tick first checks whether the surface has come within the width
/// margin of the measured menu, or reached the minimum width. If so the menu
/// advances one style and the step is divided by the configured divisor; at
/// the densest style the menu collapses instead and the animation ends.
/// Otherwise, and after an advance, the surface width drops by the step.
#[derive(Clone, Debug)]
pub struct ShrinkAnimation<E> {
    surface: Option<E>,
    width: f64,
    step: f64,
    advances: u32,
    ticks: u64,
    phase: ShrinkPhase,
    token: CancellationToken,
}

impl<E: Copy + PartialEq + Debug> ShrinkAnimation<E> {
    /// Resolve the surface and declare its width transition.
    ///
    /// A failed menu yields an animation that is already halted. A missing
    /// surface poisons the menu; the animation halts on its first tick.
    pub fn start<D>(menu: &mut AdaptiveMenu<E>, doc: &mut D, token: CancellationToken) -> Self
    where
        D: Document<Element = E>,
    {
        let mut animation = Self {
            surface: None,
            width: 100.0,
            step: menu.config().start_step,
            advances: 0,
            ticks: 0,
            phase: ShrinkPhase::Shrinking,
            token,
        };
        if menu.is_failed() {
            animation.phase = ShrinkPhase::Halted;
            return animation;
        }
        match prepare_surface(menu.config(), doc) {
            Ok(surface) => animation.surface = Some(surface),
            Err(err) => menu.poison("start animation", &err),
        }
        animation
    }

    /// Current phase.
    pub fn phase(&self) -> ShrinkPhase {
        self.phase
    }

    /// Surface width in percent.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current decrement per tick, in percentage points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Style advances made so far.
    pub fn advances(&self) -> u32 {
        self.advances
    }

    /// Ticks processed while shrinking, including the final one.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The tracked surface, once resolved.
    pub fn surface(&self) -> Option<E> {
        self.surface
    }

    /// Run one step and return the resulting phase.
    pub fn tick<D>(&mut self, menu: &mut AdaptiveMenu<E>, doc: &mut D) -> ShrinkPhase
    where
        D: Document<Element = E>,
    {
        if self.phase.is_terminal() {
            return self.phase;
        }
        if self.token.is_cancelled() {
            tracing::debug!(ticks = self.ticks, "shrink animation cancelled");
            self.phase = ShrinkPhase::Cancelled;
            return self.phase;
        }
        self.ticks += 1;
        if let Err(err) = self.try_tick(menu, doc) {
            menu.poison("shrink tick", &err);
        }
        self.phase
    }

    fn try_tick<D>(&mut self, menu: &mut AdaptiveMenu<E>, doc: &mut D) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        if menu.is_failed() {
            tracing::debug!(ticks = self.ticks, "shrink animation halted");
            self.phase = ShrinkPhase::Halted;
            return Ok(());
        }
        let surface = self.surface.ok_or(MenuError::NotInitialized)?;
        let (margin, min_width, divisor) = {
            let config = menu.config();
            (config.width_margin, config.min_width_percent, config.step_divisor)
        };

        let available = doc.offset_size(surface)?.width - margin;
        if available < menu.measured_width() || self.width <= min_width {
            if menu.style().is_max() {
                menu.collapse_to_burger(doc);
                self.phase = if menu.is_failed() {
                    ShrinkPhase::Halted
                } else {
                    ShrinkPhase::Collapsed
                };
                return Ok(());
            }
            menu.advance_style(doc);
            self.advances += 1;
            self.step /= divisor;
        }

        self.width -= self.step;
        doc.style_mut(surface)?.width = Some(Length::Percent(self.width));
        tracing::trace!(width = self.width, step = self.step, "shrink tick");
        Ok(())
    }
}

fn prepare_surface<D: Document>(config: &MenuConfig, doc: &mut D) -> Result<D::Element, MenuError> {
    let surface = doc.find_element(&config.ids.surface)?;
    let transition = config.surface_transition();
    tracing::trace!(%transition, "surface transition declared");
    doc.style_mut(surface)?.transition = Some(transition);
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_menu_dom::{ClassToggler, ElementId, ElementLocator, Page};
    use proptest::prelude::*;

    use crate::cancel::CancellationSource;
    use crate::count::StyleLevel;
    use crate::scene::standard_page;

    struct Rig {
        page: Page,
        menu: AdaptiveMenu<ElementId>,
        animation: ShrinkAnimation<ElementId>,
        source: CancellationSource,
    }

    fn rig(count: &str) -> Rig {
        let config = MenuConfig::default();
        let mut page = standard_page(&config, Some(count));
        let mut menu = AdaptiveMenu::new(config);
        menu.initialize(&mut page);
        let source = CancellationSource::new();
        let animation = ShrinkAnimation::start(&mut menu, &mut page, source.token());
        Rig {
            page,
            menu,
            animation,
            source,
        }
    }

    impl Rig {
        fn tick(&mut self) -> ShrinkPhase {
            self.animation.tick(&mut self.menu, &mut self.page)
        }

        fn run(&mut self, limit: usize) -> ShrinkPhase {
            for _ in 0..limit {
                if self.tick().is_terminal() {
                    break;
                }
            }
            self.animation.phase()
        }
    }

    #[test]
    fn start_declares_the_width_transition() {
        let r = rig("5");
        let surface = r.animation.surface().unwrap();
        let style = r.page.style(surface).unwrap();
        assert_eq!(style.transition, Some(MenuConfig::default().surface_transition()));
        assert_eq!(r.animation.width(), 100.0);
        assert_eq!(r.animation.phase(), ShrinkPhase::Shrinking);
    }

    #[test]
    fn first_tick_applies_width() {
        let mut r = rig("5");
        assert_eq!(r.tick(), ShrinkPhase::Shrinking);
        let surface = r.animation.surface().unwrap();
        let Some(Length::Percent(width)) = r.page.style(surface).unwrap().width else {
            panic!("surface width should be a percentage");
        };
        assert!((width - 99.9).abs() < 1e-9);
    }

    #[test]
    fn full_run_collapses_after_two_advances() {
        let mut r = rig("5");
        assert_eq!(r.run(10_000), ShrinkPhase::Collapsed);
        assert_eq!(r.animation.advances(), 2);
        assert_eq!(r.menu.style(), StyleLevel::MAX);
        assert!(r.menu.is_collapsed());
        assert!(!r.menu.is_failed());
        let wrap = r.page.find_element("burgerMenuWrap").unwrap();
        assert!(r.page.has_class(wrap, "active-block"));

        let ticks = r.animation.ticks();
        assert_eq!(r.tick(), ShrinkPhase::Collapsed, "terminal phases ignore ticks");
        assert_eq!(r.animation.ticks(), ticks);
    }

    #[test]
    fn transitions_happen_exactly_when_the_surface_reaches_the_menu() {
        let mut r = rig("5");
        let surface = r.animation.surface().unwrap();
        loop {
            let available = r.page.offset_size(surface).unwrap().width - 2.0;
            let must_transition =
                available < r.menu.measured_width() || r.animation.width() <= 10.0;
            let advances = r.animation.advances();
            let phase = r.tick();
            let transitioned = r.animation.advances() > advances || phase == ShrinkPhase::Collapsed;
            assert_eq!(transitioned, must_transition, "at width {}", r.animation.width());
            if phase.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn cancellation_wins_over_shrinking() {
        let mut r = rig("5");
        r.tick();
        r.source.cancel();
        let width = r.animation.width();
        assert_eq!(r.tick(), ShrinkPhase::Cancelled);
        assert_eq!(r.animation.width(), width);
        assert!(!r.menu.is_collapsed());
    }

    #[test]
    fn missing_surface_halts_on_first_tick() {
        let config = MenuConfig::default();
        let mut page = standard_page(&config, Some("5"));
        let surface = page.find_element("mainScreen").unwrap();
        let main = page.find_element("mainMenu").unwrap();
        page.reparent(main, None);
        page.remove(surface);

        let mut menu = AdaptiveMenu::new(config);
        menu.initialize(&mut page);
        assert!(!menu.is_failed());
        let mut animation = ShrinkAnimation::start(&mut menu, &mut page, CancellationToken::never());
        assert!(menu.is_failed());
        assert_eq!(animation.phase(), ShrinkPhase::Shrinking);
        assert_eq!(animation.tick(&mut menu, &mut page), ShrinkPhase::Halted);
    }

    #[test]
    fn surface_lost_mid_run_poisons_then_halts() {
        let mut r = rig("5");
        for _ in 0..3 {
            assert_eq!(r.tick(), ShrinkPhase::Shrinking);
        }
        let width = r.animation.width();
        let surface = r.animation.surface().unwrap();
        let main = r.page.find_element("mainMenu").unwrap();
        r.page.reparent(main, None);
        r.page.remove(surface);

        assert_eq!(r.tick(), ShrinkPhase::Shrinking, "the failing tick only poisons");
        assert!(r.menu.is_failed());
        assert_eq!(r.animation.width(), width);

        assert_eq!(r.tick(), ShrinkPhase::Halted);
        assert_eq!(r.animation.width(), width);
        assert!(!r.menu.is_collapsed());
    }

    #[test]
    fn failed_menu_starts_halted() {
        let config = MenuConfig::default();
        let mut page = standard_page(&config, Some("5"));
        let mut menu = AdaptiveMenu::new(config);
        menu.advance_style(&mut page);
        assert!(menu.is_failed());
        let animation = ShrinkAnimation::start(&mut menu, &mut page, CancellationToken::never());
        assert_eq!(animation.phase(), ShrinkPhase::Halted);
        assert_eq!(animation.surface(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn step_after_n_advances(count in 3u8..=8) {
            let mut r = rig(&count.to_string());
            let mut seen = 0;
            while !r.tick().is_terminal() {
                if r.animation.advances() != seen {
                    seen = r.animation.advances();
                    let expected = 0.1 / 1.5_f64.powi(i32::try_from(seen).unwrap());
                    prop_assert!((r.animation.step() - expected).abs() < 1e-12);
                }
                prop_assert!(r.animation.ticks() < 10_000);
            }
            prop_assert_eq!(r.animation.phase(), ShrinkPhase::Collapsed);
            prop_assert_eq!(r.menu.labels().len(), usize::from(count));
        }
    }
}
