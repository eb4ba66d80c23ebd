// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership of the active menu and its animation.

use core::time::Duration;

use adaptive_menu_dom::Document;

use crate::cancel::{CancellationSource, CancellationToken};
use crate::config::MenuConfig;
use crate::controller::AdaptiveMenu;
use crate::shrink::{ShrinkAnimation, ShrinkPhase};
use crate::timer::IntervalTimer;

#[derive(Debug)]
struct ActiveMenu<E> {
    menu: AdaptiveMenu<E>,
    animation: ShrinkAnimation<E>,
    timer: IntervalTimer,
    source: CancellationSource,
}

/// A document with at most one active adaptive menu.
///
/// [`generate`](Self::generate) is the "generate menu" action: it cancels the
/// previous animation and builds a fresh menu. The host drives time with
/// [`advance_to`](Self::advance_to) and forwards icon clicks to
/// [`toggle_burger`](Self::toggle_burger).
#[derive(Debug)]
pub struct MenuSession<D: Document> {
    doc: D,
    config: MenuConfig,
    active: Option<ActiveMenu<D::Element>>,
}

impl<D: Document> MenuSession<D> {
    /// A session over `doc` with no menu yet.
    pub fn new(doc: D, config: MenuConfig) -> Self {
        Self {
            doc,
            config,
            active: None,
        }
    }

    /// The document.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// The document, mutably; e.g. to change the count input between runs.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// Configuration used for new menus.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The active menu.
    pub fn menu(&self) -> Option<&AdaptiveMenu<D::Element>> {
        self.active.as_ref().map(|a| &a.menu)
    }

    /// The active menu's animation.
    pub fn animation(&self) -> Option<&ShrinkAnimation<D::Element>> {
        self.active.as_ref().map(|a| &a.animation)
    }

    /// Phase of the active animation.
    pub fn phase(&self) -> Option<ShrinkPhase> {
        self.animation().map(ShrinkAnimation::phase)
    }

    /// A token observing the active animation's cancellation.
    pub fn cancellation_token(&self) -> Option<CancellationToken> {
        self.active.as_ref().map(|a| a.source.token())
    }

    /// Replace the active menu with a new one and start shrinking at `now`.
    ///
    /// The previous animation is cancelled before the new menu exists.
    pub fn generate(&mut self, now: Duration) -> CancellationToken {
        self.cancel();
        let source = CancellationSource::new();
        let token = source.token();

        let mut menu = AdaptiveMenu::new(self.config.clone());
        menu.initialize(&mut self.doc);
        let animation = ShrinkAnimation::start(&mut menu, &mut self.doc, source.token());
        let timer = IntervalTimer::new(self.config.tick_interval, now);
        tracing::debug!(
            count = %menu.element_count(),
            failed = menu.is_failed(),
            "menu generated"
        );

        self.active = Some(ActiveMenu {
            menu,
            animation,
            timer,
            source,
        });
        token
    }

    /// Run every tick due at `now` and return how many ran.
    ///
    /// Ticks due after the animation ends are dropped.
    pub fn advance_to(&mut self, now: Duration) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let due = active.timer.due(now);
        let mut ran = 0;
        for _ in 0..due {
            if active.animation.phase().is_terminal() {
                break;
            }
            active.animation.tick(&mut active.menu, &mut self.doc);
            ran += 1;
        }
        ran
    }

    /// Forward a burger icon click. Returns `false` when there is no menu.
    pub fn toggle_burger(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) => {
                active.menu.toggle_burger_panel(&mut self.doc);
                true
            }
            None => false,
        }
    }

    /// Cancel the active animation; the menu stays as it is.
    pub fn cancel(&mut self) {
        if let Some(active) = &self.active {
            active.source.cancel();
        }
    }

    /// Give the document back.
    pub fn into_document(self) -> D {
        self.doc
    }
}
