// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrink a menu until it collapses into a burger, then toggle the burger.
//!
//! The host clock advances in 200 ms frames; every frame reports the surface
//! width and the menu style.
//!
//! Run:
//! - `cargo run -p adaptive_menu_demos --example shrink_simulation -- 6`
//! - `RUST_LOG=adaptive_menu=trace cargo run -p adaptive_menu_demos --example shrink_simulation`

use std::time::Duration;

use adaptive_menu::{MenuConfig, MenuSession, ShrinkPhase, standard_page};
use adaptive_menu_dom::markup::to_html;
use adaptive_menu_dom::{Document, ElementLocator, Page};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(200);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let count = std::env::args().nth(1);
    let config = MenuConfig::default();
    let page = standard_page(&config, count.as_deref());
    let mut session = MenuSession::new(page, config);

    let mut now = Duration::ZERO;
    session.generate(now);
    print_menu(&session);

    let mut last_style = None;
    while session.phase() == Some(ShrinkPhase::Shrinking) {
        now += FRAME;
        session.advance_to(now);
        let (Some(menu), Some(animation)) = (session.menu(), session.animation()) else {
            break;
        };
        if last_style != Some(menu.style()) {
            last_style = Some(menu.style());
            println!(
                "t={:>6} ms  width {:>6.2}%  style {} ({}), menu {} px",
                now.as_millis(),
                animation.width(),
                menu.style().get(),
                menu.style().label(),
                menu.measured_width(),
            );
        }
    }

    println!("phase: {:?} after {:?}", session.phase(), now);
    if let Some(animation) = session.animation() {
        println!("ticks: {}, advances: {}", animation.ticks(), animation.advances());
    }

    let page = session.document();
    if let Ok(panel) = page.find_element(&session.config().ids.burger_panel) {
        println!("burger panel:\n{}", to_html(page.content(panel)));
    }

    for _ in 0..2 {
        session.toggle_burger();
        report_icon(&mut session);
    }
}

fn print_menu(session: &MenuSession<Page>) {
    let page = session.document();
    if let Ok(menu) = page.find_element(&session.config().ids.menu) {
        println!("initial menu:\n{}", to_html(page.content(menu)));
    }
}

fn report_icon(session: &mut MenuSession<Page>) {
    let open = session.menu().is_some_and(|m| m.is_burger_open());
    let icon_name = session.config().ids.burger_icon.clone();
    let page = session.document_mut();
    let Ok(icon) = page.find_element(&icon_name) else {
        return;
    };
    let Ok(bars) = page.children(icon) else {
        return;
    };
    let extents: Vec<String> = bars
        .into_iter()
        .filter_map(|bar| page.bounding_client_rect(bar).ok())
        .map(|r| format!("{:.1}x{:.1}", r.width(), r.height()))
        .collect();
    println!("burger open: {open}, bar extents: {}", extents.join(", "));
}
