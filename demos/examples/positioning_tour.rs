// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Place a popup around a button in every placement, then show the silent failure mode.
//!
//! Run:
//! - `cargo run -p adaptive_menu_demos --example positioning_tour`

use adaptive_menu_dom::{ElementSpec, Length, Page};
use adaptive_menu_position::{Placement, PositionRequest};
use kurbo::{Size, Vec2};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut page = Page::new(Size::new(800.0, 600.0));
    let button = page.insert(
        None,
        ElementSpec::named("button")
            .at(300.0, 250.0)
            .width(Length::Px(120.0))
            .height(Length::Px(40.0)),
    );
    let popup = page.insert(
        None,
        ElementSpec::named("popup")
            .width(Length::Px(80.0))
            .height(Length::Px(30.0)),
    );
    page.set_scroll_offset(Vec2::new(0.0, 50.0));

    println!("button: {:?}", page.layout_box(button));
    for placement in Placement::ALL {
        match PositionRequest::new(button, popup, placement)
            .distance(8.0)
            .offset(4.0)
            .apply(&mut page)
        {
            Ok(placed) => println!(
                "{:<13} top {:>7?}  left {:>7?}  box {:?}",
                placement.name(),
                placed.top,
                placed.left,
                page.layout_box(popup),
            ),
            Err(err) => println!("{:<13} failed: {err}", placement.name()),
        }
    }

    // Rejected arguments are logged, not returned.
    let ok = PositionRequest::bottom(button, popup)
        .distance(f64::NAN)
        .apply_or_log(&mut page);
    println!("NaN distance applied: {ok}");

    page.remove(popup);
    let ok = PositionRequest::top(button, popup).apply_or_log(&mut page);
    println!("removed target applied: {ok}");
}
