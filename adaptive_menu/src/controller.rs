// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adaptive menu state machine.

use adaptive_menu_dom::markup::Markup;
use adaptive_menu_dom::Document;
use adaptive_menu_position::PositionRequest;

use crate::config::MenuConfig;
use crate::count::{ElementCount, StyleLevel};
use crate::error::MenuError;
use crate::icon::BurgerIcon;

/// An adaptive menu bound to one activation.
///
/// Every operation catches its own failures: the error is logged with
/// `tracing::error!` and the instance is marked failed. A failed instance
/// ignores [`initialize`](Self::initialize), [`advance_style`](Self::advance_style)
/// and [`collapse_to_burger`](Self::collapse_to_burger) and is never revived.
/// Steps applied before a failure stay applied.
///
/// [`toggle_burger_panel`](Self::toggle_burger_panel) is not guarded by the
/// failed flag, so a burger that was shown keeps toggling.
#[derive(Clone, Debug)]
pub struct AdaptiveMenu<E> {
    config: MenuConfig,
    style: StyleLevel,
    count: ElementCount,
    labels: Vec<String>,
    measured_width: f64,
    burger_open: bool,
    failed: bool,
    collapsed: bool,
    menu: Option<E>,
}

impl<E: Copy + PartialEq + core::fmt::Debug> AdaptiveMenu<E> {
    /// A fresh, uninitialized menu.
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            style: StyleLevel::FIRST,
            count: ElementCount::DEFAULT,
            labels: Vec::new(),
            measured_width: 0.0,
            burger_open: false,
            failed: false,
            collapsed: false,
            menu: None,
        }
    }

    /// Configuration this menu was built with.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Active style.
    pub fn style(&self) -> StyleLevel {
        self.style
    }

    /// Number of items.
    pub fn element_count(&self) -> ElementCount {
        self.count
    }

    /// Item labels recorded by the first render; empty before it.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Menu width measured after the last render.
    pub fn measured_width(&self) -> f64 {
        self.measured_width
    }

    /// Whether the burger panel is expanded.
    pub fn is_burger_open(&self) -> bool {
        self.burger_open
    }

    /// Whether an operation has failed. Sticky.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether the menu has been replaced by the burger.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Show the menu and the secondary form, render the first style and measure it.
    pub fn initialize<D>(&mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        if self.failed {
            return;
        }
        if let Err(err) = self.try_initialize(doc) {
            self.poison("initialize", &err);
        }
    }

    fn try_initialize<D>(&mut self, doc: &mut D) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        let ids = &self.config.ids;
        let classes = &self.config.classes;

        let count_form = doc.find_element(&ids.count_form)?;
        doc.set_classes(count_form, Some(&classes.hidden), None)?;

        let secondary = doc.find_element(&ids.secondary_form)?;
        doc.set_classes(secondary, Some(&classes.block), Some(&classes.hidden))?;

        let menu = doc.find_element(&ids.menu)?;
        doc.set_classes(menu, Some(&classes.inline_block), Some(&classes.hidden))?;
        self.menu = Some(menu);

        let input = doc.find_element(&ids.count_input)?;
        self.count = ElementCount::from_input(doc.input_value(input)?.as_deref());

        self.render_into(doc, menu)?;
        let gap = self.config.form_gap;
        place_below(doc, menu, secondary, gap)?;

        tracing::debug!(count = %self.count, width = self.measured_width, "menu initialized");
        Ok(())
    }

    /// Markup for the active style: a heading and one link per item.
    ///
    /// The first call records the item labels; later calls never change them.
    fn render_menu(&mut self) -> Vec<Markup> {
        let record = self.labels.is_empty();
        let class = self.style.item_class(&self.config.classes.item_prefix);
        let items: Vec<Markup> = (1..=self.count.get())
            .map(|i| {
                let label = format!("Menu {i}");
                let item = Markup::item(Markup::link(&label, Some(&class)));
                if record {
                    self.labels.push(label);
                }
                item
            })
            .collect();
        vec![Markup::heading(self.style.label()), Markup::list(items)]
    }

    /// Move to the next denser style, re-render and remeasure.
    ///
    /// At the densest style this fails and poisons the instance.
    pub fn advance_style<D>(&mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        if self.failed {
            return;
        }
        if let Err(err) = self.try_advance_style(doc) {
            self.poison("advance style", &err);
        }
    }

    fn try_advance_style<D>(&mut self, doc: &mut D) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        self.style = self.style.next().ok_or(MenuError::StyleCeiling)?;
        let menu = self.menu.ok_or(MenuError::NotInitialized)?;
        self.render_into(doc, menu)?;
        tracing::debug!(style = self.style.get(), width = self.measured_width, "menu style advanced");
        Ok(())
    }

    fn render_into<D>(&mut self, doc: &mut D, menu: E) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        let markup = self.render_menu();
        doc.set_content(menu, markup)?;
        self.measured_width = doc.offset_size(menu)?.width;
        Ok(())
    }

    /// Replace the menu and the secondary form with the burger.
    pub fn collapse_to_burger<D>(&mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        if self.failed {
            return;
        }
        match self.try_collapse(doc) {
            Ok(()) => {
                self.collapsed = true;
                tracing::debug!(items = self.labels.len(), "menu collapsed to burger");
            }
            Err(err) => self.poison("collapse to burger", &err),
        }
    }

    fn try_collapse<D>(&self, doc: &mut D) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        let ids = &self.config.ids;
        let classes = &self.config.classes;

        let menu = self.menu.ok_or(MenuError::NotInitialized)?;
        doc.set_classes(menu, Some(&classes.hidden), Some(&classes.inline_block))?;

        let wrap = doc.find_element(&ids.burger_wrap)?;
        doc.set_classes(wrap, Some(&classes.block), Some(&classes.hidden))?;

        let items = self
            .labels
            .iter()
            .map(|label| Markup::item(Markup::link(label, None)));
        let panel = doc.find_element(&ids.burger_panel)?;
        doc.set_content(panel, vec![Markup::list(items)])?;

        let secondary = doc.find_element(&ids.secondary_form)?;
        doc.set_classes(secondary, Some(&classes.hidden), Some(&classes.block))?;

        place_below(doc, wrap, panel, self.config.panel_gap)?;
        Ok(())
    }

    /// Open or close the burger panel and morph the icon.
    pub fn toggle_burger_panel<D>(&mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        self.burger_open = !self.burger_open;
        if let Err(err) = self.apply_burger_state(doc) {
            self.poison("toggle burger panel", &err);
        }
    }

    fn apply_burger_state<D>(&self, doc: &mut D) -> Result<(), MenuError>
    where
        D: Document<Element = E>,
    {
        let ids = &self.config.ids;
        let classes = &self.config.classes;
        let panel = doc.find_element(&ids.burger_panel)?;
        let icon = doc.find_element(&ids.burger_icon)?;
        let icon = BurgerIcon::from_children(doc, icon)?;
        if self.burger_open {
            doc.set_classes(panel, Some(&classes.panel_open), Some(&classes.panel_closed))?;
            icon.show_cross(doc)?;
        } else {
            doc.set_classes(panel, Some(&classes.panel_closed), Some(&classes.panel_open))?;
            icon.show_bars(doc)?;
        }
        Ok(())
    }

    pub(crate) fn poison(&mut self, op: &'static str, err: &MenuError) {
        tracing::error!(op, "{err}");
        self.failed = true;
    }
}

/// Anchor `target` under `base`. Rejected arguments are logged and skipped;
/// anything that fails afterwards is returned.
fn place_below<D: Document>(
    doc: &mut D,
    base: D::Element,
    target: D::Element,
    gap: f64,
) -> Result<(), MenuError> {
    match PositionRequest::bottom(base, target).distance(gap).apply(doc) {
        Ok(_) => Ok(()),
        Err(err) if err.is_validation() => {
            tracing::warn!("position check error: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_menu_dom::markup::{Tag, to_html};
    use adaptive_menu_dom::{ClassToggler, ElementId, ElementLocator, Page, Transform};
    use proptest::prelude::*;

    use crate::scene::standard_page;

    fn setup(count: &str) -> (Page, AdaptiveMenu<ElementId>) {
        let config = MenuConfig::default();
        let page = standard_page(&config, Some(count));
        (page, AdaptiveMenu::new(config))
    }

    fn id(page: &Page, name: &str) -> ElementId {
        page.find_element(name).unwrap()
    }

    #[test]
    fn initialize_renders_style_zero() {
        let (mut page, mut menu) = setup("4");
        menu.initialize(&mut page);
        assert!(!menu.is_failed());
        assert_eq!(menu.element_count().get(), 4);

        let main = id(&page, "mainMenu");
        let content = page.content(main).to_vec();
        assert_eq!(content[0].text_content(), "Large screen");
        let links: Vec<String> = content[1]
            .find_all(Tag::Link)
            .iter()
            .map(|m| m.text_content())
            .collect();
        assert_eq!(links, ["Menu 1", "Menu 2", "Menu 3", "Menu 4"]);
        assert!(content[1].find_all(Tag::Link).iter().all(|l| l.class() == Some("menu-style-0")));
        assert_eq!(menu.measured_width(), page.offset_size(main).unwrap().width);

        assert!(page.has_class(id(&page, "inputFormMain"), "hidden"));
        let form = id(&page, "inputFormBurger");
        assert!(page.has_class(form, "active-block"));
        assert!(!page.has_class(form, "hidden"));
        assert!(page.has_class(main, "active-inline-block"));
    }

    #[test]
    fn secondary_form_sits_under_the_menu() {
        let (mut page, mut menu) = setup("5");
        menu.initialize(&mut page);
        let main = page.layout_box(id(&page, "mainMenu")).unwrap();
        let form = page.layout_box(id(&page, "inputFormBurger")).unwrap();
        assert_eq!(form.y0, main.y1 + 30.0);
    }

    #[test]
    fn markup_matches_the_html_shape() {
        let (mut page, mut menu) = setup("5");
        menu.initialize(&mut page);
        let html = to_html(page.content(id(&page, "mainMenu")));
        assert_eq!(
            html,
            "<h1>Large screen</h1>\n<ul>\n\
             <li><a class=\"menu-style-0\">Menu 1</a></li>\n\
             <li><a class=\"menu-style-0\">Menu 2</a></li>\n\
             <li><a class=\"menu-style-0\">Menu 3</a></li>\n\
             <li><a class=\"menu-style-0\">Menu 4</a></li>\n\
             <li><a class=\"menu-style-0\">Menu 5</a></li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn labels_are_recorded_once() {
        let (mut page, mut menu) = setup("6");
        menu.initialize(&mut page);
        let first = menu.labels().to_vec();
        assert_eq!(first.len(), 6);
        menu.advance_style(&mut page);
        menu.advance_style(&mut page);
        assert_eq!(menu.labels(), first.as_slice());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn one_label_per_item(count in 3_u8..=8) {
            let (mut page, mut menu) = setup(&count.to_string());
            menu.initialize(&mut page);
            prop_assert_eq!(menu.element_count().get(), usize::from(count));
            prop_assert_eq!(menu.labels().len(), menu.element_count().get());
        }
    }

    #[test]
    fn styles_advance_by_one_and_narrow_the_menu() {
        let (mut page, mut menu) = setup("5");
        menu.initialize(&mut page);
        let mut widths = vec![menu.measured_width()];
        for expected in 1..=2 {
            menu.advance_style(&mut page);
            assert_eq!(menu.style().get(), expected);
            widths.push(menu.measured_width());
        }
        assert!(widths.windows(2).all(|w| w[1] < w[0]), "{widths:?}");
        let main = id(&page, "mainMenu");
        assert_eq!(page.content(main)[0].text_content(), "Small screen");
        assert!(!menu.is_failed());

        menu.advance_style(&mut page);
        assert!(menu.is_failed(), "advancing past the densest style poisons");
        assert_eq!(menu.style(), StyleLevel::MAX);
    }

    #[test]
    fn collapse_reuses_the_first_labels() {
        let (mut page, mut menu) = setup("3");
        menu.initialize(&mut page);
        menu.advance_style(&mut page);
        menu.advance_style(&mut page);
        menu.collapse_to_burger(&mut page);
        assert!(menu.is_collapsed());
        assert!(!menu.is_failed());

        let panel = id(&page, "burgerExpandMenu");
        assert_eq!(
            to_html(page.content(panel)),
            "<ul>\n<li><a>Menu 1</a></li>\n<li><a>Menu 2</a></li>\n<li><a>Menu 3</a></li>\n</ul>\n"
        );
        let main = id(&page, "mainMenu");
        assert!(page.has_class(main, "hidden"));
        assert!(!page.has_class(main, "active-inline-block"));
        let wrap = id(&page, "burgerMenuWrap");
        assert!(page.has_class(wrap, "active-block"));
        assert!(page.has_class(id(&page, "inputFormBurger"), "hidden"));

        let wrap_box = page.layout_box(wrap).unwrap();
        let panel_box = page.layout_box(panel).unwrap();
        assert_eq!(panel_box.y0, wrap_box.y1 + 5.0);
    }

    #[test]
    fn toggling_twice_restores_the_icon() {
        let (mut page, mut menu) = setup("5");
        menu.initialize(&mut page);
        menu.collapse_to_burger(&mut page);
        let panel = id(&page, "burgerExpandMenu");
        let bars = page.children(id(&page, "burgerMenu")).unwrap();

        menu.toggle_burger_panel(&mut page);
        assert!(menu.is_burger_open());
        assert!(page.has_class(panel, "visible-yes"));
        assert!(!page.has_class(panel, "visible-no"));
        assert_eq!(page.style(bars[1]).unwrap().opacity, Some(0.0));

        menu.toggle_burger_panel(&mut page);
        assert!(!menu.is_burger_open());
        assert!(page.has_class(panel, "visible-no"));
        assert_eq!(page.style(bars[0]).unwrap().transform, Some(Transform::NONE));
        assert_eq!(page.style(bars[1]).unwrap().opacity, Some(1.0));
        assert_eq!(page.style(bars[2]).unwrap().transform, Some(Transform::NONE));
        assert!(!menu.is_failed());
    }

    #[test]
    fn missing_element_poisons_and_later_calls_are_no_ops() {
        let config = MenuConfig::default();
        let mut page = standard_page(&config, Some("5"));
        page.remove(id(&page, "menuCount"));
        let mut menu = AdaptiveMenu::new(config);
        menu.initialize(&mut page);
        assert!(menu.is_failed());
        // Steps before the failure stay applied.
        let main = id(&page, "mainMenu");
        assert!(page.has_class(main, "active-inline-block"));
        assert!(page.content(main).is_empty());

        menu.advance_style(&mut page);
        menu.collapse_to_burger(&mut page);
        assert_eq!(menu.style(), StyleLevel::FIRST);
        assert!(!menu.is_collapsed());
        assert!(!page.has_class(id(&page, "burgerMenuWrap"), "active-block"));
    }

    #[test]
    fn advance_before_initialize_poisons() {
        let (mut page, mut menu) = setup("5");
        menu.advance_style(&mut page);
        assert!(menu.is_failed());
    }

    #[test]
    fn toggle_is_not_guarded_by_failure() {
        let (mut page, mut menu) = setup("5");
        menu.advance_style(&mut page);
        assert!(menu.is_failed());
        menu.toggle_burger_panel(&mut page);
        assert!(menu.is_burger_open());
        assert!(page.has_class(id(&page, "burgerExpandMenu"), "visible-yes"));
    }
}
