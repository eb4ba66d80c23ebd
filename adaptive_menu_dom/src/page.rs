// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page: structure, class and style updates, layout, queries.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::host::{ClassToggler, Document, ElementLocator, LookupError};
use crate::markup::Markup;
use crate::metrics::TextMetrics;
use crate::types::{ElementId, ElementSpec, InlineStyle};

/// Class that removes an element (and its subtree) from layout.
pub const HIDDEN_CLASS: &str = "hidden";

/// An element tree with a synchronous layout pass.
///
/// Layout is recomputed lazily: mutations mark the page dirty and the next
/// layout read ([`Document::offset_size`], [`Document::bounding_client_rect`])
/// lays out every root against the viewport.
///
/// Layout rules:
/// - A `width`/`height` set inline wins; percentages resolve against the parent box.
/// - Otherwise an element with content takes the content's measured size, and an
///   empty element fills its parent's width and wraps its children's height.
/// - Elements with any of `top`/`right`/`bottom`/`left` set are placed in document
///   coordinates; the rest sit at their static origin inside the parent box.
/// - `translate_percent` shifts the box by a fraction of its own size.
/// - Elements carrying a hidden class, and their descendants, are not displayed and
///   measure as zero.
pub struct Page {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    names: BTreeMap<String, ElementId>,
    viewport: Size,
    scroll: Vec2,
    metrics: TextMetrics,
    hidden_classes: Vec<String>,
    layout_dirty: bool,
    epoch: u64,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Page")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("viewport", &self.viewport)
            .field("scroll", &self.scroll)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Layout {
    displayed: bool,
    /// Layout box in document coordinates (no visual transform).
    border_box: Rect,
    /// Bounding box of the visually transformed layout box.
    visual: Rect,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    name: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
    origin: Point,
    value: Option<String>,
    content: Vec<Markup>,
    layout: Layout,
}

impl Node {
    fn new(generation: u32, spec: ElementSpec) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            name: spec.name,
            classes: spec.classes,
            style: spec.style,
            origin: spec.origin,
            value: spec.value,
            content: Vec::new(),
            layout: Layout::default(),
        }
    }
}

impl Page {
    /// Create an empty page with the given viewport size.
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            names: BTreeMap::new(),
            viewport,
            scroll: Vec2::ZERO,
            metrics: TextMetrics::default(),
            hidden_classes: alloc::vec![HIDDEN_CLASS.into()],
            layout_dirty: true,
            epoch: 0,
        }
    }

    /// Replace the text metrics used to size content.
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self.layout_dirty = true;
        self
    }

    /// Text metrics used to size content.
    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Treat elements carrying `class` as not displayed, in addition to [`HIDDEN_CLASS`].
    pub fn add_hidden_class(&mut self, class: &str) {
        if !self.hidden_classes.iter().any(|c| c == class) {
            self.hidden_classes.push(class.into());
            self.layout_dirty = true;
        }
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.layout_dirty = true;
    }

    /// Scroll the document.
    pub fn set_scroll_offset(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Number of completed layout passes.
    pub fn layout_epoch(&self) -> u64 {
        self.epoch
    }

    /// Insert a new element as a child of `parent` (or as a root if `None`).
    ///
    /// The first live element registered under a name wins lookups.
    pub fn insert(&mut self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId {
        let name = spec.name.clone();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, spec));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, spec)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        if let Some(name) = name {
            self.names.entry(name).or_insert(id);
        }
        self.layout_dirty = true;
        id
    }

    /// Remove an element (and its subtree) from the page.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        if let Some(name) = self.node(id).name.clone() {
            if self.names.get(&name) == Some(&id) {
                self.names.remove(&name);
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        self.layout_dirty = true;
    }

    /// Reparent `id` under `new_parent`.
    ///
    /// Moving an element under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: ElementId, new_parent: Option<ElementId>) {
        if !self.is_alive(id) {
            return;
        }
        if new_parent.is_some_and(|p| self.is_within(p, id)) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        self.layout_dirty = true;
    }

    /// Parent of a live element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id)?.parent
    }

    /// Class list of a live element.
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.node_opt(id).map_or(&[], |n| n.classes.as_slice())
    }

    /// Inline style of a live element.
    pub fn style(&self, id: ElementId) -> Option<&InlineStyle> {
        self.node_opt(id).map(|n| &n.style)
    }

    /// Current content of a live element.
    pub fn content(&self, id: ElementId) -> &[Markup] {
        self.node_opt(id).map_or(&[], |n| n.content.as_slice())
    }

    /// Set the value of a form input.
    pub fn set_value(&mut self, id: ElementId, value: Option<&str>) {
        if let Some(node) = self.node_opt_mut(id) {
            node.value = value.map(Into::into);
        }
    }

    /// Whether the element takes part in layout.
    pub fn is_displayed(&mut self, id: ElementId) -> bool {
        self.ensure_layout();
        self.node_opt(id).is_some_and(|n| n.layout.displayed)
    }

    /// Layout box in document coordinates, ignoring visual transforms.
    pub fn layout_box(&mut self, id: ElementId) -> Option<Rect> {
        self.ensure_layout();
        self.node_opt(id).map(|n| n.layout.border_box)
    }

    // --- internals ---

    fn is_alive(&self, id: ElementId) -> bool {
        self.generations.get(id.idx()).copied() == Some(id.1)
            && self.nodes.get(id.idx()).is_some_and(Option::is_some)
    }

    /// Whether `id` is `ancestor` or lies in its subtree.
    fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent(c);
        }
        false
    }

    fn node(&self, id: ElementId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ElementId")
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn live_mut(&mut self, id: ElementId) -> Result<&mut Node, LookupError> {
        self.node_opt_mut(id).ok_or(LookupError::Stale)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn is_hidden(&self, node: &Node) -> bool {
        node.classes
            .iter()
            .any(|c| self.hidden_classes.iter().any(|h| h == c))
    }

    fn ensure_layout(&mut self) {
        if !self.layout_dirty {
            return;
        }
        let roots: Vec<ElementId> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Some(n) if n.parent.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "ElementId uses 32-bit indices by design."
                    )]
                    Some(ElementId::new(i as u32, n.generation))
                }
                _ => None,
            })
            .collect();
        let initial = Rect::from_origin_size(Point::ZERO, self.viewport);
        for root in roots {
            self.layout_recursive(root, initial, true);
        }
        self.layout_dirty = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Lay out `id` inside `container` and return its layout box.
    fn layout_recursive(&mut self, id: ElementId, container: Rect, parent_displayed: bool) -> Rect {
        let displayed = parent_displayed && !self.is_hidden(self.node(id));
        let children = self.node(id).children.clone();
        if !displayed {
            self.node_mut(id).layout = Layout::default();
            for child in children {
                self.layout_recursive(child, Rect::ZERO, false);
            }
            return Rect::ZERO;
        }

        let (width, fixed_height, positioned, origin) = {
            let node = self.node(id);
            let content = if node.content.is_empty() {
                None
            } else {
                Some(self.metrics.measure(&node.content))
            };
            let width = match node.style.width {
                Some(w) => w.resolve(container.width()),
                None => content.map_or(container.width(), |c| c.width),
            };
            let fixed_height = match node.style.height {
                Some(h) => Some(h.resolve(container.height())),
                None => content.map(|c| c.height),
            };
            (width, fixed_height, node.style.clone(), node.origin)
        };

        // Static position first; children of an auto-height element decide its height.
        let static_origin = Point::new(container.x0 + origin.x, container.y0 + origin.y);
        let mut height = fixed_height.unwrap_or(0.0);
        if fixed_height.is_none() {
            let flow = Rect::from_origin_size(static_origin, Size::new(width, 0.0));
            let mut bottom = static_origin.y;
            for child in &children {
                let b = self.layout_recursive(*child, flow, true);
                bottom = bottom.max(b.y1);
            }
            height = bottom - static_origin.y;
        }

        let (x, y) = if positioned.is_positioned() {
            let x = positioned
                .left
                .or_else(|| positioned.right.map(|r| self.viewport.width - r - width))
                .unwrap_or(static_origin.x);
            let y = positioned
                .top
                .or_else(|| positioned.bottom.map(|b| self.viewport.height - b - height))
                .unwrap_or(static_origin.y);
            (x, y)
        } else {
            (static_origin.x, static_origin.y)
        };
        let transform = positioned.transform.unwrap_or_default();
        let shift = Vec2::new(
            transform.translate_percent.x / 100.0 * width,
            transform.translate_percent.y / 100.0 * height,
        );
        let border_box = Rect::from_origin_size(Point::new(x, y) + shift, Size::new(width, height));
        let visual = transform_rect_bbox(transform.affine_about(border_box.center()), border_box);

        self.node_mut(id).layout = Layout {
            displayed: true,
            border_box,
            visual,
        };
        for child in children {
            self.layout_recursive(child, border_box, true);
        }
        border_box
    }
}

impl ElementLocator for Page {
    type Element = ElementId;

    fn find_element(&self, name: &str) -> Result<ElementId, LookupError> {
        self.names
            .get(name)
            .copied()
            .filter(|id| self.is_alive(*id))
            .ok_or_else(|| LookupError::NotFound { name: name.into() })
    }

    fn is_element(&self, element: ElementId) -> bool {
        self.is_alive(element)
    }
}

impl ClassToggler for Page {
    fn set_classes(
        &mut self,
        element: ElementId,
        add: Option<&str>,
        remove: Option<&str>,
    ) -> Result<(), LookupError> {
        let node = self.live_mut(element)?;
        if let Some(add) = add {
            if !node.classes.iter().any(|c| c == add) {
                node.classes.push(add.into());
            }
        }
        if let Some(remove) = remove {
            node.classes.retain(|c| c != remove);
        }
        self.layout_dirty = true;
        Ok(())
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes(element).iter().any(|c| c == class)
    }
}

impl Document for Page {
    fn input_value(&self, element: ElementId) -> Result<Option<String>, LookupError> {
        self.node_opt(element)
            .map(|n| n.value.clone())
            .ok_or(LookupError::Stale)
    }

    fn set_content(&mut self, element: ElementId, content: Vec<Markup>) -> Result<(), LookupError> {
        self.live_mut(element)?.content = content;
        self.layout_dirty = true;
        Ok(())
    }

    fn offset_size(&mut self, element: ElementId) -> Result<Size, LookupError> {
        self.ensure_layout();
        let node = self.node_opt(element).ok_or(LookupError::Stale)?;
        Ok(node.layout.border_box.size())
    }

    fn bounding_client_rect(&mut self, element: ElementId) -> Result<Rect, LookupError> {
        self.ensure_layout();
        let scroll = self.scroll;
        let node = self.node_opt(element).ok_or(LookupError::Stale)?;
        if !node.layout.displayed {
            return Ok(Rect::ZERO);
        }
        Ok(node.layout.visual - scroll)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn style_mut(&mut self, element: ElementId) -> Result<&mut InlineStyle, LookupError> {
        if !self.is_alive(element) {
            return Err(LookupError::Stale);
        }
        self.layout_dirty = true;
        Ok(&mut self.node_mut(element).style)
    }

    fn children(&self, element: ElementId) -> Result<Vec<ElementId>, LookupError> {
        self.node_opt(element)
            .map(|n| n.children.clone())
            .ok_or(LookupError::Stale)
    }
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box.
fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
