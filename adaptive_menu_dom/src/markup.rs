// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed HTML fragments.
//!
//! Content is set on elements as a list of [`Markup`] nodes rather than as a
//! raw string, so layout can measure it and tests can inspect it.
//! [`to_html`] serializes a fragment with one block per line:
//!
//! ```
//! use adaptive_menu_dom::markup::{Markup, to_html};
//!
//! let fragment = [
//!     Markup::heading("Large screen"),
//!     Markup::list([Markup::item(Markup::link("Menu 1", Some("menu-style-0")))]),
//! ];
//! assert_eq!(
//!     to_html(&fragment),
//!     "<h1>Large screen</h1>\n<ul>\n<li><a class=\"menu-style-0\">Menu 1</a></li>\n</ul>\n",
//! );
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

/// Element tags that can appear in a fragment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<h1>`.
    Heading,
    /// `<ul>`; children are laid out in a row.
    List,
    /// `<li>`.
    ListItem,
    /// `<a>`.
    Link,
}

impl Tag {
    /// HTML tag name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heading => "h1",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Link => "a",
        }
    }
}

/// A node of a fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Markup {
    /// An element with an optional class and children.
    Element {
        /// Tag.
        tag: Tag,
        /// Single class attribute, if any.
        class: Option<String>,
        /// Child nodes.
        children: Vec<Markup>,
    },
    /// A text run.
    Text(String),
}

impl Markup {
    /// `<h1>text</h1>`.
    pub fn heading(text: &str) -> Self {
        Self::Element {
            tag: Tag::Heading,
            class: None,
            children: alloc::vec![Self::Text(text.into())],
        }
    }

    /// `<ul>` with the given items.
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Element {
            tag: Tag::List,
            class: None,
            children: items.into_iter().collect(),
        }
    }

    /// `<li>` wrapping `child`.
    pub fn item(child: Self) -> Self {
        Self::Element {
            tag: Tag::ListItem,
            class: None,
            children: alloc::vec![child],
        }
    }

    /// `<a class=..>text</a>`.
    pub fn link(text: &str, class: Option<&str>) -> Self {
        Self::Element {
            tag: Tag::Link,
            class: class.map(Into::into),
            children: alloc::vec![Self::Text(text.into())],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Nodes with the given tag, in depth-first order.
    pub fn find_all(&self, tag: Tag) -> Vec<&Self> {
        let mut out = Vec::new();
        self.find_into(tag, &mut out);
        out
    }

    fn find_into<'a>(&'a self, tag: Tag, out: &mut Vec<&'a Self>) {
        if let Self::Element {
            tag: own, children, ..
        } = self
        {
            if *own == tag {
                out.push(self);
            }
            for child in children {
                child.find_into(tag, out);
            }
        }
    }

    /// Class attribute of an element node.
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Element { class, .. } => class.as_deref(),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write_escaped(f, text),
            Self::Element {
                tag,
                class,
                children,
            } => {
                f.write_char('<')?;
                f.write_str(tag.name())?;
                if let Some(class) = class {
                    f.write_str(" class=\"")?;
                    write_escaped(f, class)?;
                    f.write_char('"')?;
                }
                f.write_char('>')?;
                if *tag == Tag::List {
                    f.write_char('\n')?;
                }
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{}>", tag.name())?;
                if matches!(tag, Tag::Heading | Tag::List | Tag::ListItem) {
                    f.write_char('\n')?;
                }
                Ok(())
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

/// Serialize a fragment to HTML.
pub fn to_html(fragment: &[Markup]) -> String {
    let mut out = String::new();
    for node in fragment {
        // Writing into a String cannot fail.
        let _ = write!(out, "{node}");
    }
    out
}
