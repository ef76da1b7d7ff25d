//! Whitespace injection for human-readable serialization.

use crate::document::Element;

/// The indentation unit: four spaces per depth level.
const INDENT: &str = "    ";

/// Recursively assigns whitespace-only text and tail values so that
/// depth-first serialization yields one element per line, indented four
/// spaces per depth level, with closing tags dedented to their element's
/// own depth. This is the layout IGV's own session exporter produces.
///
/// Formatting only: names, attributes, ordering, and any non-whitespace
/// text already present are untouched, so the printed document parses back
/// to the same tree.
///
/// # Examples
///
/// ```
/// use sessionfile::document::indent;
/// use sessionfile::document::Element;
///
/// let mut root = Element::new("Session").child(Element::new("Resources"));
/// indent(&mut root);
///
/// assert_eq!(root.text(), Some("\n    "));
/// assert_eq!(root.children()[0].tail(), Some("\n"));
/// assert_eq!(root.tail(), Some("\n"));
/// ```
pub fn indent(element: &mut Element) {
    apply(element, 0);
}

/// Whether a layout slot is still open for writing: unset or
/// whitespace-only.
fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Indents one element at the given depth.
fn apply(element: &mut Element, level: usize) {
    let i = format!("\n{}", INDENT.repeat(level));

    if element.children.is_empty() {
        // Childless elements keep their text untouched; only their line
        // break within the parent is owed.
        if level > 0 && blank(element.tail.as_deref()) {
            element.tail = Some(i);
        }

        return;
    }

    if blank(element.text.as_deref()) {
        element.text = Some(format!("{i}{INDENT}"));
    }

    if blank(element.tail.as_deref()) {
        element.tail = Some(i.clone());
    }

    for child in &mut element.children {
        apply(child, level + 1);
    }

    // The last child's tail positions this element's closing tag, so it
    // dedents to this element's own depth.
    if let Some(last) = element.children.last_mut() {
        if blank(last.tail.as_deref()) {
            last.tail = Some(i);
        }
    }
}
