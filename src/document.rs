//! An ordered element tree for session documents.
//!
//! The tree mirrors the subset of XML the session format needs: elements
//! with ordered attributes, ordered children, and two whitespace slots used
//! only for layout: `text`, written after the opening tag, and `tail`,
//! written after the closing tag. Construction leaves both slots unset;
//! [`indent()`] fills them so serialization comes out one element per line.

pub mod indent;
pub mod writer;

pub use indent::indent;

/// An element within a document tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// The tag name.
    name: String,

    /// The attributes, in insertion order.
    attributes: Vec<(String, String)>,

    /// Text content written between the opening tag and the first child.
    text: Option<String>,

    /// Text content written after the closing tag, within the parent.
    tail: Option<String>,

    /// The child elements, in document order.
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with the given tag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::document::Element;
    ///
    /// let element = Element::new("Resources");
    /// assert_eq!(element.name(), "Resources");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            tail: None,
            children: Vec::new(),
        }
    }

    /// Appends an attribute, preserving insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::document::Element;
    ///
    /// let element = Element::new("Resource").attribute("path", "https://example.com/a.bw");
    ///
    /// assert_eq!(
    ///     element.attributes(),
    ///     [(String::from("path"), String::from("https://example.com/a.bw"))]
    /// );
    /// ```
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child element, consuming `self`.
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }

    /// Appends a child element in place.
    pub fn push_child(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes, in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the tail content, if any.
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Returns the child elements, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}
