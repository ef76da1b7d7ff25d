//! Serialization of a document tree to XML.

use std::io;
use std::io::Write;

use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Writer;

use crate::document::Element;

/// Serializes `root` as a UTF-8 XML document with a declaration.
///
/// Elements with no children and no text serialize self-closed. Escaping
/// of attribute values and text content is handled by the underlying
/// writer. Layout comes entirely from the tree's text/tail slots (see
/// [`indent()`](crate::document::indent())); nothing is inserted here
/// beyond the line break after the declaration.
///
/// # Examples
///
/// ```
/// use sessionfile::document::writer;
/// use sessionfile::document::Element;
///
/// let root = Element::new("Session")
///     .attribute("genome", "hg38")
///     .child(Element::new("Resources"));
///
/// let mut output = Vec::new();
/// writer::write_document(&root, &mut output)?;
///
/// assert_eq!(
///     String::from_utf8(output)?,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Session genome=\"hg38\"><Resources/></Session>"
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_document<W>(root: &Element, inner: W) -> io::Result<()>
where
    W: Write,
{
    let mut writer = Writer::new(inner);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(io::Error::other)?;
    writer
        .write_event(Event::Text(BytesText::new("\n")))
        .map_err(io::Error::other)?;

    write_element(&mut writer, root)
}

/// Writes one element and its subtree as events.
fn write_element<W>(writer: &mut Writer<W>, element: &Element) -> io::Result<()>
where
    W: Write,
{
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer
            .write_event(Event::Empty(start))
            .map_err(io::Error::other)?;
    } else {
        writer
            .write_event(Event::Start(start))
            .map_err(io::Error::other)?;

        if let Some(text) = element.text() {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(io::Error::other)?;
        }

        for child in element.children() {
            write_element(writer, child)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(element.name())))
            .map_err(io::Error::other)?;
    }

    if let Some(tail) = element.tail() {
        writer
            .write_event(Event::Text(BytesText::new(tail)))
            .map_err(io::Error::other)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::events::Event;

    use super::*;
    use crate::document;

    /// Parses a serialized document back into an element tree, dropping
    /// whitespace-only text along the way. Layout slots are left unset so
    /// the result compares against unindented trees.
    fn parse(xml: &str) -> Element {
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event().expect("well-formed document") {
                Event::Start(start) => stack.push(element_from(&start)),
                Event::Empty(start) => {
                    let element = element_from(&start);
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack.pop().expect("balanced tags");
                    attach(&mut stack, &mut root, element);
                }
                Event::Eof => break,
                // Declaration and whitespace-only layout text.
                _ => {}
            }
        }

        root.expect("a root element")
    }

    fn element_from(start: &quick_xml::events::BytesStart<'_>) -> Element {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = Element::new(name);

        for attribute in start.attributes() {
            let attribute = attribute.expect("well-formed attribute");
            element = element.attribute(
                String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                attribute
                    .unescape_value()
                    .expect("unescapable value")
                    .into_owned(),
            );
        }

        element
    }

    fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
        match stack.last_mut() {
            Some(parent) => parent.push_child(element),
            None => *root = Some(element),
        }
    }

    /// A small tree exercising nesting, attributes, and self-closing leaves.
    fn tree() -> Element {
        Element::new("Session")
            .attribute("genome", "hg38")
            .child(
                Element::new("Resources")
                    .child(Element::new("Resource").attribute(
                        "path",
                        "https://www.dropbox.com/s/abc/a.bw?rlkey=xyz&dl=1",
                    )),
            )
            .child(Element::new("PanelLayout").attribute("dividerFractions", "0.6358244365361803"))
    }

    #[test]
    fn test_attribute_values_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
        let mut output = Vec::new();
        write_document(&tree(), &mut output)?;

        let xml = String::from_utf8(output)?;
        assert!(xml.contains("rlkey=xyz&amp;dl=1"));

        Ok(())
    }

    #[test]
    fn test_pretty_printing_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let plain = tree();

        let mut printed = plain.clone();
        document::indent(&mut printed);

        let mut output = Vec::new();
        write_document(&printed, &mut output)?;

        let parsed = parse(&String::from_utf8(output)?);
        assert_eq!(parsed, plain);

        Ok(())
    }
}
