//! In-memory XML element tree with path-addressed accessors.

use std::io::{BufRead, Write};

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::XmlError;

/// An XML element with its attributes, concatenated text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes, text or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Add or replace an attribute
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Append a child element and return it
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// Follow the first matching child for each path segment
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        let mut current = self;
        for segment in path {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn find_mut(&mut self, path: &[&str]) -> Option<&mut Element> {
        let mut current = self;
        for segment in path {
            current = current.children.iter_mut().find(|child| child.name == *segment)?;
        }
        Some(current)
    }

    fn find_or_create(&mut self, path: &[&str]) -> &mut Element {
        let mut current = self;
        for segment in path {
            let idx = match current.children.iter().position(|child| child.name == *segment) {
                Some(idx) => idx,
                None => {
                    current.children.push(Element::new(*segment));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[idx];
        }
        current
    }

    /// Trimmed text of the element at `path`, or an empty string if any
    /// segment is missing
    pub fn element_text(&self, path: &[&str]) -> String {
        self.find(path)
            .map(|elem| elem.text.trim().to_string())
            .unwrap_or_default()
    }

    /// Every child named by the last segment of `path`, under the element
    /// reached by following the first match of the other segments
    pub fn element_list(&self, path: &[&str]) -> Vec<&Element> {
        let Some((last, parents)) = path.split_last() else {
            return Vec::new();
        };
        match self.find(parents) {
            Some(parent) => parent.children.iter().filter(|child| child.name == *last).collect(),
            None => Vec::new(),
        }
    }

    /// Assign the trimmed text of the element at `path`.
    ///
    /// Missing elements are created for non-blank text only; blank text
    /// clears an existing element and otherwise does nothing.
    pub fn set_element_text(&mut self, path: &[&str], text: &str) {
        let text = text.trim();
        if text.is_empty() {
            if let Some(elem) = self.find_mut(path) {
                elem.text.clear();
            }
            return;
        }
        self.find_or_create(path).text = text.to_string();
    }

    /// Append a new element named by the last segment of `path`, creating
    /// missing parents, and return it. An empty path returns `self`.
    pub fn add_list_element(&mut self, path: &[&str]) -> &mut Element {
        match path.split_last() {
            Some((last, parents)) => self.find_or_create(parents).add_child(Element::new(*last)),
            None => self,
        }
    }
}

/// A parsed XML document: a single root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document with an empty root element
    pub fn new(root_name: &str) -> Self {
        Self {
            root: Element::new(root_name),
        }
    }

    /// The root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable root element
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Parse a document from a string
    pub fn parse_str(xml: &str) -> Result<Self, XmlError> {
        Self::parse(xml.as_bytes())
    }

    /// Parse a document from a buffered reader.
    ///
    /// Declarations, comments, processing instructions and doctypes are
    /// skipped. Character and entity references in text and attribute values
    /// are resolved.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, XmlError> {
        let mut reader = Reader::from_reader(reader);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(element_from_start(e, reader.decoder())?);
                }
                Ok(Event::Empty(ref e)) => {
                    let elem = element_from_start(e, reader.decoder())?;
                    attach(&mut stack, &mut root, elem)?;
                }
                Ok(Event::End(ref e)) => {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    let elem = stack.pop().ok_or_else(|| {
                        XmlError::InvalidStructure(format!("unexpected end tag </{}>", name))
                    })?;
                    if elem.name != name {
                        return Err(XmlError::InvalidStructure(format!(
                            "end tag </{}> does not match <{}>",
                            name, elem.name
                        )));
                    }
                    attach(&mut stack, &mut root, elem)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&t.unescape()?);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(std::str::from_utf8(c)?);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XmlError::ParseError(e)),
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::InvalidStructure(format!(
                "element <{}> is not closed",
                open.name
            )));
        }
        root.map(|root| Self { root }).ok_or(XmlError::NoRootElement)
    }

    /// Write the document with an XML declaration and two-space indentation
    pub fn write_pretty<W: Write>(&self, writer: W) -> Result<(), XmlError> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(quick_xml::Error::from)?;
        write_element(&mut xml, &self.root)?;
        xml.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// The document as pretty-printed text
    pub fn to_pretty_string(&self) -> Result<String, XmlError> {
        let mut buffer = Vec::new();
        self.write_pretty(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn element_from_start(e: &BytesStart<'_>, decoder: Decoder) -> Result<Element, XmlError> {
    let mut elem = Element::new(std::str::from_utf8(e.name().as_ref())?);
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        elem.attributes.push((key, value));
    }
    Ok(elem)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, elem: Element) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(elem);
    } else if root.is_none() {
        *root = Some(elem);
    } else {
        return Err(XmlError::InvalidStructure(format!(
            "second root element <{}>",
            elem.name
        )));
    }
    Ok(())
}

fn write_element<W: Write>(xml: &mut Writer<W>, elem: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(elem.name.as_str());
    for (key, value) in &elem.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if elem.children.is_empty() && elem.text.is_empty() {
        xml.write_event(Event::Empty(start))
            .map_err(quick_xml::Error::from)?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))
        .map_err(quick_xml::Error::from)?;
    if !elem.text.is_empty() {
        xml.write_event(Event::Text(BytesText::new(&elem.text)))
            .map_err(quick_xml::Error::from)?;
    }
    for child in &elem.children {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(elem.name.as_str())))
        .map_err(quick_xml::Error::from)?;
    Ok(())
}
