//! In-memory element tree for chart parts.
//!
//! The chart grammar has too many optional and choice elements to load with a
//! single forward pass, so the loader first builds this tree and then looks up
//! the nodes it needs by qualified name (`c:plotArea`, `a:t`, ...).
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Node 0 is always the root element.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ChartError, ChartResult};

/// Handle to a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element
#[derive(Debug, Clone, Default)]
pub struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
}

impl Node {
    /// Qualified name, e.g. `c:barChart`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Attributes in document order, duplicates included
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Concatenated character data directly inside this element
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Distance from the root element (the root is at depth 0)
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A parsed XML document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Parse a complete XML document.
    ///
    /// Character data is kept exactly as written. A whitespace-only run is
    /// kept only when it is the whole content of an element without
    /// children (`<a:t>  </a:t>`); indentation between elements is dropped.
    ///
    /// Fails on malformed markup, mismatched or unclosed tags, content
    /// outside the root element, or a document without any element.
    pub fn parse(bytes: &[u8]) -> ChartResult<Self> {
        let mut reader = Reader::from_reader(bytes);

        let mut nodes: Vec<Node> = Vec::new();
        let mut open: Vec<NodeId> = Vec::new();
        let mut blank: Option<String> = None;
        let mut buf = Vec::new();

        loop {
            let event = reader.read_event_into(&mut buf);
            let pending = blank.take();
            match event {
                Ok(Event::Start(e)) => {
                    let id = push_node(&mut nodes, &open, &e)?;
                    open.push(id);
                }
                Ok(Event::Empty(e)) => {
                    push_node(&mut nodes, &open, &e)?;
                }
                Ok(Event::End(_)) => {
                    let Some(id) = open.pop() else {
                        return Err(ChartError::Parse("unexpected closing tag".into()));
                    };
                    let node = &mut nodes[id.0];
                    if let Some(pending) = pending {
                        if node.children.is_empty() && node.text.is_empty() {
                            node.text = pending;
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape()?;
                    if text.chars().all(char::is_whitespace) {
                        if !open.is_empty() {
                            blank = Some(text.into_owned());
                        }
                    } else {
                        match open.last() {
                            Some(id) => nodes[id.0].text.push_str(&text),
                            None => {
                                return Err(ChartError::Parse(format!(
                                    "text outside the root element: '{}'",
                                    text
                                )))
                            }
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    match open.last() {
                        Some(id) => nodes[id.0]
                            .text
                            .push_str(&String::from_utf8_lossy(&raw)),
                        None => {
                            return Err(ChartError::Parse(
                                "CDATA outside the root element".into(),
                            ))
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ChartError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if let Some(id) = open.last() {
            return Err(ChartError::Parse(format!(
                "unclosed element <{}>",
                nodes[id.0].name
            )));
        }
        if nodes.is_empty() {
            return Err(ChartError::Parse("document has no root element".into()));
        }

        Ok(Self { nodes })
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was handed out by a different document. Use
    /// [`Document::get`] when the origin of the handle is not known.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The node behind `id`, or `None` when `id` is out of range
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of `parent`, in document order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` belongs to a different document.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[parent.0].children.iter().copied()
    }

    /// First node named `qname` anywhere below `parent`, in document order.
    ///
    /// `parent` itself is never returned.
    ///
    /// # Panics
    ///
    /// Panics if `parent` belongs to a different document.
    pub fn find_child(&self, parent: NodeId, qname: &str) -> Option<NodeId> {
        let mut pending: Vec<NodeId> =
            self.nodes[parent.0].children.iter().rev().copied().collect();

        while let Some(id) = pending.pop() {
            let node = &self.nodes[id.0];
            if node.name == qname {
                return Some(id);
            }
            pending.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// First direct child of `parent` named `qname`
    pub fn find_direct_child(&self, parent: NodeId, qname: &str) -> Option<NodeId> {
        self.children(parent).find(|id| self.nodes[id.0].name == qname)
    }

    /// Follow a chain of direct children, one name per step
    pub fn find_path(&self, start: NodeId, path: &[&str]) -> Option<NodeId> {
        path.iter()
            .try_fold(start, |node, qname| self.find_direct_child(node, qname))
    }

    /// First node named `qname` at exactly `depth`, in document order
    pub fn find_at_depth(&self, depth: usize, qname: &str) -> Option<NodeId> {
        // The arena is filled in document order.
        self.nodes
            .iter()
            .position(|n| n.depth == depth && n.name == qname)
            .map(NodeId)
    }

    /// Value of attribute `name` on `node`; the last occurrence wins.
    ///
    /// # Panics
    ///
    /// Panics if `node` belongs to a different document.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn push_node(nodes: &mut Vec<Node>, open: &[NodeId], e: &BytesStart<'_>) -> ChartResult<NodeId> {
    let parent = open.last().copied();
    if parent.is_none() && !nodes.is_empty() {
        return Err(ChartError::Parse("more than one root element".into()));
    }

    // Duplicate attributes are kept; lookups resolve them last-wins.
    let mut attrs = e.attributes();
    attrs.with_checks(false);

    let mut attributes = Vec::new();
    for attr in attrs {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    let id = NodeId(nodes.len());
    nodes.push(Node {
        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        attributes,
        text: String::new(),
        parent,
        children: Vec::new(),
        depth: open.len(),
    });
    if let Some(parent) = parent {
        nodes[parent.0].children.push(id);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<c:root xmlns:c="urn:c">
  <c:a id="1">
    <c:b id="inner"/>
  </c:a>
  <c:b id="outer" id="last">text &amp; more</c:b>
</c:root>"#;

    #[test]
    fn test_parse_builds_tree() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = doc.root();

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.node(root).name(), "c:root");
        assert_eq!(doc.node(root).local_name(), "root");
        assert_eq!(doc.node(root).depth(), 0);
        assert_eq!(doc.children(root).count(), 2);

        let a = doc.find_direct_child(root, "c:a").unwrap();
        assert_eq!(doc.node(a).parent(), Some(root));
        assert_eq!(doc.node(a).depth(), 1);
    }

    #[test]
    fn test_find_child_uses_document_order() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = doc.root();

        // The nested <c:b> comes first in document order.
        let b = doc.find_child(root, "c:b").unwrap();
        assert_eq!(doc.attribute(b, "id"), Some("inner"));
        assert_eq!(doc.node(b).depth(), 2);

        let direct = doc.find_direct_child(root, "c:b").unwrap();
        assert_eq!(doc.node(direct).text(), "text & more");
        assert!(doc.find_child(root, "c:missing").is_none());
    }

    #[test]
    fn test_attribute_last_wins() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let outer = doc.find_direct_child(doc.root(), "c:b").unwrap();

        assert_eq!(doc.node(outer).attributes().len(), 2);
        assert_eq!(doc.attribute(outer, "id"), Some("last"));
        assert_eq!(doc.attribute(outer, "nope"), None);
    }

    #[test]
    fn test_find_at_depth_and_path() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();

        let outer = doc.find_at_depth(1, "c:b").unwrap();
        assert_eq!(doc.attribute(outer, "id"), Some("last"));

        let inner = doc.find_path(doc.root(), &["c:a", "c:b"]).unwrap();
        assert_eq!(doc.attribute(inner, "id"), Some("inner"));
        assert!(doc.find_path(doc.root(), &["c:b", "c:a"]).is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Document::parse(b"").is_err());
        assert!(Document::parse(b"<a><b></a>").is_err());
        assert!(Document::parse(b"<a><b>").is_err());
        assert!(matches!(
            Document::parse(b"<a/><b/>"),
            Err(ChartError::Parse(_))
        ));
        assert!(Document::parse(b"<a x=1/>").is_err());
        assert!(Document::parse(b"<a/>stray").is_err());
    }

    #[test]
    fn test_text_keeps_inner_whitespace() {
        let doc = Document::parse(
            b"<p>\n  <r><t> Sales</t></r>\n  <r><t>  Net  margin </t></r>\n  <t>   </t>\n  <e></e>\n</p>\n",
        )
        .unwrap();
        let root = doc.root();

        let texts: Vec<_> = doc
            .children(root)
            .filter_map(|id| {
                let node = doc.node(id);
                match node.name() {
                    "r" => doc.find_direct_child(id, "t").map(|t| doc.node(t).text()),
                    _ => Some(node.text()),
                }
            })
            .collect();
        assert_eq!(texts, vec![" Sales", "  Net  margin ", "   ", ""]);

        // Indentation between elements is not character data.
        assert_eq!(doc.node(root).text(), "");
        let run = doc.find_direct_child(root, "r").unwrap();
        assert_eq!(doc.node(run).text(), "");
    }

    #[test]
    fn test_get_rejects_foreign_ids() {
        let big = Document::parse(SAMPLE.as_bytes()).unwrap();
        let small = Document::parse(b"<only/>").unwrap();
        let foreign = big.find_child(big.root(), "c:b").unwrap();

        assert_eq!(small.get(small.root()).map(Node::name), Some("only"));
        assert!(small.get(foreign).is_none());
        assert_eq!(big.get(foreign).map(Node::depth), Some(2));
    }
}
