//! Thin event writer over `quick_xml::Writer`

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ChartResult;

pub(super) struct XmlSink {
    writer: Writer<Vec<u8>>,
}

impl XmlSink {
    pub fn new(indent: Option<usize>) -> Self {
        let writer = match indent {
            Some(n) => Writer::new_with_indent(Vec::new(), b' ', n),
            None => Writer::new(Vec::new()),
        };
        Self { writer }
    }

    /// `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`
    pub fn declaration(&mut self) -> ChartResult<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(())
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> ChartResult<()> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.writer.write_event(Event::Start(elem))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> ChartResult<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> ChartResult<()> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    /// Empty element carrying a single `val` attribute
    pub fn val(&mut self, name: &str, value: &str) -> ChartResult<()> {
        self.empty(name, &[("val", value)])
    }

    /// `<name>text</name>`, with `text` escaped
    pub fn text_element(&mut self, name: &str, text: &str) -> ChartResult<()> {
        self.start(name, &[])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}
