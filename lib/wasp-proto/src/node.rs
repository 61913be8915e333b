// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! [`Node`], the single atomic unit the protocol is built from: an XML-like
//! element with ordered attributes, optional children, and optional raw
//! data.

/// A parsed or to-be-serialized protocol tree element.
#[derive(Clone, Debug)]
pub struct Node {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub data: Option<Vec<u8>>,
    /// Distinguishes `<tag/>` from `<tag></tag>` for the rare cases where
    /// the server expects an explicit (possibly empty) data string. Not
    /// recoverable from the wire (the codec only ever sees `data.is_some()`
    /// on the way back), so it is excluded from equality.
    pub force_data: bool,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.attrs == other.attrs
            && self.children == other.children
            && self.data == other.data
    }
}

impl Eq for Node {}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            data: None,
            force_data: false,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attr(key, value);
        self
    }

    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self.force_data = true;
        self
    }

    pub fn with_text(self, text: impl AsRef<str>) -> Self {
        self.with_data(text.as_ref().as_bytes().to_vec())
    }

    /// Returns the value of the attribute named `key`, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Returns the first direct child with the given tag, if any.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Interprets this node's data as UTF-8 text, if any.
    pub fn text(&self) -> Option<&str> {
        self.data.as_deref().and_then(|d| std::str::from_utf8(d).ok())
    }

    /// The sentinel tag used by the frame reader when a tree could not be
    /// fully parsed from the bytes available so far.
    pub fn incomplete() -> Node {
        Node::new("treeerr")
    }

    pub fn is_incomplete(&self) -> bool {
        self.tag == "treeerr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_attribute_order() {
        let n = Node::new("iq").with_attr("type", "get").with_attr("id", "1");
        assert_eq!(
            n.attrs(),
            &[
                ("type".to_string(), "get".to_string()),
                ("id".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn child_lookup_finds_first_match() {
        let n = Node::new("message").with_child(Node::new("body").with_text("hi"));
        assert_eq!(n.child("body").unwrap().text(), Some("hi"));
        assert_eq!(n.child("media"), None);
    }
}
