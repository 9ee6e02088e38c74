//! In-memory element tree.
//!
//! The reader produces an [`Element`] tree and the writer consumes one, so
//! record decoders and encoders never touch the tokenizer directly.

/// A single XML element with its attributes, trimmed text, and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an element holding `text`.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Append an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Whether the element is marked `nil` (`nil="nil"`, `nil="true"`, or
    /// a namespaced `xsi:nil="true"`).
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.attributes.iter().any(|(key, value)| {
            let local = key.rsplit(':').next().unwrap_or(key);
            local == "nil" && value != "false"
        })
    }

    /// The `type` hint attribute, if any.
    #[must_use]
    pub fn type_hint(&self) -> Option<&str> {
        self.attr("type")
    }

    /// First child with the given tag.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }
}
