//! Structure element types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Bullet glyphs (•, -, * ...)
    Bullet,
    /// Enumeration labels (1., a), iv. ...)
    Numbered,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListType::Bullet => write!(f, "bullet"),
            ListType::Numbered => write!(f, "numbered"),
        }
    }
}

/// One classified unit of document content.
///
/// Multi-line `content` joins the constituent lines with `'\n'`, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StructureElement {
    /// Running text
    Paragraph {
        /// Text content
        content: String,
    },
    /// Heading, `level` 1 (largest) to 3
    Heading {
        /// Text content
        content: String,
        /// Heading level
        level: u8,
    },
    /// Consecutive list items of one marker kind
    List {
        /// One item per line, markers included
        content: String,
        /// Marker kind shared by every item
        list_type: ListType,
    },
    /// Grid of aligned lines
    Table {
        /// One row per line, cells separated by spaces
        content: String,
        /// Number of rows
        rows: usize,
        /// Number of aligned columns
        columns: usize,
    },
}

impl StructureElement {
    /// Text content of the element.
    pub fn content(&self) -> &str {
        match self {
            StructureElement::Paragraph { content }
            | StructureElement::Heading { content, .. }
            | StructureElement::List { content, .. }
            | StructureElement::Table { content, .. } => content,
        }
    }

    /// Mutable access to the text content.
    pub fn content_mut(&mut self) -> &mut String {
        match self {
            StructureElement::Paragraph { content }
            | StructureElement::Heading { content, .. }
            | StructureElement::List { content, .. }
            | StructureElement::Table { content, .. } => content,
        }
    }

    /// Content split back into its lines (list items, table rows ...).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content().split('\n')
    }

    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            StructureElement::Paragraph { .. } => "paragraph",
            StructureElement::Heading { .. } => "heading",
            StructureElement::List { .. } => "list",
            StructureElement::Table { .. } => "table",
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, StructureElement::Heading { .. })
    }

    /// Check if this is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, StructureElement::Table { .. })
    }
}

/// The analyzed structure of one page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Elements in reading order
    pub elements: Vec<StructureElement>,
}

impl DocumentStructure {
    /// Wrap a list of elements.
    pub fn new(elements: Vec<StructureElement>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StructureElement> {
        self.elements.iter()
    }

    /// Count elements of one kind (`"paragraph"`, `"heading"`, `"list"`, `"table"`).
    pub fn count_kind(&self, kind: &str) -> usize {
        self.elements.iter().filter(|e| e.kind() == kind).count()
    }

    /// Apply a text transform to every element's content, keeping the structure.
    ///
    /// The transform runs line by line so that the `'\n'` separators between
    /// rows and items survive.
    pub fn map_content<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        for element in &mut self.elements {
            let mapped = element.lines().map(&f).collect::<Vec<_>>().join("\n");
            *element.content_mut() = mapped;
        }
        self
    }
}

impl IntoIterator for DocumentStructure {
    type Item = StructureElement;
    type IntoIter = std::vec::IntoIter<StructureElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentStructure {
    type Item = &'a StructureElement;
    type IntoIter = std::slice::Iter<'a, StructureElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
