//! Data element values.

use std::fmt;

/// A single data element within a segment.
///
/// EDIFACT distinguishes simple data elements (one value) from composite
/// data elements (an ordered group of components, joined by the component
/// separator at serialization time). The two shapes are structurally
/// distinct: a composite with one component is not equal to a simple
/// element carrying the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataElement {
    /// A simple data element holding one value.
    Simple(String),
    /// A composite data element holding an ordered group of components.
    Composite(Vec<String>),
}

impl DataElement {
    /// Get this element's value, if it is a simple element.
    pub fn as_simple(&self) -> Option<&str> {
        match self {
            DataElement::Simple(s) => Some(s),
            DataElement::Composite(_) => None,
        }
    }

    /// Get this element's components, if it is a composite element.
    pub fn as_components(&self) -> Option<&[String]> {
        match self {
            DataElement::Simple(_) => None,
            DataElement::Composite(c) => Some(c),
        }
    }

    /// Check if this element is composite.
    pub fn is_composite(&self) -> bool {
        matches!(self, DataElement::Composite(_))
    }

    /// Check if this element carries no value at all.
    ///
    /// True for an empty simple value and for a composite with no
    /// components. A composite of empty components is not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            DataElement::Simple(s) => s.is_empty(),
            DataElement::Composite(c) => c.is_empty(),
        }
    }
}

impl From<&str> for DataElement {
    fn from(s: &str) -> Self {
        DataElement::Simple(s.to_string())
    }
}

impl From<String> for DataElement {
    fn from(s: String) -> Self {
        DataElement::Simple(s)
    }
}

impl From<Vec<String>> for DataElement {
    fn from(components: Vec<String>) -> Self {
        DataElement::Composite(components)
    }
}

impl From<Vec<&str>> for DataElement {
    fn from(components: Vec<&str>) -> Self {
        DataElement::Composite(components.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for DataElement {
    fn from(components: &[&str]) -> Self {
        DataElement::Composite(components.iter().map(|c| (*c).to_string()).collect())
    }
}

impl fmt::Display for DataElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataElement::Simple(s) => write!(f, "'{s}'"),
            DataElement::Composite(components) => {
                write!(f, "[")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{component}'")?;
                }
                write!(f, "]")
            }
        }
    }
}
