//! Locations inside a document value.

use std::fmt;

/// One step from a container value to one of its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Position within a sequence
    Index(usize),
    /// Key within an object
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(i) => write!(f, "{}", i),
            Segment::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

/// Path from the document root to a value.
///
/// Displayed in JSONPath style, e.g. `$[0].children[2].bold`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Create the root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Get the segments, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check if this is the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the innermost segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Remove the innermost segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Return a copy extended by one segment.
    pub fn join(&self, segment: impl Into<Segment>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{}", k)?,
                Segment::Key(k) => write!(f, "[\"{}\"]", k.escape_debug())?,
            }
        }
        Ok(())
    }
}

/// Keys that can be written after a `.` without ambiguity.
fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(Path::root().to_string(), "$");
        assert!(Path::root().is_root());
    }

    #[test]
    fn test_nested_display() {
        let path: Path = vec![
            Segment::Index(0),
            Segment::from("children"),
            Segment::Index(0),
            Segment::from("bold"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), "$[0].children[0].bold");
        assert_eq!(path.last(), Some(&Segment::Key("bold".to_string())));
    }

    #[test]
    fn test_unusual_keys_are_quoted() {
        let path: Path = vec![
            Segment::Index(0),
            Segment::from("relationships"),
            Segment::from("a.b"),
            Segment::from("data"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), "$[0].relationships[\"a.b\"].data");

        assert_eq!(Path::root().join("x[1]").to_string(), "$[\"x[1]\"]");
        assert_eq!(Path::root().join("").to_string(), "$[\"\"]");
        assert_eq!(Path::root().join("say \"hi\"").to_string(), "$[\"say \\\"hi\\\"\"]");
        assert_eq!(Path::root().join("insertMenu").to_string(), "$.insertMenu");
    }

    #[test]
    fn test_push_pop_join() {
        let mut path = Path::root();
        path.push(3usize);
        path.push("level");
        assert_eq!(path.len(), 2);

        let joined = path.join("extra");
        assert_eq!(joined.to_string(), "$[3].level.extra");

        assert_eq!(path.pop(), Some(Segment::Key("level".to_string())));
        assert_eq!(path.to_string(), "$[3]");
    }
}
