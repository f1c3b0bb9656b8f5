//! Text leaves and their decorations.

use serde::Serialize;

/// A text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Superscript,
    Subscript,
    Keyboard,
    /// Editor-internal marker for an open insert menu
    InsertMenu,
}

impl Mark {
    /// Every mark, in the order leaves list them.
    pub const ALL: [Mark; 9] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
        Mark::Superscript,
        Mark::Subscript,
        Mark::Keyboard,
        Mark::InsertMenu,
    ];

    /// The object key this mark uses.
    pub fn key(&self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Strikethrough => "strikethrough",
            Mark::Code => "code",
            Mark::Superscript => "superscript",
            Mark::Subscript => "subscript",
            Mark::Keyboard => "keyboard",
            Mark::InsertMenu => "insertMenu",
        }
    }

    /// Look up a mark by its object key.
    pub fn from_key(key: &str) -> Option<Mark> {
        Mark::ALL.iter().copied().find(|m| m.key() == key)
    }
}

fn is_unset(value: &bool) -> bool {
    !*value
}

/// The set of marks applied to a text leaf.
///
/// Unset marks are omitted on output; a set mark is written as `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Marks {
    #[serde(skip_serializing_if = "is_unset")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub underline: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub code: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub superscript: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub subscript: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub keyboard: bool,
    #[serde(rename = "insertMenu", skip_serializing_if = "is_unset")]
    pub insert_menu: bool,
}

impl Marks {
    /// Create an empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, mark: Mark) -> &mut bool {
        match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Underline => &mut self.underline,
            Mark::Strikethrough => &mut self.strikethrough,
            Mark::Code => &mut self.code,
            Mark::Superscript => &mut self.superscript,
            Mark::Subscript => &mut self.subscript,
            Mark::Keyboard => &mut self.keyboard,
            Mark::InsertMenu => &mut self.insert_menu,
        }
    }

    /// Check if a mark is set.
    pub fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Code => self.code,
            Mark::Superscript => self.superscript,
            Mark::Subscript => self.subscript,
            Mark::Keyboard => self.keyboard,
            Mark::InsertMenu => self.insert_menu,
        }
    }

    /// Set a mark.
    pub fn insert(&mut self, mark: Mark) {
        *self.slot(mark) = true;
    }

    /// Clear a mark.
    pub fn remove(&mut self, mark: Mark) {
        *self.slot(mark) = false;
    }

    /// Builder form of [`Marks::insert`].
    pub fn with(mut self, mark: Mark) -> Self {
        self.insert(mark);
        self
    }

    /// Iterate over the marks that are set.
    pub fn iter(&self) -> impl Iterator<Item = Mark> {
        let marks = *self;
        Mark::ALL.into_iter().filter(move |m| marks.contains(*m))
    }

    /// Check if no mark is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// A terminal text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Text {
    /// The text content
    pub text: String,

    /// Decorations
    #[serde(flatten)]
    pub marks: Marks,
}

impl Text {
    /// Create an undecorated text leaf.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }

    /// Create a text leaf with marks.
    pub fn with_marks(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// Create a bold text leaf.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_marks(text, Marks::new().with(Mark::Bold))
    }

    /// Create an italic text leaf.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_marks(text, Marks::new().with(Mark::Italic))
    }

    /// Check if the leaf has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
