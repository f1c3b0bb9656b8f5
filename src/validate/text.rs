//! Text leaves and mark sets.

use serde_json::{Map, Value};

use super::{describe, Decoded, Decoder};
use crate::error::ErrorKind;
use crate::model::{Mark, Marks, Text};

/// Keys a text leaf may carry.
const TEXT_KEYS: [&str; 10] = [
    "text",
    "bold",
    "italic",
    "underline",
    "strikethrough",
    "code",
    "superscript",
    "subscript",
    "keyboard",
    "insertMenu",
];

impl Decoder<'_> {
    pub(super) fn text(&self, obj: &Map<String, Value>) -> Decoded<Text> {
        let text = self.string(obj, "text")?;
        let marks = self.marks(obj)?;
        self.closed(obj, &TEXT_KEYS)?;
        Ok(Text::with_marks(text, marks))
    }

    /// A mark is either absent or exactly `true`.
    fn marks(&self, obj: &Map<String, Value>) -> Decoded<Marks> {
        let mut marks = Marks::new();
        for mark in Mark::ALL {
            match obj.get(mark.key()) {
                None => {}
                Some(Value::Bool(true)) => marks.insert(mark),
                Some(other) => {
                    return Err(self.fail_at(
                        mark.key(),
                        ErrorKind::TypeMismatch {
                            expected: "true or absent",
                            found: describe(other),
                        },
                    ))
                }
            }
        }
        Ok(marks)
    }
}
