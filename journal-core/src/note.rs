use std::borrow::Cow;
use std::fmt;

/// Free-form text attached to a transaction, a posting or the journal itself.
///
/// Written after a `;`.  The text is stored without the marker and trimmed of surrounding
/// whitespace; a note parsed from a journal is never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Note<'a> {
    text: Cow<'a, str>,
}

impl<'a> Note<'a> {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<'a> From<&'a str> for Note<'a> {
    fn from(text: &'a str) -> Self {
        Note {
            text: Cow::Borrowed(text.trim()),
        }
    }
}

impl From<String> for Note<'_> {
    fn from(text: String) -> Self {
        Note {
            text: Cow::Owned(text.trim().to_string()),
        }
    }
}

impl fmt::Display for Note<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[test]
fn test_note_is_trimmed() {
    assert_eq!(Note::from("  a note \t"), Note::from("a note"));
    assert_eq!(Note::from(" a note ".to_string()).text(), "a note");
}
