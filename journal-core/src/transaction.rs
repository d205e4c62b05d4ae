use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::date::Date;
use super::note::Note;
use super::posting::Posting;
use super::state::TransactionState;

/// Represents a transaction: a dated, titled set of postings.
///
/// ```text
/// 2016/01/31 * My Transaction  ; a note
///     ; another note
///     Assets:PayPal  200 $
///     Giro
/// ```
///
/// The trailing comment on the title line and the comment-only lines before the first posting
/// are the transaction's notes.  A parsed transaction always has at least one posting.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Transaction<'a> {
    pub date: Date,

    #[builder(default)]
    pub state: Option<TransactionState>,

    /// Title exactly as written, without the trailing comment.
    #[builder(setter(into))]
    pub title: Cow<'a, str>,

    #[builder(default)]
    pub notes: Vec<Note<'a>>,

    pub postings: Vec<Posting<'a>>,
}

impl<'a> Transaction<'a> {
    /// Whether the transaction carries the cleared (`*`) marker.
    pub fn is_cleared(&self) -> bool {
        self.state == Some(TransactionState::Cleared)
    }

    /// Postings whose amount is left to be inferred.
    pub fn elided_postings(&self) -> impl Iterator<Item = &Posting<'a>> {
        self.postings.iter().filter(|p| p.amount.is_none())
    }
}
