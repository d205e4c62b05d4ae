use typed_builder::TypedBuilder;

use super::account::Account;
use super::amount::Amount;
use super::note::Note;

/// Represents a transaction posting.  Postings record a single amount being deposited to or
/// withdrawn from an account.
///
/// The amount may be left out, in which case it is implied by the other postings of the
/// transaction.  Notes written after the posting, on the same line or on the following
/// comment-only lines, belong to the posting:
///
/// ```text
/// 2016/01/31 My Transaction
///     Assets:PayPal  200 $  ; paypal note
///         ; second paypal note
///     Giro
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Posting<'a> {
    /// Account being posted to.
    pub account: Account<'a>,

    /// The amount being posted, if written.
    #[builder(default)]
    pub amount: Option<Amount<'a>>,

    /// Notes attached to this posting, in textual order.
    #[builder(default)]
    pub notes: Vec<Note<'a>>,
}
