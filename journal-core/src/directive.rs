use typed_builder::TypedBuilder;

use super::account::Account;
use super::note::Note;
use super::transaction::Transaction;

/// Represents an `account` directive, declaring an account outside of any transaction.
///
/// ```text
/// account Expenses:Food
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct AccountDirective<'a> {
    /// The declared account.
    pub name: Account<'a>,
}

impl<'a> AccountDirective<'a> {
    pub fn new(name: Account<'a>) -> Self {
        AccountDirective { name }
    }
}

/// A top-level entry of a journal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry<'a> {
    Transaction(Transaction<'a>),
    AccountDirective(AccountDirective<'a>),
    /// A `;` comment line at the top level, outside of any transaction.
    Comment(Note<'a>),
}

impl<'a> From<Transaction<'a>> for Entry<'a> {
    fn from(txn: Transaction<'a>) -> Self {
        Entry::Transaction(txn)
    }
}

impl<'a> From<AccountDirective<'a>> for Entry<'a> {
    fn from(directive: AccountDirective<'a>) -> Self {
        Entry::AccountDirective(directive)
    }
}
