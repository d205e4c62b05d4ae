use std::borrow::Cow;

use typed_builder::TypedBuilder;

pub use account::Account;
pub use amount::Amount;
pub use date::Date;
pub use directive::{AccountDirective, Entry};
pub use expression::{Expression, Operator};
pub use note::Note;
pub use posting::Posting;
pub use state::TransactionState;
pub use transaction::Transaction;

pub mod account;
pub mod amount;
mod date;
pub mod directive;
pub mod expression;
mod note;
pub mod posting;
pub mod state;
pub mod transaction;

/// Represents a complete journal consisting of a number of top-level entries, in the order
/// they appear in the source text.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Journal<'a> {
    #[builder(default)]
    pub entries: Vec<Entry<'a>>,
}

impl<'a> Journal<'a> {
    /// All transactions of the journal, skipping directives and comments.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Transaction(txn) => Some(txn),
            _ => None,
        })
    }

    /// All accounts declared through `account` directives.
    pub fn declared_accounts(&self) -> impl Iterator<Item = &Account<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::AccountDirective(directive) => Some(&directive.name),
            _ => None,
        })
    }
}

/// A commodity symbol or code, such as `$` or `EUR`.
pub type Commodity<'a> = Cow<'a, str>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_accessors() {
        let account = Account::from("Expenses:Food");
        let txn = Transaction::builder()
            .date(Date::new(2016, 1, 31))
            .title("Groceries")
            .postings(vec![Posting::builder().account(account.clone()).build()])
            .build();
        let journal = Journal::builder()
            .entries(vec![
                Entry::AccountDirective(AccountDirective::new(account.clone())),
                Entry::Comment(Note::from("monthly")),
                Entry::Transaction(txn.clone()),
            ])
            .build();

        assert_eq!(journal.transactions().collect::<Vec<_>>(), vec![&txn]);
        assert_eq!(
            journal.declared_accounts().collect::<Vec<_>>(),
            vec![&account]
        );
    }
}
