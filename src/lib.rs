//! Plain-text ledger journals.
//!
//! A journal is a sequence of transactions, `account` directives and comments:
//!
//! ```text
//! account Expenses:Food
//!
//! 2016/01/31 * Groceries  ; weekly
//!     ; paid by card
//!     Expenses:Food  $ 20.00
//!     Assets:PayPal
//! ```
//!
//! [`core`] holds the data model, [`parser`] turns text into it (including the filter
//! expression language, e.g. `account =~ /^Expenses/ && commodity == "EUR"`), and
//! [`render`] writes it back out.

pub use journal_core as core;
pub use journal_parser as parser;
pub use journal_render as render;

pub use journal_core::{
    Account, AccountDirective, Amount, Date, Entry, Expression, Journal, Note, Operator, Posting,
    Transaction, TransactionState,
};
pub use journal_parser::{error::ParseError, parse, Cursor, Parsed};

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parse_and_render() {
        let source = indoc!(
            "
            account Expenses:Food

            2016/01/31 * Groceries  ; weekly
                Expenses:Food  $ 20.00
                Assets:PayPal
            "
        );
        let journal = parse(source).unwrap();
        assert_eq!(journal.declared_accounts().count(), 1);
        let txn = journal.transactions().next().unwrap();
        assert!(txn.is_cleared());
        assert_eq!(txn.elided_postings().count(), 1);

        let mut out = Vec::new();
        render::render(&mut out, &journal).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(parse(&rendered).unwrap(), journal);
    }

    #[test]
    fn filter_expression() {
        let parsed = parser::parse_expression(Cursor::new(
            "filter",
            "account =~ /^Expenses/ && commodity == \"EUR\"",
        ))
        .unwrap();
        assert_eq!(parsed.value.identifiers(), vec!["account", "commodity"]);
    }
}
