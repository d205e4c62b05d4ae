use std::convert::TryFrom;
use std::fmt;

/// Reconciliation status of a transaction, written between its date and title.
///
/// A transaction without a marker has no state (`Option::None` on
/// [`Transaction::state`](crate::Transaction::state)).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TransactionState {
    /// `*`
    Cleared,
    /// `!`
    Pending,
}

impl TransactionState {
    pub fn marker(self) -> char {
        match self {
            TransactionState::Cleared => '*',
            TransactionState::Pending => '!',
        }
    }
}

impl TryFrom<&str> for TransactionState {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "*" => Ok(TransactionState::Cleared),
            "!" => Ok(TransactionState::Pending),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[test]
fn test_state_markers() {
    assert_eq!(TransactionState::try_from("*"), Ok(TransactionState::Cleared));
    assert_eq!(TransactionState::try_from("!"), Ok(TransactionState::Pending));
    assert!(TransactionState::try_from("?").is_err());
    assert_eq!(TransactionState::Pending.to_string(), "!");
}
