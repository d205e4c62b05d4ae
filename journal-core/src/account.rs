use std::borrow::Cow;
use std::fmt;

/// Represents an account.
///
/// An account is a colon-separated path of segments, from the most general to the most
/// specific.  A segment may contain single spaces, so multi-word account names are possible:
///
/// ```text
/// Assets:PayPal
/// Assets:Giro Konto
/// Expenses:Food:Eating Out
/// ```
///
/// In a posting the account ends at the first run of two or more whitespace characters (or a
/// tab); whatever follows is the amount or a note.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Account<'a> {
    path: Cow<'a, str>,
}

impl<'a> Account<'a> {
    /// The full path, e.g. `Assets:PayPal`.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The segments of the path, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(':')
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The enclosing account, or `None` for a top-level account.
    ///
    /// ```
    /// use journal_core::Account;
    ///
    /// let account = Account::from("Assets:Giro Konto");
    /// assert_eq!(account.parent(), Some(Account::from("Assets")));
    /// assert_eq!(Account::from("Assets").parent(), None);
    /// ```
    pub fn parent(&self) -> Option<Account<'_>> {
        self.path
            .rfind(':')
            .map(|idx| Account::from(&self.path[..idx]))
    }

    /// Whether `other` is this account or one of its descendants.
    pub fn contains(&self, other: &Account<'_>) -> bool {
        other.path == self.path
            || (other.path.starts_with(&*self.path)
                && other.path[self.path.len()..].starts_with(':'))
    }

    pub fn into_owned(self) -> Account<'static> {
        Account {
            path: Cow::Owned(self.path.into_owned()),
        }
    }
}

impl<'a> From<&'a str> for Account<'a> {
    fn from(path: &'a str) -> Self {
        Account {
            path: Cow::Borrowed(path),
        }
    }
}

impl From<String> for Account<'_> {
    fn from(path: String) -> Self {
        Account {
            path: Cow::Owned(path),
        }
    }
}

impl<'a> From<Cow<'a, str>> for Account<'a> {
    fn from(path: Cow<'a, str>) -> Self {
        Account { path }
    }
}

impl fmt::Display for Account<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments() {
        let account = Account::from("Assets:Giro Konto:Main");
        assert_eq!(
            account.segments().collect::<Vec<_>>(),
            vec!["Assets", "Giro Konto", "Main"]
        );
        assert_eq!(account.depth(), 3);
    }

    #[test]
    fn contains() {
        let assets = Account::from("Assets");
        assert!(assets.contains(&Account::from("Assets")));
        assert!(assets.contains(&Account::from("Assets:PayPal")));
        assert!(!assets.contains(&Account::from("AssetsX:PayPal")));
        assert!(!Account::from("Assets:PayPal").contains(&assets));
    }

    #[test]
    fn into_owned() {
        let owned = {
            let path = String::from("Assets:PayPal");
            Account::from(path.as_str()).into_owned()
        };
        assert_eq!(owned, Account::from("Assets:PayPal"));
        assert_eq!(owned.parent(), Some(Account::from("Assets")));
    }
}
