//! Filter expressions.
//!
//! A small boolean/arithmetic language used to select or compute over transactions and
//! postings, e.g. `account =~ /^Income/ && commodity == "EUR"`.

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;

use super::amount::Amount;

/// Binary operators of the expression language.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    /// `&&`
    And,
    /// `==`
    Equal,
    /// `=~`
    Matches,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "&&",
            Operator::Equal => "==",
            Operator::Matches => "=~",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Binding strength; higher binds tighter.  All operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::And => 1,
            Operator::Equal | Operator::Matches => 2,
            Operator::Add | Operator::Subtract => 3,
            Operator::Multiply | Operator::Divide => 4,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed filter expression.  Each infix node owns its operands.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expression<'a> {
    Number(Decimal),
    Amount(Amount<'a>),
    Ident(Cow<'a, str>),
    String(Cow<'a, str>),
    /// A `/`-delimited regular expression; the pattern is kept verbatim.
    Regex(Cow<'a, str>),
    Infix {
        operator: Operator,
        lhs: Box<Expression<'a>>,
        rhs: Box<Expression<'a>>,
    },
}

impl<'a> Expression<'a> {
    pub fn infix(operator: Operator, lhs: Expression<'a>, rhs: Expression<'a>) -> Self {
        Expression::Infix {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn ident<S: Into<Cow<'a, str>>>(name: S) -> Self {
        Expression::Ident(name.into())
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Infix { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
            _ => 1,
        }
    }

    /// Identifiers referenced by the expression, left to right.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_identifiers(&mut out);
        out
    }

    fn collect_identifiers<'e>(&'e self, out: &mut Vec<&'e str>) {
        match self {
            Expression::Ident(name) => out.push(name),
            Expression::Infix { lhs, rhs, .. } => {
                lhs.collect_identifiers(out);
                rhs.collect_identifiers(out);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_in_order() {
        let expr = Expression::infix(
            Operator::And,
            Expression::infix(
                Operator::Equal,
                Expression::ident("account"),
                Expression::ident("test"),
            ),
            Expression::infix(
                Operator::Matches,
                Expression::ident("hello"),
                Expression::Regex("^x".into()),
            ),
        );
        assert_eq!(expr.identifiers(), vec!["account", "test", "hello"]);
        assert_eq!(expr.node_count(), 7);
    }

    #[test]
    fn precedence_order() {
        assert!(Operator::And.precedence() < Operator::Equal.precedence());
        assert_eq!(Operator::Equal.precedence(), Operator::Matches.precedence());
        assert!(Operator::Matches.precedence() < Operator::Add.precedence());
        assert!(Operator::Subtract.precedence() < Operator::Divide.precedence());
    }
}
