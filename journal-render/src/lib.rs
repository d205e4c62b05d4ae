use journal_core::*;
use std::{io, io::Write};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Indentation written before postings and continuation comments.
const INDENT: &str = "    ";

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render<W: Write>(w: &mut W, journal: &Journal<'_>) -> Result<(), BasicRendererError> {
    BasicRenderer::default().render(journal, w)
}

/// Renders a filter expression into a string.
pub fn render_expression(expression: &Expression<'_>) -> Result<String, BasicRendererError> {
    let mut out = Vec::new();
    BasicRenderer::default().render(expression, &mut out)?;
    String::from_utf8(out).map_err(|_| BasicRendererError::Encoding)
}

#[derive(Error, Debug)]
pub enum BasicRendererError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("transaction dated {0} has no postings")]
    NoPostings(Date),
    #[error("rendered text is not valid UTF-8")]
    Encoding,
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Journal<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, journal: &'a Journal<'_>, write: &mut W) -> Result<(), Self::Error> {
        for entry in &journal.entries {
            self.render(entry, write)?;
            writeln!(write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Entry<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, entry: &'a Entry<'_>, write: &mut W) -> Result<(), Self::Error> {
        match entry {
            Entry::Transaction(transaction) => self.render(transaction, write),
            Entry::AccountDirective(directive) => self.render(directive, write),
            Entry::Comment(note) => {
                self.render(note, write)?;
                writeln!(write)?;
                Ok(())
            }
        }
    }
}

impl<'a, W: Write> Renderer<&'a AccountDirective<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, directive: &'a AccountDirective<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "account ")?;
        self.render(&directive.name, w)?;
        writeln!(w)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Account<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, account: &'a Account<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{}", account.as_str())?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Amount<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, amount: &'a Amount<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{} {}", amount.number, amount.commodity)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Note<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, note: &'a Note<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "; {}", note.text())?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Transaction<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, transaction: &'a Transaction<'_>, w: &mut W) -> Result<(), Self::Error> {
        if transaction.postings.is_empty() {
            return Err(BasicRendererError::NoPostings(transaction.date));
        }
        write!(w, "{}", transaction.date)?;
        if let Some(state) = transaction.state {
            write!(w, " {}", state)?;
        }
        writeln!(w, " {}", transaction.title)?;
        // Notes go on their own lines so that trailing spaces of the title survive.
        for note in &transaction.notes {
            write!(w, "{}", INDENT)?;
            self.render(note, w)?;
            writeln!(w)?;
        }
        for posting in &transaction.postings {
            self.render(posting, w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Posting<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, posting: &'a Posting<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{}", INDENT)?;
        self.render(&posting.account, w)?;
        if let Some(amount) = &posting.amount {
            write!(w, "  ")?;
            self.render(amount, w)?;
        }
        let mut notes = posting.notes.iter();
        if let Some(first) = notes.next() {
            write!(w, "  ")?;
            self.render(first, w)?;
        }
        writeln!(w)?;
        for note in notes {
            write!(w, "{}{}", INDENT, INDENT)?;
            self.render(note, w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Expression<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, expression: &'a Expression<'_>, w: &mut W) -> Result<(), Self::Error> {
        render_operand(self, w, expression, 0, false)
    }
}

/// Writes `expression`, adding parentheses only where the surrounding operator would
/// otherwise regroup it.  All operators are left-associative, so a right operand of equal
/// precedence needs them.
fn render_operand<W: Write>(
    renderer: &BasicRenderer,
    w: &mut W,
    expression: &Expression<'_>,
    parent_precedence: u8,
    right: bool,
) -> Result<(), BasicRendererError> {
    match expression {
        Expression::Number(num) => write!(w, "{}", num)?,
        Expression::Amount(amount) => renderer.render(amount, w)?,
        Expression::Ident(name) => write!(w, "{}", name)?,
        Expression::String(s) => write!(w, "\"{}\"", s)?,
        Expression::Regex(pattern) => write!(w, "/{}/", pattern)?,
        Expression::Infix { operator, lhs, rhs } => {
            let precedence = operator.precedence();
            let parens =
                precedence < parent_precedence || (right && precedence == parent_precedence);
            if parens {
                write!(w, "(")?;
            }
            render_operand(renderer, w, lhs, precedence, false)?;
            write!(w, " {} ", operator)?;
            render_operand(renderer, w, rhs, precedence, true)?;
            if parens {
                write!(w, ")")?;
            }
        }
    }
    Ok(())
}
