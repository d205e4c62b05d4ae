use std::error::Error;
use std::fmt;

use pest::Span;

use super::cursor::Cursor;
use super::Rule;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// An error was encountered while converting string to a numeric representation.
    DecimalError { message: String },
    /// Input is invalid in some way.
    InvalidInput { message: String },
    /// Parser has reached an invalid state (most likely a bug in the parser).
    InvalidParserState { message: String },
}

#[derive(Debug)]
pub struct ParseError {
    /// The type of error.
    pub kind: ParseErrorKind,
    /// The 1-based (line, column) location of the error in the input.
    pub location: (usize, usize),
    /// Label of the parsed input, e.g. a file name.
    pub source_name: String,
    source: Option<Box<dyn Error + 'static + Send + Sync>>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::DecimalError { message } => {
                write!(f, "{}", message)?;
            }
            ParseErrorKind::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)?;
            }
            ParseErrorKind::InvalidParserState { message } => {
                write!(f, "Parser has reached an invalid state (please report this as a bug): expected {}", message)?;
            }
        }
        if !self.source_name.is_empty() {
            write!(f, " in {}", self.source_name)?;
        }
        write!(f, " at line {} column {}", self.location.0, self.location.1)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl ParseError {
    pub fn message(&self) -> &str {
        match &self.kind {
            ParseErrorKind::DecimalError { message }
            | ParseErrorKind::InvalidInput { message }
            | ParseErrorKind::InvalidParserState { message } => message,
        }
    }

    pub(crate) fn invalid_state<T: ToString>(msg: T) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidParserState {
                message: msg.to_string(),
            },
            location: (0, 0),
            source_name: String::new(),
            source: None,
        }
    }

    pub(crate) fn invalid_state_with_span<T: ToString>(msg: T, span: Span<'_>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidParserState {
                message: msg.to_string(),
            },
            location: span.start_pos().line_col(),
            source_name: String::new(),
            source: None,
        }
    }

    pub(crate) fn invalid_input_with_span<T: ToString>(msg: T, span: Span<'_>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidInput {
                message: format!("{} (found `{}`)", msg.to_string(), span.as_str()),
            },
            location: span.start_pos().line_col(),
            source_name: String::new(),
            source: None,
        }
    }

    pub(crate) fn decimal_parse_error(err: rust_decimal::Error, span: Span<'_>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::DecimalError {
                message: format!("error while parsing number `{}`: {}", span.as_str(), err),
            },
            location: span.start_pos().line_col(),
            source_name: String::new(),
            source: Some(Box::new(err)),
        }
    }

    /// Re-bases a location measured from `cursor` onto the whole input and attaches the
    /// input's label.
    pub(crate) fn at(mut self, cursor: Cursor<'_>) -> ParseError {
        let (line, col) = cursor.line_col();
        self.location = match self.location {
            (0, 0) => (line, col),
            (1, c) => (line, col + c - 1),
            (l, c) => (line + l - 1, c),
        };
        self.source_name = cursor.source_name().to_string();
        self
    }
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let err = err.renamed_rules(|rule| {
            match *rule {
                Rule::EOI => "end of input",
                Rule::WHITESPACE => "whitespace",
                Rule::inline_ws => "space or tab",
                Rule::field_sep => "two spaces or a tab",
                Rule::indent => "indentation",
                Rule::year => "2- or 4-digit year",
                Rule::month => "month",
                Rule::day => "day",
                Rule::date => "date",
                Rule::num => "number",
                Rule::commodity => "commodity",
                Rule::amount => "amount",
                Rule::string_inner => "inner part of a quoted string",
                Rule::string => "quoted string",
                Rule::regex_inner => "inner part of a regular expression",
                Rule::regex => "regular expression",
                Rule::ident => "identifier",
                Rule::account_word => "word of an account name",
                Rule::account_segment => "part of an account name",
                Rule::account => "an account name",
                Rule::note_text => "note text",
                Rule::comment => "comment",
                Rule::comment_line => "indented comment line",
                Rule::posting => "posting",
                Rule::posting_line => "indented posting",
                Rule::state_marker => "transaction state ('*' or '!')",
                Rule::title => "transaction title",
                Rule::transaction => "transaction",
                Rule::account_directive => "account directive",
                Rule::entry => "account directive, transaction or comment",
                Rule::entry_sep => "newline",
                Rule::journal => "journal",
                Rule::and => "'&&'",
                Rule::eq => "'=='",
                Rule::matches => "'=~'",
                Rule::add => "'+'",
                Rule::subtract => "'-'",
                Rule::multiply => "'*'",
                Rule::divide => "'/'",
                Rule::infix_op => "operator",
                Rule::operand => "operand",
                Rule::expression => "expression",
            }
            .to_string()
        });
        let location = match &err.line_col {
            pest::error::LineColLocation::Pos(ref p) => *p,
            pest::error::LineColLocation::Span(ref p, _) => *p,
        };
        let message = match &err.variant {
            pest::error::ErrorVariant::CustomError { message } => message.clone(),
            pest::error::ErrorVariant::ParsingError { .. } => "unexpected input".to_string(),
        };
        ParseError {
            kind: ParseErrorKind::InvalidInput { message },
            location,
            source_name: String::new(),
            source: Some(Box::new(err)),
        }
    }
}
