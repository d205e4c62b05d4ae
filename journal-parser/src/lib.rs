use std::convert::TryFrom;
use std::ops::RangeInclusive;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::{debug, trace};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use pest_derive::Parser as PestParser;
use rust_decimal::Decimal;

use journal_core as bc;

pub use cursor::{Cursor, Parsed};
use error::{ParseError, ParseResult};

mod cursor;
pub mod error;

lazy_static! {
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(Op::infix(Rule::and, Assoc::Left))
        .op(Op::infix(Rule::eq, Assoc::Left) | Op::infix(Rule::matches, Assoc::Left))
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::subtract, Assoc::Left))
        .op(Op::infix(Rule::multiply, Assoc::Left) | Op::infix(Rule::divide, Assoc::Left));
}

#[derive(PestParser)]
#[grammar = "journal.pest"]
pub struct JournalParser;

/// Parses a whole journal.  The input must consist only of entries separated by newlines.
pub fn parse(input: &str) -> ParseResult<bc::Journal<'_>> {
    parse_journal(Cursor::new("", input)).map(|parsed| parsed.value)
}

/// Parses a whole journal starting at `cursor`; the returned cursor is at the end of input.
pub fn parse_journal(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Journal<'_>>> {
    let parsed = run(Rule::journal, cursor, journal)?;
    debug!(
        "parsed {} entries from {:?}",
        parsed.value.entries.len(),
        cursor.source_name()
    );
    Ok(parsed)
}

/// Parses one top-level entry: an account directive, a transaction or a comment line, tried
/// in that order.
pub fn parse_entry(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Entry<'_>>> {
    run(Rule::entry, cursor, entry)
}

pub fn parse_transaction(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Transaction<'_>>> {
    run(Rule::transaction, cursor, transaction)
}

pub fn parse_account_directive(
    cursor: Cursor<'_>,
) -> ParseResult<Parsed<'_, bc::AccountDirective<'_>>> {
    run(Rule::account_directive, cursor, account_directive)
}

/// Parses a posting line and its comment continuation lines.  The first line is expected
/// without indentation.
pub fn parse_posting(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Posting<'_>>> {
    run(Rule::posting, cursor, posting)
}

pub fn parse_comment(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Note<'_>>> {
    run(Rule::comment, cursor, comment)
}

pub fn parse_account(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Account<'_>>> {
    run(Rule::account, cursor, account)
}

pub fn parse_amount(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Amount<'_>>> {
    run(Rule::amount, cursor, amount)
}

pub fn parse_date(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Date>> {
    run(Rule::date, cursor, date)
}

/// Parses a filter expression.  A trailing operator without operand is an error.
pub fn parse_expression(cursor: Cursor<'_>) -> ParseResult<Parsed<'_, bc::Expression<'_>>> {
    run(Rule::expression, cursor, expression)
}

fn run<'i, T, F>(rule: Rule, cursor: Cursor<'i>, convert: F) -> ParseResult<Parsed<'i, T>>
where
    F: FnOnce(Pair<'i, Rule>) -> ParseResult<T>,
{
    trace!(
        "parsing {:?} in {:?} at {:?}",
        rule,
        cursor.source_name(),
        cursor.line_col()
    );
    let pair = JournalParser::parse(rule, cursor.remaining())
        .map_err(|e| ParseError::from(e).at(cursor))?
        .next()
        .ok_or_else(|| ParseError::invalid_state("non-empty parse result").at(cursor))?;
    let consumed = pair.as_span().end();
    let value = convert(pair).map_err(|e| e.at(cursor))?;
    Ok(Parsed {
        value,
        rest: cursor.advance(consumed),
    })
}

fn optional_rule<'i>(rule: Rule, pairs: &mut Pairs<'i, Rule>) -> Option<Pair<'i, Rule>> {
    match pairs.peek() {
        Some(ref p) if p.as_rule() == rule => pairs.next(),
        _ => None,
    }
}

fn journal<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Journal<'i>> {
    debug_assert!(pair.as_rule() == Rule::journal);
    let mut entries = Vec::new();
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::entry => entries.push(entry(p)?),
            Rule::EOI => break,
            _ => return Err(ParseError::invalid_state_with_span("entry", p.as_span())),
        }
    }
    Ok(bc::Journal::builder().entries(entries).build())
}

fn entry<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Entry<'i>> {
    debug_assert!(pair.as_rule() == Rule::entry);
    let span = pair.as_span();
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::invalid_state_with_span("entry", span.clone()))?;
    let entry = match inner.as_rule() {
        Rule::account_directive => bc::Entry::AccountDirective(account_directive(inner)?),
        Rule::transaction => bc::Entry::Transaction(transaction(inner)?),
        Rule::comment => bc::Entry::Comment(comment(inner)?),
        _ => return Err(ParseError::invalid_state_with_span("entry", span)),
    };
    Ok(entry)
}

fn account_directive<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::AccountDirective<'i>> {
    debug_assert!(pair.as_rule() == Rule::account_directive);
    let span = pair.as_span();
    let name = pair
        .into_inner()
        .next()
        .map(account)
        .transpose()?
        .ok_or_else(|| ParseError::invalid_state_with_span("account", span))?;
    Ok(bc::AccountDirective::new(name))
}

fn transaction<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Transaction<'i>> {
    debug_assert!(pair.as_rule() == Rule::transaction);
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let date = inner
        .next()
        .map(date)
        .transpose()?
        .ok_or_else(|| ParseError::invalid_state_with_span("date", span.clone()))?;
    let state = optional_rule(Rule::state_marker, &mut inner)
        .map(state)
        .transpose()?;
    let title = optional_rule(Rule::title, &mut inner)
        .ok_or_else(|| ParseError::invalid_state_with_span("title", span.clone()))?
        .as_str();

    // Comments come before the first posting; the ones after a posting belong to it.
    let mut notes = Vec::new();
    let mut postings = Vec::new();
    for p in inner {
        match p.as_rule() {
            Rule::comment => notes.push(comment(p)?),
            Rule::posting => postings.push(posting(p)?),
            _ => {
                return Err(ParseError::invalid_state_with_span(
                    "note or posting",
                    p.as_span(),
                ))
            }
        }
    }
    if postings.is_empty() {
        return Err(ParseError::invalid_input_with_span(
            "transaction has no postings",
            span,
        ));
    }

    Ok(bc::Transaction::builder()
        .date(date)
        .state(state)
        .title(title)
        .notes(notes)
        .postings(postings)
        .build())
}

fn state(pair: Pair<'_, Rule>) -> ParseResult<bc::TransactionState> {
    bc::TransactionState::try_from(pair.as_str())
        .map_err(|_| ParseError::invalid_state_with_span("state marker", pair.as_span()))
}

fn posting<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Posting<'i>> {
    debug_assert!(pair.as_rule() == Rule::posting);
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let account = inner
        .next()
        .map(account)
        .transpose()?
        .ok_or_else(|| ParseError::invalid_state_with_span("account", span))?;
    let amount = optional_rule(Rule::amount, &mut inner)
        .map(amount)
        .transpose()?;
    let notes = inner.map(comment).collect::<ParseResult<Vec<_>>>()?;
    Ok(bc::Posting::builder()
        .account(account)
        .amount(amount)
        .notes(notes)
        .build())
}

fn comment<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Note<'i>> {
    debug_assert!(pair.as_rule() == Rule::comment);
    let span = pair.as_span();
    let text = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::invalid_state_with_span("note text", span))?
        .as_str();
    Ok(bc::Note::from(text))
}

fn account<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Account<'i>> {
    debug_assert!(pair.as_rule() == Rule::account);
    Ok(bc::Account::from(pair.as_str()))
}

fn date(pair: Pair<'_, Rule>) -> ParseResult<bc::Date> {
    debug_assert!(pair.as_rule() == Rule::date);
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let mut component = |name: &str, range: RangeInclusive<u16>| -> ParseResult<u16> {
        let p = inner
            .next()
            .ok_or_else(|| ParseError::invalid_state_with_span(name, span.clone()))?;
        match p.as_str().parse::<u16>() {
            Ok(v) if range.contains(&v) => Ok(v),
            _ => Err(ParseError::invalid_input_with_span(
                format!("{} out of range", name),
                p.as_span(),
            )),
        }
    };
    let year = component("year", 0..=9999)?;
    let month = component("month", 1..=12)?;
    let day = component("day", 1..=31)?;
    Ok(bc::Date::new(year, month as u8, day as u8))
}

fn num(pair: Pair<'_, Rule>) -> ParseResult<Decimal> {
    let s = pair.as_str().replace(',', "");
    Decimal::from_str(s.trim_start_matches('+'))
        .map_err(|e| ParseError::decimal_parse_error(e, pair.as_span()))
}

fn amount<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Amount<'i>> {
    debug_assert!(pair.as_rule() == Rule::amount);
    let span = pair.as_span();
    let mut number = None;
    let mut commodity = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::num => number = Some(num(p)?),
            Rule::commodity => commodity = Some(p.as_str()),
            _ => return Err(ParseError::invalid_state_with_span("amount", p.as_span())),
        }
    }
    match (number, commodity) {
        (Some(number), Some(commodity)) => Ok(bc::Amount::new(number, commodity)),
        _ => Err(ParseError::invalid_state_with_span(
            "number and commodity",
            span,
        )),
    }
}

fn quoted_inner<'i>(pair: Pair<'i, Rule>) -> ParseResult<&'i str> {
    let span = pair.as_span();
    Ok(pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::invalid_state_with_span("literal", span))?
        .as_str())
}

fn expression<'i>(pair: Pair<'i, Rule>) -> ParseResult<bc::Expression<'i>> {
    debug_assert!(pair.as_rule() == Rule::expression);
    PRATT_PARSER
        .map_primary(|primary| match primary.as_rule() {
            Rule::num => num(primary).map(bc::Expression::Number),
            Rule::amount => amount(primary).map(bc::Expression::Amount),
            Rule::string => quoted_inner(primary).map(|s| bc::Expression::String(s.into())),
            Rule::regex => quoted_inner(primary).map(|s| bc::Expression::Regex(s.into())),
            Rule::ident => Ok(bc::Expression::Ident(primary.as_str().into())),
            Rule::expression => expression(primary),
            _ => Err(ParseError::invalid_state_with_span(
                "operand",
                primary.as_span(),
            )),
        })
        .map_infix(|lhs, op, rhs| {
            let operator = match op.as_rule() {
                Rule::and => bc::Operator::And,
                Rule::eq => bc::Operator::Equal,
                Rule::matches => bc::Operator::Matches,
                Rule::add => bc::Operator::Add,
                Rule::subtract => bc::Operator::Subtract,
                Rule::multiply => bc::Operator::Multiply,
                Rule::divide => bc::Operator::Divide,
                _ => return Err(ParseError::invalid_state_with_span("operator", op.as_span())),
            };
            Ok(bc::Expression::infix(operator, lhs?, rhs?))
        })
        .parse(pair.into_inner())
}
