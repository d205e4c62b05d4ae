use crate::{render, render_expression, BasicRenderer, BasicRendererError, Renderer};
use indoc::indoc;
use journal_core::*;
use journal_parser::{parse, parse_expression, Cursor};

fn render_to_string(journal: &Journal<'_>) -> anyhow::Result<String> {
    let mut rendered = Vec::new();
    render(&mut rendered, journal)?;
    Ok(String::from_utf8(rendered)?)
}

fn test_conversion(s: &str) -> anyhow::Result<()> {
    // First obtain the journal
    let journal = parse(s)?;

    // Now render it
    let rendered = render_to_string(&journal)?;

    // Parse again
    let journal_2 = parse(&rendered)?;
    assert_eq!(journal_2, journal);

    // Render to test for equality
    let rendered_2 = render_to_string(&journal_2)?;
    assert_eq!(rendered_2, rendered);

    Ok(())
}

#[test]
fn test_account_directive() -> anyhow::Result<()> {
    test_conversion("account Expenses:Food\n")?;
    test_conversion("account Assets:Giro Konto\n")?;
    Ok(())
}

#[test]
fn test_comment() -> anyhow::Result<()> {
    test_conversion("; just a comment\n")?;
    Ok(())
}

#[test]
fn test_transaction() -> anyhow::Result<()> {
    test_conversion(indoc! {"
        2016/01/31 * My Transaction\t; a note
         ; another note
         Assets:PayPal  200 $  ;paypal note
             ;second paypal note
         Giro
    "})?;
    test_conversion("2016/01/31 My Transaction \n Assets:PayPal  -1,200.50 EUR\n Giro\n")?;
    test_conversion("14-1-31 ! Title ; with semicolon\n Something Else  ; only a note\n")?;
    Ok(())
}

#[test]
fn test_journal() -> anyhow::Result<()> {
    test_conversion(indoc! {"
        ; Opening
        account Assets:PayPal

        2016/01/31 Groceries
            Expenses:Food  $ 20.00
            Assets:PayPal

        2016/02/01 Refund
            Assets:PayPal  5 EUR
            Expenses:Food
    "})?;
    Ok(())
}

#[test]
fn test_rendered_text() -> anyhow::Result<()> {
    let journal = parse(indoc! {"
        2016/1/3 * Title  ; a note
         Assets:PayPal  $ 200
         Giro  ; first
          ; second
    "})?;
    assert_eq!(
        render_to_string(&journal)?,
        "2016/01/03 * Title\n    ; a note\n    Assets:PayPal  200 $\n    Giro  ; first\n        ; second\n\n"
    );
    Ok(())
}

#[test]
fn test_transaction_without_postings() {
    let txn = Transaction::builder()
        .date(Date::new(2016, 1, 31))
        .title("Empty")
        .postings(vec![])
        .build();
    let mut out = Vec::new();
    let result = BasicRenderer::new().render(&txn, &mut out);
    assert!(matches!(result, Err(BasicRendererError::NoPostings(_))));
}

fn expression_round_trip(input: &str) -> anyhow::Result<String> {
    let parsed = parse_expression(Cursor::new("", input))?.value;
    let rendered = render_expression(&parsed)?;
    let reparsed = parse_expression(Cursor::new("", &rendered))?.value;
    assert_eq!(reparsed, parsed, "{}", rendered);
    Ok(rendered)
}

#[test]
fn test_expression() -> anyhow::Result<()> {
    assert_eq!(expression_round_trip("(1 * 5 + 2)")?, "1 * 5 + 2");
    assert_eq!(expression_round_trip("(3 / 7 USD)")?, "3 / 7 USD");
    assert_eq!(expression_round_trip("2 * (3 + 4)")?, "2 * (3 + 4)");
    assert_eq!(expression_round_trip("1 - (2 - 3)")?, "1 - (2 - 3)");
    assert_eq!(expression_round_trip("(1 - 2) - 3")?, "1 - 2 - 3");
    assert_eq!(
        expression_round_trip("account =~ /Income:Core Data/ && commodity == \"EUR\"")?,
        "account =~ /Income:Core Data/ && commodity == \"EUR\""
    );
    assert_eq!(
        expression_round_trip("(a && b) == c")?,
        "(a && b) == c"
    );
    Ok(())
}
