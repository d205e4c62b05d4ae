use journal_parser::{parse_journal, Cursor};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let filename = std::env::args().nth(1).ok_or("filename argument")?;
    let unparsed_file = std::fs::read_to_string(&filename)?;

    let journal = parse_journal(Cursor::new(&filename, &unparsed_file))?.value;
    dbg!(journal);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("Error: {}", e);
    }
}
