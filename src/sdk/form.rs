use crate::sdk::guide::Guide;
use crate::sdk::routing::service::GuideProvider;
use std::io::{self, BufRead, Write};

const TITLE: &str = "Travel Guide Chatbot";
const MENU: &str = "[1] Get Info  [2] Get Directions  [q] Quit";
const SEPARATOR: &str = "----";

/// Runs the interactive form until the user quits or input ends.
pub fn run_form<P, R, W>(guide: &Guide<P>, mut input: R, mut out: W) -> io::Result<()>
where
    P: GuideProvider,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{TITLE}")?;
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(city) = prompt(&mut input, &mut out, "Enter City Name: ")? else {
                    break;
                };
                writeln!(out, "Fetching data, please wait...")?;
                let report = guide.place_info(&city);
                write_report(&mut out, &report.errors, report.outcome.render())?;
            }
            "2" => {
                writeln!(out, "Get Directions")?;
                let Some(start) = prompt(&mut input, &mut out, "Enter Start Place: ")? else {
                    break;
                };
                let Some(end) = prompt(&mut input, &mut out, "Enter End Place: ")? else {
                    break;
                };
                writeln!(out, "Fetching directions, please wait...")?;
                let report = guide.directions(&start, &end);
                write_report(&mut out, &report.errors, report.outcome.render())?;
            }
            "q" | "Q" | "quit" => break,
            "" => continue,
            other => writeln!(out, "Unknown choice: {other}")?,
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    out.flush()
}

/// Writes reported errors first, then the rendered lines.
pub fn write_report<W: Write>(out: &mut W, errors: &[String], lines: Vec<String>) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{error}")?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
