use anyhow::Result;
use bignum::BigInt;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::eval::Report;

/// Interactive loop: read two integers, re-prompting until each parses,
/// print the full report, repeat. `exit`, Ctrl-C, or Ctrl-D ends the
/// session.
pub fn run_repl() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("bigcalc -- enter decimal integers, `exit` to quit");
    loop {
        let lhs = match read_number(&mut rl, "first number> ")? {
            Some(value) => value,
            None => break,
        };
        let rhs = match read_number(&mut rl, "second number> ")? {
            Some(value) => value,
            None => break,
        };
        println!("{}", Report::build(&lhs, &rhs).render());
    }
    Ok(())
}

/// Prompt until a line parses as a number. Returns `None` on `exit` or end
/// of input.
fn read_number(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<BigInt>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" {
                    return Ok(None);
                }
                match line.parse::<BigInt>() {
                    Ok(value) => {
                        let _ = rl.add_history_entry(line);
                        return Ok(Some(value));
                    }
                    Err(err) => println!("{err}, try again"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}
