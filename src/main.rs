use std::io::{self, BufRead, Write};

use clap::Parser;
use romana::{Options, evaluate};

/// romana is a calculator for single infix expressions over Roman or decimal
/// numerals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression instead of reading one from standard input.
    expression: Option<String>,

    /// Restrict decimal operands to the range 1 through 10.
    #[arg(short, long)]
    bounded: bool,
}

fn main() {
    let args = Args::parse();

    let options = Options { decimal_bounds: args.bounded.then(|| 1..=10) };

    let input = match args.expression {
        Some(expression) => expression,
        None => match read_expression() {
            Ok(line) => line,
            Err(e) => {
                println!("Error: {e}");
                return;
            },
        },
    };

    // Evaluation failures are expected user errors; report and exit 0.
    match evaluate(&input, &options) {
        Ok(result) => println!("Result: {result}"),
        Err(e) => println!("Error: {e}"),
    }
}

/// Prompts on standard output and reads one line from standard input.
fn read_expression() -> io::Result<String> {
    print!("Enter an expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line)
}
