use agar::check_bytes;
use std::{
    env,
    io::{self, Write},
    process,
};

const USAGE: &str = "Usage: agarc <filename>";
const SUCCESS_MESSAGE: &str = "Parsing completed successfully! No Syntax Error";

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            writeln!(stdout, "{}", USAGE)?;
            process::exit(1);
        },
    };

    let contents = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => {
            writeln!(stdout, "Error opening file: {}", path)?;
            process::exit(1);
        },
    };

    match check_bytes(&contents) {
        Ok(()) => writeln!(stdout, "{}", SUCCESS_MESSAGE),
        Err(e) => {
            writeln!(stdout, "{}", e)?;
            process::exit(1);
        },
    }
}
