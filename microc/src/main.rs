use std::{env, fs, process::ExitCode};

use error::{Error, Result};
use log::{debug, trace};
use microc_syntax::{parse_program, Program};

mod error;

/// Source text must be UTF-8. Anything else is reported by the scanner's
/// rules: a lexical error on the line holding the first bad byte.
fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let bytes = e.as_bytes();
        let valid = e.utf8_error().valid_up_to();
        let line = 1 + bytes[..valid].iter().filter(|&&b| b == b'\n').count();
        let near = bytes
            .get(valid)
            .map(|b| format!("\\x{b:02x}"))
            .unwrap_or_default();

        microc_syntax::Error::lexical_error(line, near).into()
    })
}

fn parse_file(path: &str) -> Result<Program> {
    let bytes = fs::read(path).map_err(|e| Error::file_open(path, e))?;
    debug!("read {} ({} bytes)", path, bytes.len());

    let program = parse_program(&decode(bytes)?)?;
    for name in program.entities.iter().filter_map(|entity| entity.name()) {
        trace!("declared {name}");
    }
    debug!(
        "{} entities, {} functions",
        program.entities.len(),
        program.functions().count()
    );

    Ok(program)
}

fn run() -> Result<()> {
    let path = env::args().nth(1).ok_or(Error::MissingArgument)?;
    let program = parse_file(&path)?;

    print!("parsed:\n{program}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
