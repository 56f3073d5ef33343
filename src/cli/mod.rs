mod flags;
mod help;
mod parse;
pub mod prompts;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::config;
use crate::error::Error;
use crate::pass;
use crate::rng;

/// Parse arguments, validate, and print one credential to stdout.
pub fn run(args: &[String]) -> Result<(), Error> {
    let flags = parse(args).map_err(|e| Error::Usage(e.to_string()))?;

    if flags.help {
        help::print_help();
        return Ok(());
    }
    if flags.version {
        println!("credgen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config::from_flags(&flags)?;
    let mut rng = rng::csprng();
    let credential = pass::generate(&config, &mut rng)?;
    pass::output::write_line(credential);
    Ok(())
}
