use super::CliFlags;
use crate::config::DELIMITER_NORMAL;
use crate::pass::charset::{CharClass, EASY_CLASSES};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    BadMin(String),
    BadMax(String),
    BadDelimiter,
    BadFrequency,
    TooManyArgs,
    Unrecognized(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::BadMin(s) => write!(f, "bad min argument '{}'", s),
            ParseError::BadMax(s) => write!(f, "bad max argument '{}'", s),
            ParseError::BadDelimiter => write!(f, "bad argument to -d"),
            ParseError::BadFrequency => write!(f, "bad argument to -dn"),
            ParseError::TooManyArgs => write!(f, "too many arguments"),
            ParseError::Unrecognized(s) => write!(f, "unrecognized argument '{}'", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-w" => flags.words = true,
            "-e" => {
                // Easy mode appends its weighted classes right here so
                // argument order keeps its meaning.
                flags.easy = true;
                flags.classes.extend(EASY_CLASSES);
            }
            "-d" => flags.delimiter = Some(DELIMITER_NORMAL.to_string()),
            _ if arg.starts_with("-dn") => {
                let n = arg
                    .strip_prefix("-dn=")
                    .and_then(|s| s.parse::<usize>().ok())
                    .ok_or(ParseError::BadFrequency)?;
                if n < 1 {
                    return Err(ParseError::BadFrequency);
                }
                flags.frequency = Some(n);
            }
            _ if arg.starts_with("-d=") => {
                let dlm = &arg[3..];
                if dlm.is_empty() {
                    return Err(ParseError::BadDelimiter);
                }
                flags.delimiter = Some(dlm.to_string());
            }
            _ if arg.starts_with("-d") => return Err(ParseError::BadDelimiter),
            _ if arg.starts_with('-') => {
                if arg.len() == 1 {
                    return Err(ParseError::Unrecognized(arg.to_string()));
                }
                for c in arg[1..].chars() {
                    let class = CharClass::from_flag(c)
                        .ok_or_else(|| ParseError::Unrecognized(arg.to_string()))?;
                    flags.classes.push(class);
                }
            }
            _ if flags.min.is_none() => {
                let n = arg
                    .parse::<usize>()
                    .map_err(|_| ParseError::BadMin(arg.to_string()))?;
                if n == 0 {
                    return Err(ParseError::BadMin(arg.to_string()));
                }
                flags.min = Some(n);
            }
            _ if flags.max.is_none() => {
                let n = arg
                    .parse::<usize>()
                    .map_err(|_| ParseError::BadMax(arg.to_string()))?;
                if n == 0 || n < flags.min.unwrap_or(0) {
                    return Err(ParseError::BadMax(arg.to_string()));
                }
                flags.max = Some(n);
            }
            _ => return Err(ParseError::TooManyArgs),
        }
        i += 1;
    }

    Ok(flags)
}
