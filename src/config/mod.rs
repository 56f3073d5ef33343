//! Validated generation configuration.

use crate::cli::CliFlags;
use crate::error::Error;
use crate::pass::charset::{self, Keyset};
use crate::pass::words::WordDictionary;

/// Default length range for character credentials.
pub const MIN_NORMAL: usize = 20;
pub const MAX_NORMAL: usize = 30;

/// Default length range for easy mode.
pub const MIN_EASY: usize = 8;
pub const MAX_EASY: usize = 12;

/// Default delimiter text and insertion interval.
pub const DELIMITER_NORMAL: &str = " ";
pub const FREQUENCY_NORMAL: usize = 5;

/// What the emitter draws from.
pub enum Mode {
    Characters(Keyset),
    Words(WordDictionary),
}

/// Everything the generation loop needs, cross-checked and defaulted.
/// Once this exists, the only failure left is an internal error.
pub struct GenerationConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub mode: Mode,
    pub delimiter: Option<String>,
    /// Characters between delimiters in character mode. Word mode
    /// delimits every word and ignores this.
    pub frequency: usize,
}

/// Cross-check parsed flags and assemble the runtime configuration.
pub fn from_flags(flags: &CliFlags) -> Result<GenerationConfig, Error> {
    if flags.words && (!flags.classes.is_empty() || flags.frequency.is_some()) {
        return Err(Error::Usage("incompatible with -w".into()));
    }

    let mode = if flags.words {
        Mode::Words(WordDictionary::embedded())
    } else {
        Mode::Characters(charset::build(&flags.classes)?)
    };

    let (min_default, max_default) = if flags.easy {
        (MIN_EASY, MAX_EASY)
    } else {
        (MIN_NORMAL, MAX_NORMAL)
    };
    let min_length = flags.min.unwrap_or(min_default);
    let max_length = flags.max.unwrap_or_else(|| flags.min.unwrap_or(max_default));

    Ok(GenerationConfig {
        min_length,
        max_length,
        mode,
        delimiter: flags.delimiter.clone(),
        frequency: flags.frequency.unwrap_or(FREQUENCY_NORMAL),
    })
}
