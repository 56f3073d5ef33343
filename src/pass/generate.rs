//! Credential generation.

use rand::Rng;

use super::charset::Keyset;
use super::words::WordDictionary;
use crate::config::{GenerationConfig, Mode};
use crate::error::Error;
use crate::rng;

/// Pick the target length, uniform over `[min, max]` inclusive.
/// The range was validated at parse time; re-checked here because the
/// draw below must never see an empty span.
pub fn pick_length(rng: &mut impl Rng, min: usize, max: usize) -> Result<usize, Error> {
    if min > max {
        return Err(Error::Internal("inverted length range"));
    }
    Ok(min + rng::uniform(rng, max - min + 1)?)
}

/// Generate one credential according to the configuration.
pub fn generate(config: &GenerationConfig, rng: &mut impl Rng) -> Result<String, Error> {
    let target = pick_length(rng, config.min_length, config.max_length)?;
    let delimiter = config.delimiter.as_deref();

    match &config.mode {
        Mode::Characters(keyset) => {
            emit_characters(rng, keyset, target, delimiter, config.frequency)
        }
        Mode::Words(dict) => emit_words(rng, dict, target, delimiter),
    }
}

/// One keyset draw per output character. A configured delimiter goes in
/// front of every `frequency`-th character, never before the first.
fn emit_characters(
    rng: &mut impl Rng,
    keyset: &Keyset,
    target: usize,
    delimiter: Option<&str>,
    frequency: usize,
) -> Result<String, Error> {
    let mut out = String::with_capacity(target * 2);
    let mut position = 0;

    while position < target {
        let idx = rng::uniform(rng, keyset.len())?;
        if let Some(dlm) = delimiter
            && position > 0
            && position % frequency == 0
        {
            out.push_str(dlm);
        }
        out.push(keyset.byte_at(idx) as char);
        position += 1;
    }

    Ok(out)
}

/// Whole words until the target is met. The loop condition is checked
/// only between words, so the result may run past `target` by strictly
/// less than the longest drawn word. A configured delimiter goes between
/// every pair of words.
fn emit_words(
    rng: &mut impl Rng,
    dict: &WordDictionary,
    target: usize,
    delimiter: Option<&str>,
) -> Result<String, Error> {
    let count = dict.word_count();
    let mut out = String::with_capacity(target * 2);
    let mut position = 0;

    while position < target {
        let idx = rng::uniform(rng, count)?;
        // The draw is below the count just scanned, so lookup failure
        // here is a dictionary bug, not bad input.
        let word = dict
            .word_at(idx)
            .ok_or(Error::Internal("word lookup out of range"))?;
        if position > 0
            && let Some(dlm) = delimiter
        {
            out.push_str(dlm);
        }
        out.push_str(word);
        position += word.len();
    }

    Ok(out)
}
