//! Usage text.

use crate::config::{FREQUENCY_NORMAL, MAX_EASY, MAX_NORMAL, MIN_EASY, MIN_NORMAL};
use crate::pass::charset::MASTER;

pub fn print_help() {
    println!("credgen - pseudorandomly generate password credentials");
    println!();
    println!(
        "By default, a credential of {MIN_NORMAL} to {MAX_NORMAL} character length is generated"
    );
    println!("from the full {}-character keyset.", MASTER.len());
    println!();
    println!("USAGE:");
    println!("  credgen [OPTIONS] [len | min max]");
    println!();
    println!("OPTIONS:");
    println!("  -h        Print this help text");
    println!("  -v        Print version string");
    println!("  -[aA1sS]  Pick keyset classes from a-z, A-Z, 0-9, and lower/upper");
    println!("            symbols. Combinable and repeatable; repeats weight the draw.");
    println!("  -e        Easy mode. Same as '-aaaA1 {MIN_EASY} {MAX_EASY}'.");
    println!("  -w        Generate a string of common words (last word may exceed max)");
    println!("  -d[=DLM]  Delimit characters (or words with -w) with spaces (or DLM)");
    println!("  -dn=N     Change delimiter frequency from {FREQUENCY_NORMAL} (not with -w)");
    println!();
    println!("  len, min, and max change the range of possible credential lengths.");
    println!();
    println!("EXAMPLES:");
    println!("  credgen                  One credential, {MIN_NORMAL}-{MAX_NORMAL} characters");
    println!("  credgen -a1 16           Lowercase and digits, exactly 16 characters");
    println!("  credgen -e               Easy mode, {MIN_EASY}-{MAX_EASY} characters");
    println!("  credgen -w -d=-          Common words joined with '-'");
    println!("  credgen -aA -d -dn=4 20  Grouped letters, space every 4 characters");
}
