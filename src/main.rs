use std::env;
use std::process;

mod cli;
mod config;
mod error;
mod pass;
mod rng;

fn main() {
    // Credentials pass through this process; keep it out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();

    if let Err(e) = cli::run(&args) {
        cli::prompts::error(&e.to_string());
        process::exit(e.exit_code());
    }
}
