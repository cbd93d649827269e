//! ScopeStore shell binary.
//!
//! Interactive prompt on a terminal; otherwise consumes piped stdin one
//! line at a time and prints whatever each command renders.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use tracing_subscriber::EnvFilter;

use scopestore_shell::Session;

fn main() {
    let verbose = env::args().skip(1).any(|a| a == "-v" || a == "--verbose");

    // Initialize logging; RUST_LOG overrides the flag-derived default.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut session = Session::new();
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("ScopeStore shell. Commands: SET GET DELETE COUNT BEGIN COMMIT ROLLBACK. Ctrl-D to exit.");
    }

    loop {
        if interactive {
            let marker = if session.has_active_transaction() { "*" } else { "" };
            print!("scopestore{}> ", marker);
            if io::stdout().flush().is_err() {
                break;
            }
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                std::process::exit(1);
            }
        }

        for rendered in session.execute_line(&line) {
            println!("{}", rendered);
        }
    }
}
