//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! mcal                   // Current month
//! mcal 2 2026            // February 2026
//! mcal 2 2026 sunday     // February 2026, week starts on Sunday
//! ```

use mcal::args::{Args, resolve};
use mcal::error::CalError;
use mcal::formatter::render;
use mcal::types::NameTable;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        // Validation errors get a short message; anything else gets the
        // full diagnostic rendering.
        if e.is_validation() {
            eprintln!("mcal: {}", e);
        } else {
            eprintln!("mcal: unexpected error: {:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let names = NameTable::english();
    let request = resolve(args, &names)?;
    render(&request, &names, &mut std::io::stdout().lock())
}
