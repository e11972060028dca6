use std::{env, io, process};

use flint_lang::flint;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut flint = flint::new(&mut stdout);

    match args.len() {
        n if n > 2 => {
            println!("Usage: flint [script]");
            process::exit(64);
        },
        2 => flint.run_file(&args[1]),
        _ => flint.run_prompt(),
    };
}
