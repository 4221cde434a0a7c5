use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
    time::Instant,
};

use cfpl::{
    config::{EX_DATAERR, EX_IOERR, EX_USAGE, LANG_NAME, PROMPT, SOURCE_EXTENSION, VERSION},
    display_error,
    errors::errors::{Error, Reporter},
    lexer::{
        lexer::{tokenize, tokenize_with_reporter},
        tokens::Token,
    },
};

/// Prints each diagnostic as it arrives and remembers that one did.
struct StderrReporter {
    had_error: bool,
}

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}

fn main() {
    let mut time = false;
    let mut scripts: Vec<String> = vec![];

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--time" => time = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(EX_USAGE);
            }
            _ => scripts.push(arg),
        }
    }

    match scripts.as_slice() {
        [] => run_prompt(time),
        [script] => run_file(script, time),
        _ => {
            print_usage();
            process::exit(EX_USAGE);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cfpl [--time] [script]");
    eprintln!("       cfpl --help");
}

fn print_help() {
    println!("{} v{} - token scanner", LANG_NAME, VERSION);
    println!();
    println!("USAGE:");
    println!("    cfpl [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    --time          Print how long tokenizing took");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    cfpl program.{}    Print the tokens of a file", SOURCE_EXTENSION);
    println!("    cfpl                 Start interactive REPL");
}

fn run_file(path: &str, time: bool) {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read file '{}': {}", path, e);
            process::exit(EX_IOERR);
        }
    };

    let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
    let start = Instant::now();

    match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => {
            if time {
                eprintln!("Tokenized in {:?}", start.elapsed());
            }
            print_tokens(&tokens);
        }
        Err(failure) => {
            if time {
                eprintln!("Tokenized in {:?}", start.elapsed());
            }
            print_tokens(&failure.tokens);
            print_errors(&failure.errors, &source);
            eprintln!("{}", failure);
            process::exit(EX_DATAERR);
        }
    }
}

fn run_prompt(time: bool) {
    println!("{} v{}", LANG_NAME, VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
            None => break,
        };

        // Each line is scanned on its own, so errors never carry over.
        let mut reporter = StderrReporter { had_error: false };
        let start = Instant::now();
        let tokens = tokenize_with_reporter(line, None, &mut reporter);

        if time {
            eprintln!("Tokenized in {:?}", start.elapsed());
        }
        print_tokens(&tokens);

        if reporter.had_error {
            eprintln!("(line had lexical errors)");
        }
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn print_errors(errors: &[Error], source: &str) {
    for error in errors {
        eprint!("{}", display_error(error, source));
    }
}
