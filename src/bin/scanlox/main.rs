use clap::Parser;
use scanlox::lexer::scan;
use scanlox::report::ConsoleReporter;
use std::{
    error::Error,
    fs,
    io::{self, Write},
    process,
};

const EXIT_USAGE: i32 = 64;
const EXIT_DATA_ERROR: i32 = 65;

#[derive(Parser, Debug)]
#[command(version, about = "Scan a Lox script and print its tokens")]
struct Args {
    script: Option<String>,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("Usage: scanlox [script]");
            eprint!("{}", e);
            process::exit(EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };

    match args.script {
        Some(script) => run_script(&script, args.debug),
        None => repl(args.debug),
    }
}

fn run_script(filename: &str, debug: bool) -> Result<(), Box<dyn Error>> {
    let source = String::from_utf8(fs::read(filename)?)?;
    let mut reporter = ConsoleReporter::stderr();

    run(filename, &source, &mut reporter, debug)?;

    if reporter.had_error() {
        process::exit(EXIT_DATA_ERROR);
    }
    Ok(())
}

fn repl(debug: bool) -> Result<(), Box<dyn Error>> {
    let mut reporter = ConsoleReporter::stderr();
    loop {
        let mut buf = String::new();
        io::stdout().write_all(b"> ")?;
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);
        if line == "exit" {
            break;
        }

        run("<repl>", line, &mut reporter, debug)?;
        reporter.reset();
    }
    Ok(())
}

fn run(
    name: &str,
    source: &str,
    reporter: &mut ConsoleReporter<io::Stderr>,
    debug: bool,
) -> io::Result<()> {
    let tokens = scan(source, reporter);

    let mut out = io::stdout().lock();
    for token in &tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;

    if debug {
        eprintln!(
            "[debug] {}: {} tokens, errors: {}",
            name,
            tokens.len(),
            reporter.had_error()
        );
    }
    Ok(())
}
