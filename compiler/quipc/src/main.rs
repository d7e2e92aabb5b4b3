//! Quip CLI

use std::process::ExitCode;

use quipc::{init_tracing, lex_file, parse_file, parse_run_options, run_file};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    let cmd = parse_run_options(&args[2..]);
    for flag in &cmd.unknown {
        eprintln!("warning: ignoring unrecognised argument '{flag}'");
    }

    let ok = match command.as_str() {
        "run" => run_file(cmd.path_or_default(), &cmd.options),
        "lex" => {
            let Some(path) = cmd.path.as_deref() else {
                eprintln!("Usage: quip lex <file>");
                return ExitCode::FAILURE;
            };
            lex_file(path, &cmd.options)
        }
        "parse" => {
            let Some(path) = cmd.path.as_deref() else {
                eprintln!("Usage: quip parse <file>");
                return ExitCode::FAILURE;
            };
            parse_file(path, &cmd.options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            false
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    eprintln!("Usage: quip <command> [file] [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run [file]     Run a script (default: script.txt)");
    eprintln!("  lex <file>     Print the tokens of a script");
    eprintln!("  parse <file>   Print the syntax tree of a script");
    eprintln!("  help           Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color=<mode>   Diagnostic colors: auto, always, never");
    eprintln!("  --dump-symbols   After `run`, print final variable bindings to stderr");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) to trace the lexer, parser and interpreter.");
}
