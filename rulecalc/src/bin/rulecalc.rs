use clap::Parser;
use rulecalc::Calculator;
use std::path::PathBuf;
use std::process::ExitCode;

/// Evaluate rule expressions like `pv>100 && uv<50`
#[derive(Parser, Debug)]
#[command(name = "rulecalc", long_about = None)]
struct Args {
    /// Set a variable before evaluating (repeatable)
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    vars: Vec<(String, String)>,

    /// Also print the postfix form of the expression
    #[arg(long)]
    rpn: bool,

    /// REPL history file [default: ~/.rulecalc_history]
    #[arg(long, env = "RULECALC_HISTORY")]
    history: Option<PathBuf>,

    /// Expression to evaluate, starts a REPL when missing
    expression: Vec<String>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

mod repl {
    use rulecalc::Calculator;

    const HELP: &str = "\
set NAME VALUE   store a variable
clear            forget all variables
vars             list variables
rpn EXPR         show the compiled form of EXPR
help             this message
EXPR             evaluate EXPR";

    pub fn evalexpr(calc: &Calculator, input: &str, show_rpn: bool) -> bool {
        if show_rpn {
            match calc.compile(input) {
                Err(e) => {
                    println!("Error: {}", e);
                    return false;
                }
                Ok(rpn) => println!("{}", rpn.postfix()),
            }
        }
        match calc.calculate(input) {
            Err(e) => {
                println!("Error: {}", e);
                false
            }
            Ok(result) => {
                println!("{}", result);
                true
            }
        }
    }

    pub fn parse_statement(calc: &mut Calculator, input: &str) {
        let input = input.trim();
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        match cmd {
            "" => (),
            "help" => println!("{}", HELP),
            "vars" => {
                for (name, value) in calc.variables().iter() {
                    println!("{} = {}", name, value);
                }
            }
            "clear" if rest.is_empty() => calc.clear_variables(),
            "set" => match rest.split_once(char::is_whitespace) {
                Some((name, value)) => calc.set_variable(name, value.trim()),
                None => println!("usage: set NAME VALUE"),
            },
            "rpn" => match calc.compile(rest) {
                Err(e) => println!("Error: {}", e),
                Ok(rpn) => println!("{}\n{}", rpn.postfix(), rpn),
            },
            // wasn't a command... try evaluating expression
            _ => {
                evalexpr(calc, input, false);
            }
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let mut calc = Calculator::new();
    for (name, value) in args.vars {
        calc.set_variable(name, value);
    }

    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        return if repl::evalexpr(&calc, &input, args.rpn) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    use rustyline::error::ReadlineError;
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Readline err: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let histpath = args
        .history
        .or_else(|| dirs::home_dir().map(|h| h.join(".rulecalc_history")));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            tracing::info!(path = %path.display(), "no history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline err: {}", e);
                return ExitCode::FAILURE;
            }
            Ok(input) => {
                let _ = rl.add_history_entry(input.as_str());
                repl::parse_statement(&mut calc, &input);
            }
        }
    }
    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save history");
        }
    }
    ExitCode::SUCCESS
}
