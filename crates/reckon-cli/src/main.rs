use anyhow::Context as _;
use clap::Parser;
use reckon::{
    config::{Config, DEFAULT_MAX_DEPTH},
    display::format_number,
    history::Entry,
    scientific::Function,
    session::Calculator,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the syntax tree of the expression instead of its value.
    #[arg(long, requires = "expr")]
    ast: bool,

    /// The maximum nesting depth of an expression.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The expression to evaluate.
    ///
    /// When omitted, a calculator session is read line by line from stdin.
    #[arg(allow_hyphen_values = true)]
    expr: Option<String>,
}

const HELP: &str = "\
Enter an expression to evaluate it, or one of the commands:
  :clear             reset the display
  :mc :mr :m+ :m-    memory clear / recall / add / subtract
  :sin :cos :tan     apply a function to the displayed value
  :sqrt :log
  :history           list the calculations so far
  :help              show this message";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::trace!("CLI args = {:?}", args);

    let mut config = Config::new();
    config.max_depth(args.max_depth);

    match &args.expr {
        Some(expr) if args.ast => {
            let parsed = reckon::parser::parse_with_config(expr, &config)
                .with_context(|| anyhow::anyhow!("failed to parse {:?}", expr))?;
            println!("{}", parsed);
        }
        Some(expr) => {
            let value = reckon::evaluate_with_config(expr, &config)
                .with_context(|| anyhow::anyhow!("failed to evaluate {:?}", expr))?;
            println!("{}", format_number(value));
        }
        None => run_session(config)?,
    }

    Ok(())
}

fn run_session(config: Config) -> anyhow::Result<()> {
    let mut calc = Calculator::with_config(config);
    let mut history: Vec<Entry> = vec![];
    let mut out = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.strip_prefix(':') {
            Some(command) => run_command(&mut calc, &mut history, command.trim(), &mut out)?,
            None => {
                calc.input(line);
                let expression = calc.expression().to_owned();
                match calc.submit(&mut history) {
                    Ok(..) => writeln!(out, "{}", calc.display())?,
                    Err(err) => report(&mut out, &expression, &err)?,
                }
            }
        }
        out.flush().context("failed to flush stdout")?;
    }

    Ok(())
}

fn run_command(
    calc: &mut Calculator,
    history: &mut Vec<Entry>,
    command: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!("command: {}", command);
    match command {
        "clear" | "c" => {
            calc.clear();
            writeln!(out, "{}", calc.display())?;
        }
        "mc" => calc.memory_clear(),
        "mr" => {
            calc.memory_recall();
            writeln!(out, "{}", calc.display())?;
        }
        "m+" | "m-" => {
            let result = if command == "m+" {
                calc.memory_add()
            } else {
                calc.memory_subtract()
            };
            match result {
                Ok(value) => writeln!(out, "M = {}", format_number(value))?,
                Err(err) => writeln!(out, "error: {}", err)?,
            }
        }
        "history" => {
            for entry in history.iter() {
                writeln!(out, "{}", entry)?;
            }
        }
        "help" => writeln!(out, "{}", HELP)?,
        name => match name.parse::<Function>() {
            Ok(func) => match calc.apply(func, &mut *history) {
                Ok(..) => writeln!(out, "{}", calc.display())?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            Err(err) => writeln!(out, "error: {} (try :help)", err)?,
        },
    }
    Ok(())
}

/// Print an error, pointing at the offending position of the input.
fn report(out: &mut impl Write, input: &str, err: &reckon::Error) -> io::Result<()> {
    writeln!(out, "error: {}", err)?;
    if let Some(position) = err.position() {
        let column = input[..position.min(input.len())].chars().count();
        writeln!(out, "  {}", input)?;
        writeln!(out, "  {}^", " ".repeat(column))?;
    }
    Ok(())
}
