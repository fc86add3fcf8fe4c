//! arith CLI

use arith_error::{Diagnostic, DiagnosticRenderer};
use arith_lexer::Lexer;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// When to emit ANSI colours in diagnostics
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorChoice {
    /// Colour only when stderr is a terminal (default)
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(name = "arith")]
#[command(author = "Guilherme Mendes")]
#[command(version = "0.1.0")]
#[command(about = "Arithmetic expression lexer and parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Colour diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    /// Print diagnostics as the bare two-line report, without the source snippet
    #[arg(long, global = true)]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows the tokens of an expression
    Lex(InputArgs),

    /// Shows the AST of an expression
    Parse(InputArgs),

    /// Reads expressions line by line from stdin and shows their AST
    Shell,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Input file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Expression given inline
    #[arg(short, long, value_name = "EXPR")]
    expr: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Diagnostic(#[from] Diagnostic),
}

/// Expression text plus the name diagnostics report it under
struct Source {
    name: String,
    text: String,
}

impl InputArgs {
    fn load(&self) -> Result<Source, CliError> {
        if let Some(expr) = &self.expr {
            return Ok(Source {
                name: "<expr>".to_string(),
                text: expr.clone(),
            });
        }

        let path = self.input.clone().unwrap_or_default();
        let text = fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;

        Ok(Source {
            name: path.display().to_string(),
            text: strip_line_terminator(&text).to_string(),
        })
    }
}

/// Drops one trailing `\n` or `\r\n`; newlines are not part of an expression
fn strip_line_terminator(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}

/// Initializes logging on stderr
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

struct Reporter {
    renderer: DiagnosticRenderer,
    plain: bool,
}

impl Reporter {
    fn new(color: ColorChoice, plain: bool) -> Self {
        let use_colors = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Self {
            renderer: DiagnosticRenderer::new().with_colors(use_colors),
            plain,
        }
    }

    fn report(&self, diagnostic: &Diagnostic, out: &mut impl Write) -> io::Result<()> {
        if self.plain {
            writeln!(out, "{}", diagnostic)
        } else {
            write!(out, "{}", self.renderer.render(diagnostic))
        }
    }
}

fn lex(args: &InputArgs, out: &mut impl Write) -> Result<(), CliError> {
    let source = args.load()?;
    let mut lexer = Lexer::new(&source.name, &source.text);
    let tokens = lexer.tokenize()?;

    for token in &tokens {
        writeln!(
            out,
            "  {:4}:{:<3}  {}",
            token.start.line + 1,
            token.start.column + 1,
            token
        )?;
    }
    writeln!(out, "\nTotal: {} tokens", tokens.len())?;

    Ok(())
}

fn parse(args: &InputArgs, out: &mut impl Write) -> Result<(), CliError> {
    let source = args.load()?;
    let ast = arith_parser::run(&source.name, &source.text)?;

    tracing::info!(
        numbers = ast.count_numbers(),
        depth = ast.depth(),
        "parsed {}",
        source.name
    );
    writeln!(out, "{}", ast)?;

    Ok(())
}

/// Returns whether every line parsed
fn shell(
    mut input: impl BufRead,
    out: &mut impl Write,
    errors: &mut impl Write,
    reporter: &Reporter,
) -> Result<bool, CliError> {
    let mut all_ok = true;
    let mut line = String::new();

    loop {
        write!(out, "arith > ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let text = strip_line_terminator(&line);
        if text.trim().is_empty() {
            continue;
        }

        match arith_parser::run("<stdin>", text) {
            Ok(ast) => writeln!(out, "{}", ast)?,
            Err(diagnostic) => {
                all_ok = false;
                reporter.report(&diagnostic, errors)?;
            }
        }
    }

    Ok(all_ok)
}

/// Runs the selected command and returns the process exit code
fn execute(cli: &Cli, input: impl BufRead, out: &mut impl Write, errors: &mut impl Write) -> i32 {
    let reporter = Reporter::new(cli.color, cli.plain);

    let result = match &cli.command {
        Commands::Lex(args) => lex(args, out).map(|_| true),
        Commands::Parse(args) => parse(args, out).map(|_| true),
        Commands::Shell => shell(input, out, errors, &reporter),
    };

    let reported = match result {
        Ok(true) => return 0,
        Ok(false) => return 1,
        Err(CliError::Diagnostic(diagnostic)) => reporter.report(&diagnostic, errors),
        Err(e) => writeln!(errors, "{}", e),
    };
    if let Err(e) = reported {
        tracing::error!("failed to write diagnostic: {}", e);
    }

    1
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let code = execute(&cli, io::stdin().lock(), &mut io::stdout(), &mut io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}
