use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use parsec::scanner;
use parsec::{Token, TokenKind};

const DEMO_SOURCE: &str = include_str!("../fixtures/demo.src");

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "parsec", about = "Tokenize C-like source and print the tokens")]
struct Cli {
    /// Source file to tokenize (`-` for stdin, omit for the built-in demo)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Append an EOF token to the printed sequence
    #[arg(long)]
    eof: bool,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    match &cli.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("read source from stdin")?;
            Ok(("<stdin>".to_string(), source))
        }
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("read source file '{}'", path.display()))?;
            Ok((path.display().to_string(), source))
        }
        None => Ok(("<demo>".to_string(), DEMO_SOURCE.to_string())),
    }
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            println!("Tokens ({}):", tokens.len());
            for (i, token) in tokens.iter().enumerate() {
                println!("{}. {token}", i + 1);
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(tokens).context("serialize tokens to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (name, source) = read_source(&cli)?;
    let mut tokens = match scanner::scan(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e.with_source_code(name, source)));
            bail!("tokenization failed");
        }
    };
    if cli.eof {
        tokens.push(Token::new(TokenKind::EndOfInput));
    }
    print_tokens(&tokens, cli.format)
}
