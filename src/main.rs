//! brace-fmt CLI
//!
//! Usage:
//!   brace-fmt [OPTIONS] [TEMPLATE] [ARGS]...
//!
//! Options:
//!   -c, --config <FILE>  Render options (TOML format)
//!   --check              Validate the template without rendering
//!   --arity <N>          Arity to validate against with --check
//!   -d, --debug          Debug logging
//!   -g, --grammar        Show template grammar reference
//!   -h, --help           Print help

use std::fmt;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use brace_fmt::{print_with_options, Output, Render, RenderOptions, Specifier, Template};

#[derive(Parser)]
#[command(name = "brace-fmt")]
#[command(about = "Format positional brace templates with typed arguments")]
struct Cli {
    /// Template text (reads from stdin if not provided)
    template: Option<String>,

    /// Arguments as kind:value (s, i, u, f, c, b); untyped values are text
    #[arg(value_parser = parse_value, allow_hyphen_values = true)]
    args: Vec<Value>,

    /// Render options file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the template and exit
    #[arg(long)]
    check: bool,

    /// Arity to validate against (defaults to the number of ARGS)
    #[arg(long, requires = "check")]
    arity: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    debug: bool,

    /// Show template grammar reference
    #[arg(short, long)]
    grammar: bool,
}

/// A command-line argument with the type its prefix selected
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Bool(bool),
}

impl Render for Value {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        match self {
            Value::Text(v) => v.render(out, spec),
            Value::Int(v) => v.render(out, spec),
            Value::Uint(v) => v.render(out, spec),
            Value::Float(v) => v.render(out, spec),
            Value::Char(v) => v.render(out, spec),
            Value::Bool(v) => v.render(out, spec),
        }
    }
}

fn parse_value(raw: &str) -> Result<Value, String> {
    let Some((kind, value)) = raw.split_once(':') else {
        return Ok(Value::Text(raw.to_string()));
    };
    match kind {
        "s" => Ok(Value::Text(value.to_string())),
        "i" => value
            .parse()
            .map(Value::Int)
            .map_err(|e| format!("invalid signed integer '{value}': {e}")),
        "u" => value
            .parse()
            .map(Value::Uint)
            .map_err(|e| format!("invalid unsigned integer '{value}': {e}")),
        "f" => value
            .parse()
            .map(Value::Float)
            .map_err(|e| format!("invalid float '{value}': {e}")),
        "c" => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(format!("expected exactly one character, got '{value}'")),
            }
        }
        "b" => value
            .parse()
            .map(Value::Bool)
            .map_err(|e| format!("invalid bool '{value}': {e}")),
        // Not a known kind, so the colon belongs to the text
        _ => Ok(Value::Text(raw.to_string())),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("brace_fmt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.grammar {
        print_grammar();
        return;
    }

    // No template and an interactive stdin: show intro help
    if cli.template.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let options = match &cli.config {
        Some(path) => match RenderOptions::from_file(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderOptions::default(),
    };

    let template = match cli.template {
        Some(template) => template,
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer.trim_end_matches(['\n', '\r']).to_string(),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.check {
        let arity = cli.arity.unwrap_or(cli.args.len());
        match Template::compile(&template, arity) {
            Ok(compiled) => {
                println!(
                    "OK: {} placeholder(s), {} argument(s)",
                    compiled.placeholders().count(),
                    arity
                );
            }
            Err(e) => {
                eprint!("{}", e.report(&template, "template"));
                std::process::exit(1);
            }
        }
        return;
    }

    let mut stdout = io::stdout().lock();
    let result = print_with_options(&mut stdout, &template, &cli.args, &options)
        .and_then(|()| writeln!(stdout).map_err(Into::into));
    if let Err(e) = result {
        match e.as_template_error() {
            Some(template_error) => eprint!("{}", template_error.report(&template, "template")),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn print_intro() {
    println!(
        r#"brace-fmt - positional brace templates with typed arguments

USAGE:
    brace-fmt [OPTIONS] [TEMPLATE] [ARGS]...
    echo '<template>' | brace-fmt --check --arity 2

OPTIONS:
    -c, --config     Render options (TOML file)
    --check          Validate the template only
    --arity <N>      Arity for --check (defaults to the number of ARGS)
    -d, --debug      Debug logging
    -g, --grammar    Show template grammar reference
    -h, --help       Print help

QUICK START:
    brace-fmt '{{1}} owes {{0:08x}}' i:255 bob

This prints "bob owes 000000ff".
Run --grammar for the placeholder syntax."#
    );
}

fn print_grammar() {
    println!(
        r#"BRACE-FMT TEMPLATE GRAMMAR
==========================

PLACEHOLDERS
------------
{{}}              Next argument (implicit position)
{{N}}             Argument N (zero-based)
{{N:SPEC}}        Argument N rendered with SPEC
{{:SPEC}}         Next argument rendered with SPEC

Implicit and explicit positions cannot be mixed in one template.
Positions may repeat, but every position below the highest one must be
used, and there must be at least one placeholder per argument.
A closing brace outside a placeholder is literal text.

SPEC
----
[fill][width][layout]

fill      One letter, or 0 in front of the width digits ({{:08x}})
width     Decimal digits, at most 65535
layout    x X   hexadecimal (X is uppercase)
          o     octal
          b     binary
          f     float
          c     character
          p     pointer

WIDTH
-----
Hex, octal, binary and pointer output is exactly WIDTH digits: longer
values keep their low-order digits, shorter ones are padded with the
fill ('0' unless a fill is given).
Decimal, float and char output is padded to at least WIDTH.
Text and booleans ignore the spec.

ARGUMENTS
---------
s:text   i:-42   u:42   f:2.5   c:A   b:true
Untyped values are text."#
    );
}
