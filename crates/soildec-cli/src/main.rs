use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use soildec_core::payload::layout::HEADER_LABEL;
use soildec_core::{DecodeError, DecodedRecord, PayloadFormat, SentinelMode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HELP_TOKENS: [&str; 3] = ["help", "-h", "--help"];

#[derive(Parser, Debug)]
#[command(name = "soildec")]
#[command(version)]
#[command(
    about = "Decode soil sensor telemetry payloads (hex) into labeled measurements.",
    long_about = None,
    disable_help_flag = true,
    disable_help_subcommand = true,
    after_help = "Examples:\n  soildec 012000e500e7\n  soildec --format extended 021e00c80032ffff\n  soildec -f extended --json --pretty 021e00c80032ffff"
)]
struct Cli {
    /// Hex-encoded payload (case-insensitive)
    payload: String,

    /// Payload format
    #[arg(short, long, default_value = "legacy")]
    format: PayloadFormat,

    /// Test legacy temperature/soil against their own bytes instead of the voltage byte
    #[arg(long)]
    corrected_sentinels: bool,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

/// Help tokens and argument errors print usage and exit with status 1.
///
/// Only the first argument is checked for a help token, so `-- -h` still
/// reaches the decoder as a payload.
fn parse_args<I>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let wants_help = args
        .get(1)
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| HELP_TOKENS.contains(&arg));
    if wants_help {
        print_usage();
        return Err(ExitCode::from(1));
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{}", err);
            Err(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprint!("{}", err);
            print_usage();
            Err(ExitCode::from(1))
        }
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_help());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("soildec=debug,soildec_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("soildec=warn,soildec_core=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        let hint = match &err {
            DecodeError::InvalidLength { format, needed, .. } => format!(
                "{} payloads need at least {} hex characters; check --format",
                format, needed
            ),
            DecodeError::UnknownHeader { .. } => {
                "expected header 00 (BOOT), 01 (UPDATE), 02 (BUTTON_CLICK) or 03 (BUTTON_HOLD)"
                    .to_string()
            }
            DecodeError::MalformedHex { .. } => {
                "payload must contain only hex digits (0-9, a-f)".to_string()
            }
        };
        CliError::new(err.to_string(), Some(hint))
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let mode = if cli.corrected_sentinels {
        SentinelMode::Corrected
    } else {
        SentinelMode::Faithful
    };
    debug!(format = %cli.format, ?mode, payload = %cli.payload, "decoding");

    let record = soildec_core::decode_with_mode(cli.format, cli.payload.trim(), mode)?;
    if cli.json {
        render_json(&record, cli.pretty)
    } else {
        Ok(render_text(&record))
    }
}

fn render_json(record: &DecodedRecord, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
    .context("JSON serialization failed")?;
    Ok(format!("{}\n", json))
}

/// One `Label : value` line per field, header first.
fn render_text(record: &DecodedRecord) -> String {
    let mut out = format!("{} : {}\n", HEADER_LABEL, record.header());
    for field in record.fields() {
        let value = field
            .reading
            .map(|reading| reading.to_string())
            .unwrap_or_else(|| "None".to_string());
        out.push_str(&format!("{} : {}\n", field.label, value));
    }
    out
}
