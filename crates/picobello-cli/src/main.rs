use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use picobello::disasm::listing;
use picobello::opcode::opcodes;
use picobello::Program;
use picobello_cli::{hexfile, sample::SAMPLE_HEX};

#[derive(Parser, Debug)]
#[command(author, version, about = "PIC baseline (12-bit) disassembler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassemble an Intel HEX image
    Disassemble {
        /// Input HEX path
        #[arg(value_name = "HEXFILE", required_unless_present = "sample")]
        input: Option<PathBuf>,
        /// Use the built-in demo image instead of a file
        #[arg(long, conflicts_with = "input")]
        sample: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List the opcode table
    Opcodes {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn render_program(program: &Program, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => listing(program) + "\n",
        OutputFormat::Json => serde_json::to_string_pretty(program)? + "\n",
    })
}

fn render_opcodes(format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(opcodes())? + "\n");
    }
    let mut buf = String::new();
    writeln!(buf, "{:<8} {:<16} {:>6}  status", "name", "pattern", "cycles")?;
    for op in opcodes() {
        let pattern = op.bit_pattern.to_string();
        writeln!(buf, "{:<8} {pattern:<16} {:>6}  {}", op.name, op.cycles, op.status)?;
    }
    Ok(buf)
}

fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    if let Some(path) = out {
        std::fs::write(path, text)?;
    } else {
        print!("{text}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Disassemble { input, sample, format, out } => {
            let program = match input {
                Some(path) if !sample => hexfile::load(&path)?,
                _ => hexfile::parse(SAMPLE_HEX)?,
            };
            info!(records = program.len(), "disassembled");
            let text = render_program(&program, format)?;
            emit(&text, out.as_deref())?;
        }
        Command::Opcodes { format } => print!("{}", render_opcodes(format)?),
    }
    Ok(())
}
