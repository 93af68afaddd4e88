//! `treevm` command-line front end.
//!
//! Sources program text from a file or the terminal, then drives the library
//! pipeline and prints each phase's result. Logging goes to stderr.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use treevm::lexer::{self, is_terminator_line};
use treevm::vm::Machine;
use treevm::{Execution, InputMode, ir};

#[derive(Parser)]
#[command(name = "treevm")]
#[command(
    version,
    about = "Prefix-notation interpreter with an equivalent stack machine"
)]
struct Cli {
    /// Log phase boundaries (`-vv` for every executed instruction)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a program, compile it, and run it on the machine
    Run {
        /// Source file; reads the terminal until a `.` line when absent
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the generated instructions to this path
        #[arg(short, long, value_name = "PATH")]
        emit: Option<PathBuf>,
    },

    /// Assemble and run machine instructions
    Machine {
        /// Instruction file; reads the terminal until a `.` line when absent
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { input, emit } => run_program(input.as_deref(), emit.as_deref()),
        Commands::Machine { input } => run_machine(input.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>, prompt: &str) -> anyhow::Result<(String, InputMode)> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((text, InputMode::File))
        }
        None => Ok((read_terminal(prompt)?, InputMode::Interactive)),
    }
}

fn read_terminal(prompt: &str) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut text = String::new();
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} ")?;
    stderr.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from terminal")?;
        if is_terminator_line(&line) {
            break;
        }
        text.push_str(&line);
        text.push('\n');
        write!(stderr, "{prompt} ")?;
        stderr.flush()?;
    }
    Ok(text)
}

fn run_program(input: Option<&Path>, emit: Option<&Path>) -> anyhow::Result<()> {
    let (source, mode) = read_input(input, ">")?;

    println!("(prefix)");
    for line in source.lines() {
        let tokens: Vec<_> = lexer::tokenize(line, InputMode::File)
            .into_iter()
            .map(|token| token.lexeme)
            .collect();
        if !tokens.is_empty() {
            println!(" {}", tokens.join(" "));
        }
    }

    let program = treevm::parse_source(&source, mode)?;
    println!("(infix)");
    print!("{program}");

    println!("(interpreter) running...");
    let interpreted = treevm::interpret(&program)?;
    print_execution(&interpreted);

    let text = treevm::generate(&program);
    if let Some(path) = emit {
        fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote generated instructions");
    }

    let instructions = ir::assemble(&text, InputMode::File)?;
    let machined = execute_on_machine(instructions)?;

    if interpreted != machined {
        error!(
            interpreter = ?interpreted,
            machine = ?machined,
            "execution paths disagree"
        );
        bail!("interpreter and machine produced different results");
    }
    Ok(())
}

fn run_machine(input: Option<&Path>) -> anyhow::Result<()> {
    let (text, mode) = read_input(input, "#")?;
    let instructions = ir::assemble(&text, mode)?;
    execute_on_machine(instructions)?;
    Ok(())
}

fn execute_on_machine(instructions: Vec<ir::Instruction>) -> anyhow::Result<Execution> {
    println!("(machine) instructions:");
    for instruction in &instructions {
        println!("{instruction}");
    }

    println!("(machine) executing...");
    let mut machine = Machine::new(instructions);
    machine.run()?;
    println!("(machine) stack: {:?}", machine.stack().as_slice());
    let execution = machine.into_execution();
    print_execution(&execution);
    Ok(execution)
}

fn print_execution(execution: &Execution) {
    for value in &execution.output {
        println!("{value}");
    }
    println!("symbol table:");
    print!("{}", execution.symbols);
}
