use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use nu_ansi_term::Color;
use reedline::{FileBackedHistory, Reedline, Signal};

use church_core::eval::DEFAULT_STEP_LIMIT;
use church_core::{Config, Error, ErrorKind, Result, Session};
use church_parse::ParseError;

mod prompt;
use prompt::{ChurchPrompt, PROMPT_WIDTH};

const HISTORY_CAPACITY: usize = 1000;

#[derive(Parser)]
#[command(name = "church", version, about = "Untyped lambda calculus evaluator")]
struct Cli {
    /// Step limit for every evaluation and decode
    #[arg(long, value_name = "N", default_value_t = DEFAULT_STEP_LIMIT)]
    eval_steps: usize,
    /// Start with an empty environment
    #[arg(long)]
    no_prelude: bool,
    /// Scripts to run line by line
    files: Vec<PathBuf>,
}

// Character column where the parser gave up
fn column(line: &str, e: &ParseError) -> usize {
    line.get(..e.range().start).map_or(0, |before| before.chars().count())
}

fn interactive(session: &mut Session) -> Result<()> {
    let mut editor = Reedline::create();
    if let Some(dirs) = ProjectDirs::from("org", "church", "church") {
        std::fs::create_dir_all(dirs.config_dir())?;
        let path = dirs.config_dir().join("history.txt");
        let history = FileBackedHistory::with_file(HISTORY_CAPACITY, path)
            .map_err(|e| Error::with_kind(ErrorKind::IO, e.to_string()))?;
        editor = editor.with_history(Box::new(history));
    }

    let prompt = ChurchPrompt::default();
    let mut stdout = io::stdout();
    loop {
        let line = match editor.read_line(&prompt)? {
            Signal::Success(line) => line,
            Signal::CtrlC => continue,
            Signal::CtrlD => return Ok(())
        };
        if let Err(e) = session.run_line(&line, &mut stdout) {
            if let Some(parse) = e.parse_error() {
                let indent = " ".repeat(PROMPT_WIDTH + column(&line, parse));
                eprintln!("{}{}", indent, Color::Red.paint("^"));
            }
            eprintln!("{}", Color::Red.paint(e.to_string()));
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        step_limit: cli.eval_steps,
        prelude: !cli.no_prelude
    };
    let mut session = Session::new(config)?;

    if !cli.files.is_empty() {
        let mut stdout = io::stdout().lock();
        for path in &cli.files {
            log::debug!("running {}", path.display());
            let src = std::fs::read_to_string(path)?;
            session.run_source(&src, &mut stdout, |line, e| {
                eprintln!("{}:{}: {}", path.display(), line, e)
            });
        }
        Ok(())
    } else if io::stdin().is_terminal() {
        interactive(&mut session)
    } else {
        let mut stdout = io::stdout().lock();
        for (index, line) in io::stdin().lock().lines().enumerate() {
            let line = line?;
            if let Err(e) = session.run_line(&line, &mut stdout) {
                eprintln!("<stdin>:{}: {}", index + 1, e);
            }
        }
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
