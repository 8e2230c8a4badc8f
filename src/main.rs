use anyhow::{bail, Context, Result};
use casefile::app::run_tui;
use casefile::assistant::DetectiveAi;
use casefile::case::{import, CaseBook};
use casefile::config::{self, Config};
use casefile::logging;
use casefile::ui::App;
use casefile::util::one_line;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "casefile",
    about = "A noir case board with a detective in the margin",
    version
)]
struct Args {
    /// Case file to load (JSON or TOML); defaults to the built-in cases
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Print the casebook and exit (no TUI)
    #[arg(short, long)]
    list: bool,

    /// Case to ask about with --ask
    #[arg(long, requires = "ask")]
    case: Option<String>,

    /// Ask Detective Thorne one question and print the reply
    #[arg(long, requires = "case")]
    ask: Option<String>,

    /// Store a Gemini API key in the system keychain
    #[arg(long)]
    setup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = logging::init() {
        tracing::debug!("logging to {}", path.display());
    }

    if args.setup {
        config::setup_api_key_interactive().map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    let mut config = Config::load();
    let book = load_casebook(args.cases.as_ref().or(config.cases_path.as_ref()))?;

    if args.list {
        print_casebook(&book);
        return Ok(());
    }

    let ai = DetectiveAi::from_config(&mut config);

    if let (Some(case_id), Some(question)) = (args.case, args.ask) {
        let Some(case) = book.get(&case_id) else {
            bail!("No case with id '{}'. Try --list.", case_id);
        };
        let reply = ai.analyze_case(case, &question).await;
        println!("{}", reply);
        return Ok(());
    }

    let app = App::new(book, ai.is_online(), ai.model());
    run_tui(app, ai).await
}

fn load_casebook(path: Option<&PathBuf>) -> Result<CaseBook> {
    let Some(path) = path else {
        return Ok(CaseBook::with_mock_cases());
    };
    let cases = import::load_cases(path)
        .with_context(|| format!("Failed to load cases from {}", path.display()))?;
    Ok(CaseBook::new(cases))
}

fn print_casebook(book: &CaseBook) {
    println!();
    println!("  C A S E F I L E");
    println!();
    for case in book.cases() {
        let counts = case.counts();
        println!("  {:<10} {:<8} {}", case.id, case.status.label(), case.title);
        println!(
            "  {:<19} {} suspects, {} clues, {} gaps, {} theories",
            "",
            counts.suspects,
            counts.clues,
            case.gap_count(),
            counts.theories
        );
        if !case.description.is_empty() {
            println!("  {:<19} {}", "", one_line(&case.description));
        }
        println!();
    }
}
