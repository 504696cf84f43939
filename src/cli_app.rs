//! Top-level CLI definition and dispatch.
//!
//! The CLI is a thin one-shot shell over the core: it loads a snapshot, runs
//! the requested pipeline stage, and prints either human-readable text or
//! the boundary JSON payloads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};

use lexidash::chart::{ChartMode, ChartSeries, PERMITTED_CHART_LIMITS};
use lexidash::controller::null_sinks::NullView;
use lexidash::controller::{ChartSink, DashboardController};
use lexidash::core::config::{ChartConfig, DashboardConfig, DataFormat};
use lexidash::core::errors::{LexError, Result};
use lexidash::logger::EventLog;
use lexidash::query::{SortKey, filter_records, paginate, sort_records, summarize};
use lexidash::store::{DatasetSnapshot, RecordStore};
use lexidash::viewmodel::{PageView, StatsView, group_thousands};

/// lexidash — search, page, and chart a precomputed word-count snapshot.
#[derive(Debug, Parser)]
#[command(
    name = "lexidash",
    author,
    version,
    about = "Word-frequency dashboard core",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Convert upstream TSV output into a JSON snapshot.
    Convert(ConvertArgs),
    /// Print summary statistics for a snapshot.
    Stats(StatsArgs),
    /// Print one page of the filtered, sorted word list.
    List(ListArgs),
    /// Draw the top-N ranked chart as text bars.
    Chart(ChartArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct ConvertArgs {
    /// TSV input (`word<TAB>count` per line).
    input: PathBuf,
    /// JSON snapshot to write.
    output: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct StatsArgs {
    /// Snapshot file.
    data: PathBuf,
    /// Snapshot encoding.
    #[arg(long, value_enum, default_value_t = CliFormat::Json)]
    format: CliFormat,
}

#[derive(Debug, Clone, Args)]
struct ListArgs {
    /// Snapshot file.
    data: PathBuf,
    /// Snapshot encoding.
    #[arg(long, value_enum, default_value_t = CliFormat::Json)]
    format: CliFormat,
    /// Case-insensitive substring to filter words by.
    #[arg(long, default_value = "")]
    search: String,
    /// Sort selection: count-desc, count-asc, word-asc, word-desc.
    #[arg(long, value_parser = parse_sort_key, default_value = "count-desc")]
    sort: SortKey,
    /// 1-based page number (clamped into range).
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Records per page.
    #[arg(long, default_value_t = 50)]
    page_size: usize,
}

#[derive(Debug, Clone, Args)]
struct ChartArgs {
    /// Snapshot file.
    data: PathBuf,
    /// Snapshot encoding.
    #[arg(long, value_enum, default_value_t = CliFormat::Json)]
    format: CliFormat,
    /// Ranked limit.
    #[arg(long, value_parser = parse_chart_limit, default_value_t = 20)]
    limit: usize,
    /// Chart mode: bar or cloud (cloud falls back to bar).
    #[arg(long, value_parser = parse_chart_mode, default_value = "bar")]
    mode: ChartMode,
    /// Maximum bar width in characters.
    #[arg(long, default_value_t = 40)]
    width: usize,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    shell: CompletionShell,
}

/// Snapshot encoding selector, mapped onto the config enum.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliFormat {
    Json,
    Tsv,
}

impl From<CliFormat> for DataFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Json => Self::Json,
            CliFormat::Tsv => Self::Tsv,
        }
    }
}

fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    s.parse()
}

fn parse_chart_mode(s: &str) -> std::result::Result<ChartMode, String> {
    match s {
        "bar" | "ranked-bar" => Ok(ChartMode::RankedBar),
        "cloud" | "ranked-cloud" => Ok(ChartMode::RankedCloud),
        other => Err(format!("unknown chart mode {other:?} (bar, cloud)")),
    }
}

fn parse_chart_limit(s: &str) -> std::result::Result<usize, String> {
    let limit: usize = s.parse().map_err(|_| format!("not a number: {s:?}"))?;
    if PERMITTED_CHART_LIMITS.contains(&limit) {
        Ok(limit)
    } else {
        Err(format!("limit must be one of {PERMITTED_CHART_LIMITS:?}"))
    }
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        control::set_override(false);
    }
    match &cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Stats(args) => run_stats(args, cli.json),
        Command::List(args) => run_list(args, cli.json),
        Command::Chart(args) => run_chart(args, cli.json),
        Command::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "lexidash",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

fn load_snapshot(path: &Path, format: CliFormat) -> Result<DatasetSnapshot> {
    RecordStore::load_file(path, format.into())
}

fn run_convert(args: &ConvertArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input).map_err(|e| LexError::fetch(&args.input, e))?;
    let snapshot = RecordStore::parse_tsv(&text);
    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| LexError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(snapshot.records())?;
    fs::write(&args.output, json).map_err(|e| LexError::io(&args.output, e))?;
    println!(
        "{} records written to {}",
        group_thousands(snapshot.len() as u128),
        args.output.display()
    );
    Ok(())
}

fn run_stats(args: &StatsArgs, json: bool) -> Result<()> {
    let snapshot = load_snapshot(&args.data, args.format)?;
    let summary = summarize(snapshot.records());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&StatsView::from_summary(&summary))?
        );
        return Ok(());
    }
    println!(
        "{}  {}",
        "records:".bold(),
        group_thousands(summary.total_records as u128)
    );
    println!(
        "{}  {}",
        "occurrences:".bold(),
        group_thousands(summary.total_occurrences)
    );
    println!(
        "{}  {}",
        "unique words:".bold(),
        group_thousands(summary.unique_words as u128)
    );
    println!("{}  {}", "top word:".bold(), summary.top_word.as_str().cyan());
    Ok(())
}

fn run_list(args: &ListArgs, json: bool) -> Result<()> {
    let snapshot = load_snapshot(&args.data, args.format)?;
    let mut view = filter_records(snapshot.records(), &args.search);
    sort_records(&mut view, args.sort);
    let page = paginate(&view, args.page, args.page_size);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&PageView::from_page(&page))?
        );
        return Ok(());
    }
    let rank_base = (page.page - 1) * args.page_size.max(1);
    for (i, record) in page.items.iter().enumerate() {
        println!(
            "{:>6}. {}  {}",
            rank_base + i + 1,
            record.word,
            group_thousands(u128::from(record.count)).as_str().cyan()
        );
    }
    let mut nav = format!("page {} / {}", page.page, page.total_pages);
    if page.can_go_prev() {
        nav = format!("< {nav}");
    }
    if page.can_go_next() {
        nav = format!("{nav} >");
    }
    println!("{}", nav.as_str().dimmed());
    Ok(())
}

/// Chart sink that draws text bars (or dumps the series as JSON).
struct TextChart {
    width: usize,
    json: bool,
}

impl ChartSink for TextChart {
    fn draw(&mut self, series: &ChartSeries) {
        if self.json {
            if let Ok(text) = serde_json::to_string_pretty(series) {
                println!("{text}");
            }
            return;
        }
        let max = series.values.iter().copied().max().unwrap_or(0).max(1);
        let name_width = series
            .categories
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0);
        // Series order is reversed for top-at-the-top rendering; walk it
        // backwards so rank 1 prints first.
        for (word, &count) in series.categories.iter().zip(&series.values).rev() {
            let bar = usize::try_from(
                u128::from(count) * self.width as u128 / u128::from(max),
            )
            .unwrap_or(self.width);
            let fill = "█".repeat(bar);
            println!(
                "{word:>name_width$}  {} {}",
                fill.as_str().blue(),
                group_thousands(u128::from(count)).as_str().bold()
            );
        }
    }
}

fn run_chart(args: &ChartArgs, json: bool) -> Result<()> {
    let snapshot = load_snapshot(&args.data, args.format)?;
    let config = DashboardConfig {
        chart: ChartConfig {
            limit: args.limit,
            mode: args.mode,
        },
        ..DashboardConfig::default()
    };
    let mut controller = DashboardController::new(
        &config,
        NullView,
        TextChart {
            width: args.width.max(1),
            json,
        },
        EventLog::stderr(),
    );
    controller.complete_load(Ok(snapshot));
    Ok(())
}
