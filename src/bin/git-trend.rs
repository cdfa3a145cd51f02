//! Command line front end: fetch (or read) a trending page and print it.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use git_trend::languages::{PROGRAMMING_LANGUAGES, SPOKEN_LANGUAGES};
use git_trend::render::{self, empty_message};
use git_trend::{
    extract_bytes, fetch_trending, ContentType, FetchOptions, Format, HttpFetcher, Period, Query,
    RenderOptions, Trending,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const ISSUES_URL: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");

/// Browse trending repositories and developers on GitHub.
#[derive(Debug, Parser)]
#[command(name = "git-trend", version, about)]
struct Cli {
    /// Show trending repositories
    #[arg(long, conflicts_with = "devs")]
    repos: bool,

    /// Show trending developers
    #[arg(long)]
    devs: bool,

    /// Time window: daily, weekly or monthly
    #[arg(long, default_value_t = Period::Daily)]
    period: Period,

    /// Filter by programming language (see --languages)
    #[arg(long)]
    language: Option<String>,

    /// Filter repositories by spoken language code (see --spoken-languages)
    #[arg(long)]
    spoken_language: Option<String>,

    /// Output format: default, table or json
    #[arg(long, default_value_t = Format::Default)]
    format: Format,

    /// List supported programming languages
    #[arg(
        long,
        conflicts_with_all = ["repos", "devs", "language", "spoken_language", "input", "spoken_languages"]
    )]
    languages: bool,

    /// List supported spoken languages
    #[arg(
        long,
        conflicts_with_all = ["repos", "devs", "language", "spoken_language", "input"]
    )]
    spoken_languages: bool,

    /// Read a saved trending page instead of fetching ("-" for stdin)
    #[arg(long, value_name = "PATH|-")]
    input: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn content_type(&self) -> anyhow::Result<ContentType> {
        match (self.repos, self.devs) {
            (true, false) => Ok(ContentType::Repositories),
            (false, true) => Ok(ContentType::Developers),
            _ => bail!("Use either repos or devs flag"),
        }
    }

    fn query(&self) -> anyhow::Result<Query> {
        Ok(Query {
            period: self.period,
            language: self.language.clone(),
            spoken_language: self.spoken_language.clone(),
            ..Query::new(self.content_type()?)
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err
                .downcast_ref::<git_trend::Error>()
                .is_some_and(git_trend::Error::is_layout_change)
            {
                eprintln!("The trending page layout may have changed. Please report it at {ISSUES_URL}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "git_trend=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.languages {
        for language in PROGRAMMING_LANGUAGES {
            writeln!(out, "{language}")?;
        }
        return Ok(());
    }
    if cli.spoken_languages {
        for (code, name) in SPOKEN_LANGUAGES {
            writeln!(out, "{code}: {name}")?;
        }
        return Ok(());
    }

    let query = cli.query()?;
    query.validate()?;
    let trending = match &cli.input {
        Some(path) => {
            let html = read_input(path)?;
            extract_bytes(&html, query.content_type)?
        }
        None => {
            let options = FetchOptions::from_env();
            let fetcher = HttpFetcher::new(&options)?;
            fetch_trending(&fetcher, &query, &options.base_url)?
        }
    };
    debug!(records = trending.len(), "extraction finished");

    print(&trending, cli, &mut out)
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut html = Vec::new();
        io::stdin()
            .read_to_end(&mut html)
            .context("Failed to read from stdin")?;
        return Ok(html);
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print<W: Write>(trending: &Trending, cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    if trending.is_empty() && cli.format != Format::Json {
        writeln!(out, "{}", empty_message(trending.content_type()))?;
        return Ok(());
    }

    let options = RenderOptions {
        color: !cli.no_color && io::stdout().is_terminal(),
    };
    render::render(trending, cli.format, &options, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repos_and_devs_conflict() {
        assert!(Cli::try_parse_from(["git-trend", "--repos", "--devs"]).is_err());
    }

    #[test]
    fn test_languages_stands_alone() {
        assert!(Cli::try_parse_from(["git-trend", "--languages", "--repos"]).is_err());
        assert!(Cli::try_parse_from(["git-trend", "--languages"]).is_ok());
    }

    #[test]
    fn test_content_type_required() {
        let cli = Cli::try_parse_from(["git-trend"]).expect("parses");
        assert!(cli.content_type().is_err());
    }

    #[test]
    fn test_query_from_flags() {
        let cli = Cli::try_parse_from([
            "git-trend",
            "--devs",
            "--period",
            "weekly",
            "--language",
            "rust",
            "--format",
            "table",
        ])
        .expect("parses");

        let query = cli.query().expect("content type given");
        assert_eq!(query.content_type, ContentType::Developers);
        assert_eq!(query.period, Period::Weekly);
        assert_eq!(query.language.as_deref(), Some("rust"));
        assert_eq!(cli.format, Format::Table);
    }

    #[test]
    fn test_saved_page_still_checks_filters() {
        let path = std::env::temp_dir().join(format!("git-trend-empty-{}.html", std::process::id()));
        fs::write(
            &path,
            r#"<main><div class="Box"><div class="blankslate">Nothing here</div></div></main>"#,
        )
        .expect("temp file writable");
        let input = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "git-trend",
            "--devs",
            "--spoken-language",
            "en",
            "--language",
            "cobol",
            "--input",
            input.as_str(),
        ])
        .expect("parses");
        let result = run(&cli);
        let _ = fs::remove_file(&path);

        let err = result.expect_err("filters are rejected before the page is read");
        assert!(matches!(
            err.downcast_ref::<git_trend::Error>(),
            Some(git_trend::Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_bad_period_rejected() {
        assert!(Cli::try_parse_from(["git-trend", "--repos", "--period", "yearly"]).is_err());
    }
}
