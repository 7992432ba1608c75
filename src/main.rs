use clap::{Parser, Subcommand};
use docsite::generate::{self, Targets};
use docsite::runtime::{self, DirFetcher, Session};
use docsite::types::Manifest;
use docsite::{config, output, scan};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docsite")]
#[command(about = "Sidebar manifest and sitemap builder for markdown documentation sites")]
#[command(long_about = "\
Sidebar manifest and sitemap builder for markdown documentation sites

Your filesystem is the data source. Folders become sidebar sections, ordered
by numeric prefix, and markdown files become articles ordered by the weight
in their front-matter.

Site structure:

  site/
  ├── docsite.toml                 # Config (optional)
  ├── theme.json                   # Sidebar colours (optional)
  ├── sidebar.json                 # ← written by build
  ├── sitemap.xml                  # ← written by build
  └── articles/
      ├── home.md                  # Home page, never listed in the sidebar
      ├── 10_getting_started/      # Section \"Getting Started\", order 10
      │   ├── install.md           # Article \"Install\"
      │   └── rest-api.md          # Article \"Rest API\"
      └── 20_guides/
          └── draft.md             # `hidden: true` keeps it out of the sidebar

Front-matter:

  ---
  weight: 5        # lower sorts first within the section (default 999)
  hidden: true     # leave out of the sidebar (still in the sitemap)
  ---

Run 'docsite gen-config' to generate a documented docsite.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sidebar manifest and the sitemap
    Build,
    /// Write the sidebar manifest only
    Manifest,
    /// Write the sitemap only
    Sitemap,
    /// Validate the content tree without writing anything
    Check,
    /// Render the page a browser would show for a URL fragment
    Render {
        /// URL fragment, e.g. `#articles/10_guides/setup`
        #[arg(default_value = "")]
        fragment: String,
        /// Viewport width in px
        #[arg(long, default_value_t = 1280)]
        width: u32,
        /// Document title
        #[arg(long, default_value = "Documentation")]
        title: String,
        /// Warm the cache in the background after the configured delay
        #[arg(long)]
        warm: bool,
    },
    /// Fetch home and every sidebar article; fail if any is unreachable
    Links,
    /// Print a stock docsite.toml with all options documented
    GenConfig,
}

impl Command {
    /// Leading text of the fatal error line.
    fn error_prefix(&self) -> &'static str {
        match self {
            Command::Build | Command::Manifest | Command::Sitemap | Command::Check => {
                "Error building sidebar"
            }
            Command::Render { .. } | Command::Links | Command::GenConfig => "Error",
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let prefix = cli.command.error_prefix();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{prefix}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let root = cli.root.as_path();

    match cli.command {
        Command::Build => build(root, Targets::All)?,
        Command::Manifest => build(root, Targets::ManifestOnly)?,
        Command::Sitemap => build(root, Targets::SitemapOnly)?,
        Command::Check => {
            let config = config::load_config(root)?;
            println!("==> Checking {}", root.join(&config.content_dir).display());
            let result = scan::scan(root, &config)?;
            let manifest = Manifest::from_files(&result.files);
            output::print_scan_output(&result, &manifest);
            println!("==> Content is valid");
        }
        Command::Render {
            fragment,
            width,
            title,
            warm,
        } => {
            let config = config::load_config(root)?;
            let fetcher = DirFetcher::new(root);
            let mut session = Session::new(config, width);
            session.start(&fetcher, &fragment);
            let page = session.render_page(&title).into_string();
            if warm {
                let ((), report) = rayon::join(
                    || println!("{page}"),
                    || session.warm_cache_after(&fetcher),
                );
                let report = report?;
                if !report.is_clean() {
                    log::warn!("{} articles failed to cache", report.failed.len());
                }
            } else {
                println!("{page}");
            }
        }
        Command::Links => {
            let config = config::load_config(root)?;
            let report = runtime::warm_cache(&DirFetcher::new(root), &config)?;
            output::print_warm_report(&report);
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build(root: &Path, targets: Targets) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;
    println!("==> Building {}", root.display());
    let result = generate::generate_today(root, &config, targets)?;
    output::print_build_output(&result, root);
    Ok(())
}
