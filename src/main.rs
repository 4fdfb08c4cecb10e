use anyhow::Result;
use clap::Parser;

use refsieve::config::{load_config, FilterConfig};
use refsieve::filter::RefFilter;
use refsieve::git::{Git2RefSource, RefSource};
use refsieve::ui;

#[derive(clap::Parser)]
#[command(
    name = "refsieve",
    about = "Filter git branches, tags and change requests with wildcard patterns"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(short, long, help = "Branch include patterns, space-separated")]
    includes: Option<String>,

    #[arg(short, long, help = "Branch exclude patterns")]
    excludes: Option<String>,

    #[arg(long, help = "Tag include patterns")]
    tag_includes: Option<String>,

    #[arg(long, help = "Tag exclude patterns")]
    tag_excludes: Option<String>,

    #[arg(long, help = "Change request destination include patterns")]
    pr_destination: Option<String>,

    #[arg(long, help = "Also show references that were filtered out")]
    excluded: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui::display_error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };
    let filter = RefFilter::new(apply_overrides(config, &args));

    let source = Git2RefSource::discover(&args.repo)?;
    let references = source.references()?;

    let mut included = 0;
    let mut excluded = 0;
    for reference in &references {
        if filter.should_exclude(reference)? {
            excluded += 1;
            if args.excluded {
                ui::display_excluded(reference);
            }
        } else {
            included += 1;
            ui::display_included(reference);
        }
    }
    ui::display_summary(included, excluded);

    Ok(())
}

/// Command-line pattern flags replace the corresponding configuration fields.
/// Overrides go through [`FilterConfig::new`] so they get the same blank
/// normalization as file values.
fn apply_overrides(config: FilterConfig, args: &Args) -> FilterConfig {
    FilterConfig::new(
        args.includes.clone().unwrap_or(config.includes),
        args.excludes.clone().unwrap_or(config.excludes),
        args.tag_includes.clone().unwrap_or(config.tag_includes),
        args.tag_excludes.clone().unwrap_or(config.tag_excludes),
        args.pr_destination
            .clone()
            .unwrap_or(config.pr_destination_includes),
    )
}
