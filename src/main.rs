use clap::Parser;
use parmd::application::search::search;
use parmd::application::{
    align::align, correct::correct, export::export, format::format, highlight::highlight,
    init::init, metadata::metadata, open_pair::PairSession, pairs::list_pairs, toc::toc,
    ConfigService, ExportOptions, HighlightOptions, MetadataUpdate,
};
use parmd::cli::output;
use parmd::cli::{Cli, Commands};
use parmd::domain::markdown::LineStyle;
use parmd::domain::pair::Side;
use parmd::domain::{BookLayout, SearchQuery};
use parmd::error::ParmdError;
use parmd::infrastructure::FileSystemRepository;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_side(side: &str) -> Result<Side, ParmdError> {
    Side::from_str(side).map_err(ParmdError::Config)
}

fn run(cli: Cli) -> Result<(), ParmdError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config = init(&path)?;
            println!("Initialized parmd library at {}", path.display());
            println!(
                "Languages: {} (original) / {} (translation)",
                config.original_lang, config.translation_lang
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: parmd config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    parmd::application::manage_config::CONFIG_KEYS.join(", ")
                );
            }
            Ok(())
        }
        Some(Commands::Correct {
            file,
            side,
            dry_run,
        }) => {
            let sides = Side::parse_selection(&side).map_err(ParmdError::Config)?;
            let session = PairSession::open(&file)?;
            let reports = correct(&session, &sides, dry_run)?;

            if dry_run {
                for report in &reports {
                    print!("{}", report.corrected);
                }
            } else {
                print!("{}", output::format_corrections(&reports));
            }
            Ok(())
        }
        Some(Commands::Highlight {
            file,
            side,
            line,
            find,
        }) => {
            let side = parse_side(&side)?;
            let session = PairSession::open(&file)?;
            let options = HighlightOptions {
                current_line: line,
                search: find.as_deref().map(SearchQuery::literal),
            };
            let view = highlight(&session, side, &options)?;
            println!("{}", output::format_highlights(&view.text, &view.highlights).trim_end());
            Ok(())
        }
        Some(Commands::Toc { file, side }) => {
            let side = parse_side(&side)?;
            let session = PairSession::open(&file)?;
            println!("{}", output::format_toc(&toc(&session, side)?).trim_end());
            Ok(())
        }
        Some(Commands::Search {
            file,
            term,
            regex,
            case_sensitive,
            side,
            count,
        }) => {
            let side = parse_side(&side)?;
            let session = PairSession::open(&file)?;
            let query = SearchQuery {
                term,
                regex,
                case_sensitive,
            };
            let hits = search(&session, side, &query)?;

            if count {
                println!("{}", hits.len());
            } else {
                println!("{}", output::format_search_hits(&hits).trim_end());
            }
            Ok(())
        }
        Some(Commands::Format {
            file,
            line,
            style,
            side,
        }) => {
            let side = parse_side(&side)?;
            let style = LineStyle::from_str(&style).map_err(ParmdError::Config)?;
            let session = PairSession::open(&file)?;
            println!("{}", format(&session, side, line, style)?);
            Ok(())
        }
        Some(Commands::Align { file }) => {
            let session = PairSession::open(&file)?;
            let report = align(&session)?;
            println!(
                "Aligned {}: {} / {} -> {} lines",
                session.paths.base_name(),
                report.original_lines,
                report.translation_lines,
                report.aligned_lines
            );
            Ok(())
        }
        Some(Commands::Export {
            file,
            layout,
            output,
        }) => {
            let layout = layout
                .as_deref()
                .map(BookLayout::from_str)
                .transpose()
                .map_err(ParmdError::Config)?;
            let session = PairSession::open(&file)?;
            let written = export(&session, &ExportOptions { layout, output })?;
            println!("Exported to {}", written.display());
            Ok(())
        }
        Some(Commands::Meta {
            file,
            title,
            author,
            lang,
            tags,
            description,
        }) => {
            let session = PairSession::open(&file)?;
            let update = MetadataUpdate {
                title,
                author,
                lang,
                tags,
                description,
            };
            print!("{}", output::format_metadata(&metadata(&session, &update)?));
            Ok(())
        }
        Some(Commands::Pairs { dir, recursive }) => {
            let pairs = list_pairs(&dir, recursive)?;
            println!("{}", output::format_pair_list(&pairs).trim_end());
            Ok(())
        }
        None => {
            if let Some(file) = cli.file {
                let session = PairSession::open(&file)?;
                print!(
                    "{}",
                    output::format_pair_summary(session.paths.display_title(), &session.summary()?)
                );
            } else {
                println!("parmd - Bilingual Markdown book editor core");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}
