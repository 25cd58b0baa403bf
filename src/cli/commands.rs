//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parmd")]
#[command(about = "Bilingual Markdown book editor core", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Either file of a pair (e.g., novel.en.md); prints an overview of the pair
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a parmd library
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Normalize typography of one or both sides
    Correct {
        /// Either file of a pair
        file: PathBuf,

        /// Side to correct (original, translation, both)
        #[arg(short, long, default_value = "translation")]
        side: String,

        /// Print the corrected text instead of saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print Markdown style ranges
    Highlight {
        /// Either file of a pair
        file: PathBuf,

        /// Side to inspect (original, translation)
        #[arg(short, long, default_value = "original")]
        side: String,

        /// Also mark this line as current_line
        #[arg(long, value_name = "N")]
        line: Option<usize>,

        /// Also mark matches of this term as search_highlight
        #[arg(long, value_name = "TERM")]
        find: Option<String>,
    },

    /// Print the table of contents
    Toc {
        /// Either file of a pair
        file: PathBuf,

        /// Side to inspect (original, translation)
        #[arg(short, long, default_value = "original")]
        side: String,
    },

    /// Search one side of a pair
    Search {
        /// Either file of a pair
        file: PathBuf,

        /// Text (or pattern with --regex) to find
        term: String,

        /// Treat the term as a regular expression
        #[arg(short, long)]
        regex: bool,

        /// Match case exactly
        #[arg(short = 'c', long)]
        case_sensitive: bool,

        /// Side to search (original, translation)
        #[arg(short, long, default_value = "original")]
        side: String,

        /// Print only the number of matches
        #[arg(long)]
        count: bool,
    },

    /// Toggle bold, italic or a heading level on one line
    Format {
        /// Either file of a pair
        file: PathBuf,

        /// Line number (1-indexed)
        #[arg(short, long)]
        line: usize,

        /// Style: bold, italic, h1, h2, h3, h4, h5
        #[arg(long)]
        style: String,

        /// Side to edit (original, translation)
        #[arg(long, default_value = "translation")]
        side: String,
    },

    /// Pad both sides to the same number of lines and save them
    Align {
        /// Either file of a pair
        file: PathBuf,
    },

    /// Render the pair as a parallel XHTML book
    Export {
        /// Either file of a pair
        file: PathBuf,

        /// Layout: table or list (default from config)
        #[arg(short, long)]
        layout: Option<String>,

        /// Output file (default: <dir>/<book>.xhtml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or update book metadata
    Meta {
        /// Either file of a pair
        file: PathBuf,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        lang: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// List complete pairs in a directory
    Pairs {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Include subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_without_subcommand() {
        let cli = Cli::try_parse_from(["parmd", "novel.en.md"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("novel.en.md")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_correct_defaults() {
        let cli = Cli::try_parse_from(["parmd", "correct", "novel.en.md"]).unwrap();
        match cli.command {
            Some(Commands::Correct { side, dry_run, .. }) => {
                assert_eq!(side, "translation");
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_flags() {
        let cli =
            Cli::try_parse_from(["parmd", "search", "b.ru.md", "кот", "--regex", "-c"]).unwrap();
        match cli.command {
            Some(Commands::Search {
                term,
                regex,
                case_sensitive,
                side,
                ..
            }) => {
                assert_eq!(term, "кот");
                assert!(regex);
                assert!(case_sensitive);
                assert_eq!(side, "original");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_requires_line_and_style() {
        assert!(Cli::try_parse_from(["parmd", "format", "b.en.md", "--line", "2"]).is_err());
    }
}
