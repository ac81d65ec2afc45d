//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Flags that also accept the single-dash spelling (`-url`, `-start=2`).
const LEGACY_FLAGS: [&str; 3] = ["url", "start", "end"];

/// Tudou video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tudou-downloader",
    version,
    about = "Download videos and albums from Tudou",
    long_about = "Download a single Tudou video, or a range of items from an album.\n\n\
                  Album mode is used only for album pages (URLs containing 'albumplay') \
                  when --start/--end select something other than 1..1."
)]
pub struct Args {
    /// Page URL of a video or album.
    #[arg(long)]
    pub url: Option<String>,

    /// First album item to download (1-based).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// Last album item to download (1-based, inclusive).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub end: i64,

    /// Directory for downloaded files.
    #[arg(short = 'o', long = "output-dir", default_value = "output")]
    pub output_dir: PathBuf,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse the process arguments, accepting legacy single-dash flags.
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args()))
    }

    /// Build the run configuration, or `None` when no URL was given.
    pub fn into_config(self) -> Option<Config> {
        let url = self.url.filter(|u| !u.trim().is_empty())?;

        Some(Config {
            start: self.start,
            end: self.end,
            output_dir: self.output_dir,
            show_progress: !self.quiet,
            ..Config::new(url)
        })
    }
}

/// Rewrite `-url`, `-start` and `-end` (optionally `=value`) to `--` form.
///
/// Everything else, negative numbers included, passes through unchanged.
pub fn normalize_legacy_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(rest) = arg.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if !rest.starts_with('-') && LEGACY_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(normalize_legacy_flags(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_normalize_legacy_flags() {
        let args = normalize_legacy_flags([
            "tudou-downloader",
            "-url",
            "http://www.tudou.com/albumplay/x.html",
            "-start=2",
            "-end",
            "-1",
            "--debug",
            "-q",
        ]);
        assert_eq!(
            args,
            [
                "tudou-downloader",
                "--url",
                "http://www.tudou.com/albumplay/x.html",
                "--start=2",
                "--end",
                "-1",
                "--debug",
                "-q",
            ]
        );
    }

    #[test]
    fn test_parse_legacy_command_line() {
        let args = parse(&[
            "tudou-downloader",
            "-url",
            "http://www.tudou.com/albumplay/x.html",
            "-start",
            "1",
            "-end",
            "10",
        ]);
        assert_eq!(args.start, 1);
        assert_eq!(args.end, 10);

        let config = args.into_config().unwrap();
        assert_eq!(config.url, "http://www.tudou.com/albumplay/x.html");
        assert!(config.range_given());
        assert_eq!(config.max_attempts, 2);
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["tudou-downloader", "--url", "http://www.tudou.com/x"]);
        assert_eq!((args.start, args.end), (1, 1));
        assert_eq!(args.output_dir, PathBuf::from("output"));

        let config = args.into_config().unwrap();
        assert!(!config.range_given());
        assert!(config.show_progress);
    }

    #[test]
    fn test_negative_range_values() {
        let args = parse(&["tudou-downloader", "-url", "http://x", "-start", "-3"]);
        assert_eq!(args.start, -3);
    }

    #[test]
    fn test_missing_url() {
        assert!(parse(&["tudou-downloader"]).into_config().is_none());
        assert!(parse(&["tudou-downloader", "-url", ""]).into_config().is_none());
    }
}
