//! Console output utilities.

use std::io::{self, Write};

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
///
/// Goes to stdout with the rest of the progress text.
pub fn print_error(message: &str) {
    let _ = write_error(&mut io::stdout().lock(), message);
}

/// Write a tagged error line to `out`.
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("ERROR").red().bold(), message)
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Tudou Downloader                                  ║
║     Videos and albums to ./output                     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print how to invoke the tool.
pub fn print_usage() {
    println!(
        "Using: ./tudou-downloader -url http://www.tudou.com/{{albumplay, ?}}/xxx/xxx (-start 1 -end 10)"
    );
}

/// Print configuration summary.
pub fn print_config_summary(url: &str, start: i64, end: i64, output_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  URL: {}", url);
    println!("  Range: {}..{}", start, end);
    println!("  Directory: {}", output_dir);
    println!();
}
