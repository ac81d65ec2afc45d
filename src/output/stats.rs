//! Statistics reporting.

use console::style;

use crate::download::RunState;

/// Print statistics for a finished run.
pub fn print_run_stats(state: &RunState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Statistics ({} mode):", state.mode)).bold()
    );
    println!("  Attempted: {}", state.attempted);
    println!("  Succeeded: {}", style(state.succeeded).green());
    if state.failed > 0 {
        println!("  Failed:    {}", style(state.failed).red());
    } else {
        println!("  Failed:    {}", state.failed);
    }
    println!("  Retried:   {}", state.retried);
    println!("  Written:   {} bytes", state.bytes_written);
    println!("{}", style("═".repeat(50)).dim());
}
