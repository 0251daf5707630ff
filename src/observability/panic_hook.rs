//! Panic hook printing a crash report with the calculation context.
//!
//! A panic inside a mechanism is a defect in the kernel, never a problem
//! with the input. The report names the phase, location and time step the
//! panicking thread was working on so the failing case can be reproduced.

use super::context::{get_current_context, get_progress, CalculationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 76;

/// Install the crash report hook.
///
/// Call once at the start of `main`, before any calculation runs.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let progress = get_progress();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context, progress);
    print_backtrace_section();
}

fn rule(left: char, right: char) {
    eprintln!("{left}{}{right}", "═".repeat(WIDTH + 2));
}

fn line(text: &str) {
    eprintln!("║ {:<width$} ║", truncate(text, WIDTH), width = WIDTH);
}

fn print_header() {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    rule('╔', '╗');
    line("DIKE REVETMENT CALCULATION CRASH REPORT");
    rule('╠', '╣');
    line(&format!("Version: {VERSION}"));
    line(&format!("Platform: {}", std::env::consts::OS));
    line(&format!("Time: {timestamp}"));
    rule('╠', '╣');
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    line(&format!("PANIC: {}", extract_panic_message(info)));

    if let Some(location) = info.location() {
        line(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
}

fn print_context_section(context: &CalculationContext, progress: Option<(usize, usize)>) {
    rule('╠', '╣');
    line("CALCULATION CONTEXT:");

    match &context.phase {
        Some(phase) => line(&format!("  Phase: {phase}")),
        None => line("  Phase: (not set, crash occurred before the calculation started)"),
    }

    if let Some(metadata) = Span::current().metadata() {
        line(&format!("  Span: {}", metadata.name()));
    }
    if let Some(location) = context.location {
        line(&format!("  Location index: {location}"));
    }
    if let Some(time_step) = context.time_step {
        line(&format!("  Time step index: {time_step}"));
    }
    if let Some((processed, total)) = progress.filter(|&(_, total)| total > 0) {
        let pct = (processed as f64 / total as f64 * 100.0) as usize;
        line(&format!("  Progress: {processed} / {total} locations ({pct}%)"));
    }
}

fn print_backtrace_section() {
    rule('╠', '╣');
    if std::env::var("RUST_BACKTRACE").is_ok() {
        line("STACK TRACE:");
        rule('╚', '╝');
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        line("Run with RUST_BACKTRACE=1 for stack trace");
        rule('╚', '╝');
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
