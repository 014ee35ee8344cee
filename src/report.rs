//! Plain-text rendering of a [`SystemSnapshot`].

use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::format::{format_bytes, format_elapsed, format_percent, truncate_unicode};
use crate::system::snapshot::SystemSnapshot;

const USER_WIDTH: usize = 10;

pub fn render(snapshot: &SystemSnapshot, display: &DisplayConfig) -> String {
    let mut out = String::new();
    if display.show_header {
        render_header(&mut out, snapshot);
        let _ = writeln!(out);
    }
    render_table(&mut out, snapshot, display);
    out
}

fn render_header(out: &mut String, snapshot: &SystemSnapshot) {
    let _ = writeln!(out, "OS: {}", snapshot.operating_system);
    let _ = writeln!(out, "Kernel: {}", snapshot.kernel);
    let _ = writeln!(out, "CPU: {}", format_percent(snapshot.cpu_utilization));
    let _ = writeln!(
        out,
        "Memory: {} ({} / {})",
        format_percent(snapshot.memory_utilization),
        format_bytes(snapshot.memory.used_kb() * 1024),
        format_bytes(snapshot.memory.total_kb * 1024)
    );
    let _ = writeln!(out, "Total Processes: {}", snapshot.total_processes);
    let _ = writeln!(out, "Running Processes: {}", snapshot.running_processes);
    let _ = writeln!(out, "Up Time: {}", format_elapsed(snapshot.uptime_seconds));
}

fn render_table(out: &mut String, snapshot: &SystemSnapshot, display: &DisplayConfig) {
    let _ = writeln!(
        out,
        "{:>7} {:<width$} {:>6} {:>9} {:>9}  COMMAND",
        "PID",
        "USER",
        "CPU%",
        "RAM",
        "TIME+",
        width = USER_WIDTH
    );
    for process in snapshot.top(display.max_processes) {
        let _ = writeln!(
            out,
            "{:>7} {:<width$} {:>6} {:>9} {:>9}  {}",
            process.pid,
            truncate_unicode(&process.user, USER_WIDTH),
            format_percent(process.cpu_utilization),
            format_bytes(process.ram_kb * 1024),
            format_elapsed(process.uptime_seconds),
            truncate_unicode(&process.command, display.command_width),
            width = USER_WIDTH
        );
    }
}
