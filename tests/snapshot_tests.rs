mod common;

use common::{FakeProc, stat_line};
use insta::assert_debug_snapshot;
use jiffytop::format::format_percent;
use jiffytop::system::clock::ClockTicks;
use jiffytop::system::collector::Collector;
use jiffytop::system::snapshot::SystemSnapshot;

fn machine() -> FakeProc {
    let fake = FakeProc::new("listing");
    fake.write(
        "etc/passwd",
        "root:x:0:0:root:/root:/bin/sh\n\
         postgres:x:70:70::/var/lib/postgresql:/bin/sh\n\
         alice:x:1000:1000::/home/alice:/bin/zsh\n",
    );
    fake.write("proc/uptime", "100.42 350.00\n");
    fake.write("proc/stat", "cpu 10 0 5 85 0 0 0 0 0 0\nprocesses 200\nprocs_running 1\n");

    fake.write("proc/1/stat", &stat_line(1, "init", [300, 200, 0, 0], 0));
    fake.write("proc/1/status", "Uid:\t0\t0\t0\t0\nVmSize:\t16384 kB\n");
    fake.write("proc/1/cmdline", "/sbin/init\0");

    fake.write("proc/42/stat", &stat_line(42, "postgres", [2000, 600, 300, 100], 5000));
    fake.write("proc/42/status", "Uid:\t70\t70\t70\t70\nVmSize:\t262144 kB\n");
    fake.write("proc/42/cmdline", "postgres\0-D\0/var/lib/postgresql/data\0");

    fake.write("proc/77/stat", &stat_line(77, "sh", [0, 0, 0, 0], 9000));
    fake.write("proc/77/status", "Uid:\t1000\t1000\t1000\t1000\nVmSize:\t2048 kB\n");
    fake.write("proc/77/cmdline", "sh\0-c\0sleep 1\0");

    // Started after the uptime snapshot was taken.
    fake.write("proc/120/stat", &stat_line(120, "kworker/0:1", [5, 5, 0, 0], 20000));
    fake.write("proc/120/status", "Uid:\t2000\t2000\t2000\t2000\n");
    fake.write("proc/120/cmdline", "");
    fake.write("proc/120/comm", "kworker/0:1\n");
    fake
}

fn normalized(snapshot: &SystemSnapshot) -> Vec<(u32, String, String, String)> {
    snapshot
        .processes
        .iter()
        .map(|p| {
            (
                p.pid,
                p.user.clone(),
                format_percent(p.cpu_utilization),
                p.command.clone(),
            )
        })
        .collect()
}

#[test]
fn deterministic_process_listing_from_synthetic_proc() {
    let fake = machine();
    let mut collector = Collector::new(fake.sources(), ClockTicks::new(100).unwrap());
    let snapshot = collector.refresh();

    assert_debug_snapshot!("process_listing_sorted", normalized(&snapshot));
}

#[test]
fn listing_invariants_hold() {
    let fake = machine();
    let mut collector = Collector::new(fake.sources(), ClockTicks::new(100).unwrap());
    let snapshot = collector.refresh();

    // No process dropped.
    assert_eq!(snapshot.processes.len(), 4);

    // Utilization is descending.
    for pair in snapshot.processes.windows(2) {
        assert!(pair[0].cpu_utilization >= pair[1].cpu_utilization);
    }

    // Degenerate sample is reported as zero, not NaN.
    let late = snapshot.processes.iter().find(|p| p.pid == 120).unwrap();
    assert_eq!(late.cpu_utilization, 0.0);
    assert_eq!(late.uptime_seconds, 0);
    assert_eq!(late.user, "2000");
}
