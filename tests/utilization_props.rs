use proptest::prelude::*;
use jiffytop::system::clock::ClockTicks;
use jiffytop::system::cpu::{CpuRow, SystemJiffySample};
use jiffytop::system::process_stat::ProcessJiffySample;
use jiffytop::system::scanner::locate_in;
use jiffytop::system::utilization::{Estimate, estimate_process, estimate_system};

const MAX_COUNTER: u64 = 1 << 40;

fn row_tokens(values: &[u64]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

proptest! {
    #[test]
    fn active_plus_idle_is_total(
        values in prop::collection::vec(0u64..MAX_COUNTER, 10),
    ) {
        let row = CpuRow::parse(&row_tokens(&values)).unwrap();
        let sample = row.sample();
        prop_assert_eq!(sample.active + sample.idle, sample.total());
        let expected: u64 = values[..8].iter().sum();
        prop_assert_eq!(sample.total(), expected);
    }

    #[test]
    fn system_estimate_within_unit_range(
        active in 0u64..MAX_COUNTER,
        idle in 0u64..MAX_COUNTER,
        d_active in 0u64..100_000,
        d_idle in 0u64..100_000,
    ) {
        let first = SystemJiffySample { active, idle };
        let second = SystemJiffySample { active: active + d_active, idle: idle + d_idle };
        let estimate = estimate_system(first, second);
        if d_active + d_idle == 0 {
            prop_assert_eq!(estimate, Estimate::Degenerate);
            prop_assert_eq!(estimate.value(), 0.0);
        } else {
            let value = estimate.value();
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn process_estimate_is_finite_and_non_negative(
        active in 0u64..MAX_COUNTER,
        start_time in 0u64..MAX_COUNTER,
        uptime in 0u64..10_000_000,
        hz in 1u64..2000,
    ) {
        let ticks = ClockTicks::new(hz).unwrap();
        let value = estimate_process(ProcessJiffySample { active, start_time }, uptime as f64, ticks).value();
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn scanner_is_idempotent(
        lines in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 1..8), 1..20),
        key in "[a-z]{1,3}",
    ) {
        let text: String = lines.iter().map(|l| l.join(" ") + "\n").collect();
        prop_assert_eq!(locate_in(&text, &key), locate_in(&text, &key));
    }

    #[test]
    fn absent_key_yields_exhausted_stream(
        lines in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 1..8), 0..20),
    ) {
        let text: String = lines.iter().map(|l| l.join(" ") + "\n").collect();
        let stream = locate_in(&text, "KEY");
        prop_assert!(stream.is_exhausted());
        prop_assert_eq!(stream.count(), 0);
    }
}

#[test]
fn documented_synthetic_rows() {
    let row = CpuRow::parse(&row_tokens(&[10, 0, 5, 85, 0, 0, 0, 0, 0, 0])).unwrap();
    assert_eq!(row.active(), 15);
    assert_eq!(row.idle_total(), 85);
    assert_eq!(row.sample().total(), 100);

    let ticks = ClockTicks::new(100).unwrap();
    let sample = ProcessJiffySample { active: 200, start_time: 1000 };
    let value = estimate_process(sample, 20.0, ticks).value();
    assert!((value - 0.2).abs() < 1e-12);
}
