//! Snapshot tests for tick-by-tick filter traces.

use faderbank_curves::ValueRange;
use faderbank_filters::prelude::*;

fn trace(
    range: ValueRange,
    start: f32,
    target: f32,
    smooth_time: f32,
    dt: f32,
    ticks: usize,
) -> String {
    let mut value = SmoothedValue::new(start);
    let mut gate = TransmitGate::new();
    value.set_target(target, range);

    (1..=ticks)
        .map(|tick| {
            let current = advance_smoothed(&mut value, range, smooth_time, dt);
            let send = transmit_gate(&value, &mut gate);
            format!(
                "{tick:02}: current={current:.2} idle={} send={send}",
                gate.idle_ticks()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_rise_then_idle() -> Result<(), Box<dyn std::error::Error>> {
    let range = ValueRange::new(0, 100)?;
    insta::assert_snapshot!(trace(range, 50.0, 100.0, 1.0, 0.1, 16), @r"
    01: current=60.00 idle=0 send=true
    02: current=70.00 idle=0 send=true
    03: current=80.00 idle=0 send=true
    04: current=90.00 idle=0 send=true
    05: current=100.00 idle=0 send=true
    06: current=100.00 idle=1 send=true
    07: current=100.00 idle=2 send=true
    08: current=100.00 idle=3 send=true
    09: current=100.00 idle=4 send=true
    10: current=100.00 idle=5 send=true
    11: current=100.00 idle=6 send=true
    12: current=100.00 idle=7 send=true
    13: current=100.00 idle=8 send=true
    14: current=100.00 idle=9 send=true
    15: current=100.00 idle=10 send=false
    16: current=100.00 idle=10 send=false
    ");
    Ok(())
}

#[test]
fn snapshot_snap_with_short_remainder() -> Result<(), Box<dyn std::error::Error>> {
    let range = ValueRange::new(0, 127)?;
    // 127 * 0.1 / 0.5 = 25.4 per tick; the fifth tick lands on the minimum.
    insta::assert_snapshot!(trace(range, 127.0, 0.0, 0.5, 0.1, 7), @r"
    01: current=101.60 idle=0 send=true
    02: current=76.20 idle=0 send=true
    03: current=50.80 idle=0 send=true
    04: current=25.40 idle=0 send=true
    05: current=0.00 idle=0 send=true
    06: current=0.00 idle=1 send=true
    07: current=0.00 idle=2 send=true
    ");
    Ok(())
}
