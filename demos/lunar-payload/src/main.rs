//! lunar-payload — end-to-end demo for the rust_pm payload models.
//!
//! Simulates one hour of a seven-component lunar payload on a 1 s grid:
//! sensors duty-cycle between measurement and their low-power modes, the
//! MCU tracks the sensing windows, and the radio wakes every 15 minutes to
//! downlink.  Writes the traces and summaries as CSV and checks the run
//! against the mission's 1000 B/s downlink budget.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pm_core::TimeGrid;
use pm_model::{
    Avr128Db, Avr128DbConfig, Bm1422, Bm1422Config, Cap11na, CapMode, ClockSource, McuMode,
    Mpu6000, Mpu6000Config, Mpu6000Mode, Sx1272, Sx1272Config, Sx1272Mode, ThermopileMode,
    Tmp117, Tmp117Config, Tpis1s1385,
};
use pm_output::{write_trace_set, CsvWriter};
use pm_schedule::{Cycle, ModeEntry};
use pm_sim::{run_component, DataBudget, TraceSet};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEP_SECS:     f64 = 1.0;
const MISSION_SECS:  f64 = 3_600.0; // one lunar-orbit pass
const DOWNLINK_BPS:  f64 = 1_000.0; // mission downlink allowance, bytes/s

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== lunar-payload — rust_pm power/data simulation ===");
    let grid = TimeGrid::new(STEP_SECS, MISSION_SECS)?;
    println!("Grid: {grid}");
    println!();

    let t0 = Instant::now();
    let mut traces = TraceSet::new(grid);

    // 1. TMP117 temperature: one minute of readings every ten minutes.
    let tmp117 = Cycle::new(vec![
        ModeEntry::new("CONTINUOUS_CONVERSION", 60.0, Tmp117Config::continuous(8, 1.0)),
        ModeEntry::new("SHUTDOWN", 540.0, Tmp117Config::shutdown()),
    ]);
    traces.push(run_component(&Tmp117::new(), &tmp117, &grid)?)?;

    // 2. BM1422 magnetometer: 30 s bursts at 10 Hz.
    let bm1422 = Cycle::new(vec![
        ModeEntry::new("CONTINUOUS", 30.0, Bm1422Config::continuous(10.0, 4)),
        ModeEntry::new("POWER_DOWN", 570.0, Bm1422Config::power_down()),
    ]);
    traces.push(run_component(&Bm1422::new(), &bm1422, &grid)?)?;

    // 3. MPU6000 inertial: two minutes of accel+gyro every ten.
    let mpu6000 = Cycle::new(vec![
        ModeEntry::new(
            "ACCEL_GYRO",
            120.0,
            Mpu6000Config::running(Mpu6000Mode::AccelerometerAndGyroscope, 1, 9),
        ),
        ModeEntry::new("SHUTDOWN", 480.0, Mpu6000Config::shutdown()),
    ]);
    traces.push(run_component(&Mpu6000::new(), &mpu6000, &grid)?)?;

    // 4. TPIS1S1385 thermopile: on half the time, sampled every 10 s.
    let thermopile = Cycle::new(vec![
        ModeEntry::new("TP_ON", 300.0, ThermopileMode::TpOn).with_sample_period(10.0),
        ModeEntry::new("TP_OFF", 300.0, ThermopileMode::TpOff),
    ]);
    traces.push(run_component(&Tpis1s1385::new(), &thermopile, &grid)?)?;

    // 5. CAP11NA capacitive: one-minute touch windows.
    let cap11na = Cycle::new(vec![
        ModeEntry::new("CAP_ON", 60.0, CapMode::CapOn),
        ModeEntry::new("CAP_OFF", 240.0, CapMode::CapOff),
    ]);
    traces.push(run_component(&Cap11na::new(), &cap11na, &grid)?)?;

    // 6. AVR128DB MCU: full speed while the sensors burst, standby after.
    let mcu = Cycle::new(vec![
        ModeEntry::new(
            "ACTIVE",
            120.0,
            Avr128DbConfig::new(McuMode::Active, ClockSource::OscHf { freq_mhz: 4.0 }, 1),
        ),
        ModeEntry::new(
            "STANDBY",
            480.0,
            Avr128DbConfig::new(McuMode::Standby, ClockSource::Osc32k, 1),
        ),
    ]);
    traces.push(run_component(&Avr128Db::new(), &mcu, &grid)?)?;

    // 7. SX1272 radio: a 10 s downlink burst every 15 minutes.
    let radio = Cycle::new(vec![
        ModeEntry::new("TX", 10.0, Sx1272Config::tx(13, 120)),
        ModeEntry::new("SLEEP", 890.0, Sx1272Config::new(Sx1272Mode::Sleep, 0)),
    ]);
    traces.push(run_component(&Sx1272::new(), &radio, &grid)?)?;

    let elapsed = t0.elapsed();
    println!("Simulated {} components in {:.3} s", traces.traces().len(), elapsed.as_secs_f64());
    println!();

    // Per-component summary.
    println!(
        "{:<12} {:>14} {:>14} {:>16}",
        "Component", "Peak mW", "Avg mW", "Final bytes"
    );
    println!("{}", "-".repeat(60));
    for trace in traces.traces() {
        println!(
            "{:<12} {:>14.4} {:>14.4} {:>16.1}",
            trace.name,
            trace.peak_power_mw(),
            trace.avg_power_mw(),
            trace.final_data_bytes(),
        );
    }
    println!();

    // Downlink budget check over the summed data series.
    let budget = DataBudget::new(DOWNLINK_BPS);
    match budget.check(&grid, &traces.total_data_bytes()) {
        None => println!("Downlink budget ({DOWNLINK_BPS} B/s): OK"),
        Some(v) => println!(
            "Downlink budget ({DOWNLINK_BPS} B/s): EXCEEDED at t = {} s ({:.0} B held, {:.0} B allowed)",
            v.time_secs, v.bytes, v.allowed_bytes
        ),
    }

    // Write CSVs.
    std::fs::create_dir_all("output/lunar-payload")?;
    let mut writer = CsvWriter::new(Path::new("output/lunar-payload"))?;
    write_trace_set(&mut writer, &traces)?;
    println!("Wrote output/lunar-payload/component_traces.csv and component_summaries.csv");

    Ok(())
}
