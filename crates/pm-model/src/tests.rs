//! Unit tests for the component models.
//!
//! Expected values are computed by hand from the datasheet constants in
//! each module; comparisons use a tight absolute tolerance.

fn close(got: f64, want: f64) -> bool {
    (got - want).abs() < 1e-9
}

#[cfg(test)]
mod tmp117 {
    use super::close;
    use crate::{ModelError, PowerModel, Tmp117, Tmp117Config, Tmp117Mode};

    #[test]
    fn continuous_duty_cycle_power() {
        // averages 8 → 0.124 s active per 1 s cycle:
        // (135 µA × 0.124 + 1.25 µA × 0.876) / 1.0 = 17.835 µA → 0.0588555 mW.
        let model = Tmp117::new();
        let config = Tmp117Config::continuous(8, 1.0);
        model.validate(&config).unwrap();
        let mw = model.power_mw(&config, 1.0).unwrap();
        assert!(close(mw, 17.835 * 3.3 / 1_000.0));
    }

    #[test]
    fn continuous_heavy_averaging_nearly_full_duty() {
        // averages 64 → 0.992 s active in a 1 s cycle, 8 ms of standby.
        let model = Tmp117::new();
        let config = Tmp117Config::continuous(64, 1.0);
        model.validate(&config).unwrap();
        let active = 64.0 * 0.0155;
        let want = (135.0 * active + 1.25 * (1.0 - active)) / 1.0 * 3.3 / 1_000.0;
        assert!(close(model.power_mw(&config, 1.0).unwrap(), want));
    }

    #[test]
    fn one_shot_power() {
        // averages 0 → one 15.5 ms conversion, shutdown for the rest.
        let model = Tmp117::new();
        let config = Tmp117Config::one_shot(0);
        model.validate(&config).unwrap();
        let want = (135.0 * 0.0155 + 0.15 * (1.0 - 0.0155)) / 1.0 * 3.3 / 1_000.0;
        assert!(close(model.power_mw(&config, 1.0).unwrap(), want));
    }

    #[test]
    fn one_shot_rejects_short_period() {
        let model = Tmp117::new();
        let config = Tmp117Config::one_shot(64); // 0.992 s active window
        assert!(matches!(
            model.power_mw(&config, 0.5),
            Err(ModelError::SamplePeriodTooShort { .. })
        ));
    }

    #[test]
    fn shutdown_draws_leakage_only() {
        let model = Tmp117::new();
        let config = Tmp117Config::shutdown();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 0.15 * 3.3 / 1_000.0));
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 0.0));
    }

    #[test]
    fn averaging_constrains_cycle_times() {
        let model = Tmp117::new();
        // 64-sample averaging cannot fit in a 0.25 s cycle.
        assert!(model.validate(&Tmp117Config::continuous(64, 0.25)).is_err());
        // ...but 0 averaging can use the shortest cycle.
        assert!(model.validate(&Tmp117Config::continuous(0, 0.0155)).is_ok());
        // averaging setting outside the register options.
        assert!(model.validate(&Tmp117Config::continuous(5, 1.0)).is_err());
    }

    #[test]
    fn data_rate_is_read_size_over_period() {
        let model = Tmp117::new();
        let config = Tmp117Config::continuous(0, 1.0);
        assert!(close(model.data_rate(&config, 2.0).unwrap(), 3.0));
    }

    #[test]
    fn mode_shorthand() {
        assert_eq!(Tmp117Config::one_shot(8).mode, Tmp117Mode::OneShot);
        assert_eq!(Tmp117Config::shutdown().mode, Tmp117Mode::Shutdown);
    }
}

#[cfg(test)]
mod bm1422 {
    use super::close;
    use crate::{Bm1422, Bm1422Config, ModelError, PowerModel};

    #[test]
    fn conservative_continuous_power() {
        // 10 Hz, averages 4 → 2 ms active per 100 ms frame:
        // (300 µA × 0.002 + 5 µA × 0.098) × 10 = 10.9 µA → mW.
        let model = Bm1422::new();
        let config = Bm1422Config::continuous(10.0, 4);
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 10.9 * 3.3 / 1_000.0));
    }

    #[test]
    fn nominal_runs_cooler() {
        let config = Bm1422Config::continuous(10.0, 4);
        let conservative = Bm1422::new().power_mw(&config, 1.0).unwrap();
        let nominal = Bm1422::nominal().power_mw(&config, 1.0).unwrap();
        assert!(close(nominal, 4.47 * 3.3 / 1_000.0));
        assert!(nominal < conservative);
    }

    #[test]
    fn heavy_averaging_caps_output_rate() {
        let model = Bm1422::new();
        assert!(model.validate(&Bm1422Config::continuous(1_000.0, 2)).is_ok());
        assert!(model.validate(&Bm1422Config::continuous(1_000.0, 16)).is_err());
        assert!(model.validate(&Bm1422Config::continuous(50.0, 2)).is_err());
    }

    #[test]
    fn single_mode_converts_per_sample() {
        // averages 2 → 1 ms active per 2 s sample period.
        let model = Bm1422::nominal();
        let config = Bm1422Config::single(2);
        model.validate(&config).unwrap();
        let want = (150.0 * 0.001 + 1.5 * 1.999) / 2.0 * 3.3 / 1_000.0;
        assert!(close(model.power_mw(&config, 2.0).unwrap(), want));
    }

    #[test]
    fn single_mode_rejects_short_period() {
        let model = Bm1422::new();
        let config = Bm1422Config::single(16); // 8 ms active window
        assert!(matches!(
            model.power_mw(&config, 0.005),
            Err(ModelError::SamplePeriodTooShort { .. })
        ));
    }

    #[test]
    fn power_down_draws_standby() {
        let model = Bm1422::new();
        let config = Bm1422Config::power_down();
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 5.0 * 3.3 / 1_000.0));
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 0.0));
    }

    #[test]
    fn data_rate_is_read_size_over_period() {
        let model = Bm1422::new();
        let config = Bm1422Config::continuous(10.0, 1);
        assert!(close(model.data_rate(&config, 3.0).unwrap(), 3.0));
    }
}

#[cfg(test)]
mod mpu6000 {
    use super::close;
    use crate::{ModelError, Mpu6000, Mpu6000Config, Mpu6000Mode, PowerModel};

    #[test]
    fn combined_mode_power_and_data() {
        let model = Mpu6000::new();
        let config = Mpu6000Config::running(Mpu6000Mode::AccelerometerAndGyroscope, 1, 0);
        model.validate(&config).unwrap();
        // 3.8 mA spread over a 1 s sample period.
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 3.8 * 3.3));
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 16.0));
    }

    #[test]
    fn gyro_only_reads_base_registers() {
        let model = Mpu6000::new();
        let config = Mpu6000Config::running(Mpu6000Mode::Gyroscope, 0, 0);
        model.validate(&config).unwrap();
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 10.0));
    }

    #[test]
    fn low_power_priced_by_wakeup_frequency() {
        let model = Mpu6000::new();
        let config = Mpu6000Config::low_power(5.0, 1, 0);
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 20.0 * 3.3 / 1_000.0));
        // Unsupported wakeup frequency.
        assert!(model.validate(&Mpu6000Config::low_power(10.0, 1, 0)).is_err());
    }

    #[test]
    fn accel_modes_require_the_filter() {
        let model = Mpu6000::new();
        // DLPF 0 bypasses the filter, which the accel path needs.
        assert!(model
            .validate(&Mpu6000Config::running(Mpu6000Mode::Accelerometer, 0, 0))
            .is_err());
        // Gyro-only path may bypass it.
        assert!(model
            .validate(&Mpu6000Config::running(Mpu6000Mode::Gyroscope, 0, 0))
            .is_ok());
    }

    #[test]
    fn divisor_gates_the_sample_period() {
        let model = Mpu6000::new();
        // DLPF 1 → 1 kHz rate; divisor 255 → one update every 0.256 s.
        let config = Mpu6000Config::running(Mpu6000Mode::Gyroscope, 1, 255);
        assert!(matches!(
            model.power_mw(&config, 0.1),
            Err(ModelError::SamplePeriodTooShort { .. })
        ));
        assert!(model.power_mw(&config, 1.0).is_ok());
    }

    #[test]
    fn shutdown_is_free() {
        let model = Mpu6000::new();
        let config = Mpu6000Config::shutdown();
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 0.0));
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 0.0));
    }
}

#[cfg(test)]
mod thermopile {
    use super::close;
    use crate::{ModelError, PowerModel, ThermopileMode, Tpis1s1385};

    #[test]
    fn on_power_spread_over_period() {
        let model = Tpis1s1385::new();
        assert!(close(
            model.power_mw(&ThermopileMode::TpOn, 1.0).unwrap(),
            15.0 * 3.3 / 1_000.0
        ));
        assert!(close(model.data_rate(&ThermopileMode::TpOn, 2.0).unwrap(), 3.0));
    }

    #[test]
    fn off_is_free() {
        let model = Tpis1s1385::new();
        assert!(close(model.power_mw(&ThermopileMode::TpOff, 1.0).unwrap(), 0.0));
        assert!(close(model.data_rate(&ThermopileMode::TpOff, 1.0).unwrap(), 0.0));
    }

    #[test]
    fn measurement_window_gates_period() {
        let model = Tpis1s1385::new();
        assert!(matches!(
            model.power_mw(&ThermopileMode::TpOn, 0.0004),
            Err(ModelError::SamplePeriodTooShort { .. })
        ));
    }
}

#[cfg(test)]
mod cap11na {
    use super::close;
    use crate::{Cap11na, CapMode, PowerModel};

    #[test]
    fn flat_power_while_on() {
        let model = Cap11na::new();
        assert!(close(model.power_mw(&CapMode::CapOn, 1.0).unwrap(), 1.0));
        assert!(close(model.data_rate(&CapMode::CapOn, 1.0).unwrap(), 6.0));
    }

    #[test]
    fn off_is_free() {
        let model = Cap11na::new();
        assert!(close(model.power_mw(&CapMode::CapOff, 1.0).unwrap(), 0.0));
        assert!(close(model.data_rate(&CapMode::CapOff, 1.0).unwrap(), 0.0));
    }
}

#[cfg(test)]
mod avr128db {
    use super::close;
    use crate::{Avr128Db, Avr128DbConfig, ClockSource, McuMode, PowerModel};

    const PERIPHERAL_MW: f64 = 4.0;

    #[test]
    fn active_at_the_knee() {
        // 4 MHz ÷ 1 sits exactly at the curve knee: 1.0 mA.
        let model = Avr128Db::new();
        let config = Avr128DbConfig::new(
            McuMode::Active,
            ClockSource::OscHf { freq_mhz: 4.0 },
            1,
        );
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 1.0 * 3.3 + PERIPHERAL_MW));
    }

    #[test]
    fn active_at_full_speed() {
        // 24 MHz ÷ 1 is the top of the curve: 4.1 mA.
        let model = Avr128Db::new();
        let config = Avr128DbConfig::new(
            McuMode::Active,
            ClockSource::OscHf { freq_mhz: 24.0 },
            1,
        );
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 4.1 * 3.3 + PERIPHERAL_MW));
    }

    #[test]
    fn active_at_slowest_effective_clock() {
        // 1 MHz ÷ 64 is the bottom of the grid: 0.1 mA.
        let model = Avr128Db::new();
        let config = Avr128DbConfig::new(
            McuMode::Active,
            ClockSource::OscHf { freq_mhz: 1.0 },
            64,
        );
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 0.1 * 3.3 + PERIPHERAL_MW));
    }

    #[test]
    fn current_rises_with_effective_frequency() {
        let model = Avr128Db::new();
        let at = |freq_mhz: f64, prescaler: u32| {
            let config = Avr128DbConfig::new(
                McuMode::Active,
                ClockSource::OscHf { freq_mhz },
                prescaler,
            );
            model.power_mw(&config, 1.0).unwrap()
        };
        assert!(at(1.0, 8) < at(1.0, 1));
        assert!(at(1.0, 1) < at(8.0, 1));
        assert!(at(8.0, 1) < at(24.0, 1));
    }

    #[test]
    fn idle_runs_cooler_than_active() {
        let model = Avr128Db::new();
        let clock = ClockSource::OscHf { freq_mhz: 16.0 };
        let active = model
            .power_mw(&Avr128DbConfig::new(McuMode::Active, clock, 1), 1.0)
            .unwrap();
        let idle = model
            .power_mw(&Avr128DbConfig::new(McuMode::Idle, clock, 1), 1.0)
            .unwrap();
        assert!(idle < active);
    }

    #[test]
    fn sleep_modes_draw_microamps() {
        let model = Avr128Db::new();
        let standby = Avr128DbConfig::new(McuMode::Standby, ClockSource::Osc32k, 1);
        assert!(close(
            model.power_mw(&standby, 1.0).unwrap(),
            1.2 * 3.3 / 1_000.0 + PERIPHERAL_MW
        ));
        let down = Avr128DbConfig::new(McuMode::PowerDown, ClockSource::Osc32k, 1);
        assert!(close(
            model.power_mw(&down, 1.0).unwrap(),
            0.7 * 3.3 / 1_000.0 + PERIPHERAL_MW
        ));
    }

    #[test]
    fn rejects_unlisted_settings() {
        let model = Avr128Db::new();
        let bad_prescaler =
            Avr128DbConfig::new(McuMode::Active, ClockSource::OscHf { freq_mhz: 4.0 }, 3);
        assert!(model.validate(&bad_prescaler).is_err());
        let bad_freq =
            Avr128DbConfig::new(McuMode::Active, ClockSource::OscHf { freq_mhz: 5.0 }, 1);
        assert!(model.validate(&bad_freq).is_err());
    }

    #[test]
    fn produces_no_data() {
        let model = Avr128Db::new();
        let config = Avr128DbConfig::new(McuMode::Active, ClockSource::Osc32k, 1);
        assert!(close(model.data_rate(&config, 1.0).unwrap(), 0.0));
    }
}

#[cfg(test)]
mod sx1272 {
    use super::close;
    use crate::{ModelError, PowerModel, Sx1272, Sx1272Config, Sx1272Mode};

    #[test]
    fn tx_burst_power() {
        // 120 bytes at 4800 bps → 0.2 s on air at 28 mA, idle for the rest
        // of the frame.
        let model = Sx1272::new();
        let config = Sx1272Config::tx(13, 120);
        model.validate(&config).unwrap();
        let want = 0.2 * 28.0 * 3.3 + 0.8 * 1.5 * 3.3 / 1_000.0;
        assert!(close(model.power_mw(&config, 1.0).unwrap(), want));
    }

    #[test]
    fn tx_power_scales_with_output_setting() {
        let model = Sx1272::new();
        let at = |dbm: u8| model.power_mw(&Sx1272Config::tx(dbm, 120), 1.0).unwrap();
        assert!(at(7) < at(13));
        assert!(at(13) < at(17));
        assert!(at(17) < at(20));
    }

    #[test]
    fn rx_power_by_bandwidth_and_lna() {
        let model = Sx1272::new();
        let config = Sx1272Config::rx(Sx1272Mode::RxContinuous, 250, true, 60);
        model.validate(&config).unwrap();
        // 60 bytes → 0.1 s on air at 11.6 mA.
        let want = 0.1 * 11.6 * 3.3 + 0.9 * 1.5 * 3.3 / 1_000.0;
        assert!(close(model.power_mw(&config, 1.0).unwrap(), want));
    }

    #[test]
    fn cad_has_no_idle_tail() {
        let model = Sx1272::new();
        let config = Sx1272Config::new(Sx1272Mode::Cad, 60);
        model.validate(&config).unwrap();
        assert!(close(model.power_mw(&config, 1.0).unwrap(), 0.1 * 10.8 * 3.3));
    }

    #[test]
    fn quiescent_modes() {
        let model = Sx1272::new();
        let sleep = Sx1272Config::new(Sx1272Mode::Sleep, 0);
        assert!(close(model.power_mw(&sleep, 1.0).unwrap(), 0.1 * 3.3 / 1_000.0));
        let standby = Sx1272Config::new(Sx1272Mode::Standby, 0);
        assert!(close(model.power_mw(&standby, 1.0).unwrap(), 1.4 * 3.3));
        let idle = Sx1272Config::new(Sx1272Mode::Idle, 0);
        assert!(close(model.power_mw(&idle, 1.0).unwrap(), 1.5 * 3.3 / 1_000.0));
    }

    #[test]
    fn airtime_gates_the_period() {
        let model = Sx1272::new();
        let config = Sx1272Config::tx(13, 232); // 0.387 s on air
        assert!(matches!(
            model.power_mw(&config, 0.1),
            Err(ModelError::SamplePeriodTooShort { .. })
        ));
    }

    #[test]
    fn transmit_drains_the_data_budget() {
        let model = Sx1272::new();
        let tx = Sx1272Config::tx(13, 120);
        assert!(close(model.data_rate(&tx, 1.0).unwrap(), -120.0));
        let rx = Sx1272Config::rx(Sx1272Mode::RxSingle, 125, false, 120);
        assert!(close(model.data_rate(&rx, 2.0).unwrap(), 60.0));
        let sleep = Sx1272Config::new(Sx1272Mode::Sleep, 120);
        assert!(close(model.data_rate(&sleep, 1.0).unwrap(), 0.0));
    }

    #[test]
    fn rejects_off_nominal_rf_settings() {
        let model = Sx1272::new();
        let mut config = Sx1272Config::tx(13, 120);
        config.spreading_factor = 10;
        assert!(model.validate(&config).is_err());

        // TX is only characterized at 125 kHz.
        let wide_tx = Sx1272Config {
            bandwidth_khz: 250,
            ..Sx1272Config::tx(13, 120)
        };
        assert!(model.validate(&wide_tx).is_err());

        // RX payload bounded by the FIFO.
        let big_rx = Sx1272Config::rx(Sx1272Mode::RxContinuous, 125, false, 300);
        assert!(model.validate(&big_rx).is_err());
    }
}
