//! Plain data row types written by output backends.

/// One sample of one component's trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub component:  String,
    pub time_secs:  f64,
    /// Instantaneous power draw, mW.
    pub power_mw:   f64,
    /// Cumulative data held since t = 0, bytes.
    pub data_bytes: f64,
}

/// End-of-run summary for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub component:        String,
    pub peak_power_mw:    f64,
    pub avg_power_mw:     f64,
    pub total_data_bytes: f64,
}
