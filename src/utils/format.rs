// src/utils/format.rs
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::core::config::SECONDS_PER_YEAR;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

// Format a crack-time estimate for display. `log10_seconds` is used once
// `seconds` has saturated, so astronomically large values still render.
pub fn format_crack_time(seconds: f64, log10_seconds: f64) -> String {
    if seconds.is_nan() {
        return "Unknown".to_string();
    }
    if seconds < 1.0 {
        "Instantaneous".to_string()
    } else if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.2} days", seconds / DAY)
    } else if seconds.is_finite() && seconds / SECONDS_PER_YEAR < 1e6 {
        format!("{:.2} years", seconds / SECONDS_PER_YEAR)
    } else {
        let log10_years = log10_seconds - SECONDS_PER_YEAR.log10();
        format!("{} years", scientific_from_log10(log10_years))
    }
}

// Format a (possibly huge) integer as `d.dde<exp>`
pub fn format_scientific(value: &BigUint) -> String {
    match value.to_f64() {
        Some(v) if v.is_finite() => format!("{:.2e}", v),
        _ => {
            let digits = value.to_str_radix(10);
            let exponent = digits.len() - 1;
            let lead: f64 = digits[..digits.len().min(4)].parse().unwrap_or(0.0);
            let mantissa = lead / 10f64.powi(digits.len().min(4) as i32 - 1);
            render_mantissa(mantissa, exponent as i64)
        }
    }
}

pub fn scientific_from_log10(log10_value: f64) -> String {
    if !log10_value.is_finite() {
        return if log10_value > 0.0 { "inf".into() } else { "0".into() };
    }
    let exponent = log10_value.floor();
    let mantissa = 10f64.powf(log10_value - exponent);
    render_mantissa(mantissa, exponent as i64)
}

fn render_mantissa(mantissa: f64, exponent: i64) -> String {
    // 9.996 would print as 10.00
    if mantissa >= 9.995 {
        format!("{:.2}e{}", mantissa / 10.0, exponent + 1)
    } else {
        format!("{:.2}e{}", mantissa, exponent)
    }
}

// Format a rate with thousands separators
pub fn format_rate(rate: f64) -> String {
    if !rate.is_finite() || rate >= 1e18 {
        return format!("{:.0e}", rate);
    }
    let whole = rate.round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
