//! Record-level formatting for the SU2 text format.
//!
//! Numbers are rendered exactly like the C `printf` conversions the format
//! was historically written with: integers as `%4lu`, coordinates as
//! `%#W.Pg` with `W = P + 8`.

use std::fmt::Display;
use std::io::Write;

use crate::mesh_error::MeshExportError;

/// `%` or `% txt`.
pub fn write_comment<W: Write>(out: &mut W, text: Option<&str>) -> Result<(), MeshExportError> {
    match text {
        Some(text) => writeln!(out, "% {text}")?,
        None => writeln!(out, "%")?,
    }
    Ok(())
}

/// Three-line banner: blank comment, `% title`, blank comment.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> Result<(), MeshExportError> {
    write_comment(out, None)?;
    write_comment(out, Some(title))?;
    write_comment(out, None)
}

/// `KEY= value`.
pub fn write_key_value<W: Write, V: Display>(
    out: &mut W,
    key: &str,
    value: V,
) -> Result<(), MeshExportError> {
    writeln!(out, "{key}= {value}")?;
    Ok(())
}

/// Column width used for a coordinate printed with `digits` significant digits.
pub fn float_width(digits: usize) -> usize {
    digits + 8
}

/// Render `value` like C's `%#.{digits}g`: `digits` significant digits,
/// trailing zeros and the decimal point kept.
pub fn format_g_alt(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let digits = digits.max(1);
    // Exponent after rounding to `digits` significant digits.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= digits as i32 {
        let mut mantissa = mantissa.to_string();
        if !mantissa.contains('.') {
            mantissa.push('.');
        }
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        let mut fixed = format!("{value:.decimals$}");
        if !fixed.contains('.') {
            fixed.push('.');
        }
        fixed
    }
}
