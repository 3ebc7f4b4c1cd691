//! Plain-text matrix files
//!
//! One row per line, entries separated by single spaces, written as
//! `%.18e` (`1.000000000000000000e+00`). This is the format downstream
//! heatmap tooling reads for `hit_df.txt` / `commute_df.txt`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use enm_core::{EnmError, Result};
use nalgebra::DMatrix;

/// Format a float with 18 fractional digits and a signed two-digit exponent.
pub fn format_entry(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.18e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => formatted,
    }
}

/// Write a matrix, one row per line.
pub fn write_matrix<W: Write>(matrix: &DMatrix<f64>, mut writer: W) -> Result<()> {
    for row in matrix.row_iter() {
        let line: Vec<String> = row.iter().map(|&v| format_entry(v)).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a whitespace-separated matrix.
///
/// Blank lines and lines starting with `#` are skipped. All rows must have
/// the same number of columns.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<DMatrix<f64>> {
    let mut data: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut count = 0;
        for token in trimmed.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|_| EnmError::parse(line_no, format!("invalid number '{}'", token)))?;
            data.push(value);
            count += 1;
        }

        match ncols {
            None => ncols = Some(count),
            Some(expected) if expected != count => {
                return Err(EnmError::parse(
                    line_no,
                    format!("expected {} columns, found {}", expected, count),
                ));
            }
            Some(_) => {}
        }
        nrows += 1;
    }

    let ncols = ncols.ok_or_else(|| EnmError::invalid_input("no matrix rows found"))?;
    Ok(DMatrix::from_row_slice(nrows, ncols, &data))
}

/// Write a matrix to a file path.
pub fn save_matrix(path: impl AsRef<Path>, matrix: &DMatrix<f64>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_matrix(matrix, BufWriter::new(file))
}

/// Read a matrix from a file path.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<DMatrix<f64>> {
    let file = File::open(path.as_ref())?;
    read_matrix(BufReader::new(file))
}
