use std::io::{self, Write};

/// Print the 256-line grayscale identity table, one `i, i, i,` line per
/// 8 bit index. Every line carries the trailing comma.
pub fn run_grayscale<W: Write>(out: &mut W) -> io::Result<()> {
    for value in 0..256 {
        writeln!(out, "{}, {}, {},", value, value, value)?;
    }
    Ok(())
}
