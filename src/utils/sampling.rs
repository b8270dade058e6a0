use std::io::Write;

use log::{debug, info};
use rand::Rng;

use crate::generator::ExpressionGenerator;
use crate::utils::errors::UtilsError;

/// Write `count` random expressions of the given length as CSV rows of
/// `num,expression`, preceded by the header.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_samples<W: Write, R: Rng>(
    mut writer: W,
    generator: &mut ExpressionGenerator<R>,
    count: u64,
    length: usize,
) -> Result<(), UtilsError> {
    info!("Writing {} samples of length {}", count, length);

    writeln!(writer, "num,expression")?;
    for _ in 0..count {
        let expression = generator.generate(length);
        writeln!(writer, "{},{}", expression.evaluate(), expression)?;
    }
    writer.flush()?;

    debug!("Finished writing samples");
    Ok(())
}
