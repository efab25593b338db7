use std::io::{self, BufRead};

use clab::{gameboard::MIN_SIZE, normalize_size};

/// Reads the requested maze size from the first line of `reader`.
///
/// Anything that isn't an integer counts as `0`, which is then clamped like any other small
/// size.
pub fn read_size(reader: &mut impl BufRead) -> io::Result<i64> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(parse_size(&line))
}

pub fn parse_size(line: &str) -> i64 {
    let token = line.split_whitespace().next().unwrap_or("");
    match token.parse() {
        Ok(size) => size,
        Err(_) => {
            log::warn!("Could not read a size from {:?}, using 0", token);
            0
        }
    }
}

/// [`normalize_size`], but tells the user about every correction.
pub fn coerce_size(requested: i64) -> usize {
    if requested < MIN_SIZE as i64 {
        log::info!("Size too small, using {}", MIN_SIZE);
    } else if requested % 2 == 0 {
        log::info!("Even size detected, increasing it by 1 to make it odd");
    }

    normalize_size(requested)
}
