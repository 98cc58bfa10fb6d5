use std::io::{BufRead, Write};

use anyhow::bail;
use departure_optimizer::departure::hour_window::{
    EARLIEST_DEPARTURE_HOUR, HourWindow, LATEST_DEPARTURE_HOUR,
};

fn read_hour<R, W>(input: &mut R, output: &mut W, prompt: &str) -> anyhow::Result<Option<i8>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed before a departure window was entered");
    }

    match line.trim().parse::<i8>() {
        Ok(hour) => Ok(Some(hour)),
        Err(err) => {
            writeln!(output, "Invalid hour '{}': {}", line.trim(), err)?;
            Ok(None)
        }
    }
}

/// Asks for start and end hours until they form a valid window.
pub fn prompt_hour_window<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<HourWindow>
where
    R: BufRead,
    W: Write,
{
    let start_prompt = format!("Enter the start hour (>= {EARLIEST_DEPARTURE_HOUR}): ");
    let end_prompt = format!("Enter the end hour (<= {LATEST_DEPARTURE_HOUR}): ");

    loop {
        let Some(start) = read_hour(input, output, &start_prompt)? else {
            continue;
        };
        let Some(end) = read_hour(input, output, &end_prompt)? else {
            continue;
        };

        match HourWindow::new(start, end) {
            Ok(window) => return Ok(window),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
