//! A text preview of the waveform of the playing tones

/// How far the wave scrolls each time it is drawn
pub const SCROLL: usize = 2;
/// The scroll offset wraps around after this many columns
pub const MAX_OFFSET: usize = 10000;

/// Draw a sine wave at the average of some frequencies
///
/// Column `i` has the height `sin((i + offset) * avg / 1000)`. Returns no lines if there are no frequencies.
pub fn render(frequencies: &[f64], offset: usize, width: usize, height: usize) -> Vec<String> {
    if frequencies.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }
    let avg = frequencies.iter().sum::<f64>() / frequencies.len() as f64;
    let center = (height as f64 - 1.0) / 2.0;
    let amplitude = height as f64 / 3.0;
    let mut grid = vec![vec![' '; width]; height];
    for column in 0..width {
        let y = center + amplitude * (((column + offset) as f64) * (avg / 1000.0)).sin();
        let row = y.round().max(0.0).min(height as f64 - 1.0) as usize;
        grid[row][column] = '*';
    }
    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Get the offset to draw at after the given one
pub fn advance(offset: usize) -> usize {
    let next = offset + SCROLL;
    if next > MAX_OFFSET {
        0
    } else {
        next
    }
}
