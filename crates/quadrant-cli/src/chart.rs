//! Text scatter plot of result records.

use quadrant_core::record::ResultRecord;

pub const WIDTH: usize = 41;
pub const HEIGHT: usize = 21;

const POINT: char = '●';

/// Plots records on a `WIDTH`×`HEIGHT` grid split into quadrants.
///
/// The economic axis runs left to right and the social axis bottom to top.
/// Positions are jittered by `spread` so identical scores stay apart; cells
/// holding several records show their count (capped at 9).
pub fn render(records: &[ResultRecord], spread: f64) -> Vec<String> {
    let mut counts = vec![vec![0u32; WIDTH]; HEIGHT];
    for record in records {
        let (x, y) = record.jittered_point(spread);
        let (row, col) = cell(x, y);
        counts[row][col] += 1;
    }

    let mid_row = HEIGHT / 2;
    let mid_col = WIDTH / 2;
    counts
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &count)| match count {
                    0 => axis_char(row == mid_row, col == mid_col),
                    1 => POINT,
                    n => char::from_digit(n.min(9), 10).unwrap_or(POINT),
                })
                .collect()
        })
        .collect()
}

/// Grid cell for a point in score space.
pub fn cell(x: f64, y: f64) -> (usize, usize) {
    let scale = |v: f64, cells: usize| {
        let v = v.clamp(0.0, 100.0) / 100.0 * (cells - 1) as f64;
        v.round() as usize
    };
    let col = scale(x, WIDTH);
    let row = HEIGHT - 1 - scale(y, HEIGHT);
    (row, col)
}

fn axis_char(on_row: bool, on_col: bool) -> char {
    match (on_row, on_col) {
        (true, true) => '┼',
        (true, false) => '─',
        (false, true) => '│',
        (false, false) => ' ',
    }
}
