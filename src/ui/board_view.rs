use crate::game::{Addressing, Board};

/// Draw the board as rows of symbols separated by vertical bars, with dashed
/// lines between rows. Empty cells are blank.
pub fn render<A: Addressing>(board: &Board<A>) -> String {
    let grid = board.grid();
    let mut out = String::new();

    for row in 0..grid.rows() {
        let cells: Vec<&str> = (0..grid.columns())
            .map(|col| grid.at(row, col).map_or(" ", |s| s.name()))
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');

        // Row separator
        if row + 1 < grid.rows() {
            out.push_str(&separator(grid.columns(), 1));
            out.push('\n');
        }
    }
    out
}

/// Show the 1-based numbers a human types to play: every cell for free
/// placement, a column header for gravity boards.
pub fn render_move_guide<A: Addressing>(board: &Board<A>) -> String {
    let grid = board.grid();
    let tokens = board.addressing().token_count(grid);

    if board.addressing().drops_into_columns() {
        let header: Vec<String> = (1..=tokens).map(|n| format!("{n:<3}")).collect();
        return format!("{}\n", header.join(" ").trim_end());
    }

    let width = tokens.to_string().len();
    let mut out = String::new();
    for row in 0..grid.rows() {
        let cells: Vec<String> = (0..grid.columns())
            .map(|col| format!("{:>width$}", grid.index_of(row, col) + 1))
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        if row + 1 < grid.rows() {
            out.push_str(&separator(grid.columns(), width));
            out.push('\n');
        }
    }
    out
}

fn separator(columns: usize, width: usize) -> String {
    "-".repeat((width + 3) * (columns - 1) + width)
}
