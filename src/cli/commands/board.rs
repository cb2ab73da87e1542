//! Board command - show every column

use super::Context;
use taskboard::output::BoardView;

/// Print the board
pub fn board(ctx: &Context) -> anyhow::Result<()> {
    let board = ctx.open_board()?;
    BoardView::from_partition(board.columns()).render(ctx.mode);
    Ok(())
}
