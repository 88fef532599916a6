//! 自動操作ログ出力。

use log::info;

use crate::emu::{Buttons, Cursor, Handicap};
use crate::shogi::*;

/// 対局開始ログを出力する。
pub fn log_game_start(handicap: Handicap) {
    info!(
        "# ------------------------------ 対局開始: {:?} ------------------------------",
        handicap
    );
    info!("");
}

/// 着手開始ログを出力する。
pub fn log_move(ply: u32, mv: Move) {
    info!("## {} 手目: {}", ply, mv);
}

/// カーソル経路をログ出力する。
pub fn log_cursor_path(src: Cursor, dst: Cursor, path: &[Buttons]) {
    use std::fmt::Write as _;

    let mut buf = String::new();
    for (i, buttons) in path.iter().enumerate() {
        if i > 0 {
            let _ = buf.write_str(", ");
        }
        let _ = write!(buf, "{}", buttons);
    }

    info!("カーソル経路 {} -> {} ({} 入力): [{}]", src, dst, path.len(), buf);
}

/// 与えられた局面をログ出力する。
pub fn log_position(side_to_move: Side, board: &Board, hands: &Hands) {
    info!("手番: {}", side_to_move);
    info!("");
    info!("COM 手駒: {}", hands[COM]);
    info!("");
    info!("{}", board);
    info!("HUM 手駒: {}", hands[HUM]);
    info!("");
}
