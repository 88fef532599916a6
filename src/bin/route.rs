//! 2 つのカーソル位置を与え、その間の最短入力経路を出力する。
//!
//! カーソル位置の指定方法:
//!
//! * 盤面のマス: 筋と段を並べた 2 桁 (例: `76` は ７六)
//! * 持駒: 駒種を表す 1 文字 (`R`, `B`, `G`, `S`, `N`, `L`, `P`)

use anyhow::{bail, Context as _};
use structopt::StructOpt;

use naitou_auto::emu::{traveller, Cursor};
use naitou_auto::*;

#[derive(Debug, StructOpt)]
struct Opt {
    /// 移動元カーソル位置。
    src: String,

    /// 移動先カーソル位置。
    dst: String,
}

fn main() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .chain(std::io::stdout())
        .apply()?;

    let opt = Opt::from_args();

    let src = parse_cursor(&opt.src).context("invalid src cursor")?;
    let dst = parse_cursor(&opt.dst).context("invalid dst cursor")?;

    let path = traveller::shortest_path(src, dst);

    println!("{} -> {} ({} 入力)", src, dst, path.len());
    for buttons in path {
        println!("{}", buttons);
    }

    Ok(())
}

fn parse_cursor(s: &str) -> anyhow::Result<Cursor> {
    match s {
        "R" => return Ok(Cursor::new_hand(ROOK)),
        "B" => return Ok(Cursor::new_hand(BISHOP)),
        "G" => return Ok(Cursor::new_hand(GOLD)),
        "S" => return Ok(Cursor::new_hand(SILVER)),
        "N" => return Ok(Cursor::new_hand(KNIGHT)),
        "L" => return Ok(Cursor::new_hand(LANCE)),
        "P" => return Ok(Cursor::new_hand(PAWN)),
        _ => {}
    }

    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();
    if s.chars().count() != 2 || digits.len() != 2 {
        bail!("cursor must be a hand piece letter or 2 digits: {}", s);
    }

    let (col, row) = (digits[0], digits[1]);
    if !(1..=9).contains(&col) || !(1..=9).contains(&row) {
        bail!("square out of range: {}", s);
    }

    let col = Col::from_inner(col as i32);
    let row = Row::from_inner(row as i32);

    Ok(Cursor::new_board(Square::from_col_row(col, row)))
}
