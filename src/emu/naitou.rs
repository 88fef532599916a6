//! 原作固有の要素: メモリ上の局面の読み取りと、自動操作の入力合成。

use std::rc::Rc;

use anyhow::ensure;

use crate::mylog;
use crate::shogi::*;

use super::addrs;
use super::backend::{Backend, Buttons, BUTTONS_A, BUTTONS_D, BUTTONS_S, BUTTONS_T};
use super::traveller;

/// 盤面または HUM 側の手駒を指すカーソル。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cursor {
    Board(Square),
    Hand(PieceKind),
}

impl Cursor {
    /// 盤面上のマス `sq` を指すカーソルを返す。
    pub const fn new_board(sq: Square) -> Self {
        debug_assert!(sq.is_on_board());

        Self::Board(sq)
    }

    /// HUM 側の手駒 `pk` を指すカーソルを返す。
    pub const fn new_hand(pk: PieceKind) -> Self {
        debug_assert!(pk.is_hand());

        Self::Hand(pk)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::Board(sq) => write!(f, "{}", sq),
            Self::Hand(pk) => write!(f, "持駒{}", pk),
        }
    }
}

/// 手合割。タイトル画面で Select 入力により切り替える。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Handicap {
    HumSenteSikenbisha,
    HumSenteNakabisha,
    HumHishaochi,
    HumNimaiochi,
    ComSenteSikenbisha,
    ComSenteNakabisha,
    ComHishaochi,
    ComNimaiochi,
}

impl Handicap {
    /// タイトル画面でこの手合割を選ぶのに必要な Select 入力回数。
    pub const fn select_count(self) -> u32 {
        match self {
            Self::HumSenteSikenbisha => 0,
            Self::HumSenteNakabisha => 1,
            Self::HumHishaochi => 2,
            Self::HumNimaiochi => 4,
            Self::ComSenteSikenbisha => 6,
            Self::ComSenteNakabisha => 7,
            Self::ComHishaochi => 8,
            Self::ComNimaiochi => 10,
        }
    }

    /// 開始局面の手番を返す。
    pub const fn side_to_move(self) -> Side {
        match self {
            Self::HumSenteSikenbisha
            | Self::HumSenteNakabisha
            | Self::HumHishaochi
            | Self::HumNimaiochi => HUM,
            _ => COM,
        }
    }
}

/// 現在の手数を読み取る。
pub fn read_ply<B: Backend>(backend: &B) -> u32 {
    let lo = backend.read_u8(addrs::PLY_LO);
    let hi = backend.read_u8(addrs::PLY_HI);

    100 * u32::from(hi) + u32::from(lo)
}

/// 現在の手番を読み取る。
pub fn read_side_to_move<B: Backend>(backend: &B) -> Side {
    if backend.read_u8(addrs::SIDE_TO_MOVE) == 0 {
        COM
    } else {
        HUM
    }
}

/// 現在のカーソルを読み取る。
pub fn read_cursor<B: Backend>(backend: &B) -> Cursor {
    let x = backend.read_u8(addrs::CURSOR_X);
    let y = backend.read_u8(addrs::CURSOR_Y);

    match (x, y) {
        (1..=9, 1..=9) => {
            let col = Col::from_inner(i32::from(x));
            let row = Row::from_inner(i32::from(y));
            Cursor::new_board(Square::from_col_row(col, row))
        }
        (10, 3) => Cursor::new_hand(ROOK),
        (10, 4) => Cursor::new_hand(BISHOP),
        (10, 5) => Cursor::new_hand(GOLD),
        (10, 6) => Cursor::new_hand(SILVER),
        (10, 7) => Cursor::new_hand(KNIGHT),
        (10, 8) => Cursor::new_hand(LANCE),
        (10, 9) => Cursor::new_hand(PAWN),
        _ => panic!("invalid cursor: x={}, y={}", x, y),
    }
}

/// 駒をつかんでいるかどうかを読み取る。
pub fn read_piece_grabbed<B: Backend>(backend: &B) -> bool {
    backend.read_u8(addrs::PIECE_GRABBED) != 0
}

/// 現在の盤面を読み取る。
pub fn read_board<B: Backend>(backend: &B) -> Board {
    const CELL_BYTE_EMPTY: u8 = 0;
    const CELL_BYTE_WALL: u8 = 99;

    let mut buf_hum = [0_u8; 11 * 11];
    let mut buf_com = [0_u8; 11 * 11];
    backend.read_bytes(addrs::BOARD_HUM, &mut buf_hum);
    backend.read_bytes(addrs::BOARD_COM, &mut buf_com);

    let mut board = Board::walled();

    for sq in Square::iter_ok() {
        let b_hum = buf_hum[usize::from(sq)];
        let b_com = buf_com[usize::from(sq)];

        board[sq] = match (b_hum, b_com) {
            (CELL_BYTE_WALL, CELL_BYTE_WALL) => Cell::Wall,
            (CELL_BYTE_EMPTY, CELL_BYTE_EMPTY) => Cell::Empty,
            (CELL_BYTE_EMPTY, b_com) => Cell::Com(decode_piece(b_com - 15)),
            (b_hum, CELL_BYTE_EMPTY) => Cell::Hum(decode_piece(b_hum)),
            (_, _) => panic!("invalid board cell: HUM={}, COM={}", b_hum, b_com),
        };
    }

    board
}

/// 原作の駒番号を駒種に変換する。
fn decode_piece(value: u8) -> PieceKind {
    assert!(
        (1..=15).contains(&value) && value != 11,
        "invalid piece byte: {}",
        value
    );

    PieceKind::from_inner(u32::from(value))
}

/// 現在の両陣営の手駒を読み取る。
pub fn read_hands<B: Backend>(backend: &B) -> Hands {
    let mut hands = Hands::from([Hand::empty(); 2]);

    for (side, addr) in [(HUM, addrs::HAND_HUM), (COM, addrs::HAND_COM)] {
        let mut buf = [0_u8; 7];
        backend.read_bytes(addr, &mut buf);

        for (pk, &count) in PieceKind::iter_hand().zip(&buf) {
            hands[side][pk] = count;
        }
    }

    hands
}

/// 現在の局面 (手番、盤面、両陣営の手駒) をまとめて読み取る。
pub fn read_position<B: Backend>(backend: &B) -> (Side, Board, Hands) {
    (
        read_side_to_move(backend),
        read_board(backend),
        read_hands(backend),
    )
}

/// HUM 側の指し手を (移動元カーソル位置, 移動先カーソル位置) に変換する。
pub fn move_to_cursors(mv: Move) -> (Cursor, Cursor) {
    let cursor_dst = Cursor::new_board(mv.dst());

    let cursor_src = if mv.is_drop() {
        Cursor::new_hand(mv.dropped_piece_kind())
    } else {
        Cursor::new_board(mv.src())
    };

    (cursor_src, cursor_dst)
}

/// カーソル移動 1 入力ごとに挟む無入力フレーム数。
/// 最速入力ではないが、この程度の余裕があれば確実に反映される。
const CURSOR_MOVE_INTERVAL: usize = 6;

/// カーソル移動の入力シーケンスを返す。
fn cursor_motion(src: Cursor, dst: Cursor, interval: usize) -> Vec<Buttons> {
    let mut inputs = Vec::<Buttons>::new();

    for &buttons in traveller::shortest_path(src, dst) {
        inputs.push(buttons);
        inputs.extend(std::iter::repeat(Buttons::empty()).take(interval));
    }

    inputs
}

/// タイトル画面から指定した手合割で対局開始する入力シーケンスを返す。
pub fn inputs_start_game(handicap: Handicap) -> Vec<Buttons> {
    let mut inputs = Vec::<Buttons>::new();

    // 起動直後は入力を受け付けないので、少し余裕を持たせる。
    inputs.extend([Buttons::empty(); 10]);

    // 規定回数 Select を入力。
    for _ in 0..handicap.select_count() {
        inputs.extend([BUTTONS_S, Buttons::empty()]);
    }

    // 対局開始。
    inputs.push(BUTTONS_T);

    inputs
}

/// カーソルが `cursor_now` にある状態から HUM 側の着手を行う入力シーケンスを返す。
/// 最速入力ではなく、ある程度余裕を持たせてある。
///
/// 着手後 20 フレームほど演出が入るので、この入力が終わるまでに
/// 思考ルーチンが実行されることはない。
pub fn inputs_move(cursor_now: Cursor, mv: Move) -> Vec<Buttons> {
    let mut inputs = Vec::<Buttons>::new();

    // 指し手をカーソル対に変換。
    let (cursor_src, cursor_dst) = move_to_cursors(mv);

    // 1F の無入力を入れないとごく稀に再現失敗する。
    inputs.push(Buttons::empty());

    // 現在のカーソル位置から cursor_src へ移動する入力。
    inputs.extend(cursor_motion(cursor_now, cursor_src, CURSOR_MOVE_INTERVAL));

    // 駒をつかむ入力。
    inputs.push(BUTTONS_A);
    inputs.extend([Buttons::empty(); 5]);

    // cursor_src から cursor_dst へ移動する入力。
    inputs.extend(cursor_motion(cursor_src, cursor_dst, CURSOR_MOVE_INTERVAL));

    // 着手確定の入力。
    inputs.push(BUTTONS_A);

    // 成り/不成の入力。これが必要かどうかは場合によるが、
    // どうせ着手後の演出時間による余裕があるので、常に入力しても問題ない。
    if mv.is_promotion() {
        inputs.extend([Buttons::empty(), BUTTONS_A]);
    } else {
        inputs.extend([Buttons::empty(), BUTTONS_D, Buttons::empty(), BUTTONS_A]);
    }

    inputs
}

/// 入力シーケンスを 1 要素 1 フレームで流し込む。
pub fn feed_inputs<B: Backend>(backend: &mut B, inputs: &[Buttons]) {
    for &buttons in inputs {
        backend.run_frame(buttons);
    }
}

/// タイトル画面から指定した手合割で対局を開始する。
pub fn start_game<B: Backend>(backend: &mut B, handicap: Handicap) {
    mylog::log_game_start(handicap);

    feed_inputs(backend, &inputs_start_game(handicap));
}

/// HUM 側の着手を行う。
///
/// カーソルが意図した位置に到達したことを段階ごとに検証する。
/// 検証に失敗した場合、実機状態と自動操作の同期が崩れているので続行してはならない。
pub fn play_move<B: Backend>(backend: &mut B, mv: Move) -> anyhow::Result<()> {
    let (cursor_src, cursor_dst) = move_to_cursors(mv);

    mylog::log_move(read_ply(backend), mv);

    // 着手前の局面をログに残す。
    let (side_to_move, board, hands) = read_position(backend);
    mylog::log_position(side_to_move, &board, &hands);

    // 1F の無入力を入れないとごく稀に再現失敗する。
    backend.run_frame(Buttons::empty());

    // 現在のカーソル位置から移動元へ。
    let cursor_now = read_cursor(backend);
    mylog::log_cursor_path(
        cursor_now,
        cursor_src,
        traveller::shortest_path(cursor_now, cursor_src),
    );
    feed_inputs(
        backend,
        &cursor_motion(cursor_now, cursor_src, CURSOR_MOVE_INTERVAL),
    );
    ensure!(
        read_cursor(backend) == cursor_src,
        "cursor desynced: expected {}, got {}",
        cursor_src,
        read_cursor(backend)
    );

    // 駒をつかむ。
    feed_inputs(backend, &[BUTTONS_A]);
    backend.run_frames(5, Buttons::empty());
    ensure!(read_piece_grabbed(backend), "piece not grabbed: {}", mv);

    // 移動元から移動先へ。
    feed_inputs(
        backend,
        &cursor_motion(cursor_src, cursor_dst, CURSOR_MOVE_INTERVAL),
    );
    ensure!(
        read_cursor(backend) == cursor_dst,
        "cursor desynced: expected {}, got {}",
        cursor_dst,
        read_cursor(backend)
    );

    // 着手確定。
    feed_inputs(backend, &[BUTTONS_A]);

    // 成り/不成の入力。
    if mv.is_promotion() {
        feed_inputs(backend, &[Buttons::empty(), BUTTONS_A]);
    } else {
        feed_inputs(
            backend,
            &[Buttons::empty(), BUTTONS_D, Buttons::empty(), BUTTONS_A],
        );
    }

    Ok(())
}

/// HUM 側の指し手入力待ちになるまで無入力でフレームを進める。
///
/// 原作の入力待ちループ先頭に実行フックを張って検出する。
/// `max_frames` 以内に到達しなければエラー。
pub fn run_until_hum_turn<B: Backend>(backend: &mut B, max_frames: u32) -> anyhow::Result<()> {
    let reached = Rc::new(std::cell::Cell::new(false));

    let handle = {
        let reached = Rc::clone(&reached);
        backend.hook_before_exec(addrs::HUM_TURN, Box::new(move || reached.set(true)))
    };

    let mut n_frame = 0;
    while !reached.get() && n_frame < max_frames {
        backend.run_frame(Buttons::empty());
        n_frame += 1;
    }

    backend.unhook_before_exec(handle);

    ensure!(
        reached.get(),
        "HUM turn not reached within {} frames",
        max_frames
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_move_to_cursors() {
        let sq_src = Square::from_col_row(COL_7, ROW_7);
        let sq_dst = Square::from_col_row(COL_7, ROW_6);

        let (c_src, c_dst) = move_to_cursors(Move::new_walk(sq_src, sq_dst));
        assert_eq!(c_src, Cursor::new_board(sq_src));
        assert_eq!(c_dst, Cursor::new_board(sq_dst));

        let (c_src, c_dst) = move_to_cursors(Move::new_drop(PAWN, sq_dst));
        assert_eq!(c_src, Cursor::new_hand(PAWN));
        assert_eq!(c_dst, Cursor::new_board(sq_dst));
    }

    #[test]
    fn test_inputs_start_game() {
        let inputs = inputs_start_game(Handicap::HumSenteSikenbisha);
        assert_eq!(inputs.iter().filter(|b| **b == BUTTONS_S).count(), 0);
        assert_eq!(*inputs.last().unwrap(), BUTTONS_T);

        let inputs = inputs_start_game(Handicap::ComNimaiochi);
        assert_eq!(inputs.iter().filter(|b| **b == BUTTONS_S).count(), 10);
        assert_eq!(*inputs.last().unwrap(), BUTTONS_T);
    }

    #[test]
    fn test_inputs_move_shape() {
        let sq_src = Square::from_col_row(COL_5, ROW_5);
        let sq_dst = Square::from_col_row(COL_5, ROW_4);
        let cursor_now = Cursor::new_board(sq_src);

        // カーソルは既に移動元にいるので、移動入力は A (つかむ) から始まる。
        let inputs = inputs_move(cursor_now, Move::new_walk(sq_src, sq_dst));

        assert_eq!(inputs[0], Buttons::empty());
        assert_eq!(inputs[1], BUTTONS_A);
        // 不成なので末尾は [.., D, 無入力, A]。
        assert_eq!(*inputs.last().unwrap(), BUTTONS_A);
        assert_eq!(inputs[inputs.len() - 3], BUTTONS_D);
    }

    #[test]
    fn test_handicap_select_count() {
        assert_eq!(Handicap::HumSenteSikenbisha.select_count(), 0);
        assert_eq!(Handicap::ComNimaiochi.select_count(), 10);

        assert_eq!(Handicap::HumNimaiochi.side_to_move(), HUM);
        assert_eq!(Handicap::ComSenteNakabisha.side_to_move(), COM);
    }
}
