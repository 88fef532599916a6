//! 将棋の基本要素たち。
//!
//! 駒などは enum ではなく、いわゆる newtype で表現する。
//! 内部値は原作 (内藤九段将棋秘伝) のメモリ上の値と一致させてあり、
//! エミュレータのメモリ読み取り結果をほぼ無変換で扱える。
//!
//! 座標はゲーム画面基準で、x (筋) は右方向、y (段) は下方向に増える。
//! 盤面は周囲 1 マスの壁を含む 11×11 配列であり、マスの内部値は `11*y + x`。

use std::iter::FusedIterator;

use crate::myarray::*;

/// 陣営。
///
/// 先手/後手ではなく、HUM/COM という分類にする。
/// 原作は常に HUM 側を手前として扱うので、この方がわかりやすい。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Side(u32);

pub const HUM: Side = Side(0);
pub const COM: Side = Side(1);

impl Side {
    /// 有効値かどうかを返す。
    pub const fn is_valid(self) -> bool {
        self.0 == HUM.0 || self.0 == COM.0
    }

    /// 敵陣営を返す。
    pub const fn inv(self) -> Side {
        Self(self.0 ^ 1)
    }

    /// 陣営を昇順に列挙する。(`HUM`、`COM` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [HUM, COM].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl From<Side> for usize {
    fn from(side: Side) -> Self {
        debug_assert!(side.is_valid());

        side.0 as Self
    }
}

impl std::fmt::Debug for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            HUM => write!(f, "HUM"),
            COM => write!(f, "COM"),
            _ => write!(f, "Side({})", self.0),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            HUM => write!(f, "HUM"),
            COM => write!(f, "COM"),
            side => write!(f, "無効な陣営({})", side.0),
        }
    }
}

/// 盤面の筋 (画面 x 座標)。`COL_1` が最も左、`COL_9` が最も右。
///
/// `COL_9` の右隣は持駒エリア。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Col(i32);

pub const COL_1: Col = Col(1);
pub const COL_2: Col = Col(2);
pub const COL_3: Col = Col(3);
pub const COL_4: Col = Col(4);
pub const COL_5: Col = Col(5);
pub const COL_6: Col = Col(6);
pub const COL_7: Col = Col(7);
pub const COL_8: Col = Col(8);
pub const COL_9: Col = Col(9);

impl Col {
    /// 内部値を指定して筋を作る。盤面外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_on_board());

        this
    }

    /// 筋が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        COL_1.0 <= self.0 && self.0 <= COL_9.0
    }

    /// 全ての筋を昇順に列挙する。(`COL_1`, `COL_2`, ..., `COL_9` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [
            COL_1, COL_2, COL_3, COL_4, COL_5, COL_6, COL_7, COL_8, COL_9,
        ]
        .into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl std::ops::Add<i32> for Col {
    type Output = Col;

    fn add(self, rhs: i32) -> Col {
        Col(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Col {
    type Output = Col;

    fn sub(self, rhs: i32) -> Col {
        Col(self.0 - rhs)
    }
}

impl From<Col> for i32 {
    fn from(col: Col) -> Self {
        col.0
    }
}

impl std::fmt::Debug for Col {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Col({})", self.0)
    }
}

impl std::fmt::Display for Col {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 盤面の段 (画面 y 座標)。`ROW_1` が最も上、`ROW_9` が最も下。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Row(i32);

pub const ROW_1: Row = Row(1);
pub const ROW_2: Row = Row(2);
pub const ROW_3: Row = Row(3);
pub const ROW_4: Row = Row(4);
pub const ROW_5: Row = Row(5);
pub const ROW_6: Row = Row(6);
pub const ROW_7: Row = Row(7);
pub const ROW_8: Row = Row(8);
pub const ROW_9: Row = Row(9);

impl Row {
    /// 内部値を指定して段を作る。盤面外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_on_board());

        this
    }

    /// 段が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        ROW_1.0 <= self.0 && self.0 <= ROW_9.0
    }

    /// 全ての段を昇順に列挙する。(`ROW_1`, `ROW_2`, ..., `ROW_9` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5, ROW_6, ROW_7, ROW_8, ROW_9,
        ]
        .into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl std::ops::Add<i32> for Row {
    type Output = Row;

    fn add(self, rhs: i32) -> Row {
        Row(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Row {
    type Output = Row;

    fn sub(self, rhs: i32) -> Row {
        Row(self.0 - rhs)
    }
}

impl From<Row> for i32 {
    fn from(row: Row) -> Self {
        row.0
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Row({})", self.0)
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 盤面のマス。壁を含む 11×11 グリッド上の位置で、内部値は `11*y + x`。
///
/// 原作の盤面配列と同じレイアウトなので、メモリ読み取りのオフセットとして
/// そのまま使える。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Square(i32);

impl Square {
    /// 筋と段からマスを作る。
    pub const fn from_col_row(col: Col, row: Row) -> Self {
        Self(11 * row.0 + col.0)
    }

    /// 内部値を指定してマスを作る。グリッド外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_ok());

        this
    }

    /// マスの筋を返す。
    pub const fn col(self) -> Col {
        Col(self.0 % 11)
    }

    /// マスの段を返す。
    pub const fn row(self) -> Row {
        Row(self.0 / 11)
    }

    /// 内部値がグリッド内かどうかを返す。壁マスも含む。
    pub const fn is_ok(self) -> bool {
        0 <= self.0 && self.0 < 11 * 11
    }

    /// 盤面内 (壁でない) マスかどうかを返す。
    pub const fn is_on_board(self) -> bool {
        self.col().is_on_board() && self.row().is_on_board()
    }

    /// 壁を含む全グリッド位置を昇順に列挙する。
    pub fn iter_ok() -> impl Iterator<Item = Self> + DoubleEndedIterator + FusedIterator {
        (0..11 * 11).map(Self)
    }

    /// 盤面内の全マスを列挙する。(段優先、各段内は筋昇順)
    pub fn iter() -> impl Iterator<Item = Self> + FusedIterator {
        Row::iter().flat_map(|row| Col::iter().map(move |col| Self::from_col_row(col, row)))
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> Self {
        debug_assert!(sq.is_ok());

        sq.0 as Self
    }
}

impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Square({},{})", self.col().0, self.row().0)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.col().0, self.row().0)
    }
}

/// 駒種。陣営の情報は含まない。
///
/// 内部値は原作の駒番号そのもの。値 11 は欠番。
/// HUM 側盤面配列には駒番号が、COM 側盤面配列には駒番号 +15 が格納される。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PieceKind(u32);

pub const NO_PIECE_KIND: PieceKind = PieceKind(0);
pub const KING: PieceKind = PieceKind(1);
pub const ROOK: PieceKind = PieceKind(2);
pub const BISHOP: PieceKind = PieceKind(3);
pub const GOLD: PieceKind = PieceKind(4);
pub const SILVER: PieceKind = PieceKind(5);
pub const KNIGHT: PieceKind = PieceKind(6);
pub const LANCE: PieceKind = PieceKind(7);
pub const PAWN: PieceKind = PieceKind(8);
pub const DRAGON: PieceKind = PieceKind(9);
pub const HORSE: PieceKind = PieceKind(10);
pub const PRO_SILVER: PieceKind = PieceKind(12);
pub const PRO_KNIGHT: PieceKind = PieceKind(13);
pub const PRO_LANCE: PieceKind = PieceKind(14);
pub const PRO_PAWN: PieceKind = PieceKind(15);

impl PieceKind {
    /// 内部値を指定して駒種を作る。無効値を渡してはならない。
    pub const fn from_inner(inner: u32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_valid());

        this
    }

    /// 有効値かどうかを返す。`NO_PIECE_KIND` も有効とみなす。
    pub const fn is_valid(self) -> bool {
        self.0 <= PRO_PAWN.0 && self.0 != 11
    }

    /// 有効値かつ実際の駒かどうかを返す。`NO_PIECE_KIND` は実際の駒ではない。
    pub const fn is_piece(self) -> bool {
        KING.0 <= self.0 && self.0 != 11 && self.0 <= PRO_PAWN.0
    }

    /// 手駒となりうる駒種かどうかを返す。
    pub const fn is_hand(self) -> bool {
        ROOK.0 <= self.0 && self.0 <= PAWN.0
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        DRAGON.0 <= self.0 && self.0 != 11 && self.0 <= PRO_PAWN.0
    }

    /// 手駒となりうる駒種を列挙する。
    /// 原作の手駒配列および持駒エリアの画面配置と同じ順。
    /// (飛、角、金、銀、桂、香、歩)
    pub fn iter_hand(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [ROOK, BISHOP, GOLD, SILVER, KNIGHT, LANCE, PAWN].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl From<PieceKind> for usize {
    fn from(pk: PieceKind) -> Self {
        debug_assert!(pk.is_valid());

        pk.0 as Self
    }
}

impl std::fmt::Debug for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            NO_PIECE_KIND => write!(f, "NO_PIECE_KIND"),
            KING => write!(f, "KING"),
            ROOK => write!(f, "ROOK"),
            BISHOP => write!(f, "BISHOP"),
            GOLD => write!(f, "GOLD"),
            SILVER => write!(f, "SILVER"),
            KNIGHT => write!(f, "KNIGHT"),
            LANCE => write!(f, "LANCE"),
            PAWN => write!(f, "PAWN"),
            DRAGON => write!(f, "DRAGON"),
            HORSE => write!(f, "HORSE"),
            PRO_SILVER => write!(f, "PRO_SILVER"),
            PRO_KNIGHT => write!(f, "PRO_KNIGHT"),
            PRO_LANCE => write!(f, "PRO_LANCE"),
            PRO_PAWN => write!(f, "PRO_PAWN"),
            _ => write!(f, "PieceKind({})", self.0),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match *self {
            NO_PIECE_KIND => "・",
            KING => "玉",
            ROOK => "飛",
            BISHOP => "角",
            GOLD => "金",
            SILVER => "銀",
            KNIGHT => "桂",
            LANCE => "香",
            PAWN => "歩",
            DRAGON => "龍",
            HORSE => "馬",
            PRO_SILVER => "全",
            PRO_KNIGHT => "圭",
            PRO_LANCE => "杏",
            PRO_PAWN => "と",
            _ => "?",
        };

        f.write_str(s)
    }
}

/// 盤面のマスの状態。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    /// 盤面外の壁。
    Wall,
    /// 空きマス。
    Empty,
    /// COM 側の駒。
    Com(PieceKind),
    /// HUM 側の駒。
    Hum(PieceKind),
}

impl Cell {
    /// 壁かどうかを返す。
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// 空きマスかどうかを返す。
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 駒マスなら駒種を返す。
    pub const fn piece_kind(self) -> Option<PieceKind> {
        match self {
            Self::Com(pk) | Self::Hum(pk) => Some(pk),
            _ => None,
        }
    }

    /// 駒マスなら駒の陣営を返す。
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Com(_) => Some(COM),
            Self::Hum(_) => Some(HUM),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Wall
    }
}

/// 盤面。壁を含む 11×11 のマス配列。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board(MyArray1<Cell, Square, { 11 * 11 }>);

impl Board {
    /// 全マスが壁の盤面を返す。
    pub fn walled() -> Self {
        Self(MyArray1::from([Cell::Wall; 11 * 11]))
    }

    /// 盤面内が全て空きマスの盤面を返す。
    pub fn empty() -> Self {
        let mut board = Self::walled();
        for sq in Square::iter() {
            board[sq] = Cell::Empty;
        }

        board
    }
}

impl std::ops::Index<Square> for Board {
    type Output = Cell;

    fn index(&self, sq: Square) -> &Cell {
        &self.0[sq]
    }
}

impl std::ops::IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.0[sq]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in Row::iter() {
            for col in Col::iter() {
                match self[Square::from_col_row(col, row)] {
                    Cell::Wall => f.write_str(" 壁 ")?,
                    Cell::Empty => f.write_str(" ・ ")?,
                    Cell::Com(pk) => write!(f, "v{} ", pk)?,
                    Cell::Hum(pk) => write!(f, " {} ", pk)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// 片方の陣営の手駒。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Hand([u8; 7]);

impl Hand {
    /// 空の手駒を返す。
    pub const fn empty() -> Self {
        Self([0; 7])
    }

    /// 手駒が 1 枚もないかどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }
}

impl std::ops::Index<PieceKind> for Hand {
    type Output = u8;

    fn index(&self, pk: PieceKind) -> &u8 {
        debug_assert!(pk.is_hand());

        &self.0[usize::from(pk) - 2]
    }
}

impl std::ops::IndexMut<PieceKind> for Hand {
    fn index_mut(&mut self, pk: PieceKind) -> &mut u8 {
        debug_assert!(pk.is_hand());

        &mut self.0[usize::from(pk) - 2]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("なし");
        }

        for pk in PieceKind::iter_hand() {
            let count = self[pk];
            match count {
                0 => {}
                1 => write!(f, "{} ", pk)?,
                _ => write!(f, "{}{} ", pk, count)?,
            }
        }

        Ok(())
    }
}

/// 両陣営の手駒。
pub type Hands = MyArray1<Hand, Side, 2>;

/// HUM 側の指し手。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    /// 盤上の駒を動かす手。
    Walk {
        src: Square,
        dst: Square,
        promo: bool,
    },
    /// 手駒を打つ手。
    Drop { pk: PieceKind, dst: Square },
}

impl Move {
    /// 盤上の駒を動かす手を作る。
    pub fn new_walk(src: Square, dst: Square) -> Self {
        debug_assert!(src.is_on_board());
        debug_assert!(dst.is_on_board());

        Self::Walk {
            src,
            dst,
            promo: false,
        }
    }

    /// 盤上の駒を成りながら動かす手を作る。
    pub fn new_walk_promotion(src: Square, dst: Square) -> Self {
        debug_assert!(src.is_on_board());
        debug_assert!(dst.is_on_board());

        Self::Walk {
            src,
            dst,
            promo: true,
        }
    }

    /// 手駒 `pk` を打つ手を作る。
    pub fn new_drop(pk: PieceKind, dst: Square) -> Self {
        debug_assert!(pk.is_hand());
        debug_assert!(dst.is_on_board());

        Self::Drop { pk, dst }
    }

    /// 駒打ちかどうかを返す。
    pub const fn is_drop(self) -> bool {
        matches!(self, Self::Drop { .. })
    }

    /// 成る手かどうかを返す。
    pub const fn is_promotion(self) -> bool {
        matches!(self, Self::Walk { promo: true, .. })
    }

    /// 移動先のマスを返す。
    pub const fn dst(self) -> Square {
        match self {
            Self::Walk { dst, .. } | Self::Drop { dst, .. } => dst,
        }
    }

    /// 移動元のマスを返す。駒打ちに対して呼んではならない。
    pub fn src(self) -> Square {
        match self {
            Self::Walk { src, .. } => src,
            Self::Drop { .. } => panic!("Move::src(): called on a drop move"),
        }
    }

    /// 打つ駒の駒種を返す。駒打ち以外に対して呼んではならない。
    pub fn dropped_piece_kind(self) -> PieceKind {
        match self {
            Self::Drop { pk, .. } => pk,
            Self::Walk { .. } => panic!("Move::dropped_piece_kind(): called on a walk move"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::Walk { src, dst, promo } => {
                write!(f, "{}{}", src, dst)?;
                if promo {
                    f.write_str("成")?;
                }
                Ok(())
            }
            Self::Drop { pk, dst } => write!(f, "{}打{}", pk, dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_square_col_row() {
        for col in Col::iter() {
            for row in Row::iter() {
                let sq = Square::from_col_row(col, row);
                assert!(sq.is_on_board());
                assert_eq!(sq.col(), col);
                assert_eq!(sq.row(), row);
            }
        }
    }

    #[test]
    fn test_square_wall_border() {
        assert!(!Square::from_inner(0).is_on_board());
        assert!(!Square::from_inner(10).is_on_board());
        assert!(!Square::from_inner(110).is_on_board());
        assert!(!Square::from_inner(120).is_on_board());

        assert_eq!(Square::iter().count(), 81);
        assert_eq!(Square::iter_ok().count(), 121);
        assert_eq!(Square::iter().filter(|sq| sq.is_on_board()).count(), 81);
    }

    #[test]
    fn test_side_inv() {
        assert_eq!(HUM.inv(), COM);
        assert_eq!(COM.inv(), HUM);

        for side in Side::iter() {
            assert_eq!(side.inv().inv(), side);
        }
    }

    #[test]
    fn test_cell_accessors() {
        assert!(Cell::Wall.is_wall());
        assert!(!Cell::Empty.is_wall());
        assert!(Cell::Empty.is_empty());

        assert_eq!(Cell::Hum(PAWN).piece_kind(), Some(PAWN));
        assert_eq!(Cell::Com(GOLD).piece_kind(), Some(GOLD));
        assert_eq!(Cell::Empty.piece_kind(), None);
        assert_eq!(Cell::Wall.piece_kind(), None);

        assert_eq!(Cell::Hum(PAWN).side(), Some(HUM));
        assert_eq!(Cell::Com(GOLD).side(), Some(COM));
        assert_eq!(Cell::Empty.side(), None);
    }

    #[test]
    fn test_piece_kind_predicates() {
        assert!(!NO_PIECE_KIND.is_piece());
        assert!(KING.is_piece());
        assert!(!KING.is_hand());
        assert!(!PieceKind(11).is_valid());

        let hands: Vec<_> = PieceKind::iter_hand().collect();
        assert_eq!(
            hands,
            [ROOK, BISHOP, GOLD, SILVER, KNIGHT, LANCE, PAWN].to_vec()
        );
        for pk in PieceKind::iter_hand() {
            assert!(pk.is_hand());
            assert!(!pk.is_promoted());
        }
    }

    #[test]
    fn test_board_walled() {
        let board = Board::empty();

        for sq in Square::iter_ok() {
            if sq.is_on_board() {
                assert_eq!(board[sq], Cell::Empty);
            } else {
                assert_eq!(board[sq], Cell::Wall);
            }
        }
    }

    #[test]
    fn test_hand_index() {
        let mut hand = Hand::empty();
        assert!(hand.is_empty());

        hand[PAWN] = 3;
        hand[ROOK] = 1;

        assert_eq!(hand[PAWN], 3);
        assert_eq!(hand[ROOK], 1);
        assert_eq!(hand[GOLD], 0);
        assert!(!hand.is_empty());
    }

    #[test]
    fn test_move_accessors() {
        let sq_src = Square::from_col_row(COL_7, ROW_7);
        let sq_dst = Square::from_col_row(COL_7, ROW_6);

        let walk = Move::new_walk(sq_src, sq_dst);
        assert!(!walk.is_drop());
        assert!(!walk.is_promotion());
        assert_eq!(walk.src(), sq_src);
        assert_eq!(walk.dst(), sq_dst);

        let promo = Move::new_walk_promotion(sq_src, sq_dst);
        assert!(promo.is_promotion());

        let drop = Move::new_drop(PAWN, sq_dst);
        assert!(drop.is_drop());
        assert_eq!(drop.dropped_piece_kind(), PAWN);
        assert_eq!(drop.dst(), sq_dst);
    }
}
