//! 全てのカーソル位置のペアについての最短経路表。
//!
//! ゲーム画面上の盤面 81 マスと HUM 側の持駒エリア 7 マスを頂点、
//! 1 回のボタン入力によるカーソル移動を辺とする有向グラフを作り、
//! 全点対間最短経路(操作列)を前計算してキャッシュする。
//!
//! 辺は全て手書きの定数表から来る。特に盤面と持駒エリアの間の辺は
//! 行きと帰りで別物 (原作の画面遷移がそうなっている) なので、
//! 対称化したりせずそのまま写している。

use arrayvec::ArrayVec;
use once_cell::sync::Lazy;

use crate::shogi::*;

use super::backend::{
    Buttons, BUTTONS_D, BUTTONS_DL, BUTTONS_DR, BUTTONS_L, BUTTONS_R, BUTTONS_U, BUTTONS_UL,
    BUTTONS_UR,
};
use super::naitou::Cursor;

/// カーソル位置の総数。盤上 81 マス + HUM 側の手駒 7 種。
pub const VERTEX_COUNT: usize = 88;

/// 経路の最大長。最も離れた頂点間でも 11 回で移動可能。
pub const MAX_PATH_LEN: usize = 11;

/// `cursor_src` から `cursor_dst` への最短経路を返す。
///
/// 経路表はプロセス内で一度だけ構築され、以後共有される。
pub fn shortest_path(cursor_src: Cursor, cursor_dst: Cursor) -> &'static [Buttons] {
    static TABLE: Lazy<RoutingTable> = Lazy::new(RoutingTable::new);

    TABLE.query(cursor_src, cursor_dst)
}

/// カーソルを 1 回のボタン入力 `buttons` で動かした結果を返す。
///
/// 対応する辺がなければ `None` (カーソルは動かない)。
/// 経路の再生やエミュレータを使わない検証に使える。
pub fn step(cursor: Cursor, buttons: Buttons) -> Option<Cursor> {
    static GRAPH: Lazy<Graph> = Lazy::new(graph);

    if buttons.is_empty() {
        return None;
    }

    let i = vertex(cursor);
    (0..VERTEX_COUNT)
        .find(|&j| GRAPH[i][j] == buttons)
        .map(cursor_at)
}

/// 盤面内の筋と段を頂点インデックスに変換する。
pub const fn vertex_xy(col: Col, row: Row) -> usize {
    debug_assert!(col.is_on_board());
    debug_assert!(row.is_on_board());

    (9 * (row.inner() - 1) + (col.inner() - 1)) as usize
}

/// 盤面内のマスを頂点インデックスに変換する。
pub const fn vertex_square(sq: Square) -> usize {
    vertex_xy(sq.col(), sq.row())
}

/// HUM 側の手駒の駒種を頂点インデックスに変換する。
///
/// 駒番号は飛=2, ..., 歩=8 なので、頂点は 81..88 に収まる。
pub const fn vertex_hand(pk: PieceKind) -> usize {
    debug_assert!(pk.is_hand());

    81 + pk.inner() as usize - 2
}

/// カーソル位置を頂点インデックスに変換する。
pub const fn vertex(cursor: Cursor) -> usize {
    match cursor {
        Cursor::Board(sq) => vertex_square(sq),
        Cursor::Hand(pk) => vertex_hand(pk),
    }
}

/// 頂点インデックスをカーソル位置に変換する。`vertex()` の逆写像。
pub fn cursor_at(v: usize) -> Cursor {
    assert!(v < VERTEX_COUNT, "invalid vertex: {}", v);

    if v < 81 {
        let col = Col::from_inner(v as i32 % 9 + 1);
        let row = Row::from_inner(v as i32 / 9 + 1);
        Cursor::new_board(Square::from_col_row(col, row))
    } else {
        Cursor::new_hand(PieceKind::from_inner(v as u32 - 81 + 2))
    }
}

/// カーソル位置のペアに対する最短経路。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct RouteEntry(ArrayVec<Buttons, MAX_PATH_LEN>);

impl RouteEntry {
    const fn new() -> Self {
        Self(ArrayVec::<Buttons, MAX_PATH_LEN>::new_const())
    }
}

/// 全てのカーソル位置のペアに対する最短経路キャッシュ。
///
/// 構築後は不変で、問い合わせは前計算済み操作列を返すだけ。
#[derive(Debug)]
pub struct RoutingTable([[RouteEntry; VERTEX_COUNT]; VERTEX_COUNT]);

impl RoutingTable {
    /// 全てのカーソル位置のペアに対する最短経路キャッシュを構築する。
    ///
    /// 静的な隣接規則のみから決まる純粋な計算で、実行時入力は取らない。
    pub fn new() -> Self {
        const VERTEX_INVALID: usize = usize::MAX;
        const DIST_INF: u8 = 100; // 距離無限大を表す値。有限の最長距離より十分大きい。

        let g = graph();

        // i から j へ最短経路で行くときの (次に辿るべき頂点, 操作)。
        // i == j なら (i, 無入力)、到達不能なら (VERTEX_INVALID, 無入力)。
        let mut nxt = [[(VERTEX_INVALID, Buttons::empty()); VERTEX_COUNT]; VERTEX_COUNT];

        // i から j への最短距離。
        let mut dist = [[DIST_INF; VERTEX_COUNT]; VERTEX_COUNT];

        for i in 0..VERTEX_COUNT {
            for j in 0..VERTEX_COUNT {
                if i == j {
                    nxt[i][j] = (i, Buttons::empty());
                    dist[i][j] = 0;
                } else if !g[i][j].is_empty() {
                    nxt[i][j] = (j, g[i][j]);
                    dist[i][j] = 1;
                }
            }
        }

        // Floyd-Warshall algorithm により全点対間最短距離を求める。
        for k in 0..VERTEX_COUNT {
            for i in 0..VERTEX_COUNT {
                if dist[i][k] == DIST_INF {
                    continue;
                }
                for j in 0..VERTEX_COUNT {
                    if dist[k][j] == DIST_INF {
                        continue;
                    }
                    let d_new = dist[i][k] + dist[k][j];
                    if d_new < dist[i][j] {
                        dist[i][j] = d_new;
                        nxt[i][j] = nxt[i][k];
                    }
                }
            }
        }

        // nxt を辿って全点対間最短経路を復元する。
        //
        // ArrayVec は Copy でないため、2 次元配列リテラルでは初期化できない。
        // そこで array::map を経由する。内周の配列は要素を定数にすることでリテラル初期化ができる。
        let mut entries: [[RouteEntry; VERTEX_COUNT]; VERTEX_COUNT] = [(); VERTEX_COUNT].map(|_| {
            const ELEM: RouteEntry = RouteEntry::new();
            [ELEM; VERTEX_COUNT]
        });

        for i in 0..VERTEX_COUNT {
            for j in 0..VERTEX_COUNT {
                // 任意の 2 点間に経路が存在するはず。
                // さもなくば隣接規則の定数表が壊れている。
                assert_ne!(dist[i][j], DIST_INF, "unreachable: {} -> {}", i, j);

                let entry = &mut entries[i][j];
                let mut v = i;
                while v != j {
                    let (nxt_v, nxt_buttons) = nxt[v][j];
                    entry.0.push(nxt_buttons);
                    v = nxt_v;
                }
            }
        }

        Self(entries)
    }

    /// `cursor_src` から `cursor_dst` への最短経路を返す。
    pub fn query(&self, cursor_src: Cursor, cursor_dst: Cursor) -> &[Buttons] {
        self.query_vertex(vertex(cursor_src), vertex(cursor_dst))
    }

    /// 頂点インデックス指定版の `query()`。
    pub fn query_vertex(&self, src: usize, dst: usize) -> &[Buttons] {
        assert!(src < VERTEX_COUNT, "invalid vertex: {}", src);
        assert!(dst < VERTEX_COUNT, "invalid vertex: {}", dst);

        &self.0[src][dst].0
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::new()
    }
}

type Graph = [[Buttons; VERTEX_COUNT]; VERTEX_COUNT];

/// マスの周囲 8 方向についての (筋差分, 段差分, 操作)。
const SQUARE_NEIGHBORS: [(i32, i32, Buttons); 8] = [
    (-1, -1, BUTTONS_UL),
    (0, -1, BUTTONS_U),
    (1, -1, BUTTONS_UR),
    (-1, 0, BUTTONS_L),
    (1, 0, BUTTONS_R),
    (-1, 1, BUTTONS_DL),
    (0, 1, BUTTONS_D),
    (1, 1, BUTTONS_DR),
];

/// 最右列 (9 筋) の任意のマスから持駒エリアへ入る辺。(行き先の駒種, 操作)
const HAND_ENTRIES: [(PieceKind, Buttons); 2] = [(ROOK, BUTTONS_R), (SILVER, BUTTONS_DR)];

/// 持駒エリアから盤面へ戻る辺。(駒種, 行き先の (筋, 段), 操作)
///
/// 入る辺とは行き先も操作も一致しない。原作の画面遷移がそうなっている。
const HAND_EXITS: [(PieceKind, (i32, i32), Buttons); 8] = [
    (ROOK, (9, 6), BUTTONS_UL),
    (ROOK, (9, 7), BUTTONS_L),
    (ROOK, (9, 8), BUTTONS_DL),
    (SILVER, (9, 7), BUTTONS_UL),
    (SILVER, (9, 8), BUTTONS_L),
    (SILVER, (9, 9), BUTTONS_DL),
    (PAWN, (9, 8), BUTTONS_UL),
    (PAWN, (9, 9), BUTTONS_L),
];

/// 持駒エリア内の駒種間の辺。
///
/// 画面上のメニュー配置を写した手書きの定数表で、規則から導出はできない。
#[rustfmt::skip]
const HAND_LINKS: [(PieceKind, PieceKind, Buttons); 28] = [
    (ROOK,   BISHOP, BUTTONS_R),
    (ROOK,   SILVER, BUTTONS_D),
    (ROOK,   KNIGHT, BUTTONS_DR),

    (BISHOP, ROOK,   BUTTONS_L),
    (BISHOP, GOLD,   BUTTONS_R),
    (BISHOP, SILVER, BUTTONS_DL),
    (BISHOP, KNIGHT, BUTTONS_D),
    (BISHOP, LANCE,  BUTTONS_DR),

    (GOLD,   BISHOP, BUTTONS_L),
    (GOLD,   SILVER, BUTTONS_R),
    (GOLD,   KNIGHT, BUTTONS_DL),
    (GOLD,   LANCE,  BUTTONS_D),

    (SILVER, ROOK,   BUTTONS_U),
    (SILVER, BISHOP, BUTTONS_UR),
    (SILVER, KNIGHT, BUTTONS_R),
    (SILVER, PAWN,   BUTTONS_D),

    (KNIGHT, ROOK,   BUTTONS_UL),
    (KNIGHT, BISHOP, BUTTONS_U),
    (KNIGHT, GOLD,   BUTTONS_UR),
    (KNIGHT, SILVER, BUTTONS_L),
    (KNIGHT, LANCE,  BUTTONS_R),
    (KNIGHT, PAWN,   BUTTONS_DL),

    (LANCE,  BISHOP, BUTTONS_UL),
    (LANCE,  GOLD,   BUTTONS_U),
    (LANCE,  KNIGHT, BUTTONS_L),
    (LANCE,  PAWN,   BUTTONS_R),

    (PAWN,   SILVER, BUTTONS_U),
    (PAWN,   KNIGHT, BUTTONS_UR),
];

/// カーソル位置をグラフの頂点と見たときの隣接行列を返す。
///
/// 戻り値の (i, j) 要素は、i から j への辺があればその操作、
/// さもなくば `Buttons::empty()` である。
fn graph() -> Graph {
    let mut g = [[Buttons::empty(); VERTEX_COUNT]; VERTEX_COUNT];

    {
        let mut add_edge = |i: usize, j: usize, buttons: Buttons| {
            // 後の規則が既存の辺を黙って上書きしてはならない。
            assert!(g[i][j].is_empty(), "duplicate edge: {} -> {}", i, j);
            assert!(!buttons.is_empty());

            g[i][j] = buttons;
        };

        // 盤上のマス間の接続。
        for col in Col::iter() {
            for row in Row::iter() {
                for (dcol, drow, buttons) in SQUARE_NEIGHBORS {
                    let col_dst = col + dcol;
                    let row_dst = row + drow;

                    if col_dst.is_on_board() && row_dst.is_on_board() {
                        add_edge(vertex_xy(col, row), vertex_xy(col_dst, row_dst), buttons);
                    }
                }
            }
        }

        // 盤面から持駒エリアへの接続。
        for row in Row::iter() {
            for (pk, buttons) in HAND_ENTRIES {
                add_edge(vertex_xy(COL_9, row), vertex_hand(pk), buttons);
            }
        }

        // 持駒エリアから盤面への接続。
        for (pk, (col, row), buttons) in HAND_EXITS {
            let i = vertex_hand(pk);
            let j = vertex_xy(Col::from_inner(col), Row::from_inner(row));
            add_edge(i, j, buttons);
        }

        // 持駒エリア内の駒種間の接続。
        for (pk_src, pk_dst, buttons) in HAND_LINKS {
            add_edge(vertex_hand(pk_src), vertex_hand(pk_dst), buttons);
        }
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    fn board(col: i32, row: i32) -> Cursor {
        Cursor::new_board(Square::from_col_row(
            Col::from_inner(col),
            Row::from_inner(row),
        ))
    }

    #[test]
    fn test_vertex_mapping() {
        assert_eq!(vertex_xy(COL_1, ROW_1), 0);
        assert_eq!(vertex_xy(COL_9, ROW_1), 8);
        assert_eq!(vertex_xy(COL_1, ROW_2), 9);
        assert_eq!(vertex_xy(COL_9, ROW_9), 80);

        assert_eq!(vertex_hand(ROOK), 81);
        assert_eq!(vertex_hand(BISHOP), 82);
        assert_eq!(vertex_hand(GOLD), 83);
        assert_eq!(vertex_hand(SILVER), 84);
        assert_eq!(vertex_hand(KNIGHT), 85);
        assert_eq!(vertex_hand(LANCE), 86);
        assert_eq!(vertex_hand(PAWN), 87);
    }

    #[test]
    fn test_cursor_at_roundtrip() {
        for v in 0..VERTEX_COUNT {
            assert_eq!(vertex(cursor_at(v)), v);
        }
    }

    #[test]
    fn test_hand_links_table() {
        assert_eq!(HAND_LINKS.len(), 28);

        for (pk_src, pk_dst, buttons) in HAND_LINKS {
            assert!(pk_src.is_hand());
            assert!(pk_dst.is_hand());
            assert_ne!(pk_src, pk_dst);
            assert!(!buttons.is_empty());
        }
    }

    #[test]
    fn test_step_board() {
        assert_eq!(step(board(5, 5), BUTTONS_U), Some(board(5, 4)));
        assert_eq!(step(board(5, 5), BUTTONS_DR), Some(board(6, 6)));
        assert_eq!(step(board(5, 5), Buttons::empty()), None);

        // 盤の上端からはそれ以上上に行けない。
        assert_eq!(step(board(5, 1), BUTTONS_U), None);
        // 左端からは左に行けない。
        assert_eq!(step(board(1, 5), BUTTONS_L), None);
    }

    #[test]
    fn test_step_hand_area() {
        // 9 筋からは右入力で持駒の飛へ。
        for row in 1..=9 {
            assert_eq!(step(board(9, row), BUTTONS_R), Some(Cursor::new_hand(ROOK)));
            assert_eq!(
                step(board(9, row), BUTTONS_DR),
                Some(Cursor::new_hand(SILVER))
            );
        }

        // 持駒エリアから盤面へ戻る辺は行きと非対称。
        assert_eq!(step(Cursor::new_hand(ROOK), BUTTONS_L), Some(board(9, 7)));
        assert_eq!(step(Cursor::new_hand(PAWN), BUTTONS_UL), Some(board(9, 8)));

        // 持駒エリア内の移動。
        assert_eq!(
            step(Cursor::new_hand(ROOK), BUTTONS_R),
            Some(Cursor::new_hand(BISHOP))
        );
        assert_eq!(
            step(Cursor::new_hand(PAWN), BUTTONS_UR),
            Some(Cursor::new_hand(KNIGHT))
        );
        assert_eq!(step(Cursor::new_hand(GOLD), BUTTONS_UR), None);
    }

    #[test]
    fn test_graph_out_degrees() {
        let g = graph();

        // 盤面中央のマスは 8 方向全てに動ける。
        let i = vertex_xy(COL_5, ROW_5);
        let deg = (0..VERTEX_COUNT).filter(|&j| !g[i][j].is_empty()).count();
        assert_eq!(deg, 8);

        // 左上隅のマスは 3 方向。
        let i = vertex_xy(COL_1, ROW_1);
        let deg = (0..VERTEX_COUNT).filter(|&j| !g[i][j].is_empty()).count();
        assert_eq!(deg, 3);

        // 右上隅のマスは 3 方向 + 持駒エリアへの 2 辺。
        let i = vertex_xy(COL_9, ROW_1);
        let deg = (0..VERTEX_COUNT).filter(|&j| !g[i][j].is_empty()).count();
        assert_eq!(deg, 5);
    }
}
