//! 原作の各種メモリアドレス。

//--------------------------------------------------------------------
// RAM
//--------------------------------------------------------------------

/// 現在の手数 (下位、100 未満の部分)。
pub const PLY_LO: u16 = 0x15;

/// 現在の手数 (上位、100 の位以上)。
pub const PLY_HI: u16 = 0x16;

/// 手番。0 なら COM、さもなくば HUM。
pub const SIDE_TO_MOVE: u16 = 0x77;

/// カーソルの画面 x 座標。盤面内なら 1..=9、持駒エリアなら 10。
pub const CURSOR_X: u16 = 0xD6;

/// カーソルの画面 y 座標。
pub const CURSOR_Y: u16 = 0xD7;

/// 駒をつかんでいるかどうかのフラグ。0 以外ならつかんでいる。
pub const PIECE_GRABBED: u16 = 0xDF;

/// HUM 側の盤面配列 (11×11、壁=99、空=0、駒=駒番号)。
pub const BOARD_HUM: u16 = 0x03A9;

/// COM 側の盤面配列 (11×11、壁=99、空=0、駒=駒番号+15)。
pub const BOARD_COM: u16 = 0x049B;

/// HUM 側の手駒配列 (飛、角、金、銀、桂、香、歩の順に 7 バイト)。
pub const HAND_HUM: u16 = 0x058D;

/// COM 側の手駒配列 (同上)。
pub const HAND_COM: u16 = 0x0594;

//--------------------------------------------------------------------
// ROM (実行フック用)
//--------------------------------------------------------------------

/// HUM 側の指し手入力待ちループ開始。
pub const HUM_TURN: u16 = 0xCEFC;

/// 着手確定処理の開始。A ボタンによる着手が受理された。
pub const MOVE_ACCEPTED: u16 = 0xCE0A;

/// 思考ルーチン開始。
pub const THINK_START: u16 = 0xEF70;

/// 思考ルーチンが終了し、通常の指し手を返した。
pub const THINK_END_MOVE: u16 = 0xDFD3;

/// 思考ルーチンが終了し、HUM の勝ちと判定された。
pub const THINK_END_HUM_WIN: u16 = 0xDD47;

/// 思考ルーチンが終了し、COM の勝ちと判定された。
pub const THINK_END_COM_WIN: u16 = 0xDFD6;

/// 思考ルーチンが終了し、HUM の自殺手と判定された。
pub const THINK_END_HUM_SUICIDE: u16 = 0xDD44;
