//! エミュレータ本体との境界。
//!
//! エミュレータ (FCEUX など) そのものへの依存はこのクレートには含めず、
//! `Backend` トレイトを境界とする。フレーム実行、メモリ読み書き、
//! ステートセーブ/ロード、実行フックだけがこちら側から見える全てである。

/// 単一のコントローラーのボタン入力(複数のボタンの組み合わせ)。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Buttons(u8);

pub const BUTTONS_A: Buttons = Buttons(1 << 0);
pub const BUTTONS_B: Buttons = Buttons(1 << 1);
pub const BUTTONS_S: Buttons = Buttons(1 << 2);
pub const BUTTONS_T: Buttons = Buttons(1 << 3);
pub const BUTTONS_U: Buttons = Buttons(1 << 4);
pub const BUTTONS_D: Buttons = Buttons(1 << 5);
pub const BUTTONS_L: Buttons = Buttons(1 << 6);
pub const BUTTONS_R: Buttons = Buttons(1 << 7);

pub const BUTTONS_UL: Buttons = BUTTONS_U.or(BUTTONS_L);
pub const BUTTONS_UR: Buttons = BUTTONS_U.or(BUTTONS_R);
pub const BUTTONS_DL: Buttons = BUTTONS_D.or(BUTTONS_L);
pub const BUTTONS_DR: Buttons = BUTTONS_D.or(BUTTONS_R);

impl Buttons {
    /// 無入力を返す。
    pub const fn empty() -> Self {
        Self(0)
    }

    /// ビット表現 (RLDUTSBA) から入力を作る。
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// 無入力かどうかを返す。
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `other` の全ボタンが押されているかどうかを返す。
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// 2 つの入力の AND を返す。
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// 2 つの入力の OR を返す。
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// ビット表現 (RLDUTSBA) を返す。ゲームパッドポートへの書き込み用。
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitAnd<Self> for Buttons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl std::ops::BitAndAssign<Self> for Buttons {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl std::ops::BitOr<Self> for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl std::ops::BitOrAssign<Self> for Buttons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl std::fmt::Display for Buttons {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use std::fmt::Write as _;

        const TABLE: [(Buttons, char); 8] = [
            (BUTTONS_R, 'R'),
            (BUTTONS_L, 'L'),
            (BUTTONS_D, 'D'),
            (BUTTONS_U, 'U'),
            (BUTTONS_T, 'T'),
            (BUTTONS_S, 'S'),
            (BUTTONS_B, 'B'),
            (BUTTONS_A, 'A'),
        ];

        for (button, c) in TABLE {
            if (*self & button).is_empty() {
                f.write_char('.')?;
            } else {
                f.write_char(c)?;
            }
        }

        Ok(())
    }
}

/// 実行フック解除用のハンドル。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HookHandle(u64);

/// 実行フックのコールバック。
pub type HookFn = Box<dyn FnMut()>;

struct Hook {
    handle: HookHandle,
    addr: u16,
    f: HookFn,
}

/// アドレスをキーとする実行フックの登録簿。
///
/// `Backend` 実装が命令実行前のアドレス通知をここへ流すことを想定している。
/// フック数は高々数個なので線形探索で足りる。
#[derive(Default)]
pub struct HookRegistry {
    next_id: u64,
    hooks: Vec<Hook>,
}

impl HookRegistry {
    /// 空の登録簿を返す。
    pub fn new() -> Self {
        Self::default()
    }

    /// アドレス `addr` の命令実行前に呼ばれるフックを登録する。
    pub fn add(&mut self, addr: u16, f: HookFn) -> HookHandle {
        let handle = HookHandle(self.next_id);
        self.next_id += 1;

        self.hooks.push(Hook { handle, addr, f });

        handle
    }

    /// フックを解除する。未登録のハンドルを渡してはならない。
    pub fn remove(&mut self, handle: HookHandle) {
        let idx = self
            .hooks
            .iter()
            .position(|hook| hook.handle == handle)
            .unwrap_or_else(|| panic!("HookRegistry::remove(): invalid handle: {:?}", handle));

        self.hooks.remove(idx);
    }

    /// 全フックを解除する。
    pub fn clear(&mut self) {
        self.hooks.clear();
    }

    /// アドレス `addr` に登録された全フックを呼ぶ。
    pub fn call(&mut self, addr: u16) {
        for hook in &mut self.hooks {
            if hook.addr == addr {
                (hook.f)();
            }
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("next_id", &self.next_id)
            .field("addrs", &self.hooks.iter().map(|h| h.addr).collect::<Vec<_>>())
            .finish()
    }
}

/// エミュレータ本体の抽象インターフェース。
///
/// 呼び出しは全て逐次的で、並行呼び出しは行われない。
/// スナップショットは確保済みバッファをセーブごとに使い回す
/// (セーブのたびに確保するのは遅いので)。
pub trait Backend {
    /// エミュレータの状態のスナップショット。ステートセーブ/ロード用。
    type Snapshot;

    /// 現在のフレーム番号を返す。
    fn frame_count(&self) -> u32;

    /// 入力 `buttons` で 1 フレーム進める。
    fn run_frame(&mut self, buttons: Buttons);

    /// 入力 `buttons` で `n` フレーム進める。
    fn run_frames(&mut self, n: u32, buttons: Buttons) {
        for _ in 0..n {
            self.run_frame(buttons);
        }
    }

    /// 論理アドレスを指定してメモリを 1 バイト読み取る。
    fn read_u8(&self, addr: u16) -> u8;

    /// `addr` から `buf.len()` バイトを読み取る。
    fn read_bytes(&self, addr: u16, buf: &mut [u8]) {
        for (i, b) in buf.iter_mut().enumerate() {
            *b = self.read_u8(addr + i as u16);
        }
    }

    /// 論理アドレスを指定してメモリに 1 バイト書き込む。
    fn write_u8(&mut self, addr: u16, value: u8);

    /// `Snapshot` オブジェクトを作成する。これだけではステートセーブは行われない。
    fn snapshot_create(&self) -> Self::Snapshot;

    /// ステートセーブする。`snap` の内部バッファはクリアして使い回される。
    fn snapshot_save(&self, snap: &mut Self::Snapshot) -> anyhow::Result<()>;

    /// ステートロードする。
    fn snapshot_load(&mut self, snap: &Self::Snapshot) -> anyhow::Result<()>;

    /// アドレス `addr` の命令実行前に呼ばれるフックを登録する。
    fn hook_before_exec(&mut self, addr: u16, f: HookFn) -> HookHandle;

    /// フックを解除する。未登録のハンドルを渡してはならない。
    fn unhook_before_exec(&mut self, handle: HookHandle);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_buttons_basic() {
        assert!(Buttons::empty().is_empty());
        assert!(!BUTTONS_UL.is_empty());

        assert_eq!(BUTTONS_UL, BUTTONS_U | BUTTONS_L);
        assert_eq!(BUTTONS_UL & BUTTONS_U, BUTTONS_U);

        assert!(BUTTONS_DR.contains(BUTTONS_D));
        assert!(!BUTTONS_DR.contains(BUTTONS_U));

        assert_eq!(Buttons::from_bits(BUTTONS_A.bits()), BUTTONS_A);
    }

    #[test]
    fn test_buttons_display() {
        assert_eq!(Buttons::empty().to_string(), "........");
        assert_eq!(BUTTONS_A.to_string(), ".......A");
        assert_eq!(BUTTONS_UL.to_string(), ".L.U....");
    }

    #[test]
    fn test_hook_registry() {
        let mut registry = HookRegistry::new();

        let count = Rc::new(Cell::new(0));

        let handle = {
            let count = Rc::clone(&count);
            registry.add(0xCEFC, Box::new(move || count.set(count.get() + 1)))
        };

        registry.call(0x8000);
        assert_eq!(count.get(), 0);

        registry.call(0xCEFC);
        registry.call(0xCEFC);
        assert_eq!(count.get(), 2);

        registry.remove(handle);
        registry.call(0xCEFC);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_hook_registry_same_addr() {
        let mut registry = HookRegistry::new();

        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            registry.add(0x1234, Box::new(move || count.set(count.get() + 1)));
        }

        registry.call(0x1234);
        assert_eq!(count.get(), 3);

        registry.clear();
        registry.call(0x1234);
        assert_eq!(count.get(), 3);
    }

    #[test]
    #[should_panic]
    fn test_hook_registry_remove_invalid() {
        let mut registry = HookRegistry::new();

        let handle = registry.add(0x1234, Box::new(|| {}));
        registry.remove(handle);

        // 二重解除は契約違反。
        registry.remove(handle);
    }
}
