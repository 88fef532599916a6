//! エミュレーション関連。

pub mod addrs;
pub mod traveller;

mod backend;
mod naitou;

pub use self::backend::*;
pub use self::naitou::*;
