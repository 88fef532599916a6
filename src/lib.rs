pub mod emu;
pub mod myarray;
pub mod mylog;
mod shogi;

pub use self::shogi::*;
