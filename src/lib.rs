pub use either::*;
pub use either_trait::*;
pub use error::*;
pub use storage::StorageState;
pub use unit::*;

mod either;
mod either_trait;
mod error;
mod storage;
mod trace;
mod unit;
