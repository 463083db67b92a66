//! UseCase 層
//!
//! 書き込み系のビジネスロジックを実装するレイヤー。
//! CLI から呼び出され、Domain 層を操作します。
//! 参照系の操作は Repository を直接呼び出します。

pub mod add_trophy;
pub mod error;
pub mod remove_trophy;
pub mod update_trophy;

pub use add_trophy::AddTrophyUseCase;
pub use error::{AddTrophyError, RemoveTrophyError, UpdateTrophyError};
pub use remove_trophy::RemoveTrophyUseCase;
pub use update_trophy::UpdateTrophyUseCase;
