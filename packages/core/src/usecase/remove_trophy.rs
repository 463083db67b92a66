//! UseCase: トロフィー削除処理

use tracing::{info, warn};

use crate::domain::{Trophy, TrophyId, TrophyRepository};

use super::error::RemoveTrophyError;

/// トロフィー削除のユースケース
pub struct RemoveTrophyUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TrophyRepository,
}

impl<'a> RemoveTrophyUseCase<'a> {
    /// 新しい RemoveTrophyUseCase を作成
    pub fn new(repository: &'a mut dyn TrophyRepository) -> Self {
        Self { repository }
    }

    /// トロフィー削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Trophy)` - 削除されたトロフィー
    /// * `Err(RemoveTrophyError)` - 対象が存在しない
    pub fn execute(&mut self, id: i32) -> Result<Trophy, RemoveTrophyError> {
        let removed = self.repository.remove(TrophyId::new(id)).inspect_err(|e| {
            warn!(id, error = %e, "trophy to remove not found");
        })?;
        info!(trophy = %removed, "trophy removed");

        Ok(removed)
    }
}
