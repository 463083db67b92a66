//! UseCase: トロフィー更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateTrophyUseCase::execute() メソッド
//! - 大会名と年の更新（ID は変更しない）
//!
//! ### なぜこのテストが必要か
//! - 検証に失敗した入力で既存のトロフィーが変更されないことを保証
//! - 存在しない ID の更新がエラーになることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存トロフィーの更新
//! - 異常系：存在しない ID、検証エラー

use tracing::{info, warn};

use crate::domain::{Trophy, TrophyId, TrophyRepository};

use super::error::UpdateTrophyError;

/// トロフィー更新のユースケース
pub struct UpdateTrophyUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TrophyRepository,
}

impl<'a> UpdateTrophyUseCase<'a> {
    /// 新しい UpdateTrophyUseCase を作成
    pub fn new(repository: &'a mut dyn TrophyRepository) -> Self {
        Self { repository }
    }

    /// トロフィー更新を実行
    ///
    /// 入力値の検証は検索より先に行うため、不正な入力で既存のトロフィーが
    /// 変更されることはない。
    ///
    /// # Returns
    ///
    /// * `Ok(Trophy)` - 更新後のトロフィー（ID は元のまま）
    /// * `Err(UpdateTrophyError)` - 検証エラー、または対象が存在しない
    pub fn execute(
        &mut self,
        id: i32,
        competition: impl Into<String>,
        year: i32,
    ) -> Result<Trophy, UpdateTrophyError> {
        let replacement = Trophy::new(id, competition, year).inspect_err(|e| {
            warn!(id, error = %e, "rejected trophy update");
        })?;

        let updated = self
            .repository
            .update(TrophyId::new(id), &replacement)
            .inspect_err(|e| {
                warn!(id, error = %e, "trophy to update not found");
            })?
            .clone();
        info!(trophy = %updated, "trophy updated");

        Ok(updated)
    }
}
