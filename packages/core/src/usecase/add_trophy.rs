//! UseCase: トロフィー追加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AddTrophyUseCase::execute() メソッド
//! - 生の入力値からのトロフィー作成（検証）と Repository への追加
//!
//! ### なぜこのテストが必要か
//! - 検証に失敗した入力が Repository に入らないことを保証
//! - ID の重複チェックを行わない仕様を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しいトロフィーの追加
//! - 異常系：大会名が短すぎる、年が範囲外
//! - エッジケース：既存と同じ ID での追加

use tracing::{info, warn};

use crate::domain::{Trophy, TrophyRepository};

use super::error::AddTrophyError;

/// トロフィー追加のユースケース
pub struct AddTrophyUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TrophyRepository,
}

impl<'a> AddTrophyUseCase<'a> {
    /// 新しい AddTrophyUseCase を作成
    pub fn new(repository: &'a mut dyn TrophyRepository) -> Self {
        Self { repository }
    }

    /// トロフィー追加を実行
    ///
    /// # Arguments
    ///
    /// * `id` - トロフィーの ID（重複チェックなし）
    /// * `competition` - 大会名
    /// * `year` - 優勝した年
    ///
    /// # Returns
    ///
    /// * `Ok(Trophy)` - 追加されたトロフィー
    /// * `Err(AddTrophyError)` - 入力値の検証に失敗
    pub fn execute(
        &mut self,
        id: i32,
        competition: impl Into<String>,
        year: i32,
    ) -> Result<Trophy, AddTrophyError> {
        let trophy = Trophy::new(id, competition, year).inspect_err(|e| {
            warn!(id, error = %e, "rejected trophy");
        })?;

        let added = self.repository.add(trophy).clone();
        info!(trophy = %added, "trophy added");

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ErrorKind, TrophyId, ValueObjectError},
        infrastructure::repository::InMemoryTrophyRepository,
    };

    #[test]
    fn test_add_trophy_success() {
        // テスト項目: 新しいトロフィーを追加できる
        // given (前提条件):
        let mut repository = InMemoryTrophyRepository::new();
        let mut usecase = AddTrophyUseCase::new(&mut repository);

        // when (操作):
        let result = usecase.execute(6, "Bundesliga", 2023);

        // then (期待する結果):
        assert_eq!(result, Ok(Trophy::new(6, "Bundesliga", 2023).unwrap()));
        assert_eq!(repository.len(), 6);
        assert_eq!(
            repository
                .get_by_id(TrophyId::new(6))
                .unwrap()
                .competition()
                .as_str(),
            "Bundesliga"
        );
    }

    #[test]
    fn test_add_trophy_invalid_competition() {
        // テスト項目: 大会名が短すぎる場合は追加されない
        // given (前提条件):
        let mut repository = InMemoryTrophyRepository::new();
        let mut usecase = AddTrophyUseCase::new(&mut repository);

        // when (操作):
        let result = usecase.execute(6, "AB", 2023);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(AddTrophyError::InvalidTrophy(
                ValueObjectError::CompetitionTooShort { min: 3, actual: 2 }
            ))
        );
        assert_eq!(repository.len(), 5);
    }

    #[test]
    fn test_add_trophy_year_out_of_range() {
        // テスト項目: 年が範囲外の場合は OutOfRange で追加されない
        // given (前提条件):
        let mut repository = InMemoryTrophyRepository::new();
        let mut usecase = AddTrophyUseCase::new(&mut repository);

        // when (操作):
        let result = usecase.execute(6, "Bundesliga", 2025);

        // then (期待する結果):
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(repository.len(), 5);
    }

    #[test]
    fn test_add_trophy_duplicate_id_allowed() {
        // テスト項目: 既存と同じ ID でも追加でき、ID での取得は最初の一件を返す
        // given (前提条件):
        let mut repository = InMemoryTrophyRepository::new();
        let mut usecase = AddTrophyUseCase::new(&mut repository);

        // when (操作):
        let result = usecase.execute(1, "Copa America", 2021);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(repository.len(), 6);
        assert_eq!(
            repository
                .get_by_id(TrophyId::new(1))
                .unwrap()
                .competition()
                .as_str(),
            "Champions League"
        );
    }
}
