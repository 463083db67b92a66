//! InMemory Trophy Repository 実装
//!
//! ドメイン層が定義する TrophyRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用し、挿入順を保持します。
//!
//! 参照系の操作は保持中のトロフィーへの共有参照を返します。
//! 保持中のトロフィーを変更できるのは `update` だけです。

use tracing::debug;

use crate::domain::{
    RepositoryError, Trophy, TrophyId, TrophyRepository, default_trophies,
};

/// インメモリ Trophy Repository 実装
///
/// ドメイン層の TrophyRepository trait を実装します（依存性の逆転）。
#[derive(Debug, Clone)]
pub struct InMemoryTrophyRepository {
    /// 挿入順に並んだトロフィー
    trophies: Vec<Trophy>,
}

impl InMemoryTrophyRepository {
    /// 初期データ（5 件）を持つ InMemoryTrophyRepository を作成
    pub fn new() -> Self {
        Self::with_trophies(default_trophies())
    }

    /// 任意の初期データで InMemoryTrophyRepository を作成
    pub fn with_trophies(trophies: Vec<Trophy>) -> Self {
        debug!(count = trophies.len(), "trophy repository created");
        Self { trophies }
    }

    /// `id` を持つ最初のトロフィーの位置
    fn position(&self, id: TrophyId) -> Result<usize, RepositoryError> {
        self.trophies
            .iter()
            .position(|t| t.id() == id)
            .ok_or(RepositoryError::TrophyNotFound(id))
    }
}

impl Default for InMemoryTrophyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TrophyRepository for InMemoryTrophyRepository {
    fn get(&self) -> &[Trophy] {
        &self.trophies
    }

    fn get_by_id(&self, id: TrophyId) -> Result<&Trophy, RepositoryError> {
        let index = self.position(id)?;
        Ok(&self.trophies[index])
    }

    fn add(&mut self, trophy: Trophy) -> &Trophy {
        debug!(id = %trophy.id(), "adding trophy");
        let index = self.trophies.len();
        self.trophies.push(trophy);
        &self.trophies[index]
    }

    fn remove(&mut self, id: TrophyId) -> Result<Trophy, RepositoryError> {
        let index = self.position(id)?;
        debug!(%id, index, "removing trophy");
        Ok(self.trophies.remove(index))
    }

    fn update(&mut self, id: TrophyId, updated: &Trophy) -> Result<&Trophy, RepositoryError> {
        let index = self.position(id)?;
        debug!(%id, index, "updating trophy");
        let trophy = &mut self.trophies[index];
        trophy.apply_details(updated);
        Ok(trophy)
    }
}
