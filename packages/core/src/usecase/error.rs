//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{ErrorKind, RepositoryError, ValueObjectError};

/// トロフィー追加時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddTrophyError {
    /// 入力値が検証を通過しなかった
    #[error(transparent)]
    InvalidTrophy(#[from] ValueObjectError),
}

impl AddTrophyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddTrophyError::InvalidTrophy(e) => e.kind(),
        }
    }
}

/// トロフィー更新時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateTrophyError {
    /// 入力値が検証を通過しなかった
    #[error(transparent)]
    InvalidTrophy(#[from] ValueObjectError),

    /// 更新対象が存在しない
    #[error(transparent)]
    NotFound(#[from] RepositoryError),
}

impl UpdateTrophyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UpdateTrophyError::InvalidTrophy(e) => e.kind(),
            UpdateTrophyError::NotFound(e) => e.kind(),
        }
    }
}

/// トロフィー削除時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoveTrophyError {
    /// 削除対象が存在しない
    #[error(transparent)]
    NotFound(#[from] RepositoryError),
}

impl RemoveTrophyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RemoveTrophyError::NotFound(e) => e.kind(),
        }
    }
}
