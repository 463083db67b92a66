//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity. Every constructor that
//! can fail validates its input, and deserialization goes through the same
//! constructors, so an invalid value object cannot exist.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Trophy identifier value object.
///
/// Caller-assigned. Any integer is accepted, including negative values and
/// values already used by another trophy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrophyId(i32);

impl TrophyId {
    /// Create a new TrophyId.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the inner i32 value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for TrophyId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TrophyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Competition name value object.
///
/// Must contain a non-whitespace character and be at least
/// [`Competition::MIN_LEN`] characters long. The value is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Competition(String);

impl Competition {
    /// Minimum number of characters in a competition name
    pub const MIN_LEN: usize = 3;

    /// Name used by [`Trophy::default`](super::Trophy)
    pub const UNKNOWN: &'static str = "Unknown Competition";

    /// Create a new Competition.
    ///
    /// # Arguments
    ///
    /// * `name` - The competition name
    ///
    /// # Returns
    ///
    /// A Result containing the Competition or an error if validation fails
    pub fn new(name: impl Into<String>) -> Result<Self, ValueObjectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValueObjectError::CompetitionEmpty);
        }
        let len = name.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValueObjectError::CompetitionTooShort {
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Competition {
    fn default() -> Self {
        Self(Self::UNKNOWN.to_string())
    }
}

impl TryFrom<String> for Competition {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Competition> for String {
    fn from(value: Competition) -> Self {
        value.into_string()
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Year value object.
///
/// Represents the year a trophy was won, strictly between
/// [`Year::MIN_EXCLUSIVE`] and [`Year::MAX_EXCLUSIVE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    pub const MIN_EXCLUSIVE: i32 = 1970;
    pub const MAX_EXCLUSIVE: i32 = 2025;

    /// Year used by [`Trophy::default`](super::Trophy)
    pub const DEFAULT: i32 = 2000;

    /// Create a new Year.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::YearOutOfRange` if `value <= 1970` or `value >= 2025`
    pub fn new(value: i32) -> Result<Self, ValueObjectError> {
        if value <= Self::MIN_EXCLUSIVE || value >= Self::MAX_EXCLUSIVE {
            return Err(ValueObjectError::YearOutOfRange { year: value });
        }
        Ok(Self(value))
    }

    /// Get the inner i32 value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i32> for Year {
    type Error = ValueObjectError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(value: Year) -> Self {
        value.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trophy_id_accepts_any_integer() {
        // テスト項目: TrophyId は負の値や 0 も受け付ける
        // then (期待する結果):
        assert_eq!(TrophyId::new(-5).value(), -5);
        assert_eq!(TrophyId::new(0).value(), 0);
        assert_eq!(TrophyId::from(i32::MAX).value(), i32::MAX);
    }

    #[test]
    fn test_competition_new_success() {
        // テスト項目: 有効な大会名を作成できる
        // given (前提条件):
        let name = "Champions League";

        // when (操作):
        let result = Competition::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Champions League");
    }

    #[test]
    fn test_competition_new_minimum_length_success() {
        // テスト項目: ちょうど 3 文字の大会名は作成できる
        // when (操作):
        let result = Competition::new("UCL");

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "UCL");
    }

    #[test]
    fn test_competition_new_empty_fails() {
        // テスト項目: 空の大会名は作成できない
        // when (操作):
        let result = Competition::new("");

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::CompetitionEmpty);
    }

    #[test]
    fn test_competition_new_whitespace_fails() {
        // テスト項目: 空白のみの大会名は空として扱われる
        // when (操作):
        let result = Competition::new("   \t");

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::CompetitionEmpty);
    }

    #[test]
    fn test_competition_new_too_short_fails() {
        // テスト項目: 2 文字以下の大会名は作成できない
        // when (操作):
        let result = Competition::new("AB");

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::CompetitionTooShort { min: 3, actual: 2 }
        );
    }

    #[test]
    fn test_competition_length_counts_characters() {
        // テスト項目: 長さはバイト数ではなく文字数で数える
        // when (操作):
        let short = Competition::new("Çé");
        let ok = Competition::new("Çéü");

        // then (期待する結果):
        assert_eq!(
            short.unwrap_err(),
            ValueObjectError::CompetitionTooShort { min: 3, actual: 2 }
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_competition_ordering_is_ordinal() {
        // テスト項目: 大会名は文字列の辞書順で比較される
        // given (前提条件):
        let fa_cup = Competition::new("FA Cup").unwrap();
        let la_liga = Competition::new("La Liga").unwrap();

        // then (期待する結果):
        assert!(fa_cup < la_liga);
    }

    #[test]
    fn test_year_new_boundaries() {
        // テスト項目: 1971 年から 2024 年までは有効、1970 年と 2025 年は無効
        // then (期待する結果):
        assert_eq!(Year::new(1971).unwrap().value(), 1971);
        assert_eq!(Year::new(2024).unwrap().value(), 2024);
        assert_eq!(
            Year::new(1970).unwrap_err(),
            ValueObjectError::YearOutOfRange { year: 1970 }
        );
        assert_eq!(
            Year::new(2025).unwrap_err(),
            ValueObjectError::YearOutOfRange { year: 2025 }
        );
    }

    #[test]
    fn test_year_new_far_out_of_range_fails() {
        // テスト項目: 範囲から大きく外れた年も OutOfRange になる
        // then (期待する結果):
        assert!(Year::new(1960).is_err());
        assert!(Year::new(2030).is_err());
        assert!(Year::new(i32::MIN).is_err());
        assert!(Year::new(i32::MAX).is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        // テスト項目: デフォルト値は検証を通過する値と一致する
        // then (期待する結果):
        assert_eq!(
            Competition::default(),
            Competition::new(Competition::UNKNOWN).unwrap()
        );
        assert_eq!(Year::default(), Year::new(Year::DEFAULT).unwrap());
    }

    #[test]
    fn test_deserialize_runs_validation() {
        // テスト項目: デシリアライズ時にも検証が実行される
        // when (操作):
        let competition: Result<Competition, _> = serde_json::from_str("\"AB\"");
        let year: Result<Year, _> = serde_json::from_str("2025");
        let valid_year: Year = serde_json::from_str("2020").unwrap();

        // then (期待する結果):
        assert!(competition.is_err());
        assert!(year.is_err());
        assert_eq!(valid_year.value(), 2020);
    }
}
