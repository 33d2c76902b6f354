//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used to decide how a failure is surfaced
//! to the user (notification severity, redirect, silent discard).

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント側で発生するエラーの分類を定義します。
/// どの種別も UI 境界で回復可能であり、プロセスを停止させるものはありません。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert_eq!(kind.as_str(), "Validation Failed");
/// assert!(kind.is_user_facing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値がクライアント側の検証に失敗した
    Validation,
    /// 認証に失敗した、または認証が必要
    Unauthorized,
    /// 遷移先が存在しない
    NotFound,
    /// 外部サービスからの応答が期限内に得られなかった
    Timeout,
    /// より新しい操作によって置き換えられた
    Superseded,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Timeout.as_str(), "Timed Out");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation Failed",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Timeout => "Timed Out",
            ErrorKind::Superseded => "Superseded",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// ユーザーに通知すべきエラーかどうかを判定
    ///
    /// `Superseded` は古い操作の破棄であり、通知しません。
    #[inline]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, ErrorKind::Superseded)
    }

    /// 内部起因のエラーかどうかを判定
    ///
    /// これらのエラーは error レベルでログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(ErrorKind::Internal.to_string(), "Internal Error");
    }

    #[test]
    fn test_superseded_is_silent() {
        assert!(!ErrorKind::Superseded.is_user_facing());
        assert!(ErrorKind::Validation.is_user_facing());
        assert!(ErrorKind::Timeout.is_user_facing());
    }

    #[test]
    fn test_is_internal() {
        assert!(ErrorKind::Internal.is_internal());
        assert!(!ErrorKind::Unauthorized.is_internal());
    }

    #[test]
    fn test_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }
}
