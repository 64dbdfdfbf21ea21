use thiserror::Error;

/// A rejected field value. The `Display` output is the text shown next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("メールアドレスを入力してください。")]
    EmailRequired,

    #[error("メールアドレスの形式が正しくありません。")]
    EmailInvalid,

    #[error("パスワードを入力してください。")]
    PasswordRequired,

    #[error("パスワードは{min}文字以上{max}文字以下で入力してください。")]
    PasswordLength { min: usize, max: usize },

    #[error("パスワードには数字を1文字以上含めてください。")]
    PasswordDigit,

    #[error("パスワードには英小文字を1文字以上含めてください。")]
    PasswordLowercase,

    #[error("パスワードには英大文字を1文字以上含めてください。")]
    PasswordUppercase,

    #[error("パスワードに記号は使用できません。")]
    PasswordSymbol,

    #[error("確認用パスワードを入力してください。")]
    ConfirmRequired,

    #[error("パスワードが一致しません。")]
    PasswordMismatch,
}
