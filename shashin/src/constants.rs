use std::time::Duration;

/// ======================= Endpoints =======================
pub const PASSWORD_RESET_REQUEST_PATH: &str = "/api/v1/auth/password-reset-request";
pub const RESET_PASSWORD_PATH: &str = "/api/v1/auth/reset-password";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const SIGNUP_PATH: &str = "/api/v1/auth/register";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const RESET_TOKEN_PARAM: &str = "token";

/// ======================= Password policy =======================
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 20;
pub const STRONG_PASSWORD_MIN_LENGTH: usize = 12;

/// ======================= Follow-up navigation =======================
pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";
pub const RESET_PASSWORD_REDIRECT_DELAY: Duration = Duration::from_secs(3);
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(3);
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// ======================= Fixed UI text =======================
pub const PASSWORD_RESET_REQUEST_SUCCESS: &str =
    "パスワード再設定用のメールを送信しました。メールをご確認ください。";
pub const RESET_PASSWORD_SUCCESS: &str = "パスワードを再設定しました。ログインページへ移動します。";
pub const LOGIN_SUCCESS: &str = "ログインしました。";
pub const SIGNUP_SUCCESS: &str = "アカウントを登録しました。ログインページへ移動します。";
pub const INVALID_RESET_LINK: &str =
    "無効なリンクです。パスワード再設定メールのリンクからもう一度アクセスしてください。";

pub const NETWORK_ERROR: &str = "通信エラーが発生しました。時間をおいて再度お試しください。";
pub const SERVER_ERROR_FALLBACK: &str = "エラーが発生しました。時間をおいて再度お試しください。";

pub const GEOLOCATION_FAILED: &str = "現在地を取得できませんでした。";
pub const LOCATION_NOT_FOUND: &str = "場所が見つかりませんでした。";

/// ======================= Map defaults =======================
/// Centre of Japan, used when the caller has no better starting point.
pub const DEFAULT_CENTER_LATITUDE: f64 = 36.2048;
pub const DEFAULT_CENTER_LONGITUDE: f64 = 138.2529;
