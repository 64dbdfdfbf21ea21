use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use mockall::Sequence;
use mockall::mock;
use pretty_assertions::assert_eq;
use serde_json::json;

use shashin::FormMessage;
use shashin::SubmissionState;
use shashin::SubmitOutcome;
use shashin::constants::NETWORK_ERROR;
use shashin::constants::PASSWORD_RESET_REQUEST_PATH;
use shashin::constants::PASSWORD_RESET_REQUEST_SUCCESS;
use shashin::constants::RESET_PASSWORD_SUCCESS;
use shashin::constants::SERVER_ERROR_FALLBACK;
use shashin::error::TransportError;
use shashin::error::ValidationError;
use shashin::form::LoginFields;
use shashin::form::ResetPasswordFields;
use shashin::form::ResetRequestFields;
use shashin::form::SignupFields;
use shashin::testing::GatedHttpClient;
use shashin::testing::StubHttpClient;
use shashin::testing::TestFixtures;
use shashin::transport::HttpClient;
use shashin::transport::HttpRequest;
use shashin::transport::HttpResponse;

mock! {
    pub Http {}

    #[async_trait]
    impl HttpClient for Http {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

fn json_response(status: u16, body: serde_json::Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        body: body.to_string().into_bytes(),
    })
}

fn reset_request_fields(email: &str) -> ResetRequestFields {
    let fields = ResetRequestFields::new();
    fields.email.set(email.to_string());
    fields
}

fn reset_password_fields(password: &str, confirm: &str) -> ResetPasswordFields {
    let fields = ResetPasswordFields::new("reset-token");
    fields.new_password.set(password.to_string());
    fields.confirm_password.set(confirm.to_string());
    fields
}

/// Wait until the controller has entered `Submitting`
async fn until_submitting<F: shashin::form::FormFields>(controller: &shashin::SubmissionController<F>) {
    while !controller.state().is_submitting() {
        tokio::task::yield_now().await;
    }
}

mod reset_request_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_valid_email_issues_exactly_one_json_post() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .withf(|request| {
                let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                request.url == TestFixtures::url(PASSWORD_RESET_REQUEST_PATH)
                    && request.header("Content-Type") == Some("application/json")
                    && body == json!({"email": "user@example.com"})
            })
            .returning(|_| json_response(200, json!({"message": "sent"})));

        let (controller, navigator) = TestFixtures::controller(reset_request_fields("user@example.com"), Arc::new(http));

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(controller.state(), SubmissionState::Success);
        assert_eq!(
            controller.message(),
            Some(FormMessage::Success(PASSWORD_RESET_REQUEST_SUCCESS.to_string()))
        );
        // inputs and the submit button are replaced by the success text
        assert!(!controller.form_visible());
        assert!(navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_is_shown_verbatim_and_form_stays() {
        let client = StubHttpClient::json(400, json!({"message": "X"}));
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client.clone());

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed("X".to_string()));
        assert_eq!(controller.state(), SubmissionState::Failed("X".to_string()));
        assert_eq!(controller.message(), Some(FormMessage::Error("X".to_string())));
        assert!(controller.form_visible());
        assert_eq!(controller.fields().email.get_cloned(), "user@example.com");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let client = StubHttpClient::json(500, json!({"detail": "boom"}));
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client);

        controller.submit().await;

        assert_eq!(
            controller.message(),
            Some(FormMessage::Error(SERVER_ERROR_FALLBACK.to_string()))
        );
    }

    #[tokio::test]
    async fn test_network_failure_shows_generic_text() {
        let client = StubHttpClient::unreachable();
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client);

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(NETWORK_ERROR.to_string()));
        assert_eq!(controller.state().error_message(), Some(NETWORK_ERROR));
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_the_network() {
        let mut http = MockHttp::new();
        http.expect_execute().times(0);

        let (controller, _) = TestFixtures::controller(reset_request_fields("invalid-email"), Arc::new(http));

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::EmailInvalid));
        assert_eq!(
            controller.message(),
            Some(FormMessage::Error(ValidationError::EmailInvalid.to_string()))
        );
    }

    #[tokio::test]
    async fn test_failed_is_not_terminal() {
        let mut sequence = Sequence::new();
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| json_response(429, json!({"message": "しばらくしてから再度お試しください"})));
        http.expect_execute()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| json_response(200, json!({})));

        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), Arc::new(http));

        assert!(matches!(controller.submit().await, SubmitOutcome::Failed(_)));
        assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
        assert_eq!(controller.state(), SubmissionState::Success);
    }
}

mod reset_password_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mismatch_fails_synchronously_without_network() {
        let client = StubHttpClient::json(200, json!({}));
        let (controller, _) = TestFixtures::controller(reset_password_fields("Passw0rd", "Passw0rd2"), client.clone());

        // resolves on first poll: no await point is reached
        let outcome = controller.submit().now_or_never();

        assert_eq!(outcome, Some(SubmitOutcome::Invalid(ValidationError::PasswordMismatch)));
        assert_eq!(
            controller.state(),
            SubmissionState::Failed(ValidationError::PasswordMismatch.to_string())
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_schedules_one_delayed_redirect() {
        let client = StubHttpClient::json(200, json!({"message": "ok"}));
        let (controller, navigator) = TestFixtures::controller(reset_password_fields("Passw0rd", "Passw0rd"), client.clone());

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(
            controller.message(),
            Some(FormMessage::Success(RESET_PASSWORD_SUCCESS.to_string()))
        );
        assert_eq!(navigator.navigations(), vec![("/login".to_string(), Duration::from_secs(3))]);

        let body: serde_json::Value = serde_json::from_slice(&client.requests()[0].body).unwrap();
        assert_eq!(
            body,
            json!({"token": "reset-token", "newPassword": "Passw0rd", "confirmPassword": "Passw0rd"})
        );
    }
}

mod concurrency_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_second_submit_while_pending_is_a_no_op() {
        let (client, gate) = GatedHttpClient::new();
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client.clone());

        let (first, second) = tokio::join!(controller.submit(), async {
            until_submitting(&controller).await;
            let second = controller.submit().await;
            gate.open_json(200, json!({}));
            second
        });

        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(first, SubmitOutcome::Succeeded);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_previous_message_survives_the_submitting_phase() {
        let (client, gate) = GatedHttpClient::new();
        let (controller, _) = TestFixtures::controller(reset_request_fields(""), client.clone());

        assert_eq!(
            controller.submit().await,
            SubmitOutcome::Invalid(ValidationError::EmailRequired)
        );
        let stale = Some(FormMessage::Error(ValidationError::EmailRequired.to_string()));

        controller.fields().email.set("user@example.com".to_string());
        let (outcome, during_flight) = tokio::join!(controller.submit(), async {
            until_submitting(&controller).await;
            let during_flight = controller.message();
            gate.open_json(400, json!({"message": "登録されていないメールアドレスです"}));
            during_flight
        });

        assert_eq!(during_flight, stale);
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(
            controller.message(),
            Some(FormMessage::Error("登録されていないメールアドレスです".to_string()))
        );
    }

    #[tokio::test]
    async fn test_detach_mid_flight_drops_the_response() {
        let (client, gate) = GatedHttpClient::new();
        let (controller, navigator) = TestFixtures::controller(reset_password_fields("Passw0rd", "Passw0rd"), client);

        let (outcome, _) = tokio::join!(controller.submit(), async {
            until_submitting(&controller).await;
            controller.detach();
            gate.open_json(200, json!({}));
        });

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(controller.message(), None);
        assert!(navigator.navigations().is_empty());
        assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_reset_mid_flight_keeps_the_fresh_form() {
        let (client, gate) = GatedHttpClient::new();
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client);

        let (outcome, _) = tokio::join!(controller.submit(), async {
            until_submitting(&controller).await;
            controller.reset();
            gate.open_json(400, json!({"message": "late"}));
        });

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.message(), None);
    }

    #[tokio::test]
    async fn test_reopen_mid_flight_keeps_one_request_outstanding() {
        let (client, gate) = GatedHttpClient::new();
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client.clone());

        let (first, (second, disabled_after_reopen)) = tokio::join!(controller.submit(), async {
            until_submitting(&controller).await;
            controller.set_open(false);
            controller.set_open(true);
            controller.fields().email.set("other@example.com".to_string());

            let disabled_after_reopen = controller.controls_disabled();
            let second = controller.submit().await;
            gate.open_json(200, json!({}));
            (second, disabled_after_reopen)
        });

        assert_eq!(first, SubmitOutcome::Discarded);
        assert_eq!(second, SubmitOutcome::Ignored);
        assert!(disabled_after_reopen);
        assert_eq!(client.call_count(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.controls_disabled());

        // The old request has settled, so the reopened form may send again
        assert_eq!(controller.submit().await, SubmitOutcome::Failed(NETWORK_ERROR.to_string()));
        assert_eq!(client.call_count(), 2);
    }
}

mod lifecycle_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_reopen_after_success_starts_clean() {
        let client = StubHttpClient::json(200, json!({}));
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client);

        controller.submit().await;
        assert!(!controller.form_visible());

        controller.set_open(false);
        controller.set_open(true);

        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.message(), None);
        assert_eq!(controller.fields().email.get_cloned(), "");
        assert!(controller.form_visible());
    }

    #[tokio::test]
    async fn test_reopen_after_failure_starts_clean() {
        let client = StubHttpClient::json(401, json!({"message": "メールアドレスまたはパスワードが違います"}));
        let fields = LoginFields::new();
        fields.email.set("user@example.com".to_string());
        fields.password.set("wrong".to_string());
        let (controller, _) = TestFixtures::controller(fields, client);

        controller.submit().await;
        assert!(controller.message().unwrap().is_error());

        controller.set_open(false);
        controller.set_open(true);

        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.message(), None);
        assert_eq!(controller.fields().email.get_cloned(), "");
        assert_eq!(controller.fields().password.get_cloned(), "");
    }

    #[test]
    fn test_open_without_close_does_not_reset() {
        let client = StubHttpClient::json(200, json!({}));
        let (controller, _) = TestFixtures::controller(reset_request_fields("user@example.com"), client);

        controller.set_open(true);

        assert_eq!(controller.fields().email.get_cloned(), "user@example.com");
    }
}

mod supplemental_flow_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_redirects_home() {
        let client = StubHttpClient::json(200, json!({"token": "jwt"}));
        let fields = LoginFields::new();
        fields.email.set("user@example.com".to_string());
        fields.password.set("anything".to_string());
        let (controller, navigator) = TestFixtures::controller(fields, client.clone());

        assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
        assert_eq!(navigator.navigations(), vec![("/".to_string(), Duration::from_secs(1))]);
        assert_eq!(client.requests()[0].url, TestFixtures::url("/api/v1/auth/login"));
    }

    #[tokio::test]
    async fn test_signup_enforces_the_password_policy() {
        let client = StubHttpClient::json(201, json!({}));
        let fields = SignupFields::new();
        fields.email.set("user@example.com".to_string());
        fields.password.set("password!".to_string());
        fields.confirm_password.set("password!".to_string());
        let (controller, _) = TestFixtures::controller(fields, client.clone());

        assert_eq!(
            controller.submit().await,
            SubmitOutcome::Invalid(ValidationError::PasswordDigit)
        );

        controller.fields().password.set("Passw0rd".to_string());
        controller.fields().confirm_password.set("Passw0rd".to_string());
        assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);

        let body: serde_json::Value = serde_json::from_slice(&client.requests()[0].body).unwrap();
        assert_eq!(
            body,
            json!({"email": "user@example.com", "password": "Passw0rd", "confirmPassword": "Passw0rd"})
        );
    }
}
