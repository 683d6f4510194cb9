//! Headless controller for the auth page: two form panels behind mutually
//! exclusive tabs, submitting over an injected transport. Keeping the
//! transport behind a trait lets the flows run against a mock, a test
//! server, or a WASM fetch shim without touching a live document.

use crate::domain::response::AuthResponse;
use crate::domain::user::{LoginRequest, RegisterRequest};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub const DASHBOARD_PATH: &str = "/dashboard";

pub const REGISTER_FIELDS_MISSING: &str = "All fields are required for registration!";
pub const LOGIN_FIELDS_MISSING: &str = "Both phone and password are required!";
pub const REGISTER_SUCCEEDED: &str = "Registration successful! Please login.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Transport for the two auth endpoints.
#[async_trait]
pub trait AuthApi {
    async fn register(&self, req: RegisterRequest) -> Result<AuthResponse>;
    async fn login(&self, req: LoginRequest) -> Result<AuthResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Register,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty after trimming; no request was made.
    Invalid,
    /// The server answered `success: false`; its message is shown verbatim.
    Rejected,
    /// Registration accepted: the form was cleared and the login tab
    /// activated.
    Registered,
    /// Login accepted: the caller should navigate to `redirect`.
    LoggedIn { redirect: &'static str },
    /// The request itself failed. The raw error is logged, not shown.
    TransportFailed,
}

/// State of the auth page: the active tab, the field values of both forms,
/// and the last user-facing notice.
pub struct AuthPanel {
    active_tab: Tab,
    pub reg_name: String,
    pub reg_phone: String,
    pub reg_password: String,
    pub login_phone: String,
    pub login_password: String,
    notice: Option<String>,
}

impl AuthPanel {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Register,
            reg_name: String::new(),
            reg_phone: String::new(),
            reg_password: String::new(),
            login_phone: String::new(),
            login_password: String::new(),
            notice: None,
        }
    }

    /// Activates one tab, deactivating the other.
    pub fn activate_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The message currently shown to the user, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn submit_register(&mut self, api: &impl AuthApi) -> SubmitOutcome {
        let name = self.reg_name.trim().to_string();
        let phone = self.reg_phone.trim().to_string();
        let password = self.reg_password.trim().to_string();

        if name.is_empty() || phone.is_empty() || password.is_empty() {
            self.notice = Some(REGISTER_FIELDS_MISSING.to_string());
            return SubmitOutcome::Invalid;
        }

        let req = RegisterRequest {
            name,
            phone,
            password,
        };
        match api.register(req).await {
            Ok(reply) if reply.success => {
                self.reg_name.clear();
                self.reg_phone.clear();
                self.reg_password.clear();
                self.active_tab = Tab::Login;
                self.notice = Some(REGISTER_SUCCEEDED.to_string());
                SubmitOutcome::Registered
            }
            Ok(reply) => {
                self.notice = Some(reply.message.unwrap_or_default());
                SubmitOutcome::Rejected
            }
            Err(e) => {
                error!(error = %e, "Registration request failed");
                self.notice = Some(GENERIC_FAILURE.to_string());
                SubmitOutcome::TransportFailed
            }
        }
    }

    pub async fn submit_login(&mut self, api: &impl AuthApi) -> SubmitOutcome {
        let phone = self.login_phone.trim().to_string();
        let password = self.login_password.trim().to_string();

        if phone.is_empty() || password.is_empty() {
            self.notice = Some(LOGIN_FIELDS_MISSING.to_string());
            return SubmitOutcome::Invalid;
        }

        let req = LoginRequest { phone, password };
        match api.login(req).await {
            Ok(reply) if reply.success => SubmitOutcome::LoggedIn {
                redirect: DASHBOARD_PATH,
            },
            Ok(reply) => {
                self.notice = Some(reply.message.unwrap_or_default());
                SubmitOutcome::Rejected
            }
            Err(e) => {
                error!(error = %e, "Login request failed");
                self.notice = Some(GENERIC_FAILURE.to_string());
                SubmitOutcome::TransportFailed
            }
        }
    }
}

impl Default for AuthPanel {
    fn default() -> Self {
        Self::new()
    }
}
