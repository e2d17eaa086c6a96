//! HTTP layer: shared state, token authentication, error responses, route registration.

mod handlers;

use crate::config::UserAccount;
use crate::logic::{is_permitted, Action, Resource, Role};
use crate::models::{BtmsError, Registry};
use actix_web::{
    http::{header, StatusCode},
    web::{Data, ServiceConfig},
    HttpRequest, HttpResponse, ResponseError,
};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// A logged-in account, keyed by its token.
#[derive(Clone, Debug)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

/// In-memory server state: the registry, live sessions, and configured accounts.
pub struct AppState {
    registry: RwLock<Registry>,
    sessions: RwLock<HashMap<Uuid, Session>>,
    accounts: Vec<UserAccount>,
}

pub type SharedState = Data<AppState>;

impl AppState {
    pub fn new(registry: Registry, accounts: Vec<UserAccount>) -> Self {
        Self {
            registry: RwLock::new(registry),
            sessions: RwLock::new(HashMap::new()),
            accounts,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>, ApiError> {
        self.registry.read().map_err(|_| ApiError::Lock)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>, ApiError> {
        self.registry.write().map_err(|_| ApiError::Lock)
    }

    /// Check credentials and open a session. Returns the new token.
    fn login(&self, username: &str, password: &str) -> Result<Uuid, ApiError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or_else(|| {
                log::warn!("Rejected login for {:?}", username);
                ApiError::BadRequest("Unable to log in with provided credentials".to_string())
            })?;
        let token = Uuid::new_v4();
        self.sessions.write().map_err(|_| ApiError::Lock)?.insert(
            token,
            Session {
                username: account.username.clone(),
                role: account.role,
            },
        );
        log::info!("{} logged in", account.username);
        Ok(token)
    }

    fn logout(&self, token: Uuid) -> Result<(), ApiError> {
        let removed = self
            .sessions
            .write()
            .map_err(|_| ApiError::Lock)?
            .remove(&token);
        if let Some(session) = removed {
            log::info!("{} logged out", session.username);
        }
        Ok(())
    }

    /// Session for the request's `Authorization: Token <uuid>` header.
    fn session(&self, req: &HttpRequest) -> Result<(Uuid, Session), ApiError> {
        let token = request_token(req).ok_or(ApiError::Unauthorized)?;
        let sessions = self.sessions.read().map_err(|_| ApiError::Lock)?;
        match sessions.get(&token) {
            Some(session) => Ok((token, session.clone())),
            None => {
                log::warn!("Unknown token on {}", req.path());
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Authenticate the request and check the caller's role may do `action` on `resource`.
    fn authorize(
        &self,
        req: &HttpRequest,
        resource: Resource,
        action: Action,
    ) -> Result<Session, ApiError> {
        let (_, session) = self.session(req)?;
        if !is_permitted(session.role, resource, action) {
            log::warn!(
                "{} ({:?}) may not {:?} {:?}",
                session.username,
                session.role,
                action,
                resource
            );
            return Err(ApiError::Forbidden);
        }
        Ok(session)
    }
}

fn request_token(req: &HttpRequest) -> Option<Uuid> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.trim().strip_prefix("Token ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Forbidden,
    BadRequest(String),
    Domain(BtmsError),
    Lock,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Authentication credentials were not provided"),
            ApiError::Forbidden => write!(f, "You do not have permission to perform this action"),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::Lock => write!(f, "lock error"),
        }
    }
}

impl From<BtmsError> for ApiError {
    fn from(e: BtmsError) -> Self {
        ApiError::Domain(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e {
                BtmsError::InvalidArgument(_) | BtmsError::InvalidBracketState(_) => {
                    StatusCode::BAD_REQUEST
                }
                BtmsError::NotFound { .. } => StatusCode::NOT_FOUND,
                BtmsError::Restricted { .. } => StatusCode::CONFLICT,
            },
            ApiError::Lock => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Register every API route.
pub fn configure(cfg: &mut ServiceConfig) {
    handlers::register(cfg);
}
