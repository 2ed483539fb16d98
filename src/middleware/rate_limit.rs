//! Middleware de Rate Limiting
//!
//! Limitación de velocidad por IP. La variante estricta se aplica al
//! endpoint de login para frenar intentos de fuerza bruta.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado compartido del rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimitState {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self::with_limits(config.rate_limit_requests, config.rate_limit_window)
    }

    /// Límite estricto para endpoints sensibles (login)
    pub fn strict(config: &EnvironmentConfig) -> Self {
        Self::with_limits(
            (config.rate_limit_requests / 10).max(1),
            config.rate_limit_window,
        )
    }

    pub fn with_limits(max_requests: u32, window_secs: u64) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration: Duration::from_secs(window_secs),
        }
    }

    /// Registrar un request y verificar si la IP excedió el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), AppError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if now.duration_since(info.window_start) >= self.window_duration {
            info.requests = 1;
            info.window_start = now;
            return Ok(());
        }

        if info.requests >= self.max_requests {
            return Err(AppError::RateLimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Extraer la IP del cliente (detrás de un proxy usamos x-forwarded-for)
fn client_ip(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .split(',')
        .next()
        .unwrap_or("unknown")
        .trim()
        .to_string()
}

/// Middleware de rate limiting
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(&request);
    rate_limit_state.check_rate_limit(&ip).await?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_requests_allowed_up_to_limit() {
        let state = RateLimitState::with_limits(3, 60);

        for _ in 0..3 {
            assert!(state.check_rate_limit("1.2.3.4").await.is_ok());
        }
        assert!(matches!(
            state.check_rate_limit("1.2.3.4").await,
            Err(AppError::RateLimitExceeded)
        ));
    }

    #[tokio::test]
    async fn test_limits_are_per_ip() {
        let state = RateLimitState::with_limits(1, 60);

        assert!(state.check_rate_limit("1.2.3.4").await.is_ok());
        assert!(state.check_rate_limit("5.6.7.8").await.is_ok());
        assert!(state.check_rate_limit("1.2.3.4").await.is_err());
    }

    #[tokio::test]
    async fn test_strict_state_is_tighter() {
        let config = EnvironmentConfig {
            rate_limit_requests: 100,
            ..EnvironmentConfig::default()
        };
        let strict = RateLimitState::strict(&config);
        assert_eq!(strict.max_requests, 10);
    }
}
