use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::quiz::config::{AnswerPolicy, CompletionTimeFallback, QuizConfig};

/// Deployment stage; development keeps ANSI colours in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the quiz service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub quiz: QuizConfig,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Reads `.env` (when present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));
        let server = ServerConfig::from_env()?;
        let telemetry = TelemetryConfig {
            log_level: var_or("APP_LOG_LEVEL", "info"),
            ansi: environment == AppEnvironment::Development,
        };

        Ok(Self {
            environment,
            server,
            telemetry,
            quiz: quiz_from_env()?,
        })
    }
}

fn quiz_from_env() -> Result<QuizConfig, ConfigError> {
    let answer_policy = match env::var("QUIZ_ANSWER_POLICY") {
        Ok(raw) => AnswerPolicy::parse(&raw).ok_or(ConfigError::InvalidAnswerPolicy(raw))?,
        Err(_) => AnswerPolicy::default(),
    };

    let completion_time_fallback = match env::var("QUIZ_COMPLETION_FALLBACK_SECS") {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(seconds) => CompletionTimeFallback::Fixed(seconds),
            Err(_) => return Err(ConfigError::InvalidCompletionFallback(raw)),
        },
        Err(_) => CompletionTimeFallback::Random,
    };

    Ok(QuizConfig {
        answer_policy,
        completion_time_fallback,
    })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_port = var_or("APP_PORT", "3000");
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port))?;

        Ok(Self {
            host: var_or("APP_HOST", "127.0.0.1"),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter and output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

impl TelemetryConfig {
    /// A bare level such as `debug` only applies to this workspace's crates;
    /// anything else is treated as a full filter directive.
    pub fn filter_directive(&self) -> String {
        let level = self.log_level.trim();
        let is_bare_level = matches!(
            level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        );

        if is_bare_level {
            format!("warn,career_quiz={level},career_quiz_api={level}")
        } else {
            level.to_string()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost { source: std::net::AddrParseError },
    InvalidAnswerPolicy(String),
    InvalidCompletionFallback(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "APP_PORT must be a port number (got '{raw}')")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidAnswerPolicy(raw) => write!(
                f,
                "QUIZ_ANSWER_POLICY must be 'lenient' or 'strict' (got '{raw}')"
            ),
            ConfigError::InvalidCompletionFallback(raw) => write!(
                f,
                "QUIZ_COMPLETION_FALLBACK_SECS must be a whole number of seconds (got '{raw}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort(_)
            | ConfigError::InvalidAnswerPolicy(_)
            | ConfigError::InvalidCompletionFallback(_) => None,
        }
    }
}
