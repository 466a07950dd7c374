use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Deployment profile selecting log format and default verbosity.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    /// Human-readable text at debug level
    Local,
    /// JSON at debug level
    Dev,
    /// JSON at info level
    Prod,
}

impl LogProfile {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(self) -> &'static str {
        match self {
            LogProfile::Local | LogProfile::Dev => "sso_service=debug,info",
            LogProfile::Prod => "sso_service=info,warn",
        }
    }

    pub fn json_output(self) -> bool {
        !matches!(self, LogProfile::Local)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the profile's default filter. Call once at startup.
pub fn init_tracing(profile: LogProfile) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

    if profile.json_output() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_formats() {
        assert!(!LogProfile::Local.json_output());
        assert!(LogProfile::Dev.json_output());
        assert!(LogProfile::Prod.json_output());
    }

    #[test]
    fn test_default_filters_parse() {
        for profile in [LogProfile::Local, LogProfile::Dev, LogProfile::Prod] {
            assert!(EnvFilter::try_new(profile.default_filter()).is_ok());
        }
    }
}
