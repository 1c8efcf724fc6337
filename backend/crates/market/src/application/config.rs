//! Application Configuration
//!
//! Configuration for the marketplace application layer. Built once at
//! startup and shared by `Arc`; per-request toggles (maintenance mode,
//! commission override) are read live from `admin_settings`.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::rate_limit::RateLimitConfig;

use crate::domain::repository::SettingsRepository;
use crate::domain::value_objects::CommissionRate;
use crate::error::MarketResult;

/// Admin settings key that overrides the commission percentage
pub const COMMISSION_SETTING_KEY: &str = "commission_rate";

/// Admin settings key for maintenance mode ("1" enables it)
pub const MAINTENANCE_SETTING_KEY: &str = "maintenance_mode";

/// Marketplace application configuration
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Platform commission taken from every sale
    pub commission_rate: CommissionRate,
    /// Flat fee deducted from withdrawals, minor units
    pub withdrawal_fee: i64,
    /// Minimum withdrawal amount, minor units
    pub min_withdrawal: i64,
    /// Maximum withdrawal amount, minor units
    pub max_withdrawal: i64,
    /// Whether sale proceeds are held in escrow until delivery confirmation
    pub escrow_enabled: bool,
    /// Whether sellers must pass KYC before listing
    pub kyc_required: bool,
    /// Whether the affiliate program is active
    pub affiliate_enabled: bool,
    /// Session TTL
    pub session_ttl: Duration,
    /// Failed sign-in attempts before lockout
    pub max_login_attempts: u32,
    /// Lockout duration after too many failed attempts
    pub login_lock_time: Duration,
    /// Rate limit settings for the public API
    pub rate_limit: RateLimitConfig,
    /// Cookie name for the CSRF double-submit token
    pub csrf_cookie_name: String,
    /// Whether to redirect plain-HTTP requests
    pub force_https: bool,
    /// Local port the server listens on; lets the HTTPS check fall back
    /// to port 443 when no forwarded-protocol header is present
    pub listen_port: Option<u16>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            commission_rate: CommissionRate::default(),
            withdrawal_fee: 50,
            min_withdrawal: 1_000,
            max_withdrawal: 500_000,
            escrow_enabled: true,
            kyc_required: false,
            affiliate_enabled: false,
            session_ttl: Duration::from_secs(3600),
            max_login_attempts: 5,
            login_lock_time: Duration::from_secs(900),
            rate_limit: RateLimitConfig::default(),
            csrf_cookie_name: "csrf_token".to_string(),
            force_https: true,
            listen_port: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl MarketConfig {
    /// Create config for development (no HTTPS redirect, insecure cookie)
    pub fn development() -> Self {
        Self {
            force_https: false,
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Overlay startup values from `admin_settings` onto the defaults.
    /// Unset or unparsable settings leave the default in place.
    pub async fn from_settings<S>(base: Self, settings: &S) -> MarketResult<Self>
    where
        S: SettingsRepository,
    {
        let mut config = base;

        if let Some(rate) = settings
            .get_setting(COMMISSION_SETTING_KEY)
            .await?
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(CommissionRate::new)
        {
            config.commission_rate = rate;
        }

        Ok(config)
    }

    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    pub fn login_lock_time_ms(&self) -> i64 {
        self.login_lock_time.as_millis() as i64
    }
}
