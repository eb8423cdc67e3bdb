// src/config.rs - Deployment-time configuration
//
// The owner and both policies are fixed when the contract is constructed.

use alloc::string::{String, ToString};
use core::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the owner address (hex, `0x`-prefixed).
pub const ENV_OWNER: &str = "SIMPLE_TOKEN_OWNER";
/// Environment variable selecting the [`ReinitializePolicy`].
pub const ENV_REINITIALIZE: &str = "SIMPLE_TOKEN_REINITIALIZE";
/// Environment variable selecting the [`BurnAuthority`].
pub const ENV_BURN_AUTHORITY: &str = "SIMPLE_TOKEN_BURN_AUTHORITY";

/// Error raised while building a [`TokenConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// What `initialize` does when the ledger is already live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReinitializePolicy {
    /// Replace the ledger with a fresh state holding the new supply.
    #[default]
    Overwrite,
    /// Initialization is one-time; later calls fail with `AlreadyInitialized`.
    Reject,
}

impl FromStr for ReinitializePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::Invalid {
                key: ENV_REINITIALIZE,
                value: other.to_string(),
            }),
        }
    }
}

/// Who may burn a holder's balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BurnAuthority {
    /// Only the holder may burn its own balance.
    #[default]
    Holder,
    /// The holder, or the owner acting on any account.
    HolderOrOwner,
}

impl FromStr for BurnAuthority {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "holder" => Ok(Self::Holder),
            "holder-or-owner" => Ok(Self::HolderOrOwner),
            other => Err(ConfigError::Invalid {
                key: ENV_BURN_AUTHORITY,
                value: other.to_string(),
            }),
        }
    }
}

/// Contract configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub owner: Address,
    #[serde(default)]
    pub reinitialize: ReinitializePolicy,
    #[serde(default)]
    pub burn_authority: BurnAuthority,
}

impl TokenConfig {
    /// Creates a configuration with default policies.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            reinitialize: ReinitializePolicy::default(),
            burn_authority: BurnAuthority::default(),
        }
    }

    pub fn with_reinitialize(mut self, policy: ReinitializePolicy) -> Self {
        self.reinitialize = policy;
        self
    }

    pub fn with_burn_authority(mut self, authority: BurnAuthority) -> Self {
        self.burn_authority = authority;
        self
    }

    /// Loads the configuration from the process environment, reading a
    /// `.env` file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_owner = lookup(ENV_OWNER).ok_or(ConfigError::Missing(ENV_OWNER))?;
        let owner = Address::from_str(raw_owner.trim()).map_err(|_| ConfigError::Invalid {
            key: ENV_OWNER,
            value: raw_owner.clone(),
        })?;

        let mut config = Self::new(owner);
        if let Some(raw) = lookup(ENV_REINITIALIZE) {
            config.reinitialize = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_BURN_AUTHORITY) {
            config.burn_authority = raw.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const OWNER_HEX: &str = "0x0101010101010101010101010101010101010101";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TokenConfig::new(Address::from([1u8; 20]));
        assert_eq!(config.reinitialize, ReinitializePolicy::Overwrite);
        assert_eq!(config.burn_authority, BurnAuthority::Holder);
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            (ENV_OWNER, OWNER_HEX),
            (ENV_REINITIALIZE, "Reject"),
            (ENV_BURN_AUTHORITY, "holder-or-owner"),
        ]))
        .unwrap();

        assert_eq!(config.owner, Address::from([1u8; 20]));
        assert_eq!(config.reinitialize, ReinitializePolicy::Reject);
        assert_eq!(config.burn_authority, BurnAuthority::HolderOrOwner);
    }

    #[test]
    fn test_from_lookup_requires_owner() {
        let err = TokenConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_OWNER));
    }

    #[test]
    fn test_from_lookup_rejects_bad_owner() {
        let err = TokenConfig::from_lookup(lookup_from(&[(ENV_OWNER, "not-an-address")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_OWNER, .. }));
    }

    #[test]
    fn test_from_lookup_rejects_unknown_policy() {
        let err = TokenConfig::from_lookup(lookup_from(&[
            (ENV_OWNER, OWNER_HEX),
            (ENV_REINITIALIZE, "sometimes"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: ENV_REINITIALIZE,
                value: "sometimes".to_string(),
            }
        );
    }
}
