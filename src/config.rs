//! # Service Configuration
//!
//! [`DeliveryConfig`] holds the few knobs the service has: the actor's mailbox
//! capacity and the window of delivery hours orders may request.
//!
//! Values come from [`Default`], from any serde format, or from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `DELIVERY_MAILBOX_CAPACITY` | `mailbox_capacity` | 32 |
//! | `DELIVERY_OPENING_HOUR` | `opening_hour` | 8 |
//! | `DELIVERY_CLOSING_HOUR` | `closing_hour` | 23 |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

pub const MAILBOX_CAPACITY_VAR: &str = "DELIVERY_MAILBOX_CAPACITY";
pub const OPENING_HOUR_VAR: &str = "DELIVERY_OPENING_HOUR";
pub const CLOSING_HOUR_VAR: &str = "DELIVERY_CLOSING_HOUR";

/// Errors raised while loading or validating a [`DeliveryConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Mailbox capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Invalid delivery window: {opening}..={closing}")]
    InvalidWindow { opening: u8, closing: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Capacity of the service actor's request channel.
    pub mailbox_capacity: usize,
    /// First hour of the day an order may be delivered at.
    pub opening_hour: u8,
    /// Last hour of the day an order may be delivered at.
    pub closing_hour: u8,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            opening_hour: 8,
            closing_hour: 23,
        }
    }
}

impl DeliveryConfig {
    /// Loads the defaults overlaid with the `DELIVERY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(capacity) = parse_var(&lookup, MAILBOX_CAPACITY_VAR)? {
            config.mailbox_capacity = capacity;
        }
        if let Some(hour) = parse_var(&lookup, OPENING_HOUR_VAR)? {
            config.opening_hour = hour;
        }
        if let Some(hour) = parse_var(&lookup, CLOSING_HOUR_VAR)? {
            config.closing_hour = hour;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.opening_hour > self.closing_hour || self.closing_hour > 23 {
            return Err(ConfigError::InvalidWindow {
                opening: self.opening_hour,
                closing: self.closing_hour,
            });
        }
        Ok(())
    }

    /// Hours an order may request, limits included.
    pub fn delivery_hours(&self) -> RangeInclusive<u8> {
        self.opening_hour..=self.closing_hour
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed.map(Some).map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeliveryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DeliveryConfig::default());
        assert_eq!(config.delivery_hours(), 8..=23);
    }

    #[test]
    fn test_overrides() {
        let config = DeliveryConfig::from_lookup(lookup(&[
            (MAILBOX_CAPACITY_VAR, "4"),
            (OPENING_HOUR_VAR, " 10 "),
            (CLOSING_HOUR_VAR, "20"),
        ]))
        .unwrap();
        assert_eq!(config.mailbox_capacity, 4);
        assert_eq!(config.delivery_hours(), 10..=20);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = DeliveryConfig::from_lookup(lookup(&[(OPENING_HOUR_VAR, "noon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: OPENING_HOUR_VAR.to_string(),
                value: "noon".to_string(),
            }
        );
    }

    #[test]
    fn test_validate() {
        let zero = DeliveryConfig {
            mailbox_capacity: 0,
            ..DeliveryConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroCapacity));

        let inverted = DeliveryConfig {
            opening_hour: 22,
            closing_hour: 9,
            ..DeliveryConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvalidWindow { opening: 22, closing: 9 })
        );

        let past_midnight = DeliveryConfig {
            closing_hour: 24,
            ..DeliveryConfig::default()
        };
        assert!(past_midnight.validate().is_err());
    }
}
