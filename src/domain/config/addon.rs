// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Recognized options of the application gateway ingress addon
//!
//! Each key is parsed on its own. A missing, empty or unparsable value means
//! "not requested"; nothing here fails.

use crate::domain::config::cluster::{ClusterConfiguration, KubernetesAddon};
use crate::infrastructure::constants::{
    APPGW_INGRESS_ADDON_NAME, OPTION_CAPACITY, OPTION_PRIVATE_IP, OPTION_SKU, WAF_TIER_MARKER,
};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppGwAddonOptions {
    pub sku: Option<String>,
    pub private_ip: Option<String>,
    pub capacity: Option<i32>,
}

impl AppGwAddonOptions {
    pub fn from_config(config: &ClusterConfiguration) -> Self {
        Self::from_addon(config.addon(APPGW_INGRESS_ADDON_NAME))
    }

    pub fn from_addon(addon: Option<&KubernetesAddon>) -> Self {
        addon
            .map(|a| Self::from_options(&a.options))
            .unwrap_or_default()
    }

    pub fn from_options(options: &BTreeMap<String, String>) -> Self {
        Self {
            sku: non_empty(options, OPTION_SKU),
            private_ip: non_empty(options, OPTION_PRIVATE_IP),
            capacity: parse_capacity(options),
        }
    }

    pub fn is_waf_tier(&self) -> bool {
        self.sku.as_deref().is_some_and(is_waf_sku)
    }

    /// True when no recognized option is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether a SKU name or tier designates a web application firewall tier
/// (`WAF_v2`, `WAF_Medium`, ...).
pub fn is_waf_sku(sku: &str) -> bool {
    sku.to_ascii_uppercase().contains(WAF_TIER_MARKER)
}

// Values are passed through untouched; only the empty string is absent.
fn non_empty(options: &BTreeMap<String, String>, key: &str) -> Option<String> {
    options.get(key).filter(|value| !value.is_empty()).cloned()
}

fn parse_capacity(options: &BTreeMap<String, String>) -> Option<i32> {
    let raw = options
        .get(OPTION_CAPACITY)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())?;
    match raw.parse::<i32>() {
        Ok(capacity) if capacity > 0 => Some(capacity),
        _ => {
            warn!(
                "Ignoring invalid {} value '{}', keeping default capacity",
                OPTION_CAPACITY, raw
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_addon_is_default() {
        let parsed = AppGwAddonOptions::from_addon(None);
        assert!(parsed.is_default());
        assert!(!parsed.is_waf_tier());
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let parsed = AppGwAddonOptions::from_options(&options(&[
            ("appgw-subnet", "10.1.0.0/16"),
            ("appgw-shared", "false"),
        ]));
        assert!(parsed.is_default());
    }

    #[test]
    fn test_waf_detection() {
        assert!(is_waf_sku("WAF_v2"));
        assert!(is_waf_sku("WAF_Medium"));
        assert!(is_waf_sku("waf_v2"));
        assert!(!is_waf_sku("Standard_v2"));
        assert!(!is_waf_sku(""));
    }

    #[test]
    fn test_empty_values_mean_not_requested() {
        let parsed = AppGwAddonOptions::from_options(&options(&[
            ("appgw-sku", ""),
            ("appgw-private-ip", ""),
            ("appgw-capacity", "  "),
        ]));
        assert!(parsed.is_default());
    }

    #[test]
    fn test_whitespace_values_are_kept_literally() {
        let parsed = AppGwAddonOptions::from_options(&options(&[
            ("appgw-sku", " "),
            ("appgw-private-ip", " "),
        ]));
        assert_eq!(parsed.sku.as_deref(), Some(" "));
        assert_eq!(parsed.private_ip.as_deref(), Some(" "));
        assert!(!parsed.is_waf_tier());
    }

    #[test]
    fn test_private_ip_passes_through_literally() {
        let parsed =
            AppGwAddonOptions::from_options(&options(&[("appgw-private-ip", "not-an-ip")]));
        assert_eq!(parsed.private_ip.as_deref(), Some("not-an-ip"));
    }

    #[test]
    fn test_capacity_parsing() {
        let parsed = AppGwAddonOptions::from_options(&options(&[("appgw-capacity", " 5 ")]));
        assert_eq!(parsed.capacity, Some(5));

        for bad in ["0", "-1", "two", "9999999999"] {
            let parsed = AppGwAddonOptions::from_options(&options(&[("appgw-capacity", bad)]));
            assert_eq!(parsed.capacity, None, "accepted {}", bad);
        }
    }
}
