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

use crate::domain::config::cluster::ClusterConfiguration;
use crate::shared::error::{Result, TemplateError};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const ADDONS_PREFIX: &str = "addons.";
const ENABLED_FIELD: &str = "enabled";

/// Parse `key=value` properties given with `-D`.
pub fn parse_dynamic_configs(configs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();

    for config in configs {
        let Some((key, value)) = config.split_once('=') else {
            return Err(TemplateError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(TemplateError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

/// Apply parsed properties to the cluster configuration.
///
/// Understood keys:
/// - `addons.<addon>.enabled=<true|false>`
/// - `addons.<addon>.<option-key>=<value>`
///
/// A missing addon is created enabled. Anything else is logged and skipped.
pub fn apply_to_cluster_config(
    configs: &BTreeMap<String, String>,
    cluster_config: &mut ClusterConfiguration,
) {
    for (key, value) in configs {
        let Some((addon_name, field)) = key
            .strip_prefix(ADDONS_PREFIX)
            .and_then(|rest| rest.split_once('.'))
            .filter(|(addon, field)| !addon.is_empty() && !field.is_empty())
        else {
            warn!("Ignoring unknown dynamic property: {}", key);
            continue;
        };

        let addon = cluster_config.addons_mut().get_or_insert_enabled(addon_name);

        if field == ENABLED_FIELD {
            match value.parse::<bool>() {
                Ok(enabled) => addon.enabled = enabled,
                Err(_) => warn!("Ignoring non-boolean value '{}' for {}", value, key),
            }
        } else {
            debug!("Setting addon option {}.{}={}", addon_name, field, value);
            addon.options.insert(field.to_string(), value.clone());
        }
    }
}
