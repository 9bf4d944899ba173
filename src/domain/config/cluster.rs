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

//! Cluster configuration as read from a cluster API model
//!
//! Only the parts needed to synthesize the gateway are modelled; every level
//! defaults to empty so partially specified models are accepted.

use crate::shared::error::{Result, TemplateError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

// ============================================================================
// Cluster configuration
// ============================================================================

/// The `properties` object of a cluster API model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterConfiguration {
    pub orchestrator_profile: OrchestratorProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrchestratorProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestrator_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestrator_release: Option<String>,
    pub kubernetes_config: KubernetesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesConfig {
    pub addons: Addons,
}

impl ClusterConfiguration {
    /// Load configuration from a JSON, YAML or TOML file, picked by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = read_to_string(path)?;

        Self::parse(&content, format)
    }

    /// Parse either a full API model (`{ "apiVersion": ..., "properties": {...} }`)
    /// or a bare `properties` object.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let document: ConfigDocument = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };

        Ok(document.into_properties())
    }

    pub fn addons(&self) -> &Addons {
        &self.orchestrator_profile.kubernetes_config.addons
    }

    pub fn addons_mut(&mut self) -> &mut Addons {
        &mut self.orchestrator_profile.kubernetes_config.addons
    }

    pub fn addon(&self, name: &str) -> Option<&KubernetesAddon> {
        self.addons().get(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    ApiModel { properties: ClusterConfiguration },
    Properties(ClusterConfiguration),
}

impl ConfigDocument {
    fn into_properties(self) -> ClusterConfiguration {
        match self {
            ConfigDocument::ApiModel { properties } => properties,
            ConfigDocument::Properties(properties) => properties,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(TemplateError::config_error(format!(
                "Unsupported config file extension (expected .json, .yaml, .yml or .toml): {}",
                path.display()
            ))),
        }
    }
}

// ============================================================================
// Addons
// ============================================================================

/// Addons keyed by name.
///
/// The API model spells addons as a list; duplicates collapse onto the last
/// entry with a given name. Serializing writes the list back in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<KubernetesAddon>", into = "Vec<KubernetesAddon>")]
pub struct Addons(BTreeMap<String, KubernetesAddon>);

impl Addons {
    pub fn get(&self, name: &str) -> Option<&KubernetesAddon> {
        self.0.get(name)
    }

    /// Insert or replace an addon, returning the previous entry.
    pub fn insert(&mut self, addon: KubernetesAddon) -> Option<KubernetesAddon> {
        self.0.insert(addon.name.clone(), addon)
    }

    /// Existing addon, or a freshly enabled one with no options.
    pub fn get_or_insert_enabled(&mut self, name: &str) -> &mut KubernetesAddon {
        self.0
            .entry(name.to_string())
            .or_insert_with(|| KubernetesAddon::enabled(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<KubernetesAddon>> for Addons {
    fn from(addons: Vec<KubernetesAddon>) -> Self {
        Self(
            addons
                .into_iter()
                .map(|addon| (addon.name.clone(), addon))
                .collect(),
        )
    }
}

impl From<Addons> for Vec<KubernetesAddon> {
    fn from(addons: Addons) -> Self {
        addons.0.into_values().collect()
    }
}

/// A named optional cluster feature with a loose string-to-string option map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesAddon {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "config", alias = "options", default)]
    pub options: BTreeMap<String, String>,
}

impl KubernetesAddon {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
            options: BTreeMap::new(),
        }
    }

    pub fn enabled(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_api_model_json() {
        let content = r#"{
            "apiVersion": "vlabs",
            "properties": {
                "orchestratorProfile": {
                    "orchestratorType": "Kubernetes",
                    "kubernetesConfig": {
                        "addons": [
                            {"name": "appgw-ingress", "enabled": true, "config": {"appgw-sku": "WAF_v2"}}
                        ]
                    }
                }
            }
        }"#;

        let conf = ClusterConfiguration::parse(content, ConfigFormat::Json).unwrap();
        let addon = conf.addon("appgw-ingress").unwrap();
        assert!(addon.enabled);
        assert_eq!(addon.option("appgw-sku"), Some("WAF_v2"));
        assert_eq!(
            conf.orchestrator_profile.orchestrator_type.as_deref(),
            Some("Kubernetes")
        );
    }

    #[test]
    fn test_parse_bare_properties_yaml() {
        let content = r#"
orchestratorProfile:
  kubernetesConfig:
    addons:
      - name: appgw-ingress
        enabled: true
        options:
          appgw-private-ip: 10.0.0.1
"#;

        let conf = ClusterConfiguration::parse(content, ConfigFormat::Yaml).unwrap();
        assert_eq!(
            conf.addon("appgw-ingress")
                .and_then(|a| a.option("appgw-private-ip")),
            Some("10.0.0.1")
        );
    }

    #[test]
    fn test_parse_empty_document_yields_default() {
        let conf = ClusterConfiguration::parse("{}", ConfigFormat::Json).unwrap();
        assert_eq!(conf, ClusterConfiguration::default());
        assert!(conf.addons().is_empty());
    }

    #[test]
    fn test_duplicate_addons_keep_last() {
        let addons: Addons = vec![
            KubernetesAddon::enabled("appgw-ingress").with_option("appgw-sku", "Standard_v2"),
            KubernetesAddon::enabled("appgw-ingress").with_option("appgw-sku", "WAF_v2"),
        ]
        .into();

        assert_eq!(addons.len(), 1);
        assert_eq!(
            addons.get("appgw-ingress").and_then(|a| a.option("appgw-sku")),
            Some("WAF_v2")
        );
    }

    #[test]
    fn test_addons_serialize_as_list() {
        let mut conf = ClusterConfiguration::default();
        conf.addons_mut()
            .insert(KubernetesAddon::enabled("appgw-ingress").with_option("appgw-sku", "WAF_v2"));

        let value = serde_json::to_value(&conf).unwrap();
        let addons = &value["orchestratorProfile"]["kubernetesConfig"]["addons"];
        assert!(addons.is_array());
        assert_eq!(addons[0]["name"], "appgw-ingress");
        assert_eq!(addons[0]["config"]["appgw-sku"], "WAF_v2");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConfigFormat::from_path(Path::new("cluster.ini")).unwrap_err();
        assert!(matches!(err, TemplateError::ConfigError(_)));
    }
}
