//! Gateway template commands

use crate::cli::display::TableRenderer;
use crate::domain::config::{apply_to_cluster_config, parse_dynamic_configs, ClusterConfiguration};
use crate::domain::gateway::{synthesize, GatewayValidator};
use crate::infrastructure::arm::{render_resource_json, write_resource_json, ApplicationGatewayArm};
use crate::infrastructure::constants::{
    APPGW_INGRESS_ADDON_NAME, OPTION_CAPACITY, OPTION_PRIVATE_IP, OPTION_SKU,
};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Inputs shared by every gateway command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GatewayInputArgs {
    /// Path to the cluster API model (.json, .yaml, .yml or .toml)
    /// If not provided, an empty cluster configuration is used
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Dynamic configuration properties (-D key=value)
    ///
    /// Addons: addons.<addon>.enabled, addons.<addon>.<option-key>
    ///
    /// Example: -Daddons.appgw-ingress.appgw-sku=WAF_v2
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Gateway SKU (sets the appgw-sku addon option)
    #[arg(long)]
    pub sku: Option<String>,

    /// Private frontend IP address (sets the appgw-private-ip addon option)
    #[arg(long)]
    pub private_ip: Option<String>,

    /// Gateway instance count (sets the appgw-capacity addon option)
    #[arg(long)]
    pub capacity: Option<i32>,
}

impl GatewayInputArgs {
    /// Resolve the cluster configuration.
    /// Priority: flags > -D properties > config file
    pub fn load_cluster_config(&self) -> anyhow::Result<ClusterConfiguration> {
        let mut cluster_config = match &self.config_file {
            Some(path) => {
                info!("Loading cluster configuration from {}", path.display());
                ClusterConfiguration::from_file(path).map_err(|e| {
                    anyhow::anyhow!("Failed to load config file {}: {}", path.display(), e)
                })?
            }
            None => {
                info!("No configuration file specified, using an empty cluster configuration");
                ClusterConfiguration::default()
            }
        };

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_cluster_config(&dynamic_configs, &mut cluster_config);
        }

        let flag_configs = self.flag_overrides();
        if !flag_configs.is_empty() {
            apply_to_cluster_config(&flag_configs, &mut cluster_config);
        }

        Ok(cluster_config)
    }

    fn flag_overrides(&self) -> BTreeMap<String, String> {
        let key = |option: &str| format!("addons.{}.{}", APPGW_INGRESS_ADDON_NAME, option);
        let mut configs = BTreeMap::new();

        if let Some(sku) = &self.sku {
            configs.insert(key(OPTION_SKU), sku.clone());
        }
        if let Some(private_ip) = &self.private_ip {
            configs.insert(key(OPTION_PRIVATE_IP), private_ip.clone());
        }
        if let Some(capacity) = self.capacity {
            configs.insert(key(OPTION_CAPACITY), capacity.to_string());
        }

        configs
    }

    fn synthesize(&self) -> anyhow::Result<ApplicationGatewayArm> {
        let cluster_config = self.load_cluster_config()?;
        Ok(synthesize(&cluster_config))
    }
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: GatewayInputArgs,

    /// Write the resource to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl GenerateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let gateway = self.input.synthesize()?;

        GatewayValidator::new(&gateway)
            .validate()
            .map_err(|e| anyhow::anyhow!("Synthesized gateway failed validation: {}", e))?;

        let pretty = !self.compact;
        match &self.output {
            Some(path) => {
                write_resource_json(&gateway, path, pretty)
                    .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
                info!("Application gateway resource written to {}", path.display());
            }
            None => {
                let json = render_resource_json(&gateway, pretty)?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InspectCommand {
    #[command(flatten)]
    pub input: GatewayInputArgs,
}

impl InspectCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let gateway = self.input.synthesize()?;
        let checks = GatewayValidator::new(&gateway).reference_checks();

        let renderer = TableRenderer::new();
        print!("{}", renderer.render_gateway_summary(&gateway, &checks));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppGwAddonOptions;

    #[test]
    fn test_no_inputs_yield_empty_configuration() {
        let args = GatewayInputArgs::default();
        let config = args.load_cluster_config().unwrap();
        assert!(config.addons().is_empty());
    }

    #[test]
    fn test_flags_override_dynamic_properties() {
        let args = GatewayInputArgs {
            properties: vec![
                "addons.appgw-ingress.appgw-sku=Standard_v2".to_string(),
                "addons.appgw-ingress.appgw-private-ip=10.0.0.4".to_string(),
            ],
            sku: Some("WAF_v2".to_string()),
            capacity: Some(3),
            ..Default::default()
        };

        let config = args.load_cluster_config().unwrap();
        let options = AppGwAddonOptions::from_config(&config);
        assert_eq!(options.sku.as_deref(), Some("WAF_v2"));
        assert_eq!(options.private_ip.as_deref(), Some("10.0.0.4"));
        assert_eq!(options.capacity, Some(3));
    }

    #[test]
    fn test_invalid_dynamic_property_is_rejected() {
        let args = GatewayInputArgs {
            properties: vec!["no-equals-sign".to_string()],
            ..Default::default()
        };
        assert!(args.load_cluster_config().is_err());
    }

    #[test]
    fn test_generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appgw.json");
        let cmd = GenerateCommand {
            input: GatewayInputArgs {
                private_ip: Some("10.0.0.1".to_string()),
                ..Default::default()
            },
            output: Some(path.clone()),
            compact: true,
        };

        cmd.execute().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"privateIPAddress\":\"10.0.0.1\""));
    }
}
