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

use crate::infrastructure::arm::model::{
    ApplicationGateway, ApplicationGatewayArm, ApplicationGatewayProperties, ApplicationGatewaySku,
    ArmResource, BackendAddressPool, BackendAddressPoolProperties, BackendHttpSettings,
    BackendHttpSettingsProperties, FirewallMode, FrontendIpConfiguration,
    FrontendIpConfigurationProperties, FrontendPort, FrontendPortProperties,
    GatewayIpConfiguration, GatewayIpConfigurationProperties, HttpListener,
    HttpListenerProperties, Protocol, RequestRoutingRule, RequestRoutingRuleProperties,
    SubResource, SubResourceEntry, WebApplicationFirewallConfiguration,
};
use crate::infrastructure::arm::references::{
    concat_resource, parameter, resource_id, subnet_id, variable, SubResourceKind,
};
use crate::infrastructure::constants::*;

/// Assembles the gateway resource. The backbone is fixed; only capacity, the
/// private frontend IP and the firewall block vary.
#[derive(Debug, Clone)]
pub struct ApplicationGatewayBuilder {
    capacity: i32,
    private_ip: Option<String>,
    firewall_mode: Option<FirewallMode>,
}

impl Default for ApplicationGatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationGatewayBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            private_ip: None,
            firewall_mode: None,
        }
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_private_ip(mut self, address: impl Into<String>) -> Self {
        self.private_ip = Some(address.into());
        self
    }

    pub fn with_firewall(mut self, mode: FirewallMode) -> Self {
        self.firewall_mode = Some(mode);
        self
    }

    pub fn build(&self) -> ApplicationGatewayArm {
        ApplicationGatewayArm {
            arm_resource: self.build_arm_resource(),
            application_gateway: ApplicationGateway {
                location: variable(VAR_LOCATION),
                name: variable(VAR_APPGW_NAME),
                resource_type: RESOURCE_TYPE_APPLICATION_GATEWAY.to_string(),
                properties: ApplicationGatewayProperties {
                    sku: self.build_sku(),
                    gateway_ip_configurations: self.build_gateway_ip_configurations(),
                    frontend_ip_configurations: self.build_frontend_ip_configurations(),
                    frontend_ports: self.build_frontend_ports(),
                    backend_address_pools: self.build_backend_address_pools(),
                    http_listeners: self.build_http_listeners(),
                    backend_http_settings_collection: self.build_backend_http_settings(),
                    request_routing_rules: self.build_request_routing_rules(),
                    web_application_firewall_configuration: self.build_firewall_configuration(),
                },
            },
        }
    }

    fn build_arm_resource(&self) -> ArmResource {
        ArmResource {
            api_version: variable(VAR_API_VERSION_NETWORK),
            depends_on: vec![
                concat_resource(RESOURCE_TYPE_PUBLIC_IP_DEPENDENCY, VAR_APPGW_PUBLIC_IP_NAME),
                concat_resource(RESOURCE_TYPE_VIRTUAL_NETWORK, VAR_VIRTUAL_NETWORK_NAME),
            ],
        }
    }

    // Name and tier both come from the same template parameter.
    fn build_sku(&self) -> ApplicationGatewaySku {
        ApplicationGatewaySku {
            name: parameter(PARAM_APPGW_SKU),
            tier: parameter(PARAM_APPGW_SKU),
            capacity: self.capacity,
        }
    }

    fn build_gateway_ip_configurations(&self) -> Vec<GatewayIpConfiguration> {
        vec![SubResourceEntry::new(
            GATEWAY_IP_CONFIG_NAME,
            GatewayIpConfigurationProperties {
                subnet: SubResource::new(subnet_id(VAR_VNET_ID, VAR_APPGW_SUBNET_NAME)),
            },
        )]
    }

    fn build_frontend_ip_configurations(&self) -> Vec<FrontendIpConfiguration> {
        let mut configurations = vec![SubResourceEntry::new(
            FRONTEND_IP_CONFIG_NAME,
            FrontendIpConfigurationProperties {
                public_ip_address: Some(SubResource::new(resource_id(
                    RESOURCE_TYPE_PUBLIC_IP_ID,
                    VAR_APPGW_PUBLIC_IP_NAME,
                ))),
                private_ip_address: None,
            },
        )];

        if let Some(address) = &self.private_ip {
            configurations.push(SubResourceEntry::new(
                PRIVATE_FRONTEND_IP_CONFIG_NAME,
                FrontendIpConfigurationProperties {
                    public_ip_address: None,
                    private_ip_address: Some(address.clone()),
                },
            ));
        }

        configurations
    }

    fn build_frontend_ports(&self) -> Vec<FrontendPort> {
        vec![SubResourceEntry::new(
            FRONTEND_PORT_NAME,
            FrontendPortProperties { port: HTTP_PORT },
        )]
    }

    // Addresses are filled in later by the ingress controller.
    fn build_backend_address_pools(&self) -> Vec<BackendAddressPool> {
        vec![SubResourceEntry::new(
            BACKEND_POOL_NAME,
            BackendAddressPoolProperties::default(),
        )]
    }

    fn build_http_listeners(&self) -> Vec<HttpListener> {
        vec![SubResourceEntry::new(
            HTTP_LISTENER_NAME,
            HttpListenerProperties {
                frontend_ip_configuration: SubResource::sibling(
                    SubResourceKind::FrontendIpConfiguration,
                    FRONTEND_IP_CONFIG_NAME,
                ),
                frontend_port: SubResource::sibling(
                    SubResourceKind::FrontendPort,
                    FRONTEND_PORT_NAME,
                ),
                protocol: Protocol::Http,
            },
        )]
    }

    fn build_backend_http_settings(&self) -> Vec<BackendHttpSettings> {
        vec![SubResourceEntry::new(
            BACKEND_HTTP_SETTINGS_NAME,
            BackendHttpSettingsProperties {
                port: HTTP_PORT,
                protocol: Protocol::Http,
            },
        )]
    }

    fn build_request_routing_rules(&self) -> Vec<RequestRoutingRule> {
        vec![SubResourceEntry::new(
            REQUEST_ROUTING_RULE_NAME,
            RequestRoutingRuleProperties {
                http_listener: SubResource::sibling(
                    SubResourceKind::HttpListener,
                    HTTP_LISTENER_NAME,
                ),
                backend_address_pool: SubResource::sibling(
                    SubResourceKind::BackendAddressPool,
                    BACKEND_POOL_NAME,
                ),
                backend_http_settings: SubResource::sibling(
                    SubResourceKind::BackendHttpSettings,
                    BACKEND_HTTP_SETTINGS_NAME,
                ),
            },
        )]
    }

    fn build_firewall_configuration(&self) -> Option<WebApplicationFirewallConfiguration> {
        self.firewall_mode
            .map(|firewall_mode| WebApplicationFirewallConfiguration {
                enabled: true,
                firewall_mode,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_has_single_backbone() {
        let gateway = ApplicationGatewayBuilder::new().build();
        let props = gateway.properties();

        assert_eq!(props.sku.capacity, 2);
        assert_eq!(props.gateway_ip_configurations.len(), 1);
        assert_eq!(props.frontend_ip_configurations.len(), 1);
        assert_eq!(props.frontend_ports.len(), 1);
        assert_eq!(props.backend_address_pools.len(), 1);
        assert_eq!(props.http_listeners.len(), 1);
        assert_eq!(props.backend_http_settings_collection.len(), 1);
        assert_eq!(props.request_routing_rules.len(), 1);
        assert!(props.web_application_firewall_configuration.is_none());
        assert!(props.backend_address_pools[0]
            .properties
            .backend_addresses
            .is_empty());
    }

    #[test]
    fn test_private_ip_is_appended_after_public() {
        let gateway = ApplicationGatewayBuilder::new()
            .with_private_ip("10.240.255.10")
            .build();
        let frontends = &gateway.properties().frontend_ip_configurations;

        assert_eq!(frontends.len(), 2);
        assert_eq!(frontends[0].name, "frontendIP");
        assert!(frontends[0].properties.public_ip_address.is_some());
        assert_eq!(frontends[1].name, "privateIp");
        assert_eq!(
            frontends[1].properties.private_ip_address.as_deref(),
            Some("10.240.255.10")
        );
        assert!(frontends[1].properties.public_ip_address.is_none());
    }

    #[test]
    fn test_firewall_and_capacity() {
        let gateway = ApplicationGatewayBuilder::new()
            .with_capacity(4)
            .with_firewall(FirewallMode::Prevention)
            .build();
        let props = gateway.properties();

        assert_eq!(props.sku.capacity, 4);
        assert_eq!(
            props.web_application_firewall_configuration,
            Some(WebApplicationFirewallConfiguration {
                enabled: true,
                firewall_mode: FirewallMode::Prevention,
            })
        );
    }
}
