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

//! Resource model in deployment-template (ARM) spelling
//!
//! Field names follow the provider's JSON schema; symbolic values are plain
//! strings produced by [`super::references`].

use crate::infrastructure::arm::references::{sub_resource_id, SubResourceKind};
use serde::{Deserialize, Serialize};

// ============================================================================
// Template envelope
// ============================================================================

/// Template-level attributes shared by every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmResource {
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// Application gateway resource as it appears in the template's `resources` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationGatewayArm {
    #[serde(flatten)]
    pub arm_resource: ArmResource,
    #[serde(flatten)]
    pub application_gateway: ApplicationGateway,
}

impl ApplicationGatewayArm {
    pub fn properties(&self) -> &ApplicationGatewayProperties {
        &self.application_gateway.properties
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationGateway {
    pub location: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub properties: ApplicationGatewayProperties,
}

// ============================================================================
// Gateway properties
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationGatewayProperties {
    pub sku: ApplicationGatewaySku,
    #[serde(rename = "gatewayIPConfigurations")]
    pub gateway_ip_configurations: Vec<GatewayIpConfiguration>,
    #[serde(rename = "frontendIPConfigurations")]
    pub frontend_ip_configurations: Vec<FrontendIpConfiguration>,
    pub frontend_ports: Vec<FrontendPort>,
    pub backend_address_pools: Vec<BackendAddressPool>,
    pub http_listeners: Vec<HttpListener>,
    pub backend_http_settings_collection: Vec<BackendHttpSettings>,
    pub request_routing_rules: Vec<RequestRoutingRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_application_firewall_configuration: Option<WebApplicationFirewallConfiguration>,
}

impl ApplicationGatewayProperties {
    /// Names of the entries held in the collection for `kind`, in list order.
    pub fn entry_names(&self, kind: SubResourceKind) -> Vec<&str> {
        match kind {
            SubResourceKind::GatewayIpConfiguration => names(&self.gateway_ip_configurations),
            SubResourceKind::FrontendIpConfiguration => names(&self.frontend_ip_configurations),
            SubResourceKind::FrontendPort => names(&self.frontend_ports),
            SubResourceKind::BackendAddressPool => names(&self.backend_address_pools),
            SubResourceKind::HttpListener => names(&self.http_listeners),
            SubResourceKind::BackendHttpSettings => {
                names(&self.backend_http_settings_collection)
            }
            SubResourceKind::RequestRoutingRule => names(&self.request_routing_rules),
        }
    }
}

fn names<P>(entries: &[SubResourceEntry<P>]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationGatewaySku {
    pub name: String,
    pub tier: String,
    pub capacity: i32,
}

/// Named child of the gateway; every sub-resource collection holds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResourceEntry<P> {
    pub name: String,
    pub properties: P,
}

impl<P> SubResourceEntry<P> {
    pub fn new(name: impl Into<String>, properties: P) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// Reference to another resource or sub-resource by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResource {
    pub id: String,
}

impl SubResource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Reference to a sibling sub-resource of the same gateway.
    pub fn sibling(kind: SubResourceKind, name: &str) -> Self {
        Self::new(sub_resource_id(kind, name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    Http,
    Https,
}

// ============================================================================
// Sub-resources
// ============================================================================

pub type GatewayIpConfiguration = SubResourceEntry<GatewayIpConfigurationProperties>;
pub type FrontendIpConfiguration = SubResourceEntry<FrontendIpConfigurationProperties>;
pub type FrontendPort = SubResourceEntry<FrontendPortProperties>;
pub type BackendAddressPool = SubResourceEntry<BackendAddressPoolProperties>;
pub type HttpListener = SubResourceEntry<HttpListenerProperties>;
pub type BackendHttpSettings = SubResourceEntry<BackendHttpSettingsProperties>;
pub type RequestRoutingRule = SubResourceEntry<RequestRoutingRuleProperties>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayIpConfigurationProperties {
    pub subnet: SubResource,
}

/// Either bound to a public IP resource or carrying a literal private address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendIpConfigurationProperties {
    #[serde(
        rename = "publicIPAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_ip_address: Option<SubResource>,
    #[serde(
        rename = "privateIPAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub private_ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendPortProperties {
    pub port: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendAddressPoolProperties {
    #[serde(default)]
    pub backend_addresses: Vec<BackendAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpListenerProperties {
    #[serde(rename = "frontendIPConfiguration")]
    pub frontend_ip_configuration: SubResource,
    pub frontend_port: SubResource,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHttpSettingsProperties {
    pub port: i32,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRoutingRuleProperties {
    pub http_listener: SubResource,
    pub backend_address_pool: SubResource,
    pub backend_http_settings: SubResource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirewallMode {
    Detection,
    Prevention,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplicationFirewallConfiguration {
    pub enabled: bool,
    pub firewall_mode: FirewallMode,
}
