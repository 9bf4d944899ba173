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

//! Template expression builders
//!
//! Every symbolic value that ends up in the gateway resource is produced here,
//! so producers and the reference validator agree on one spelling. Values are
//! template-language expressions (`[variables('x')]`, `[concat(...)]`) that the
//! template engine resolves at deployment time.

use crate::infrastructure::constants::VAR_APPGW_ID;
use regex::Regex;
use std::fmt;

/// Sub-resource collections of an application gateway, keyed by the path
/// segment they occupy in a sub-resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubResourceKind {
    GatewayIpConfiguration,
    FrontendIpConfiguration,
    FrontendPort,
    BackendAddressPool,
    HttpListener,
    BackendHttpSettings,
    RequestRoutingRule,
}

impl SubResourceKind {
    pub const ALL: [SubResourceKind; 7] = [
        SubResourceKind::GatewayIpConfiguration,
        SubResourceKind::FrontendIpConfiguration,
        SubResourceKind::FrontendPort,
        SubResourceKind::BackendAddressPool,
        SubResourceKind::HttpListener,
        SubResourceKind::BackendHttpSettings,
        SubResourceKind::RequestRoutingRule,
    ];

    pub fn path_segment(&self) -> &'static str {
        match self {
            SubResourceKind::GatewayIpConfiguration => "gatewayIPConfigurations",
            SubResourceKind::FrontendIpConfiguration => "frontendIPConfigurations",
            SubResourceKind::FrontendPort => "frontendPorts",
            SubResourceKind::BackendAddressPool => "backendAddressPools",
            SubResourceKind::HttpListener => "httpListeners",
            SubResourceKind::BackendHttpSettings => "backendHttpSettingsCollection",
            SubResourceKind::RequestRoutingRule => "requestRoutingRules",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == segment)
    }
}

impl fmt::Display for SubResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// `[variables('name')]`
pub fn variable(name: &str) -> String {
    format!("[variables('{}')]", name)
}

/// `[parameters('name')]`
pub fn parameter(name: &str) -> String {
    format!("[parameters('{}')]", name)
}

/// Dependency on another resource in the same template, as used in `dependsOn`.
pub fn concat_resource(resource_type: &str, name_variable: &str) -> String {
    format!(
        "[concat('{}/', variables('{}'))]",
        resource_type, name_variable
    )
}

/// Fully qualified id of a resource whose name is held in a template variable.
pub fn resource_id(resource_type: &str, name_variable: &str) -> String {
    format!(
        "[resourceId('{}',variables('{}'))]",
        resource_type, name_variable
    )
}

/// Id of a subnet inside the virtual network held in `vnet_id_variable`.
pub fn subnet_id(vnet_id_variable: &str, subnet_name_variable: &str) -> String {
    format!(
        "[concat(variables('{}'),'/subnets/',variables('{}'))]",
        vnet_id_variable, subnet_name_variable
    )
}

/// Id of a sub-resource of the gateway itself:
/// `[concat(variables('appGwId'), '/<kind>/<name>')]`.
pub fn sub_resource_id(kind: SubResourceKind, name: &str) -> String {
    format!(
        "[concat(variables('{}'), '/{}/{}')]",
        VAR_APPGW_ID,
        kind.path_segment(),
        name
    )
}

/// Inverse of [`sub_resource_id`]. Returns `None` for anything not produced by it.
pub fn parse_sub_resource_id(id: &str) -> Option<(SubResourceKind, String)> {
    let pattern = format!(
        r"^\[concat\(variables\('{}'\), '/([A-Za-z]+)/([^'/]+)'\)\]$",
        regex::escape(VAR_APPGW_ID)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(id)?;

    let kind = SubResourceKind::from_path_segment(caps.get(1)?.as_str())?;
    let name = caps.get(2)?.as_str().to_string();
    Some((kind, name))
}
