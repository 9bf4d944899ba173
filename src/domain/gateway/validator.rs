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

use crate::infrastructure::arm::references::{parse_sub_resource_id, SubResourceKind};
use crate::infrastructure::arm::{ApplicationGatewayArm, SubResource};
use crate::shared::error::{Result, TemplateError};

const SINGLETON_KINDS: [SubResourceKind; 6] = [
    SubResourceKind::GatewayIpConfiguration,
    SubResourceKind::FrontendPort,
    SubResourceKind::BackendAddressPool,
    SubResourceKind::HttpListener,
    SubResourceKind::BackendHttpSettings,
    SubResourceKind::RequestRoutingRule,
];

const MAX_FRONTEND_IP_CONFIGURATIONS: usize = 2;

/// One sub-resource reference found in the gateway, with its resolution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCheck {
    pub owner_kind: SubResourceKind,
    pub owner_name: String,
    pub field: &'static str,
    pub expected_kind: SubResourceKind,
    pub id: String,
    pub resolved: bool,
}

/// Structural checks over a synthesized gateway.
pub struct GatewayValidator<'a> {
    gateway: &'a ApplicationGatewayArm,
}

impl<'a> GatewayValidator<'a> {
    pub fn new(gateway: &'a ApplicationGatewayArm) -> Self {
        Self { gateway }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_singletons()?;
        self.validate_frontend_ip_configurations()?;

        if let Some(check) = self.reference_checks().into_iter().find(|c| !c.resolved) {
            return Err(TemplateError::invalid_reference(
                format!("{}/{}.{}", check.owner_kind, check.owner_name, check.field),
                check.id,
            ));
        }

        Ok(())
    }

    /// Every listener and routing-rule reference, in document order.
    pub fn reference_checks(&self) -> Vec<ReferenceCheck> {
        let props = self.gateway.properties();
        let mut checks = Vec::new();

        for listener in &props.http_listeners {
            let p = &listener.properties;
            checks.push(self.check(
                SubResourceKind::HttpListener,
                &listener.name,
                "frontendIPConfiguration",
                SubResourceKind::FrontendIpConfiguration,
                &p.frontend_ip_configuration,
            ));
            checks.push(self.check(
                SubResourceKind::HttpListener,
                &listener.name,
                "frontendPort",
                SubResourceKind::FrontendPort,
                &p.frontend_port,
            ));
        }

        for rule in &props.request_routing_rules {
            let p = &rule.properties;
            checks.push(self.check(
                SubResourceKind::RequestRoutingRule,
                &rule.name,
                "httpListener",
                SubResourceKind::HttpListener,
                &p.http_listener,
            ));
            checks.push(self.check(
                SubResourceKind::RequestRoutingRule,
                &rule.name,
                "backendAddressPool",
                SubResourceKind::BackendAddressPool,
                &p.backend_address_pool,
            ));
            checks.push(self.check(
                SubResourceKind::RequestRoutingRule,
                &rule.name,
                "backendHttpSettings",
                SubResourceKind::BackendHttpSettings,
                &p.backend_http_settings,
            ));
        }

        checks
    }

    fn check(
        &self,
        owner_kind: SubResourceKind,
        owner_name: &str,
        field: &'static str,
        expected_kind: SubResourceKind,
        reference: &SubResource,
    ) -> ReferenceCheck {
        let resolved = match parse_sub_resource_id(&reference.id) {
            Some((kind, name)) if kind == expected_kind => self
                .gateway
                .properties()
                .entry_names(kind)
                .contains(&name.as_str()),
            _ => false,
        };

        ReferenceCheck {
            owner_kind,
            owner_name: owner_name.to_string(),
            field,
            expected_kind,
            id: reference.id.clone(),
            resolved,
        }
    }

    fn validate_singletons(&self) -> Result<()> {
        let props = self.gateway.properties();
        for kind in SINGLETON_KINDS {
            let count = props.entry_names(kind).len();
            if count != 1 {
                return Err(TemplateError::validation_error(format!(
                    "expected exactly one entry in {}, found {}",
                    kind, count
                )));
            }
        }
        Ok(())
    }

    fn validate_frontend_ip_configurations(&self) -> Result<()> {
        let count = self
            .gateway
            .properties()
            .entry_names(SubResourceKind::FrontendIpConfiguration)
            .len();

        if count == 0 || count > MAX_FRONTEND_IP_CONFIGURATIONS {
            return Err(TemplateError::validation_error(format!(
                "expected 1 or {} entries in {}, found {}",
                MAX_FRONTEND_IP_CONFIGURATIONS,
                SubResourceKind::FrontendIpConfiguration,
                count
            )));
        }
        Ok(())
    }
}
