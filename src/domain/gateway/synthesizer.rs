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

use crate::domain::config::{AppGwAddonOptions, ClusterConfiguration};
use crate::infrastructure::arm::{ApplicationGatewayArm, ApplicationGatewayBuilder, FirewallMode};
use tracing::debug;

/// Build the application gateway resource for a cluster.
///
/// Total and deterministic: equal inputs give equal trees. Without the
/// gateway ingress addon, or without recognized options on it, the result is
/// the default single-frontend gateway with no firewall block.
pub fn synthesize(config: &ClusterConfiguration) -> ApplicationGatewayArm {
    let options = AppGwAddonOptions::from_config(config);
    synthesize_with_options(&options)
}

pub fn synthesize_with_options(options: &AppGwAddonOptions) -> ApplicationGatewayArm {
    let mut builder = ApplicationGatewayBuilder::new();

    if let Some(capacity) = options.capacity {
        debug!("Overriding gateway capacity: {}", capacity);
        builder = builder.with_capacity(capacity);
    }

    if let Some(address) = &options.private_ip {
        debug!("Adding private frontend IP configuration: {}", address);
        builder = builder.with_private_ip(address.as_str());
    }

    // Private IP and firewall are independent; both may apply.
    if options.is_waf_tier() {
        debug!(
            "SKU {:?} is a WAF tier, enabling firewall in detection mode",
            options.sku
        );
        builder = builder.with_firewall(FirewallMode::Detection);
    }

    builder.build()
}
