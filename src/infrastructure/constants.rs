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

/// Addon lookup
pub const APPGW_INGRESS_ADDON_NAME: &str = "appgw-ingress";

/// Recognized addon option keys
pub const OPTION_SKU: &str = "appgw-sku";
pub const OPTION_PRIVATE_IP: &str = "appgw-private-ip";
pub const OPTION_CAPACITY: &str = "appgw-capacity";

/// SKU designation that enables the web application firewall
pub const WAF_TIER_MARKER: &str = "WAF";

/// Resource types
pub const RESOURCE_TYPE_APPLICATION_GATEWAY: &str = "Microsoft.Network/applicationGateways";
pub const RESOURCE_TYPE_PUBLIC_IP_DEPENDENCY: &str = "Microsoft.Network/publicIPAddresses";
pub const RESOURCE_TYPE_PUBLIC_IP_ID: &str = "Microsoft.Network/publicIpAddresses";
pub const RESOURCE_TYPE_VIRTUAL_NETWORK: &str = "Microsoft.Network/virtualNetworks";

/// Template variables
pub const VAR_API_VERSION_NETWORK: &str = "apiVersionNetwork";
pub const VAR_LOCATION: &str = "location";
pub const VAR_APPGW_NAME: &str = "appGwName";
pub const VAR_APPGW_ID: &str = "appGwId";
pub const VAR_APPGW_PUBLIC_IP_NAME: &str = "appGwPublicIPAddressName";
pub const VAR_APPGW_SUBNET_NAME: &str = "appGwSubnetName";
pub const VAR_VNET_ID: &str = "vnetID";
pub const VAR_VIRTUAL_NETWORK_NAME: &str = "virtualNetworkName";

/// Template parameters
pub const PARAM_APPGW_SKU: &str = "appGwSku";

/// SKU defaults
pub const DEFAULT_CAPACITY: i32 = 2;

/// Sub-resource names
pub const GATEWAY_IP_CONFIG_NAME: &str = "gatewayIP";
pub const FRONTEND_IP_CONFIG_NAME: &str = "frontendIP";
pub const PRIVATE_FRONTEND_IP_CONFIG_NAME: &str = "privateIp";
pub const FRONTEND_PORT_NAME: &str = "httpPort";
pub const BACKEND_POOL_NAME: &str = "pool";
pub const HTTP_LISTENER_NAME: &str = "httpListener";
pub const BACKEND_HTTP_SETTINGS_NAME: &str = "setting";
pub const REQUEST_ROUTING_RULE_NAME: &str = "rule";

/// Ports
pub const HTTP_PORT: i32 = 80;
