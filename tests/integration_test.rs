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

#[cfg(test)]
mod tests {
    use appgw_template::infrastructure::arm::*;
    use appgw_template::{synthesize, ClusterConfiguration, GatewayValidator, KubernetesAddon};

    fn cluster_with_appgw_options(options: &[(&str, &str)]) -> ClusterConfiguration {
        let mut addon = KubernetesAddon::enabled("appgw-ingress");
        for (key, value) in options {
            addon = addon.with_option(*key, *value);
        }

        let mut config = ClusterConfiguration::default();
        config.addons_mut().insert(addon);
        config
    }

    fn sub_resource(id: &str) -> SubResource {
        SubResource { id: id.to_string() }
    }

    fn public_frontend() -> FrontendIpConfiguration {
        SubResourceEntry {
            name: "frontendIP".to_string(),
            properties: FrontendIpConfigurationProperties {
                public_ip_address: Some(sub_resource(
                    "[resourceId('Microsoft.Network/publicIpAddresses',variables('appGwPublicIPAddressName'))]",
                )),
                private_ip_address: None,
            },
        }
    }

    /// The gateway every scenario starts from, written out literally.
    fn expected_default_gateway() -> ApplicationGatewayArm {
        ApplicationGatewayArm {
            arm_resource: ArmResource {
                api_version: "[variables('apiVersionNetwork')]".to_string(),
                depends_on: vec![
                    "[concat('Microsoft.Network/publicIPAddresses/', variables('appGwPublicIPAddressName'))]"
                        .to_string(),
                    "[concat('Microsoft.Network/virtualNetworks/', variables('virtualNetworkName'))]"
                        .to_string(),
                ],
            },
            application_gateway: ApplicationGateway {
                location: "[variables('location')]".to_string(),
                name: "[variables('appGwName')]".to_string(),
                resource_type: "Microsoft.Network/applicationGateways".to_string(),
                properties: ApplicationGatewayProperties {
                    sku: ApplicationGatewaySku {
                        name: "[parameters('appGwSku')]".to_string(),
                        tier: "[parameters('appGwSku')]".to_string(),
                        capacity: 2,
                    },
                    gateway_ip_configurations: vec![SubResourceEntry {
                        name: "gatewayIP".to_string(),
                        properties: GatewayIpConfigurationProperties {
                            subnet: sub_resource(
                                "[concat(variables('vnetID'),'/subnets/',variables('appGwSubnetName'))]",
                            ),
                        },
                    }],
                    frontend_ip_configurations: vec![public_frontend()],
                    frontend_ports: vec![SubResourceEntry {
                        name: "httpPort".to_string(),
                        properties: FrontendPortProperties { port: 80 },
                    }],
                    backend_address_pools: vec![SubResourceEntry {
                        name: "pool".to_string(),
                        properties: BackendAddressPoolProperties {
                            backend_addresses: vec![],
                        },
                    }],
                    http_listeners: vec![SubResourceEntry {
                        name: "httpListener".to_string(),
                        properties: HttpListenerProperties {
                            frontend_ip_configuration: sub_resource(
                                "[concat(variables('appGwId'), '/frontendIPConfigurations/frontendIP')]",
                            ),
                            frontend_port: sub_resource(
                                "[concat(variables('appGwId'), '/frontendPorts/httpPort')]",
                            ),
                            protocol: Protocol::Http,
                        },
                    }],
                    backend_http_settings_collection: vec![SubResourceEntry {
                        name: "setting".to_string(),
                        properties: BackendHttpSettingsProperties {
                            port: 80,
                            protocol: Protocol::Http,
                        },
                    }],
                    request_routing_rules: vec![SubResourceEntry {
                        name: "rule".to_string(),
                        properties: RequestRoutingRuleProperties {
                            http_listener: sub_resource(
                                "[concat(variables('appGwId'), '/httpListeners/httpListener')]",
                            ),
                            backend_address_pool: sub_resource(
                                "[concat(variables('appGwId'), '/backendAddressPools/pool')]",
                            ),
                            backend_http_settings: sub_resource(
                                "[concat(variables('appGwId'), '/backendHttpSettingsCollection/setting')]",
                            ),
                        },
                    }],
                    web_application_firewall_configuration: None,
                },
            },
        }
    }

    fn expected_properties_mut(
        gateway: &mut ApplicationGatewayArm,
    ) -> &mut ApplicationGatewayProperties {
        &mut gateway.application_gateway.properties
    }

    #[test]
    fn test_no_addon_yields_default_gateway() {
        let config = ClusterConfiguration::default();
        assert_eq!(synthesize(&config), expected_default_gateway());
    }

    #[test]
    fn test_addon_without_options_yields_default_gateway() {
        let config = cluster_with_appgw_options(&[]);
        assert_eq!(synthesize(&config), expected_default_gateway());
    }

    #[test]
    fn test_private_ip_adds_second_frontend() {
        let config = cluster_with_appgw_options(&[("appgw-private-ip", "10.0.0.1")]);

        let mut expected = expected_default_gateway();
        expected_properties_mut(&mut expected)
            .frontend_ip_configurations
            .push(SubResourceEntry {
                name: "privateIp".to_string(),
                properties: FrontendIpConfigurationProperties {
                    public_ip_address: None,
                    private_ip_address: Some("10.0.0.1".to_string()),
                },
            });

        assert_eq!(synthesize(&config), expected);
    }

    #[test]
    fn test_waf_sku_enables_detection_firewall() {
        let config = cluster_with_appgw_options(&[("appgw-sku", "WAF_v2")]);

        let mut expected = expected_default_gateway();
        expected_properties_mut(&mut expected).web_application_firewall_configuration =
            Some(WebApplicationFirewallConfiguration {
                enabled: true,
                firewall_mode: FirewallMode::Detection,
            });

        let actual = synthesize(&config);
        assert_eq!(actual, expected);
        // SKU stays symbolic even for WAF tiers
        assert_eq!(actual.properties().sku.name, "[parameters('appGwSku')]");
    }

    #[test]
    fn test_non_waf_sku_leaves_firewall_off() {
        let config = cluster_with_appgw_options(&[("appgw-sku", "Standard_v2")]);
        assert_eq!(synthesize(&config), expected_default_gateway());
    }

    #[test]
    fn test_private_ip_and_waf_are_additive() {
        let config = cluster_with_appgw_options(&[
            ("appgw-private-ip", "10.1.2.3"),
            ("appgw-sku", "WAF_Medium"),
        ]);

        let actual = synthesize(&config);
        let props = actual.properties();

        assert_eq!(props.frontend_ip_configurations.len(), 2);
        assert_eq!(props.frontend_ip_configurations[0], public_frontend());
        assert_eq!(
            props.frontend_ip_configurations[1]
                .properties
                .private_ip_address
                .as_deref(),
            Some("10.1.2.3")
        );
        assert_eq!(
            props.web_application_firewall_configuration,
            Some(WebApplicationFirewallConfiguration {
                enabled: true,
                firewall_mode: FirewallMode::Detection,
            })
        );
    }

    #[test]
    fn test_options_on_other_addons_are_ignored() {
        let mut config = ClusterConfiguration::default();
        config.addons_mut().insert(
            KubernetesAddon::enabled("tiller")
                .with_option("appgw-sku", "WAF_v2")
                .with_option("appgw-private-ip", "10.0.0.1"),
        );

        assert_eq!(synthesize(&config), expected_default_gateway());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let config = cluster_with_appgw_options(&[
            ("appgw-private-ip", "10.0.0.1"),
            ("appgw-sku", "WAF_v2"),
        ]);

        let first = synthesize(&config);
        let second = synthesize(&config);
        assert_eq!(first, second);
        assert_eq!(
            render_resource_json(&first, true).unwrap(),
            render_resource_json(&second, true).unwrap()
        );
    }

    #[test]
    fn test_every_reference_resolves_in_all_variants() {
        let variants = [
            cluster_with_appgw_options(&[]),
            cluster_with_appgw_options(&[("appgw-private-ip", "10.0.0.1")]),
            cluster_with_appgw_options(&[("appgw-sku", "WAF_v2")]),
            cluster_with_appgw_options(&[
                ("appgw-private-ip", "10.0.0.1"),
                ("appgw-sku", "WAF_v2"),
            ]),
        ];

        for config in &variants {
            let gateway = synthesize(config);
            let validator = GatewayValidator::new(&gateway);

            assert!(validator.validate().is_ok());

            let checks = validator.reference_checks();
            assert_eq!(checks.len(), 5);
            assert!(checks.iter().all(|c| c.resolved));
        }
    }
}
