//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::gateway::ReferenceCheck;
use crate::infrastructure::arm::{ApplicationGatewayArm, SubResourceKind};
use chrono::{DateTime, Local};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the gateway summary stamped with the current local time
    pub fn render_gateway_summary(
        &self,
        gateway: &ApplicationGatewayArm,
        checks: &[ReferenceCheck],
    ) -> String {
        self.render_gateway_summary_at(gateway, checks, Local::now())
    }

    /// Render sub-resources, optional features and reference status
    pub fn render_gateway_summary_at(
        &self,
        gateway: &ApplicationGatewayArm,
        checks: &[ReferenceCheck],
        generated_at: DateTime<Local>,
    ) -> String {
        let entry_count: usize = SubResourceKind::ALL
            .iter()
            .map(|kind| gateway.properties().entry_names(*kind).len())
            .sum();
        let dangling = checks.iter().filter(|c| !c.resolved).count();

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Application Gateway {} ─╮\n",
            format!("[{} sub-resources]", entry_count).bright_black()
        ));
        output.push_str(&self.render_features(gateway).to_string());
        output.push('\n');
        output.push_str(&self.render_sub_resources(gateway).to_string());
        output.push('\n');
        output.push_str(&self.render_references(checks).to_string());
        output.push('\n');

        let summary = if dangling == 0 {
            format!("{} all {} references resolved", StatusIcon::SUCCESS, checks.len())
                .green()
                .to_string()
        } else {
            format!("{} {} dangling reference(s)", StatusIcon::ERROR, dangling)
                .red()
                .to_string()
        };
        output.push_str(&format!(
            "{}  (generated {})\n",
            summary,
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        output
    }

    fn render_features(&self, gateway: &ApplicationGatewayArm) -> Table {
        let props = gateway.properties();
        let firewall = props.web_application_firewall_configuration.as_ref();
        let private_ip = props
            .frontend_ip_configurations
            .iter()
            .find_map(|f| f.properties.private_ip_address.as_deref());

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("FEATURE").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
                Cell::new("VALUE").set_alignment(CellAlignment::Left),
            ]);

        table.add_row(vec![
            Cell::new("SKU"),
            Cell::new(StatusIcon::SUCCESS).fg(self.theme.success),
            Cell::new(format!(
                "{} (capacity {})",
                props.sku.name, props.sku.capacity
            )),
        ]);
        table.add_row(vec![
            Cell::new("Web application firewall"),
            Cell::new(StatusIcon::get_feature_icon(firewall.is_some()))
                .fg(self.theme.get_feature_color(firewall.is_some())),
            Cell::new(
                firewall
                    .map(|waf| format!("{:?}", waf.firewall_mode))
                    .unwrap_or_else(|| "disabled".to_string()),
            ),
        ]);
        table.add_row(vec![
            Cell::new("Private frontend IP"),
            Cell::new(StatusIcon::get_feature_icon(private_ip.is_some()))
                .fg(self.theme.get_feature_color(private_ip.is_some())),
            Cell::new(private_ip.unwrap_or("none")),
        ]);

        table
    }

    fn render_sub_resources(&self, gateway: &ApplicationGatewayArm) -> Table {
        let props = gateway.properties();

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("COLLECTION").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("DETAILS").set_alignment(CellAlignment::Left),
            ]);

        for entry in &props.gateway_ip_configurations {
            table.add_row(row(
                SubResourceKind::GatewayIpConfiguration,
                &entry.name,
                format!("subnet {}", entry.properties.subnet.id),
            ));
        }
        for entry in &props.frontend_ip_configurations {
            let details = match (
                &entry.properties.public_ip_address,
                &entry.properties.private_ip_address,
            ) {
                (Some(public), _) => format!("public {}", public.id),
                (None, Some(private)) => format!("private {}", private),
                (None, None) => "unbound".to_string(),
            };
            table.add_row(row(
                SubResourceKind::FrontendIpConfiguration,
                &entry.name,
                details,
            ));
        }
        for entry in &props.frontend_ports {
            table.add_row(row(
                SubResourceKind::FrontendPort,
                &entry.name,
                format!("port {}", entry.properties.port),
            ));
        }
        for entry in &props.backend_address_pools {
            table.add_row(row(
                SubResourceKind::BackendAddressPool,
                &entry.name,
                format!("{} addresses", entry.properties.backend_addresses.len()),
            ));
        }
        for entry in &props.http_listeners {
            table.add_row(row(
                SubResourceKind::HttpListener,
                &entry.name,
                format!("{:?}", entry.properties.protocol),
            ));
        }
        for entry in &props.backend_http_settings_collection {
            table.add_row(row(
                SubResourceKind::BackendHttpSettings,
                &entry.name,
                format!(
                    "{:?} port {}",
                    entry.properties.protocol, entry.properties.port
                ),
            ));
        }
        for entry in &props.request_routing_rules {
            table.add_row(row(
                SubResourceKind::RequestRoutingRule,
                &entry.name,
                "listener → pool via settings".to_string(),
            ));
        }

        table
    }

    fn render_references(&self, checks: &[ReferenceCheck]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("OWNER").set_alignment(CellAlignment::Left),
                Cell::new("FIELD").set_alignment(CellAlignment::Left),
                Cell::new("TARGET").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
            ]);

        for check in checks {
            table.add_row(vec![
                Cell::new(format!("{}/{}", check.owner_kind, check.owner_name)),
                Cell::new(check.field),
                Cell::new(&check.id).fg(Color::Cyan),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_reference_icon(check.resolved),
                    StatusIcon::get_reference_text(check.resolved)
                ))
                .fg(self.theme.get_reference_color(check.resolved)),
            ]);
        }

        table
    }
}

fn row(kind: SubResourceKind, name: &str, details: String) -> Vec<Cell> {
    vec![
        Cell::new(kind.path_segment()),
        Cell::new(name),
        Cell::new(details),
    ]
}
