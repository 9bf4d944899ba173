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

use crate::infrastructure::arm::model::ApplicationGatewayArm;
use crate::shared::error::Result;
use std::path::Path;

/// Serialize the resource as the JSON fragment handed to the template engine.
pub fn render_resource_json(resource: &ApplicationGatewayArm, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(resource)?
    } else {
        serde_json::to_string(resource)?
    };
    Ok(rendered)
}

pub fn write_resource_json(
    resource: &ApplicationGatewayArm,
    path: &Path,
    pretty: bool,
) -> Result<()> {
    let mut rendered = render_resource_json(resource, pretty)?;
    rendered.push('\n');

    std::fs::write(path, rendered)?;
    Ok(())
}
