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

//! Configuration domain

pub mod addon;
pub mod cluster;
pub mod dynamic;

// Re-export cluster configuration types
pub use self::cluster::{
    Addons, ClusterConfiguration, ConfigFormat, KubernetesAddon, KubernetesConfig,
    OrchestratorProfile,
};

// Re-export addon option parsing
pub use self::addon::{is_waf_sku, AppGwAddonOptions};

// Re-export dynamic configuration
pub use self::dynamic::{apply_to_cluster_config, parse_dynamic_configs};
