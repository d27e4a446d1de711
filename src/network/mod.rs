pub mod resolver;

use std::fmt;

use serde::Serialize;

pub use resolver::{Channel, Resolution, classify, resolve};

/// Network identifier published to downstream release steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Network {
    #[serde(rename = "esme")]
    Esmeralda,
    #[serde(rename = "nextnet")]
    NextNet,
    #[serde(rename = "mainnet")]
    MainNet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esmeralda => "esme",
            Self::NextNet => "nextnet",
            Self::MainNet => "mainnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory segment for a network. Not always the network's own name:
/// esme builds land in `testnet`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkDir {
    Testnet,
    Nextnet,
    Mainnet,
}

impl NetworkDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Nextnet => "nextnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct NetworkProfile {
    pub network: Network,
    pub network_dir: NetworkDir,
}

impl NetworkProfile {
    pub const ESME: Self = Self {
        network: Network::Esmeralda,
        network_dir: NetworkDir::Testnet,
    };
    pub const NEXTNET: Self = Self {
        network: Network::NextNet,
        network_dir: NetworkDir::Nextnet,
    };
    pub const MAINNET: Self = Self {
        network: Network::MainNet,
        network_dir: NetworkDir::Mainnet,
    };
}
