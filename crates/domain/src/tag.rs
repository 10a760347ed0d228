use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the data source that produced a discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryTag {
    #[default]
    None,
    Alt,
    Guess,
    Archive,
    Api,
    Axfr,
    Brute,
    Cert,
    Dns,
    External,
    Scrape,
}

impl DiscoveryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryTag::None => "none",
            DiscoveryTag::Alt => "alt",
            DiscoveryTag::Guess => "guess",
            DiscoveryTag::Archive => "archive",
            DiscoveryTag::Api => "api",
            DiscoveryTag::Axfr => "axfr",
            DiscoveryTag::Brute => "brute",
            DiscoveryTag::Cert => "cert",
            DiscoveryTag::Dns => "dns",
            DiscoveryTag::External => "external",
            DiscoveryTag::Scrape => "scrape",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(DiscoveryTag::None),
            "alt" => Some(DiscoveryTag::Alt),
            "guess" => Some(DiscoveryTag::Guess),
            "archive" => Some(DiscoveryTag::Archive),
            "api" => Some(DiscoveryTag::Api),
            "axfr" => Some(DiscoveryTag::Axfr),
            "brute" => Some(DiscoveryTag::Brute),
            "cert" => Some(DiscoveryTag::Cert),
            "dns" => Some(DiscoveryTag::Dns),
            "external" => Some(DiscoveryTag::External),
            "scrape" => Some(DiscoveryTag::Scrape),
            _ => None,
        }
    }
}

impl fmt::Display for DiscoveryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
