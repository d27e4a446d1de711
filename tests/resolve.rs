use pretty_assertions::assert_eq;
use taiji_multinet::network::Channel;
use taiji_multinet::{Network, NetworkDir, NetworkProfile, classify, resolve};

fn pair(tag: &str) -> (&'static str, &'static str) {
    let profile = resolve(tag);
    (profile.network.as_str(), profile.network_dir.as_str())
}

#[test]
fn resolves_release_scenarios() {
    assert_eq!(pair("v1.0.0-pre.3"), ("esme", "testnet"));
    assert_eq!(pair("v1.0.0-rc.1"), ("nextnet", "nextnet"));
    assert_eq!(pair("v1.0.0"), ("mainnet", "mainnet"));
    assert_eq!(pair(""), ("mainnet", "mainnet"));
    assert_eq!(pair("nightly-build"), ("mainnet", "mainnet"));
}

#[test]
fn profile_constants_match_published_values() {
    assert_eq!(
        NetworkProfile::ESME,
        NetworkProfile {
            network: Network::Esmeralda,
            network_dir: NetworkDir::Testnet,
        }
    );
    assert_eq!(NetworkProfile::NEXTNET.network.to_string(), "nextnet");
    assert_eq!(NetworkProfile::MAINNET.network_dir.to_string(), "mainnet");
}

#[test]
fn both_infixes_resolve_to_first_rule() {
    let resolution = classify("v2.0.0-rc.1-pre.1");
    assert_eq!(resolution.channel, Channel::PreRelease);
    assert_eq!(resolution.profile, NetworkProfile::ESME);
}

#[test]
fn requires_leading_v() {
    assert_eq!(resolve("1.0.0-pre.3"), NetworkProfile::MAINNET);
    assert_eq!(resolve("release-v1.0.0-rc.1"), NetworkProfile::MAINNET);
}
