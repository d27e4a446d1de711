use std::fmt;

use serde::Serialize;

use super::NetworkProfile;

/// Release channel recognized from a tag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    PreRelease,
    ReleaseCandidate,
    Stable,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreRelease => "pre-release",
            Self::ReleaseCandidate => "release-candidate",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct TagRule {
    channel: Channel,
    matches: fn(&str) -> bool,
    profile: NetworkProfile,
}

// Evaluated in order; the first match wins.
const RULES: [TagRule; 2] = [
    TagRule {
        channel: Channel::PreRelease,
        matches: is_pre_release,
        profile: NetworkProfile::ESME,
    },
    TagRule {
        channel: Channel::ReleaseCandidate,
        matches: is_release_candidate,
        profile: NetworkProfile::NEXTNET,
    },
];

const FALLBACK: (Channel, NetworkProfile) = (Channel::Stable, NetworkProfile::MAINNET);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Resolution<'a> {
    pub tag: &'a str,
    pub channel: Channel,
    #[serde(flatten)]
    pub profile: NetworkProfile,
}

/// Classifies `tag` into a channel and its network profile. Total: tags that
/// match no rule fall back to mainnet.
pub fn classify(tag: &str) -> Resolution<'_> {
    let (channel, profile) = RULES
        .iter()
        .find(|rule| (rule.matches)(tag))
        .map_or(FALLBACK, |rule| (rule.channel, rule.profile));

    Resolution {
        tag,
        channel,
        profile,
    }
}

pub fn resolve(tag: &str) -> NetworkProfile {
    classify(tag).profile
}

/// `v*-pre.*`
fn is_pre_release(tag: &str) -> bool {
    versioned_with(tag, "-pre.")
}

/// `v*-rc.*`
fn is_release_candidate(tag: &str) -> bool {
    versioned_with(tag, "-rc.")
}

fn versioned_with(tag: &str, infix: &str) -> bool {
    tag.strip_prefix('v').is_some_and(|rest| rest.contains(infix))
}
