//! Output parsers for interface-status utilities.
//!
//! Each supported platform has its own [`OutputParser`]. Parsers are pure:
//! they only scrape address literals from text and never run anything, so
//! a format change in one tool is confined to its parser.
//!
//! No attempt is made to normalize locales; output in another language
//! simply yields no matches.

use std::sync::LazyLock;

use regex::Regex;

use super::{AddressSet, IpVersion};

/// First dotted quad following the literal token `inet `.
static INET_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"inet (\d+\.\d+\.\d+\.\d+)").expect("static regex is valid")
});

const INET6_START: &str = "inet6";
const INET6_STOP: &str = "prefixlen";

const IPCONFIG_V4_LABEL: &str = "IPv4 Address";
const IPCONFIG_V6_LABEL: &str = "IPv6 Address";

/// Strategy for extracting addresses from a utility's standard output.
pub trait OutputParser: Send + Sync {
    /// Extracts the addresses of the requested `version` from `output`.
    ///
    /// Finding nothing is a normal outcome and yields an empty set.
    fn parse(&self, output: &str, version: IpVersion) -> AddressSet;
}

/// Parser for `ifconfig <interface>` output.
///
/// ```
/// use ipnotify::network::parse::{IfconfigParser, OutputParser};
/// use ipnotify::network::IpVersion;
///
/// let output = "wlan0: flags=4163<UP> inet 203.0.113.7 netmask 255.255.255.0\n\
///               inet6 2001:db8::5  prefixlen 64  scopeid 0x0<global>";
/// let set = IfconfigParser.parse(output, IpVersion::Both);
///
/// assert!(set.contains("203.0.113.7"));
/// assert!(set.contains("2001:db8::5"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IfconfigParser;

impl OutputParser for IfconfigParser {
    fn parse(&self, output: &str, version: IpVersion) -> AddressSet {
        let mut set = AddressSet::new();
        if version.includes_v4() {
            if let Some(address) = extract_ipv4(output) {
                set.insert(address);
            }
        }
        if version.includes_v6() {
            for address in extract_ipv6(output) {
                set.insert(address);
            }
        }
        set
    }
}

/// Parser for Windows `ipconfig` output with labeled lines such as
/// `IPv4 Address. . . . . . . . . . . : 192.0.2.10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpconfigParser;

impl OutputParser for IpconfigParser {
    fn parse(&self, output: &str, version: IpVersion) -> AddressSet {
        let mut set = AddressSet::new();
        for line in output.lines() {
            if version.includes_v4() && line.contains(IPCONFIG_V4_LABEL) {
                // Second colon-separated field; IPv4 literals contain no colon.
                if let Some(value) = line.split(':').nth(1) {
                    push_literal(&mut set, value);
                }
            } else if version.includes_v6() && line.contains(IPCONFIG_V6_LABEL) {
                // Everything after the first colon, since the literal has colons.
                if let Some((_, value)) = line.split_once(':') {
                    push_literal(&mut set, value);
                }
            }
        }
        set
    }
}

/// Returns the first IPv4 literal following `inet `, if any.
#[must_use]
pub fn extract_ipv4(output: &str) -> Option<String> {
    INET_V4
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns every literal found between an `inet6` token and the next
/// `prefixlen` token.
///
/// An interface may carry several IPv6 addresses (link-local plus
/// global), so all segments are collected, not just the first.
#[must_use]
pub fn extract_ipv6(output: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(start) = output[cursor..].find(INET6_START).map(|i| i + cursor) {
        let Some(stop) = output[start..].find(INET6_STOP).map(|i| i + start) else {
            break;
        };
        let literal = trim_artifacts(output[start + INET6_START.len()..stop].trim());
        if !literal.is_empty() {
            found.push(literal.to_string());
        }
        cursor = stop;
    }

    found
}

fn push_literal(set: &mut AddressSet, raw: &str) {
    let literal = trim_artifacts(raw.trim());
    if !literal.is_empty() {
        set.insert(literal);
    }
}

/// Drops a `%scope` zone suffix or `/prefix` length from a literal.
fn trim_artifacts(literal: &str) -> &str {
    literal
        .split(['%', '/'])
        .next()
        .unwrap_or(literal)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IFCONFIG_WLAN0: &str = "\
wlan0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 203.0.113.7  netmask 255.255.255.0  broadcast 203.0.113.255
        inet6 fe80::1  prefixlen 64  scopeid 0x20<link>
        inet6 2001:db8::5  prefixlen 64  scopeid 0x0<global>
        ether 00:11:22:33:44:55  txqueuelen 1000  (Ethernet)
";

    const IPCONFIG: &str = "\
Windows IP Configuration

Ethernet adapter Ethernet:

   Connection-specific DNS Suffix  . : home
   IPv6 Address. . . . . . . . . . . : 2001:db8::20
   Link-local IPv6 Address . . . . . : fe80::1c2b:3d4e%12
   IPv4 Address. . . . . . . . . . . : 192.168.1.20
   Subnet Mask . . . . . . . . . . . : 255.255.255.0
   Default Gateway . . . . . . . . . : 192.168.1.1
";

    mod ifconfig {
        use super::*;

        #[test]
        fn extracts_first_ipv4_after_inet() {
            let output = "wlan0: flags=... inet 203.0.113.7 netmask 255.255.255.0 ...";
            assert_eq!(extract_ipv4(output).as_deref(), Some("203.0.113.7"));
        }

        #[test]
        fn inet6_is_not_mistaken_for_inet() {
            let output = "inet6 fe80::1 prefixlen 64";
            assert_eq!(extract_ipv4(output), None);
        }

        #[test]
        fn inet_token_is_case_sensitive() {
            assert_eq!(extract_ipv4("INET 203.0.113.7"), None);
        }

        #[test]
        fn extracts_every_ipv6_segment() {
            let output = "inet6 fe80::1 prefixlen 64 inet6 2001:db8::5 prefixlen 64";
            assert_eq!(extract_ipv6(output), vec!["fe80::1", "2001:db8::5"]);
        }

        #[test]
        fn ipv6_without_prefixlen_is_ignored() {
            assert!(extract_ipv6("inet6 fe80::1 scopeid 0x20").is_empty());
        }

        #[test]
        fn ipv6_scope_suffix_is_trimmed() {
            let output = "inet6 fe80::1%en0 prefixlen 64";
            assert_eq!(extract_ipv6(output), vec!["fe80::1"]);
        }

        #[test]
        fn parse_both_versions() {
            let set = IfconfigParser.parse(IFCONFIG_WLAN0, IpVersion::Both);
            let expected: AddressSet = ["203.0.113.7", "fe80::1", "2001:db8::5"]
                .into_iter()
                .collect();
            assert_eq!(set, expected);
        }

        #[test]
        fn parse_v4_only() {
            let set = IfconfigParser.parse(IFCONFIG_WLAN0, IpVersion::V4);
            assert_eq!(set, ["203.0.113.7"].into_iter().collect());
        }

        #[test]
        fn parse_v6_only() {
            let set = IfconfigParser.parse(IFCONFIG_WLAN0, IpVersion::V6);
            assert_eq!(set.len(), 2);
            assert!(!set.contains("203.0.113.7"));
        }

        #[test]
        fn interface_without_addresses_yields_empty_set() {
            let output = "wlan0: flags=4099<UP,BROADCAST,MULTICAST>  mtu 1500\n";
            assert!(IfconfigParser.parse(output, IpVersion::Both).is_empty());
        }
    }

    mod ipconfig {
        use super::*;

        #[test]
        fn parses_labeled_lines() {
            let set = IpconfigParser.parse(IPCONFIG, IpVersion::Both);
            let expected: AddressSet = ["2001:db8::20", "fe80::1c2b:3d4e", "192.168.1.20"]
                .into_iter()
                .collect();
            assert_eq!(set, expected);
        }

        #[test]
        fn v4_only_skips_ipv6_lines() {
            let set = IpconfigParser.parse(IPCONFIG, IpVersion::V4);
            assert_eq!(set, ["192.168.1.20"].into_iter().collect());
        }

        #[test]
        fn ignores_unlabeled_lines() {
            let set = IpconfigParser.parse("Default Gateway . . : 192.168.1.1", IpVersion::Both);
            assert!(set.is_empty());
        }
    }
}
