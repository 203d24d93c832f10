//! Property-based tests for the named-enum codec.

use super::named::NamedEnum;
use super::types::{Mount, MountPropagation, PortMapping, PortMappingProtocol};
use proptest::prelude::*;

fn propagation_strategy() -> impl Strategy<Value = MountPropagation> {
    prop_oneof![
        Just(MountPropagation::None),
        Just(MountPropagation::HostToContainer),
        Just(MountPropagation::Bidirectional),
    ]
}

fn protocol_strategy() -> impl Strategy<Value = PortMappingProtocol> {
    prop_oneof![
        Just(PortMappingProtocol::Tcp),
        Just(PortMappingProtocol::Udp),
        Just(PortMappingProtocol::Sctp),
    ]
}

fn mount_strategy() -> impl Strategy<Value = Mount> {
    (
        "[a-z/]{0,12}",
        "[a-z/]{0,12}",
        any::<bool>(),
        any::<bool>(),
        propagation_strategy(),
    )
        .prop_map(
            |(container_path, host_path, read_only, selinux_relabel, propagation)| Mount {
                container_path,
                host_path,
                read_only,
                selinux_relabel,
                propagation,
            },
        )
}

fn port_mapping_strategy() -> impl Strategy<Value = PortMapping> {
    (
        0..65536i32,
        0..65536i32,
        prop_oneof![Just(String::new()), "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}"],
        protocol_strategy(),
    )
        .prop_map(
            |(container_port, host_port, listen_address, protocol)| PortMapping {
                container_port,
                host_port,
                listen_address,
                protocol,
            },
        )
}

proptest! {
    // decode(encode(v)) == v
    #[test]
    fn propagation_round_trip(member in propagation_strategy()) {
        let name = member.name().unwrap();
        prop_assert_eq!(MountPropagation::from_name(name).unwrap(), member);
    }

    // Protocol names decode the same in any letter case
    #[test]
    fn protocol_case_insensitive(member in protocol_strategy(), mask in any::<u8>()) {
        let name = member.name().unwrap();
        let mixed: String = name
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << (i % 8)) == 0 { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(PortMappingProtocol::from_name(&mixed).unwrap(), member);
    }

    // Any string that is not a canonical propagation name is rejected
    #[test]
    fn propagation_rejects_non_names(input in "[A-Za-z]{1,16}") {
        let known = MountPropagation::NAMES.iter().any(|(_, name)| *name == input);
        prop_assert_eq!(MountPropagation::from_name(&input).is_ok(), known);
    }

    // Whole structs survive JSON unchanged
    #[test]
    fn mount_json_round_trip(mount in mount_strategy()) {
        let json = serde_json::to_string(&mount).unwrap();
        let back: Mount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, mount);
    }

    // Whole structs survive YAML unchanged
    #[test]
    fn port_mapping_yaml_round_trip(mapping in port_mapping_strategy()) {
        let yaml = serde_yaml::to_string(&mapping).unwrap();
        let back: PortMapping = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, mapping);
    }
}
