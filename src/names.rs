use sha2::{Digest, Sha256};
use std::net::IpAddr;

const ADJECTIVES: [&str; 100] = [
    "happy", "sad", "angry", "tired", "sleepy",
    "hungry", "thirsty", "quiet", "loud", "fast",
    "slow", "dark", "light", "bright", "dim",
    "brave", "timid", "joyful", "somber", "optimistic",
    "pessimistic", "friendly", "unfriendly", "shy", "outgoing",
    "adventurous", "cautious", "clever", "foolish", "serious",
    "playful", "loving", "hateful", "jealous", "envious",
    "generous", "selfish", "kind", "cruel", "polite",
    "rude", "honest", "dishonest", "brave", "fearful",
    "anxious", "calm", "peaceful", "careful", "careless",
    "clumsy", "graceful", "curious", "boring", "entertaining",
    "fascinating", "intriguing", "mysterious", "intelligent", "dumb",
    "talented", "untalented", "creative", "uncreative", "patient",
    "impatient", "relaxed", "tense", "messy", "neat",
    "organized", "disorganized", "hopeful", "hopeless", "romantic",
    "unromantic", "charming", "dull", "stylish", "unstylish",
    "sophisticated", "unsophisticated", "beautiful", "ugly", "handsome",
    "pretty", "stunning", "ordinary", "unique", "powerful",
    "weak", "lively", "boring", "trustworthy", "untrustworthy",
    "faithful", "unfaithful", "independent", "dependent", "confident",
];

const ANIMALS: [&str; 100] = [
    "lion", "tiger", "bear", "elephant", "giraffe",
    "hippopotamus", "rhinoceros", "gorilla", "chimpanzee", "orangutan",
    "zebra", "cheetah", "jaguar", "leopard", "cougar",
    "lynx", "bobcat", "panther", "wolf", "coyote",
    "fox", "hyena", "badger", "raccoon", "skunk",
    "otter", "beaver", "squirrel", "chipmunk", "rabbit",
    "hare", "deer", "moose", "elk", "caribou",
    "bison", "buffalo", "yak", "camel", "llama",
    "alpaca", "kangaroo", "koala", "platypus", "shark",
    "wombat", "ostrich", "emu", "penguin", "seagull",
    "pelican", "flamingo", "parrot", "toucan", "hummingbird",
    "bald eagle", "falcon", "osprey", "hawk", "sparrow",
    "dove", "pigeon", "crow", "raven", "magpie",
    "blue jay", "cardinal", "robin", "bluebird", "woodpecker",
    "kingfisher", "bee", "butterfly", "caterpillar", "ladybug",
    "ant", "spider", "scorpion", "centipede", "millipede",
    "snake", "python", "anaconda", "cobra", "rattlesnake",
    "garter snake", "turtle", "tortoise", "alligator", "crocodile",
    "frog", "toad", "salamander", "newt", "jellyfish",
    "crab", "lobster", "shrimp", "dolphin", "whale",
];

/// Bytes hashed for an address.
///
/// IPv4 addresses use their IPv4-mapped IPv6 form so that every parsed
/// address hashes 16 bytes. Anything that does not parse hashes nothing,
/// which still yields a stable name.
fn address_bytes(ip: &str) -> Vec<u8> {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => v4.to_ipv6_mapped().octets().to_vec(),
        Ok(IpAddr::V6(v6)) => v6.octets().to_vec(),
        Err(_) => Vec::new(),
    }
}

/// Derive the "adjective animal" pseudonym shown next to a post.
pub fn name_from_ip(ip: &str) -> String {
    let hash: [u8; 32] = Sha256::digest(address_bytes(ip)).into();

    let adjective = ADJECTIVES[hash[0] as usize % ADJECTIVES.len()];
    let animal = ANIMALS[hash[1] as usize % ANIMALS.len()];

    format!("{adjective} {animal}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_addresses_map_to_fixed_names() {
        let table = [
            ("127.0.0.1", "trustworthy leopard"),
            ("::1", "outgoing dove"),
            ("140.82.121.3", "graceful rhinoceros"),
            ("invalid-ip", "clever spider"),
        ];

        for (ip, want) in table {
            assert_eq!(name_from_ip(ip), want, "name_from_ip({ip:?})");
        }
    }

    #[test]
    fn unparseable_inputs_share_the_fallback_name() {
        assert_eq!(name_from_ip(""), "clever spider");
        assert_eq!(name_from_ip("unknown"), "clever spider");
        assert_eq!(name_from_ip("127.0.0.1:8080"), "clever spider");
    }

    #[test]
    fn mapped_and_plain_ipv4_agree() {
        assert_eq!(name_from_ip("::ffff:127.0.0.1"), name_from_ip("127.0.0.1"));
    }

    #[test]
    fn is_deterministic() {
        for ip in ["10.0.0.1", "192.168.1.100", "2001:db8::1", "garbage"] {
            assert_eq!(name_from_ip(ip), name_from_ip(ip));
        }
    }
}
