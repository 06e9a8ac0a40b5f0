//! Static directory of organizations running elections. Presentational
//! data; membership itself is granted through the join workflow.

use crate::models::{OrgKind, Organization};

const fn org(
    id: &'static str,
    name: &'static str,
    kind: OrgKind,
    elections: u32,
    members: u32,
    description: &'static str,
) -> Organization {
    Organization {
        id,
        name,
        kind,
        elections,
        members,
        description,
    }
}

pub static DIRECTORY: &[Organization] = &[
    org(
        "babcock",
        "Babcock University",
        OrgKind::Academic,
        3,
        5708,
        "Join Babcock University's electoral community.",
    ),
    org(
        "UNILAG",
        "University of Lagos",
        OrgKind::Academic,
        15,
        9000,
        "Participate in UNILAG student government elections.",
    ),
    org(
        "Landmark",
        "Landmark University",
        OrgKind::Academic,
        10,
        578,
        "Join Landmark University's electoral community.",
    ),
    org(
        "RSU",
        "Rivers State University",
        OrgKind::Academic,
        10,
        7008,
        "Join Rivers State University's SUG community.",
    ),
    org(
        "LeadCity",
        "Lead City University",
        OrgKind::Academic,
        2,
        400,
        "Join Lead City University's electoral community.",
    ),
    org(
        "ESUT",
        "Enugu State University of Science and Technology",
        OrgKind::Academic,
        15,
        9278,
        "Join ESUT's electoral community.",
    ),
    org(
        "uniben",
        "University of Benin",
        OrgKind::Academic,
        8,
        12000,
        "Join UNIBEN's vibrant student electoral community.",
    ),
    org(
        "unilorin",
        "University of Ilorin",
        OrgKind::Academic,
        10,
        15000,
        "Participate in UNILORIN's student government elections.",
    ),
    org(
        "oau",
        "Obafemi Awolowo University",
        OrgKind::Academic,
        12,
        18000,
        "Be part of OAU's active electoral community.",
    ),
    org(
        "ui",
        "University of Ibadan",
        OrgKind::Academic,
        15,
        20000,
        "Join UI's prestigious student electoral system.",
    ),
    org(
        "abu",
        "Ahmadu Bello University",
        OrgKind::Academic,
        9,
        17000,
        "Participate in ABU's dynamic student elections.",
    ),
    org(
        "lasu",
        "Lagos State University",
        OrgKind::Academic,
        7,
        14000,
        "Join LASU's student government electoral process.",
    ),
    org(
        "futa",
        "Federal University of Technology Akure",
        OrgKind::Academic,
        6,
        10000,
        "Be part of FUTA's innovative student elections.",
    ),
    org(
        "unizik",
        "Nnamdi Azikiwe University",
        OrgKind::Academic,
        11,
        16000,
        "Join UNIZIK's active student electoral community.",
    ),
    org(
        "buk",
        "Bayero University Kano",
        OrgKind::Academic,
        5,
        9000,
        "Participate in BUK's student government elections.",
    ),
    org(
        "unn",
        "University of Nigeria Nsukka",
        OrgKind::Academic,
        13,
        19000,
        "Join UNN's vibrant student electoral system.",
    ),
    org(
        "futminna",
        "Federal University of Technology Minna",
        OrgKind::Academic,
        4,
        8000,
        "Be part of FUTMINNA's innovative student elections.",
    ),
    org(
        "covenant",
        "Covenant University",
        OrgKind::Academic,
        3,
        6000,
        "Join Covenant University's student electoral community.",
    ),
    org(
        "unical",
        "University of Calabar",
        OrgKind::Academic,
        8,
        11000,
        "Participate in UNICAL's student government elections.",
    ),
    org(
        "funaab",
        "Federal University of Agriculture Abeokuta",
        OrgKind::Academic,
        6,
        9500,
        "Be part of FUNAAB's agricultural student elections.",
    ),
    org(
        "eksu",
        "Ekiti State University",
        OrgKind::Academic,
        5,
        7000,
        "Join EKSU's student government electoral process.",
    ),
    org(
        "paystack123",
        "Paystack",
        OrgKind::Corporate,
        3,
        1200,
        "Vote for the most innovative team at Paystack.",
    ),
    org(
        "andela456",
        "Andela",
        OrgKind::Corporate,
        5,
        800,
        "Recognize outstanding developers at Andela.",
    ),
    org(
        "konga789",
        "Konga",
        OrgKind::Corporate,
        2,
        1500,
        "Celebrate excellence in e-commerce at Konga.",
    ),
    org(
        "flutterwave001",
        "Flutterwave",
        OrgKind::Corporate,
        4,
        2000,
        "Empowering innovation through Flutterwave's community.",
    ),
    org(
        "interswitch002",
        "Interswitch",
        OrgKind::Corporate,
        3,
        1800,
        "Recognize top-performing teams at Interswitch.",
    ),
    org(
        "jumia003",
        "Jumia",
        OrgKind::Corporate,
        6,
        2500,
        "Celebrate e-commerce excellence at Jumia.",
    ),
    org(
        "opay004",
        "OPay",
        OrgKind::Corporate,
        2,
        1000,
        "Vote for the best innovations at OPay.",
    ),
    org(
        "cowrywise005",
        "Cowrywise",
        OrgKind::Corporate,
        3,
        700,
        "Recognize financial innovation at Cowrywise.",
    ),
    org(
        "piggyvest006",
        "PiggyVest",
        OrgKind::Corporate,
        4,
        1200,
        "Celebrate savings and investment excellence at PiggyVest.",
    ),
    org(
        "hotelsng007",
        "Hotels.ng",
        OrgKind::Corporate,
        2,
        900,
        "Vote for the best travel innovations at Hotels.ng.",
    ),
    org(
        "kudi008",
        "Kudi",
        OrgKind::Corporate,
        3,
        1100,
        "Empowering financial inclusion through Kudi's community.",
    ),
    org(
        "maxng009",
        "MAX.ng",
        OrgKind::Corporate,
        2,
        800,
        "Recognize top-performing teams at MAX.ng.",
    ),
    org(
        "gokada010",
        "Gokada",
        OrgKind::Corporate,
        3,
        950,
        "Celebrate innovation in transportation at Gokada.",
    ),
    org(
        "paga011",
        "Paga",
        OrgKind::Corporate,
        4,
        1500,
        "Vote for the best financial solutions at Paga.",
    ),
    org(
        "teamapt012",
        "TeamApt",
        OrgKind::Corporate,
        3,
        1300,
        "Recognize excellence in fintech at TeamApt.",
    ),
    org(
        "mono013",
        "Mono",
        OrgKind::Corporate,
        2,
        600,
        "Celebrate data-driven innovation at Mono.",
    ),
    org(
        "paylater014",
        "Paylater",
        OrgKind::Corporate,
        3,
        850,
        "Vote for the best lending solutions at Paylater.",
    ),
    org(
        "carbon015",
        "Carbon",
        OrgKind::Corporate,
        4,
        1400,
        "Recognize top-performing teams at Carbon.",
    ),
    org(
        "thriveagric016",
        "Thrive Agric",
        OrgKind::Corporate,
        2,
        700,
        "Celebrate agricultural innovation at Thrive Agric.",
    ),
];

/// Look up an organization by its id.
pub fn find(id: &str) -> Option<&'static Organization> {
    DIRECTORY.iter().find(|org| org.id == id)
}

pub fn academic() -> impl Iterator<Item = &'static Organization> {
    DIRECTORY.iter().filter(|org| org.kind == OrgKind::Academic)
}

pub fn corporate() -> impl Iterator<Item = &'static Organization> {
    DIRECTORY.iter().filter(|org| org.kind == OrgKind::Corporate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let org = find("babcock").expect("missing org");
        assert_eq!(org.name, "Babcock University");
        assert!(find("nowhere").is_none());
    }

    #[test]
    fn test_directory_split() {
        assert_eq!(academic().count() + corporate().count(), DIRECTORY.len());
        assert!(academic().count() > 0);
        assert!(corporate().count() > 0);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, org) in DIRECTORY.iter().enumerate() {
            assert!(
                DIRECTORY.iter().skip(i + 1).all(|other| other.id != org.id),
                "duplicate id {}",
                org.id
            );
        }
    }
}
