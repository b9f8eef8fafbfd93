//! Named Barreto-Naehrig parameter sets
//!
//! Every set fixes the tower F_p2 = F_p[i]/(i^2 - alpha),
//! F_p6 = F_p2[v]/(v^3 - beta) with beta = beta0 + beta1 * i, and
//! F_p12 = F_p6[w]/(w^2 - v). G1 lives on y^2 = x^3 + b over F_p, G2 on the
//! twist y^2 = x^3 + b / beta over F_p2.

/// A fixed BN parameter set with decimal integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedBnParameters {
    /// Name accepted by `BarretoNaehrigParameterSpec::named`
    pub name: &'static str,
    /// The BN parameter u
    pub u: &'static str,
    /// Field characteristic p(u)
    pub characteristic: &'static str,
    /// Prime group order n(u)
    pub size: &'static str,
    /// Curve constant b
    pub b: &'static str,
    /// Quadratic non-residue defining F_p2
    pub alpha: &'static str,
    /// Constant part of the sextic non-residue beta
    pub beta0: &'static str,
    /// Coefficient of i in beta
    pub beta1: &'static str,
    /// G1 generator x
    pub x1: &'static str,
    /// G1 generator y
    pub y1: &'static str,
    /// G2 generator x, constant part
    pub x20: &'static str,
    /// G2 generator x, coefficient of i
    pub x21: &'static str,
    /// G2 generator y, constant part
    pub y20: &'static str,
    /// G2 generator y, coefficient of i
    pub y21: &'static str,
    /// Hash used to map bytes into the source groups
    pub hash: &'static str,
    /// Pairing algorithm
    pub pairing: &'static str,
}

/// The 254-bit curve with u = 4965661367192848881 used by Ethereum precompiles.
pub const BN254: NamedBnParameters = NamedBnParameters {
    name: "BN254",
    u: "4965661367192848881",
    characteristic: "21888242871839275222246405745257275088696311157297823662689037894645226208583",
    size: "21888242871839275222246405745257275088548364400416034343698204186575808495617",
    b: "3",
    alpha: "-1",
    beta0: "9",
    beta1: "1",
    x1: "1",
    y1: "2",
    x20: "10857046999023057135944570762232829481370756359578518086990519993285655852781",
    x21: "11559732032986387107991004021392285783925812861821192530917403151452391805634",
    y20: "8495653923123431417604973247489272438418190587263600148770280649306958101930",
    y21: "4082367875863433681332203403145435568316851327593401208105741076214120093531",
    hash: "SHA-256",
    pairing: "Ate",
};

/// A 256-bit curve with u = 1 (mod 6) found by the parameter search.
pub const SFC_256: NamedBnParameters = NamedBnParameters {
    name: "SFC-256",
    u: "7138338356168804737",
    characteristic: "93474041211009397999495200966922817362932559017056609010096990304690230516583",
    size: "93474041211009397999495200966922817362626823770133704489735200225990828681569",
    b: "10",
    alpha: "-1",
    beta0: "3",
    beta1: "1",
    x1: "1",
    y1: "90966334049056038536922114438747186546727293444529376346836642965369661322352",
    x20: "65151780670325083177419000500432308062731311416558460106185332952934664314675",
    x21: "56019966798752747516491373050600399333844718484769536504481176737438377736352",
    y20: "67501313554492119666250523259742244640976452581023693427645857454113823129481",
    y21: "52553492990033216329537388732025434610196503785573976412254284740197790068302",
    hash: "SHA-256",
    pairing: "Ate",
};

/// All named sets, looked up by name.
pub static NAMED_SETS: [NamedBnParameters; 2] = [BN254, SFC_256];

/// Find a named set, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static NamedBnParameters> {
    NAMED_SETS.iter().find(|set| set.name.eq_ignore_ascii_case(name))
}
