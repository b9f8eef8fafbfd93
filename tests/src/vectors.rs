//! Known-answer vectors for the u = 7 BN curve
//!
//! The pairing values were computed independently with a Miller loop over
//! E(F_p12) that keeps the vertical lines, followed by the same final
//! exponentiation.

/// p(7)
pub const TOY_P: u32 = 100_003;
/// n(7)
pub const TOY_N: u32 = 99_709;
pub const TOY_B: i64 = 29;
pub const TOY_ALPHA: i64 = -1;
pub const TOY_BETA: (i64, i64) = (6, 1);
pub const TOY_G1: (u32, u32) = (3, 17_170);
pub const TOY_G2_X: (u32, u32) = (58_699, 39_765);
pub const TOY_G2_Y: (u32, u32) = (72_268, 64_983);

/// e(G1, G2) with the Tate pairing.
pub const TOY_TATE: [u64; 12] = [
    49718, 56592, 5601, 84365, 30817, 102, 40424, 39643, 93449, 34902, 56323, 62830,
];

/// e(G1, G2) with the Ate pairing.
pub const TOY_ATE: [u64; 12] = [
    82534, 61339, 27898, 71045, 79607, 2495, 7885, 11661, 83953, 39695, 45855, 55478,
];
