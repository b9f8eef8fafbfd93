//! Constants for hashing into the pairing source groups

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Group orders up to this many bits are hashed with SHA-256, larger ones with SHA-512
pub const SHA256_MAX_ORDER_BITS: u64 = 256;

/// Number of one-byte counter values tried before hashing gives up
pub const HASH_TO_CURVE_ATTEMPTS: usize = 256;

/// Number of cube-root branches a counter cycles through
pub const CUBE_ROOT_BRANCHES: usize = 3;
