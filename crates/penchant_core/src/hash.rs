//! Stable 32-bit string hashing
//!
//! Draws must replay bit-for-bit on every platform and toolchain, so the
//! mixer is spelled out here instead of leaning on `std`'s `DefaultHasher`
//! (whose algorithm is unspecified and may change between releases).
//!
//! The mixer is FNV-1a over the key bytes followed by the MurmurHash3
//! `fmix32` finalizer. FNV-1a alone has weak avalanche in the high bits
//! for keys that differ only in their last few bytes, which is exactly the
//! shape of `seed + counter` keys.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Multiplier applied to the call counter before it is appended to the seed.
pub const CALL_SCALE: u128 = 1_000_000_000_000;

/// Incremental 32-bit FNV-1a hasher.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a32 {
    state: u32,
}

impl Fnv1a32 {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u32;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    pub fn finish(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest number of decimal digits in a `u128`.
const U128_DIGITS: usize = 39;

/// Write the decimal digits of `value` into the tail of `buf`, returning them.
fn decimal(mut value: u128, buf: &mut [u8; U128_DIGITS]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            return &buf[start..];
        }
    }
}

/// MurmurHash3 32-bit finalizer.
#[inline]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hash of the composite key `seed ++ decimal(calls * CALL_SCALE)`, as a signed 32-bit value.
pub fn draw_hash(seed: &str, calls: u64) -> i32 {
    let mut hasher = Fnv1a32::new();
    hasher.update(seed.as_bytes());
    let mut digits = [0u8; U128_DIGITS];
    hasher.update(decimal((calls as u128).wrapping_mul(CALL_SCALE), &mut digits));
    fmix32(hasher.finish()) as i32
}
