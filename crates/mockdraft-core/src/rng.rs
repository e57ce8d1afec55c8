// Deterministic random stream and seed hashing.
//
// Every random draw in a simulation run flows through one `DraftRng`. Given
// the same 32-bit seed the stream is identical on every platform, which is
// what makes a whole mock draft reproducible from its seed.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed odd increment added to the state on every draw.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, used to scale the mixed output into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Seeded xorshift-multiply generator producing floats in [0, 1).
#[derive(Debug, Clone)]
pub struct DraftRng {
    state: u32,
}

impl DraftRng {
    pub fn new(seed: u32) -> Self {
        DraftRng { state: seed }
    }

    /// Advance the stream and return the next float in [0, 1).
    ///
    /// All arithmetic wraps at 32 bits; changing any constant or shift here
    /// changes every simulation result for every seed.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / TWO_POW_32
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Seed hashing
// ---------------------------------------------------------------------------

/// 32-bit FNV-1a over the UTF-16 code units of `input`.
///
/// Hashing code units rather than bytes keeps textual seeds stable with the
/// values a web form would submit for the same string.
pub fn fnv1a_32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
