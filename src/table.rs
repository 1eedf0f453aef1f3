//! Table driven variants.
//!
//! Every byte is first mapped to a [`Category`] through [`CATEGORY`], then
//! counted into one of three buckets. The net count is the `S` bucket minus
//! the `P` bucket.

/// Class of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Other = 0,
    S = 1,
    P = 2,
}

impl Category {
    pub const COUNT: usize = 3;

    #[inline(always)]
    pub fn of(byte: u8) -> Category {
        match CATEGORY[byte as usize] {
            1 => Category::S,
            2 => Category::P,
            _ => Category::Other,
        }
    }
}

const fn make_category() -> [u8; 256] {
    let mut t = [Category::Other as u8; 256];
    t[b's' as usize] = Category::S as u8;
    t[b'p' as usize] = Category::P as u8;
    t
}

/// Category of every byte value, indexed by the byte.
pub static CATEGORY: [u8; 256] = make_category();

const fn make_transitions() -> [[u8; Category::COUNT]; Category::COUNT] {
    let row = [Category::Other as u8, Category::S as u8, Category::P as u8];
    [row; Category::COUNT]
}

/// Next state, indexed by current state then by the category of the current
/// byte.
///
/// All rows are the same: the next state only depends on the byte.
pub static TRANSITIONS: [[u8; Category::COUNT]; Category::COUNT] = make_transitions();

#[inline(always)]
fn net(counts: &[usize; Category::COUNT]) -> isize {
    counts[Category::S as usize] as isize - counts[Category::P as usize] as isize
}

/// Counts by looking up the category of each byte and bumping its bucket.
pub fn count_lookup(bytes: &[u8]) -> isize {
    let mut counts = [0usize; Category::COUNT];
    for &c in bytes {
        counts[CATEGORY[c as usize] as usize] += 1;
    }
    net(&counts)
}

/// Counts by running the bytes through the [`TRANSITIONS`] table and
/// bumping the bucket of each state visited.
pub fn count_state_machine(bytes: &[u8]) -> isize {
    let mut counts = [0usize; Category::COUNT];
    let mut state = Category::Other as u8;
    for &c in bytes {
        state = TRANSITIONS[state as usize][CATEGORY[c as usize] as usize];
        counts[state as usize] += 1;
    }
    net(&counts)
}
