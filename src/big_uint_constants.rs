/// Number of bits held by one block.
pub const BLOCK_BITS: usize = u32::BITS as usize;

pub const ZERO_DIGIT: u8 = b'0';

pub const ONE_DIGIT: u8 = b'1';

/// Largest value served from the small value cache.
pub const MAX_CONSTANT: usize = 16;
