//! CRC-16/MODBUS checksum calculation.
//!
//! The running checksum is seeded with 0xFFFF and every byte is folded into it, least
//! significant bit first. There is no final XOR. On the wire, the result is transmitted low
//! byte first.
//!
//! Two inner loops are available. The loop used by [compute], [encode] and [Digest] is selected
//! at build time, see [ACTIVE_BACKEND].
use crate::crc::{MODBUS_INIT, MODBUS_RESIDUE};
use crate::table::{CRC_TABLE, POLY_REFLECTED};
use crate::CrcError;
use core::fmt::{Display, Formatter};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CrcType = u16;

/// Length of the CRC16 when written to a frame.
pub const CRC_LEN: usize = core::mem::size_of::<CrcType>();

/// Inner loop implementation used to fold bytes into the running checksum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Backend {
    /// One lookup in [CRC_TABLE] per byte.
    Table = 0,
    /// Eight shift and XOR steps per byte. Does not need the 512 byte table.
    Bitwise = 1,
}

impl Backend {
    /// Fold `bytes` into the running checksum `crc` and return the new value.
    #[inline]
    pub fn update(self, crc: CrcType, bytes: &[u8]) -> CrcType {
        match self {
            Backend::Table => update_table(crc, bytes),
            Backend::Bitwise => update_bitwise(crc, bytes),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Table => "table",
            Backend::Bitwise => "bitwise",
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inner loop used by this build. This is the lookup table loop unless the `no-table` feature
/// is enabled.
#[cfg(not(feature = "no-table"))]
pub const ACTIVE_BACKEND: Backend = Backend::Table;
/// Inner loop used by this build. This is the bitwise loop because the `no-table` feature is
/// enabled.
#[cfg(feature = "no-table")]
pub const ACTIVE_BACKEND: Backend = Backend::Bitwise;

#[inline]
fn update_table(mut crc: CrcType, bytes: &[u8]) -> CrcType {
    for &byte in bytes {
        let idx = (crc ^ byte as u16) & 0xFF;
        crc = (crc >> 8) ^ CRC_TABLE[idx as usize];
    }
    crc
}

#[inline]
fn update_bitwise(mut crc: CrcType, bytes: &[u8]) -> CrcType {
    for &byte in bytes {
        crc ^= byte as u16;
        for _ in 0..8 {
            if crc & 0b1 != 0 {
                crc = (crc >> 1) ^ POLY_REFLECTED;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

/// Running CRC16 which can be fed in multiple steps, for example while a frame is received
/// in chunks.
///
/// ```rust
/// use modbus_crc::{compute, Digest};
///
/// let mut digest = Digest::new();
/// digest.update(&[0x01, 0x03]);
/// digest.update(&[0x00, 0x00, 0x00, 0x06]);
/// assert_eq!(digest.finalize(), compute(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x06]));
/// assert_eq!(digest.finalize_bytes(), [0xC5, 0xC8]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Digest {
    crc: CrcType,
    backend: Backend,
}

impl Digest {
    /// Digest seeded with 0xFFFF which uses [ACTIVE_BACKEND].
    pub const fn new() -> Self {
        Self::new_with_backend(ACTIVE_BACKEND)
    }

    /// Digest seeded with 0xFFFF which uses the passed inner loop.
    pub const fn new_with_backend(backend: Backend) -> Self {
        Self {
            crc: MODBUS_INIT,
            backend,
        }
    }

    /// Fold the next chunk of received bytes into the running checksum. Splitting the input
    /// over any number of calls yields the same result as a single [compute] call.
    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        self.crc = self.backend.update(self.crc, bytes);
    }

    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    /// Current value of the running checksum. The digest is not consumed, so more bytes can be
    /// added afterwards.
    #[inline]
    pub const fn finalize(&self) -> CrcType {
        self.crc
    }

    /// Current value of the running checksum in wire order, low byte first.
    #[inline]
    pub const fn finalize_bytes(&self) -> [u8; CRC_LEN] {
        self.crc.to_le_bytes()
    }

    /// Returns true if the bytes fed so far form a complete frame with a valid trailing CRC16.
    ///
    /// This works because the CRC over a payload followed by its own little-endian checksum is
    /// always [MODBUS_RESIDUE].
    #[inline]
    pub const fn is_residue(&self) -> bool {
        self.crc == MODBUS_RESIDUE
    }

    /// Start over with the seed value, for example for the next frame.
    pub fn reset(&mut self) {
        self.crc = MODBUS_INIT;
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Digest {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Calculate the CRC16 over the passed bytes using [ACTIVE_BACKEND]. An empty slice yields
/// the seed value 0xFFFF.
#[inline]
pub fn compute(data: &[u8]) -> CrcType {
    compute_with(ACTIVE_BACKEND, data)
}

/// Calculate the CRC16 with a specific inner loop.
#[inline]
pub fn compute_with(backend: Backend, data: &[u8]) -> CrcType {
    backend.update(MODBUS_INIT, data)
}

/// Calculate the CRC16 and return it in wire order, low byte first. This is the checksum which
/// is appended to an outgoing frame.
#[inline]
pub fn encode(data: &[u8]) -> [u8; CRC_LEN] {
    compute(data).to_le_bytes()
}

/// Calculate the CRC16 over any byte source which is not available as a contiguous slice.
pub fn compute_iter<I: IntoIterator<Item = u8>>(data: I) -> CrcType {
    let mut digest = Digest::new();
    data.into_iter().for_each(|byte| digest.update_byte(byte));
    digest.finalize()
}

/// Calculate the CRC16 over a sequence of wider integers which are expected to hold byte
/// values.
///
/// Values outside of 0..=255 are rejected, not masked. The error contains the index of the
/// first offending value.
pub fn try_compute<T: ToPrimitive, I: IntoIterator<Item = T>>(
    values: I,
) -> Result<CrcType, CrcError> {
    let mut digest = Digest::new();
    for (index, value) in values.into_iter().enumerate() {
        let byte = value.to_u8().ok_or(CrcError::InvalidInput { index })?;
        digest.update_byte(byte);
    }
    Ok(digest.finalize())
}
