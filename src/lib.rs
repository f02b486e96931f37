//! # Modbus RTU CRC16
//!
//! This crate contains a `no_std` implementation of the CRC-16/MODBUS checksum which protects
//! every Modbus RTU frame sent over a serial line, and helpers to place and verify that checksum
//! at the end of a frame.
//!
//!  - [table]: Compile-time generated 256 entry lookup table for the reflected polynomial
//!    0xA001.
//!  - [checksum]: Checksum calculation, either one-shot with [compute] and [encode] or
//!    incrementally with [Digest].
//!  - [frame]: Appending the little-endian checksum to a payload and validating received
//!    frames with [validate] or [verify_frame].
//!  - [crc]: The algorithm parameters and ready-made [::crc::Crc] instances for users of the
//!    [::crc] crate.
//!
//! ## Features
//!
//! `modbus-crc` is suitable for `no_std` environments, and all core operations are free of
//! allocations.
//!
//! Default features:
//!
//!  - [`std`](https://doc.rust-lang.org/std/): Enables functionality relying on the standard
//!    library, for example the [std::io::Write] implementation of [Digest].
//!  - [`alloc`](https://doc.rust-lang.org/alloc/): Enables features which operate on containers
//!    like [`alloc::vec::Vec`](https://doc.rust-lang.org/beta/alloc/vec/struct.Vec.html).
//!    Enabled by the `std` feature.
//!
//! Optional features:
//!
//!  - [`serde`](https://serde.rs/): Adds `serde` support for the error types and [Backend].
//!  - [`defmt`](https://defmt.ferrous-systems.com/): Adds `defmt::Format` support for the
//!    error types and [Backend].
//!  - `no-table`: Use the bit-by-bit inner loop instead of the lookup table, see
//!    [ACTIVE_BACKEND].
//!
//! ## Example
//!
//! ```rust
//! use modbus_crc::{compute, encode, validate};
//!
//! let request = [0x01, 0x03, 0x00, 0x00, 0x00, 0x06];
//! assert_eq!(compute(&request), 0xC8C5);
//! assert_eq!(encode(&request), [0xC5, 0xC8]);
//! assert!(validate(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x06, 0xC5, 0xC8]));
//! ```
#![no_std]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod checksum;
pub mod crc;
pub mod frame;
pub mod table;

pub use checksum::{compute, encode, Backend, Digest, ACTIVE_BACKEND};
pub use frame::{append_crc, validate, verify_frame};

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteConversionError {
    /// The passed slice is too small. Returns the passed slice length and expected minimum size
    #[error("target slice with size {found} is too small, expected size of at least {expected}")]
    ToSliceTooSmall { found: usize, expected: usize },
    /// The [zerocopy] library failed to write to bytes
    #[error("zerocopy serialization error")]
    ZeroCopyToError,
    #[error("zerocopy deserialization error")]
    ZeroCopyFromError,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CrcError {
    /// A value passed to [checksum::try_compute] does not fit into a byte. Contains the position
    /// of the first offending value.
    #[error("value at index {index} is outside of the byte range 0..=255")]
    InvalidInput { index: usize },
    /// A frame needs to be at least 2 bytes long to contain a CRC16. Contains the found length.
    #[error("frame with length {0} is too short to contain a crc16")]
    FrameTooShort(usize),
    #[error("checksum failure, calculated crc16 {expected:#06x}, found {found:#06x}")]
    IncorrectCrc { expected: u16, found: u16 },
    #[error("byte conversion error: {0}")]
    ByteConversion(#[from] ByteConversionError),
}
