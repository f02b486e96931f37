//! CRC-16/MODBUS parameters and ready-made [crc::Crc] instances.
//!
//! These are useful for code which already uses the [crc] crate and its [crc::Digest] API.
//! The hand-built engine in [crate::checksum] produces identical results.

/// Catalog entry of the CRC algorithm used by Modbus RTU.
pub const MODBUS_ALGORITHM: &crc::Algorithm<u16> = &crc::CRC_16_MODBUS;

/// Initial value of the running checksum.
pub const MODBUS_INIT: u16 = 0xFFFF;

/// Generator polynomial in normal (non-reflected) form.
pub const MODBUS_POLY: u16 = 0x8005;

/// CRC of the ASCII string `123456789`.
pub const MODBUS_CHECK: u16 = 0x4B37;

/// CRC calculated over a complete frame including its own valid checksum.
pub const MODBUS_RESIDUE: u16 = 0x0000;

/// CRC algorithm used by Modbus RTU, using a [crc::NoTable] as the CRC implementation.
pub const CRC_MODBUS_NO_TABLE: crc::Crc<u16, crc::NoTable> =
    crc::Crc::<u16, crc::NoTable>::new(&crc::CRC_16_MODBUS);
/// CRC algorithm used by Modbus RTU, using [crc::Table<1>] as the CRC implementation.
pub const CRC_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
