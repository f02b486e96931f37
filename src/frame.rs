//! Checksum placement and validation for Modbus RTU frames.
//!
//! A frame is a payload followed by the CRC16 of that payload, low byte first. This module does
//! not look at the payload contents, so address and function code are carried opaquely.
#[cfg(feature = "alloc")]
use crate::checksum::encode;
use crate::checksum::{compute, CRC_LEN};
use crate::{ByteConversionError, CrcError};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Smallest frame which can be split into payload and checksum. The payload is empty in that
/// case.
pub const MIN_FRAME_LEN: usize = CRC_LEN;

/// Returns true if the last two bytes of the frame are the CRC16 of all preceding bytes.
///
/// Frames shorter than [MIN_FRAME_LEN] are never valid, this function does not fail for them.
/// Use [verify_frame] to get the reason of a failed validation.
#[inline]
pub fn validate(frame: &[u8]) -> bool {
    verify_frame(frame).is_ok()
}

/// Verify the trailing CRC16 of a frame and return the payload without the checksum on
/// success.
pub fn verify_frame(frame: &[u8]) -> Result<&[u8], CrcError> {
    let found = crc_from_raw_frame(frame)?;
    let payload = &frame[..frame.len() - CRC_LEN];
    let expected = compute(payload);
    if expected != found {
        return Err(CrcError::IncorrectCrc { expected, found });
    }
    Ok(payload)
}

/// Read the CRC16 from the last two bytes of a frame.
pub fn crc_from_raw_frame(frame: &[u8]) -> Result<u16, CrcError> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(CrcError::FrameTooShort(frame.len()));
    }
    let trailer = zc::CrcTrailer::from_bytes(&frame[frame.len() - CRC_LEN..])
        .ok_or(ByteConversionError::ZeroCopyFromError)?;
    Ok(trailer.crc())
}

/// Calculate the CRC16 over `buf[..payload_len]` and write it directly behind the payload.
/// Returns the length of the complete frame.
pub fn append_crc(buf: &mut [u8], payload_len: usize) -> Result<usize, ByteConversionError> {
    let frame_len = payload_len.saturating_add(CRC_LEN);
    if buf.len() < frame_len {
        return Err(ByteConversionError::ToSliceTooSmall {
            found: buf.len(),
            expected: frame_len,
        });
    }
    let trailer = zc::CrcTrailer::new(compute(&buf[..payload_len]));
    trailer
        .to_bytes(&mut buf[payload_len..frame_len])
        .ok_or(ByteConversionError::ZeroCopyToError)?;
    Ok(frame_len)
}

/// Write a complete frame consisting of the address, the function code, the data and the
/// CRC16 to the passed buffer. Returns the written frame length.
pub fn write_frame(
    address: u8,
    function_code: u8,
    data: &[u8],
    buf: &mut [u8],
) -> Result<usize, ByteConversionError> {
    let payload_len = 2 + data.len();
    if buf.len() < payload_len + CRC_LEN {
        return Err(ByteConversionError::ToSliceTooSmall {
            found: buf.len(),
            expected: payload_len + CRC_LEN,
        });
    }
    buf[0] = address;
    buf[1] = function_code;
    buf[2..payload_len].copy_from_slice(data);
    append_crc(buf, payload_len)
}

/// Copy the payload into a new vector and append its CRC16.
#[cfg(feature = "alloc")]
pub fn frame_to_vec(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + CRC_LEN);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&encode(payload));
    frame
}

/// Allocating variant of [write_frame].
#[cfg(feature = "alloc")]
pub fn build_frame(address: u8, function_code: u8, data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(2 + data.len() + CRC_LEN);
    frame.push(address);
    frame.push(function_code);
    frame.extend_from_slice(data);
    let crc = encode(&frame);
    frame.extend_from_slice(&crc);
    frame
}

pub mod zc {
    use zerocopy::byteorder::{LittleEndian, U16};
    use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

    /// Wire representation of the CRC16 at the end of a frame.
    #[derive(FromZeroes, FromBytes, AsBytes, Unaligned, Debug, Copy, Clone, PartialEq, Eq)]
    #[repr(C)]
    pub struct CrcTrailer {
        crc: U16<LittleEndian>,
    }

    impl CrcTrailer {
        pub fn new(crc: u16) -> Self {
            CrcTrailer {
                crc: U16::new(crc),
            }
        }

        #[inline]
        pub fn crc(&self) -> u16 {
            self.crc.get()
        }

        pub fn from_bytes(slice: &[u8]) -> Option<Self> {
            CrcTrailer::read_from(slice)
        }

        pub fn to_bytes(&self, slice: &mut [u8]) -> Option<()> {
            self.write_to(slice)
        }
    }
}
