//! Growable byte accumulation for string payloads.

use alloc::vec::Vec;

use bstr::BString as ByteString;

use crate::error::ErrorKind;

/// Byte accumulator backing string values and object keys.
///
/// Every reservation goes through `try_reserve_exact`, so an allocation
/// failure surfaces as [`ErrorKind::Memory`] instead of aborting. The
/// capacity schedule is 16 bytes up front, then 1.5x on overflow.
#[derive(Debug)]
pub(crate) struct ByteBuf {
    buf: Vec<u8>,
}

impl ByteBuf {
    const INITIAL_CAPACITY: usize = 16;

    pub fn new() -> Result<Self, ErrorKind> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(Self::INITIAL_CAPACITY)
            .map_err(|_| ErrorKind::Memory)?;
        Ok(Self { buf })
    }

    fn grow_for(&mut self, extra: usize) -> Result<(), ErrorKind> {
        let needed = self.buf.len() + extra;
        if needed <= self.buf.capacity() {
            return Ok(());
        }
        let target = needed + needed / 2;
        self.buf
            .try_reserve_exact(target - self.buf.len())
            .map_err(|_| ErrorKind::Memory)
    }

    pub fn push(&mut self, byte: u8) -> Result<(), ErrorKind> {
        self.grow_for(1)?;
        self.buf.push(byte);
        Ok(())
    }

    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        self.grow_for(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn into_string(self) -> ByteString {
        ByteString::from(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteBuf;

    #[test]
    fn starts_at_initial_capacity() {
        let buf = ByteBuf::new().unwrap();
        assert_eq!(buf.buf.capacity(), ByteBuf::INITIAL_CAPACITY);
    }

    #[test]
    fn grows_by_half() {
        let mut buf = ByteBuf::new().unwrap();
        for b in 0..17u8 {
            buf.push(b).unwrap();
        }
        // 17 needed -> 17 + 17/2 = 25 reserved
        assert!(buf.buf.capacity() >= 25);
        assert_eq!(buf.buf.len(), 17);
    }

    #[test]
    fn extend_grows_once_for_bulk() {
        let mut buf = ByteBuf::new().unwrap();
        buf.extend(&[b'x'; 40]).unwrap();
        assert_eq!(buf.buf.len(), 40);
        assert!(buf.buf.capacity() >= 60);
        assert_eq!(buf.into_string(), alloc::vec![b'x'; 40]);
    }
}
