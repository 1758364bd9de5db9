//! Низкоуровневое чтение little-endian полей с курсором.
//!
//! Порядок байт фиксирован протоколом v1.0 (little-endian), поэтому в
//! отличие от форматов с настраиваемым endianness параметра `is_le` нет.

pub fn read_u16_le(
    buf: &[u8],
    off: &mut usize,
) -> u16 {
    let b = [buf[*off], buf[*off + 1]];
    *off += 2;
    u16::from_le_bytes(b)
}

pub fn read_u32_le(
    buf: &[u8],
    off: &mut usize,
) -> u32 {
    let b = [buf[*off], buf[*off + 1], buf[*off + 2], buf[*off + 3]];
    *off += 4;
    u32::from_le_bytes(b)
}

pub fn read_u64_le(
    buf: &[u8],
    off: &mut usize,
) -> u64 {
    let b = [
        buf[*off],
        buf[*off + 1],
        buf[*off + 2],
        buf[*off + 3],
        buf[*off + 4],
        buf[*off + 5],
        buf[*off + 6],
        buf[*off + 7],
    ];
    *off += 8;
    u64::from_le_bytes(b)
}
