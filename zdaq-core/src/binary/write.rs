//! Низкоуровневая запись little-endian полей с курсором.

pub fn write_u16_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u16,
) {
    buf[*off..*off + 2].copy_from_slice(&val.to_le_bytes());
    *off += 2;
}

pub fn write_u32_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u32,
) {
    buf[*off..*off + 4].copy_from_slice(&val.to_le_bytes());
    *off += 4;
}

pub fn write_u64_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u64,
) {
    buf[*off..*off + 8].copy_from_slice(&val.to_le_bytes());
    *off += 8;
}
