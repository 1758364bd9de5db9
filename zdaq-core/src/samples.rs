//! Декодер data-блоков: N беззнаковых little-endian значений фиксированной
//! ширины.

use zdaq_types::{SampleBlock, SampleWidth, ZdaqError, ZdaqResult};

/// Декодирует сырой payload в блок из `nsamples` выборок ширины `width`.
///
/// Длина `raw` обязана равняться `nsamples × width` ровно: ни одного
/// лишнего и ни одного недостающего байта. Иначе —
/// [`ZdaqError::SizeMismatch`].
pub fn decode_samples(
    raw: &[u8],
    nsamples: usize,
    width: SampleWidth,
) -> ZdaqResult<SampleBlock> {
    let expected = nsamples * width.bytes();

    if raw.len() != expected {
        return Err(ZdaqError::size_mismatch(expected, raw.len()));
    }

    let blk = match width {
        SampleWidth::U8 => SampleBlock::U8(raw.to_vec()),
        SampleWidth::U16 => SampleBlock::U16(
            raw.chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        SampleWidth::U32 => SampleBlock::U32(
            raw.chunks_exact(4)
                .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
                .collect(),
        ),
        SampleWidth::U64 => SampleBlock::U64(
            raw.chunks_exact(8)
                .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
                .collect(),
        ),
    };

    Ok(blk)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
