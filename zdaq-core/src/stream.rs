//! Потоковое чтение пар (control-блок, data-блок) из байтовых источников.
//!
//! Протокол чтения одного канала строгий: сначала ровно 512 байт с
//! control-источника, затем ровно `nsamples × ssize` байт с data-источника.
//! Буферизации и look-ahead нет: каждый вызов потребляет ровно одну запись
//! и оставляет источники на границе следующей.

use std::io::{self, Read};

use zdaq_types::{ControlBlock, SampleBlock, SampleWidth, ZdaqError, ZdaqResult};

use crate::{decode_samples, ControlBlockExt, CTRL_BLOCK_SIZE};

/// Читает ровно `buf.len()` байт или возвращает [`ZdaqError::ShortRead`]
/// с фактическим числом прочитанных байт.
///
/// В отличие от `Read::read_exact`, недобор не маскируется под
/// `UnexpectedEof` без счётчиков.
pub fn read_exact_or_short<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
) -> ZdaqResult<()> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ZdaqError::Io(e)),
        }
    }

    if filled < buf.len() {
        return Err(ZdaqError::short_read(buf.len(), filled));
    }

    Ok(())
}

/// Читает и декодирует один control-блок (512 байт) из `ctrl`.
pub fn read_ctrl_block<R: Read>(ctrl: &mut R) -> ZdaqResult<ControlBlock> {
    let mut raw = [0u8; CTRL_BLOCK_SIZE];

    read_exact_or_short(ctrl, &mut raw)?;
    ControlBlock::decode(&raw)
}

/// Читает и декодирует один data-блок (`nsamples × ssize` байт) из `data`.
pub fn read_data_block<R: Read>(
    data: &mut R,
    nsamples: u32,
    ssize: u16,
) -> ZdaqResult<SampleBlock> {
    let total = nsamples as usize * ssize as usize;
    let mut raw = vec![0u8; total];

    read_exact_or_short(data, &mut raw)?;
    decode_samples(&raw, nsamples as usize, SampleWidth::from_ssize(ssize))
}

/// Читает одну пару (control-блок, data-блок) с пары источников канала.
///
/// `nsamples` и `ssize` для data-чтения берутся из только что
/// декодированного control-блока. Любая ошибка фатальна для текущего вызова
/// и пробрасывается без повторов.
pub fn read_channel<C: Read, D: Read>(
    ctrl: &mut C,
    data: &mut D,
) -> ZdaqResult<(ControlBlock, SampleBlock)> {
    let blk = read_ctrl_block(ctrl)?;
    let samples = read_data_block(data, blk.nsamples, blk.ssize)?;

    Ok((blk, samples))
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
