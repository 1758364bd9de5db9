//! Кодек control-блоков ZIO версия 1.0
//!
//! Бинарное представление 512-байтной control-записи acquisition-устройства:
//! 96-байтный заголовок с фиксированными смещениями, два 200-байтных
//! attribute-региона (канал и триггер) и 16 байт хвоста. Все многобайтовые
//! числа хранятся в порядке little-endian, это зафиксировано версией
//! протокола и не настраивается.

use zdaq_types::{
    AttributeSet, ControlBlock, ZdaqError, ZdaqResult, EXT_ATTR_COUNT, STD_ATTR_COUNT,
};

use crate::{
    binary::{read_u16_le, read_u32_le, read_u64_le, write_u16_le, write_u32_le, write_u64_le},
    layout,
};

/// Полный размер control-записи.
pub const CTRL_BLOCK_SIZE: usize = 512;

/// Размер фиксированного заголовка.
pub const CTRL_HEADER_SIZE: usize = 96;

/// Размер одного attribute-региона.
pub const ATTR_REGION_SIZE: usize = 200;

/// Начало региона атрибутов канала.
pub const ATTR_CHANNEL_START: usize = 96;

/// Начало региона атрибутов триггера.
pub const ATTR_TRIGGER_START: usize = ATTR_CHANNEL_START + ATTR_REGION_SIZE;

/// Размер строковых полей `dev_name` / `trig_name`.
pub const CTRL_NAME_SIZE: usize = 12;

/// Поддерживаемая major-версия layout'а.
pub const CTRL_MAJOR_VERSION: u8 = 1;

// Декодер и компилированная схема описывают один и тот же заголовок
const _: () = assert!(layout::header_len() == CTRL_HEADER_SIZE);
const _: () = assert!(CTRL_HEADER_SIZE + 2 * ATTR_REGION_SIZE <= CTRL_BLOCK_SIZE);

/// Кодек 200-байтного attribute-региона.
pub trait AttributeSetExt: Sized {
    /// Декодирует регион. Чистая функция: маски — метаданные, массивы всегда
    /// заполняются целиком (16 std + 32 ext).
    fn decode(raw: &[u8; ATTR_REGION_SIZE]) -> Self;

    /// Сериализует регион в 200 байт.
    fn encode(&self) -> [u8; ATTR_REGION_SIZE];
}

/// Кодек 512-байтной control-записи.
pub trait ControlBlockExt: Sized {
    /// Декодирует запись целиком: заголовок + оба attribute-региона.
    ///
    /// Возвращает [`ZdaqError::UnsupportedVersion`] если major-версия записи
    /// не совпадает с [`CTRL_MAJOR_VERSION`].
    fn decode(raw: &[u8; CTRL_BLOCK_SIZE]) -> ZdaqResult<Self>;

    /// Сериализует запись в 512 байт (хвост [496..512) зануляется).
    fn encode(&self) -> ZdaqResult<[u8; CTRL_BLOCK_SIZE]>;
}

impl AttributeSetExt for AttributeSet {
    fn decode(raw: &[u8; ATTR_REGION_SIZE]) -> Self {
        let mut off = 0;

        let std_mask = read_u16_le(raw, &mut off);
        off += 2; // reserved
        let ext_mask = read_u32_le(raw, &mut off);

        let mut std_attrs = [0u32; STD_ATTR_COUNT];
        for slot in std_attrs.iter_mut() {
            *slot = read_u32_le(raw, &mut off);
        }

        let mut ext_attrs = [0u32; EXT_ATTR_COUNT];
        for slot in ext_attrs.iter_mut() {
            *slot = read_u32_le(raw, &mut off);
        }

        debug_assert_eq!(off, ATTR_REGION_SIZE);

        AttributeSet {
            std_mask,
            ext_mask,
            std_attrs,
            ext_attrs,
        }
    }

    fn encode(&self) -> [u8; ATTR_REGION_SIZE] {
        let mut buf = [0u8; ATTR_REGION_SIZE];
        let mut off = 0;

        write_u16_le(&mut buf, &mut off, self.std_mask);
        off += 2; // reserved
        write_u32_le(&mut buf, &mut off, self.ext_mask);

        for &attr in &self.std_attrs {
            write_u32_le(&mut buf, &mut off, attr);
        }
        for &attr in &self.ext_attrs {
            write_u32_le(&mut buf, &mut off, attr);
        }

        debug_assert_eq!(off, ATTR_REGION_SIZE);
        buf
    }
}

impl ControlBlockExt for ControlBlock {
    fn decode(raw: &[u8; CTRL_BLOCK_SIZE]) -> ZdaqResult<Self> {
        let mut off = 0;

        let major_version = raw[off];
        off += 1;
        let minor_version = raw[off];
        off += 1;

        if major_version != CTRL_MAJOR_VERSION {
            return Err(ZdaqError::UnsupportedVersion {
                found: major_version,
                expected: CTRL_MAJOR_VERSION,
            });
        }

        let zio_alarms = raw[off];
        off += 1;
        let dev_alarms = raw[off];
        off += 1;

        let seq_number = read_u32_le(raw, &mut off);
        let nsamples = read_u32_le(raw, &mut off);
        let ssize = read_u16_le(raw, &mut off);
        let nbits = read_u16_le(raw, &mut off);
        let fam = read_u16_le(raw, &mut off);
        let devtype = read_u16_le(raw, &mut off);
        let host_id = read_u64_le(raw, &mut off);
        let dev_id = read_u32_le(raw, &mut off);
        let cset = read_u16_le(raw, &mut off);
        let chan = read_u16_le(raw, &mut off);

        let dev_name = decode_name(&raw[off..off + CTRL_NAME_SIZE]);
        off += CTRL_NAME_SIZE;

        let tstamp_secs = read_u64_le(raw, &mut off);
        let tstamp_ticks = read_u64_le(raw, &mut off);
        let tstamp_bins = read_u64_le(raw, &mut off);
        let mem_addr = read_u32_le(raw, &mut off);
        let reserved = read_u32_le(raw, &mut off);
        let flags = read_u32_le(raw, &mut off);

        let trig_name = decode_name(&raw[off..off + CTRL_NAME_SIZE]);
        off += CTRL_NAME_SIZE;

        debug_assert_eq!(off, CTRL_HEADER_SIZE);

        // Срезы имеют статически точную длину
        let channel_raw: &[u8; ATTR_REGION_SIZE] = raw[ATTR_CHANNEL_START..ATTR_TRIGGER_START]
            .try_into()
            .unwrap();
        let trigger_raw: &[u8; ATTR_REGION_SIZE] = raw
            [ATTR_TRIGGER_START..ATTR_TRIGGER_START + ATTR_REGION_SIZE]
            .try_into()
            .unwrap();

        // Хвост [496..512) протоколом не используется и игнорируется

        Ok(ControlBlock {
            major_version,
            minor_version,
            zio_alarms,
            dev_alarms,
            seq_number,
            nsamples,
            ssize,
            nbits,
            fam,
            devtype,
            host_id,
            dev_id,
            cset,
            chan,
            dev_name,
            tstamp_secs,
            tstamp_ticks,
            tstamp_bins,
            mem_addr,
            reserved,
            flags,
            trig_name,
            attr_channel: AttributeSet::decode(channel_raw),
            attr_trigger: AttributeSet::decode(trigger_raw),
        })
    }

    fn encode(&self) -> ZdaqResult<[u8; CTRL_BLOCK_SIZE]> {
        let mut buf = [0u8; CTRL_BLOCK_SIZE];
        let mut off = 0;

        buf[off] = self.major_version;
        off += 1;
        buf[off] = self.minor_version;
        off += 1;
        buf[off] = self.zio_alarms;
        off += 1;
        buf[off] = self.dev_alarms;
        off += 1;

        write_u32_le(&mut buf, &mut off, self.seq_number);
        write_u32_le(&mut buf, &mut off, self.nsamples);
        write_u16_le(&mut buf, &mut off, self.ssize);
        write_u16_le(&mut buf, &mut off, self.nbits);
        write_u16_le(&mut buf, &mut off, self.fam);
        write_u16_le(&mut buf, &mut off, self.devtype);
        write_u64_le(&mut buf, &mut off, self.host_id);
        write_u32_le(&mut buf, &mut off, self.dev_id);
        write_u16_le(&mut buf, &mut off, self.cset);
        write_u16_le(&mut buf, &mut off, self.chan);

        encode_name(&mut buf, &mut off, &self.dev_name)?;

        write_u64_le(&mut buf, &mut off, self.tstamp_secs);
        write_u64_le(&mut buf, &mut off, self.tstamp_ticks);
        write_u64_le(&mut buf, &mut off, self.tstamp_bins);
        write_u32_le(&mut buf, &mut off, self.mem_addr);
        write_u32_le(&mut buf, &mut off, self.reserved);
        write_u32_le(&mut buf, &mut off, self.flags);

        encode_name(&mut buf, &mut off, &self.trig_name)?;

        debug_assert_eq!(off, CTRL_HEADER_SIZE);

        buf[ATTR_CHANNEL_START..ATTR_TRIGGER_START].copy_from_slice(&self.attr_channel.encode());
        buf[ATTR_TRIGGER_START..ATTR_TRIGGER_START + ATTR_REGION_SIZE]
            .copy_from_slice(&self.attr_trigger.encode());

        // [496..512) — хвост, уже нули
        Ok(buf)
    }
}

/// Декодирует 12-байтное ASCII поле: обрезка по первому NUL.
fn decode_name(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Записывает строку в 12-байтный слот, дополняя NUL-ами.
fn encode_name(
    buf: &mut [u8],
    off: &mut usize,
    name: &str,
) -> ZdaqResult<()> {
    let bytes = name.as_bytes();

    if bytes.len() > CTRL_NAME_SIZE {
        return Err(ZdaqError::NameTooLong {
            actual: bytes.len(),
            max: CTRL_NAME_SIZE,
        });
    }

    buf[*off..*off + bytes.len()].copy_from_slice(bytes);
    *off += CTRL_NAME_SIZE;

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
