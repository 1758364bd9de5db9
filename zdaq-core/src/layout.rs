//! Компилированная схема заголовка control-блока v1.0.
//!
//! Layout — константа всего процесса: упорядоченный список дескрипторов
//! (имя, смещение, ширина) без какой-либо мутации в рантайме. Дискриминант
//! [`FieldWidth`] заменяет любую рефлексию по «форме» поля: текстовые поля
//! помечены [`FieldWidth::Name`] и получают NUL-трим при декодировании.

/// Ширина (и способ интерпретации) одного поля заголовка.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// Беззнаковое целое, 1 байт
    U8,
    /// Беззнаковое целое, 2 байта, little-endian
    U16,
    /// Беззнаковое целое, 4 байта, little-endian
    U32,
    /// Беззнаковое целое, 8 байт, little-endian
    U64,
    /// 12-байтное ASCII поле, обрезается по первому NUL
    Name,
}

/// Дескриптор одного поля заголовка control-блока.
#[derive(Debug, Clone, Copy)]
pub struct CtrlField {
    /// Имя поля (как в структуре [`zdaq_types::ControlBlock`])
    pub name: &'static str,
    /// Смещение от начала записи, байты
    pub offset: usize,
    /// Ширина и интерпретация
    pub width: FieldWidth,
}

impl FieldWidth {
    /// Размер поля в байтах.
    pub const fn bytes(&self) -> usize {
        match self {
            FieldWidth::U8 => 1,
            FieldWidth::U16 => 2,
            FieldWidth::U32 => 4,
            FieldWidth::U64 => 8,
            FieldWidth::Name => 12,
        }
    }
}

const fn f(
    name: &'static str,
    offset: usize,
    width: FieldWidth,
) -> CtrlField {
    CtrlField {
        name,
        offset,
        width,
    }
}

/// Упорядоченный layout 96-байтного заголовка (v1.0, без выравнивания).
pub const CTRL_HEADER_LAYOUT: [CtrlField; 22] = [
    f("major_version", 0, FieldWidth::U8),
    f("minor_version", 1, FieldWidth::U8),
    f("zio_alarms", 2, FieldWidth::U8),
    f("dev_alarms", 3, FieldWidth::U8),
    f("seq_number", 4, FieldWidth::U32),
    f("nsamples", 8, FieldWidth::U32),
    f("ssize", 12, FieldWidth::U16),
    f("nbits", 14, FieldWidth::U16),
    f("fam", 16, FieldWidth::U16),
    f("devtype", 18, FieldWidth::U16),
    f("host_id", 20, FieldWidth::U64),
    f("dev_id", 28, FieldWidth::U32),
    f("cset", 32, FieldWidth::U16),
    f("chan", 34, FieldWidth::U16),
    f("dev_name", 36, FieldWidth::Name),
    f("tstamp_secs", 48, FieldWidth::U64),
    f("tstamp_ticks", 56, FieldWidth::U64),
    f("tstamp_bins", 64, FieldWidth::U64),
    f("mem_addr", 72, FieldWidth::U32),
    f("reserved", 76, FieldWidth::U32),
    f("flags", 80, FieldWidth::U32),
    f("trig_name", 84, FieldWidth::Name),
];

/// Суммарная длина заголовка по схеме.
pub const fn header_len() -> usize {
    let last = CTRL_HEADER_LAYOUT[CTRL_HEADER_LAYOUT.len() - 1];
    last.offset + last.width.bytes()
}

/// Дескриптор поля по имени (для инструментов и тестов).
pub fn field(name: &str) -> Option<&'static CtrlField> {
    CTRL_HEADER_LAYOUT.iter().find(|fld| fld.name == name)
}
