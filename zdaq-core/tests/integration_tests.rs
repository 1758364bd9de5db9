use std::io::Cursor;

use zdaq_core::{
    read_channel, ControlBlockExt, ATTR_CHANNEL_START, ATTR_TRIGGER_START, CTRL_BLOCK_SIZE,
};
use zdaq_types::{ControlBlock, ZdaqError};

// ===========================================================================
// Test Vector #1 — запись, собранная вручную по смещениям протокола.
// Проверяет layout независимо от энкодера.
// ===========================================================================

fn build_test_vector_1() -> [u8; CTRL_BLOCK_SIZE] {
    let mut raw = [0u8; CTRL_BLOCK_SIZE];

    raw[0] = 1; // major_version
    raw[1] = 0; // minor_version
    raw[2] = 0x10; // zio_alarms
    raw[3] = 0x20; // dev_alarms
    raw[4..8].copy_from_slice(&7u32.to_le_bytes()); // seq_number
    raw[8..12].copy_from_slice(&3u32.to_le_bytes()); // nsamples
    raw[12..14].copy_from_slice(&4u16.to_le_bytes()); // ssize
    raw[14..16].copy_from_slice(&32u16.to_le_bytes()); // nbits
    raw[16..18].copy_from_slice(&2u16.to_le_bytes()); // fam
    raw[18..20].copy_from_slice(&4u16.to_le_bytes()); // type
    raw[20..28].copy_from_slice(&0x1122_3344_5566_7788u64.to_le_bytes()); // host_id
    raw[28..32].copy_from_slice(&9u32.to_le_bytes()); // dev_id
    raw[32..34].copy_from_slice(&1u16.to_le_bytes()); // cset
    raw[34..36].copy_from_slice(&2u16.to_le_bytes()); // chan
    raw[36..41].copy_from_slice(b"adc-a"); // dev_name, остальное NUL
    raw[48..56].copy_from_slice(&1_704_067_200u64.to_le_bytes()); // tstamp_secs
    raw[56..64].copy_from_slice(&500u64.to_le_bytes()); // tstamp_ticks
    raw[64..72].copy_from_slice(&1u64.to_le_bytes()); // tstamp_bins
    raw[72..76].copy_from_slice(&0x4000u32.to_le_bytes()); // mem_addr
    raw[80..84].copy_from_slice(&0x0000_0001u32.to_le_bytes()); // flags
    raw[84..92].copy_from_slice(b"ext-trig"); // trig_name

    // attr_channel: std_mask, ext_mask, первый std- и первый ext-атрибут
    let a = ATTR_CHANNEL_START;
    raw[a..a + 2].copy_from_slice(&0x0005u16.to_le_bytes());
    raw[a + 4..a + 8].copy_from_slice(&0x0000_0100u32.to_le_bytes());
    raw[a + 8..a + 12].copy_from_slice(&11u32.to_le_bytes());
    raw[a + 72..a + 76].copy_from_slice(&21u32.to_le_bytes());

    // attr_trigger: только std_mask и последний ext-атрибут
    let t = ATTR_TRIGGER_START;
    raw[t..t + 2].copy_from_slice(&0x0001u16.to_le_bytes());
    raw[t + 196..t + 200].copy_from_slice(&99u32.to_le_bytes());

    raw
}

#[test]
fn test_vector_1_decodes_field_for_field() {
    let blk = ControlBlock::decode(&build_test_vector_1()).unwrap();

    assert_eq!(blk.major_version, 1);
    assert_eq!(blk.minor_version, 0);
    assert_eq!(blk.zio_alarms, 0x10);
    assert_eq!(blk.dev_alarms, 0x20);
    assert_eq!(blk.seq_number, 7);
    assert_eq!(blk.nsamples, 3);
    assert_eq!(blk.ssize, 4);
    assert_eq!(blk.nbits, 32);
    assert_eq!(blk.fam, 2);
    assert_eq!(blk.devtype, 4);
    assert_eq!(blk.host_id, 0x1122_3344_5566_7788);
    assert_eq!(blk.dev_id, 9);
    assert_eq!(blk.cset, 1);
    assert_eq!(blk.chan, 2);
    assert_eq!(blk.dev_name, "adc-a");
    assert_eq!(blk.tstamp_secs, 1_704_067_200);
    assert_eq!(blk.tstamp_ticks, 500);
    assert_eq!(blk.tstamp_bins, 1);
    assert_eq!(blk.mem_addr, 0x4000);
    assert_eq!(blk.reserved, 0);
    assert_eq!(blk.flags, 1);
    assert_eq!(blk.trig_name, "ext-trig");

    assert_eq!(blk.attr_channel.std_mask, 0x0005);
    assert_eq!(blk.attr_channel.ext_mask, 0x0100);
    assert_eq!(blk.attr_channel.std_attrs[0], 11);
    assert_eq!(blk.attr_channel.std_attrs[1], 0);
    assert_eq!(blk.attr_channel.ext_attrs[0], 21);

    assert_eq!(blk.attr_trigger.std_mask, 0x0001);
    assert_eq!(blk.attr_trigger.ext_attrs[31], 99);
}

#[test]
fn test_vector_1_round_trips_through_encoder() {
    let raw = build_test_vector_1();
    let blk = ControlBlock::decode(&raw).unwrap();
    let re_encoded = blk.encode().unwrap();

    // Побайтовая идентичность: кодек не теряет и не переставляет ничего
    assert_eq!(re_encoded[..], raw[..]);
}

#[test]
fn test_vector_1_drives_data_read() {
    // ssize=4, nsamples=3 — data-источник обязан дать ровно 12 байт
    let mut ctrl = Cursor::new(build_test_vector_1().to_vec());

    let mut payload = Vec::new();
    for v in [0x0000_0001u32, 0x8000_0000, 0xFFFF_FFFF] {
        payload.extend_from_slice(&v.to_le_bytes());
    }
    let mut data = Cursor::new(payload);

    let (blk, samples) = read_channel(&mut ctrl, &mut data).unwrap();

    assert_eq!(blk.nsamples, 3);
    assert_eq!(samples.to_u64_vec(), vec![1, 0x8000_0000, 0xFFFF_FFFF]);
}

#[test]
fn test_vector_with_wrong_version_is_rejected() {
    let mut raw = build_test_vector_1();
    raw[0] = 0;

    assert!(matches!(
        ControlBlock::decode(&raw).unwrap_err(),
        ZdaqError::UnsupportedVersion {
            found: 0,
            expected: 1
        }
    ));
}
