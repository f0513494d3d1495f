use super::*;

#[test]
fn reads_scalars_in_sequence() {
    let bytes = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0x01);
    assert_eq!(reader.read_u16().unwrap(), 0x1234);
    assert_eq!(reader.read_u32().unwrap(), 0x12345678);
    assert!(reader.is_empty());
}

#[test]
fn seek_repositions_cursor() {
    let bytes = [0xaa, 0xbb, 0xcc];
    let mut reader = Reader::new(&bytes);
    reader.seek(2);
    assert_eq!(reader.read_u8().unwrap(), 0xcc);
}

#[test]
fn truncated_read_reports_needed_bytes() {
    let bytes = [0x01];
    let mut reader = Reader::new(&bytes);
    let err = reader.read_u32().unwrap_err();
    assert_eq!(err, DecompileError::TruncatedInput { offset: 0, needed: 3 });
}

#[test]
fn cstring_trims_at_first_nul() {
    let bytes = *b"AERITH\0\0";
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_cstring_fixed(8).unwrap(), "AERITH");
}
