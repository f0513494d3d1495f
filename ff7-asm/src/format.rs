//! Decoding and encoding of the argument format-string mini-language.
//!
//! Every opcode in [`crate::table`] carries a format string made of the
//! characters below; decoding walks the string left to right, consuming
//! bytes from the operand slice for each one and producing a [`Param`].
//!
//! | char | meaning                              | bytes consumed |
//! |------|---------------------------------------|----------------|
//! | `B`  | unsigned byte                          | 1 |
//! | `b`  | signed byte                            | 1 |
//! | `w`  | unsigned word (u16, little-endian)     | 2 |
//! | `s`  | signed word (i16, little-endian)       | 2 |
//! | `d`  | unsigned dword (u32, little-endian)    | 4 |
//! | `i`  | signed dword (i32, little-endian)      | 4 |
//! | `N`  | bank/address variable pair             | 3 |
//! | `U`  | length-prefixed string (`u8` length)   | 1 + len |

use crate::error::AsmError;
use crate::param::Param;

/// Decode `format`'s arguments out of `bytes`, starting at byte offset 0
/// within the slice (callers pass the already-positioned operand slice).
///
/// Returns the decoded params and the number of bytes consumed.
pub fn decode_args(
    format: &'static str,
    bytes: &[u8],
    base_offset: u32,
) -> Result<(Vec<Param>, usize), AsmError> {
    let mut params = Vec::with_capacity(format.len());
    let mut pos = 0usize;

    for ch in format.chars() {
        let offset = base_offset + pos as u32;
        match ch {
            'B' => {
                let v = read_u8(bytes, pos, offset)?;
                params.push(Param::Integer(v as i32));
                pos += 1;
            }
            'b' => {
                let v = read_u8(bytes, pos, offset)? as i8;
                params.push(Param::Integer(v as i32));
                pos += 1;
            }
            'w' => {
                let v = read_u16(bytes, pos, offset)?;
                params.push(Param::Integer(v as i32));
                pos += 2;
            }
            's' => {
                let v = read_u16(bytes, pos, offset)? as i16;
                params.push(Param::Integer(v as i32));
                pos += 2;
            }
            'd' => {
                let v = read_u32(bytes, pos, offset)?;
                params.push(Param::Integer(v as i32));
                pos += 4;
            }
            'i' => {
                let v = read_u32(bytes, pos, offset)? as i32;
                params.push(Param::Integer(v));
                pos += 4;
            }
            'N' => {
                let bank = read_u8(bytes, pos, offset)?;
                let addr = read_u16(bytes, pos + 1, offset + 1)?;
                params.push(Param::Variable(bank, addr));
                pos += 3;
            }
            'U' => {
                let len = read_u8(bytes, pos, offset)? as usize;
                pos += 1;
                if bytes.len() < pos + len {
                    return Err(AsmError::TruncatedInput {
                        offset: base_offset + pos as u32,
                        needed: (pos + len - bytes.len()) as u32,
                    });
                }
                let s = String::from_utf8_lossy(&bytes[pos..pos + len]).into_owned();
                params.push(Param::String(s));
                pos += len;
            }
            other => return Err(AsmError::InvalidFormatChar { ch: other, format }),
        }
    }

    Ok((params, pos))
}

/// Encode `params` back into bytes following `format`, the inverse of
/// [`decode_args`]. Used by the round-trip property test; not exercised by
/// the decompiler pipeline itself (this crate never re-assembles output).
pub fn encode_args(format: &'static str, params: &[Param]) -> Result<Vec<u8>, AsmError> {
    let mut out = Vec::new();
    for (ch, param) in format.chars().zip(params) {
        match (ch, param) {
            ('B' | 'b', Param::Integer(v)) => out.push(*v as u8),
            ('w' | 's', Param::Integer(v)) => out.extend_from_slice(&(*v as u16).to_le_bytes()),
            ('d' | 'i', Param::Integer(v)) => out.extend_from_slice(&(*v as u32).to_le_bytes()),
            ('N', Param::Variable(bank, addr)) => {
                out.push(*bank);
                out.extend_from_slice(&addr.to_le_bytes());
            }
            ('U', Param::String(s)) => {
                out.push(s.len() as u8);
                out.extend_from_slice(s.as_bytes());
            }
            (other, _) => return Err(AsmError::InvalidFormatChar { ch: other, format }),
        }
    }
    Ok(out)
}

fn read_u8(bytes: &[u8], pos: usize, offset: u32) -> Result<u8, AsmError> {
    bytes
        .get(pos)
        .copied()
        .ok_or(AsmError::TruncatedInput { offset, needed: 1 })
}

fn read_u16(bytes: &[u8], pos: usize, offset: u32) -> Result<u16, AsmError> {
    let slice = bytes
        .get(pos..pos + 2)
        .ok_or(AsmError::TruncatedInput { offset, needed: 2 })?;
    Ok(u16::from_le_bytes([slice[0], slice[1]]))
}

fn read_u32(bytes: &[u8], pos: usize, offset: u32) -> Result<u32, AsmError> {
    let slice = bytes
        .get(pos..pos + 4)
        .ok_or(AsmError::TruncatedInput { offset, needed: 4 })?;
    Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}
