//! Turns a function's raw byte range into a sequence of typed instructions.

use ff7_asm::comparator::Comparator;
use ff7_asm::{format, instruction::InstructionKind, table, Instruction, Opcode, Param};
use tracing::trace;

use crate::error::DecompileError;
use crate::reader::Reader;

/// Disassemble instructions starting at `start` in `script_bytes`, stopping
/// after the first `RET` is decoded or the function's declared `end` bound
/// (exclusive) is reached, whichever comes first.
pub fn disassemble_function(
    script_bytes: &[u8],
    start: u32,
    end: u32,
) -> Result<Vec<Instruction>, DecompileError> {
    let mut reader = Reader::new(script_bytes);
    reader.seek(start);
    let mut instructions = Vec::new();

    while reader.position() < end {
        let address = reader.position();
        let primary = reader.read_u8()?;

        let instruction = if primary == Opcode::Special as u8 {
            decode_special(&mut reader, address)?
        } else {
            let (opcode, info) = table::lookup(primary)
                .ok_or(DecompileError::UnknownOpcode { address, opcode: primary })?;
            if matches!(opcode, Opcode::Kawai | Opcode::Kawiw) {
                decode_kawai(&mut reader, address, opcode, info.mnemonic)?
            } else {
                decode_primary(&mut reader, address, opcode, info.mnemonic, info.format)?
            }
        };

        trace!(address, len = instruction.len, ?instruction.kind, "decoded instruction");
        let is_return = matches!(instruction.kind, InstructionKind::Return);
        instructions.push(instruction);
        if is_return {
            break;
        }
    }

    Ok(instructions)
}

fn decode_primary(
    reader: &mut Reader<'_>,
    address: u32,
    opcode: Opcode,
    mnemonic: &'static str,
    format_str: &'static str,
) -> Result<Instruction, DecompileError> {
    let operand_start = reader.position();
    let (params, consumed) = format::decode_args(format_str, reader.remaining(), operand_start)?;
    reader.seek(operand_start + consumed as u32);
    let len = reader.position() - address;

    let kind = match opcode {
        Opcode::Ret => InstructionKind::Return,
        Opcode::Nop => InstructionKind::Nop,

        Opcode::Jmpf | Opcode::Jmpfl => {
            let displacement = expect_integer(&params, 0)?;
            InstructionKind::Jump {
                target: address + len + displacement as u32,
                is_call: false,
            }
        }
        Opcode::Jmpb | Opcode::Jmpbl => {
            let displacement = expect_integer(&params, 0)?;
            InstructionKind::Jump { target: address.saturating_sub(displacement as u32), is_call: false }
        }

        Opcode::Ifub | Opcode::Ifubl | Opcode::Ifsw | Opcode::Ifswl | Opcode::Ifuw | Opcode::Ifuwl => {
            let lhs = params[0].clone();
            let rhs = params[1].clone();
            let comparator_byte = expect_integer(&params, 2)? as u8;
            let comparator = Comparator::from_byte(address, comparator_byte)?;
            let displacement = expect_integer(&params, 3)?;
            InstructionKind::CondJump {
                lhs,
                rhs,
                comparator,
                target: address + len + displacement as u32,
            }
        }

        Opcode::Req | Opcode::Reqsw | Opcode::Reqew | Opcode::Request => {
            InstructionKind::Call { mnemonic, args: params }
        }

        Opcode::Setbyte | Opcode::Setword => InstructionKind::Store {
            dest: params[0].clone(),
            value: params[1].clone(),
        },
        Opcode::Inc => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "+",
            operand: Param::Integer(1),
        },
        Opcode::Dec => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "-",
            operand: Param::Integer(1),
        },
        Opcode::Random => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "random",
            operand: Param::Integer(0),
        },
        Opcode::Minus => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "-",
            operand: params[1].clone(),
        },
        Opcode::Plus => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "+",
            operand: params[1].clone(),
        },
        Opcode::Mod => InstructionKind::CompoundStore {
            dest: params[0].clone(),
            op: "%",
            operand: params[1].clone(),
        },

        // Every jump-category opcode is matched explicitly above; reaching
        // here with `is_jump()` true means the table grew a jump mnemonic
        // this function hasn't learned to decode as a real edge yet.
        _ if opcode.is_jump() => {
            return Err(DecompileError::UnknownJumpType { address, opcode: opcode as u8 });
        }
        _ => InstructionKind::Call { mnemonic, args: params },
    };

    Ok(Instruction { address, len, opcode, special: None, kind })
}

/// Decode a `KAWAI`/`KAWIW` instruction: the byte after the opcode is the
/// total instruction length (including the opcode and length bytes
/// themselves), the next is a sub-opcode, and the rest are raw
/// byte-parameters. The address advances by the reported length, not by a
/// fixed count, so a malformed length can't be recovered from by assuming a
/// fixed width.
fn decode_kawai(
    reader: &mut Reader<'_>,
    address: u32,
    opcode: Opcode,
    mnemonic: &'static str,
) -> Result<Instruction, DecompileError> {
    let length_offset = reader.position();
    let length = reader.read_u8()?;
    if length < 3 {
        return Err(DecompileError::TruncatedInput {
            offset: length_offset,
            needed: (3 - length) as u32,
        });
    }
    let sub_opcode = reader.read_u8()?;
    let payload = reader.take((length - 3) as usize)?;

    let mut args = vec![Param::Integer(sub_opcode as i32)];
    args.extend(payload.iter().map(|&b| Param::Integer(b as i32)));

    let len = reader.position() - address;
    Ok(Instruction { address, len, opcode, special: None, kind: InstructionKind::Call { mnemonic, args } })
}

fn decode_special(reader: &mut Reader<'_>, address: u32) -> Result<Instruction, DecompileError> {
    let sub_byte = reader.read_u8()?;
    let (special, info) = table::lookup_special(sub_byte)
        .ok_or(DecompileError::UnknownSubOpcode { address, opcode: sub_byte })?;

    let operand_start = reader.position();
    let (params, consumed) = format::decode_args(info.format, reader.remaining(), operand_start)?;
    reader.seek(operand_start + consumed as u32);
    let len = reader.position() - address;

    Ok(Instruction {
        address,
        len,
        opcode: Opcode::Special,
        special: Some(special),
        kind: InstructionKind::Call { mnemonic: info.mnemonic, args: params },
    })
}

fn expect_integer(params: &[Param], index: usize) -> Result<i32, DecompileError> {
    match params.get(index) {
        Some(Param::Integer(v)) => Ok(*v),
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests;
