//! Instruction text to [`Instruction`] assembly.

use tracing::debug;

use crate::ir::bytecode::{Instruction, mnemonic};
use crate::ir::error::AssembleError;
use crate::lexer::{InputMode, is_terminator_line};
use crate::parser::{is_identifier, parse_literal};

/// Assembles instruction text, one instruction per line.
///
/// Blank lines are skipped. In [`InputMode::Interactive`] a lone `.` line ends
/// assembly and the rest of the text is ignored.
pub fn assemble(text: &str, mode: InputMode) -> Result<Vec<Instruction>, AssembleError> {
    let mut instructions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if mode == InputMode::Interactive && is_terminator_line(line) {
            break;
        }
        if let Some(instruction) = assemble_line(line, index + 1)? {
            instructions.push(instruction);
        }
    }
    debug!(instructions = instructions.len(), "assembled program");
    Ok(instructions)
}

/// Assembles one line; `Ok(None)` for a blank line.
pub fn assemble_line(line: &str, line_number: usize) -> Result<Option<Instruction>, AssembleError> {
    let mut fields = line.split_ascii_whitespace();
    let Some(opcode) = fields.next() else {
        return Ok(None);
    };

    let instruction = match opcode {
        mnemonic::PUSH => {
            let operand = required_operand(&mut fields, opcode, line_number)?;
            let value = parse_literal(operand)
                .ok_or_else(|| AssembleError::illegal_operand(line_number, operand))?;
            Instruction::Push(value)
        }
        mnemonic::LOAD => Instruction::Load(name_operand(&mut fields, opcode, line_number)?),
        mnemonic::STORE => Instruction::Store(name_operand(&mut fields, opcode, line_number)?),
        other => Instruction::operand_free(other)
            .ok_or_else(|| AssembleError::illegal_instruction(line_number, other))?,
    };

    if let Some(extra) = fields.next() {
        return Err(AssembleError::illegal_operand(line_number, extra));
    }
    Ok(Some(instruction))
}

fn required_operand<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    opcode: &str,
    line_number: usize,
) -> Result<&'a str, AssembleError> {
    fields
        .next()
        .ok_or_else(|| AssembleError::premature_end(line_number, opcode))
}

fn name_operand<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    opcode: &str,
    line_number: usize,
) -> Result<String, AssembleError> {
    let operand = required_operand(fields, opcode, line_number)?;
    if !is_identifier(operand) {
        return Err(AssembleError::illegal_operand(line_number, operand));
    }
    Ok(operand.to_string())
}
