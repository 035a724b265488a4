// oopsleuth - core/parser.rs
//
// Tolerant single-line parser for kernel-oops backtrace frames.
// Core layer: pure functions over string slices, no I/O.
//
// Grammar (every component optional, but a match needs at least an address
// or a function name, and must consume the whole line):
//
//   [ "[0x" HEX{1..16} "] " ]      address
//   [ "? " ]                       reliable = false
//   [ SYMBOL ]                     function_name
//   [ "+0x" HEX{1..16} ]           function_offset
//   [ "/0x" HEX{1..16} ]           function_length
//   [ " [" MODULE "]" ]            module_name
//   [ " from " <same, minus "? "> ]  from_* group

use crate::core::model::KernelOopsFrame;
use crate::util::constants::MAX_ADDRESS_HEX_DIGITS;
use crate::util::error::ParseError;

/// Attempt to recognise one kernel-oops frame line.
///
/// On success returns the populated frame. On failure returns an error and
/// produces no partial state: the caller's text is untouched and can be
/// offered to a different line-kind classifier. This failure path is how
/// non-frame log noise (headers, register dumps, blank lines) gets skipped
/// by the scanner in `app::scan`.
///
/// The whole line must be consumed (trailing whitespace permitted).
/// Without that requirement the leading word of a header line such as
/// `"Call Trace:"` would scan as a bare function name.
///
/// A hexadecimal numeral longer than 16 digits cannot fit in 64 bits and
/// rejects the entire frame; values are never truncated or wrapped.
pub fn parse_frame(line: &str) -> Result<KernelOopsFrame, ParseError> {
    let mut rest = line;
    let mut frame = KernelOopsFrame::new();

    frame.address = parse_bracketed_address(&mut rest)?;

    if skip_token(&mut rest, "? ") {
        frame.reliable = false;
    }

    let symbol = parse_symbol_part(&mut rest)?;
    frame.function_name = symbol.name;
    frame.function_offset = symbol.offset;
    frame.function_length = symbol.length;
    frame.module_name = symbol.module;

    if frame.address == 0 && frame.function_name.is_none() {
        return Err(ParseError::NotAFrame);
    }

    // " from " clause: same grammar again, minus the reliable marker, which
    // only ever applies to the primary frame.
    let mut after_from = rest;
    if skip_token(&mut after_from, " from ") {
        let from_address = parse_bracketed_address(&mut after_from)?;
        let caller = parse_symbol_part(&mut after_from)?;
        if from_address != 0 || caller.name.is_some() {
            frame.from_address = from_address;
            frame.from_function_name = caller.name;
            frame.from_function_offset = caller.offset;
            frame.from_function_length = caller.length;
            frame.from_module_name = caller.module;
            rest = after_from;
        }
    }

    if !rest.chars().all(char::is_whitespace) {
        return Err(ParseError::NotAFrame);
    }

    Ok(frame)
}

// =============================================================================
// Cursor helpers
// =============================================================================
//
// Each helper advances the caller's slice only when its production matched
// in full, so a failed optional component leaves the cursor where it was.

/// Consume `token` from the front of `input` if present.
fn skip_token(input: &mut &str, token: &str) -> bool {
    if let Some(rest) = input.strip_prefix(token) {
        *input = rest;
        true
    } else {
        false
    }
}

/// Consume a run of hex digits and return its value.
///
/// Fails with `NotAFrame` when no digit is present and with `HexOverflow`
/// when the run exceeds 16 digits; the overflow case rejects the whole
/// frame at the call sites above.
fn take_hex(input: &mut &str) -> Result<u64, ParseError> {
    let digits = input
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(input.len());

    if digits == 0 {
        return Err(ParseError::NotAFrame);
    }
    if digits > MAX_ADDRESS_HEX_DIGITS {
        return Err(ParseError::HexOverflow { digits });
    }

    let (numeral, rest) = input.split_at(digits);
    // Cannot overflow after the digit-count check; the map is belt-and-braces.
    let value =
        u64::from_str_radix(numeral, 16).map_err(|_| ParseError::HexOverflow { digits })?;
    *input = rest;
    Ok(value)
}

/// Parse an optional `[0xHEX] ` address production.
///
/// Returns 0 (the "absent" sentinel) when the production is not present;
/// the cursor is only advanced on a complete match. Hex overflow inside a
/// well-formed `[0x..` prefix propagates as a frame-level failure.
fn parse_bracketed_address(input: &mut &str) -> Result<u64, ParseError> {
    let mut local = *input;
    if !skip_token(&mut local, "[0x") {
        return Ok(0);
    }
    let value = match take_hex(&mut local) {
        Ok(value) => value,
        Err(overflow @ ParseError::HexOverflow { .. }) => return Err(overflow),
        Err(_) => return Ok(0),
    };
    if !skip_token(&mut local, "] ") {
        return Ok(0);
    }
    *input = local;
    Ok(value)
}

/// Symbol characters the kernel emits in resolved names.
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '!')
}

/// The name/offset/length/module group, shared between the primary frame
/// and the `from` clause.
struct SymbolPart {
    name: Option<String>,
    offset: u64,
    length: u64,
    module: Option<String>,
}

fn parse_symbol_part(input: &mut &str) -> Result<SymbolPart, ParseError> {
    let mut part = SymbolPart {
        name: None,
        offset: 0,
        length: 0,
        module: None,
    };

    // Name: a contiguous symbol token. Stops at '+', '/', whitespace, or
    // brackets by construction of the character class, so the " from "
    // separator is never swallowed.
    let name_len = input
        .find(|c: char| !is_symbol_char(c))
        .unwrap_or(input.len());
    if name_len > 0 {
        let (name, rest) = input.split_at(name_len);
        part.name = Some(name.to_string());
        *input = rest;
    }

    let mut local = *input;
    if skip_token(&mut local, "+0x") {
        match take_hex(&mut local) {
            Ok(value) => {
                part.offset = value;
                *input = local;
            }
            Err(overflow @ ParseError::HexOverflow { .. }) => return Err(overflow),
            Err(_) => {} // "+0x" with no digits: leave unconsumed
        }
    }

    let mut local = *input;
    if skip_token(&mut local, "/0x") {
        match take_hex(&mut local) {
            Ok(value) => {
                part.length = value;
                *input = local;
            }
            Err(overflow @ ParseError::HexOverflow { .. }) => return Err(overflow),
            Err(_) => {}
        }
    }

    part.module = parse_module(input);
    Ok(part)
}

/// Parse an optional ` [module]` production.
fn parse_module(input: &mut &str) -> Option<String> {
    let mut local = *input;
    if !skip_token(&mut local, " [") {
        return None;
    }
    let end = local.find(']')?;
    if end == 0 {
        return None;
    }
    let module = local[..end].to_string();
    *input = &local[end + 1..];
    Some(module)
}
