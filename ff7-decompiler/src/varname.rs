//! Variable-bank to human-readable identifier resolution.

use crate::formatter::Formatter;

/// Namespace prefix every resolved variable reference is printed under,
/// matching `ff7_field_codegen.h::FormatValueOrVariable`'s hardcoded
/// `"FFVII.Data."` prefix. Bank 0 (a literal, not a variable slot) is the
/// only case that never carries it.
const PREFIX: &str = "FFVII.Data";

/// Resolve a `(bank, address)` pair into the identifier text it prints as,
/// consulting `formatter` for a friendlier name before falling back to the
/// bank-derived default.
///
/// - Bank `0` is a literal value, not a variable slot, and prints as the
///   bare decimal address with no prefix and no formatter consultation.
/// - Banks `1`, `2`, `3`, `13`, `15` are persistent variables: `addr` is
///   masked to its low 8 bits, and the formatter's override (if non-empty)
///   is used as `<PREFIX>.<name>`, else `<PREFIX>.var_<bank>_<addrLow8>`.
/// - Banks `5`, `6` are the per-call/per-entity scratch banks, resolved the
///   same way but defaulting to `<PREFIX>.temp_<bank>_<addrLow8>`.
/// - Any other bank degrades to `<PREFIX>.unknown_<bank>_<addrLow8>`
///   without consulting the formatter: an unenumerated bank showing up in a
///   script is common enough that aborting the whole function over one
///   unresolved name would throw away decompiled output that is otherwise
///   perfectly readable.
pub fn var_name(formatter: &dyn Formatter, bank: u8, addr: u16) -> String {
    match bank {
        0 => addr.to_string(),
        1 | 2 | 3 | 13 | 15 => named_or_default(formatter, bank, addr, "var"),
        5 | 6 => named_or_default(formatter, bank, addr, "temp"),
        other => {
            let addr_low8 = addr as u8;
            format!("{PREFIX}.unknown_{other}_{addr_low8}")
        }
    }
}

fn named_or_default(formatter: &dyn Formatter, bank: u8, addr: u16, default_kind: &str) -> String {
    let addr_low8 = addr as u8;
    let friendly = formatter.var_name(bank, addr_low8 as u16);
    if friendly.is_empty() {
        format!("{PREFIX}.{default_kind}_{bank}_{addr_low8}")
    } else {
        format!("{PREFIX}.{friendly}")
    }
}

#[cfg(test)]
mod tests;
