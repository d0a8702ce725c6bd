use core::fmt;
use serde::{Deserialize, Serialize};

/// The value-category axis of a qualifier profile.
///
/// `Value` is a plain (non-reference) entity. The two reference kinds are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    /// A plain value, no reference.
    #[default]
    Value,
    /// An lvalue reference (`T&`): observe, do not take over.
    Lvalue,
    /// An rvalue reference (`T&&`): the receiver may take ownership.
    Rvalue,
}

impl ValueCategory {
    /// All categories, in declaration order.
    pub const ALL: [ValueCategory; 3] = [ValueCategory::Value, ValueCategory::Lvalue, ValueCategory::Rvalue];

    /// Collapses `self` the way a forwarding reference does (`T` + `&&`).
    ///
    /// `Value` becomes `Rvalue`; reference kinds are unchanged.
    #[inline]
    pub const fn collapse(self) -> Self {
        match self {
            ValueCategory::Value | ValueCategory::Rvalue => ValueCategory::Rvalue,
            ValueCategory::Lvalue => ValueCategory::Lvalue,
        }
    }

    /// Returns `true` for `Lvalue` and `Rvalue`.
    #[inline]
    pub const fn is_reference(self) -> bool {
        !matches!(self, ValueCategory::Value)
    }

    /// Returns `true` if a receiver may take over the storage.
    ///
    /// Plain values and rvalue references are ownable.
    #[inline]
    pub const fn is_ownable(self) -> bool {
        !matches!(self, ValueCategory::Lvalue)
    }

    /// The declarator suffix: `""`, `"&"` or `"&&"`.
    #[inline]
    pub const fn sigil(self) -> &'static str {
        match self {
            ValueCategory::Value => "",
            ValueCategory::Lvalue => "&",
            ValueCategory::Rvalue => "&&",
        }
    }

    pub(crate) const fn same_as(self, other: Self) -> bool {
        self as u8 == other as u8
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueCategory::Value => "value",
            ValueCategory::Lvalue => "lvalue",
            ValueCategory::Rvalue => "rvalue",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_turns_plain_values_into_rvalues() {
        assert_eq!(ValueCategory::Value.collapse(), ValueCategory::Rvalue);
        assert_eq!(ValueCategory::Lvalue.collapse(), ValueCategory::Lvalue);
        assert_eq!(ValueCategory::Rvalue.collapse(), ValueCategory::Rvalue);
    }

    #[test]
    fn only_lvalues_are_not_ownable() {
        let ownable: Vec<_> = ValueCategory::ALL.iter().map(|c| c.is_ownable()).collect();
        assert_eq!(ownable, vec![true, false, true]);
    }
}
