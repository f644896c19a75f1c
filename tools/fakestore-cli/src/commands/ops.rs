//! Cart operations given on the command line.

use std::fmt;
use std::str::FromStr;

use fakestore_commerce::ProductId;

/// One cart operation, written as `add:<id>`, `remove:<id>`, `clear:<id>` or `clear-all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Remove(ProductId),
    Clear(ProductId),
    ClearAll,
}

impl FromStr for CartOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "clear-all" {
            return Ok(CartOp::ClearAll);
        }

        let (verb, id) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <op>:<id> or clear-all, got '{s}'"))?;
        let id: ProductId = id
            .parse()
            .map_err(|_| format!("invalid product id '{id}'"))?;

        match verb {
            "add" => Ok(CartOp::Add(id)),
            "remove" => Ok(CartOp::Remove(id)),
            "clear" => Ok(CartOp::Clear(id)),
            other => Err(format!("unknown cart operation '{other}'")),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{id}"),
            CartOp::Remove(id) => write!(f, "remove:{id}"),
            CartOp::Clear(id) => write!(f, "clear:{id}"),
            CartOp::ClearAll => write!(f, "clear-all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops() {
        assert_eq!("add:1".parse(), Ok(CartOp::Add(ProductId::new(1))));
        assert_eq!("remove:12".parse(), Ok(CartOp::Remove(ProductId::new(12))));
        assert_eq!("clear:3".parse(), Ok(CartOp::Clear(ProductId::new(3))));
        assert_eq!("clear-all".parse(), Ok(CartOp::ClearAll));
    }

    #[test]
    fn test_parse_errors() {
        assert!("add".parse::<CartOp>().is_err());
        assert!("add:x".parse::<CartOp>().is_err());
        assert!("buy:1".parse::<CartOp>().is_err());
    }

    #[test]
    fn test_display_matches_syntax() {
        for text in ["add:4", "remove:4", "clear:4", "clear-all"] {
            assert_eq!(text.parse::<CartOp>().unwrap().to_string(), text);
        }
    }
}
