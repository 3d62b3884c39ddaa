/// Single entry of a unit table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Unit {
    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }

    /// Magnitude step without a customary name, like «10 kg».
    ///
    /// Placeholders occupy a real column but can never be picked or referenced by symbol.
    pub const fn placeholder() -> Self {
        Self::new("", "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.symbol.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        assert!(Unit::placeholder().is_placeholder());
        assert!(Unit::new(" ", " ").is_placeholder());
        assert!(!Unit::new("kg", "kilogramme").is_placeholder());
    }
}
