//! Button-press tokens
//!
//! Every key on the calculator maps to exactly one [`Token`]. Front ends
//! translate their raw labels with [`Token::from_label`] and never hand
//! strings to the interpreter.

use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// Returns `None` for anything that is not an ASCII decimal digit.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Times => '*',
            Self::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Times),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Plain IEEE-754 arithmetic. Division by zero yields `inf` or `NaN`.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Minus => a - b,
            Self::Times => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Operator(Operator),
    Clear,
    Equals,
}

impl Token {
    /// Map a button label to its token.
    ///
    /// Recognized labels: `"0"`..`"9"`, `"+"`, `"-"`, `"*"`, `"/"`, `"C"`, `"="`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            "=" => Some(Self::Equals),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    return Some(Self::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::new(c).map(Self::Digit),
                    _ => None,
                }
            }
        }
    }

    pub fn label(self) -> String {
        self.to_string()
    }

    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Clear => f.write_str("C"),
            Self::Equals => f.write_str("="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_rejects_non_digits() {
        assert!(Digit::new('7').is_some());
        assert!(Digit::new('a').is_none());
        assert!(Digit::new('.').is_none());
        assert!(Digit::new('٣').is_none()); // non-ASCII digit
    }

    #[test]
    fn test_from_label_maps_every_button() {
        for c in '0'..='9' {
            let token = Token::from_label(&c.to_string()).unwrap();
            assert_eq!(token, Token::Digit(Digit::new(c).unwrap()));
        }
        assert_eq!(Token::from_label("+"), Some(Token::Operator(Operator::Plus)));
        assert_eq!(Token::from_label("-"), Some(Token::Operator(Operator::Minus)));
        assert_eq!(Token::from_label("*"), Some(Token::Operator(Operator::Times)));
        assert_eq!(Token::from_label("/"), Some(Token::Operator(Operator::Divide)));
        assert_eq!(Token::from_label("C"), Some(Token::Clear));
        assert_eq!(Token::from_label("="), Some(Token::Equals));
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(Token::from_label(""), None);
        assert_eq!(Token::from_label("12"), None);
        assert_eq!(Token::from_label("++"), None);
        assert_eq!(Token::from_label("c"), None);
        assert_eq!(Token::from_label("%"), None);
    }

    #[test]
    fn test_label_inverts_from_label() {
        for label in ["0", "5", "9", "+", "-", "*", "/", "C", "="] {
            assert_eq!(Token::from_label(label).unwrap().label(), label);
        }
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Plus.apply(6.0, 3.0), 9.0);
        assert_eq!(Operator::Minus.apply(6.0, 3.0), 3.0);
        assert_eq!(Operator::Times.apply(6.0, 3.0), 18.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
    }
}
