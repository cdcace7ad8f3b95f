use super::Column;

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub col: Column,
    pub kind: Kind,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    Unknown(String),
    Number(String),
    Ident(String),
    Word(Word),
    Operator(Operator),
    Separator(Separator),
    Expression(Vec<Token>),
}

impl Token {
    pub fn new(col: Column, kind: Kind) -> Token {
        Token { col, kind }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.kind, Kind::Separator(_))
    }

    pub fn is_reserved_word(&self) -> bool {
        matches!(self.kind, Kind::Word(_))
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == Kind::Operator(op)
    }
}

impl Kind {
    /// Reserved words and named operators. The lexer asks after every
    /// letter so these win over a longer identifier.
    pub fn keyword(s: &str) -> Option<Kind> {
        match s {
            "TO" => Some(Kind::Word(Word::To)),
            "STEP" => Some(Kind::Word(Word::Step)),
            "THEN" => Some(Kind::Word(Word::Then)),
            "SIN" => Some(Kind::Operator(Operator::Sin)),
            "COS" => Some(Kind::Operator(Operator::Cos)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Separator(s) => write!(f, "{}", s),
            Expression(v) => {
                let s: Vec<String> = v.iter().map(|t| t.to_string()).collect();
                write!(f, "{}", s.join(" "))
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Step,
    Then,
    To,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Step => write!(f, "STEP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Separator {
    Comma,
    Semicolon,
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Separator::Comma => write!(f, ","),
            Separator::Semicolon => write!(f, ";"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Negate,
    Sin,
    Cos,
    LParen,
    RParen,
}

impl Operator {
    pub fn is_unary(&self) -> bool {
        use Operator::*;
        matches!(self, Negate | Sin | Cos)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Negate => write!(f, "-"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword() {
        assert_eq!(Kind::keyword("STEP"), Some(Kind::Word(Word::Step)));
        assert_eq!(Kind::keyword("COS"), Some(Kind::Operator(Operator::Cos)));
        assert_eq!(Kind::keyword("PICKLES"), None);
    }
}
