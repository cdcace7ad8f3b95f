use super::token::*;

/// Lex one statement. Returns `None` when nothing but whitespace or a bare
/// line number is present.
pub fn lex(s: &str) -> Option<Vec<Token>> {
    StatementLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut Chars<'a>;

    fn peek_char(&mut self) -> Option<char> {
        self.chars().peek().map(|&(_, c)| c)
    }

    fn lookahead(&mut self, n: usize) -> Option<char> {
        self.chars().clone().nth(n).map(|(_, c)| c)
    }

    fn whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.chars().next();
        }
    }

    fn digits(&mut self, s: &mut String) {
        while let Some(ch) = self.peek_char() {
            if !is_basic_digit(ch) {
                break;
            }
            s.push(ch);
            self.chars().next();
        }
    }

    fn number(&mut self) -> Kind {
        let mut s = String::new();
        if let Some(sign) = self.peek_char().filter(|c| *c == '+' || *c == '-') {
            s.push(sign);
            self.chars().next();
        }
        self.digits(&mut s);
        if self.peek_char() == Some('.') && self.lookahead(1).map_or(false, is_basic_digit) {
            s.push('.');
            self.chars().next();
            self.digits(&mut s);
        }
        if let Some('e') | Some('E') = self.peek_char() {
            let exponent = match self.lookahead(1) {
                Some('+') | Some('-') => self.lookahead(2).map_or(false, is_basic_digit),
                Some(c) => is_basic_digit(c),
                None => false,
            };
            if exponent {
                s.push('E');
                self.chars().next();
                if let Some(sign) = self.peek_char().filter(|c| *c == '+' || *c == '-') {
                    s.push(sign);
                    self.chars().next();
                }
                self.digits(&mut s);
            }
        }
        Kind::Number(s)
    }

    fn alphabetic(&mut self) -> Kind {
        let mut s = String::new();
        while let Some(ch) = self.peek_char() {
            if !is_basic_alphabetic(ch) {
                break;
            }
            s.push(ch.to_ascii_uppercase());
            self.chars().next();
            if let Some(keyword) = Kind::keyword(&s) {
                return keyword;
            }
        }
        self.digits(&mut s);
        Kind::Ident(s)
    }

    fn minutia(&mut self, operand: bool) -> Kind {
        use Operator::*;
        let ch = match self.chars().next() {
            Some((_, ch)) => ch,
            None => return Kind::Unknown(String::new()),
        };
        let op = match ch {
            '+' => Plus,
            '-' if operand => Negate,
            '-' => Minus,
            '*' => Multiply,
            '/' => Divide,
            '=' => Equal,
            '(' => LParen,
            ')' => RParen,
            '<' => match self.peek_char() {
                Some('=') => {
                    self.chars().next();
                    LessEqual
                }
                Some('>') => {
                    self.chars().next();
                    NotEqual
                }
                _ => Less,
            },
            '>' => match self.peek_char() {
                Some('=') => {
                    self.chars().next();
                    GreaterEqual
                }
                _ => Greater,
            },
            ',' => return Kind::Separator(Separator::Comma),
            ';' => return Kind::Separator(Separator::Semicolon),
            _ => return Kind::Unknown(ch.to_string()),
        };
        Kind::Operator(op)
    }
}

struct StatementLexer<'a> {
    chars: Chars<'a>,
    len: usize,
    // An operand is expected next, so a sign belongs to a number.
    operand: bool,
    // The next identifier names the command.
    command: bool,
    first: bool,
}

impl<'a> Tokenizers<'a> for StatementLexer<'a> {
    fn chars(&mut self) -> &mut Chars<'a> {
        &mut self.chars
    }
}

impl<'a> Iterator for StatementLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let &(start, ch) = self.chars.peek()?;
        let kind = if self.starts_number(ch) {
            self.number()
        } else if is_basic_alphabetic(ch) {
            self.alphabetic()
        } else {
            let operand = self.operand;
            self.minutia(operand)
        };
        let end = self.chars.peek().map_or(self.len, |&(i, _)| i);
        let leading = std::mem::replace(&mut self.first, false);
        self.operand = match &kind {
            Kind::Ident(_) => self.command,
            Kind::Number(_) | Kind::Operator(Operator::RParen) => false,
            _ => true,
        };
        if !(leading && matches!(kind, Kind::Number(_))) {
            self.command = false;
        }
        Some(Token::new(start..end, kind))
    }
}

impl<'a> StatementLexer<'a> {
    fn lex(s: &str) -> Option<Vec<Token>> {
        let mut tokens: Vec<Token> = StatementLexer {
            chars: s.char_indices().peekable(),
            len: s.len(),
            operand: true,
            command: true,
            first: true,
        }
        .collect();
        if let Some(Kind::Number(_)) = tokens.first().map(|t| &t.kind) {
            tokens.remove(0);
        }
        if tokens.is_empty() {
            None
        } else {
            Some(tokens)
        }
    }

    fn starts_number(&mut self, ch: char) -> bool {
        if is_basic_digit(ch) {
            return true;
        }
        let mut at = 0;
        if ch == '+' || ch == '-' {
            if !self.operand {
                return false;
            }
            at = 1;
        }
        match self.lookahead(at) {
            Some('.') => self.lookahead(at + 1).map_or(false, is_basic_digit),
            Some(c) => at == 1 && is_basic_digit(c),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<Kind> {
        lex(s).unwrap_or_default().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_blank() {
        assert_eq!(lex(""), None);
        assert_eq!(lex("  \t "), None);
        assert_eq!(lex("100"), None);
    }

    #[test]
    fn test_columns() {
        let tokens = lex("10 PLOT 3,4").unwrap();
        assert_eq!(tokens[0].col, 3..7);
        assert_eq!(tokens[1].col, 8..9);
        assert_eq!(tokens[2].col, 9..10);
    }

    #[test]
    fn test_sign_after_command() {
        assert_eq!(
            kinds("draw -5,+.5"),
            vec![
                Kind::Ident("DRAW".to_string()),
                Kind::Number("-5".to_string()),
                Kind::Separator(Separator::Comma),
                Kind::Number("+.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_minus_after_operand() {
        assert_eq!(
            kinds("LET A=B-1"),
            vec![
                Kind::Ident("LET".to_string()),
                Kind::Ident("A".to_string()),
                Kind::Operator(Operator::Equal),
                Kind::Ident("B".to_string()),
                Kind::Operator(Operator::Minus),
                Kind::Number("1".to_string()),
            ]
        );
    }
}
