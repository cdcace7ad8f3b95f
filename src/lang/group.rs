use super::token::{Kind, Operator, Token};

/// Collapse runs of expression tokens into single `Kind::Expression`
/// tokens. Separators and reserved words stay standalone and end a run.
/// When `assigns` is set, a leading identifier and the `=` after it are
/// passed through so `LET` and `FOR` can bind a target name.
pub fn group(tokens: &[Token], assigns: bool) -> Vec<Token> {
    let mut out: Vec<Token> = vec![];
    let mut run: Vec<Token> = vec![];
    let mut rest = tokens;
    if assigns {
        if let Some((first, tail)) = rest.split_first() {
            if matches!(first.kind, Kind::Ident(_)) {
                out.push(first.clone());
                rest = tail;
                if let Some((eq, tail)) = rest.split_first() {
                    if eq.is_operator(Operator::Equal) {
                        out.push(eq.clone());
                        rest = tail;
                    }
                }
            }
        }
    }
    for token in rest {
        if token.is_separator() || token.is_reserved_word() {
            flush(&mut out, &mut run);
            out.push(token.clone());
        } else {
            run.push(token.clone());
        }
    }
    flush(&mut out, &mut run);
    out
}

fn flush(out: &mut Vec<Token>, run: &mut Vec<Token>) {
    if run.is_empty() {
        return;
    }
    let start = run.first().map_or(0, |t| t.col.start);
    let end = run.last().map_or(0, |t| t.col.end);
    out.push(Token::new(start..end, Kind::Expression(std::mem::take(run))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lex, Word};

    #[test]
    fn test_for_groups() {
        let tokens = lex("FOR I=1 TO N*2 STEP -1").unwrap();
        let grouped = group(&tokens[1..], true);
        assert_eq!(grouped.len(), 7);
        assert_eq!(grouped[0].kind, Kind::Ident("I".to_string()));
        assert!(grouped[1].is_operator(Operator::Equal));
        assert!(matches!(grouped[2].kind, Kind::Expression(ref v) if v.len() == 1));
        assert_eq!(grouped[3].kind, Kind::Word(Word::To));
        assert!(matches!(grouped[4].kind, Kind::Expression(ref v) if v.len() == 3));
        assert_eq!(grouped[4].col, 11..14);
        assert_eq!(grouped[5].kind, Kind::Word(Word::Step));
    }

    #[test]
    fn test_equal_is_comparison_without_assigns() {
        let tokens = lex("IF A=1 THEN STOP").unwrap();
        let grouped = group(&tokens[1..], false);
        assert_eq!(grouped.len(), 3);
        assert!(matches!(grouped[0].kind, Kind::Expression(ref v) if v.len() == 3));
        assert_eq!(grouped[1].kind, Kind::Word(Word::Then));
    }
}
