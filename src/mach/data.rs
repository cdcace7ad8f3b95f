use crate::error;
use crate::lang::{lex, Error, Kind, Separator, Token};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## DATA values and the READ cursor
///
/// Harvested once, on the first `READ`, by scanning every statement of the
/// program in source order. A `REM` hides the rest of its line.

#[derive(Debug, Default)]
pub struct DataCursor {
    values: Vec<f64>,
    index: usize,
}

impl DataCursor {
    pub fn harvest(source: &str) -> Result<DataCursor> {
        let mut values = vec![];
        for line in source.lines() {
            for statement in line.split(':').map(str::trim) {
                let tokens = match lex(statement) {
                    Some(tokens) => tokens,
                    None => continue,
                };
                match tokens.first().map(|t| &t.kind) {
                    Some(Kind::Ident(name)) if name == "DATA" => {}
                    Some(Kind::Ident(name)) if name == "REM" => break,
                    _ => continue,
                }
                DataCursor::values(&tokens[1..], &mut values)
                    .map_err(|e| e.in_statement(statement))?;
            }
        }
        debug!("harvested {} DATA values", values.len());
        Ok(DataCursor { values, index: 0 })
    }

    fn values(tokens: &[Token], values: &mut Vec<f64>) -> Result<()> {
        for token in tokens {
            match &token.kind {
                Kind::Separator(Separator::Comma) => {}
                Kind::Number(s) => match s.parse::<f64>() {
                    Ok(n) => values.push(n),
                    Err(_) => return Err(error!(SyntaxError, ..&token.col; "INVALID NUMBER")),
                },
                _ => return Err(error!(SyntaxError, ..&token.col; "EXPECTED NUMBER")),
            }
        }
        Ok(())
    }

    pub fn read(&mut self) -> Result<f64> {
        match self.values.get(self.index) {
            Some(value) => {
                self.index += 1;
                Ok(*value)
            }
            None => Err(error!(OutOfData)),
        }
    }

    pub fn restore(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_harvest_in_order() {
        let mut data = DataCursor::harvest("10 DATA 1, -2.5\n20 PLOT 0,0: DATA 3E2\n").unwrap();
        assert_eq!(data.read(), Ok(1.0));
        assert_eq!(data.read(), Ok(-2.5));
        assert_eq!(data.read(), Ok(300.0));
        assert_eq!(data.read().unwrap_err().code(), ErrorCode::OutOfData);
        data.restore();
        assert_eq!(data.read(), Ok(1.0));
    }

    #[test]
    fn test_rem_hides_rest_of_line() {
        let mut data = DataCursor::harvest("REM DATA 9: DATA 8\nDATA 7").unwrap();
        assert_eq!(data.read(), Ok(7.0));
        assert_eq!(data.read().unwrap_err().code(), ErrorCode::OutOfData);
    }

    #[test]
    fn test_expression_in_data() {
        let err = DataCursor::harvest("DATA 1, X").unwrap_err();
        assert_eq!(err.statement(), Some("DATA 1, X"));
    }
}
