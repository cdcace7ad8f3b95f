use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    statement: Option<String>,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            statement: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn statement(&self) -> Option<&str> {
        self.statement.as_deref()
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Attach the failing statement. The innermost statement wins, so an
    /// error raised inside `IF .. THEN` keeps the text after `THEN`.
    pub fn in_statement(mut self, statement: &str) -> Error {
        if self.statement.is_none() {
            self.statement = Some(statement.to_string());
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        self.column = column.clone();
        self
    }

    pub fn message(mut self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    OutOfMemory = 7,
    UnknownCommand = 24,
    Break = 25,
}

impl ErrorCode {
    /// NEXT, RETURN and READ failures: the program text was fine but the
    /// run state could not satisfy it.
    pub fn is_control_flow(self) -> bool {
        matches!(
            self,
            ErrorCode::NextWithoutFor | ErrorCode::ReturnWithoutGosub | ErrorCode::OutOfData
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            OutOfMemory => "OUT OF MEMORY",
            UnknownCommand => "UNKNOWN COMMAND",
            Break => "BREAK",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(statement) = &self.statement {
            suffix.push_str(&format!(" \"{}\"", statement));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)
        } else if self.statement.is_some() {
            write!(f, "{} IN{}", self.code, suffix)
        } else {
            write!(f, "{}{}", self.code, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_display_names_statement() {
        let e = error!(SyntaxError, ..&(5..6); "EXPECTED EXPRESSION").in_statement("PLOT 1,,2");
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN \"PLOT 1,,2\" (5..6); EXPECTED EXPRESSION"
        );
        assert_eq!(error!(OutOfData).to_string(), "OUT OF DATA");
    }

    #[test]
    fn test_innermost_statement_wins() {
        let e = error!(NextWithoutFor)
            .in_statement("NEXT X")
            .in_statement("IF 1 THEN NEXT X");
        assert_eq!(e.statement(), Some("NEXT X"));
        assert!(e.code().is_control_flow());
    }
}
