use super::{Context, Flow, ForLoop};
use crate::error;
use crate::lang::{Error, Kind, LineNumber, Token, STOP_LINE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

type Handler = fn(&mut Context, &Args) -> Result<Option<Flow>>;

/// One slot of a command's argument signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// An expression, evaluated while binding.
    Number,
    /// A variable name.
    Ident,
    /// Required keyword or punctuation.
    Literal(&'static str),
    /// The raw statement text from here on.
    Rest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    Name(Rc<str>),
    Keyword,
    Rest(String),
}

pub struct Command {
    pub name: &'static str,
    /// Leading `name =` is kept out of the first expression.
    pub assigns: bool,
    shape: &'static [Shape],
    /// Accepted counts of bound slots, keywords included.
    arity: &'static [usize],
    pub handler: Handler,
}

use Shape::*;

const N: Shape = Number;
const I: Shape = Ident;
const COMMA: Shape = Literal(",");

const READ_SHAPE: &[Shape] = &[
    I, COMMA, I, COMMA, I, COMMA, I, COMMA, I, COMMA, I, COMMA, I, COMMA, I,
];

const COMMANDS: &[Command] = &[
    Command {
        name: "LET",
        assigns: true,
        shape: &[I, Literal("="), N],
        arity: &[3],
        handler: r#let,
    },
    Command {
        name: "FOR",
        assigns: true,
        shape: &[I, Literal("="), N, Literal("TO"), N, Literal("STEP"), N],
        arity: &[5, 7],
        handler: r#for,
    },
    Command {
        name: "NEXT",
        assigns: false,
        shape: &[I],
        arity: &[1],
        handler: next,
    },
    Command {
        name: "GOTO",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: goto,
    },
    Command {
        name: "GOSUB",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: gosub,
    },
    Command {
        name: "RETURN",
        assigns: false,
        shape: &[],
        arity: &[0],
        handler: r#return,
    },
    Command {
        name: "IF",
        assigns: false,
        shape: &[N, Literal("THEN"), Rest],
        arity: &[3],
        handler: r#if,
    },
    Command {
        name: "DATA",
        assigns: false,
        shape: &[Rest],
        arity: &[0, 1],
        handler: nothing,
    },
    Command {
        name: "READ",
        assigns: false,
        shape: READ_SHAPE,
        arity: &[1, 3, 5, 7, 9, 11, 13, 15],
        handler: read,
    },
    Command {
        name: "RESTORE",
        assigns: false,
        shape: &[],
        arity: &[0],
        handler: restore,
    },
    Command {
        name: "REM",
        assigns: false,
        shape: &[Rest],
        arity: &[0, 1],
        handler: rem,
    },
    Command {
        name: "RANDOMIZE",
        assigns: false,
        shape: &[N],
        arity: &[0, 1],
        handler: randomize,
    },
    Command {
        name: "STOP",
        assigns: false,
        shape: &[],
        arity: &[0],
        handler: stop,
    },
    Command {
        name: "PLOT",
        assigns: false,
        shape: &[N, COMMA, N],
        arity: &[3],
        handler: plot,
    },
    Command {
        name: "DRAW",
        assigns: false,
        shape: &[N, COMMA, N],
        arity: &[3],
        handler: draw,
    },
    Command {
        name: "CIRCLE",
        assigns: false,
        shape: &[N, COMMA, N, COMMA, N],
        arity: &[5],
        handler: circle,
    },
    Command {
        name: "INK",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: ink,
    },
    Command {
        name: "PAPER",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: paper,
    },
    Command {
        name: "BRIGHT",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: bright,
    },
    Command {
        name: "FLASH",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: flash,
    },
    Command {
        name: "OVER",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: over,
    },
    Command {
        name: "INVERSE",
        assigns: false,
        shape: &[N],
        arity: &[1],
        handler: inverse,
    },
    Command {
        name: "POKE",
        assigns: false,
        shape: &[N, COMMA, N],
        arity: &[3],
        handler: poke,
    },
    Command {
        name: "CLS",
        assigns: false,
        shape: &[],
        arity: &[0],
        handler: cls,
    },
];

impl Command {
    /// `name` is already uppercase.
    pub fn find(name: &str) -> Option<&'static Command> {
        COMMANDS.iter().find(|c| c.name == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|c| c.name)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Command {{ {} {:?} }}", self.name, self.shape)
    }
}

/// Bound arguments, one per matched slot.
#[derive(Debug, Default)]
pub struct Args(Vec<Arg>);

impl Args {
    /// Walk the grouped tokens in lockstep with the command's shape.
    /// `text` is the statement the token columns point into.
    pub fn bind(
        ctx: &mut Context,
        command: &Command,
        tokens: &[Token],
        text: &str,
    ) -> Result<Args> {
        let mut args = vec![];
        let mut tokens = tokens.iter();
        for shape in command.shape {
            let token = match tokens.next() {
                Some(token) => token,
                None => break,
            };
            match shape {
                Number => match &token.kind {
                    Kind::Expression(run) => args.push(Arg::Number(ctx.evaluate(run)?)),
                    _ => return Err(error!(SyntaxError, ..&token.col; "EXPECTED EXPRESSION")),
                },
                Ident => args.push(Arg::Name(identifier(token)?)),
                Literal(s) => {
                    if token.to_string() != *s {
                        return Err(error!(SyntaxError, ..&token.col; expected(s)));
                    }
                    args.push(Arg::Keyword);
                }
                Rest => {
                    let rest = text.get(token.col.start..).unwrap_or_default();
                    args.push(Arg::Rest(rest.trim().to_string()));
                    return Args::finish(command, args);
                }
            }
        }
        if let Some(token) = tokens.next() {
            return Err(error!(SyntaxError, ..&token.col; "UNEXPECTED TOKEN"));
        }
        Args::finish(command, args)
    }

    fn finish(command: &Command, args: Vec<Arg>) -> Result<Args> {
        if !command.arity.contains(&args.len()) {
            return Err(error!(SyntaxError; "WRONG NUMBER OF ARGUMENTS"));
        }
        Ok(Args(args))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn number(&self, index: usize) -> f64 {
        match self.0.get(index) {
            Some(Arg::Number(n)) => *n,
            _ => 0.0,
        }
    }

    pub fn name(&self, index: usize) -> Result<Rc<str>> {
        match self.0.get(index) {
            Some(Arg::Name(name)) => Ok(name.clone()),
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &Rc<str>> {
        self.0.iter().filter_map(|arg| match arg {
            Arg::Name(name) => Some(name),
            _ => None,
        })
    }

    pub fn rest(&self, index: usize) -> &str {
        match self.0.get(index) {
            Some(Arg::Rest(s)) => s,
            _ => "",
        }
    }
}

fn identifier(token: &Token) -> Result<Rc<str>> {
    match &token.kind {
        Kind::Ident(name) => Ok(name.as_str().into()),
        Kind::Expression(run) if run.len() == 1 => match &run[0].kind {
            Kind::Ident(name) => Ok(name.as_str().into()),
            _ => Err(error!(SyntaxError, ..&token.col; "EXPECTED VARIABLE")),
        },
        _ => Err(error!(SyntaxError, ..&token.col; "EXPECTED VARIABLE")),
    }
}

fn expected(literal: &str) -> &'static str {
    match literal {
        "=" => "EXPECTED =",
        "," => "EXPECTED ,",
        "TO" => "EXPECTED TO",
        "STEP" => "EXPECTED STEP",
        "THEN" => "EXPECTED THEN",
        _ => "UNEXPECTED TOKEN",
    }
}

/// Line numbers are floored and clamped. Anything over 9999 is never found.
fn line_target(value: f64) -> LineNumber {
    value.floor().clamp(0.0, LineNumber::MAX as f64) as LineNumber
}

fn byte(value: f64) -> u8 {
    (value as i64 & 0xFF) as u8
}

fn r#let(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.vars.store(&args.name(0)?, args.number(2))?;
    Ok(None)
}

fn r#for(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    let var = args.name(0)?;
    let step = if args.len() == 7 { args.number(6) } else { 1.0 };
    ctx.vars.store(&var, args.number(2))?;
    Ok(Some(Flow::Loop(ForLoop::new(var, step, args.number(4)))))
}

fn next(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    let var = args.name(0)?;
    let (value, done, resume) = match ctx.loops.get(&var) {
        Some(for_loop) => {
            let value = ctx.vars.fetch(&var) + for_loop.step;
            (value, for_loop.is_done(value), for_loop.resume)
        }
        None => return Err(error!(NextWithoutFor)),
    };
    if done {
        ctx.loops.remove(&var);
        Ok(None)
    } else {
        ctx.vars.store(&var, value)?;
        Ok(Some(Flow::Jump(resume)))
    }
}

fn goto(_ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    Ok(Some(Flow::Goto(line_target(args.number(0)))))
}

fn gosub(_ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    Ok(Some(Flow::Gosub(line_target(args.number(0)))))
}

fn r#return(ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    match ctx.returns.pop() {
        Some(offset) => Ok(Some(Flow::Jump(offset))),
        None => Err(error!(ReturnWithoutGosub)),
    }
}

fn r#if(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    if args.number(0) == 0.0 {
        return Ok(None);
    }
    let statement = args.rest(2);
    ctx.execute(statement).map_err(|e| e.in_statement(statement))
}

fn nothing(_ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    Ok(None)
}

fn rem(_ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    Ok(Some(Flow::EndOfLine))
}

fn read(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    for var in args.names() {
        let value = ctx.data()?.read()?;
        ctx.vars.store(var, value)?;
    }
    Ok(None)
}

fn restore(ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    ctx.data()?.restore();
    Ok(None)
}

fn randomize(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    let seed = args.number(0);
    ctx.rng = if args.is_empty() || seed == 0.0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed as u64)
    };
    Ok(None)
}

fn stop(_ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    Ok(Some(Flow::Goto(STOP_LINE)))
}

fn plot(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.plot(args.number(0), args.number(2));
    Ok(None)
}

fn draw(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.draw(args.number(0), args.number(2));
    Ok(None)
}

/// Most sides a `CIRCLE` polygon gets. Radii past the screen size hit this.
const MAX_CIRCLE_SIDES: usize = 1024;

fn circle(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    let (x, y, r) = (args.number(0), args.number(2), args.number(4));
    if !(x.is_finite() && y.is_finite() && r.is_finite()) {
        return Ok(None);
    }
    let sides = circle_sides(r);
    let step = 2.0 * PI / sides as f64;
    let start = (x + r, y);
    let mut last = start;
    for side in 1..sides {
        let angle = side as f64 * step;
        let point = (x + r * angle.cos(), y + r * angle.sin());
        ctx.display.line(last.0, last.1, point.0, point.1);
        last = point;
    }
    ctx.display.line(last.0, last.1, start.0, start.1);
    Ok(None)
}

/// Sides of roughly one pixel each: a turn in steps of `PI / (|r| + 4)`.
fn circle_sides(r: f64) -> usize {
    let sides = (2.0 * (r.abs() + 4.0)).ceil();
    sides.min(MAX_CIRCLE_SIDES as f64) as usize
}

fn ink(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.ink(byte(args.number(0)));
    Ok(None)
}

fn paper(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.paper(byte(args.number(0)));
    Ok(None)
}

fn bright(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.bright(byte(args.number(0)));
    Ok(None)
}

fn flash(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.flash(byte(args.number(0)));
    Ok(None)
}

fn over(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.set_over(byte(args.number(0)) & 1 != 0);
    Ok(None)
}

fn inverse(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.set_inverse(byte(args.number(0)) & 1 != 0);
    Ok(None)
}

fn poke(ctx: &mut Context, args: &Args) -> Result<Option<Flow>> {
    ctx.display.poke(args.number(0) as i64, byte(args.number(2)));
    Ok(None)
}

fn cls(ctx: &mut Context, _args: &Args) -> Result<Option<Flow>> {
    ctx.display.cls();
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::screen::Display;

    fn context() -> Context {
        Context::new("".into(), Display::new())
    }

    #[test]
    fn test_line_target() {
        assert_eq!(line_target(20.9), 20);
        assert_eq!(line_target(-5.0), 0);
        assert_eq!(line_target(1e9), 65535);
        assert_eq!(line_target(f64::NAN), 0);
    }

    #[test]
    fn test_circle_sides() {
        assert_eq!(circle_sides(0.0), 8);
        assert_eq!(circle_sides(-40.0), 88);
        assert_eq!(circle_sides(1e12), MAX_CIRCLE_SIDES);
    }

    #[test]
    fn test_byte() {
        assert_eq!(byte(-1.0), 255);
        assert_eq!(byte(300.7), 44);
    }

    #[test]
    fn test_every_command_has_unique_name() {
        let mut names: Vec<&str> = Command::names().collect();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn test_bind_errors() {
        let mut ctx = context();
        let e = ctx.execute("PLOT 1 2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        let e = ctx.execute("FOR I=1 STEP 2").unwrap_err();
        assert_eq!(e.column(), 8..12);
        let e = ctx.execute("GOTO 10,20").unwrap_err();
        assert_eq!(e.column(), 7..8);
        let e = ctx.execute("PRINT 1").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownCommand);
        let e = ctx.execute("LET 5=1").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }

    #[test]
    fn test_optional_slots() {
        let mut ctx = context();
        assert_eq!(
            ctx.execute("FOR I=1 TO 5"),
            Ok(Some(Flow::Loop(ForLoop::new("I".into(), 1.0, 5.0))))
        );
        assert_eq!(ctx.vars.fetch("I"), 1.0);
        let e = ctx.execute("READ A,B,C,D,E,F,G,H,J").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(ctx.execute("REM"), Ok(Some(Flow::EndOfLine)));
        assert_eq!(ctx.execute("RANDOMIZE"), Ok(None));
    }

    #[test]
    fn test_if_runs_rest() {
        let mut ctx = context();
        assert_eq!(ctx.execute("IF 2>1 THEN GOTO 40"), Ok(Some(Flow::Goto(40))));
        assert_eq!(ctx.execute("IF 0 THEN GOTO 40"), Ok(None));
        assert_eq!(ctx.execute("IF 1 THEN IF 1 THEN LET X=7"), Ok(None));
        assert_eq!(ctx.vars.fetch("X"), 7.0);
    }
}
