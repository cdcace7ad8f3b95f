/*!
# Statements
*/

#[path = "statements/bright.rs"]
#[allow(non_snake_case)]
pub mod BRIGHT;

#[path = "statements/circle.rs"]
#[allow(non_snake_case)]
pub mod CIRCLE;

#[path = "statements/cls.rs"]
#[allow(non_snake_case)]
pub mod CLS;

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/draw.rs"]
#[allow(non_snake_case)]
pub mod DRAW;

#[path = "statements/flash.rs"]
#[allow(non_snake_case)]
pub mod FLASH;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/ink.rs"]
#[allow(non_snake_case)]
pub mod INK;

#[path = "statements/inverse.rs"]
#[allow(non_snake_case)]
pub mod INVERSE;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/over.rs"]
#[allow(non_snake_case)]
pub mod OVER;

#[path = "statements/paper.rs"]
#[allow(non_snake_case)]
pub mod PAPER;

#[path = "statements/plot.rs"]
#[allow(non_snake_case)]
pub mod PLOT;

#[path = "statements/poke.rs"]
#[allow(non_snake_case)]
pub mod POKE;

#[path = "statements/randomize.rs"]
#[allow(non_snake_case)]
pub mod RANDOMIZE;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/restore.rs"]
#[allow(non_snake_case)]
pub mod RESTORE;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;
