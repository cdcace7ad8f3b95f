/*!
# `GOSUB <line number>`

## Purpose
Call a subroutine.

## Remarks
Execution continues at the line like `GOTO`. The next `RETURN` comes back
to the statement after the `GOSUB`, even when it shares a line with
other statements. Calls nest.

## Example
```text
10 GOSUB 100: PLOT 0,0
20 STOP
100 INK 3
110 RETURN
```

*/
