/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
The target is rounded down. If no line has that number, execution continues
at the next higher numbered line. When there is none the program ends.
`GOTO 0` starts again from the top.

## Example
```text
10 GOTO 30
20 PLOT 0, 0
30 PLOT 255, 175
```

*/
