/*!
# `IF <expression> THEN <statement>`

## Purpose
Execute a statement only when an expression is not zero.

## Remarks
Anything that may stand alone can follow `THEN`, including another `IF`.
Only the one statement belongs to the `IF`; a statement after a colon
always runs.

## Example
```text
10 LET X = X + 1
20 IF X < 100 THEN IF X <> 50 THEN GOTO 10
```

*/
