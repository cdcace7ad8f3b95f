/*!
# `DATA <number>[,<number>...]`

## Purpose
Store numbers in the program for `READ`.

## Remarks
`DATA` does nothing when executed. The first `READ` collects the values
of every `DATA` statement in the program, in order, wherever they are.
Only literal numbers are allowed; an expression is a `SYNTAX ERROR`.

## Example
```text
10 READ X, Y: PLOT X, Y
20 DATA 100, 50
```

*/
