/*!
# `READ <variable>[,<variable>...]`

## Purpose
Assign the next values from `DATA` statements.

## Remarks
Up to eight variables may be read at once. Reading past the last value is
an `OUT OF DATA` error.

## Example
```text
10 READ X, Y, R
20 CIRCLE X, Y, R
30 DATA 128, 88, 50
```

*/
