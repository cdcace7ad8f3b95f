/*!
# `NEXT <variable>`

## Purpose
End the body of a `FOR` loop.

## Remarks
The variable must be named. A `NEXT` for a variable without a running
loop is a `NEXT WITHOUT FOR` error.

## Example
```text
10 FOR I = 0 TO 255
20 PLOT I, 0
30 NEXT I
```

*/
