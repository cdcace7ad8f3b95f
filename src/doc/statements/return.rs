/*!
# `RETURN`

## Purpose
Return from a subroutine.

## Remarks
A `RETURN` without a `GOSUB` is a `RETURN WITHOUT GOSUB` error.

## Example
```text
10 GOSUB 100
20 STOP
100 CLS
110 RETURN
```

*/
