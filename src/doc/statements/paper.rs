/*!
# `PAPER <expression>`

## Purpose
Set the background colour for later drawing.

## Remarks
Existing blocks keep their paper until something is drawn in them or the
screen is cleared with `CLS`.

## Example
```text
10 PAPER 1: CLS
```

*/
