/*!
# `INK <expression>`

## Purpose
Set the foreground colour for later drawing.

## Remarks
Colours are numbered 0 to 7. Only the low three bits are used.

## Example
```text
10 INK 2: CIRCLE 128, 88, 30
```

*/
