/*!
# `BRIGHT <expression>`

## Purpose
Select normal or bright colours for later drawing.

## Remarks
Only the lowest bit of the value is used. `BRIGHT 1` sets bit 6 of the
current attribute.

## Example
```text
10 INK 4: BRIGHT 1
20 PLOT 10,10
```

*/
