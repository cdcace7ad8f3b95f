/*!
# `DRAW <dx>, <dy>`

## Purpose
Draw a line from the last point plotted, by an offset.

## Remarks
The end of the line becomes the new drawing position, so `DRAW`
statements chain. Lines are stepped along their longer axis one pixel at
a time.

## Example
```text
10 PLOT 50, 50
20 DRAW 100, 0: DRAW 0, 100: DRAW -100, 0: DRAW 0, -100
```

*/
