/*!
# `OVER <expression>`

## Purpose
Combine drawing with what is already on the screen.

## Remarks
With `OVER 1` every plotted pixel is flipped, so drawing the same thing
twice removes it.

## Example
```text
10 OVER 1
20 CIRCLE 128, 88, 40: CIRCLE 128, 88, 40
```

*/
