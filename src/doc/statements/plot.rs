/*!
# `PLOT <x>, <y>`

## Purpose
Set one pixel.

## Remarks
The whole 8x8 block around the pixel takes the current attribute.
Coordinates are rounded towards zero and wrap at 256. A `y` past the
bottom of the screen draws nothing. The point becomes the start of the
next `DRAW`.

## Example
```text
10 PLOT 128, 88
```

*/
