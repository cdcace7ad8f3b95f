/*!
# `CLS`

## Purpose
Clear the screen.

## Remarks
Every pixel is reset and every block takes the current attribute, so
`CLS` is how a new `PAPER` colour reaches the whole screen. The drawing
position returns to `0,0`.

## Example
```text
10 PAPER 0: INK 7: CLS
```

*/
