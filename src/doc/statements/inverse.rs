/*!
# `INVERSE <expression>`

## Purpose
Make drawing erase instead of set pixels.

## Remarks
With `INVERSE 1` plotted pixels are cleared to paper. With both `OVER 1`
and `INVERSE 1` pixels are left alone and only the attribute changes.

## Example
```text
10 PLOT 10,10: DRAW 100,0
20 INVERSE 1: PLOT 10,10: DRAW 50,0
```

*/
