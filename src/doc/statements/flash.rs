/*!
# `FLASH <expression>`

## Purpose
Make later drawing flash.

## Remarks
Blocks with the flash bit set swap ink and paper every 32 frames. Only
the lowest bit of the value is used.

## Example
```text
10 FLASH 1: INK 2
20 CIRCLE 128, 88, 20
```

*/
