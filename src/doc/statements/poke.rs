/*!
# `POKE <address>, <value>`

## Purpose
Write a byte of display memory.

## Remarks
Display memory starts at 16384. The value is reduced to a byte. Writes
past the end of the attributes are ignored.

## Example
```text
10 POKE 16384 + 6144, 2 * 8 + 7
```

*/
