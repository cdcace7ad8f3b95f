/*!
# Display Memory

The screen is 256 pixels wide and 192 high with `0,0` in the top left.
It lives in 6912 bytes starting at address 16384, which `PEEK` and
`POKE` reach directly.

## Bitmap
The first 6144 bytes hold one bit per pixel, eight pixels per byte with
the leftmost in the high bit. Rows are not stored in order. The address
of a pixel row is built from the bits of `y` like this:

```text
y7 y6 y2 y1 y0 y5 y4 y3 x7 x6 x5 x4 x3
```

so consecutive bytes in memory step through the screen in thirds, then
character rows, then pixel rows.

## Attributes
The last 768 bytes hold one attribute for each 8x8 block, in plain row
order. An attribute packs the colours of the whole block:

| Bits | Meaning |
|------|---------|
| 0-2 | Ink colour |
| 3-5 | Paper colour |
| 6 | Bright |
| 7 | Flash |

Plotting any pixel gives its whole block the current attribute, which
is how the famous colour clash happens.

## Colours
| Number | Colour |
|--------|--------|
| 0 | Black |
| 1 | Blue |
| 2 | Red |
| 3 | Magenta |
| 4 | Green |
| 5 | Cyan |
| 6 | Yellow |
| 7 | White |

Flashing blocks swap ink and paper every 32 frames.

*/
