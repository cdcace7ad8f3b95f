/*!
# `CIRCLE <x>, <y>, <radius>`

## Purpose
Draw a circle centred on `x,y`.

## Remarks
The circle is a polygon with sides about one pixel long, starting and
ending at the point directly right of the centre. Parts off the bottom
of the screen are dropped and parts off the sides wrap around.

## Example
```text
10 CIRCLE 128, 88, 60
```

*/
