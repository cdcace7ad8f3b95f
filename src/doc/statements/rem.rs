/*!
# `REM [<anything>]`

## Purpose
A remark that does nothing.

## Remarks
Everything up to the end of the line is ignored, colons included.
Put a `REM` last on a line, after any statements that should run.

## Example
```text
10 REM THE SUN
20 INK 6: CIRCLE 128, 88, 30: REM WITH RAYS: TO COME
```

*/
